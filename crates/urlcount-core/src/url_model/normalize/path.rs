//! Path normalization: segment re-encoding and dot-segment removal.

use crate::url_model::percent;

/// Returns the normalized path, or `None` when nothing is left of it.
pub(super) fn normalize_path(path: &str) -> Option<String> {
    let segments: Vec<String> = path
        .split('/')
        .map(|segment| percent::encode(&percent::decode(segment)))
        .collect();

    let resolved = remove_dot_segments(segments);
    match resolved.as_slice() {
        [] => None,
        [only] if only.is_empty() => path.starts_with('/').then(|| "/".to_string()),
        _ => Some(resolved.join("/")),
    }
}

/// Resolves `.` and `..` left to right.
///
/// A `..` that would climb above the root marker (the empty segment produced
/// by a leading `/`) is dropped instead of popping the marker.
fn remove_dot_segments(segments: Vec<String>) -> Vec<String> {
    let mut output: Vec<String> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment.as_str() {
            "." => {}
            ".." => {
                let at_root = matches!(output.as_slice(), [only] if only.is_empty());
                if !at_root {
                    output.pop();
                }
            }
            _ => output.push(segment),
        }
    }
    output
}
