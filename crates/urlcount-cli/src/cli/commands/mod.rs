//! CLI command handlers. Each command is in its own file.

mod count;
mod inspect;
mod normalize;
mod per_domain;
mod root_domain;

pub use count::run_count;
pub use inspect::run_inspect;
pub use normalize::run_normalize;
pub use per_domain::run_per_domain;
pub use root_domain::run_root_domain;
