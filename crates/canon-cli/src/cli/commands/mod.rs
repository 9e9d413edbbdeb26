//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod link_tag;
mod normalize;
mod redirects;
mod sitemap;

pub use check::run_check;
pub use completions::run_completions;
pub use link_tag::run_link_tag;
pub use normalize::run_normalize;
pub use redirects::run_redirects;
pub use sitemap::run_sitemap;
