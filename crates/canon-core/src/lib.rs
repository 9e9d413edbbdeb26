pub mod config;
pub mod logging;

pub mod canonical;
pub mod diagnostics;
pub mod legacy;
pub mod markup;
pub mod sitemap;
