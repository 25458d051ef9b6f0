pub mod api;
pub mod best;
pub mod bfs;
pub mod config;
pub mod control;
pub mod dfs;
pub mod log;
pub mod searcher;
pub mod trace;

mod explore;
mod frontier;

////////////////////////////////////////////////////////////////////////////////

pub use config::{Config as SearchConfig, ConfigBuilder as SearchConfigBuilder};
