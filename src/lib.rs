#![cfg_attr(feature = "strict", deny(warnings))]

mod adt;
mod search;

pub mod puzzles;

////////////////////////////////////////////////////////////////////////////////

pub use adt::{
    ByKey, Container, ContainerError, ContainerKind, ContainerResult, Less, Natural, Order,
    PriorityQueue, Queue, Stack,
};

pub use search::{
    api::{bestfs_all, bestfs_first, bfs_all, bfs_first, dfs_all, dfs_first, hill_climb},
    best::{BestFirstSearcher, HillClimbSearcher},
    bfs::BfsSearcher,
    config::ConfigError,
    control::{GoalFn, SuccessorFn},
    dfs::DfsSearcher,
    log::SearchLog,
    searcher::{CheckInfo, CollectInfo, Searcher},
    trace::Trace,
    SearchConfig, SearchConfigBuilder,
};
