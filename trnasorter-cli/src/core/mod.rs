//! Run loop driving classification into a record store

pub mod sorter;

pub use sorter::{RunSummary, Sorter};
