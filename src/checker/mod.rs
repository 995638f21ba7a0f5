//! Directory-wide consistency checks: numbering, file names, links, orphans.

mod problem;
mod service;

pub use problem::{Category, CheckReport, Problem, Severity};
pub use service::ConsistencyChecker;
