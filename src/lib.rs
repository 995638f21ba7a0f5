pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod document;
pub mod error;
pub mod filesystem;
pub mod lister;
pub mod output;
pub mod project;
pub mod scanner;
pub mod templates;
pub mod validator;

pub use error::{Result, SpecsError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PROBLEMS_FOUND: i32 = 1;
pub const EXIT_USAGE_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
