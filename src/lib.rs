pub use crate::diagnostics::ReblessError;

pub mod cli;
pub mod conventions;
pub mod diagnostics;
pub mod engine;
pub mod outcome;
pub mod report;
pub mod rewrite;
