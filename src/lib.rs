//! Resume lens library

pub mod ai;
pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::engine::{AnalysisEngine, AnalysisInput};
pub use config::Config;
pub use error::{ResumeLensError, Result};
pub use report::{AnalysisReport, ReportSource};
