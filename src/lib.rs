pub use crate::diagnostics::ReportError;

pub mod catalog;
pub mod cli;
pub mod diagnostics;
pub mod model;
pub mod render;
pub mod section;
