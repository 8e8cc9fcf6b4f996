/// Runtime module for probe runs - Gateway

mod report;
mod runner;

pub use report::format_report;
pub use runner::{CheckOutcome, ProbeReport, ProbeRunner};
