pub mod app;
pub mod cli;
pub mod constants;
pub mod probe;
pub mod runtime;
pub mod utils;

pub use app::{load_config, Config};
pub use probe::{Probe, ProbeData, ProbeResult, ProbeTarget, VertexProbe};
pub use runtime::{format_report, ProbeReport, ProbeRunner};
pub use utils::ProbeError;
