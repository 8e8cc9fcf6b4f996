// Gateway module for probes - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod traits;
mod types;
mod vertex;

// Public re-exports - the ONLY way to access probe functionality
pub use traits::Probe;
pub use types::{ProbeCheck, ProbeData, ProbeResult, ProbeTarget};
pub use vertex::VertexProbe;
