pub mod lead_gateway;
pub mod preview;
pub mod scout;

pub use lead_gateway::*;
pub use preview::*;
pub use scout::*;
