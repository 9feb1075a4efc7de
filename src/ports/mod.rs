//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by HTTP adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::ChatbotPort;
pub use outbound::{FaqStorePort, FaqWriterPort};
