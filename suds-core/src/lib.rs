//! Core types and service wiring for the suds laundry delegation demo.

/// Domain models shared by all laundromat providers.
pub mod model;
/// The requester side: patrons handing laundry to a provider.
pub mod patron;
/// Registry and helpers for plugging laundromat providers into the service.
pub mod plugin;
/// Traits describing the provider interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use model::*;
pub use patron::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
