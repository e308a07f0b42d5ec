//! Session store abstraction and its backends.

/// Volatile in-memory backend, the only one shipped.
pub mod memory;
/// Backend-agnostic store trait and result types.
pub mod store;
