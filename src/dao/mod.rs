/// Flat-file JSON store backend.
pub mod json_store;
/// Database model definitions shared across layers.
pub mod models;
/// Durable store abstraction consumed by the core.
pub mod store;
/// Storage error types shared by store backends.
pub mod storage;
/// In-memory store double for unit tests.
#[cfg(test)]
pub mod testing;
/// Rate-limited client for the external trivia question source.
pub mod trivia_source;
