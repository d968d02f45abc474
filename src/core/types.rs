//! Core type definitions used throughout the codebase

/// Wall-clock instant as milliseconds since the Unix epoch
pub type WallMillis = u64;

/// Simulated duration in seconds
pub type Seconds = f64;
