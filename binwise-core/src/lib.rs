//! Core types and service wiring for the binwise waste disposal assistant.

/// Street address parsing and street name normalization.
pub mod address;
/// Item catalog and disposal rule lookups.
pub mod catalog;
/// Point-in-boundary checks for circles and polygons.
pub mod geo;
/// Domain models and identifiers shared by all crates.
pub mod model;
/// Storage port, error type, and in-memory store.
pub mod ports;
/// Registry of towns and their plugin bundles.
pub mod registry;
/// Selection of the most specific disposal rule for a location.
pub mod rules;
/// Expansion of zone schedules into dated pickups.
pub mod schedule;
/// High-level service facade used by clients.
pub mod service;
/// Matching of street addresses and coordinates to collection zones.
pub mod zone;

pub use address::*;
pub use catalog::*;
pub use geo::*;
pub use model::*;
pub use ports::*;
pub use registry::*;
pub use rules::*;
pub use schedule::*;
pub use service::*;
pub use zone::*;
