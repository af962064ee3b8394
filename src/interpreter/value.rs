/// The `Value` enum and its conversions, rendering and type checks.
pub mod core;
