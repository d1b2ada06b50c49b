//! axis-rs: axis computation core for mobile chart components.
//!
//! This crate provides the host-agnostic math behind line/bar/pie chart
//! axes: vertical bounds with "nice" grid values, zero-line placement, and
//! horizontal label thinning for calendar-shaped data. Rendering, layout,
//! and styling are the host's job; the host hands in a series plus layout
//! constraints and gets back bounds and visibility decisions.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisEngine, AxisEngineConfig};
pub use error::{AxisError, AxisResult};
