//! # unitconv
//!
//! **Unit conversion for temperature, distance, speed and pressure**
//!
//! Resolves user-supplied unit names (including short aliases, case-insensitive) to
//! canonical units, checks that both sides belong to the same category, and converts
//! single values or whole batches with results rounded to six decimal places.
//!
//! ## Quick Start
//!
//! ```rust
//! use unitconv::{ConvResult, Engine};
//!
//! fn main() -> ConvResult<()> {
//!     let engine = Engine::new();
//!
//!     let result = engine.convert(100.0, "miles", "km")?;
//!     assert_eq!(result.result, 160.9344);
//!
//!     let batch = engine.convert_batch_str("32,50,100", "F", "celsius")?;
//!     assert_eq!(batch.results(), vec![0.0, 10.0, 37.777778]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Categories
//!
//! - **Temperature** converts with closed-form formulas (the scales have offsets).
//! - **Distance**, **speed** and **pressure** scale linearly through a base unit:
//!   meters, meters per second and hectopascals.
//!
//! No physical plausibility checks are made: temperatures below absolute zero and
//! negative distances convert like any other value.

pub mod batch;
pub mod convert;
pub mod engine;
pub mod error;
pub mod registry;
pub mod resource_limits;
pub mod response;
pub mod units;

pub use engine::Engine;
pub use error::ConversionError;
pub use registry::{UnitRegistry, REGISTRY};
pub use resource_limits::ResourceLimits;
pub use response::{
    round_result, BatchEntry, BatchResult, ConversionResult, UnitListing, RESULT_PRECISION,
};
pub use units::{Category, Scale, Unit};

/// Result type for conversion operations
pub type ConvResult<T> = Result<T, ConversionError>;
