//! # aisc_sections - AISC Section Property Database
//!
//! `aisc_sections` is a static reference dataset: the geometric and
//! structural properties of AISC double-angle (2L) steel sections, plus the
//! enumerated catalog of valid section designations. It is a data-definition
//! library, not a computational engine — calculation code (stress checks,
//! capacity modules) consumes this catalog by exact-designation lookup.
//!
//! ## Design Philosophy
//!
//! - **Immutable**: the catalog is built once and never mutated; it can be
//!   shared across any number of concurrent readers without locking
//! - **Exact**: designation strings are the identity — case-sensitive,
//!   whitespace-sensitive, orientation suffixes (`LLBB`/`SLBB`) preserved
//!   verbatim
//! - **Loud failures**: unknown designations and data-integrity defects are
//!   structured errors, never silently-defaulted properties
//! - **JSON-First**: all public types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use aisc_sections::double_angles;
//!
//! let db = double_angles();
//! let shape = db.lookup("2L6X6X1/2").unwrap();
//!
//! assert_eq!(shape.label, "2L6X6X1/2");
//! assert!(shape.area_in2 > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`double_angle`] - Record schema, catalog, CSV loader, built-in table
//! - [`names`] - Canonical registry of all valid 2L designations
//! - [`errors`] - Structured error types
//!
//! ## Units
//!
//! All dimensional fields are in US customary units (inches, in², in³, in⁴,
//! lb/ft) per AISC convention. Downstream code depends on this; nothing here
//! converts to SI.

pub mod double_angle;
pub mod errors;
pub mod names;

// Re-export commonly used types at crate root for convenience
pub use double_angle::{
    builtin_double_angles, double_angles, AngleOrientation, DataIntegrityIssue, DoubleAngle,
    DoubleAngleDb,
};
pub use errors::{SectionError, SectionResult};
pub use names::ALL_DOUBLE_ANGLE_NAMES;
