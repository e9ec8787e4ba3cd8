//! Service layer for business logic.
//!
//! The generators are pure functions of a design and a [`Rules`](crate::rules::Rules)
//! snapshot: the BOM generator and the drawing generator share dimension
//! resolution and front splitting so their numbers always agree.

pub mod bom;
pub mod dimensions;
pub mod drawing;
pub mod fronts;

// Re-export commonly used types and functions
pub use bom::{cabinet_ref, generate_bom, summarize};
pub use dimensions::ResolvedDimensions;
pub use drawing::generate_drawing;
