//! Parsing of design documents.
//!
//! This module reads structured design JSON and normalizes loosely typed
//! cabinet modules into the canonical model.

pub mod design_json;

// Re-export commonly used functions
pub use design_json::{load_design, normalize_design, parse_design_str, ParsedDesign};
