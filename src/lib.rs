//! CabinetDraft Library
//!
//! This library turns a structured built-in cabinet design into a bill of
//! materials, drawing coordinates for five views, and SVG renderings of those
//! views. Construction constants come from a persisted rule document.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod rules;
pub mod services;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use models::{BomResult, DrawingData, StructuredDesignData};
pub use rules::{RuleStore, Rules};
