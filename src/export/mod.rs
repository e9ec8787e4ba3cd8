//! Export functionality for BOMs and drawings.
//!
//! This module turns generator output into documents a workshop can use:
//! SVG views of a drawing and a markdown parts list.

pub mod bom_table;
pub mod svg;

pub use bom_table::generate_bom_table;
pub use svg::{escape_xml, render_drawing, RenderOptions, RenderedViews};
