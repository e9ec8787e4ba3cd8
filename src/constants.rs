//! Application-wide constants.
//!
//! This module defines the application name and the fixed reference values
//! shared between the BOM and drawing generators.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "CabinetDraft";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "cabinetdraft";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR: &str = "CabinetDraft";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "CABINETDRAFT_CONFIG_DIR";

/// Door height used to estimate edge banding length, independent of the
/// actual door height.
// TODO: derive from the tier body height once existing quotes no longer
// depend on the fixed estimate.
pub const EDGE_BAND_REFERENCE_HEIGHT_MM: f64 = 720.0;

/// Waste allowance multiplier applied to the sheet estimate.
pub const SHEET_WASTE_FACTOR: f64 = 1.15;

/// Vertical gap between the lower tier and the upper tier in the front view.
pub const UPPER_TIER_GAP_MM: f64 = 600.0;
