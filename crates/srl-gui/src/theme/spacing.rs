//! Layout constants, in logical pixels.

// =============================================================================
// GAPS
// =============================================================================

/// Icon to label, badge padding.
pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
/// Default gap between sections.
pub const SPACING_MD: f32 = 16.0;
/// Panel padding.
pub const SPACING_LG: f32 = 24.0;
/// Window margin.
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Buttons, inputs and code blocks.
pub const BORDER_RADIUS_SM: f32 = 4.0;
/// The detail card.
pub const BORDER_RADIUS_MD: f32 = 6.0;
/// Pills.
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;
/// Outline of the selected category.
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// WIDTHS
// =============================================================================

/// Student ID input.
pub const SEARCH_WIDTH: f32 = 420.0;

/// Detail panel content.
pub const DETAIL_MAX_WIDTH: f32 = 960.0;
