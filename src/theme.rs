//! Centralized theme constants for cells, separators and headers
//! All colors and sizes used by the painting code reference these

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_HOVER: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x22); // subtle hover
pub const BG_PRESSED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Separators & accessories
// =============================================================================
pub const SEPARATOR: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const ACCESSORY: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500
pub const ACCESSORY_CHECK: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// TYPOGRAPHY - Font sizes
// =============================================================================
pub const FONT_TITLE: f32 = 14.0;
pub const FONT_SUBTITLE: f32 = 12.0;
pub const FONT_SECTION: f32 = 11.0;
pub const FONT_ACCESSORY: f32 = 14.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const ROW_HEIGHT: f32 = 36.0;
pub const SEPARATOR_THICKNESS: f32 = 1.0;
pub const CELL_INNER_MARGIN: f32 = 12.0;
pub const IMAGE_TEXT_GAP: f32 = 10.0;
pub const TITLE_SUBTITLE_GAP: f32 = 2.0;
pub const SECTION_LABEL_PAD: f32 = 8.0;
