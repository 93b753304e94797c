//! Shared color constants for the UI.

use egui::Color32;

/// Foreground of danger banners.
pub const DANGER_FG: Color32 = Color32::from_rgb(220, 53, 69);

/// Translucent fill behind danger banners, readable on light and dark themes.
pub const DANGER_BG: Color32 = Color32::from_rgba_premultiplied(60, 10, 14, 40);

/// Marker for users with admin privileges.
pub const ADMIN_BADGE: Color32 = Color32::from_rgb(255, 193, 7);
