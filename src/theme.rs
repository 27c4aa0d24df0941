//! Centralized theme constants for Movie Catalog
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x14, 0x14, 0x14);
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x1f);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x2a);
pub const BG_HOVER: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const BG_HEADER_SCROLLED: Color32 = Color32::from_rgb(0x0b, 0x0b, 0x0b);

// =============================================================================
// COLORS - Accent (Red)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xe5, 0x09, 0x14);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6d, 0x6d, 0x6e);

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x2a);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x40, 0x40, 0x40);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const RATING: Color32 = Color32::from_rgb(0x46, 0xd3, 0x69);

// =============================================================================
// COLORS - Placeholder tiles
// =============================================================================
pub const PLACEHOLDER_FROM: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);
pub const PLACEHOLDER_TO: Color32 = Color32::from_rgb(0x76, 0x4b, 0xa2);

// =============================================================================
// COLORS - Buttons
// =============================================================================
// Default (gray) button
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46);

// Accent (red) button
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0xe5, 0x09, 0x14);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const HEADER_HEIGHT: f32 = 56.0;
pub const ROW_SIDE_MARGIN: f32 = 32.0;

// =============================================================================
// DIMENSIONS - Poster tiles (2:3)
// =============================================================================
pub const POSTER_REGULAR: (f32, f32) = (140.0, 210.0);
pub const POSTER_LARGE: (f32, f32) = (200.0, 300.0);

// =============================================================================
// DIMENSIONS - Overlay
// =============================================================================
pub const OVERLAY_WIDTH: f32 = 760.0;
pub const OVERLAY_POSTER: (f32, f32) = (220.0, 330.0);
pub const OVERLAY_BACKDROP_HEIGHT: f32 = 180.0;
pub const CLOSE_BUTTON_SIZE: f32 = 28.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = Color32::BLACK;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    visuals.window_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);
    visuals.window_corner_radius = egui::CornerRadius::same(RADIUS_LARGE as u8);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    // Flat, borderless widgets
    let widgets = &mut visuals.widgets;
    widgets.inactive.weak_bg_fill = BTN_DEFAULT;
    widgets.inactive.bg_stroke = egui::Stroke::NONE;
    widgets.inactive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY);
    widgets.hovered.weak_bg_fill = BG_HOVER;
    widgets.hovered.bg_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT);
    widgets.hovered.fg_stroke = egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY);
    widgets.active.weak_bg_fill = mix(BTN_DEFAULT, ACCENT, 0.3);
    widgets.active.bg_stroke = egui::Stroke::NONE;
    ctx.set_visuals(visuals);

    // Thin floating scroll bars over the rows
    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.button_padding = egui::vec2(14.0, 6.0);
        style.spacing.scroll = egui::style::ScrollStyle::floating();
        style.spacing.scroll.bar_width = 8.0;
    });
}

// =============================================================================
// HELPER - Modal frame
// =============================================================================
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent red button (for primary actions like OK)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Poster tile size in points
pub fn poster_dimensions(size: crate::types::PosterSize) -> egui::Vec2 {
    let (w, h) = match size {
        crate::types::PosterSize::Regular => POSTER_REGULAR,
        crate::types::PosterSize::Large => POSTER_LARGE,
    };
    egui::vec2(w, h)
}

/// Linear blend between two colors, `t` in 0..=1
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
