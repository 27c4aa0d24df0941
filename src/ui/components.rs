//! Reusable UI components
//!
//! Text formatting for the details overlay and small painters shared by the
//! row and overlay views.

use crate::constants::NOT_AVAILABLE;
use crate::theme;
use eframe::egui;

/// Render a rating as shown in the overlay, one decimal place.
///
/// Halves round away from zero (7.25 → 7.3).
/// A zero rating means TMDB has no votes yet and is shown as "N/A".
pub fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average.filter(|v| *v != 0.0 && v.is_finite()) {
        Some(v) => format!("⭐ {:.1}", (v * 10.0).round() / 10.0),
        None => format!("⭐ {}", NOT_AVAILABLE),
    }
}

/// Year portion of the first available date, returning "N/A" otherwise
pub fn format_year(release_date: Option<&str>, first_air_date: Option<&str>) -> String {
    release_date
        .or(first_air_date)
        .and_then(|date| date.split('-').next())
        .filter(|year| !year.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Fill `rect` with a 135° two-stop gradient (top-left → bottom-right)
pub fn gradient_block(painter: &egui::Painter, rect: egui::Rect, from: egui::Color32, to: egui::Color32) {
    let mid = theme::mix(from, to, 0.5);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), from);
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// UV rect that crops an image of `image` size to fill `target` without
/// stretching, keeping the center
pub fn cover_uv(image: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let visible = target_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let visible = image_aspect / target_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

/// Centered, wrapped label painted inside `rect`
pub fn centered_text(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    size: f32,
    color: egui::Color32,
) {
    let galley = painter.layout(
        text.to_string(),
        egui::FontId::proportional(size),
        color,
        rect.width(),
    );
    let pos = rect.center() - galley.size() / 2.0;
    painter.galley(pos, galley, color);
}

/// Square close button with hover highlight. Returns the response.
pub fn close_button(ui: &mut egui::Ui, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    let color = if response.hovered() {
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        theme::STATUS_ERROR
    } else {
        theme::TEXT_MUTED
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        egui_phosphor::regular::X,
        egui::FontId::proportional(size * 0.6),
        color,
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        assert_eq!(format_rating(Some(7.95)), "⭐ 8.0");
        assert_eq!(format_rating(Some(6.0)), "⭐ 6.0");
        assert_eq!(format_rating(Some(8.438)), "⭐ 8.4");
    }

    #[test]
    fn test_rating_ties_round_up() {
        assert_eq!(format_rating(Some(7.25)), "⭐ 7.3");
        assert_eq!(format_rating(Some(6.25)), "⭐ 6.3");
        assert_eq!(format_rating(Some(8.75)), "⭐ 8.8");
    }

    #[test]
    fn test_rating_missing_or_zero() {
        assert_eq!(format_rating(None), "⭐ N/A");
        assert_eq!(format_rating(Some(0.0)), "⭐ N/A");
    }

    #[test]
    fn test_year_from_release_date() {
        assert_eq!(format_year(Some("1999-03-31"), None), "1999");
        assert_eq!(format_year(Some("1999-03-31"), Some("2005-01-01")), "1999");
    }

    #[test]
    fn test_year_falls_back_to_first_air_date() {
        assert_eq!(format_year(None, Some("2008-01-20")), "2008");
    }

    #[test]
    fn test_year_missing() {
        assert_eq!(format_year(None, None), "N/A");
        assert_eq!(format_year(Some("-05-01"), None), "N/A");
    }

    #[test]
    fn test_cover_uv_crops_wide_image() {
        let uv = cover_uv(egui::vec2(400.0, 100.0), egui::vec2(100.0, 100.0));
        assert!((uv.min.x - 0.375).abs() < 1e-6);
        assert!((uv.max.x - 0.625).abs() < 1e-6);
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);
    }

    #[test]
    fn test_cover_uv_matching_aspect_is_full() {
        let uv = cover_uv(egui::vec2(500.0, 750.0), egui::vec2(140.0, 210.0));
        assert!(uv.min.x.abs() < 1e-6 && uv.min.y.abs() < 1e-6);
        assert!((uv.max.x - 1.0).abs() < 1e-6 && (uv.max.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_year_without_separator() {
        assert_eq!(format_year(Some("2021"), None), "2021");
    }
}
