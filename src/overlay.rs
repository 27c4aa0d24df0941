//! Details overlay controller

use crate::constants::NO_OVERVIEW;
use crate::surface::{OverlayFields, ViewSurface};
use crate::types::{ImageSize, MediaRecord};
use crate::ui::components::{format_rating, format_year};
use tracing::debug;

/// Ways the overlay can be dismissed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    /// Click on the dimmed area around the overlay
    Backdrop,
    Escape,
}

/// Build the overlay text for a record
pub fn overlay_fields(record: &MediaRecord) -> OverlayFields {
    OverlayFields {
        poster_url: ImageSize::W500.url(record.image_path().unwrap_or_default()),
        backdrop_url: record.backdrop().map(|path| ImageSize::Original.url(path)),
        title: record.display_title().to_string(),
        rating: format_rating(record.vote_average),
        year: format_year(record.release_date(), record.first_air_date()),
        overview: record.overview().unwrap_or(NO_OVERVIEW).to_string(),
    }
}

/// Populate the overlay from `record` and show it
pub fn open<S: ViewSurface + ?Sized>(surface: &mut S, record: &MediaRecord) {
    debug!(title = record.display_title(), "Opening details overlay");
    surface.set_overlay(overlay_fields(record));
    surface.set_overlay_visible(true);
    surface.set_page_scroll_locked(true);
}

/// Hide the overlay; its content is left in place
pub fn close<S: ViewSurface + ?Sized>(surface: &mut S) {
    surface.set_overlay_visible(false);
    surface.set_page_scroll_locked(false);
}
