//! Page interaction state: header shadow, row dragging, overlay dismissal

use crate::constants::{DRAG_SCROLL_FACTOR, SCROLL_SHADOW_THRESHOLD};
use crate::overlay::{self, DismissTrigger};
use crate::surface::ViewSurface;
use crate::types::Category;
use std::collections::HashMap;
use tracing::trace;

/// Tracks the page's vertical scroll to toggle the header shadow
#[derive(Debug, Default)]
pub struct ScrollShadow {
    scrolled: bool,
}

impl ScrollShadow {
    /// Record a new offset. Returns true when the shadow state flipped.
    pub fn update(&mut self, offset: f32) -> bool {
        let scrolled = offset > SCROLL_SHADOW_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Drag gesture on one horizontal row
#[derive(Debug, Default)]
pub struct DragScroll {
    engaged: bool,
    start_x: f32,
    start_scroll: f32,
}

impl DragScroll {
    pub fn press(&mut self, x: f32, scroll_left: f32) {
        self.engaged = true;
        self.start_x = x;
        self.start_scroll = scroll_left;
    }

    /// New horizontal offset for the row, or None when not dragging
    pub fn drag(&self, x: f32) -> Option<f32> {
        if !self.engaged {
            return None;
        }
        let walk = (x - self.start_x) * DRAG_SCROLL_FACTOR;
        Some((self.start_scroll - walk).max(0.0))
    }

    /// Pointer released or left the row
    pub fn release(&mut self) {
        self.engaged = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// Owner of all page-session interaction state
#[derive(Debug, Default)]
pub struct Interaction {
    scroll: ScrollShadow,
    rows: HashMap<Category, DragScroll>,
}

impl Interaction {
    pub fn on_scroll<S: ViewSurface + ?Sized>(&mut self, surface: &mut S, offset: f32) {
        if self.scroll.update(offset) {
            surface.set_header_shadow(self.scroll.is_scrolled());
        }
    }

    pub fn drag_start(&mut self, row: Category, x: f32, scroll_left: f32) {
        self.rows.entry(row).or_default().press(x, scroll_left);
    }

    pub fn drag_move(&self, row: Category, x: f32) -> Option<f32> {
        self.rows.get(&row).and_then(|drag| drag.drag(x))
    }

    pub fn drag_end(&mut self, row: Category) {
        if let Some(drag) = self.rows.get_mut(&row) {
            drag.release();
        }
    }

    pub fn is_dragging(&self, row: Category) -> bool {
        self.rows.get(&row).is_some_and(DragScroll::is_engaged)
    }

    /// Every dismissal path ends in the same close operation
    pub fn dismiss<S: ViewSurface + ?Sized>(&mut self, surface: &mut S, trigger: DismissTrigger) {
        trace!(?trigger, "Overlay dismissed");
        overlay::close(surface);
    }

    /// Clicks inside the overlay content never reach the backdrop
    pub fn backdrop_click<S: ViewSurface + ?Sized>(&mut self, surface: &mut S, on_content: bool) {
        if !on_content {
            self.dismiss(surface, DismissTrigger::Backdrop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Page;
    use crate::types::MediaRecord;

    #[test]
    fn test_scroll_threshold_is_strict() {
        let mut page = Page::default();
        let mut interaction = Interaction::default();

        interaction.on_scroll(&mut page, 100.0);
        assert!(!page.header_shadow);
        interaction.on_scroll(&mut page, 100.5);
        assert!(page.header_shadow);
        interaction.on_scroll(&mut page, 250.0);
        assert!(page.header_shadow);
        interaction.on_scroll(&mut page, 0.0);
        assert!(!page.header_shadow);
    }

    #[test]
    fn test_shadow_reports_only_changes() {
        let mut shadow = ScrollShadow::default();
        assert!(!shadow.update(50.0));
        assert!(shadow.update(150.0));
        assert!(!shadow.update(300.0));
        assert!(shadow.is_scrolled());
        assert!(shadow.update(10.0));
    }

    #[test]
    fn test_drag_amplifies_pointer_delta() {
        let mut interaction = Interaction::default();
        interaction.drag_start(Category::Action, 100.0, 0.0);
        assert_eq!(interaction.drag_move(Category::Action, 70.0), Some(60.0));
    }

    #[test]
    fn test_drag_from_existing_offset() {
        let mut drag = DragScroll::default();
        drag.press(200.0, 300.0);
        assert_eq!(drag.drag(250.0), Some(200.0));
        assert_eq!(drag.drag(150.0), Some(400.0));
        // Never scrolls past the start of the row
        assert_eq!(drag.drag(500.0), Some(0.0));
    }

    #[test]
    fn test_drag_inert_until_pressed_and_after_release() {
        let mut interaction = Interaction::default();
        assert_eq!(interaction.drag_move(Category::Comedy, 10.0), None);

        interaction.drag_start(Category::Comedy, 50.0, 0.0);
        assert!(interaction.is_dragging(Category::Comedy));
        interaction.drag_end(Category::Comedy);
        assert!(!interaction.is_dragging(Category::Comedy));
        assert_eq!(interaction.drag_move(Category::Comedy, 10.0), None);
    }

    #[test]
    fn test_rows_drag_independently() {
        let mut interaction = Interaction::default();
        interaction.drag_start(Category::Horror, 100.0, 0.0);
        assert_eq!(interaction.drag_move(Category::Romance, 70.0), None);
        assert!(!interaction.is_dragging(Category::Romance));
    }

    #[test]
    fn test_every_dismiss_path_closes_overlay() {
        let record = MediaRecord {
            title: Some("Inception".to_string()),
            ..Default::default()
        };
        for trigger in [
            DismissTrigger::CloseButton,
            DismissTrigger::Backdrop,
            DismissTrigger::Escape,
        ] {
            let mut page = Page::default();
            let mut interaction = Interaction::default();
            overlay::open(&mut page, &record);
            interaction.dismiss(&mut page, trigger);
            assert!(!page.overlay_visible, "{:?}", trigger);
            assert!(!page.scroll_locked, "{:?}", trigger);
        }
    }

    #[test]
    fn test_click_on_content_keeps_overlay() {
        let mut page = Page::default();
        let mut interaction = Interaction::default();
        overlay::open(&mut page, &MediaRecord::default());

        interaction.backdrop_click(&mut page, true);
        assert!(page.overlay_visible);
        interaction.backdrop_click(&mut page, false);
        assert!(!page.overlay_visible);
    }

    #[test]
    fn test_escape_without_overlay_is_harmless() {
        let mut page = Page::default();
        let mut interaction = Interaction::default();
        interaction.dismiss(&mut page, DismissTrigger::Escape);
        assert!(!page.overlay_visible);
    }
}
