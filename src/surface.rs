//! View surface - the page model the catalog logic writes into
//!
//! Fetching, rendering and overlay code never touch egui directly. They write
//! through [`ViewSurface`], and the window draws whatever the [`Page`] holds.

use crate::types::{Category, MediaRecord, PosterSize};
use std::collections::HashMap;

/// A poster tile inside a category row
#[derive(Clone, Debug, PartialEq)]
pub struct PosterTile {
    pub record: MediaRecord,
    pub image_url: String,
    pub alt: String,
    pub size: PosterSize,
}

/// A synthetic tile shown when no API key is configured
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderTile {
    pub title: String,
    pub size: PosterSize,
}

/// Everything a category container can hold
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContainerContent {
    #[default]
    Empty,
    Posters(Vec<PosterTile>),
    Placeholders(Vec<PlaceholderTile>),
    Error(String),
}

impl ContainerContent {
    /// Number of child elements in the container
    pub fn len(&self) -> usize {
        match self {
            ContainerContent::Empty => 0,
            ContainerContent::Posters(tiles) => tiles.len(),
            ContainerContent::Placeholders(tiles) => tiles.len(),
            ContainerContent::Error(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Text and images shown by the details overlay
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayFields {
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub title: String,
    pub rating: String,
    pub year: String,
    pub overview: String,
}

/// Write side of the page
pub trait ViewSurface {
    /// Replace a container's content wholesale
    fn set_container(&mut self, category: Category, content: ContainerContent);
    fn set_overlay(&mut self, fields: OverlayFields);
    fn set_overlay_visible(&mut self, visible: bool);
    fn set_page_scroll_locked(&mut self, locked: bool);
    fn set_header_shadow(&mut self, on: bool);
    /// Raise a blocking advisory dialog
    fn show_alert(&mut self, message: String);
}

/// In-memory page state drawn by the window
#[derive(Debug, Default)]
pub struct Page {
    pub containers: HashMap<Category, ContainerContent>,
    pub overlay: OverlayFields,
    pub overlay_visible: bool,
    pub scroll_locked: bool,
    pub header_shadow: bool,
    pub alert: Option<String>,
}

impl Page {
    pub fn container(&self, category: Category) -> &ContainerContent {
        static EMPTY: ContainerContent = ContainerContent::Empty;
        self.containers.get(&category).unwrap_or(&EMPTY)
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl ViewSurface for Page {
    fn set_container(&mut self, category: Category, content: ContainerContent) {
        self.containers.insert(category, content);
    }

    fn set_overlay(&mut self, fields: OverlayFields) {
        self.overlay = fields;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_header_shadow(&mut self, on: bool) {
        self.header_shadow = on;
    }

    fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
    }
}
