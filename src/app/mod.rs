//! App module - contains the main application state and logic

mod modals;
mod posters;
mod views;

use crate::constants::*;
use crate::endpoints::tmdb_endpoints;
use crate::fetcher::{apply_outcome, spawn_category_fetches, CategoryOutcome};
use crate::interaction::Interaction;
use crate::placeholder;
use crate::renderer::render_error;
use crate::settings::{ApiKey, Settings};
use crate::surface::Page;
use crate::theme;
use crate::types::Category;
use eframe::egui;
use posters::PosterSlot;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// Poster images decoded off the UI thread, waiting for texture upload
type DecodedPosters = Arc<Mutex<Vec<(String, Option<egui::ColorImage>)>>>;

/// Where catalog content comes from for this session
#[derive(Debug)]
pub enum CatalogMode {
    Live(ApiKey),
    Placeholder,
}

impl CatalogMode {
    pub fn from_key(key: ApiKey) -> Self {
        if key.is_configured() {
            CatalogMode::Live(key)
        } else {
            CatalogMode::Placeholder
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CatalogMode::Placeholder)
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) page: Page,
    pub(crate) interaction: Interaction,
    pub(crate) mode: CatalogMode,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) client: reqwest::Client,
    // Category fetch results
    pub(crate) outcome_tx: Sender<CategoryOutcome>,
    pub(crate) outcome_rx: Receiver<CategoryOutcome>,
    pub(crate) pending_fetches: usize,
    pub(crate) catalog_started: bool,
    // Poster textures
    posters: HashMap<String, PosterSlot>,
    decoded_posters: DecodedPosters,
    poster_permits: Arc<tokio::sync::Semaphore>,
    // Row scroll state
    pub(crate) row_offsets: HashMap<Category, f32>,
    pub(crate) row_scroll_to: HashMap<Category, f32>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;
        let client = reqwest::Client::builder()
            .user_agent(format!("movie-catalog/{}", APP_VERSION))
            .build()?;

        let mode = CatalogMode::from_key(settings.api_key());
        info!(placeholder = mode.is_placeholder(), "Catalog mode selected");
        if mode.is_placeholder() {
            placeholder::warn_missing_key();
        }

        let (outcome_tx, outcome_rx) = mpsc::channel();

        Ok(Self {
            page: Page::default(),
            interaction: Interaction::default(),
            mode,
            runtime,
            client,
            outcome_tx,
            outcome_rx,
            pending_fetches: 0,
            catalog_started: false,
            posters: HashMap::new(),
            decoded_posters: Arc::new(Mutex::new(Vec::new())),
            poster_permits: Arc::new(tokio::sync::Semaphore::new(8)),
            row_offsets: HashMap::new(),
            row_scroll_to: HashMap::new(),
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        })
    }

    /// Fill every container, either from TMDB or with placeholders.
    /// Calling it again replaces container contents wholesale.
    pub fn start_catalog(&mut self, ctx: &egui::Context) {
        self.catalog_started = true;
        match &self.mode {
            CatalogMode::Placeholder => placeholder::load_placeholders(&mut self.page),
            CatalogMode::Live(key) => match tmdb_endpoints(key) {
                Ok(endpoints) => {
                    self.pending_fetches += endpoints.len();
                    let ctx = ctx.clone();
                    spawn_category_fetches(
                        self.runtime.handle(),
                        &self.client,
                        endpoints,
                        self.outcome_tx.clone(),
                        move || ctx.request_repaint(),
                    );
                }
                Err(e) => {
                    error!(error = %e, "Failed to build endpoint table");
                    for category in Category::ALL {
                        render_error(&mut self.page, category);
                    }
                }
            },
        }
    }

    /// Render every category result that has arrived since the last frame
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.pending_fetches = self.pending_fetches.saturating_sub(1);
            apply_outcome(&mut self.page, outcome);
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_key_selects_placeholder() {
        assert!(CatalogMode::from_key(ApiKey::new("your api key")).is_placeholder());
        assert!(CatalogMode::from_key(ApiKey::new("YOUR_TMDB_API_KEY")).is_placeholder());
        assert!(CatalogMode::from_key(ApiKey::default()).is_placeholder());
    }

    #[test]
    fn test_configured_key_selects_live() {
        let mode = CatalogMode::from_key(ApiKey::new("real-key"));
        assert!(matches!(mode, CatalogMode::Live(k) if k.as_str() == "real-key"));
    }
}
