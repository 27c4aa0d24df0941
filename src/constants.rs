//! Application constants and configuration

pub const BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMG_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_URL: &str = "https://image.tmdb.org/t/p/original";
pub const API_KEY_SIGNUP_URL: &str = "https://www.themoviedb.org/settings/api";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Movie Catalog";

/// Environment variable read at runtime and, via `option_env!`, at build time
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Values shipped in templates that mean "no key has been entered yet"
pub const API_KEY_SENTINELS: &[&str] = &["your api key", "YOUR_TMDB_API_KEY"];

/// Header gains its shadow once the page is scrolled past this offset
pub const SCROLL_SHADOW_THRESHOLD: f32 = 100.0;

/// Horizontal drag distance is multiplied by this when scrolling a row
pub const DRAG_SCROLL_FACTOR: f32 = 2.0;

pub const FADE_IN_DELAY_MS: u64 = 50;
pub const FADE_IN_DURATION_MS: u64 = 300;

pub const ERROR_MESSAGE: &str = "Unable to load movies. Please check your API key.";
pub const NO_OVERVIEW: &str = "No overview available.";
pub const NOT_AVAILABLE: &str = "N/A";
