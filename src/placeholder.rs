//! Demo content shown when no TMDB API key is configured

use crate::constants::API_KEY_SIGNUP_URL;
use crate::surface::{ContainerContent, PlaceholderTile, ViewSurface};
use crate::types::Category;
use tracing::{info, warn};

pub const TILES_PER_CATEGORY: usize = 10;

pub const PLACEHOLDER_TITLES: [&str; 14] = [
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "Forrest Gump",
    "Inception",
    "The Matrix",
    "Goodfellas",
    "The Silence of the Lambs",
    "Saving Private Ryan",
    "Interstellar",
    "The Green Mile",
    "Parasite",
    "Gladiator",
];

/// Title of the `i`-th tile in the row at `category_index`
pub fn placeholder_title(category_index: usize, i: usize) -> &'static str {
    PLACEHOLDER_TITLES[(category_index + i) % PLACEHOLDER_TITLES.len()]
}

/// Log the missing-key notice once at startup
pub fn warn_missing_key() {
    warn!("No TMDB API key configured, showing placeholder catalog");
    info!(url = API_KEY_SIGNUP_URL, "Get your free API key");
}

/// Fill every category with synthetic tiles. Never touches the network.
pub fn load_placeholders<S: ViewSurface + ?Sized>(surface: &mut S) {
    for (category_index, category) in Category::ALL.into_iter().enumerate() {
        let tiles = (0..TILES_PER_CATEGORY)
            .map(|i| PlaceholderTile {
                title: placeholder_title(category_index, i).to_string(),
                size: category.poster_size(),
            })
            .collect();
        surface.set_container(category, ContainerContent::Placeholders(tiles));
    }
}

/// Advisory text for a clicked placeholder tile
pub fn demo_message(title: &str) -> String {
    format!(
        "Movie: {}\n\nTo see real movie data, please add your TMDB API key in settings.json\n\nGet your free API key from:\n{}",
        title, API_KEY_SIGNUP_URL
    )
}

/// Click handler for placeholder tiles
pub fn show_demo<S: ViewSurface + ?Sized>(surface: &mut S, title: &str) {
    surface.show_alert(demo_message(title));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Page;
    use crate::types::PosterSize;

    #[test]
    fn test_ten_tiles_in_every_category() {
        let mut page = Page::default();
        load_placeholders(&mut page);

        let total: usize = Category::ALL
            .iter()
            .map(|c| page.container(*c).len())
            .sum();
        assert_eq!(total, 70);
        for category in Category::ALL {
            assert!(matches!(
                page.container(category),
                ContainerContent::Placeholders(t) if t.len() == TILES_PER_CATEGORY
            ));
        }
    }

    #[test]
    fn test_titles_cycle_per_row() {
        let mut page = Page::default();
        load_placeholders(&mut page);

        let ContainerContent::Placeholders(trending) = page.container(Category::Trending) else {
            panic!("expected placeholders");
        };
        assert_eq!(trending[0].title, "The Shawshank Redemption");
        assert_eq!(trending[9].title, "Saving Private Ryan");
        assert_eq!(trending[0].size, PosterSize::Large);

        let ContainerContent::Placeholders(docs) = page.container(Category::Documentaries) else {
            panic!("expected placeholders");
        };
        // Row 6 starts at title 6 and wraps after "Gladiator"
        assert_eq!(docs[0].title, "The Matrix");
        assert_eq!(docs[7].title, "Gladiator");
        assert_eq!(docs[8].title, "The Shawshank Redemption");
        assert_eq!(docs[0].size, PosterSize::Regular);
    }

    #[test]
    fn test_click_raises_alert_synchronously() {
        let mut page = Page::default();
        show_demo(&mut page, "Parasite");
        let alert = page.alert.as_deref().unwrap();
        assert!(alert.starts_with("Movie: Parasite\n\n"));
        assert!(alert.ends_with("https://www.themoviedb.org/settings/api"));
        assert!(!page.overlay_visible);
    }
}
