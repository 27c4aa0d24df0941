//! Turns fetched records into container content

use crate::constants::{ERROR_MESSAGE, FADE_IN_DELAY_MS, FADE_IN_DURATION_MS};
use crate::surface::{ContainerContent, PosterTile, ViewSurface};
use crate::types::{Category, ImageSize, MediaRecord, PosterSize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Replace the container with one tile per record that has an image.
///
/// Records with neither a poster nor a backdrop are skipped.
pub fn render_posters<S: ViewSurface + ?Sized>(
    surface: &mut S,
    category: Category,
    records: Vec<MediaRecord>,
    size: PosterSize,
) {
    let total = records.len();
    let tiles: Vec<PosterTile> = records
        .into_iter()
        .filter_map(|record| {
            let image_url = ImageSize::W500.url(record.image_path()?);
            let alt = record.display_title().to_string();
            Some(PosterTile {
                record,
                image_url,
                alt,
                size,
            })
        })
        .collect();

    debug!(
        category = category.container_id(),
        rendered = tiles.len(),
        skipped = total - tiles.len(),
        "Rendered posters"
    );
    surface.set_container(category, ContainerContent::Posters(tiles));
}

/// Replace the container with the fixed advisory message
pub fn render_error<S: ViewSurface + ?Sized>(surface: &mut S, category: Category) {
    surface.set_container(category, ContainerContent::Error(ERROR_MESSAGE.to_string()));
}

/// Fade-in transition started when a poster image finishes loading
#[derive(Clone, Copy, Debug)]
pub struct FadeIn {
    loaded_at: Instant,
}

impl FadeIn {
    const DELAY: Duration = Duration::from_millis(FADE_IN_DELAY_MS);
    const DURATION: Duration = Duration::from_millis(FADE_IN_DURATION_MS);

    pub fn start(loaded_at: Instant) -> Self {
        Self { loaded_at }
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        Self::opacity_after(now.saturating_duration_since(self.loaded_at))
    }

    /// Hidden for the initial delay, then a linear ramp to fully opaque
    pub fn opacity_after(elapsed: Duration) -> f32 {
        if elapsed < Self::DELAY {
            return 0.0;
        }
        let t = (elapsed - Self::DELAY).as_secs_f32() / Self::DURATION.as_secs_f32();
        t.clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.loaded_at) >= Self::DELAY + Self::DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Page;

    fn record(title: &str, poster: Option<&str>, backdrop: Option<&str>) -> MediaRecord {
        MediaRecord {
            title: Some(title.to_string()),
            poster_path: poster.map(str::to_string),
            backdrop_path: backdrop.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_skips_records_without_images() {
        let mut page = Page::default();
        let records = vec![
            record("A", Some("/a.jpg"), None),
            record("B", None, None),
            record("C", None, Some("/c.jpg")),
            record("D", Some(""), Some("")),
        ];
        render_posters(&mut page, Category::Action, records, PosterSize::Regular);

        let ContainerContent::Posters(tiles) = page.container(Category::Action) else {
            panic!("expected posters");
        };
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].image_url, "https://image.tmdb.org/t/p/w500/a.jpg");
        assert_eq!(tiles[1].image_url, "https://image.tmdb.org/t/p/w500/c.jpg");
        assert_eq!(tiles[1].alt, "C");
    }

    #[test]
    fn test_child_count_matches_for_every_category() {
        let mut page = Page::default();
        for category in Category::ALL {
            let records = vec![
                record("x", Some("/x.jpg"), None),
                record("y", None, None),
                record("z", None, Some("/z.jpg")),
            ];
            render_posters(&mut page, category, records, category.poster_size());
        }
        for category in Category::ALL {
            assert_eq!(page.container(category).len(), 2);
        }
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut page = Page::default();
        render_error(&mut page, Category::Comedy);
        render_posters(
            &mut page,
            Category::Comedy,
            vec![record("A", Some("/a.jpg"), None)],
            PosterSize::Regular,
        );
        assert!(matches!(page.container(Category::Comedy), ContainerContent::Posters(t) if t.len() == 1));

        render_posters(&mut page, Category::Comedy, Vec::new(), PosterSize::Regular);
        assert!(page.container(Category::Comedy).is_empty());
    }

    #[test]
    fn test_size_flag_is_carried() {
        let mut page = Page::default();
        render_posters(
            &mut page,
            Category::Trending,
            vec![record("A", Some("/a.jpg"), None)],
            PosterSize::Large,
        );
        let ContainerContent::Posters(tiles) = page.container(Category::Trending) else {
            panic!("expected posters");
        };
        assert_eq!(tiles[0].size, PosterSize::Large);
    }

    #[test]
    fn test_error_message_is_exact() {
        let mut page = Page::default();
        render_error(&mut page, Category::Horror);
        assert_eq!(
            page.container(Category::Horror),
            &ContainerContent::Error("Unable to load movies. Please check your API key.".to_string())
        );
    }

    #[test]
    fn test_fade_in_timing() {
        assert_eq!(FadeIn::opacity_after(Duration::ZERO), 0.0);
        assert_eq!(FadeIn::opacity_after(Duration::from_millis(49)), 0.0);
        let mid = FadeIn::opacity_after(Duration::from_millis(200));
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(FadeIn::opacity_after(Duration::from_millis(350)), 1.0);
        assert_eq!(FadeIn::opacity_after(Duration::from_secs(5)), 1.0);

        let start = Instant::now();
        let fade = FadeIn::start(start);
        assert!(!fade.is_done(start));
        assert!(fade.is_done(start + Duration::from_millis(400)));
    }
}
