//! Common types and data structures

use crate::constants::{BACKDROP_URL, IMG_URL};

/// One movie or TV show as returned by TMDB list endpoints.
///
/// Every field is optional and unknown fields are ignored. Empty strings are
/// treated the same as missing values by the accessors below.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct MediaRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl MediaRecord {
    /// Movies carry `title`, shows carry `name`
    pub fn display_title(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.name))
            .unwrap_or_default()
    }

    /// Poster path, falling back to the backdrop when no poster exists
    pub fn image_path(&self) -> Option<&str> {
        non_empty(&self.poster_path).or_else(|| non_empty(&self.backdrop_path))
    }

    pub fn backdrop(&self) -> Option<&str> {
        non_empty(&self.backdrop_path)
    }

    pub fn release_date(&self) -> Option<&str> {
        non_empty(&self.release_date)
    }

    pub fn first_air_date(&self) -> Option<&str> {
        non_empty(&self.first_air_date)
    }

    pub fn overview(&self) -> Option<&str> {
        non_empty(&self.overview)
    }
}

/// Paged list envelope; only `results` is used
#[derive(Debug, serde::Deserialize)]
pub struct ResultsEnvelope {
    pub results: Vec<MediaRecord>,
}

/// Image size segment of the TMDB image CDN
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    W500,
    Original,
}

impl ImageSize {
    pub fn url(self, path: &str) -> String {
        let base = match self {
            ImageSize::W500 => IMG_URL,
            ImageSize::Original => BACKDROP_URL,
        };
        format!("{}{}", base, path)
    }
}

/// Tile size for a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosterSize {
    Regular,
    Large,
}

/// The fixed set of catalog rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Trending,
    TopRated,
    Action,
    Comedy,
    Horror,
    Romance,
    Documentaries,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Trending,
        Category::TopRated,
        Category::Action,
        Category::Comedy,
        Category::Horror,
        Category::Romance,
        Category::Documentaries,
    ];

    /// Identifier of the container this category renders into
    pub fn container_id(self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::TopRated => "top-rated",
            Category::Action => "action",
            Category::Comedy => "comedy",
            Category::Horror => "horror",
            Category::Romance => "romance",
            Category::Documentaries => "documentaries",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Trending => "Trending Now",
            Category::TopRated => "Top Rated",
            Category::Action => "Action Movies",
            Category::Comedy => "Comedy Movies",
            Category::Horror => "Horror Movies",
            Category::Romance => "Romance Movies",
            Category::Documentaries => "Documentaries",
        }
    }

    pub fn poster_size(self) -> PosterSize {
        match self {
            Category::Trending => PosterSize::Large,
            _ => PosterSize::Regular,
        }
    }
}
