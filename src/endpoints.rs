//! Category → request URL table

use crate::constants::BASE_URL;
use crate::settings::ApiKey;
use crate::types::Category;
use reqwest::Url;

impl Category {
    /// API path and filter parameters for this row
    fn query(self) -> (&'static str, Option<&'static str>) {
        match self {
            Category::Trending => ("/trending/all/week", None),
            Category::TopRated => ("/movie/top_rated", None),
            Category::Action => ("/discover/movie", Some("28")),
            Category::Comedy => ("/discover/movie", Some("35")),
            Category::Horror => ("/discover/movie", Some("27")),
            Category::Romance => ("/discover/movie", Some("10749")),
            Category::Documentaries => ("/discover/movie", Some("99")),
        }
    }
}

/// A category bound to its fully-qualified request URL
#[derive(Clone, Debug)]
pub struct Endpoint {
    pub category: Category,
    pub url: Url,
}

impl Endpoint {
    pub fn new(base: &str, key: &ApiKey, category: Category) -> Result<Self, url::ParseError> {
        let (path, genres) = category.query();
        let mut params = vec![("api_key", key.as_str())];
        if let Some(genres) = genres {
            params.push(("with_genres", genres));
        }
        let url = Url::parse_with_params(&format!("{}{}", base, path), &params)?;
        Ok(Self { category, url })
    }

    /// URL with the key stripped, for log lines
    pub fn redacted(&self) -> String {
        format!("{}{}", self.url.origin().ascii_serialization(), self.url.path())
    }
}

/// Build the full endpoint table for the given base URL
pub fn endpoint_table(base: &str, key: &ApiKey) -> Result<Vec<Endpoint>, url::ParseError> {
    Category::ALL
        .iter()
        .map(|&category| Endpoint::new(base, key, category))
        .collect()
}

/// Endpoint table against the public TMDB API
pub fn tmdb_endpoints(key: &ApiKey) -> Result<Vec<Endpoint>, url::ParseError> {
    endpoint_table(BASE_URL, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_category() {
        let table = tmdb_endpoints(&ApiKey::new("k3y")).unwrap();
        assert_eq!(table.len(), 7);
        for (endpoint, category) in table.iter().zip(Category::ALL) {
            assert_eq!(endpoint.category, category);
            assert!(endpoint.url.as_str().starts_with("https://api.themoviedb.org/3/"));
            assert!(endpoint.url.query().unwrap().contains("api_key=k3y"));
        }
    }

    #[test]
    fn test_genre_filters() {
        let key = ApiKey::new("k");
        let url = |c| Endpoint::new(BASE_URL, &key, c).unwrap().url.to_string();
        assert_eq!(
            url(Category::Trending),
            "https://api.themoviedb.org/3/trending/all/week?api_key=k"
        );
        assert_eq!(
            url(Category::TopRated),
            "https://api.themoviedb.org/3/movie/top_rated?api_key=k"
        );
        assert_eq!(
            url(Category::Romance),
            "https://api.themoviedb.org/3/discover/movie?api_key=k&with_genres=10749"
        );
        assert!(url(Category::Documentaries).ends_with("with_genres=99"));
        assert!(url(Category::Action).ends_with("with_genres=28"));
        assert!(url(Category::Comedy).ends_with("with_genres=35"));
        assert!(url(Category::Horror).ends_with("with_genres=27"));
    }

    #[test]
    fn test_key_is_encoded_and_redacted() {
        let endpoint = Endpoint::new(BASE_URL, &ApiKey::new("a b&c"), Category::Action).unwrap();
        assert!(endpoint.url.as_str().contains("api_key=a+b%26c"));
        assert_eq!(endpoint.redacted(), "https://api.themoviedb.org/3/discover/movie");
    }

    #[test]
    fn test_custom_base() {
        let table = endpoint_table("http://127.0.0.1:9", &ApiKey::new("k")).unwrap();
        assert!(table[0].url.as_str().starts_with("http://127.0.0.1:9/trending"));
    }
}
