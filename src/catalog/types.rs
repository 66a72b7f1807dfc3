use serde::{Deserialize, Deserializer, Serialize};

/// Provider marker for "field absent".
pub const NOT_AVAILABLE: &str = "N/A";

/// Image shown in place of a missing poster.
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/300x450?text=No+Poster";

/// Maps the `"N/A"` sentinel (and blank strings) to `None` so it is never
/// mistaken for a real image URL.
fn deserialize_poster<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|url| {
        let url = url.trim();
        !url.is_empty() && url != NOT_AVAILABLE
    }))
}

/// One row of a search result. Identity is `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default, deserialize_with = "deserialize_poster")]
    pub poster_url: Option<String>,
}

impl MovieSummary {
    pub fn poster_or_placeholder(&self) -> &str {
        self.poster_url.as_deref().unwrap_or(POSTER_PLACEHOLDER_URL)
    }
}

/// Full record for a single title, fetched with `plot=full`.
///
/// Text fields keep the provider's `"N/A"` verbatim; only the poster is
/// normalized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(rename = "imdbRating", default)]
    pub rating: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Rated", default)]
    pub rated: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
}

impl MovieDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    /// Numeric IMDb rating, if the provider sent one.
    pub fn rating_value(&self) -> Option<f32> {
        self.rating.trim().parse().ok()
    }
}

/// Payload of a successful `s=` lookup.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct SearchPayload {
    #[serde(rename = "Search", default)]
    pub results: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
}
