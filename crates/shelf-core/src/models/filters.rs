//! Filter types for deriving views of the catalog.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cuisine value that disables cuisine filtering.
pub const ALL_CUISINES: &str = "All";

/// Cuisines the catalog is expected to carry. Anything the source does not
/// label ends up as "International".
pub const KNOWN_CUISINES: [&str; 9] = [
    "Thai",
    "Japanese",
    "Korean",
    "Chinese",
    "Italian",
    "Mexican",
    "Indian",
    "American",
    "International",
];

/// Sort order for catalog views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Alphabetical by title, case-folded
    #[default]
    Title,

    /// Ascending preparation time
    Time,

    /// Lexicographic over the difficulty name (Easy, Hard, Medium)
    Difficulty,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "time" => Ok(SortKey::Time),
            "difficulty" => Ok(SortKey::Difficulty),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Time => "time",
            SortKey::Difficulty => "difficulty",
        }
    }
}

/// Which recipe fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    pub title: bool,
    pub cuisine: bool,
    pub summary: bool,
}

impl SearchFields {
    /// Title or cuisine, as on the landing page.
    pub const TITLE_AND_CUISINE: Self = Self {
        title: true,
        cuisine: true,
        summary: false,
    };

    /// Title or summary, as on the recipe listing.
    pub const TITLE_AND_SUMMARY: Self = Self {
        title: true,
        cuisine: false,
        summary: true,
    };

    pub const ALL: Self = Self {
        title: true,
        cuisine: true,
        summary: true,
    };
}

impl Default for SearchFields {
    fn default() -> Self {
        Self::TITLE_AND_SUMMARY
    }
}

/// Complete set of view parameters, applied in the order search, cuisine,
/// time, sort.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    /// Search term; empty or absent matches everything
    pub term: Option<String>,

    /// Fields the term is matched against
    pub fields: SearchFields,

    /// Exact cuisine; absent or [`ALL_CUISINES`] disables the filter
    pub cuisine: Option<String>,

    /// Maximum preparation time in minutes
    pub max_time: Option<u32>,

    /// Sort order; absent keeps catalog order
    pub sort: Option<SortKey>,
}
