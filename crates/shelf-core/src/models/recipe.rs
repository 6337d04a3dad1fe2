//! Recipe model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base URL of the placeholder image service used when a recipe has no image.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/800x450/a7c957/ffffff";

/// Effort level of a recipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Derive a difficulty from preparation time and ingredient count.
    ///
    /// Quick recipes with few ingredients are easy, long or ingredient-heavy
    /// ones are hard, everything else is medium.
    ///
    /// ```rust
    /// use shelf_core::models::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_effort(15, 8), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_effort(90, 5), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_effort(30, 12), Difficulty::Medium);
    /// ```
    pub fn from_effort(time: u32, ingredient_count: usize) -> Self {
        if time < 20 && ingredient_count < 10 {
            Difficulty::Easy
        } else if time > 60 || ingredient_count > 15 {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

/// A single recipe of the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Identifier, unique within one catalog snapshot
    pub id: String,

    pub title: String,

    pub cuisine: String,

    pub difficulty: Difficulty,

    /// Preparation or ready time in minutes
    pub time: u32,

    pub servings: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,

    /// Image URL, see [`Recipe::image_url`] for the placeholder fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Plain-text summary
    pub summary: String,

    /// Ingredient lines in display order
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Instruction steps in display order
    #[serde(default)]
    pub steps: Vec<String>,

    /// Dietary labels and similar tags; order is not significant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Recipe {
    /// The recipe image, or a deterministic placeholder keyed by the title.
    pub fn image_url(&self) -> String {
        match self.image.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => placeholder_image(&self.title),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Placeholder image URL for a recipe title.
pub fn placeholder_image(title: &str) -> String {
    format!(
        "{PLACEHOLDER_IMAGE_BASE}?text={}",
        urlencoding::encode(title)
    )
}

/// A recipe in a derived view, marked with its favorite state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry<'a> {
    pub recipe: &'a Recipe,
    pub favorite: bool,
}
