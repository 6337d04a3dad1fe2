//! Normalization of upstream recipe records into [`Recipe`].
//!
//! Upstream records come in two shapes: the remote API's information records
//! (`readyInMinutes`, `extendedIngredients`, `analyzedInstructions`, dietary
//! flags, ...) and the canonical shape used by static catalog files. Both
//! deserialize into [`RawRecipe`], where every field is optional, and
//! [`Normalizer::normalize`] fills the gaps with defaults.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::models::{placeholder_image, Difficulty, Recipe};

pub const DEFAULT_TITLE: &str = "Untitled Recipe";
pub const DEFAULT_CUISINE: &str = "International";
pub const DEFAULT_SUMMARY: &str = "No summary available.";
const PLACEHOLDER_TITLE: &str = "No Image";

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("markup pattern is valid"));

/// Identifier as sent upstream, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn as_string(&self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIngredient {
    pub original: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInstructionStep {
    pub step: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInstructions {
    pub steps: Option<Vec<RawInstructionStep>>,
}

/// An upstream record before normalization. Absent and `null` fields are
/// both accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    pub id: Option<RawId>,
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub cuisines: Option<Vec<String>>,
    pub difficulty: Option<String>,
    #[serde(alias = "readyInMinutes")]
    pub time: Option<f64>,
    pub servings: Option<f64>,
    pub calories: Option<f64>,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub image_type: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub extended_ingredients: Option<Vec<RawIngredient>>,
    pub steps: Option<Vec<String>>,
    pub analyzed_instructions: Option<Vec<RawInstructions>>,
    pub tags: Option<Vec<String>>,
    pub vegetarian: Option<bool>,
    pub vegan: Option<bool>,
    pub gluten_free: Option<bool>,
    pub dairy_free: Option<bool>,
}

/// Turns [`RawRecipe`] records into catalog recipes.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Base URL for images constructed from a record id, e.g.
    /// `https://spoonacular.com/recipeImages`. Without it, records lacking
    /// an image get the placeholder directly.
    image_host: Option<String>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_host(mut self, host: impl Into<String>) -> Self {
        self.image_host = Some(host.into().trim_end_matches('/').to_string());
        self
    }

    /// Normalize one upstream record.
    pub fn normalize(&self, raw: RawRecipe) -> Recipe {
        let title = non_empty(raw.title.as_deref()).map(str::to_string);
        let ingredients = ingredient_lines(&raw);
        let time = whole_number(raw.time);
        let difficulty = raw
            .difficulty
            .as_deref()
            .and_then(|d| d.parse::<Difficulty>().ok())
            .unwrap_or_else(|| Difficulty::from_effort(time, ingredients.len()));
        let image = self.image_for(&raw, title.as_deref());
        let id = match &raw.id {
            Some(id) => id.as_string(),
            None => slug(title.as_deref().unwrap_or(DEFAULT_TITLE)),
        };

        Recipe {
            id,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            cuisine: cuisine(&raw),
            difficulty,
            time,
            servings: whole_number(raw.servings),
            calories: raw.calories.map(|c| whole_number(Some(c))),
            image: Some(image),
            summary: raw
                .summary
                .as_deref()
                .map(strip_markup)
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            steps: step_lines(&raw),
            tags: tags(&raw),
            ingredients,
        }
    }

    pub fn normalize_all(&self, raw: Vec<RawRecipe>) -> Vec<Recipe> {
        raw.into_iter().map(|r| self.normalize(r)).collect()
    }

    /// Image fallback chain: direct image, `imageUrl`, first of `imageUrls`,
    /// a URL built from the id on the image host, then the title placeholder.
    fn image_for(&self, raw: &RawRecipe, title: Option<&str>) -> String {
        if let Some(url) = non_empty(raw.image.as_deref())
            .or_else(|| non_empty(raw.image_url.as_deref()))
            .or_else(|| {
                raw.image_urls
                    .as_ref()
                    .and_then(|urls| urls.first())
                    .and_then(|u| non_empty(Some(u.as_str())))
            })
        {
            return url.to_string();
        }

        if let (Some(host), Some(id)) = (&self.image_host, &raw.id) {
            let extension = non_empty(raw.image_type.as_deref())
                .map(str::to_string)
                .or_else(|| raw.image.as_deref().and_then(extension_of))
                .unwrap_or_else(|| "jpg".to_string());
            return format!("{host}/{}-636x393.{extension}", id.as_string());
        }

        placeholder_image(title.unwrap_or(PLACEHOLDER_TITLE))
    }
}

/// Remove HTML tags from free text.
///
/// ```rust
/// use shelf_core::normalize::strip_markup;
///
/// assert_eq!(strip_markup("<b>Quick</b> and <a href=\"x\">tasty</a>"), "Quick and tasty");
/// ```
pub fn strip_markup(text: &str) -> String {
    MARKUP.replace_all(text, "").trim().to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn whole_number(value: Option<f64>) -> u32 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.round() as u32)
        .unwrap_or(0)
}

fn cuisine(raw: &RawRecipe) -> String {
    non_empty(raw.cuisine.as_deref())
        .or_else(|| {
            raw.cuisines
                .as_ref()
                .and_then(|c| c.first())
                .and_then(|c| non_empty(Some(c.as_str())))
        })
        .unwrap_or(DEFAULT_CUISINE)
        .to_string()
}

fn ingredient_lines(raw: &RawRecipe) -> Vec<String> {
    if let Some(lines) = &raw.ingredients {
        return lines.clone();
    }
    raw.extended_ingredients
        .iter()
        .flatten()
        .filter_map(|ing| ing.original.clone().or_else(|| ing.name.clone()))
        .collect()
}

fn step_lines(raw: &RawRecipe) -> Vec<String> {
    if let Some(steps) = &raw.steps {
        return steps.clone();
    }
    raw.analyzed_instructions
        .as_ref()
        .and_then(|blocks| blocks.first())
        .and_then(|block| block.steps.as_ref())
        .map(|steps| steps.iter().filter_map(|s| s.step.clone()).collect())
        .unwrap_or_default()
}

fn tags(raw: &RawRecipe) -> Vec<String> {
    if let Some(tags) = &raw.tags {
        return tags.clone();
    }
    [
        (raw.vegetarian, "Vegetarian"),
        (raw.vegan, "Vegan"),
        (raw.gluten_free, "Gluten-Free"),
        (raw.dairy_free, "Dairy-Free"),
    ]
    .into_iter()
    .filter(|(flag, _)| flag.unwrap_or(false))
    .map(|(_, tag)| tag.to_string())
    .collect()
}

fn extension_of(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let file = path.rsplit('/').next()?;
    let (_, ext) = file.rsplit_once('.')?;
    non_empty(Some(ext)).map(str::to_string)
}

fn slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
