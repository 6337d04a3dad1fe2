//! Collection wrapper types for catalog views.

use std::{fmt, ops::Index};

use crate::models::{CatalogEntry, Recipe};

/// A recipe together with its favorite state, owned so it can outlive the
/// catalog snapshot it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub recipe: Recipe,
    pub favorite: bool,
}

impl From<CatalogEntry<'_>> for RecipeCard {
    fn from(entry: CatalogEntry<'_>) -> Self {
        Self {
            recipe: entry.recipe.clone(),
            favorite: entry.favorite,
        }
    }
}

impl RecipeCard {
    fn marker(&self) -> &'static str {
        if self.favorite {
            " ★"
        } else {
            ""
        }
    }
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = &self.recipe;
        writeln!(f, "## {} (ID: {}){}", recipe.title, recipe.id, self.marker())?;
        writeln!(f)?;
        writeln!(f, "- **Cuisine**: {}", recipe.cuisine)?;
        writeln!(f, "- **Difficulty**: {}", recipe.difficulty)?;
        writeln!(f, "- **Time**: {} min", recipe.time)?;
        if !recipe.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", recipe.tags.join(", "))?;
        }
        writeln!(f)
    }
}

/// Detail view of one recipe with its favorite marker.
#[derive(Debug)]
pub struct RecipeDetail(pub RecipeCard);

impl fmt::Display for RecipeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.recipe)?;
        writeln!(f)?;
        if self.0.favorite {
            writeln!(f, "★ In your favorites")
        } else {
            writeln!(f, "☆ Not in your favorites")
        }
    }
}

/// Newtype wrapper for displaying a list of recipe cards.
///
/// # Examples
///
/// ```rust
/// use shelf_core::{
///     display::{RecipeCard, RecipeCards},
///     models::{Difficulty, Recipe},
/// };
///
/// let recipe = Recipe {
///     id: "1".to_string(),
///     title: "Pad Thai".to_string(),
///     cuisine: "Thai".to_string(),
///     difficulty: Difficulty::Medium,
///     time: 30,
///     servings: 2,
///     calories: None,
///     image: None,
///     summary: "Noodles.".to_string(),
///     ingredients: vec![],
///     steps: vec![],
///     tags: vec![],
/// };
/// let cards = RecipeCards(vec![RecipeCard { recipe, favorite: true }]);
/// assert!(cards.to_string().contains("## Pad Thai (ID: 1) ★"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeCards(pub Vec<RecipeCard>);

impl RecipeCards {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeCard> {
        self.0.iter()
    }
}

impl Index<usize> for RecipeCards {
    type Output = RecipeCard;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a RecipeCards {
    type Item = &'a RecipeCard;
    type IntoIter = std::slice::Iter<'a, RecipeCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<CatalogEntry<'a>> for RecipeCards {
    fn from_iter<I: IntoIterator<Item = CatalogEntry<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().map(RecipeCard::from).collect())
    }
}

impl fmt::Display for RecipeCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No recipes found.")
        } else {
            for card in &self.0 {
                write!(f, "{card}")?;
            }
            Ok(())
        }
    }
}

/// Cuisine names as a bullet list.
pub struct Cuisines(pub Vec<String>);

impl fmt::Display for Cuisines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No cuisines found.");
        }
        for cuisine in &self.0 {
            writeln!(f, "- {cuisine}")?;
        }
        Ok(())
    }
}
