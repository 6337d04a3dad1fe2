//! Derived views over a loaded catalog.
//!
//! Every function here is pure: it borrows the recipes it is given and
//! returns a new list of references, never touching the input. Filters
//! preserve the relative order of the recipes they keep, and [`sort`] is
//! stable.

use std::{cmp::Ordering, collections::BTreeSet};

use crate::{
    favorites::FavoritesStore,
    models::{CatalogEntry, Recipe, SearchFields, SortKey, ViewQuery, ALL_CUISINES},
};

/// Recipes where `term` occurs, ignoring case, in one of the chosen fields.
/// An empty term keeps everything.
pub fn search<'a, I>(recipes: I, term: &str, fields: SearchFields) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let needle = term.to_lowercase();
    recipes
        .into_iter()
        .filter(|recipe| {
            let matches = |text: &str| text.to_lowercase().contains(&needle);
            (fields.title && matches(&recipe.title))
                || (fields.cuisine && matches(&recipe.cuisine))
                || (fields.summary && matches(&recipe.summary))
        })
        .collect()
}

/// Recipes whose cuisine equals `cuisine` exactly. [`ALL_CUISINES`] keeps
/// everything.
pub fn filter_by_cuisine<'a, I>(recipes: I, cuisine: &str) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .filter(|recipe| cuisine == ALL_CUISINES || recipe.cuisine == cuisine)
        .collect()
}

/// Recipes ready within `max` minutes.
pub fn filter_by_max_time<'a, I>(recipes: I, max: u32) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .filter(|recipe| recipe.time <= max)
        .collect()
}

/// Recipes whose time lies in `[min, max]`.
pub fn filter_by_time_window<'a, I>(recipes: I, min: u32, max: u32) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .filter(|recipe| (min..=max).contains(&recipe.time))
        .collect()
}

/// Stable sort by `key`.
///
/// Titles compare case-folded first, then by their exact text. Difficulty
/// compares by name, so `Easy < Hard < Medium`.
pub fn sort<'a, I>(recipes: I, key: SortKey) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut sorted: Vec<&Recipe> = recipes.into_iter().collect();
    match key {
        SortKey::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::Time => sorted.sort_by_key(|recipe| recipe.time),
        SortKey::Difficulty => sorted.sort_by_key(|recipe| recipe.difficulty.as_str()),
    }
    sorted
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Applies a full [`ViewQuery`] in the order search, cuisine, time, sort.
pub fn apply<'a, I>(recipes: I, query: &ViewQuery) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut view: Vec<&Recipe> = recipes.into_iter().collect();

    if let Some(term) = query.term.as_deref() {
        view = search(view, term, query.fields);
    }
    if let Some(cuisine) = query.cuisine.as_deref() {
        view = filter_by_cuisine(view, cuisine);
    }
    if let Some(max) = query.max_time {
        view = filter_by_max_time(view, max);
    }
    if let Some(key) = query.sort {
        view = sort(view, key);
    }
    view
}

/// Pairs each recipe with its favorite state.
pub fn annotate<'a, I>(recipes: I, favorites: &FavoritesStore) -> Vec<CatalogEntry<'a>>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .map(|recipe| CatalogEntry {
            recipe,
            favorite: favorites.is_favorite(&recipe.id),
        })
        .collect()
}

/// Distinct cuisines present in the catalog, sorted.
pub fn cuisines<'a, I>(recipes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .map(|recipe| recipe.cuisine.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
