//! Parameter structures for shelf operations.
//!
//! These structures carry no interface-specific derives. The CLI defines its
//! own clap argument types and converts them into these with `.into()`, so
//! the core stays free of framework dependencies.

use serde::{Deserialize, Serialize};

use crate::models::{PlanConstraints, SearchFields, SortKey, ViewQuery};

/// Parameters for operations addressing a single recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The recipe id
    pub id: String,
}

/// Parameters for browsing the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseRecipes {
    /// Search term matched against title and summary
    pub query: Option<String>,
    /// Exact cuisine, or "All"
    pub cuisine: Option<String>,
    /// Maximum ready time in minutes
    pub max_time: Option<u32>,
    /// Sort order
    pub sort: Option<SortKey>,
    /// Also match the search term against cuisines
    #[serde(default)]
    pub search_cuisine: bool,
    /// Only list favorites
    #[serde(default)]
    pub favorites_only: bool,
}

impl From<&BrowseRecipes> for ViewQuery {
    fn from(params: &BrowseRecipes) -> Self {
        let fields = if params.search_cuisine {
            SearchFields::ALL
        } else {
            SearchFields::TITLE_AND_SUMMARY
        };
        ViewQuery {
            term: params.query.clone(),
            fields,
            cuisine: params.cuisine.clone(),
            max_time: params.max_time,
            sort: params.sort,
        }
    }
}

/// Parameters for generating a meal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Number of days (1-7); ignored for the weekly grid
    pub days: u8,
    /// Minimum ready time in minutes
    pub min_time: u32,
    /// Maximum ready time in minutes
    pub max_time: u32,
    /// Seed for a reproducible plan
    pub seed: Option<u64>,
}

impl Default for GeneratePlan {
    fn default() -> Self {
        let constraints = PlanConstraints::default();
        Self {
            days: constraints.days,
            min_time: constraints.min_time,
            max_time: constraints.max_time,
            seed: None,
        }
    }
}

impl GeneratePlan {
    pub fn constraints(&self) -> PlanConstraints {
        PlanConstraints {
            days: self.days,
            min_time: self.min_time,
            max_time: self.max_time,
        }
    }
}

/// Parameters for clearing favorites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearFavorites {
    /// Must be set for the collection to be cleared
    #[serde(default)]
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_params_convert_to_query() {
        let params = BrowseRecipes {
            query: Some("pad".to_string()),
            cuisine: Some("Thai".to_string()),
            max_time: Some(30),
            sort: Some(SortKey::Time),
            search_cuisine: true,
            favorites_only: false,
        };
        let query = ViewQuery::from(&params);
        assert_eq!(query.term.as_deref(), Some("pad"));
        assert_eq!(query.fields, SearchFields::ALL);
        assert_eq!(query.cuisine.as_deref(), Some("Thai"));
        assert_eq!(query.max_time, Some(30));
        assert_eq!(query.sort, Some(SortKey::Time));
    }

    #[test]
    fn test_generate_plan_defaults_match_constraints() {
        assert_eq!(GeneratePlan::default().constraints(), PlanConstraints::default());
    }
}
