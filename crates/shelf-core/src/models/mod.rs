//! Data models for recipes, request lines and meal plans.
//!
//! This module contains the domain models shared by the loader, the view
//! derivations and the meal-plan allocator. Display implementations for these
//! models are located in [`crate::display::models`] to keep presentation apart
//! from the data structures.
//!
//! # Examples
//!
//! ```rust
//! use shelf_core::models::{Difficulty, Recipe};
//!
//! let recipe = Recipe {
//!     id: "pad-thai".to_string(),
//!     title: "Pad Thai".to_string(),
//!     cuisine: "Thai".to_string(),
//!     difficulty: Difficulty::Medium,
//!     time: 30,
//!     servings: 2,
//!     calories: None,
//!     image: None,
//!     summary: "Stir-fried rice noodles".to_string(),
//!     ingredients: vec!["Rice noodles".to_string()],
//!     steps: vec!["Soak the noodles".to_string()],
//!     tags: vec![],
//! };
//! assert!(recipe.image_url().contains("Pad%20Thai"));
//! ```

pub mod filters;
pub mod plan;
pub mod recipe;
pub mod status;

#[cfg(test)]
mod tests;

pub use filters::{SearchFields, SortKey, ViewQuery, ALL_CUISINES, KNOWN_CUISINES};
pub use plan::{Day, DayPlan, Meal, MealPlan, PlanConstraints, WEEK_SLOTS};
pub use recipe::{placeholder_image, CatalogEntry, Difficulty, Recipe};
pub use status::{RequestStatus, Theme};
