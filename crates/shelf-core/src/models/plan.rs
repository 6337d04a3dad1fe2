//! Meal plan models: days, meals, constraints and the weekly grid.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Recipe;
use crate::error::{Result, ShelfError};

/// Days of the planning week, in grid row order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

/// Meals of one day, in grid column order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }
}

/// Number of slots in the weekly grid.
pub const WEEK_SLOTS: usize = Day::ALL.len() * Meal::ALL.len();

/// Constraints for a list-mode meal plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanConstraints {
    /// Number of days to plan (1–7)
    pub days: u8,

    /// Minimum preparation time in minutes
    pub min_time: u32,

    /// Maximum preparation time in minutes
    pub max_time: u32,
}

impl Default for PlanConstraints {
    fn default() -> Self {
        Self {
            days: 7,
            min_time: 0,
            max_time: 180,
        }
    }
}

impl PlanConstraints {
    /// Validate the day count and time window.
    pub fn validate(&self) -> Result<()> {
        if !(1..=7).contains(&self.days) {
            return Err(ShelfError::invalid_input("days")
                .with_reason(format!("must be between 1 and 7, got {}", self.days)));
        }
        if self.min_time > self.max_time {
            return Err(ShelfError::invalid_input("min_time").with_reason(format!(
                "minimum time {} exceeds maximum time {}",
                self.min_time, self.max_time
            )));
        }
        Ok(())
    }
}

/// A list-mode plan: one recipe per day, possibly shorter than requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub constraints: PlanConstraints,
    pub recipes: Vec<Recipe>,
    pub generated_at: Timestamp,
}

impl DayPlan {
    /// Iterate over the planned recipes paired with their day.
    pub fn days(&self) -> impl Iterator<Item = (Day, &Recipe)> {
        Day::ALL.into_iter().zip(self.recipes.iter())
    }
}

/// The 7×3 weekly grid. Slots are stored row-major by day then meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    slots: Vec<Option<Recipe>>,
    pub generated_at: Timestamp,
}

impl MealPlan {
    /// Lay recipes into the grid row-major; slots past the end stay empty and
    /// recipes past the last slot are ignored.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>, generated_at: Timestamp) -> Self {
        let mut slots: Vec<Option<Recipe>> = recipes.into_iter().take(WEEK_SLOTS).map(Some).collect();
        slots.resize(WEEK_SLOTS, None);
        Self {
            slots,
            generated_at,
        }
    }

    /// Recipe planned for the given day and meal, if any.
    pub fn slot(&self, day: Day, meal: Meal) -> Option<&Recipe> {
        let day_index = Day::ALL.iter().position(|d| *d == day)?;
        let meal_index = Meal::ALL.iter().position(|m| *m == meal)?;
        self.slot_at(day_index, meal_index)
    }

    /// Recipe at a zero-based (day, meal) index pair, if any.
    pub fn slot_at(&self, day_index: usize, meal_index: usize) -> Option<&Recipe> {
        if meal_index >= Meal::ALL.len() {
            return None;
        }
        self.slots
            .get(day_index * Meal::ALL.len() + meal_index)
            .and_then(Option::as_ref)
    }

    /// The slots of one day, in meal order.
    pub fn day(&self, day_index: usize) -> &[Option<Recipe>] {
        let start = (day_index * Meal::ALL.len()).min(self.slots.len());
        let end = (start + Meal::ALL.len()).min(self.slots.len());
        &self.slots[start..end]
    }

    /// Number of non-empty slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.slots.iter().flatten()
    }
}
