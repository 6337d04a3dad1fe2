//! Display implementations for domain models.
//!
//! Detail views render as markdown for the terminal renderer; enumerations
//! render as their plain names.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Day, DayPlan, Difficulty, Meal, MealPlan, Recipe, RequestStatus, SortKey, Theme,
};

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Difficulty, RequestStatus, Theme, SortKey, Day, Meal);

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Cuisine: {}", self.cuisine)?;
        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        writeln!(f, "- Time: {} min", self.time)?;
        writeln!(f, "- Servings: {}", self.servings)?;
        if let Some(calories) = self.calories {
            writeln!(f, "- Calories: {calories} kcal")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f, "- Image: {}", self.image_url())?;

        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        if self.ingredients.is_empty() {
            writeln!(f, "No ingredients listed.")?;
        } else {
            for ingredient in &self.ingredients {
                writeln!(f, "- {ingredient}")?;
            }
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        if self.steps.is_empty() {
            writeln!(f, "No steps listed.")?;
        } else {
            for (number, step) in self.steps.iter().enumerate() {
                writeln!(f, "{}. {step}", number + 1)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Meal Plan")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Window: {}-{} min",
            self.constraints.min_time, self.constraints.max_time
        )?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;
        writeln!(f)?;

        if self.recipes.is_empty() {
            return writeln!(f, "No recipes match this time window.");
        }

        for (day, recipe) in self.days() {
            writeln!(
                f,
                "- **{day}**: {} ({} min, {})",
                recipe.title, recipe.time, recipe.difficulty
            )?;
        }

        let requested = usize::from(self.constraints.days);
        if self.recipes.len() < requested {
            writeln!(f)?;
            writeln!(
                f,
                "Only {} of {requested} day(s) could be planned.",
                self.recipes.len()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Weekly Plan")?;
        writeln!(f)?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;
        writeln!(f)?;

        write!(f, "| Day |")?;
        for meal in Meal::ALL {
            write!(f, " {meal} |")?;
        }
        writeln!(f)?;
        writeln!(f, "|:-|{}", ":-|".repeat(Meal::ALL.len()))?;

        for (day_index, day) in Day::ALL.iter().enumerate() {
            write!(f, "| {day} |")?;
            for slot in self.day(day_index) {
                match slot {
                    Some(recipe) => write!(f, " {} |", recipe.title)?,
                    None => write!(f, " - |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
