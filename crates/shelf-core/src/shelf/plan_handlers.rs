//! Meal-planning commands.

use std::sync::PoisonError;

use super::Shelf;
use crate::{
    error::Result,
    mealplan::{self, SeededRandom, ThreadRandom},
    models::{DayPlan, MealPlan},
    params::GeneratePlan,
};

impl Shelf {
    /// Generates a list-mode plan with one recipe per day.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidInput` for invalid constraints, or
    /// `ShelfError::Fetch` when the catalog cannot be loaded.
    pub async fn plan_days(&self, params: &GeneratePlan) -> Result<DayPlan> {
        let constraints = params.constraints();
        constraints.validate()?;

        let catalog = self.load_catalog().await?;
        match params.seed {
            Some(seed) => {
                mealplan::plan_days(&catalog, &constraints, &mut SeededRandom::new(seed))
            }
            None => mealplan::plan_days(&catalog, &constraints, &mut ThreadRandom),
        }
    }

    /// Generates a new weekly grid and keeps it as the session's plan.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidInput` for an invalid time window, or
    /// `ShelfError::Fetch` when the catalog cannot be loaded.
    pub async fn plan_week(&self, params: &GeneratePlan) -> Result<MealPlan> {
        let constraints = params.constraints();
        constraints.validate()?;

        let catalog = self.load_catalog().await?;
        let plan = match params.seed {
            Some(seed) => {
                mealplan::plan_week(&catalog, &constraints, &mut SeededRandom::new(seed))
            }
            None => mealplan::plan_week(&catalog, &constraints, &mut ThreadRandom),
        }?;

        *self
            .week_plan
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(plan.clone());
        Ok(plan)
    }

    /// Returns the session's weekly plan, generating one on first use.
    ///
    /// # Errors
    ///
    /// Same as [`Shelf::plan_week`].
    pub async fn ensure_week_plan(&self, params: &GeneratePlan) -> Result<MealPlan> {
        if let Some(plan) = self.week_plan() {
            return Ok(plan);
        }
        self.plan_week(params).await
    }
}
