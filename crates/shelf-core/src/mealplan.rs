//! Meal-plan allocation.
//!
//! Two modes draw from the same pool, the catalog restricted to a time
//! window with duplicate ids collapsed to their first occurrence:
//!
//! - list mode ([`plan_days`]) samples one recipe per day without
//!   replacement and stops early when the pool runs dry;
//! - grid mode ([`plan_week`]) shuffles the pool and lays the first
//!   [`WEEK_SLOTS`] recipes into the week row-major, leaving the rest of
//!   the slots empty.
//!
//! Randomness comes from a [`RandomSource`] so plans can be reproduced.

use std::collections::HashSet;

use jiff::Timestamp;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    derive::filter_by_time_window,
    error::Result,
    models::{DayPlan, MealPlan, PlanConstraints, Recipe, WEEK_SLOTS},
};

/// Uniform index generator.
pub trait RandomSource {
    /// Returns an index in `0..upper`. Never called with `upper == 0`.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<F> RandomSource for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, upper: usize) -> usize {
        self(upper)
    }
}

/// Thread-local generator, used for interactive plans.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

/// Deterministic generator seeded from a number.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}

/// Recipes inside the window, first occurrence of each id only.
fn pool<'a>(catalog: &'a [Recipe], constraints: &PlanConstraints) -> Vec<&'a Recipe> {
    let mut seen = HashSet::new();
    filter_by_time_window(catalog, constraints.min_time, constraints.max_time)
        .into_iter()
        .filter(|&recipe| seen.insert(recipe.id.as_str()))
        .collect()
}

/// Index drawn from `rng`, reduced into range if the source overshoots.
fn draw(rng: &mut impl RandomSource, upper: usize) -> usize {
    rng.pick(upper) % upper
}

/// Picks up to `constraints.days` distinct recipes, one per day.
///
/// # Errors
///
/// Returns `ShelfError::InvalidInput` when the constraints are invalid.
pub fn plan_days(
    catalog: &[Recipe],
    constraints: &PlanConstraints,
    rng: &mut impl RandomSource,
) -> Result<DayPlan> {
    constraints.validate()?;

    let mut remaining = pool(catalog, constraints);
    let available = remaining.len();
    let wanted = usize::from(constraints.days);

    let mut picks = Vec::with_capacity(wanted.min(available));
    while picks.len() < wanted && !remaining.is_empty() {
        let index = draw(rng, remaining.len());
        picks.push(remaining.remove(index).clone());
    }

    info!(
        "Planned {} of {} day(s) from {} recipe(s) between {} and {} minutes",
        picks.len(),
        wanted,
        available,
        constraints.min_time,
        constraints.max_time
    );

    Ok(DayPlan {
        constraints: *constraints,
        recipes: picks,
        generated_at: Timestamp::now(),
    })
}

/// Fills the weekly grid from a Fisher–Yates shuffle of the pool. The day
/// count in `constraints` is not used; the grid always spans the week.
///
/// # Errors
///
/// Returns `ShelfError::InvalidInput` when the time window is invalid.
pub fn plan_week(
    catalog: &[Recipe],
    constraints: &PlanConstraints,
    rng: &mut impl RandomSource,
) -> Result<MealPlan> {
    constraints.validate()?;

    let mut shuffled = pool(catalog, constraints);
    for i in (1..shuffled.len()).rev() {
        let j = draw(rng, i + 1);
        shuffled.swap(i, j);
    }

    let plan = MealPlan::from_recipes(
        shuffled.into_iter().take(WEEK_SLOTS).cloned(),
        Timestamp::now(),
    );
    info!("Planned week with {} of {} slot(s) filled", plan.filled(), WEEK_SLOTS);
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ShelfError,
        models::{Day, Difficulty, Meal},
    };

    fn recipe(id: &str, time: u32) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            cuisine: "Thai".to_string(),
            difficulty: Difficulty::Medium,
            time,
            servings: 2,
            calories: None,
            image: None,
            summary: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            tags: Vec::new(),
        }
    }

    fn catalog(n: usize) -> Vec<Recipe> {
        (0..n).map(|i| recipe(&i.to_string(), 30)).collect()
    }

    fn window(days: u8, min_time: u32, max_time: u32) -> PlanConstraints {
        PlanConstraints {
            days,
            min_time,
            max_time,
        }
    }

    fn always_first(_upper: usize) -> usize {
        0
    }

    #[test]
    fn test_short_pool_yields_short_plan() {
        let recipes = catalog(3);
        let plan = plan_days(&recipes, &window(7, 0, 180), &mut ThreadRandom)
            .expect("Failed to plan");

        assert_eq!(plan.recipes.len(), 3);
        let mut ids: Vec<_> = plan.recipes.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_plan_days_follows_random_source() {
        let recipes = catalog(5);
        let mut script = vec![4, 0, 1].into_iter();
        let mut rng = |_upper: usize| script.next().unwrap_or(0);

        let plan = plan_days(&recipes, &window(3, 0, 180), &mut rng).expect("Failed to plan");

        // Picks remove from [0..5]: index 4 -> "4", index 0 -> "0", index 1 -> "2"
        let ids: Vec<_> = plan.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "0", "2"]);

        let days: Vec<_> = plan.days().map(|(day, _)| day).collect();
        assert_eq!(days, vec![Day::Monday, Day::Tuesday, Day::Wednesday]);
    }

    #[test]
    fn test_plan_days_respects_time_window() {
        let recipes = vec![recipe("fast", 10), recipe("mid", 45), recipe("slow", 200)];
        let plan = plan_days(&recipes, &window(7, 20, 60), &mut always_first)
            .expect("Failed to plan");

        let ids: Vec<_> = plan.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["mid"]);
    }

    #[test]
    fn test_plan_days_never_repeats_an_id() {
        let mut recipes = catalog(4);
        recipes.push(recipe("1", 30));
        recipes.push(recipe("2", 30));

        for seed in 0..20 {
            let plan = plan_days(&recipes, &window(7, 0, 180), &mut SeededRandom::new(seed))
                .expect("Failed to plan");
            let unique: HashSet<_> = plan.recipes.iter().map(|r| &r.id).collect();
            assert_eq!(unique.len(), plan.recipes.len());
            assert_eq!(plan.recipes.len(), 4);
        }
    }

    #[test]
    fn test_invalid_constraints_are_rejected() {
        let recipes = catalog(3);

        let err = plan_days(&recipes, &window(0, 0, 180), &mut ThreadRandom).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidInput { ref field, .. } if field == "days"));

        let err = plan_days(&recipes, &window(8, 0, 180), &mut ThreadRandom).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidInput { .. }));

        let err = plan_week(&recipes, &window(7, 60, 30), &mut ThreadRandom).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidInput { ref field, .. } if field == "min_time"));
    }

    #[test]
    fn test_full_grid_has_no_duplicates() {
        let recipes = catalog(30);
        let plan = plan_week(&recipes, &PlanConstraints::default(), &mut SeededRandom::new(7))
            .expect("Failed to plan");

        assert_eq!(plan.filled(), WEEK_SLOTS);
        let unique: HashSet<_> = plan.recipes().map(|r| &r.id).collect();
        assert_eq!(unique.len(), WEEK_SLOTS);
    }

    #[test]
    fn test_short_pool_leaves_empty_slots() {
        let recipes = catalog(5);
        let plan = plan_week(&recipes, &PlanConstraints::default(), &mut ThreadRandom)
            .expect("Failed to plan");

        assert_eq!(plan.filled(), 5);
        assert!(plan.slot(Day::Monday, Meal::Breakfast).is_some());
        assert!(plan.slot(Day::Tuesday, Meal::Lunch).is_some());
        assert!(plan.slot(Day::Tuesday, Meal::Dinner).is_none());
        assert!(plan.slot(Day::Sunday, Meal::Dinner).is_none());
    }

    #[test]
    fn test_shuffle_swaps_from_the_back() {
        let recipes = catalog(3);
        // i = 2 swaps with 0, then i = 1 swaps with 1: [2, 1, 0]
        let mut script = vec![0, 1].into_iter();
        let mut rng = |_upper: usize| script.next().unwrap_or(0);

        let plan = plan_week(&recipes, &PlanConstraints::default(), &mut rng)
            .expect("Failed to plan");
        let ids: Vec<_> = plan.recipes().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "0"]);
    }

    #[test]
    fn test_shuffle_draws_from_inclusive_range() {
        let recipes = catalog(4);
        let mut bounds = Vec::new();
        let mut rng = |upper: usize| {
            bounds.push(upper);
            upper - 1
        };

        plan_week(&recipes, &PlanConstraints::default(), &mut rng).expect("Failed to plan");
        assert_eq!(bounds, vec![4, 3, 2]);
    }

    #[test]
    fn test_seeded_plans_repeat() {
        let recipes = catalog(40);
        let first = plan_week(&recipes, &PlanConstraints::default(), &mut SeededRandom::new(42))
            .expect("Failed to plan");
        let second = plan_week(&recipes, &PlanConstraints::default(), &mut SeededRandom::new(42))
            .expect("Failed to plan");

        let a: Vec<_> = first.recipes().map(|r| &r.id).collect();
        let b: Vec<_> = second.recipes().map(|r| &r.id).collect();
        assert_eq!(a, b);
    }
}
