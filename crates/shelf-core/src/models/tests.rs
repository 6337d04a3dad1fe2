#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::Timestamp;

    use crate::models::{
        Day, Difficulty, Meal, MealPlan, PlanConstraints, Recipe, RequestStatus, SortKey, Theme,
        WEEK_SLOTS,
    };

    fn create_test_recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            cuisine: "Thai".to_string(),
            difficulty: Difficulty::Easy,
            time: 15,
            servings: 2,
            calories: None,
            image: None,
            summary: "Test summary".to_string(),
            ingredients: vec!["Rice".to_string(), "Water".to_string()],
            steps: vec!["Boil".to_string(), "Serve".to_string()],
            tags: vec!["Vegan".to_string()],
        }
    }

    #[test]
    fn test_difficulty_from_effort() {
        assert_eq!(Difficulty::from_effort(15, 8), Difficulty::Easy);
        assert_eq!(Difficulty::from_effort(90, 5), Difficulty::Hard);
        assert_eq!(Difficulty::from_effort(30, 12), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_boundaries() {
        // Exactly 20 minutes is no longer easy
        assert_eq!(Difficulty::from_effort(20, 3), Difficulty::Medium);
        // Exactly 60 minutes is not yet hard
        assert_eq!(Difficulty::from_effort(60, 3), Difficulty::Medium);
        // Many ingredients make even a quick recipe hard
        assert_eq!(Difficulty::from_effort(10, 16), Difficulty::Hard);
        // Ten ingredients break the easy rule
        assert_eq!(Difficulty::from_effort(10, 10), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str(" HARD ").unwrap(), Difficulty::Hard);
        assert!(Difficulty::from_str("impossible").is_err());
    }

    #[test]
    fn test_request_status_terminal() {
        assert!(!RequestStatus::Idle.is_terminal());
        assert!(!RequestStatus::Loading.is_terminal());
        assert!(RequestStatus::Succeeded.is_terminal());
        assert!(RequestStatus::Failed.is_terminal());
        assert_eq!(RequestStatus::default(), RequestStatus::Idle);
    }

    #[test]
    fn test_request_status_serde() {
        let json = serde_json::to_string(&RequestStatus::Succeeded).unwrap();
        assert_eq!(json, "\"succeeded\"");
        let status: RequestStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, RequestStatus::Failed);
    }

    #[test]
    fn test_sort_key_and_theme_parse() {
        assert_eq!(SortKey::from_str("Time").unwrap(), SortKey::Time);
        assert!(SortKey::from_str("calories").is_err());
        assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_image_url_placeholder() {
        let mut recipe = create_test_recipe("1");
        assert_eq!(
            recipe.image_url(),
            "https://placehold.co/800x450/a7c957/ffffff?text=Recipe%201"
        );

        recipe.image = Some("https://img.example/1.jpg".to_string());
        assert_eq!(recipe.image_url(), "https://img.example/1.jpg");

        recipe.image = Some("  ".to_string());
        assert!(recipe.image_url().starts_with("https://placehold.co/"));
    }

    #[test]
    fn test_recipe_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "1", "title": "Soup", "cuisine": "Korean", "difficulty": "Hard",
            "time": 70, "servings": 4, "summary": "Warm"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.tags.is_empty());
        assert!(recipe.image.is_none());
    }

    #[test]
    fn test_has_tag_is_case_insensitive() {
        let recipe = create_test_recipe("1");
        assert!(recipe.has_tag("vegan"));
        assert!(!recipe.has_tag("Vegetarian"));
    }

    #[test]
    fn test_plan_constraints_validation() {
        assert!(PlanConstraints::default().validate().is_ok());

        let zero_days = PlanConstraints {
            days: 0,
            ..Default::default()
        };
        assert!(zero_days.validate().is_err());

        let eight_days = PlanConstraints {
            days: 8,
            ..Default::default()
        };
        assert!(eight_days.validate().is_err());

        let inverted = PlanConstraints {
            days: 3,
            min_time: 60,
            max_time: 30,
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_meal_plan_layout_is_row_major() {
        let recipes: Vec<Recipe> = (0..5).map(|i| create_test_recipe(&i.to_string())).collect();
        let plan = MealPlan::from_recipes(recipes, Timestamp::from_second(1640995200).unwrap());

        assert_eq!(plan.filled(), 5);
        assert_eq!(plan.slot(Day::Monday, Meal::Breakfast).unwrap().id, "0");
        assert_eq!(plan.slot(Day::Monday, Meal::Dinner).unwrap().id, "2");
        assert_eq!(plan.slot(Day::Tuesday, Meal::Breakfast).unwrap().id, "3");
        assert_eq!(plan.slot(Day::Tuesday, Meal::Lunch).unwrap().id, "4");
        assert!(plan.slot(Day::Tuesday, Meal::Dinner).is_none());
        assert!(plan.slot(Day::Sunday, Meal::Dinner).is_none());
        assert_eq!(plan.day(6).len(), 3);
        assert!(plan.slot_at(0, 3).is_none());
    }

    #[test]
    fn test_meal_plan_ignores_overflow() {
        let recipes: Vec<Recipe> = (0..30).map(|i| create_test_recipe(&i.to_string())).collect();
        let plan = MealPlan::from_recipes(recipes, Timestamp::now());

        assert_eq!(plan.filled(), WEEK_SLOTS);
        assert_eq!(plan.slot(Day::Sunday, Meal::Dinner).unwrap().id, "20");
    }
}
