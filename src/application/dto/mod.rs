use crate::domain::entities::{Recipe, RecipeId};

/// Display-ready view of a recipe, with placeholders already filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetailsDto {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub rating: String,
}

impl From<&Recipe> for RecipeDetailsDto {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: display_name(recipe).to_string(),
            image: recipe.image.clone(),
            ingredients: join_or(&recipe.ingredients, ", ", "Not available"),
            instructions: join_or(&recipe.instructions, " ", "Not available"),
            servings: positive(recipe.servings)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "Not specified".to_string()),
            prep_time: minutes(recipe.prep_time_minutes),
            cook_time: minutes(recipe.cook_time_minutes),
            rating: recipe
                .rating
                .filter(|rating| *rating > 0.0)
                .map(|rating| rating.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

pub fn display_name(recipe: &Recipe) -> &str {
    if recipe.name.is_empty() {
        "Untitled recipe"
    } else {
        &recipe.name
    }
}

fn join_or(items: &[String], separator: &str, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(separator)
    }
}

// Zero means "unknown" in the API data.
fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|n| *n > 0)
}

fn minutes(value: Option<u32>) -> String {
    match positive(value) {
        Some(n) => format!("{} mins", n),
        None => "N/A mins".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_recipe_is_formatted() {
        let recipe = Recipe::new(1, "Pizza")
            .with_ingredients(vec!["Dough".to_string(), "Cheese".to_string()])
            .with_instructions(vec!["Knead.".to_string(), "Bake.".to_string()])
            .with_servings(4)
            .with_times(20, 15)
            .with_rating(4.6);

        let details = RecipeDetailsDto::from(&recipe);

        assert_eq!(details.title, "Pizza");
        assert_eq!(details.ingredients, "Dough, Cheese");
        assert_eq!(details.instructions, "Knead. Bake.");
        assert_eq!(details.servings, "4");
        assert_eq!(details.prep_time, "20 mins");
        assert_eq!(details.cook_time, "15 mins");
        assert_eq!(details.rating, "4.6");
    }

    #[test]
    fn missing_values_use_placeholders() {
        let details = RecipeDetailsDto::from(&Recipe::new(2, "").with_servings(0));

        assert_eq!(details.title, "Untitled recipe");
        assert_eq!(details.ingredients, "Not available");
        assert_eq!(details.instructions, "Not available");
        assert_eq!(details.servings, "Not specified");
        assert_eq!(details.prep_time, "N/A mins");
        assert_eq!(details.cook_time, "N/A mins");
        assert_eq!(details.rating, "N/A");
        assert!(details.image.is_none());
    }
}
