use super::{Recipe, RecipeId};
use serde::{Deserialize, Serialize};

/// The user's wishlist: an ordered list of recipes in which no two entries
/// share an id. Every operation returns a new value and leaves `self` as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Recipe>", into = "Vec<Recipe>")]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary recipes, keeping the first entry for each id.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut favorites = Self::new();
        for recipe in recipes {
            if !favorites.contains(&recipe.id) {
                favorites.recipes.push(recipe);
            }
        }
        favorites
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.recipes.iter().any(|recipe| &recipe.id == id)
    }

    pub fn toggled(&self, recipe: &Recipe) -> Self {
        if self.contains(&recipe.id) {
            self.without(&recipe.id)
        } else {
            self.with(recipe)
        }
    }

    pub fn with(&self, recipe: &Recipe) -> Self {
        let mut recipes = self.recipes.clone();
        if !self.contains(&recipe.id) {
            recipes.push(recipe.clone());
        }
        Self { recipes }
    }

    pub fn without(&self, id: &RecipeId) -> Self {
        Self {
            recipes: self
                .recipes
                .iter()
                .filter(|recipe| &recipe.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn ids(&self) -> Vec<RecipeId> {
        self.recipes.iter().map(|recipe| recipe.id.clone()).collect()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<Vec<Recipe>> for Favorites {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::from_recipes(recipes)
    }
}

impl From<Favorites> for Vec<Recipe> {
    fn from(favorites: Favorites) -> Self {
        favorites.recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn recipe(id: i64) -> Recipe {
        Recipe::new(id, format!("Recipe {}", id))
    }

    fn assert_unique(favorites: &Favorites) {
        let ids: HashSet<_> = favorites.ids().into_iter().collect();
        assert_eq!(ids.len(), favorites.len(), "duplicate ids in {:?}", favorites.ids());
    }

    #[test]
    fn toggle_on_empty_set_adds_recipe() {
        let favorites = Favorites::new();
        let pizza = Recipe::new(5, "Pizza");

        let next = favorites.toggled(&pizza);

        assert_eq!(next.ids(), vec![RecipeId::Number(5)]);
        assert!(next.contains(&RecipeId::Number(5)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_keeps_other_members() {
        let favorites = Favorites::from_recipes(vec![recipe(5), recipe(7)]);

        let next = favorites.without(&RecipeId::Number(5));

        assert_eq!(next.ids(), vec![RecipeId::Number(7)]);
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn toggle_of_favorited_recipe_removes_it() {
        let favorites = Favorites::from_recipes(vec![recipe(5)]);

        let next = favorites.toggled(&Recipe::new(5, "Renamed pizza"));

        assert!(next.is_empty());
    }

    #[test]
    fn toggle_pair_restores_membership_and_order() {
        let favorites = Favorites::from_recipes(vec![recipe(1), recipe(2), recipe(3)]);
        let extra = recipe(9);

        let round_trip = favorites.toggled(&extra).toggled(&extra);

        assert_eq!(round_trip, favorites);
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let favorites = Favorites::from_recipes(vec![recipe(1)]);
        assert_eq!(favorites.without(&RecipeId::Number(2)), favorites);
    }

    #[test]
    fn with_does_not_duplicate() {
        let favorites = Favorites::from_recipes(vec![recipe(1)]);
        let next = favorites.with(&Recipe::new(1, "Other name"));

        assert_eq!(next.len(), 1);
        assert_eq!(next.get(&RecipeId::Number(1)).map(|r| r.name.as_str()), Some("Recipe 1"));
    }

    #[test]
    fn ids_stay_unique_across_operation_sequences() {
        let mut favorites = Favorites::new();
        let ops: [(i64, bool); 10] = [
            (1, true),
            (2, true),
            (1, true),
            (1, true),
            (3, false),
            (2, true),
            (2, true),
            (4, true),
            (1, false),
            (4, true),
        ];

        for (id, toggle) in ops {
            favorites = if toggle {
                favorites.toggled(&recipe(id))
            } else {
                favorites.without(&RecipeId::Number(id))
            };
            assert_unique(&favorites);
        }

        assert_eq!(favorites.ids(), vec![RecipeId::Number(2)]);
    }

    #[test]
    fn deserializing_collapses_duplicate_ids() {
        let raw = r#"[{"id":1,"name":"a"},{"id":1,"name":"b"},{"id":2,"name":"c"}]"#;
        let favorites: Favorites = serde_json::from_str(raw).unwrap();

        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.as_slice()[0].name, "a");
    }
}
