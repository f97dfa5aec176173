use crate::domain::entities::{Favorites, Recipe};
use crate::presentation::components::{CardAction, RecipeCards, SearchState};
use eframe::egui;

pub enum RecipesAction {
    QueryChanged,
    ToggleFavorite(Recipe),
    ShowDetails(Recipe),
}

pub struct RecipesTab;

impl RecipesTab {
    pub fn show(
        ui: &mut egui::Ui,
        search_state: &mut SearchState,
        cards: &RecipeCards,
        favorites: &Favorites,
        searching: bool,
    ) -> Vec<RecipesAction> {
        let mut actions = Vec::new();

        ui.vertical_centered(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(search_state.query_mut())
                    .hint_text("🔍 Search for recipes...")
                    .desired_width(ui.available_width() * 0.75),
            );
            if response.changed() {
                actions.push(RecipesAction::QueryChanged);
            }
        });

        if searching {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Searching...");
            });
        }

        ui.separator();

        for action in cards.show(ui, favorites) {
            actions.push(match action {
                CardAction::ToggleFavorite(recipe) => RecipesAction::ToggleFavorite(recipe),
                CardAction::ShowDetails(recipe) => RecipesAction::ShowDetails(recipe),
            });
        }

        actions
    }
}
