use crate::application::dto::display_name;
use crate::domain::entities::{Favorites, Recipe};
use crate::presentation::style::{FAVORITE_RED, UNFAVORITED_GRAY};
use egui::{Align, Layout, RichText, ScrollArea};

const CARD_WIDTH: f32 = 260.0;

pub enum CardAction {
    ToggleFavorite(Recipe),
    ShowDetails(Recipe),
}

/// Current search results, rendered as a wrapping grid of cards.
pub struct RecipeCards {
    recipes: Vec<Recipe>,
}

impl RecipeCards {
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    pub fn update_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn show(&self, ui: &mut egui::Ui, favorites: &Favorites) -> Vec<CardAction> {
        let mut actions = Vec::new();

        if self.recipes.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No recipes found.");
            });
            return actions;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for recipe in &self.recipes {
                        egui::Frame::group(ui.style())
                            .rounding(8.0)
                            .inner_margin(12.0)
                            .show(ui, |ui| {
                                ui.set_width(CARD_WIDTH);
                                ui.vertical(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(RichText::new(display_name(recipe)).strong());
                                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                            let favorited = favorites.contains(&recipe.id);
                                            if heart_button(ui, favorited).clicked() {
                                                actions.push(CardAction::ToggleFavorite(recipe.clone()));
                                            }
                                        });
                                    });

                                    ui.label(
                                        RichText::new(summary(recipe))
                                            .small()
                                            .color(egui::Color32::GRAY),
                                    );

                                    if ui.button("More Details...").clicked() {
                                        actions.push(CardAction::ShowDetails(recipe.clone()));
                                    }
                                });
                            });
                    }
                });
            });

        actions
    }
}

impl Default for RecipeCards {
    fn default() -> Self {
        Self::new()
    }
}

pub fn heart_button(ui: &mut egui::Ui, favorited: bool) -> egui::Response {
    let color = if favorited { FAVORITE_RED } else { UNFAVORITED_GRAY };
    let hover = if favorited {
        "Remove from wishlist"
    } else {
        "Add to wishlist"
    };

    ui.add(egui::Button::new(RichText::new("♥").size(22.0).color(color)).frame(false))
        .on_hover_text(hover)
}

fn summary(recipe: &Recipe) -> String {
    let mut parts = Vec::new();
    if let Some(servings) = recipe.servings {
        parts.push(format!("Serves {}", servings));
    }
    let total = u64::from(recipe.prep_time_minutes.unwrap_or(0))
        + u64::from(recipe.cook_time_minutes.unwrap_or(0));
    if total > 0 {
        parts.push(format!("{} mins", total));
    }
    if let Some(rating) = recipe.rating {
        parts.push(format!("★ {:.1}", rating));
    }
    parts.join(" · ")
}
