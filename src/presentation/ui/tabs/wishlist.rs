use crate::application::dto::display_name;
use crate::domain::entities::{Favorites, Recipe, RecipeId};
use crate::presentation::style::FAVORITE_RED;
use eframe::egui;
use egui::{RichText, ScrollArea};

pub enum WishlistAction {
    ShowDetails(Recipe),
    Remove(RecipeId),
}

pub struct WishlistTab;

impl WishlistTab {
    pub fn show(
        ui: &mut egui::Ui,
        favorites: &Favorites,
        persist_error: Option<&str>,
    ) -> Vec<WishlistAction> {
        let mut actions = Vec::new();

        ui.heading(format!("Wishlist ({})", favorites.len()));
        if let Some(error) = persist_error {
            ui.colored_label(
                FAVORITE_RED,
                format!("Changes are not being saved: {}", error),
            );
        }
        ui.separator();

        if favorites.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("Your wishlist is empty.");
            });
            return actions;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for recipe in favorites.iter() {
                    egui::Frame::group(ui.style())
                        .rounding(8.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                let name = ui
                                    .add(
                                        egui::Label::new(RichText::new(display_name(recipe)).strong())
                                            .sense(egui::Sense::click()),
                                    )
                                    .on_hover_text("Show details");
                                if name.clicked() {
                                    actions.push(WishlistAction::ShowDetails(recipe.clone()));
                                }

                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    let remove = egui::Button::new(
                                        RichText::new("Remove").color(egui::Color32::WHITE),
                                    )
                                    .fill(FAVORITE_RED);
                                    if ui.add(remove).clicked() {
                                        actions.push(WishlistAction::Remove(recipe.id.clone()));
                                    }
                                    if ui.button("Details").clicked() {
                                        actions.push(WishlistAction::ShowDetails(recipe.clone()));
                                    }
                                });
                            });
                        });
                }
            });

        actions
    }
}
