use crate::domain::entities::{AppConfig, ThemeMode};
use eframe::egui;

pub enum SettingsAction {
    SaveConfig,
    ApplyTheme,
    ExportWishlist,
    ImportWishlist,
}

pub struct SettingsTab;

impl SettingsTab {
    pub fn show(
        ui: &mut egui::Ui,
        config: &mut AppConfig,
        favorites_count: usize,
    ) -> Vec<SettingsAction> {
        let mut actions = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.columns(2, |columns| {
                columns[0].vertical(|ui| {
                    ui.group(|ui| {
                        ui.heading("General");

                        ui.horizontal(|ui| {
                            ui.label("Theme:");
                            egui::ComboBox::new("theme_combo", "")
                                .selected_text(format!("{:?}", config.theme))
                                .show_ui(ui, |ui| {
                                    for (mode, label) in [
                                        (ThemeMode::System, "System"),
                                        (ThemeMode::Light, "Light"),
                                        (ThemeMode::Dark, "Dark"),
                                    ] {
                                        if ui.selectable_value(&mut config.theme, mode, label).clicked() {
                                            actions.push(SettingsAction::SaveConfig);
                                            actions.push(SettingsAction::ApplyTheme);
                                        }
                                    }
                                });
                        });

                        if ui
                            .checkbox(&mut config.load_on_startup, "Show recipes on startup")
                            .changed()
                        {
                            actions.push(SettingsAction::SaveConfig);
                        }

                        ui.label(
                            egui::RichText::new(format!("Search endpoint: {}", config.search_endpoint))
                                .small()
                                .color(egui::Color32::GRAY),
                        );
                    });
                });

                columns[1].vertical(|ui| {
                    ui.heading("Wishlist");
                    ui.separator();
                    ui.label(format!("{} saved recipes", favorites_count));
                    ui.vertical_centered(|ui| {
                        if ui
                            .add_enabled(favorites_count > 0, egui::Button::new("Export Wishlist"))
                            .clicked()
                        {
                            actions.push(SettingsAction::ExportWishlist);
                        }
                        ui.label("Export to JSON");

                        ui.add_space(10.0);

                        if ui.button("Import Wishlist").clicked() {
                            actions.push(SettingsAction::ImportWishlist);
                        }
                        ui.label("Merge recipes from JSON");
                    });
                });
            });
        });

        actions
    }
}
