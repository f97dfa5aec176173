use crate::application::dto::RecipeDetailsDto;
use crate::domain::entities::{Favorites, Recipe};
use crate::presentation::style::FAVORITE_RED;

/// "More details" window for a single recipe.
pub struct InfoModal {
    show: bool,
    recipe: Option<Recipe>,
    details: Option<RecipeDetailsDto>,
}

impl InfoModal {
    pub fn new() -> Self {
        Self {
            show: false,
            recipe: None,
            details: None,
        }
    }

    pub fn show(&mut self, recipe: &Recipe) {
        self.details = Some(RecipeDetailsDto::from(recipe));
        self.recipe = Some(recipe.clone());
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
        self.recipe = None;
        self.details = None;
    }

    pub fn is_open(&self) -> bool {
        self.show
    }

    /// Draws the window. Returns the shown recipe when the user asks to add
    /// it to the wishlist.
    pub fn render(&mut self, ctx: &egui::Context, favorites: &Favorites) -> Option<Recipe> {
        let mut add_requested = None;

        if let (Some(details), Some(recipe)) = (self.details.clone(), self.recipe.clone()) {
            let mut open = self.show;
            egui::Window::new(&details.title)
                .id(egui::Id::new(("recipe_details", details.id.to_string())))
                .collapsible(false)
                .resizable(true)
                .default_width(480.0)
                .open(&mut open)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.heading(&details.title);
                            ui.separator();

                            if let Some(image) = &details.image {
                                ui.hyperlink_to("Open image", image);
                                ui.add_space(8.0);
                            }

                            field(ui, "Ingredients:", &details.ingredients);
                            field(ui, "Instructions:", &details.instructions);
                            field(ui, "Servings:", &details.servings);
                            field(ui, "Prep Time:", &details.prep_time);
                            field(ui, "Cook Time:", &details.cook_time);
                            field(ui, "Rating:", &details.rating);

                            ui.separator();
                            ui.horizontal(|ui| {
                                if favorites.contains(&recipe.id) {
                                    ui.colored_label(FAVORITE_RED, "♥ In your wishlist");
                                } else if ui.button("♥ Add to wishlist").clicked() {
                                    add_requested = Some(recipe.clone());
                                }
                                if ui.button("Close").clicked() {
                                    self.close();
                                }
                            });
                        });
                    });
                });

            if !open {
                self.close();
            }
        }

        add_requested
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(egui::RichText::new(label).strong());
    ui.label(value);
    ui.add_space(8.0);
}

impl Default for InfoModal {
    fn default() -> Self {
        Self::new()
    }
}
