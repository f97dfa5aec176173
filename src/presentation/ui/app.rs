use crate::application::use_cases::FavoritesManager;
use crate::application::{AppEvent, UseCaseContainer};
use crate::domain::entities::{AppConfig, Recipe, RecipeId};
use crate::infrastructure::ConfigRepository;
use crate::presentation::components::{InfoModal, LogManager, RecipeCards, SearchState, Tab, TabManager};
use crate::presentation::services::{AsyncExecutor, SearchTaskManager};
use crate::presentation::style::{ACCENT_YELLOW, configure_style};
use crate::presentation::ui::tabs::{
    LogAction, LogTab, RecipesAction, RecipesTab, SettingsAction, SettingsTab, WishlistAction,
    WishlistTab,
};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

enum PanelActions {
    Recipes(Vec<RecipesAction>),
    Wishlist(Vec<WishlistAction>),
    Settings(Vec<SettingsAction>),
    Log(Vec<LogAction>),
}

pub struct RecipeFinderApp {
    tab_manager: TabManager,
    search_state: SearchState,
    recipe_cards: RecipeCards,
    info_modal: InfoModal,
    log_manager: LogManager,
    log_rx: Receiver<String>,
    event_rx: Receiver<AppEvent>,

    favorites: FavoritesManager,
    search_tasks: SearchTaskManager,

    use_cases: Arc<UseCaseContainer>,
    executor: AsyncExecutor,

    config: AppConfig,
    config_repository: ConfigRepository,
    style_applied: bool,

    status_message: String,
}

impl RecipeFinderApp {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        config_repository: ConfigRepository,
        config: AppConfig,
        executor: AsyncExecutor,
        log_rx: Receiver<String>,
    ) -> Self {
        let (event_tx, event_rx) = channel();
        use_cases.events().subscribe(move |event| {
            let _ = event_tx.send(event.clone());
        });

        let favorites = use_cases.favorites_manager();

        Self {
            tab_manager: TabManager::new(),
            search_state: SearchState::new(),
            recipe_cards: RecipeCards::new(),
            info_modal: InfoModal::new(),
            log_manager: LogManager::new(),
            log_rx,
            event_rx,
            favorites,
            search_tasks: SearchTaskManager::new(),
            use_cases,
            executor,
            config,
            config_repository,
            style_applied: false,
            status_message: String::new(),
        }
    }

    fn handle_query_changed(&mut self, ctx: &egui::Context) {
        if let Some(query) = self.search_state.take_changed() {
            self.start_search(ctx, query);
        }
    }

    fn start_search(&mut self, ctx: &egui::Context, query: String) {
        let (sequence, slot) = self.search_tasks.start(query.clone());
        self.status_message = if query.is_empty() {
            "Loading recipes...".to_string()
        } else {
            format!("Searching for '{}'...", query)
        };

        let search = Arc::clone(&self.use_cases.search);
        let ctx = ctx.clone();

        self.executor.spawn(async move {
            let recipes = search.execute(&query).await;
            match slot.lock() {
                Ok(mut result) => *result = Some(recipes),
                Err(e) => tracing::error!("Search #{} could not hand over its results: {}", sequence, e),
            }
            ctx.request_repaint();
        });
    }

    fn handle_toggle_favorite(&mut self, recipe: Recipe) {
        self.favorites.toggle(&recipe);
    }

    fn handle_add_favorite(&mut self, recipe: Recipe) {
        if self.favorites.contains(&recipe.id) {
            return;
        }
        self.favorites.add(&recipe);
    }

    fn handle_remove_favorite(&mut self, id: RecipeId) {
        self.favorites.remove(&id);
    }

    fn handle_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("wishlist.json")
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        let export = Arc::clone(&self.use_cases.export_wishlist);
        let favorites = self.favorites.favorites().clone();

        match self
            .executor
            .execute(async move { export.execute(&favorites, &path).await })
        {
            Ok(export) => {
                self.status_message = format!("Exported {} recipes", export.recipes.len());
            }
            Err(e) => {
                tracing::error!("Failed to export wishlist: {:#}", e);
                self.status_message = format!("Export failed: {}", e);
            }
        }
    }

    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        let import = Arc::clone(&self.use_cases.import_wishlist);

        match self
            .executor
            .execute(async move { import.execute(&path).await })
        {
            Ok(recipes) => {
                let offered = recipes.len();
                let added = self.favorites.merge(recipes);
                tracing::info!("Imported {} of {} recipes into the wishlist", added, offered);
                self.status_message = format!("Imported {} new recipes", added);
            }
            Err(e) => {
                tracing::error!("Failed to import wishlist: {:#}", e);
                self.status_message = format!("Import failed: {}", e);
            }
        }
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config_repository.save(&self.config) {
            tracing::error!("Failed to save settings: {:#}", e);
            self.status_message = format!("Could not save settings: {}", e);
        }
    }

    fn poll_search(&mut self) {
        if let Some(outcome) = self.search_tasks.poll() {
            self.recipe_cards.update_recipes(outcome.recipes);
            tracing::debug!(
                "Showing {} results of search #{} for '{}' (latest issued #{})",
                self.recipe_cards.recipes().len(),
                outcome.sequence,
                outcome.query,
                self.search_tasks.latest_issued()
            );
        }
    }

    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::FavoritesChanged(favorites) => {
                    self.status_message = match self.favorites.last_persist_error() {
                        Some(error) => format!("Could not save wishlist: {}", error),
                        None => format!("Wishlist has {} recipes", favorites.len()),
                    };
                }
                AppEvent::PersistFailed(reason) => {
                    self.status_message = format!("Could not save wishlist: {}", reason);
                }
                AppEvent::SearchFailed { query, reason } => {
                    if query == self.search_state.query() {
                        self.status_message = format!("Search failed: {}", reason);
                    }
                }
                AppEvent::SearchCompleted { query, count } => {
                    if query == self.search_state.query() {
                        self.status_message = match (count, query.is_empty()) {
                            (0, true) => "No recipes found".to_string(),
                            (0, false) => format!("No recipes match '{}'", query),
                            (1, _) => "1 recipe".to_string(),
                            (n, _) => format!("{} recipes", n),
                        };
                    }
                }
            }
        }
    }

    fn poll_logs(&mut self) {
        self.log_manager.extend(self.log_rx.try_iter().collect());
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: PanelActions) {
        match actions {
            PanelActions::Recipes(actions) => {
                for action in actions {
                    match action {
                        RecipesAction::QueryChanged => self.handle_query_changed(ctx),
                        RecipesAction::ToggleFavorite(recipe) => self.handle_toggle_favorite(recipe),
                        RecipesAction::ShowDetails(recipe) => self.info_modal.show(&recipe),
                    }
                }
            }
            PanelActions::Wishlist(actions) => {
                for action in actions {
                    match action {
                        WishlistAction::ShowDetails(recipe) => self.info_modal.show(&recipe),
                        WishlistAction::Remove(id) => self.handle_remove_favorite(id),
                    }
                }
            }
            PanelActions::Settings(actions) => {
                for action in actions {
                    match action {
                        SettingsAction::SaveConfig => self.save_config(),
                        SettingsAction::ApplyTheme => configure_style(ctx, self.config.theme),
                        SettingsAction::ExportWishlist => self.handle_export(),
                        SettingsAction::ImportWishlist => self.handle_import(),
                    }
                }
            }
            PanelActions::Log(actions) => {
                for action in actions {
                    match action {
                        LogAction::CopyAll => {
                            let output = self
                                .log_manager
                                .all_logs()
                                .map(|entry| {
                                    format!(
                                        "[{}] {:<5} {}",
                                        entry.format_timestamp(),
                                        entry.level.label(),
                                        entry.message
                                    )
                                })
                                .collect::<Vec<_>>()
                                .join("\n");
                            ctx.copy_text(output);
                        }
                        LogAction::Clear => self.log_manager.clear(),
                        LogAction::SetLevelVisible(level, visible) => {
                            self.log_manager.set_level_visible(level, visible)
                        }
                    }
                }
            }
        }
    }
}

impl eframe::App for RecipeFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_logs();
        self.poll_events();
        self.poll_search();
        ctx.request_repaint_after(Duration::from_millis(250));

        if !self.style_applied {
            self.style_applied = true;
            configure_style(ctx, self.config.theme);
        }

        if !self.tab_manager.is_loaded(Tab::Recipes) {
            self.tab_manager.mark_loaded(Tab::Recipes);
            if self.config.load_on_startup {
                self.handle_query_changed(ctx);
            }
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Recipe");
                ui.heading(egui::RichText::new("Finder").color(ACCENT_YELLOW));
                ui.separator();

                for tab in Tab::ALL {
                    if ui
                        .selectable_label(self.tab_manager.is_current(tab), tab.label())
                        .clicked()
                    {
                        self.tab_manager.switch_to(tab);
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.search_tasks.is_searching() {
                    ui.spinner();
                }
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.favorites.is_empty() {
                        ui.label("♡ Wishlist empty");
                    } else {
                        ui.label(format!("♥ {}", self.favorites.len()));
                    }
                });
            });
        });

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| match self.tab_manager.current() {
                Tab::Recipes => PanelActions::Recipes(RecipesTab::show(
                    ui,
                    &mut self.search_state,
                    &self.recipe_cards,
                    self.favorites.favorites(),
                    self.search_tasks.is_searching(),
                )),
                Tab::Wishlist => PanelActions::Wishlist(WishlistTab::show(
                    ui,
                    self.favorites.favorites(),
                    self.favorites.last_persist_error(),
                )),
                Tab::Settings => PanelActions::Settings(SettingsTab::show(
                    ui,
                    &mut self.config,
                    self.favorites.len(),
                )),
                Tab::Log => PanelActions::Log(LogTab::show(ui, &self.log_manager)),
            })
            .inner;

        self.apply_actions(ctx, actions);

        if self.info_modal.is_open() {
            if let Some(recipe) = self.info_modal.render(ctx, self.favorites.favorites()) {
                self.handle_add_favorite(recipe);
            }
        }
    }
}
