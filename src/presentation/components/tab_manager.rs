use std::collections::HashMap;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Tab {
    Recipes,
    Wishlist,
    Settings,
    Log,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Recipes, Tab::Wishlist, Tab::Settings, Tab::Log];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Recipes => "Recipes",
            Tab::Wishlist => "♥ Wishlist",
            Tab::Settings => "Settings",
            Tab::Log => "Log",
        }
    }
}

pub struct TabState {
    pub loaded: bool,
}

impl TabState {
    pub fn new() -> Self {
        Self { loaded: false }
    }
}

pub struct TabManager {
    current_tab: Tab,
    tab_states: HashMap<Tab, TabState>,
}

impl TabManager {
    pub fn new() -> Self {
        let tab_states = Tab::ALL.into_iter().map(|tab| (tab, TabState::new())).collect();

        Self {
            current_tab: Tab::Recipes,
            tab_states,
        }
    }

    pub fn switch_to(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn current(&self) -> Tab {
        self.current_tab
    }

    pub fn is_current(&self, tab: Tab) -> bool {
        self.current_tab == tab
    }

    pub fn is_loaded(&self, tab: Tab) -> bool {
        self.tab_states
            .get(&tab)
            .map(|state| state.loaded)
            .unwrap_or(false)
    }

    pub fn mark_loaded(&mut self, tab: Tab) {
        if let Some(state) = self.tab_states.get_mut(&tab) {
            state.loaded = true;
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_recipes_with_nothing_loaded() {
        let tabs = TabManager::new();

        assert!(tabs.is_current(Tab::Recipes));
        assert!(Tab::ALL.iter().all(|tab| !tabs.is_loaded(*tab)));
    }

    #[test]
    fn loaded_flag_is_per_tab() {
        let mut tabs = TabManager::new();
        tabs.mark_loaded(Tab::Recipes);
        tabs.switch_to(Tab::Wishlist);

        assert_eq!(tabs.current(), Tab::Wishlist);
        assert!(tabs.is_loaded(Tab::Recipes));
        assert!(!tabs.is_loaded(Tab::Wishlist));
    }
}
