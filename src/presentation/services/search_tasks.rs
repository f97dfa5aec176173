use crate::domain::entities::Recipe;
use std::sync::{Arc, Mutex, TryLockError};

/// Slot a background search writes its recipes into once it finishes.
pub type SearchSlot = Arc<Mutex<Option<Vec<Recipe>>>>;

struct SearchTask {
    sequence: u64,
    query: String,
    result: SearchSlot,
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub sequence: u64,
    pub query: String,
    pub recipes: Vec<Recipe>,
}

/// Tracks in-flight searches. Each search gets a sequence number, and only
/// the most recently issued one may update the results; earlier ones are
/// dropped whenever they finish.
pub struct SearchTaskManager {
    tasks: Vec<SearchTask>,
    latest_issued: u64,
}

impl SearchTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            latest_issued: 0,
        }
    }

    pub fn start(&mut self, query: String) -> (u64, SearchSlot) {
        self.latest_issued += 1;
        let result: SearchSlot = Arc::new(Mutex::new(None));
        tracing::debug!("Starting search #{} for '{}'", self.latest_issued, query);

        self.tasks.push(SearchTask {
            sequence: self.latest_issued,
            query,
            result: Arc::clone(&result),
        });

        (self.latest_issued, result)
    }

    pub fn is_searching(&self) -> bool {
        self.tasks
            .iter()
            .any(|task| task.sequence == self.latest_issued)
    }

    pub fn latest_issued(&self) -> u64 {
        self.latest_issued
    }

    pub fn poll(&mut self) -> Option<SearchOutcome> {
        let mut outcome = None;
        let mut tasks_to_keep = Vec::new();

        for task in self.tasks.drain(..) {
            let finished = match task.result.try_lock() {
                Ok(mut slot) => slot.take(),
                Err(TryLockError::WouldBlock) => None,
                Err(TryLockError::Poisoned(poisoned)) => match poisoned.into_inner().take() {
                    Some(recipes) => Some(recipes),
                    None => {
                        tracing::warn!(
                            "Search #{} for '{}' crashed without results, dropping it",
                            task.sequence,
                            task.query
                        );
                        continue;
                    }
                },
            };

            match finished {
                Some(recipes) if task.sequence == self.latest_issued => {
                    outcome = Some(SearchOutcome {
                        sequence: task.sequence,
                        query: task.query,
                        recipes,
                    });
                }
                Some(_) => {
                    tracing::debug!(
                        "Discarding stale results of search #{} for '{}'",
                        task.sequence,
                        task.query
                    );
                }
                None => tasks_to_keep.push(task),
            }
        }

        self.tasks = tasks_to_keep;
        outcome
    }
}

impl Default for SearchTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish(slot: &SearchSlot, names: &[&str]) {
        let recipes = names
            .iter()
            .enumerate()
            .map(|(i, name)| Recipe::new(i as i64, *name))
            .collect();
        *slot.lock().unwrap() = Some(recipes);
    }

    #[test]
    fn nothing_to_report_until_search_finishes() {
        let mut tasks = SearchTaskManager::new();
        let (_, _slot) = tasks.start("soup".to_string());

        assert!(tasks.is_searching());
        assert!(tasks.poll().is_none());
        assert!(tasks.is_searching());
    }

    #[test]
    fn finished_search_is_reported_once() {
        let mut tasks = SearchTaskManager::new();
        let (sequence, slot) = tasks.start("soup".to_string());
        finish(&slot, &["Tomato Soup"]);

        let outcome = tasks.poll().unwrap();

        assert_eq!(outcome.sequence, sequence);
        assert_eq!(outcome.query, "soup");
        assert_eq!(outcome.recipes.len(), 1);
        assert!(tasks.poll().is_none());
        assert!(!tasks.is_searching());
    }

    #[test]
    fn late_response_of_older_search_is_discarded() {
        let mut tasks = SearchTaskManager::new();
        let (_, slow) = tasks.start("c".to_string());
        let (_, fast) = tasks.start("chicken".to_string());

        finish(&fast, &["Chicken Biryani"]);
        let outcome = tasks.poll().unwrap();
        assert_eq!(outcome.query, "chicken");

        finish(&slow, &["Cake", "Curry"]);
        assert!(tasks.poll().is_none());
    }

    #[test]
    fn older_search_finishing_first_is_discarded() {
        let mut tasks = SearchTaskManager::new();
        let (_, first) = tasks.start("pi".to_string());
        let (_, second) = tasks.start("pizza".to_string());

        finish(&first, &["Pie"]);
        assert!(tasks.poll().is_none());
        assert!(tasks.is_searching());

        finish(&second, &["Pizza"]);
        assert_eq!(tasks.poll().unwrap().recipes[0].name, "Pizza");
    }

    fn crash_while_holding(slot: &SearchSlot, names: &'static [&'static str]) {
        let slot = Arc::clone(slot);
        let crashed = std::thread::spawn(move || {
            let mut guard = slot.lock().unwrap();
            if !names.is_empty() {
                *guard = Some(names.iter().map(|name| Recipe::new(1, *name)).collect());
            }
            panic!("search task crashed");
        })
        .join();
        assert!(crashed.is_err());
    }

    #[test]
    fn crashed_search_without_results_stops_the_spinner() {
        let mut tasks = SearchTaskManager::new();
        let (_, slot) = tasks.start("soup".to_string());
        crash_while_holding(&slot, &[]);

        assert!(tasks.poll().is_none());
        assert!(!tasks.is_searching());
    }

    #[test]
    fn results_written_before_a_crash_are_still_shown() {
        let mut tasks = SearchTaskManager::new();
        let (_, slot) = tasks.start("soup".to_string());
        crash_while_holding(&slot, &["Lentil Soup"]);

        let outcome = tasks.poll().unwrap();
        assert_eq!(outcome.recipes[0].name, "Lentil Soup");
        assert!(!tasks.is_searching());
    }
}
