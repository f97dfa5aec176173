/// The text in the search box and the last query actually sent.
pub struct SearchState {
    query: String,
    last_sent: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            last_sent: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    /// Returns the query to send if it differs from the last one sent, and
    /// records it as sent.
    pub fn take_changed(&mut self) -> Option<String> {
        if self.last_sent.as_deref() == Some(self.query.as_str()) {
            return None;
        }
        self.last_sent = Some(self.query.clone());
        Some(self.query.clone())
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_distinct_query_is_sent_once() {
        let mut state = SearchState::new();

        assert_eq!(state.take_changed().as_deref(), Some(""));
        assert_eq!(state.take_changed(), None);

        state.query_mut().push_str("chi");
        assert_eq!(state.take_changed().as_deref(), Some("chi"));
        assert_eq!(state.take_changed(), None);

        state.query_mut().clear();
        assert_eq!(state.take_changed().as_deref(), Some(""));
    }
}
