use crate::store::SearchStore;
use crate::{PostFeedError, Result};
use tracing::error;

pub const PLACEHOLDER: &str = "Search posts...";

/// Search input state for the TUI
pub struct SearchState {
    pub query: String,
    /// Byte offset into `query`, always on a char boundary
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Returns false when there was nothing to delete
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor_pos = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.cursor_pos = self.query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.query.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor_pos = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

/// Header: the search input bound to the shared search term
pub struct HeaderView {
    pub input: SearchState,
    store: Option<SearchStore>,
}

impl HeaderView {
    pub fn new(store: Option<SearchStore>) -> Self {
        Self {
            input: SearchState::default(),
            store,
        }
    }

    /// Publish the input's current text. Without a store this is a no-op that reports
    /// `MissingSearchStore`.
    pub fn on_input(&self) -> Result<()> {
        match &self.store {
            Some(store) => {
                store.set(self.input.query.clone());
                Ok(())
            }
            None => {
                error!("search store is not available");
                Err(PostFeedError::MissingSearchStore)
            }
        }
    }

    /// Apply an edit to the input and publish the result.
    /// Without a store the edit is not applied at all.
    pub fn edit(&mut self, f: impl FnOnce(&mut SearchState) -> bool) -> Result<()> {
        if self.store.is_none() {
            error!("search store is not available");
            return Err(PostFeedError::MissingSearchStore);
        }
        if f(&mut self.input) {
            self.on_input()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn typing_updates_the_store() {
        let store = SearchStore::default();
        let mut header = HeaderView::new(Some(store.clone()));
        for c in "test search".chars() {
            header
                .edit(|input| {
                    input.insert(c);
                    true
                })
                .unwrap();
        }
        assert_eq!(store.get(), "test search");
    }

    #[test]
    fn missing_store_is_reported_and_nothing_changes() {
        let mut header = HeaderView::new(None);
        let err = header
            .edit(|input| {
                input.insert('x');
                true
            })
            .unwrap_err();
        assert!(matches!(err, PostFeedError::MissingSearchStore));
        assert!(header.input.query.is_empty());
        assert!(header.on_input().is_err());
    }

    #[test]
    fn missing_store_is_logged_as_an_error() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let mut header = HeaderView::new(None);
        let result = tracing::subscriber::with_default(subscriber, || {
            header.edit(|input| {
                input.insert('x');
                true
            })
        });

        assert!(result.is_err());
        let output = logs.contents();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("search store is not available"), "{output}");
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut s = SearchState::default();
        for c in "aé b".chars() {
            s.insert(c);
        }
        s.move_left();
        s.move_left();
        s.move_left();
        assert_eq!(s.cursor_pos, 1);
        s.move_right();
        assert_eq!(s.cursor_pos, 3);
        assert!(s.backspace());
        assert_eq!(s.query, "a b");
        s.move_home();
        assert!(!s.backspace());
        assert!(s.delete());
        assert_eq!(s.query, " b");
        s.move_end();
        assert!(!s.delete());
    }
}
