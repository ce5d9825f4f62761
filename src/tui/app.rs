use crate::feed::Feed;
use crate::source::PostSource;
use crate::store::SearchStore;
use crate::tui::list::{ListAction, PostListView};
use crate::tui::search::{HeaderView, SearchState};
use crate::tui::ui;
use crate::AppConfig;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Rows moved per mouse wheel notch
const WHEEL_STEP: isize = 1;

pub struct App {
    pub feed: Feed,
    pub search: SearchStore,
    pub header: HeaderView,
    pub list: PostListView,

    pub status_message: String,
    tick_rate: Duration,

    pub should_quit: bool,
}

impl App {
    /// Build the views and issue the first page fetch
    pub fn new(source: Arc<dyn PostSource>, config: &AppConfig) -> Self {
        let search = SearchStore::default();
        let mut app = Self {
            feed: Feed::new(source).with_dedupe(config.dedupe_by_id),
            header: HeaderView::new(Some(search.clone())),
            list: PostListView::new(search.clone()),
            search,
            status_message: "Ready".to_string(),
            tick_rate: config.tick_rate,
            should_quit: false,
        };
        app.feed.load_more();
        app
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.tick();
                last_tick = Instant::now();
            }

            if self.should_quit {
                info!("quitting");
                return Ok(());
            }
        }
    }

    /// Apply finished fetches and refresh the filtered view
    pub fn tick(&mut self) {
        if self.feed.process_messages() > 0 {
            self.status_message = match self.feed.last_error() {
                Some(err) => err.to_string(),
                None => format!("Loaded {} posts", self.feed.posts().len()),
            };
        }
        self.list.refresh(self.feed.posts(), self.feed.revision());
    }

    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::LoadMore => {
                if self.feed.load_more() {
                    self.status_message = format!("Loading page {}", self.feed.next_page());
                }
            }
            ListAction::SetPosts(posts) => {
                let removed = self.feed.posts().len().saturating_sub(posts.len());
                self.feed.set_posts(posts);
                self.status_message = format!("Removed {} post(s)", removed);
                self.list.refresh(self.feed.posts(), self.feed.revision());
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Scroll notification: ask the list whether more posts are needed
    pub fn on_scroll(&mut self) {
        let metrics = self.list.metrics();
        if let Some(action) = self.list.on_scroll(metrics, self.feed.is_loading()) {
            self.apply(action);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let total = self.list.filtered_indices.len();
        match mouse.kind {
            MouseEventKind::ScrollDown => self.list.table.scroll_by(WHEEL_STEP, total),
            MouseEventKind::ScrollUp => self.list.table.scroll_by(-WHEEL_STEP, total),
            _ => return,
        }
        self.on_scroll();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.header.input.focused && !self.header.input.query.is_empty() {
                    self.edit_search(|input| {
                        input.clear();
                        true
                    });
                } else if self.header.input.focused {
                    self.header.input.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.header.input.focused {
            self.handle_search_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    fn edit_search(&mut self, f: impl FnOnce(&mut SearchState) -> bool) {
        if let Err(e) = self.header.edit(f) {
            warn!(error = %e, "search edit dropped");
            self.status_message = e.to_string();
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.edit_search(|input| {
                input.insert(c);
                true
            }),
            KeyCode::Backspace => self.edit_search(SearchState::backspace),
            KeyCode::Delete => self.edit_search(SearchState::delete),
            KeyCode::Left => self.header.input.move_left(),
            KeyCode::Right => self.header.input.move_right(),
            KeyCode::Home => self.header.input.move_home(),
            KeyCode::End => self.header.input.move_end(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.header.input.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.list.filtered_indices.len();
        let table = &mut self.list.table;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => table.select_next(total),
            KeyCode::PageUp => table.page_up(),
            KeyCode::PageDown => table.page_down(total),
            KeyCode::Home => table.select_first(),
            KeyCode::End => table.select_last(total),

            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(action) = self.list.delete_selected(self.feed.posts()) {
                    self.apply(action);
                }
                return;
            }

            KeyCode::Tab | KeyCode::Char('/') => {
                self.header.input.focused = true;
                return;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.header.input.focused = true;
                self.header.input.move_end();
                self.edit_search(|input| {
                    input.insert(c);
                    true
                });
                return;
            }

            _ => return,
        }
        self.on_scroll();
    }
}
