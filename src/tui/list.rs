//! Post list view: filtering, infinite scroll and removal.
//!
//! The view never mutates the collection it is shown. It hands `ListAction`s back to the
//! owner, which decides how to apply them.

use crate::post::{matching_indices, without_post, Post};
use crate::store::{SearchStore, Subscription};
use crate::tui::item::PostItemView;
use crate::tui::table::TableState;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

pub const NO_POSTS_MESSAGE: &str = "No posts found.";

/// Requests from the list to its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    LoadMore,
    SetPosts(Vec<Post>),
}

/// Scroll geometry in rows, mirroring the usual `scrollHeight` / `scrollTop` /
/// `clientHeight` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_height: usize,
    pub scroll_top: usize,
    pub client_height: usize,
}

impl ScrollMetrics {
    pub fn near_bottom(&self) -> bool {
        self.scroll_height.saturating_sub(self.scroll_top) <= self.client_height
    }
}

pub struct PostListView {
    search: SearchStore,
    needs_filter: Rc<Cell<bool>>,
    _subscription: Subscription,
    seen_revision: Option<u64>,

    /// Indices into the collection that pass the current search term
    pub filtered_indices: Vec<usize>,
    pub table: TableState,
}

impl PostListView {
    pub fn new(search: SearchStore) -> Self {
        let needs_filter = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_filter);
        let subscription = search.subscribe(move |_| flag.set(true));
        Self {
            search,
            needs_filter,
            _subscription: subscription,
            seen_revision: None,
            filtered_indices: Vec::new(),
            table: TableState::default(),
        }
    }

    /// Recompute the filtered view if the search term or the collection changed
    pub fn refresh(&mut self, posts: &[Post], revision: u64) {
        if !self.needs_filter.get() && self.seen_revision == Some(revision) {
            return;
        }
        let term = self.search.get();
        let term_changed = self.needs_filter.replace(false);
        self.filtered_indices = matching_indices(posts, &term);
        self.seen_revision = Some(revision);

        if term_changed {
            self.table.selected = if self.filtered_indices.is_empty() {
                None
            } else {
                Some(0)
            };
            self.table.scroll_offset = 0;
        } else {
            self.table.clamp(self.filtered_indices.len());
            if self.table.selected.is_none() && !self.filtered_indices.is_empty() {
                self.table.selected = Some(0);
            }
        }
        debug!(
            term = %term,
            shown = self.filtered_indices.len(),
            total = posts.len(),
            "list filtered"
        );
    }

    /// Posts in the filtered view, in collection order
    pub fn visible<'a>(&'a self, posts: &'a [Post]) -> impl Iterator<Item = &'a Post> + 'a {
        self.filtered_indices
            .iter()
            .filter_map(move |&idx| posts.get(idx))
    }

    /// "No posts found." when a search term is active and nothing matches
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.filtered_indices.is_empty() && !self.search.get().is_empty() {
            Some(NO_POSTS_MESSAGE)
        } else {
            None
        }
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_height: self.filtered_indices.len(),
            scroll_top: self.table.scroll_offset,
            client_height: self.table.visible_rows,
        }
    }

    /// Called after every scroll. Asks for the next page near the bottom unless a fetch
    /// is already in flight.
    pub fn on_scroll(&self, metrics: ScrollMetrics, loading: bool) -> Option<ListAction> {
        if loading || !metrics.near_bottom() {
            return None;
        }
        Some(ListAction::LoadMore)
    }

    /// A child asked to be removed
    pub fn on_delete(&self, posts: &[Post], id: u64) -> ListAction {
        ListAction::SetPosts(without_post(posts, id))
    }

    /// Remove the selected row, if any
    pub fn delete_selected(&self, posts: &[Post]) -> Option<ListAction> {
        let idx = *self.filtered_indices.get(self.table.selected?)?;
        let id = PostItemView::new(posts.get(idx)?).on_remove();
        Some(self.on_delete(posts, id))
    }
}
