//! Fetch orchestration: page cursor, loading flag and the post collection.
//!
//! Each page is fetched on a worker thread and handed back over a channel;
//! `process_messages` applies results on the UI thread.

use crate::post::{append_page, Post};
use crate::source::PostSource;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};

/// Shown in place of the list once a fetch has failed
pub const FAILURE_MESSAGE: &str = "Unable to load posts. Please try again later.";

/// Messages from fetch workers
pub enum FeedMessage {
    PageLoaded { page: u32, posts: Vec<Post> },
    PageFailed { page: u32, error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    /// Terminal for the session
    Failed,
}

pub struct Feed {
    source: Arc<dyn PostSource>,
    posts: Vec<Post>,
    next_page: u32,
    phase: FeedPhase,
    dedupe_by_id: bool,
    last_error: Option<String>,
    /// Bumped whenever `posts` changes so views can refilter
    revision: u64,

    bg_sender: Sender<FeedMessage>,
    bg_receiver: Receiver<FeedMessage>,
}

impl Feed {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        let (tx, rx) = unbounded();
        Self {
            source,
            posts: Vec::new(),
            next_page: 1,
            phase: FeedPhase::Idle,
            dedupe_by_id: false,
            last_error: None,
            revision: 0,
            bg_sender: tx,
            bg_receiver: rx,
        }
    }

    pub fn with_dedupe(mut self, dedupe_by_id: bool) -> Self {
        self.dedupe_by_id = dedupe_by_id;
        self
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FeedPhase::Loading
    }

    pub fn has_failed(&self) -> bool {
        self.phase == FeedPhase::Failed
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the collection (used after a removal)
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.revision += 1;
    }

    /// Request the page under the cursor. Ignored while a fetch is outstanding or after
    /// a failure; returns whether a fetch was started.
    pub fn load_more(&mut self) -> bool {
        match self.phase {
            FeedPhase::Loading => {
                warn!(page = self.next_page, "load more ignored, fetch already in flight");
                return false;
            }
            FeedPhase::Failed => return false,
            FeedPhase::Idle => {}
        }

        self.phase = FeedPhase::Loading;
        let page = self.next_page;
        let source = Arc::clone(&self.source);
        let tx = self.bg_sender.clone();

        thread::spawn(move || {
            let msg = match source.fetch_page(page) {
                Ok(posts) => FeedMessage::PageLoaded { page, posts },
                Err(e) => FeedMessage::PageFailed {
                    page,
                    error: e.to_string(),
                },
            };
            // Receiver is gone once the app has quit
            let _ = tx.send(msg);
        });
        true
    }

    /// Apply every finished fetch without blocking. Returns how many were applied.
    pub fn process_messages(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.bg_receiver.try_recv() {
            self.apply(msg);
            applied += 1;
        }
        applied
    }

    /// Block until one fetch finishes or `timeout` passes. Returns whether one was applied.
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.bg_receiver.recv_timeout(timeout) {
            Ok(msg) => {
                self.apply(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn apply(&mut self, msg: FeedMessage) {
        match msg {
            FeedMessage::PageLoaded { page, posts } => {
                let received = posts.len();
                let added = append_page(&mut self.posts, posts, self.dedupe_by_id);
                self.next_page = page + 1;
                self.phase = FeedPhase::Idle;
                self.revision += 1;
                info!(page, received, added, total = self.posts.len(), "page loaded");
            }
            FeedMessage::PageFailed { page, error } => {
                error!(page, %error, "page fetch failed");
                self.phase = FeedPhase::Failed;
                self.last_error = Some(error);
            }
        }
    }
}
