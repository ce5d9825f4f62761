//! postfeed - terminal post browser
//!
//! Pages through a REST collection of posts (`GET <endpoint>?_page=<n>`), filters them
//! by title as you type, loads the next page when the list is scrolled to the bottom,
//! and lets you drop posts from the local view.
//!
//! # Example
//!
//! ```no_run
//! use postfeed::{filter_by_title, HttpPostSource, PostSource};
//! use std::time::Duration;
//!
//! fn main() -> postfeed::Result<()> {
//!     let source = HttpPostSource::new(postfeed::DEFAULT_ENDPOINT, Duration::from_secs(10))?;
//!     let posts = source.fetch_page(1)?;
//!
//!     for post in filter_by_title(&posts, "qui") {
//!         println!("{}: {}", post.id, post.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod post;
pub mod source;
pub mod store;
pub mod tui;

// Re-export main types
pub use config::{AppConfig, DEFAULT_ENDPOINT};
pub use error::{PostFeedError, Result};
pub use feed::{Feed, FeedPhase, FAILURE_MESSAGE};
pub use post::{filter_by_title, matching_indices, without_post, Post};
pub use source::{HttpPostSource, PostSource};
pub use store::{SearchStore, Subscription, Writable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
