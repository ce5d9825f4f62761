pub mod app;
pub mod colors;
pub mod item;
pub mod list;
pub mod search;
pub mod table;
pub mod ui;

use crate::source::HttpPostSource;
use crate::AppConfig;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::stdout;
use std::sync::Arc;

/// Entry point: take over the terminal and browse posts until the user quits
pub fn run(config: &AppConfig) -> crate::Result<()> {
    let source = Arc::new(HttpPostSource::new(&config.endpoint, config.request_timeout)?);

    let mut terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(crate::PostFeedError::from)
        .and_then(|_| app::App::new(source, config).run(&mut terminal));

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
