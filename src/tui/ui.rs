use crate::feed::FAILURE_MESSAGE;
use crate::tui::app::App;
use crate::tui::colors;
use crate::tui::item::PostItemView;
use crate::tui::search::PLACEHOLDER;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};
use unicode_width::UnicodeWidthStr;

pub const LOADING_LABEL: &str = "Loading...";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Posts
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    if app.feed.has_failed() {
        draw_failure(frame, chunks[1]);
    } else {
        draw_posts(frame, app, chunks[1]);
    }
    draw_status_bar(frame, app, chunks[2]);

    if app.header.input.focused {
        // border (1) + leading space (1)
        let typed = &app.header.input.query[..app.header.input.cursor_pos];
        let cursor_x = chunks[0].x + 2 + typed.width() as u16;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.header.input.focused {
        Style::default().fg(colors::FOCUSED_BORDER)
    } else {
        Style::default().fg(colors::BLURRED_BORDER)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let line = if app.header.input.query.is_empty() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(PLACEHOLDER, Style::default().fg(colors::PLACEHOLDER)),
        ])
    } else {
        Line::from(format!(" {}", app.header.input.query))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_failure(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(FAILURE_MESSAGE)
        .style(Style::default().fg(colors::FAILURE).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Posts "));
    frame.render_widget(paragraph, area);
}

fn draw_posts(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Posts ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let loading = app.feed.is_loading();
    // One line is kept free for the loader
    let list_height = if loading {
        inner.height.saturating_sub(1)
    } else {
        inner.height
    };
    let list_area = Rect::new(inner.x, inner.y, inner.width, list_height);
    if let Some(message) = app.list.empty_message() {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(colors::EMPTY))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, list_area);
    } else {
        let posts = app.feed.posts();
        let heights: Vec<u16> = app
            .list
            .filtered_indices
            .iter()
            .map(|&idx| {
                posts
                    .get(idx)
                    .map_or(0, |post| PostItemView::new(post).height())
            })
            .collect();

        // Rows have different heights; move the window until the selection is fully shown
        let mut start = app.list.table.scroll_offset.min(heights.len().saturating_sub(1));
        if let Some(selected) = app.list.table.selected {
            while start < selected
                && start + rows_fitting(&heights[start..], list_height) <= selected
            {
                start += 1;
            }
        }
        app.list.table.scroll_offset = start;

        let shown = rows_fitting(&heights[start..], list_height);
        let used = heights[start..start + shown]
            .iter()
            .fold(0u16, |acc, &h| acc.saturating_add(h));
        let rows: Vec<Row> = (start..start + shown)
            .enumerate()
            .filter_map(|(visual_idx, logical_idx)| {
                let post = posts.get(app.list.filtered_indices[logical_idx])?;
                let is_selected = app.list.table.selected == Some(logical_idx);
                Some(PostItemView::new(post).row(visual_idx, is_selected))
            })
            .collect();
        app.list.table.visible_rows = visible_rows(shown, used, list_height);

        let widths = [
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(10),
        ];
        frame.render_widget(Table::new(rows, widths), list_area);
    }

    if loading {
        let loader_area = Rect::new(inner.x, inner.y + list_height, inner.width, 1);
        let loader = Paragraph::new(format!("\u{23F3} {}", LOADING_LABEL))
            .style(Style::default().fg(colors::LOADER))
            .alignment(Alignment::Center);
        frame.render_widget(loader, loader_area);
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.feed.is_loading() {
        format!(" Loading page {}...", app.feed.next_page())
    } else {
        format!(
            " {} of {} posts | next page {} | {}",
            app.list.filtered_indices.len(),
            app.feed.posts().len(),
            app.feed.next_page(),
            app.status_message
        )
    };
    let hints = "/ search  d remove  Esc quit ";
    let pad = (area.width as usize).saturating_sub(left_text.width() + hints.width());
    let line = Line::from(vec![
        Span::raw(left_text),
        Span::raw(" ".repeat(pad)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::STATUS_BG)),
        area,
    );
}

/// Title plus at least one body line
const MIN_ROW_HEIGHT: u16 = 2;

/// How many leading rows fit in `list_height` lines; the first row always counts
fn rows_fitting(heights: &[u16], list_height: u16) -> usize {
    let mut used: u16 = 0;
    let mut count = 0;
    for &height in heights {
        if count > 0 && used.saturating_add(height) > list_height {
            break;
        }
        used = used.saturating_add(height);
        count += 1;
    }
    count
}

/// Posts that fit in the list. When the collection ends before the area is full, the
/// free lines count as room for more posts of the smallest height.
fn visible_rows(shown: usize, used: u16, list_height: u16) -> usize {
    let free = list_height.saturating_sub(used) / MIN_ROW_HEIGHT;
    (shown + free as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fit_by_height() {
        assert_eq!(rows_fitting(&[2, 4, 3], 6), 2);
        assert_eq!(rows_fitting(&[2, 4, 3], 9), 3);
        assert_eq!(rows_fitting(&[12, 2], 5), 1);
        assert_eq!(rows_fitting(&[], 5), 0);
    }

    #[test]
    fn visible_rows_counts_free_space() {
        assert_eq!(visible_rows(3, 18, 18), 3);
        assert_eq!(visible_rows(2, 4, 18), 9);
        assert_eq!(visible_rows(0, 0, 1), 1);
    }
}
