use crate::tui::colors;
use crate::Post;
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row};

pub const REMOVE_LABEL: &str = "[ Remove ]";

/// One post row: the title followed by every line of the body
pub struct PostItemView<'a> {
    post: &'a Post,
}

impl<'a> PostItemView<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self { post }
    }

    /// The removal control was activated; report which post to drop
    pub fn on_remove(&self) -> u64 {
        self.post.id
    }

    /// Terminal lines the row occupies
    pub fn height(&self) -> u16 {
        let body = self.post.body_lines().len().min(u16::MAX as usize - 1) as u16;
        1 + body
    }

    pub fn row(&self, visual_idx: usize, is_selected: bool) -> Row<'a> {
        let bg = colors::row_background(visual_idx, is_selected);
        let modifier = if is_selected {
            Modifier::BOLD
        } else {
            Modifier::empty()
        };

        let id_cell = Cell::from(format!("#{}", self.post.id))
            .style(Style::default().fg(colors::ID).bg(bg));

        let mut lines = vec![Line::from(Span::styled(
            self.post.title.as_str(),
            Style::default().fg(colors::TITLE).add_modifier(modifier),
        ))];
        let body_style = Style::default().fg(colors::BODY).add_modifier(Modifier::ITALIC);
        lines.extend(
            self.post
                .body_lines()
                .into_iter()
                .map(|line| Line::from(Span::styled(line, body_style))),
        );
        let body_cell = Cell::from(Text::from(lines)).style(Style::default().bg(bg));

        let remove_style = if is_selected {
            Style::default()
                .fg(colors::REMOVE)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::REMOVE_IDLE).bg(bg)
        };
        let remove_cell = Cell::from(REMOVE_LABEL).style(remove_style);

        Row::new(vec![id_cell, body_cell, remove_cell]).height(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_reports_the_post_id() {
        let post = Post::new(1, "Test Title", "Test Body");
        assert_eq!(PostItemView::new(&post).on_remove(), 1);
    }

    #[test]
    fn height_fits_title_and_every_body_line() {
        let post = Post::new(1, "t", "one\ntwo\nthree");
        assert_eq!(PostItemView::new(&post).height(), 4);
        let empty = Post::new(2, "t", "");
        assert_eq!(PostItemView::new(&empty).height(), 2);
    }
}
