/// Selection and scroll position of the post list
pub struct TableState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 10,
        }
    }
}

impl TableState {
    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Wheel scrolling moves the viewport, not the selection
    pub fn scroll_by(&mut self, delta: isize, total: usize) {
        let max_offset = total.saturating_sub(self.visible_rows);
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(max_offset);
        if let Some(i) = self.selected {
            if i < self.scroll_offset {
                self.selected = Some(self.scroll_offset);
            } else if self.visible_rows > 0 && i >= self.scroll_offset + self.visible_rows {
                self.selected = Some(self.scroll_offset + self.visible_rows - 1);
            }
        }
    }

    /// Keep selection and offset inside a list that shrank to `total` rows
    pub fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.selected = None;
            self.scroll_offset = 0;
            return;
        }
        if let Some(i) = self.selected {
            self.selected = Some(i.min(total - 1));
        }
        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(1));
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(visible_rows: usize) -> TableState {
        TableState {
            visible_rows,
            ..Default::default()
        }
    }

    #[test]
    fn moving_past_the_viewport_scrolls() {
        let mut t = state(3);
        for _ in 0..5 {
            t.select_next(10);
        }
        assert_eq!(t.selected, Some(4));
        assert_eq!(t.scroll_offset, 2);
        t.select_last(10);
        assert_eq!(t.scroll_offset, 7);
        t.select_first();
        assert_eq!((t.selected, t.scroll_offset), (Some(0), 0));
    }

    #[test]
    fn wheel_scroll_is_bounded_and_drags_selection() {
        let mut t = state(3);
        t.select_first();
        t.scroll_by(5, 6);
        assert_eq!(t.scroll_offset, 3);
        assert_eq!(t.selected, Some(3));
        t.scroll_by(-10, 6);
        assert_eq!(t.scroll_offset, 0);
        assert_eq!(t.selected, Some(2));
    }

    #[test]
    fn clamp_after_shrink() {
        let mut t = state(3);
        t.select_last(5);
        t.clamp(2);
        assert_eq!(t.selected, Some(1));
        assert!(t.scroll_offset <= 1);
        t.clamp(0);
        assert_eq!(t.selected, None);
    }
}
