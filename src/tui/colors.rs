use ratatui::style::Color;

pub const ID: Color = Color::DarkGray;
pub const TITLE: Color = Color::LightBlue;
pub const BODY: Color = Color::Gray;
pub const REMOVE: Color = Color::LightRed;
pub const REMOVE_IDLE: Color = Color::Red;
pub const EMPTY: Color = Color::Yellow;
pub const FAILURE: Color = Color::Red;
pub const LOADER: Color = Color::Cyan;
pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const BLURRED_BORDER: Color = Color::DarkGray;
pub const PLACEHOLDER: Color = Color::DarkGray;
pub const STATUS_BG: Color = Color::Rgb(40, 40, 50);

/// Alternating row background, highlighted when selected
pub fn row_background(visual_idx: usize, is_selected: bool) -> Color {
    if is_selected {
        Color::Rgb(60, 60, 80)
    } else if visual_idx % 2 == 1 {
        Color::Rgb(25, 25, 35)
    } else {
        Color::Reset
    }
}
