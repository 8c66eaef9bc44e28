use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DONE_TEXT: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const SELECTED_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
