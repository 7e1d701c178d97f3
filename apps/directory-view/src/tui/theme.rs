//! Catppuccin Mocha palette, trimmed to what the browse screen uses.

use ratatui::style::Color;

pub const BASE: Color = Color::Rgb(30, 30, 46); // #1e1e2e
pub const SURFACE0: Color = Color::Rgb(49, 50, 68); // #313244
pub const SURFACE1: Color = Color::Rgb(69, 71, 90); // #45475a
pub const TEXT: Color = Color::Rgb(205, 214, 244); // #cdd6f4
pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200); // #a6adc8
pub const MAUVE: Color = Color::Rgb(203, 166, 247); // #cba6f7
pub const RED: Color = Color::Rgb(243, 139, 168); // #f38ba8
pub const PEACH: Color = Color::Rgb(250, 179, 135); // #fab387
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // #f9e2af
pub const GREEN: Color = Color::Rgb(166, 227, 161); // #a6e3a1
pub const TEAL: Color = Color::Rgb(148, 226, 213); // #94e2d5
pub const BLUE: Color = Color::Rgb(137, 180, 250); // #89b4fa

pub const PANEL_BORDER: Color = SURFACE1;
pub const PANEL_BORDER_ACTIVE: Color = MAUVE;
