//! Dracula
//! https://draculatheme.com/

use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xe2, 0xe2, 0xdc),
        muted: Color::Rgb(0x62, 0x72, 0xa4),
        border: Color::Rgb(0x44, 0x47, 0x5a),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),   // purple
        glow: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
        glow_alt: Color::Rgb(0xff, 0x79, 0xc6), // pink
        error: Color::Rgb(0xff, 0x55, 0x55),
        success: Color::Rgb(0x50, 0xfa, 0x7b),
    }
}
