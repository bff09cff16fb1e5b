//! Gruvbox
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;

use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x3c, 0x38, 0x36),
        bg2: Color::Rgb(0x50, 0x49, 0x45),
        fg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        fg1: Color::Rgb(0xeb, 0xdb, 0xb2),
        muted: Color::Rgb(0xa8, 0x99, 0x84),
        border: Color::Rgb(0x66, 0x5c, 0x54),
        accent: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
        glow: Color::Rgb(0x83, 0xa5, 0x98),   // blue
        glow_alt: Color::Rgb(0xd3, 0x86, 0x9b), // purple
        error: Color::Rgb(0xfb, 0x49, 0x34),
        success: Color::Rgb(0xb8, 0xbb, 0x26),
    }
}

pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xeb, 0xdb, 0xb2),
        bg2: Color::Rgb(0xd5, 0xc4, 0xa1),
        fg0: Color::Rgb(0x28, 0x28, 0x28),
        fg1: Color::Rgb(0x3c, 0x38, 0x36),
        muted: Color::Rgb(0x7c, 0x6f, 0x64),
        border: Color::Rgb(0xbd, 0xae, 0x93),
        accent: Color::Rgb(0xb5, 0x76, 0x14),
        glow: Color::Rgb(0x07, 0x66, 0x78),
        glow_alt: Color::Rgb(0x8f, 0x3f, 0x71),
        error: Color::Rgb(0x9d, 0x00, 0x06),
        success: Color::Rgb(0x79, 0x74, 0x0e),
    }
}
