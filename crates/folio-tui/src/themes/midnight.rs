//! Midnight: near-black neutrals with cyan and fuchsia glows

use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x0a, 0x0a, 0x0a), // neutral-950
        bg1: Color::Rgb(0x17, 0x17, 0x17), // neutral-900
        bg2: Color::Rgb(0x40, 0x40, 0x40), // neutral-700
        fg0: Color::Rgb(0xff, 0xff, 0xff),
        fg1: Color::Rgb(0xd4, 0xd4, 0xd4), // neutral-300
        muted: Color::Rgb(0xa3, 0xa3, 0xa3), // neutral-400
        border: Color::Rgb(0x52, 0x52, 0x52), // neutral-600
        accent: Color::Rgb(0x22, 0xd3, 0xee), // cyan-400
        glow: Color::Rgb(0x63, 0x66, 0xf1), // indigo-500
        glow_alt: Color::Rgb(0xe8, 0x79, 0xf9), // fuchsia-400
        error: Color::Rgb(0xf8, 0x71, 0x71),
        success: Color::Rgb(0x4a, 0xde, 0x80),
    }
}
