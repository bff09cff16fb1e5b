use ratatui::style::Color;

/// Runtime theme with semantic colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Page background
    pub bg0: Color,
    /// Card and bar background
    pub bg1: Color,
    /// Raised background (active nav pill, front card)
    pub bg2: Color,

    /// Headings
    pub fg0: Color,
    /// Body text
    pub fg1: Color,
    /// Secondary text, inactive nav items, unrevealed entries
    pub muted: Color,
    /// Card outlines and the idle timeline rail
    pub border: Color,

    /// Active nav item, front card, timeline fill
    pub accent: Color,
    /// Hero glow and tech tags
    pub glow: Color,
    /// Second glow color
    pub glow_alt: Color,

    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::midnight()
    }
}
