use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Rows the page must scroll before the navigation bar appears
    #[serde(default = "default_nav_reveal_rows")]
    pub nav_reveal_rows: u16,
    /// Terminals narrower than this get the hamburger menu instead of the pill bar
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: u16,
    /// Show the fixed social links rail
    #[serde(default = "default_true")]
    pub show_social_rail: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            nav_reveal_rows: default_nav_reveal_rows(),
            compact_breakpoint: default_compact_breakpoint(),
            show_social_rail: default_true(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve used by the smooth scroll animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable animated scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a string or a table
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name or a table with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg0: Option<String>,
    pub bg1: Option<String>,
    pub fg0: Option<String>,
    pub fg1: Option<String>,
    /// Highlight for the active nav item, front card and timeline fill
    pub accent: Option<String>,
    /// Dimmed text (inactive nav items, unrevealed entries)
    pub muted: Option<String>,
    /// Borders of cards and panels
    pub border: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Motion tuning for scroll-linked animations and the scroll-spy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Spring smoothing applied to the timeline progress
    #[serde(default)]
    pub spring: SpringConfig,
    /// Viewport fraction the timeline top must reach for progress 0
    #[serde(default = "default_timeline_start")]
    pub timeline_start: f64,
    /// Viewport fraction the timeline bottom must reach for progress 1
    #[serde(default = "default_timeline_end")]
    pub timeline_end: f64,
    /// Scroll-spy band inset from the top of the viewport (fraction)
    #[serde(default = "default_spy_top_inset")]
    pub spy_top_inset: f64,
    /// Scroll-spy band inset from the bottom of the viewport (fraction)
    #[serde(default = "default_spy_bottom_inset")]
    pub spy_bottom_inset: f64,
    /// Visible fraction of an entry before its reveal animation fires
    #[serde(default = "default_reveal_amount")]
    pub reveal_amount: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            timeline_start: default_timeline_start(),
            timeline_end: default_timeline_end(),
            spy_top_inset: default_spy_top_inset(),
            spy_bottom_inset: default_spy_bottom_inset(),
            reveal_amount: default_reveal_amount(),
        }
    }
}

/// Spring smoothing the timeline progress. The defaults are critically
/// damped; changing stiffness or mass alone leaves damping at 20.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Distance from the target below which the spring may settle
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
    /// Speed below which the spring may settle
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
            rest_delta: default_rest_delta(),
            rest_speed: default_rest_speed(),
        }
    }
}

/// Drag-to-swipe thresholds for the project carousels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Release offset (distance units) past which a drag changes the image
    #[serde(default = "default_swipe_offset")]
    pub swipe_offset: f64,
    /// Release velocity (distance units per second) past which a drag changes the image
    #[serde(default = "default_swipe_velocity")]
    pub swipe_velocity: f64,
    /// Distance units covered by one terminal column
    #[serde(default = "default_units_per_cell")]
    pub units_per_cell: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_offset: default_swipe_offset(),
            swipe_velocity: default_swipe_velocity(),
            units_per_cell: default_units_per_cell(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Page scrolling
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Section navigation
    /// Smooth-scroll to the next section anchor
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Smooth-scroll to the previous section anchor
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Toggle the hamburger menu
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,

    // Project carousels
    /// Focus the next project carousel
    #[serde(default = "default_key_next_project")]
    pub next_project: String,
    /// Focus the previous project carousel
    #[serde(default = "default_key_prev_project")]
    pub prev_project: String,
    /// Bring the next image of the focused carousel to the front
    #[serde(default = "default_key_next_image")]
    pub next_image: String,
    /// Bring the previous image of the focused carousel to the front
    #[serde(default = "default_key_prev_image")]
    pub prev_image: String,

    // Social links
    /// Focus the next social link
    #[serde(default = "default_key_next_link")]
    pub next_link: String,
    /// Open the focused social link
    #[serde(default = "default_key_open_link")]
    pub open_link: String,

    /// Select (menu item or focused link)
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            toggle_menu: default_key_toggle_menu(),
            next_project: default_key_next_project(),
            prev_project: default_key_prev_project(),
            next_image: default_key_next_image(),
            prev_image: default_key_prev_image(),
            next_link: default_key_next_link(),
            open_link: default_key_open_link(),
            select: default_key_select(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "n".to_string() }
fn default_key_prev_section() -> String { "N".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }
fn default_key_next_project() -> String { "<Tab>".to_string() }
fn default_key_prev_project() -> String { "<S-Tab>".to_string() }
fn default_key_next_image() -> String { "l".to_string() }
fn default_key_prev_image() -> String { "h".to_string() }
fn default_key_next_link() -> String { "s".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_nav_reveal_rows() -> u16 {
    3
}

fn default_compact_breakpoint() -> u16 {
    80
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_timeline_start() -> f64 {
    0.85
}

fn default_timeline_end() -> f64 {
    0.15
}

fn default_spy_top_inset() -> f64 {
    0.40
}

fn default_spy_bottom_inset() -> f64 {
    0.55
}

fn default_reveal_amount() -> f64 {
    0.3
}

fn default_stiffness() -> f64 {
    100.0
}

/// Critical damping, `2 * sqrt(stiffness * mass)`, for the default stiffness and mass
fn default_damping() -> f64 {
    2.0 * (default_stiffness() * default_mass()).sqrt()
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest_delta() -> f64 {
    0.001
}

fn default_rest_speed() -> f64 {
    0.01
}

fn default_swipe_offset() -> f64 {
    40.0
}

fn default_swipe_velocity() -> f64 {
    500.0
}

fn default_units_per_cell() -> f64 {
    8.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when absent
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Configuration directory, always ~/.config/folio on all platforms
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the portfolio content file path
    pub fn content_path() -> PathBuf {
        Self::config_dir().join("content.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.compact_breakpoint, 80);
        assert_eq!(config.motion.spring.stiffness, 100.0);
        assert_eq!(config.motion.spring.damping, 20.0);
        assert_eq!(config.motion.spring.rest_delta, 0.001);
        assert_eq!(config.gesture.swipe_offset, 40.0);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_theme_as_string() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table() {
        let toml = r##"
[ui.theme]
name = "dracula"
[ui.theme.colors]
accent = "#ff0000"
"##;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_partial_motion_section() {
        let toml = "[motion.spring]\nstiffness = 250.0\n";
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.motion.spring.stiffness, 250.0);
        assert_eq!(config.motion.spring.damping, 20.0);
        assert_eq!(config.motion.timeline_start, 0.85);
    }

    #[test]
    fn test_easing_snake_case() {
        let config = AppConfig::from_toml("[ui.scroll]\neasing = \"ease_out\"\n").unwrap();
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_config_survives_serialization() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.ui.theme.name, config.ui.theme.name);
        assert_eq!(parsed.keymap.jump_to_top, "gg");
    }
}
