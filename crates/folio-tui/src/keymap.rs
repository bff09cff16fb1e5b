use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::config::KeymapConfig;
use folio_core::SectionId;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Binding for a key event, normalized to the form `parse_key_binding` produces
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::SHIFT | KeyModifiers::ALT);
        match key.code {
            KeyCode::BackTab => Self::shift(KeyCode::Tab),
            KeyCode::Char(c) if c.is_ascii_uppercase() => {
                Self::new(KeyCode::Char(c), modifiers | KeyModifiers::SHIFT)
            }
            // Terminals disagree on whether '?' carries SHIFT
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                Self::new(KeyCode::Char(c), modifiers.difference(KeyModifiers::SHIFT))
            }
            code => Self::new(code, modifiers),
        }
    }
}

/// Key-to-action table built from config plus the fixed bindings
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Bound to the two-key "gg" sequence
    sequence: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let configured: [(&str, Action); 20] = [
            (config.quit.as_str(), Action::Quit),
            (config.scroll_down.as_str(), Action::ScrollDown),
            (config.scroll_up.as_str(), Action::ScrollUp),
            (config.scroll_half_down.as_str(), Action::ScrollHalfPageDown),
            (config.scroll_half_up.as_str(), Action::ScrollHalfPageUp),
            (config.scroll_page_down.as_str(), Action::ScrollPageDown),
            (config.scroll_page_up.as_str(), Action::ScrollPageUp),
            (config.jump_to_top.as_str(), Action::JumpToTop),
            (config.jump_to_bottom.as_str(), Action::JumpToBottom),
            (config.next_section.as_str(), Action::NextSection),
            (config.prev_section.as_str(), Action::PrevSection),
            (config.toggle_menu.as_str(), Action::ToggleMenu),
            (config.next_project.as_str(), Action::NextProject),
            (config.prev_project.as_str(), Action::PrevProject),
            (config.next_image.as_str(), Action::NextImage),
            (config.prev_image.as_str(), Action::PrevImage),
            (config.next_link.as_str(), Action::NextLink),
            (config.open_link.as_str(), Action::OpenLink),
            (config.select.as_str(), Action::Select),
            (config.help.as_str(), Action::Help),
        ];

        let mut keymap = Self {
            bindings: HashMap::new(),
            sequence: None,
        };
        for (notation, action) in configured {
            keymap.bind(notation, action);
        }

        // Fixed bindings; Ctrl-C and Esc always win
        keymap
            .bindings
            .insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        keymap
            .bindings
            .insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);
        let fallbacks = [
            (KeyCode::Down, Action::ScrollDown),
            (KeyCode::Up, Action::ScrollUp),
            (KeyCode::PageDown, Action::ScrollPageDown),
            (KeyCode::PageUp, Action::ScrollPageUp),
            (KeyCode::Home, Action::JumpToTop),
            (KeyCode::End, Action::JumpToBottom),
            (KeyCode::Right, Action::NextImage),
            (KeyCode::Left, Action::PrevImage),
        ];
        for (code, action) in fallbacks {
            keymap
                .bindings
                .entry(KeyBinding::simple(code))
                .or_insert(action);
        }
        // 1-5 jump straight to a section, in nav order
        for (digit, section) in ('1'..='9').zip(SectionId::ALL) {
            keymap
                .bindings
                .entry(KeyBinding::simple(KeyCode::Char(digit)))
                .or_insert(Action::GotoSection(section));
        }

        keymap
    }

    fn bind(&mut self, notation: &str, action: Action) {
        if notation.trim() == "gg" {
            self.sequence = Some(action);
            return;
        }
        let Some(binding) = parse_key_binding(notation) else {
            warn!("Ignoring unparseable key '{}' for {:?}", notation, action);
            return;
        };
        match self.bindings.get(&binding) {
            Some(existing) => warn!(
                "'{}' is already {:?}; not binding it to {:?}",
                notation, existing, action
            ),
            None => {
                self.bindings.insert(binding, action);
            }
        }
    }

    pub fn action(&self, binding: &KeyBinding) -> Option<Action> {
        self.bindings.get(binding).copied()
    }

    /// Action for the completed "gg" sequence
    pub fn sequence_action(&self) -> Option<Action> {
        self.sequence
    }

    /// A bare 'g' starts the sequence when one is bound
    pub fn starts_sequence(&self, binding: &KeyBinding) -> bool {
        self.sequence.is_some() && *binding == KeyBinding::simple(KeyCode::Char('g'))
    }
}

/// Vim-style notation: "j", "?", "G" (shift), "<C-d>", "<S-Tab>", "<CR>",
/// "<Space>", "<F5>". Modifier prefixes may be chained, as in "<C-S-x>".
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        if !inner.is_empty() {
            return parse_special_key(inner);
        }
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(KeyBinding::shift(KeyCode::Char(c))),
        (Some(c), None) => Some(KeyBinding::simple(KeyCode::Char(c))),
        _ => None,
    }
}

fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = inner;
    loop {
        let flag = match rest.get(..2) {
            Some("C-") | Some("c-") => KeyModifiers::CONTROL,
            Some("S-") | Some("s-") => KeyModifiers::SHIFT,
            Some("A-") | Some("a-") | Some("M-") | Some("m-") => KeyModifiers::ALT,
            _ => break,
        };
        modifiers |= flag;
        rest = &rest[2..];
    }
    parse_key_name(rest).map(|code| KeyBinding::new(code, modifiers))
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("j"),
            Some(KeyBinding::simple(KeyCode::Char('j')))
        );
        assert_eq!(
            parse_key_binding("?"),
            Some(KeyBinding::simple(KeyCode::Char('?')))
        );
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
        assert_eq!(parse_key_binding("jk"), None);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<C-d>"),
            Some(KeyBinding::ctrl(KeyCode::Char('d')))
        );
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(parse_key_binding("<F5>"), Some(KeyBinding::simple(KeyCode::F(5))));
        assert_eq!(
            parse_key_binding("<C-S-x>"),
            Some(KeyBinding::new(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            ))
        );
        assert_eq!(parse_key_binding("<Hyper-x>"), None);
    }

    #[test]
    fn test_event_normalization() {
        let backtab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeyBinding::from_event(&backtab), KeyBinding::shift(KeyCode::Tab));

        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            KeyBinding::from_event(&question),
            KeyBinding::simple(KeyCode::Char('?'))
        );

        let upper = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::NONE);
        assert_eq!(
            KeyBinding::from_event(&upper),
            KeyBinding::shift(KeyCode::Char('N'))
        );
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::default();

        assert_eq!(
            keymap.action(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.action(&KeyBinding::simple(KeyCode::Char('m'))),
            Some(Action::ToggleMenu)
        );
        assert_eq!(
            keymap.action(&KeyBinding::shift(KeyCode::Tab)),
            Some(Action::PrevProject)
        );
        assert_eq!(
            keymap.action(&KeyBinding::simple(KeyCode::Char('4'))),
            Some(Action::GotoSection(SectionId::TechStack))
        );
        assert_eq!(keymap.action(&KeyBinding::simple(KeyCode::Char('6'))), None);

        assert!(keymap.starts_sequence(&KeyBinding::simple(KeyCode::Char('g'))));
        assert_eq!(keymap.sequence_action(), Some(Action::JumpToTop));
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            help: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.action(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
    }
}
