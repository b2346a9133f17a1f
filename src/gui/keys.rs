//! Keyboard and mouse bindings for the GUI skin.

use super::navigator::Navigator;
use super::pane::ScrollDirection;

/// A key press: the key name as a browser reports it (`j`, `ArrowDown`,
/// `PageUp`, `3`) plus the Ctrl modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string(), ctrl: false }
    }

    pub fn ctrl(key: &str) -> Self {
        Self { key: key.to_string(), ctrl: true }
    }

    /// Parse a typed key name. `C-d`, `Ctrl-d` and `Ctrl+d` carry the modifier.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        for prefix in ["C-", "Ctrl-", "Ctrl+", "ctrl-", "ctrl+"] {
            if let Some(key) = token.strip_prefix(prefix) {
                if !key.is_empty() {
                    return Self::ctrl(key);
                }
            }
        }
        Self::new(token)
    }

    fn digit(&self) -> Option<usize> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}

/// What a key or click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The cursor moved; the content pane should return to the top.
    Moved { scroll_to_top: bool },
    Scroll(ScrollDirection),
    Ignored,
}

/// Apply a key press to the navigator.
pub fn handle_key(nav: &mut Navigator, input: &KeyInput) -> NavOutcome {
    let key = input.key.as_str();

    if key == "PageDown" || (input.ctrl && key == "d") {
        return NavOutcome::Scroll(ScrollDirection::Down);
    }
    if key == "PageUp" || (input.ctrl && key == "u") {
        return NavOutcome::Scroll(ScrollDirection::Up);
    }

    match key {
        "ArrowUp" | "k" | "ArrowDown" | "j" if nav.current().section_index == 0 => NavOutcome::Ignored,
        "ArrowUp" | "k" => {
            nav.previous_item();
            NavOutcome::Moved { scroll_to_top: false }
        }
        "ArrowDown" | "j" => {
            nav.next_item();
            NavOutcome::Moved { scroll_to_top: false }
        }
        "ArrowLeft" | "h" => {
            nav.previous_section();
            NavOutcome::Moved { scroll_to_top: true }
        }
        "ArrowRight" | "l" => {
            nav.next_section();
            NavOutcome::Moved { scroll_to_top: true }
        }
        _ => match input.digit() {
            Some(n) => {
                nav.go_to_section(n.saturating_sub(1), 0);
                NavOutcome::Moved { scroll_to_top: true }
            }
            None => NavOutcome::Ignored,
        },
    }
}

/// Click on an item in a section list.
pub fn click_item(nav: &mut Navigator, section_index: usize, item_index: usize) -> NavOutcome {
    let changed = nav.click_item(section_index, item_index);
    NavOutcome::Moved { scroll_to_top: changed }
}

/// Click on a section frame or taskbar entry.
pub fn click_section(nav: &mut Navigator, section_index: usize) -> NavOutcome {
    let changed = nav.click_section(section_index);
    NavOutcome::Moved { scroll_to_top: changed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::navigator::Position;

    fn navigator() -> Navigator {
        Navigator::new([0, 3, 2, 0, 1])
    }

    #[test]
    fn test_parse() {
        assert_eq!(KeyInput::parse("j"), KeyInput::new("j"));
        assert_eq!(KeyInput::parse("C-d"), KeyInput::ctrl("d"));
        assert_eq!(KeyInput::parse("Ctrl+u"), KeyInput::ctrl("u"));
        assert_eq!(KeyInput::parse(" ArrowDown "), KeyInput::new("ArrowDown"));
        assert_eq!(KeyInput::parse("C-"), KeyInput::new("C-"));
    }

    #[test]
    fn test_scroll_keys() {
        let mut nav = navigator();
        assert_eq!(handle_key(&mut nav, &KeyInput::new("PageDown")), NavOutcome::Scroll(ScrollDirection::Down));
        assert_eq!(handle_key(&mut nav, &KeyInput::ctrl("u")), NavOutcome::Scroll(ScrollDirection::Up));
        // plain d and u are not bound
        assert_eq!(handle_key(&mut nav, &KeyInput::new("d")), NavOutcome::Ignored);
    }

    #[test]
    fn test_item_keys_ignored_on_home() {
        let mut nav = navigator();
        assert_eq!(handle_key(&mut nav, &KeyInput::new("j")), NavOutcome::Ignored);
        assert_eq!(handle_key(&mut nav, &KeyInput::new("ArrowUp")), NavOutcome::Ignored);
        assert_eq!(nav.current(), Position::default());
    }

    #[test]
    fn test_item_and_section_keys() {
        let mut nav = navigator();
        assert_eq!(handle_key(&mut nav, &KeyInput::new("l")), NavOutcome::Moved { scroll_to_top: true });
        assert_eq!(handle_key(&mut nav, &KeyInput::new("ArrowDown")), NavOutcome::Moved { scroll_to_top: false });
        assert_eq!(nav.current(), Position { section_index: 1, item_index: 1 });
        handle_key(&mut nav, &KeyInput::new("k"));
        assert_eq!(nav.current().item_index, 0);
        handle_key(&mut nav, &KeyInput::new("ArrowLeft"));
        assert_eq!(nav.current().section_index, 0);
    }

    #[test]
    fn test_digit_keys() {
        let mut nav = navigator();
        handle_key(&mut nav, &KeyInput::new("3"));
        assert_eq!(nav.current().section_index, 2);
        handle_key(&mut nav, &KeyInput::new("9"));
        assert_eq!(nav.current().section_index, 4);
        handle_key(&mut nav, &KeyInput::new("0"));
        assert_eq!(nav.current().section_index, 0);
        assert_eq!(handle_key(&mut nav, &KeyInput::new("33")), NavOutcome::Ignored);
    }

    #[test]
    fn test_clicks() {
        let mut nav = navigator();
        assert_eq!(click_item(&mut nav, 1, 2), NavOutcome::Moved { scroll_to_top: true });
        assert_eq!(click_item(&mut nav, 1, 0), NavOutcome::Moved { scroll_to_top: false });
        assert_eq!(click_section(&mut nav, 4), NavOutcome::Moved { scroll_to_top: true });
    }
}
