//! Command keybindings with string key parsing

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Map from command names to the key strings that trigger them
///
/// Commands are kept sorted by name, so when one key is bound to several
/// commands the alphabetically first command wins. Use
/// [`Keybindings::find_conflict`] to reject such maps up front.
///
/// Serialises as a flat JSON object:
///
/// ```json
/// { "quit": ["q", "esc"], "new_profile": ["n"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keybindings {
    commands: BTreeMap<String, Vec<String>>,
}

impl Keybindings {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a command to keys, replacing any previous binding
    pub fn add(&mut self, command: impl Into<String>, keys: Vec<String>) {
        self.commands.insert(command.into(), keys);
    }

    /// Builder-style [`Keybindings::add`]
    pub fn with(mut self, command: impl Into<String>, keys: &[&str]) -> Self {
        self.add(command, keys.iter().map(|k| k.to_string()).collect());
        self
    }

    /// Keys bound to a command
    pub fn keys(&self, command: &str) -> Option<&[String]> {
        self.commands.get(command).map(Vec::as_slice)
    }

    /// Find the command a key event triggers
    ///
    /// Character keys match case-insensitively and ignore Shift (terminals
    /// report Shift+n as `N` with SHIFT set); other modifiers must be equal.
    /// Unparseable key strings never match.
    pub fn get_command(&self, key: KeyEvent) -> Option<&str> {
        self.commands.iter().find_map(|(command, keys)| {
            keys.iter()
                .filter_map(|s| parse_key_string(s))
                .any(|bound| keys_match(&bound, &key))
                .then_some(command.as_str())
        })
    }

    /// First key string bound to a command, for help text
    pub fn first_key(&self, command: &str) -> Option<&str> {
        self.commands
            .get(command)
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    /// Merge user bindings over defaults; user entries replace whole commands
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        defaults.commands.extend(user.commands);
        defaults
    }

    /// First key string that triggers two different commands
    ///
    /// Returns `(key, earlier command, later command)`.
    pub fn find_conflict(&self) -> Option<(&str, &str, &str)> {
        let mut seen: Vec<((KeyCode, KeyModifiers), &str)> = Vec::new();
        for (command, keys) in &self.commands {
            for key_str in keys {
                let Some(parsed) = parse_key_string(key_str) else {
                    continue;
                };
                let normalized = normalize(&parsed);
                if let Some((_, other)) = seen
                    .iter()
                    .find(|(key, owner)| *key == normalized && *owner != command.as_str())
                {
                    return Some((key_str.as_str(), *other, command.as_str()));
                }
                seen.push((normalized, command.as_str()));
            }
        }
        None
    }
}

fn normalize(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    match key.code {
        KeyCode::Char(c) => (
            KeyCode::Char(c.to_lowercase().next().unwrap_or(c)),
            key.modifiers.difference(KeyModifiers::SHIFT),
        ),
        code => (code, key.modifiers),
    }
}

fn keys_match(bound: &KeyEvent, pressed: &KeyEvent) -> bool {
    normalize(bound) == normalize(pressed)
}

/// Parse a key string like "q", "esc", "ctrl+n", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // A lone "+" is the key itself, not a separator
    let (modifier_part, key_part) = match key_str.rsplit_once('+') {
        Some((mods, key)) if !key.is_empty() => (Some(mods), key),
        _ => (None, key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_part.into_iter().flat_map(|m| m.split('+')) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Format a key string for display (e.g., "ctrl+n" -> "^N", "esc" -> "Esc")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();
    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let (modifier_part, key_part) = match key_str.rsplit_once('+') {
        Some((mods, key)) if !key.is_empty() => (mods, key),
        _ => ("", key_str.as_str()),
    };

    let mut out = String::new();
    for part in modifier_part.split('+') {
        match part.trim() {
            "ctrl" | "control" => out.push('^'),
            "shift" => out.push_str("Shift+"),
            "alt" => out.push_str("Alt+"),
            _ => {}
        }
    }

    match key_part {
        "esc" | "escape" => out.push_str("Esc"),
        "enter" | "return" => out.push_str("Enter"),
        "space" => out.push_str("Space"),
        "tab" => out.push_str("Tab"),
        "backspace" => out.push_str("Backspace"),
        "delete" => out.push_str("Del"),
        other if other.chars().count() == 1 => {
            out.extend(other.chars().flat_map(char::to_uppercase))
        }
        other => {
            let mut chars = other.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let result = parse_key_string("q").unwrap();
        assert_eq!(result.code, KeyCode::Char('q'));
        assert_eq!(result.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_parse_ctrl_key() {
        let result = parse_key_string("ctrl+n").unwrap();
        assert_eq!(result.code, KeyCode::Char('n'));
        assert!(result.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));

        let backtab = parse_key_string("shift+tab").unwrap();
        assert_eq!(backtab.code, KeyCode::BackTab);
        assert!(backtab.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("   ").is_none());
        assert!(parse_key_string("nonsense").is_none());
        assert!(parse_key_string("fx").is_none());
    }

    #[test]
    fn test_get_command() {
        let bindings = Keybindings::new()
            .with("quit", &["q", "esc"])
            .with("new_profile", &["n"]);

        assert_eq!(
            bindings.get_command(parse_key_string("q").unwrap()),
            Some("quit")
        );
        assert_eq!(
            bindings.get_command(parse_key_string("esc").unwrap()),
            Some("quit")
        );
        // Character keys ignore case
        assert_eq!(
            bindings.get_command(parse_key_string("N").unwrap()),
            Some("new_profile")
        );
        // Modifiers must match exactly
        assert_eq!(
            bindings.get_command(parse_key_string("ctrl+n").unwrap()),
            None
        );
    }

    #[test]
    fn test_get_command_ignores_shift_on_characters() {
        let bindings = Keybindings::new().with("new_profile", &["n"]);

        let shifted = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT);
        assert_eq!(bindings.get_command(shifted), Some("new_profile"));

        let ctrl_shifted = KeyEvent::new(
            KeyCode::Char('N'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(bindings.get_command(ctrl_shifted), None);

        // Shift still counts for non-character keys
        let bindings = Keybindings::new().with("confirm", &["enter"]);
        let shift_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(bindings.get_command(shift_enter), None);
    }

    #[test]
    fn test_get_command_shared_key_prefers_first_command_name() {
        let bindings = Keybindings::new()
            .with("quit", &["x"])
            .with("new_profile", &["x"]);
        let key = parse_key_string("x").unwrap();

        for _ in 0..16 {
            assert_eq!(bindings.get_command(key), Some("new_profile"));
        }
    }

    #[test]
    fn test_find_conflict() {
        let clean = Keybindings::new()
            .with("quit", &["q", "esc", "q"])
            .with("new_profile", &["n"]);
        assert_eq!(clean.find_conflict(), None);

        let clash = Keybindings::new()
            .with("quit", &["q", "esc"])
            .with("new_profile", &["n", "Q"]);
        assert_eq!(clash.find_conflict(), Some(("q", "new_profile", "quit")));

        let unparseable = Keybindings::new()
            .with("quit", &["nonsense"])
            .with("new_profile", &["nonsense"]);
        assert_eq!(unparseable.find_conflict(), None);
    }

    #[test]
    fn test_merge_replaces_whole_command() {
        let defaults = Keybindings::new()
            .with("quit", &["q", "esc"])
            .with("new_profile", &["n"]);
        let user = Keybindings::new().with("quit", &["x"]);

        let merged = Keybindings::merge(defaults, user);

        assert_eq!(merged.keys("quit"), Some(&["x".to_string()][..]));
        assert_eq!(merged.first_key("new_profile"), Some("n"));
    }

    #[test]
    fn test_serde_flat_object() {
        let bindings: Keybindings =
            serde_json::from_str(r#"{ "quit": ["ctrl+c"], "new_profile": ["n", "f2"] }"#)
                .unwrap();

        assert_eq!(bindings.first_key("quit"), Some("ctrl+c"));
        assert_eq!(bindings.keys("new_profile").map(<[String]>::len), Some(2));

        let json = serde_json::to_value(&bindings).unwrap();
        assert_eq!(json["quit"][0], "ctrl+c");
    }

    #[test]
    fn test_format_key_for_display() {
        assert_eq!(format_key_for_display("q"), "Q");
        assert_eq!(format_key_for_display("ctrl+n"), "^N");
        assert_eq!(format_key_for_display("esc"), "Esc");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_for_display("alt+enter"), "Alt+Enter");
        assert_eq!(format_key_for_display("f2"), "F2");
    }
}
