//! Key bindings.
//!
//! Translates Zellij key presses into [`Event`]s for the current
//! [`InputMode`]. `Ctrl+n`/`Ctrl+p` move the card cursor in every mode.

use super::handler::Event;
use super::modes::InputMode;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an application event, or `None` if it is unbound.
///
/// # Example
///
/// ```rust
/// use roster::app::keys::map_key;
/// use roster::{Event, InputMode};
/// use zellij_tile::prelude::{BareKey, KeyWithModifier};
///
/// let slash = KeyWithModifier::new(BareKey::Char('/'));
/// assert_eq!(map_key(InputMode::Normal, &slash), Some(Event::SearchMode));
/// assert_eq!(map_key(InputMode::Search, &slash), Some(Event::Char('/')));
/// ```
#[must_use]
pub fn map_key(mode: InputMode, key: &KeyWithModifier) -> Option<Event> {
    if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::CursorDown);
    }
    if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::CursorUp);
    }
    if !is_plain(key) {
        return None;
    }

    match mode {
        InputMode::Search => Some(match key.bare_key {
            BareKey::Enter => Event::ConfirmSearch,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        }),
        InputMode::Normal => Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Enter | BareKey::Char(' ') => Event::ToggleCard,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('c') => Event::NextCity,
            BareKey::Char('C') => Event::PreviousCity,
            BareKey::Char('o') => Event::NextCompany,
            BareKey::Char('O') => Event::PreviousCompany,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        }),
    }
}

/// No modifiers, or only `Shift` (uppercase letters may carry it).
fn is_plain(key: &KeyWithModifier) -> bool {
    key.key_modifiers.iter().all(|modifier| *modifier == KeyModifier::Shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::alt(KeyWithModifier::new(BareKey::Char('x')).with_alt_modifier())]
    #[case::ctrl(KeyWithModifier::new(BareKey::Char('x')).with_ctrl_modifier())]
    #[case::super_key(KeyWithModifier::new(BareKey::Char('x')).with_super_modifier())]
    fn modified_chars_do_not_type_into_search(#[case] key: KeyWithModifier) {
        assert_eq!(map_key(InputMode::Search, &key), None);
    }

    #[rstest]
    #[case::plain(KeyWithModifier::new(BareKey::Char('x')), 'x')]
    #[case::shifted(KeyWithModifier::new(BareKey::Char('X')).with_shift_modifier(), 'X')]
    fn plain_chars_type_into_search(#[case] key: KeyWithModifier, #[case] expected: char) {
        assert_eq!(map_key(InputMode::Search, &key), Some(Event::Char(expected)));
    }

    #[rstest]
    #[case(InputMode::Normal)]
    #[case(InputMode::Search)]
    fn ctrl_n_and_p_move_in_every_mode(#[case] mode: InputMode) {
        let down = KeyWithModifier::new(BareKey::Char('n')).with_ctrl_modifier();
        let up = KeyWithModifier::new(BareKey::Char('p')).with_ctrl_modifier();

        assert_eq!(map_key(mode, &down), Some(Event::CursorDown));
        assert_eq!(map_key(mode, &up), Some(Event::CursorUp));
    }

    #[test]
    fn ctrl_q_does_not_close() {
        let key = KeyWithModifier::new(BareKey::Char('q')).with_ctrl_modifier();

        assert_eq!(map_key(InputMode::Normal, &key), None);
    }

    #[rstest]
    #[case(BareKey::Char('C'), Event::PreviousCity)]
    #[case(BareKey::Char('o'), Event::NextCompany)]
    #[case(BareKey::Enter, Event::ToggleCard)]
    #[case(BareKey::Char('t'), Event::ToggleTheme)]
    fn normal_mode_commands(#[case] bare_key: BareKey, #[case] expected: Event) {
        assert_eq!(map_key(InputMode::Normal, &KeyWithModifier::new(bare_key)), Some(expected));
    }
}
