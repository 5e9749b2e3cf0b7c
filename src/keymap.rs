//! Terminal key bindings for the open modal.
//!
//! Keys are translated to [`Input`]s and nothing more; deciding whether left/right step
//! subsections or sections is left to the controller, which re-checks on every press.

use crate::menu::MenuWindow;
use crate::modal::Input;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[must_use]
/// Maps a key press in the modal view to an engine input.
///
/// Digits `1`–`9` pick the n-th entry of the currently visible menu window.
pub fn modal_input(key: KeyEvent, menu: &MenuWindow) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let input = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Input::Escape,
        KeyCode::Left | KeyCode::Char('h') => Input::ArrowLeft,
        KeyCode::Right | KeyCode::Char('l') => Input::ArrowRight,
        KeyCode::Tab => Input::NextSection,
        KeyCode::BackTab => Input::PrevSection,
        KeyCode::Char('[') => Input::PageMenuBackward,
        KeyCode::Char(']') => Input::PageMenuForward,
        KeyCode::Char(c @ '1'..='9') => {
            let offset = c.to_digit(10)? as usize - 1;
            let visible = menu.visible_range();
            let section = visible.start + offset;
            if !visible.contains(&section) {
                return None;
            }
            Input::SelectSection(section)
        }
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
#[path = "tests/keymap.rs"]
mod tests;
