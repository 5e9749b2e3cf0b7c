use super::modal_input;
use crate::menu::MenuWindow;
use crate::modal::Input;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_arrows_and_escape() {
    let menu = MenuWindow::new(7, 5);
    assert_eq!(modal_input(press(KeyCode::Left), &menu), Some(Input::ArrowLeft));
    assert_eq!(
        modal_input(press(KeyCode::Char('l')), &menu),
        Some(Input::ArrowRight)
    );
    assert_eq!(modal_input(press(KeyCode::Esc), &menu), Some(Input::Escape));
    assert_eq!(
        modal_input(press(KeyCode::Char(']')), &menu),
        Some(Input::PageMenuForward)
    );
    assert_eq!(modal_input(press(KeyCode::Tab), &menu), Some(Input::NextSection));
    assert_eq!(modal_input(press(KeyCode::Char('x')), &menu), None);
}

#[test]
fn test_digits_pick_from_visible_window() {
    let mut menu = MenuWindow::new(7, 5);
    assert_eq!(
        modal_input(press(KeyCode::Char('1')), &menu),
        Some(Input::SelectSection(0))
    );
    assert_eq!(modal_input(press(KeyCode::Char('6')), &menu), None);

    menu.page_forward();
    menu.page_forward();
    assert_eq!(
        modal_input(press(KeyCode::Char('5')), &menu),
        Some(Input::SelectSection(6))
    );
}

#[test]
fn test_key_release_ignored() {
    let menu = MenuWindow::new(7, 5);
    let release = KeyEvent {
        code: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(modal_input(release, &menu), None);
}
