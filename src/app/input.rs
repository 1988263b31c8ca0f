//! Keyboard-to-action mapping, per screen.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::kernel::{Action, AppState, Screen};

pub(super) fn action_for_event(state: &AppState, event: &Event) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl+Q / Ctrl+C quit from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('q') | KeyCode::Char('c') = key.code {
            return Some(Action::Quit);
        }
    }

    match state.screen {
        Screen::Welcome => welcome_action(key),
        Screen::Signup => signup_action(key),
        Screen::Quiz => quiz_action(key),
        Screen::Result => result_action(key),
        Screen::Authoring => authoring_action(key),
    }
}

fn welcome_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => Some(Action::StartQuiz),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::CreateQuiz),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

fn signup_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::SignupSubmit),
        KeyCode::Backspace => Some(Action::SignupBackspace),
        KeyCode::Left => Some(Action::SignupCursorLeft),
        KeyCode::Right => Some(Action::SignupCursorRight),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SignupAppend(ch))
        }
        _ => None,
    }
}

fn quiz_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::CycleOption { delta: -1 }),
        KeyCode::Down => Some(Action::CycleOption { delta: 1 }),
        KeyCode::Enter => Some(Action::Advance),
        KeyCode::Char(ch @ '1'..='4') => Some(Action::SelectOption {
            index: ch as usize - '1' as usize,
        }),
        _ => None,
    }
}

fn result_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

fn authoring_action(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Some(Action::ClearForm),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrevField),
        KeyCode::Enter => Some(Action::SubmitQuestion),
        KeyCode::Esc => Some(Action::FinishAuthoring),
        KeyCode::Backspace => Some(Action::AuthoringBackspace),
        KeyCode::Left => Some(Action::AuthoringCursorLeft),
        KeyCode::Right => Some(Action::AuthoringCursorRight),
        KeyCode::Char(ch) => Some(Action::AuthoringAppend(ch)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/input.rs"]
mod tests;
