use super::*;

use ratatui::backend::{Backend, TestBackend};
use ratatui::layout::Position;
use ratatui::Terminal;

use crate::kernel::services::adapters::QuestionFile;
use crate::kernel::{AppState, QuizSession};
use crate::models::Question;

fn test_app(state: AppState) -> App {
    let path = std::env::temp_dir().join("quizdeck-render-tests-questions.txt");
    App::new(state, QuestionFile::new(path))
}

fn draw(app: &App, width: u16, height: u16) -> (Terminal<TestBackend>, String) {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(app, frame)).unwrap();
    let text = buffer_text(&terminal);
    (terminal, text)
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        text.push_str(cell.symbol());
        if (i + 1) % buffer.area.width as usize == 0 {
            text.push('\n');
        }
    }
    text
}

#[test]
fn welcome_screen_shows_title_and_menu() {
    let app = test_app(AppState::new(Vec::new()));
    let (_, text) = draw(&app, 100, 30);

    assert!(text.contains("Quiz App"));
    assert!(text.contains("Take a quiz, or write questions of your own."));
    assert!(text.contains("[s] Start Quiz   [c] Create Questions   [q] Quit"));
}

#[test]
fn signup_screen_shows_the_typed_username() {
    let mut state = AppState::new(Vec::new());
    state.screen = Screen::Signup;
    state.signup.value = "dana".to_string();
    state.signup.cursor = state.signup.value.len();

    let app = test_app(state);
    let (mut terminal, text) = draw(&app, 100, 30);

    assert!(text.contains("Start Quiz"));
    assert!(text.contains("Enter Username:"));
    assert!(text.contains("> dana"));
    assert!(text.contains("[Enter] Begin"));

    // Popup: x 25, width 50; inner starts at 26. Cursor row is the fourth
    // inner row, column is prompt plus the typed text.
    let cursor = terminal.backend_mut().get_cursor_position().unwrap();
    assert_eq!(cursor, Position::new(26 + 2 + 4, 12 + 3));
}

#[test]
fn signup_screen_shows_the_error_line() {
    let mut state = AppState::new(Vec::new());
    state.screen = Screen::Signup;
    state.signup.error = Some("Username cannot be empty.".to_string());

    let app = test_app(state);
    let (_, text) = draw(&app, 100, 30);

    assert!(text.contains("Username cannot be empty."));
}

#[test]
fn quiz_screen_marks_the_selected_option() {
    let mut state = AppState::new(Vec::new());
    state.bank = vec![Question::new(
        "What is the capital of France?".to_string(),
        ["London", "Paris", "Berlin", "Madrid"].map(String::from),
        1,
    )
    .unwrap()];
    let mut session = QuizSession::start("dana".to_string(), &state.bank);
    assert!(session.select(1));
    state.session = Some(session);
    state.screen = Screen::Quiz;

    let app = test_app(state);
    let (_, text) = draw(&app, 100, 30);

    assert!(text.contains("1. What is the capital of France?"));
    assert!(text.contains("( ) 1) London"));
    assert!(text.contains("(x) 2) Paris"));
    assert!(text.contains("( ) 4) Madrid"));
    assert!(text.contains("[1-4] Select  [Up/Down] Move  [Enter] Next"));
}

#[test]
fn result_screen_shows_the_final_score() {
    let mut state = AppState::new(Vec::new());
    let mut session = QuizSession::start("dana".to_string(), &state.bank);
    while session.advance() {}
    state.session = Some(session);
    state.screen = Screen::Result;

    let app = test_app(state);
    let (_, text) = draw(&app, 100, 30);

    assert!(text.contains("Quiz Completed!"));
    assert!(text.contains("Thank you, dana! Your score: 0 out of 3."));
    assert!(text.contains("[r] Restart  [q] Quit"));
}

#[test]
fn authoring_screen_lists_fields_and_draft() {
    let mut state = AppState::new(Vec::new());
    state.screen = Screen::Authoring;
    state.authoring.question.value = "What is 2+2?".to_string();
    state.authoring.question.cursor = state.authoring.question.value.len();

    let app = test_app(state);
    let (mut terminal, text) = draw(&app, 100, 30);

    assert!(text.contains("Create Your Own Quiz Questions"));
    assert!(text.contains("> Question"));
    assert!(text.contains("What is 2+2?"));
    assert!(text.contains("Option 1"));
    assert!(text.contains("Option 4"));
    assert!(text.contains("Correct Option (1-4)"));
    assert!(text.contains("[Enter] Add  [Tab] Next Field  [Ctrl+L] Clear  [Esc] Done"));

    // Popup: x 15, width 70; inner starts at 16. The cursor sits after the
    // prefix, the padded label and the draft text, on the first field row.
    let cursor = terminal.backend_mut().get_cursor_position().unwrap();
    assert_eq!(cursor, Position::new(16 + 24 + 12, 9 + 2));
}

#[test]
fn notice_is_drawn_on_the_bottom_row() {
    let mut state = AppState::new(Vec::new());
    state.notice = Some("Question added! Total custom questions: 1".to_string());

    let app = test_app(state);
    let (_, text) = draw(&app, 100, 30);

    let last_row = text.lines().last().unwrap();
    assert!(last_row.starts_with("Question added! Total custom questions: 1"));
}

#[test]
fn tiny_terminal_skips_the_signup_popup() {
    let mut state = AppState::new(Vec::new());
    state.screen = Screen::Signup;

    let app = test_app(state);
    let (_, text) = draw(&app, 10, 4);

    assert!(!text.contains("Enter Username:"));
}
