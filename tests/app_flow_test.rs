// tests/app_flow_test.rs - Driving the app with key and mouse events

mod common;

use common::{board_with_notes, temp_store};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noteworthy::app::{App, Page};
use noteworthy::command::{Command, InputContext};
use noteworthy::geometry::Xy;
use noteworthy::mode::Mode;
use noteworthy::note::NoteLayout;
use noteworthy::storage::BoardStore;
use noteworthy::ui::renderer::render_app;
use noteworthy::ui::theme::Theme;
use noteworthy::viewport::Viewport;
use ratatui::{Terminal, backend::TestBackend};

async fn press(app: &mut App, code: KeyCode) -> bool {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match Command::from_key(key, app.input_context()) {
        Some(command) => app.execute_command(command).await,
        None => false,
    }
}

async fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch)).await;
    }
}

async fn mouse(app: &mut App, kind: MouseEventKind, x: u16, y: u16) {
    let event = MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    };
    if let Some(command) = Command::from_mouse(event) {
        app.execute_command(command).await;
    }
}

async fn new_app(store: BoardStore) -> App {
    App::new(store, NoteLayout::default(), Viewport::new(80, 24)).await
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let theme = Theme::default();
    terminal.draw(|f| render_app(f, app, &theme)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..24 {
        for x in 0..80 {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_create_board_write_note_and_reopen() {
    let (_dir, store) = temp_store();
    let mut app = new_app(store.clone()).await;

    press(&mut app, KeyCode::Enter).await;
    type_str(&mut app, "Groceries").await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.input_context(), InputContext::Board(Mode::Board));

    press(&mut app, KeyCode::Char('+')).await;
    press(&mut app, KeyCode::Enter).await;
    type_str(&mut app, "milk and eggs").await;
    press(&mut app, KeyCode::Esc).await;
    press(&mut app, KeyCode::Char('4')).await;
    press(&mut app, KeyCode::Esc).await;
    press(&mut app, KeyCode::Esc).await;

    let boards = store.load_all().await.unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].notes()[0].content(), ["milk and eggs"]);
    assert_eq!(boards[0].notes()[0].color(), noteworthy::color::PALETTE[4]);

    // Load Board is now the first option
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Enter).await;
    match app.page() {
        Page::Board(page) => assert_eq!(page.board().name(), "Groceries"),
        _ => panic!("Expected board page"),
    }
}

#[tokio::test]
async fn test_esc_from_main_menu_quits() {
    let (_dir, store) = temp_store();
    let mut app = new_app(store).await;
    assert!(press(&mut app, KeyCode::Esc).await);
}

#[tokio::test]
async fn test_mouse_pans_board_and_drags_notes() {
    let (_dir, store) = temp_store();
    store
        .save(&board_with_notes("Desk", &[&["first"], &["second"]]))
        .await
        .unwrap();
    let mut app = new_app(store).await;
    app.open_board("Desk");

    // Drag the second note (at x = 25) three cells right
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 26, 1).await;
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 26, 1).await;
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 29, 1).await;
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 29, 1).await;

    // Pan by dragging empty board
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 70, 15).await;
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 70, 15).await;
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 72, 16).await;

    let Page::Board(page) = app.page() else {
        panic!("Expected board page");
    };
    assert_eq!(page.board().notes()[1].position(), Xy::new(28, 0));
    assert_eq!(page.board().offset(), Xy::new(-2, -1));
    assert_eq!(page.focused(), None);
}

#[tokio::test]
async fn test_tab_rotates_focus_and_minus_removes() {
    let (_dir, store) = temp_store();
    let mut app = new_app(store).await;
    app.open_board("Scratch");
    press(&mut app, KeyCode::Char('+')).await;
    press(&mut app, KeyCode::Char('+')).await;
    press(&mut app, KeyCode::Tab).await;

    let Page::Board(page) = app.page() else {
        panic!("Expected board page");
    };
    let first = page.board().notes()[0].id();
    assert_eq!(page.focused(), Some(first));

    press(&mut app, KeyCode::Char('-')).await;
    let Page::Board(page) = app.page() else {
        panic!("Expected board page");
    };
    assert_eq!(page.board().notes().len(), 1);
    assert_eq!(page.mode(), Mode::Board);
}

#[tokio::test]
async fn test_main_menu_renders_title_and_options() {
    let (_dir, store) = temp_store();
    let app = new_app(store).await;
    let text = screen_text(&app);
    assert!(text.contains("A note taking app for the terminal"));
    assert!(text.contains("-> New Board"));
    assert!(text.contains("   Quit"));
    assert!(!text.contains("Load Board"));
}

#[tokio::test]
async fn test_board_renders_notes_and_help() {
    let (_dir, store) = temp_store();
    store
        .save(&board_with_notes("Desk", &[&["buy stamps"]]))
        .await
        .unwrap();
    let mut app = new_app(store).await;
    app.open_board("Desk");

    let text = screen_text(&app);
    assert!(text.contains("buy stamps"));
    assert!(text.contains("New note +"));
    assert!(text.contains("Desk"));
}
