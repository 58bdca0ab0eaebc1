//! Integration tests for the session flow.
//!
//! Each test drives the App with the same event sequences the runtime
//! would produce: key presses, then the completion event the emitted
//! action would have triggered. Tests end with oracle checks on the
//! view, the directory, the history store, and the error/notice fields.

use banter_app::{App, AppAction, AppEvent, KeyInput, View};
use banter_core::{Identity, Message, Room};
use chrono::Utc;

fn identity() -> Identity {
    Identity { token: "t".into(), username: "alice".into(), user_id: "u1".into() }
}

fn room(id: &str, name: &str) -> Room {
    Room {
        id: id.into(),
        name: name.into(),
        creator_id: "u1".into(),
        created_at: Utc::now(),
        deleted_at: None,
    }
}

fn delivery(room_id: &str, body: &str) -> AppEvent {
    AppEvent::SocketMessage {
        message: Message::outgoing(room_id, &identity(), body),
    }
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
}

/// Type credentials and submit; returns the actions of the submit.
fn submit_credentials(app: &mut App, username: &str, password: &str) -> Vec<AppAction> {
    type_str(app, username);
    let _ = app.handle(AppEvent::Key(KeyInput::Tab));
    type_str(app, password);
    app.handle(AppEvent::Key(KeyInput::Enter))
}

/// Log the app in with a canned directory.
fn logged_in_app(rooms: Vec<Room>) -> App {
    let mut app = App::new();
    let _ = submit_credentials(&mut app, "alice", "pw");
    let _ = app.handle(AppEvent::LoggedIn { identity: identity(), rooms });
    app
}

#[test]
fn login_success_lands_in_the_room_list() {
    let mut app = App::new();

    let actions = submit_credentials(&mut app, "alice", "pw");
    assert!(actions.iter().any(|a| matches!(
        a,
        AppAction::Login { username, password } if username == "alice" && password == "pw"
    )));

    let _ = app.handle(AppEvent::LoggedIn {
        identity: Identity { token: "tok".into(), username: "alice".into(), user_id: "u1".into() },
        rooms: vec![room("r1", "general")],
    });

    assert!(matches!(app.view(), View::ListingRooms { .. }));
    assert!(app.is_connected());
    assert_eq!(app.session().rooms().len(), 1);
    assert_eq!(app.session().rooms().first().map(|r| r.id.as_str()), Some("r1"));
}

#[test]
fn login_failure_stays_with_the_error() {
    let mut app = App::new();
    let _ = submit_credentials(&mut app, "alice", "wrong");

    let _ = app.handle(AppEvent::RequestFailed { message: "invalid username or password".into() });

    assert!(matches!(app.view(), View::LoggingIn(_)));
    assert_eq!(app.error(), Some("invalid username or password"));
    assert!(!app.session().is_authenticated());
}

#[test]
fn select_then_chat_appends_exactly_one_message() {
    let mut app = logged_in_app(vec![room("r1", "general")]);

    // Select the room under the cursor: history is requested first.
    let actions = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(actions.iter().any(|a| matches!(
        a,
        AppAction::LoadHistory { room_id } if room_id == "r1"
    )));
    assert!(matches!(app.view(), View::ListingRooms { .. }), "no transition before the load");

    let _ = app.handle(AppEvent::HistoryLoaded { room_id: "r1".into(), messages: vec![] });
    assert!(matches!(app.view(), View::Chatting(chat) if chat.room_id == "r1"));

    let _ = app.handle(delivery("r1", "hi"));
    assert_eq!(app.messages("r1").len(), 1);
    assert_eq!(app.messages("r1").first().map(|m| m.body.as_str()), Some("hi"));
}

#[test]
fn select_with_empty_directory_is_a_no_op() {
    let mut app = logged_in_app(vec![]);

    let actions = app.handle(AppEvent::Key(KeyInput::Enter));

    assert!(!actions.iter().any(|a| matches!(a, AppAction::LoadHistory { .. })));
    assert!(matches!(app.view(), View::ListingRooms { .. }));
}

#[test]
fn cursor_clamps_to_the_directory() {
    let mut app = logged_in_app(vec![room("r1", "one"), room("r2", "two")]);

    let _ = app.handle(AppEvent::Key(KeyInput::Up));
    assert!(matches!(app.view(), View::ListingRooms { cursor: 0 }));

    for _ in 0..5 {
        let _ = app.handle(AppEvent::Key(KeyInput::Down));
    }
    assert!(matches!(app.view(), View::ListingRooms { cursor: 1 }));
}

#[test]
fn empty_room_name_is_rejected_without_a_call() {
    let mut app = logged_in_app(vec![]);
    let _ = app.handle(AppEvent::Key(KeyInput::Char('n')));
    assert!(matches!(app.view(), View::CreatingRoom { .. }));

    let actions = app.handle(AppEvent::Key(KeyInput::Enter));

    assert!(!actions.iter().any(|a| matches!(a, AppAction::CreateRoom { .. })));
    assert!(matches!(app.view(), View::CreatingRoom { .. }));
}

#[test]
fn created_room_is_appended_and_selected() {
    let mut app = logged_in_app(vec![room("r1", "general")]);
    let _ = app.handle(AppEvent::Key(KeyInput::Char('n')));
    type_str(&mut app, "banter-dev");

    let actions = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(actions.iter().any(|a| matches!(
        a,
        AppAction::CreateRoom { name } if name == "banter-dev"
    )));

    let _ = app.handle(AppEvent::RoomCreated { room: room("r2", "banter-dev") });

    assert_eq!(app.session().rooms().len(), 2);
    assert!(matches!(app.view(), View::ListingRooms { cursor: 1 }));
}

#[test]
fn join_by_id_refreshes_then_loads_history() {
    let mut app = logged_in_app(vec![room("r1", "general")]);
    let _ = app.handle(AppEvent::Key(KeyInput::Char('e')));
    type_str(&mut app, "r9");

    let actions = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(actions.iter().any(|a| matches!(a, AppAction::JoinRoom { room_id } if room_id == "r9")));

    let actions = app.handle(AppEvent::RoomJoined {
        room_id: "r9".into(),
        rooms: Some(vec![room("r1", "general"), room("r9", "joined")]),
    });
    assert!(actions.iter().any(|a| matches!(
        a,
        AppAction::LoadHistory { room_id } if room_id == "r9"
    )));
    assert_eq!(app.session().rooms().len(), 2);

    let _ = app.handle(AppEvent::HistoryLoaded { room_id: "r9".into(), messages: vec![] });
    assert!(matches!(app.view(), View::Chatting(chat) if chat.room_id == "r9"));
}

#[test]
fn failed_directory_refresh_keeps_the_old_one() {
    let mut app = logged_in_app(vec![room("r1", "general")]);
    let _ = app.handle(AppEvent::Key(KeyInput::Char('e')));
    type_str(&mut app, "r9");
    let _ = app.handle(AppEvent::Key(KeyInput::Enter));

    let _ = app.handle(AppEvent::RoomJoined { room_id: "r9".into(), rooms: None });

    assert_eq!(app.session().rooms().len(), 1);
}

#[test]
fn send_clears_the_draft_only_after_the_ack() {
    let mut app = logged_in_app(vec![room("r1", "general")]);
    let _ = app.handle(AppEvent::Key(KeyInput::Enter));
    let _ = app.handle(AppEvent::HistoryLoaded { room_id: "r1".into(), messages: vec![] });

    type_str(&mut app, "hello there");
    let actions = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(actions.iter().any(|a| matches!(
        a,
        AppAction::SendChat { message }
            if message.room_id == "r1" && message.body == "hello there" && message.id.is_empty()
    )));

    // Transmit failure: error shown, draft kept.
    let _ = app.handle(AppEvent::RequestFailed { message: "could not send message".into() });
    assert!(matches!(app.view(), View::Chatting(chat) if chat.input.text() == "hello there"));
    assert!(app.error().is_some());

    // Retry succeeds: draft cleared, error cleared by the new submit.
    let _ = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(app.error().is_none());
    let _ = app.handle(AppEvent::ChatSent { room_id: "r1".into() });
    assert!(matches!(app.view(), View::Chatting(chat) if chat.input.is_empty()));
}

#[test]
fn arrival_for_another_room_does_not_move_the_viewport() {
    let mut app = logged_in_app(vec![room("r1", "general"), room("r2", "other")]);
    let _ = app.handle(AppEvent::Key(KeyInput::Enter));
    let _ = app.handle(AppEvent::HistoryLoaded { room_id: "r1".into(), messages: vec![] });

    // Scroll away from the bottom.
    let _ = app.handle(AppEvent::Key(KeyInput::Up));
    let _ = app.handle(AppEvent::Key(KeyInput::Up));
    assert!(matches!(app.view(), View::Chatting(chat) if chat.scroll == 2));

    // A message for another room is stored but leaves the viewport.
    let _ = app.handle(delivery("r2", "elsewhere"));
    assert!(matches!(app.view(), View::Chatting(chat) if chat.scroll == 2));
    assert_eq!(app.messages("r2").len(), 1);

    // A message for the active room re-pins to the latest entry.
    let _ = app.handle(delivery("r1", "here"));
    assert!(matches!(app.view(), View::Chatting(chat) if chat.scroll == 0));
}

#[test]
fn order_is_preserved_across_many_deliveries() {
    let mut app = logged_in_app(vec![room("r1", "general")]);

    for i in 0..50 {
        let _ = app.handle(delivery("r1", &format!("m{i}")));
    }

    let bodies: Vec<_> = app.messages("r1").iter().map(|m| m.body.clone()).collect();
    let expected: Vec<_> = (0..50).map(|i| format!("m{i}")).collect();
    assert_eq!(bodies, expected);
}

#[test]
fn error_lifecycle_across_transitions() {
    let mut app = App::new();
    let _ = submit_credentials(&mut app, "alice", "bad");
    let _ = app.handle(AppEvent::RequestFailed { message: "nope".into() });
    assert!(app.error().is_some());

    // The next state-changing interaction clears the stale error.
    let _ = app.handle(AppEvent::Key(KeyInput::Esc));
    assert!(matches!(app.view(), View::Registering(_)));
    assert!(app.error().is_none());
}
