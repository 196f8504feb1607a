use tetris_stack::core::Session;
use tetris_stack::term::{SessionView, EMPTY_MARKER, MENU, PROMPT, TITLE};

#[test]
fn term_view_renders_full_initial_frame() {
    let snap = Session::new().snapshot();
    let frame = SessionView::new().frame(&snap);

    assert_eq!(
        frame,
        "Next queue (front -> back) [5/5]: [I#1] -> [O#2] -> [T#3] -> [L#4] -> [J#5]\n\
         Reserve stack (base -> top) [0/3]: (empty)\n"
    );
}

#[test]
fn term_view_tracks_session_mutations() {
    let mut session = Session::new();
    session.play().unwrap();
    session.reserve().unwrap();

    let view = SessionView::new();
    let snap = session.snapshot();

    assert_eq!(
        view.queue_line(&snap),
        "Next queue (front -> back) [5/5]: [T#3] -> [L#4] -> [J#5] -> [S#6] -> [Z#7]"
    );
    assert_eq!(
        view.reserve_line(&snap),
        "Reserve stack (base -> top) [1/3]: [O#2]"
    );
}

#[test]
fn term_view_counts_match_container_fill() {
    let mut session = Session::new();
    for _ in 0..3 {
        session.reserve().unwrap();
    }

    let snap = session.snapshot();
    let view = SessionView::new();
    assert!(view.queue_line(&snap).contains("[5/5]"));
    assert!(view.reserve_line(&snap).contains("[3/3]"));
    assert!(!view.reserve_line(&snap).contains(EMPTY_MARKER));
}

#[test]
fn term_menu_lists_every_command() {
    let menu = MENU.join("\n");
    for code in ["0", "1", "2", "3"] {
        assert!(menu.contains(code), "menu must list command {code}");
    }
    assert!(!TITLE.is_empty());
    assert!(PROMPT.ends_with(' '));
}
