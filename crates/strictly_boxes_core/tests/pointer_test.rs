//! Tests for pointer event dispatch.

use strictly_boxes_core::{
    GameController, GamePhase, Messages, Outcome, Player, PointerEvent, Position, Screen, Surface,
    Target, ViewState,
};

#[test]
fn test_new_game_button_starts_game() {
    let mut game = GameController::new(ViewState::new());
    game.handle(PointerEvent::Activated(Target::NewGame));
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.surface().visible_screen(), Some(Screen::Board));
}

#[test]
fn test_full_game_through_pointer_events() {
    let mut game = GameController::new(ViewState::new());
    game.handle(PointerEvent::Activated(Target::NewGame));
    for idx in [4, 0, 2, 6, 3, 5, 1, 7, 8] {
        let cell = Target::Cell(Position::ALL[idx]);
        game.handle(PointerEvent::Entered(cell));
        game.handle(PointerEvent::Activated(cell));
        game.handle(PointerEvent::Left(cell));
    }

    // X O O / O O X / X X O
    assert_eq!(game.phase(), GamePhase::Finished(Outcome::Tie));
    assert_eq!(game.surface().visible_screen(), Some(Screen::Finish));

    game.handle(PointerEvent::Activated(Target::NewGame));
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.board().claimed_count(), 0);
}

#[test]
fn test_events_elsewhere_are_ignored() {
    let mut game = GameController::new(ViewState::new());
    game.handle(PointerEvent::Activated(Target::NewGame));
    let before = game.clone();

    game.handle(PointerEvent::Activated(Target::Elsewhere));
    game.handle(PointerEvent::Entered(Target::NewGame));
    game.handle(PointerEvent::Left(Target::Elsewhere));

    assert_eq!(game.board(), before.board());
    assert_eq!(game.surface(), before.surface());
}

#[test]
fn test_win_message_template() {
    let messages = Messages {
        win: "{player} wins".to_string(),
        ..Messages::default()
    };
    let mut game = GameController::with_messages(ViewState::new(), messages);
    game.start_game();
    for idx in [3, 0, 4, 1, 8, 2] {
        let _ = game.claim(Position::ALL[idx]);
    }
    assert_eq!(game.phase().outcome(), Some(Outcome::Win(Player::Two)));
    assert_eq!(game.surface().message(), "X wins");
}

/// A surface that only knows about screens.
#[derive(Default)]
struct ScreensOnly {
    shown: Vec<(Screen, bool)>,
}

impl Surface for ScreensOnly {
    fn set_screen_visible(&mut self, screen: Screen, visible: bool) {
        self.shown.push((screen, visible));
    }
}

#[test]
fn test_partial_surface_ignores_missing_targets() {
    let mut game = GameController::new(ScreensOnly::default());
    game.start_game();
    for idx in [0, 3, 1, 4, 2] {
        let _ = game.claim(Position::ALL[idx]);
    }
    let shown = &game.surface().shown;
    assert_eq!(shown.last(), Some(&(Screen::Finish, true)));
}

#[test]
fn test_borrowed_surface() {
    let mut view = ViewState::new();
    {
        let mut game = GameController::new(&mut view);
        game.start_game();
        let _ = game.claim(Position::Center);
    }
    assert_eq!(view.cell(Position::Center), Some(Player::One));
}
