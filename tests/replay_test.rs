//! Tests for headless replay.

use strictly_boxes::{BoxesConfig, parse_moves, run_replay};
use strictly_boxes_core::Position;

#[test]
fn test_parse_numbers_and_labels() {
    let moves = parse_moves("0, center top-right 8").expect("valid moves");
    assert_eq!(
        moves,
        vec![
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomRight
        ]
    );
}

#[test]
fn test_parse_rejects_unknown_position() {
    let err = parse_moves("0,9").unwrap_err();
    assert!(err.message.contains("'9'"));
}

#[test]
fn test_parse_rejects_empty_list() {
    assert!(parse_moves(" , ").is_err());
}

#[test]
fn test_player_one_wins_top_row() {
    let moves = parse_moves("0,3,1,4,2").unwrap();
    let report = run_replay(&moves, &BoxesConfig::default());

    assert_eq!(report.phase, "finished");
    assert_eq!(report.winner, Some(1));
    assert!(!report.tie);
    assert_eq!(report.next_player, None);
    assert_eq!(report.message, "Winner");
    assert_eq!(report.grid, "O|O|O\n-+-+-\nX|X|6\n-+-+-\n7|8|9");
    assert!(report.render_text().contains("Player 1 wins: Winner"));
}

#[test]
fn test_tie_report() {
    let moves = parse_moves("0 2 1 3 5 4 6 7 8").unwrap();
    let report = run_replay(&moves, &BoxesConfig::default());

    assert!(report.tie);
    assert_eq!(report.winner, None);
    assert_eq!(report.message, "It's a Tie!");
}

#[test]
fn test_ignored_moves_are_reported() {
    let moves = parse_moves("4,4,0,3,1,5,8").unwrap();
    let report = run_replay(&moves, &BoxesConfig::default());

    // The second 4 is taken; 5 wins the middle row, so the trailing 8 lands after the game.
    let turns: Vec<usize> = report.ignored.iter().map(|m| m.turn).collect();
    assert_eq!(turns, vec![1, 6]);
    assert_eq!(report.ignored[0].reason, "Center is already claimed");
    assert_eq!(report.ignored[1].reason, "No game in progress");
    assert_eq!(report.winner, Some(1));
}

#[test]
fn test_unfinished_game_reports_next_player() {
    let moves = parse_moves("4").unwrap();
    let report = run_replay(&moves, &BoxesConfig::default());
    assert_eq!(report.phase, "playing");
    assert_eq!(report.next_player, Some(2));
    assert!(report.render_text().contains("player 2 to move"));
}

#[test]
fn test_json_report_shape() {
    let moves = parse_moves("0,3,1,4,2").unwrap();
    let report = run_replay(&moves, &BoxesConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["winner"], 1);
    assert_eq!(json["board"][0], "O");
    assert_eq!(json["board"][8], serde_json::Value::Null);
    assert_eq!(json["claimed"][0], "TopLeft");
    assert!(json.get("grid").is_none());
}

#[test]
fn test_grid_uses_configured_marks() {
    let config = BoxesConfig::from_toml(
        r#"
[players]
one_mark = "A"
two_mark = "B"
"#,
    )
    .unwrap();
    let moves = parse_moves("4,0").unwrap();
    let report = run_replay(&moves, &config);

    assert_eq!(report.grid, "B|2|3\n-+-+-\n4|A|6\n-+-+-\n7|8|9");
    assert_eq!(report.board[4].as_deref(), Some("A"));
}
