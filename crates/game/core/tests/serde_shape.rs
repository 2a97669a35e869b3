//! Serialized shapes handed to external shells.
#![cfg(feature = "serde")]

use cat_core::{Board, GameConfig, GameEngine, Outcome, Position};

#[test]
fn layout_uses_camel_case_fields() {
    let engine = GameEngine::new(GameConfig::default()).unwrap();
    let value = serde_json::to_value(engine.layout()).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["cellSize", "cols", "padding", "rows", "xGap", "yGap"]);
    assert_eq!(object["cols"], 11);
    assert_eq!(object["padding"], 20.0);
}

#[test]
fn block_outcome_serializes_positions_and_outcome() {
    let mut engine = GameEngine::new(GameConfig::default().with_board_size(5)).unwrap();
    let report = engine.attempt_block(Position::new(0, 0)).unwrap();
    let value = serde_json::to_value(report).unwrap();

    assert_eq!(value["blocked"], serde_json::json!({ "x": 0, "y": 0 }));
    assert_eq!(value["to"], serde_json::json!({ "x": 1, "y": 2 }));
    assert_eq!(value["outcome"], serde_json::json!("in_progress"));
    assert_eq!(
        serde_json::from_value::<Outcome>(value["outcome"].clone()).unwrap(),
        Outcome::InProgress
    );
    assert_eq!(
        serde_json::from_str::<Outcome>(r#""cat_escaped""#).unwrap(),
        Outcome::CatEscaped
    );
}

#[test]
fn board_deserialization_checks_cell_count() {
    assert!(serde_json::from_str::<Board>(r#"{"size":5,"cells":[]}"#).is_err());
    assert!(serde_json::from_str::<Board>(r#"{"size":1,"cells":[false]}"#).is_err());

    let board = Board::from_rows(&[". # .", " . . .", ". . #"]).unwrap();
    let value = serde_json::to_value(&board).unwrap();
    assert_eq!(value["size"], 3);
    let restored: Board = serde_json::from_value(value).unwrap();
    assert_eq!(restored, board);

    let engine =
        GameEngine::from_board(GameConfig::default(), restored, Position::new(1, 1)).unwrap();
    assert_eq!(engine.size(), 3);
    assert_eq!(engine.outcome(), Outcome::InProgress);
}

#[test]
fn escape_route_serializes_its_cells() {
    let engine =
        GameEngine::from_board(GameConfig::default(), Board::new(5), Position::new(2, 2)).unwrap();
    let route = engine.escape_route().unwrap();
    let value = serde_json::to_value(&route).unwrap();

    let cells = value["cells"].as_array().unwrap();
    assert_eq!(cells.len(), route.hops() + 1);
    assert_eq!(cells[0], serde_json::json!({ "x": 2, "y": 2 }));
}
