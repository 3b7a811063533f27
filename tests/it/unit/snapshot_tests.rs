//! Snapshot tests for the outbound intent wire shape using the insta crate.
//!
//! The external state owner consumes intents as tagged JSON events; these
//! snapshots pin the exact payload field names and tag values.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use planboard::Intent;

#[test]
fn snapshot_move_item_intent() {
    let intent = Intent::MoveItem { id: "t1".into(), x: 0.75, y: 0.5 };
    insta::assert_json_snapshot!(intent, @r#"
    {
      "event": "move_item",
      "id": "t1",
      "x": 0.75,
      "y": 0.5
    }
    "#);
}

#[test]
fn snapshot_move_block_intent() {
    let intent = Intent::MoveBlock { block_id: "b1".into(), start_minute: 570 };
    insta::assert_json_snapshot!(intent, @r#"
    {
      "event": "move_block",
      "block_id": "b1",
      "start_minute": 570
    }
    "#);
}

#[test]
fn snapshot_resize_block_intent() {
    let intent = Intent::ResizeBlock { block_id: "b1".into(), duration_minutes: 45 };
    insta::assert_json_snapshot!(intent, @r#"
    {
      "event": "resize_block",
      "block_id": "b1",
      "duration_minutes": 45
    }
    "#);
}

#[test]
fn snapshot_schedule_item_intent() {
    let intent = Intent::ScheduleItem { item_id: "t7".into(), start_minute: 555 };
    insta::assert_json_snapshot!(intent, @r#"
    {
      "event": "schedule_item",
      "item_id": "t7",
      "start_minute": 555
    }
    "#);
}

#[test]
fn snapshot_add_item_to_block_intent() {
    let intent = Intent::AddItemToBlock { block_id: "b1".into(), item_id: "t7".into() };
    insta::assert_json_snapshot!(intent, @r#"
    {
      "event": "add_item_to_block",
      "block_id": "b1",
      "item_id": "t7"
    }
    "#);
}

#[test]
fn intents_round_trip_through_json() {
    let intents = vec![
        Intent::MoveItem { id: "t1".into(), x: 0.02, y: 0.98 },
        Intent::MoveBlock { block_id: "b1".into(), start_minute: 480 },
        Intent::ResizeBlock { block_id: "b1".into(), duration_minutes: 15 },
        Intent::ScheduleItem { item_id: "t2".into(), start_minute: 1185 },
        Intent::AddItemToBlock { block_id: "b2".into(), item_id: "t2".into() },
    ];
    for intent in intents {
        let json = serde_json::to_string(&intent).unwrap();
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }
}
