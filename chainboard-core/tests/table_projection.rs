use chainboard_core::{Cell, ChainEnvelope, ChainTable, WireRow};
use serde_json::json;

fn row(value: serde_json::Value) -> WireRow {
    value.as_object().expect("object row").clone()
}

#[test]
fn headers_follow_first_row_key_order() {
    let envelope = ChainEnvelope::new(vec![
        row(json!({"strike": 100, "iv": 0.2})),
        row(json!({"strike": 105, "iv": 0.18})),
    ]);

    let table = ChainTable::from_envelope(envelope);
    assert_eq!(table.columns, vec!["strike", "iv"]);
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn cells_align_to_header_positions() {
    let envelope = ChainEnvelope::new(vec![
        row(json!({"STRIKE_PRICE": 24500, "CALL_LTP": 182.5, "PUT_LTP": "176.40"})),
        row(json!({"STRIKE_PRICE": 24550, "CALL_LTP": 155.0, "PUT_LTP": "201.10"})),
    ]);

    let table = ChainTable::from_envelope(envelope);
    assert_eq!(table.rows[0][0], Cell::Number(24500.into()));
    assert_eq!(table.rows[1][2], Cell::Text("201.10".into()));
}

#[test]
fn later_rows_project_onto_first_row_columns() {
    // Second row drops "iv" and carries a key the header does not have; the
    // table must stay rectangular instead of shifting cells left.
    let envelope = ChainEnvelope::new(vec![
        row(json!({"strike": 100, "iv": 0.2})),
        row(json!({"strike": 105, "delta": 0.6})),
    ]);

    let table = ChainTable::from_envelope(envelope);
    assert_eq!(table.columns, vec!["strike", "iv"]);
    assert_eq!(table.rows[1], vec![Cell::Number(105.into()), Cell::Empty]);
}

#[test]
fn empty_data_is_the_empty_table() {
    let table = ChainTable::from_envelope(ChainEnvelope::default());
    assert!(table.is_empty());
    assert!(table.columns.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn null_values_become_empty_cells() {
    let envelope = ChainEnvelope::new(vec![row(json!({"strike": 100, "iv": null}))]);

    let table = ChainTable::from_envelope(envelope);
    assert_eq!(table.rows[0], vec![Cell::Number(100.into()), Cell::Empty]);
    assert_eq!(table.rows[0][1].to_string(), "");
}

#[test]
fn nested_values_fall_back_to_compact_json_text() {
    let envelope = ChainEnvelope::new(vec![row(json!({"greeks": {"delta": 0.5}}))]);

    let table = ChainTable::from_envelope(envelope);
    assert_eq!(table.rows[0][0], Cell::Text(r#"{"delta":0.5}"#.into()));
}

#[test]
fn envelope_round_trips_through_serde_with_key_order_intact() {
    let body = r#"{"data":[{"strike":100,"iv":0.2,"oi":1500}]}"#;
    let envelope: ChainEnvelope = serde_json::from_str(body).expect("valid envelope");

    let table = ChainTable::from_envelope(envelope.clone());
    assert_eq!(table.columns, vec!["strike", "iv", "oi"]);
    assert_eq!(serde_json::to_string(&envelope).expect("serialize"), body);
}
