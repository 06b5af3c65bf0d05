use chainboard_core::WireRow;
use serde_json::{Value, json};

fn row<const N: usize>(entries: [(&str, Value); N]) -> WireRow {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Standard fixture chain: a few strikes around the money with the column
/// vocabulary a dashboard backend emits.
#[must_use]
pub fn chain_rows() -> Vec<WireRow> {
    vec![
        row([
            ("CALL_OI", json!(18250)),
            ("CALL_LTP", json!(182.5)),
            ("CALL_IV", json!(14.21)),
            ("STRIKE_PRICE", json!(24500)),
            ("PUT_IV", json!(15.02)),
            ("PUT_LTP", json!(176.4)),
            ("PUT_OI", json!(21340)),
        ]),
        row([
            ("CALL_OI", json!(15780)),
            ("CALL_LTP", json!(155.0)),
            ("CALL_IV", json!(13.87)),
            ("STRIKE_PRICE", json!(24550)),
            ("PUT_IV", json!(14.76)),
            ("PUT_LTP", json!(201.1)),
            ("PUT_OI", json!(19010)),
        ]),
        row([
            ("CALL_OI", json!(22910)),
            ("CALL_LTP", json!(131.2)),
            ("CALL_IV", json!(13.55)),
            ("STRIKE_PRICE", json!(24600)),
            ("PUT_IV", json!(14.43)),
            ("PUT_LTP", json!(228.7)),
            ("PUT_OI", json!(16455)),
        ]),
    ]
}

/// Minimal two-column row, handy for exact-markup assertions.
#[must_use]
pub fn single_row() -> Vec<WireRow> {
    vec![row([("strike", json!(100)), ("iv", json!(0.2))])]
}
