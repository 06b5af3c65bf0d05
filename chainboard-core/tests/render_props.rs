use chainboard_core::{Cell, ChainTable, render_table};
use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        ".*".prop_map(Cell::Text),
        any::<i64>().prop_map(|n| Cell::Number(n.into())),
        any::<bool>().prop_map(Cell::Bool),
        Just(Cell::Empty),
    ]
}

fn arb_table() -> impl Strategy<Value = ChainTable> {
    (1usize..6).prop_flat_map(|width| {
        (
            prop::collection::vec(".*", width),
            prop::collection::vec(prop::collection::vec(arb_cell(), width), 0..12),
        )
            .prop_map(|(columns, rows)| ChainTable { columns, rows })
    })
}

proptest! {
    // One header row plus one body row per data row, no matter the content.
    // Escaping makes this countable: no cell text can emit a raw '<'.
    #[test]
    fn row_count_is_body_rows_plus_header(table in arb_table()) {
        let html = render_table(&table);
        prop_assert_eq!(html.matches("<tr>").count(), table.rows.len() + 1);
        prop_assert_eq!(html.matches("</tr>").count(), table.rows.len() + 1);
    }

    #[test]
    fn header_cell_count_matches_columns(table in arb_table()) {
        let html = render_table(&table);
        prop_assert_eq!(html.matches("<th>").count(), table.columns.len());
        prop_assert_eq!(
            html.matches("<td>").count(),
            table.rows.len() * table.columns.len()
        );
    }

    #[test]
    fn markup_is_a_single_table_element(table in arb_table()) {
        let html = render_table(&table);
        prop_assert!(html.starts_with("<table>"));
        prop_assert!(html.ends_with("</table>"));
        prop_assert_eq!(html.matches("<table>").count(), 1);
    }

    #[test]
    fn rendering_is_deterministic(table in arb_table()) {
        prop_assert_eq!(render_table(&table), render_table(&table));
    }
}
