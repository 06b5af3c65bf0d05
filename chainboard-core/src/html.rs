use crate::ChainTable;

/// Render a projected chain table as HTML table markup.
///
/// Output shape: one `<table>`, a first `<tr>` of `<th>` header cells, then
/// one `<tr>` of `<td>` cells per body row, in original row order. The empty
/// table renders as a bare `<table></table>`.
///
/// Header and cell text is HTML-escaped, so a value containing markup
/// characters cannot break the table structure.
///
/// Pure: the same table always yields the same string.
#[must_use]
pub fn render_table(table: &ChainTable) -> String {
    if table.is_empty() {
        return "<table></table>".to_string();
    }

    let mut html = String::from("<table><tr>");
    for column in &table.columns {
        html.push_str("<th>");
        html.push_str(&escape(column));
        html.push_str("</th>");
    }
    html.push_str("</tr>");

    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape(&cell.to_string()));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}

/// Minimal HTML escaping for text interpolated into markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
