use crate::model::DailyTotals;
use crate::util::{day_label, is_weekend};

const WEEKEND_STYLE: &str = r#" style="color:#770000;""#;

/// Render the totals as a bordered HTML table.
///
/// One row per date, most recent first, and one column per author in
/// ascending order. Saturday and Sunday rows colour every cell.
///
/// Authors are ordered by UTF-8 bytes, which matches UTF-16 code unit order
/// except between U+E000..=U+FFFF and supplementary-plane characters.
pub fn render_table(totals: &DailyTotals) -> String {
    let authors = totals.authors();

    let mut table = String::from(r#"<table border="1"><tr><th>Date</th>"#);
    for author in &authors {
        table.push_str(&format!("<th>{}</th>", html_escape(author)));
    }
    table.push_str("</tr>");

    for (date, day) in totals.iter().rev() {
        let style = if is_weekend(*date) { WEEKEND_STYLE } else { "" };
        table.push_str(&format!("<tr><td{style}>{}</td>", day_label(*date)));
        for author in &authors {
            let count = day.get(*author).copied().unwrap_or(0);
            table.push_str(&format!("<td{style}>{count}</td>"));
        }
        table.push_str("</tr>");
    }

    table.push_str("</table>");
    table
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
