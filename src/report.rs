//! Rendering of a [`Summary`] for the notification message.
//!
//! Presentation only: every figure is printed from the summary as-is.

use crate::date::month_name;
use crate::summary::Summary;
use std::fmt::Write;

/// Renders the summary as an HTML document.
pub fn render_html(summary: &Summary) -> String {
    let mut months = String::new();
    for (month, count) in summary.transactions_by_month() {
        // Writing to a String cannot fail
        let _ = writeln!(
            months,
            "<p>Number of transactions in {}: {}</p>",
            display_month(*month),
            count
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<body>

<h1>Transaction summary</h1>

<p>Total balance is {balance}</p>
{months}<p>Average debit amount: {debit}</p>
<p>Average credit amount: {credit}</p>

</body>
</html>
"#,
        balance = summary.balance(),
        months = months,
        debit = summary.average_debit(),
        credit = summary.average_credit(),
    )
}

/// Renders the summary as plain text, one fact per line.
pub fn render_text(summary: &Summary) -> String {
    let mut text = String::from("Transaction summary\n\n");
    let _ = writeln!(text, "Total balance is {}", summary.balance());
    for (month, count) in summary.transactions_by_month() {
        let _ = writeln!(
            text,
            "Number of transactions in {}: {}",
            display_month(*month),
            count
        );
    }
    let _ = writeln!(text, "Average debit amount: {}", summary.average_debit());
    let _ = writeln!(text, "Average credit amount: {}", summary.average_credit());
    text
}

fn display_month(month: u32) -> String {
    month_name(month)
        .map(str::to_string)
        .unwrap_or_else(|| format!("month {}", month))
}
