//! HTML rendering of the bucketed report.
//!
//! The output reproduces the historical report document exactly, including
//! the nonstandard `foreground-color` style property. Test names are
//! written unescaped; catalog names are trusted input.

use crate::section::Report;

const BODY_INDENT: &str = "        ";

/// Renders the full HTML document for a report. Pure function of its input.
pub fn render_report(report: &Report<'_>) -> String {
    let mut tables = String::new();

    for (id, results) in report.sections() {
        if results.is_empty() {
            continue;
        }

        tables.push_str(&format!("<h2>{}</h2>\n", id.display_name()));
        tables.push_str("<table><tr><th>Test</th><th>Result</th></tr>\n");

        for result in results {
            tables.push_str(&format!(
                "    <tr><td>{}</td><td style=\"background-color: {}; foreground-color: {};\">{}</td></tr>\n",
                result.name,
                result.outcome.background(),
                result.outcome.foreground(),
                result.outcome.label(),
            ));
        }

        tables.push_str("</table>\n");
    }

    format!(
        "\n<html lang=\"en\">\n    <head>\n    </head>\n    <body>\n{}\n    </body>\n</html>\n",
        indent(&tables, BODY_INDENT)
    )
}

/// Prefixes every line that has content; whitespace-only lines pass through
/// untouched.
fn indent(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}
