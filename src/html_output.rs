//! HTML output format for search trace reports
//!
//! Standalone document with embedded CSS: step table, per-step diagrams,
//! result banner and statistics.

use crate::diagram;
use crate::stats::TraceStats;
use crate::tracer::{Comparison, SearchTrace, StepRecord};

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput {
    include_diagrams: bool,
}

impl HtmlOutput {
    /// Create a new HTML output formatter
    pub fn new(include_diagrams: bool) -> Self {
        Self { include_diagrams }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .equal {
            color: #2e7d32;
            font-weight: bold;
        }
        .less, .greater {
            color: #555;
        }
        .array {
            font-family: monospace;
        }
        pre.diagram {
            background-color: white;
            border: 1px solid #ddd;
            padding: 10px;
            overflow-x: auto;
        }
        .result-found {
            color: #2e7d32;
        }
        .result-missing {
            color: #cc0000;
        }
        .stats-table th {
            background-color: #5cb85c;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Generate step table header
    fn generate_header() -> String {
        let headers = [
            "Step",
            "Low",
            "High",
            "Mid",
            "arr[mid]",
            "Comparison",
            "Decision",
        ];
        let header_cells: Vec<String> = headers.iter().map(|h| format!("<th>{}</th>", h)).collect();

        format!("<tr>{}</tr>", header_cells.join(""))
    }

    /// Format a step as HTML table row
    fn format_step_row(step: &StepRecord, target: i64) -> String {
        let (class, decision) = match step.comparison {
            Comparison::Equal => ("equal", "match found".to_string()),
            Comparison::Less => ("less", format!("search right, low = {}", step.mid + 1)),
            Comparison::Greater => (
                "greater",
                format!("search left, high = {}", step.mid as i64 - 1),
            ),
        };
        let comparison = format!("{} {} {}", step.mid_value, step.comparison.symbol(), target);

        format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="{}">{}</td><td>{}</td></tr>"#,
            step.step_index,
            step.low,
            step.high,
            step.mid,
            step.mid_value,
            class,
            Self::escape_html(&comparison),
            Self::escape_html(&decision)
        )
    }

    /// Generate complete HTML document
    pub fn to_html(&self, trace: &SearchTrace) -> String {
        let mut html = String::new();
        let target = trace.target();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Binary Search Trace</title>\n");
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str("    <h1>Binary Search Trace</h1>\n");
        html.push_str(&format!(
            "    <p>Input array: <span class=\"array\">{}</span></p>\n",
            Self::escape_html(&format!("{:?}", trace.input()))
        ));
        html.push_str(&format!(
            "    <p>Sorted array: <span class=\"array\">{}</span></p>\n",
            Self::escape_html(&format!("{:?}", trace.sorted()))
        ));
        html.push_str(&format!("    <p>Target value: {}</p>\n", target));

        html.push_str("    <h2>Steps</h2>\n");
        html.push_str("    <table>\n");
        html.push_str("        ");
        html.push_str(&Self::generate_header());
        html.push('\n');
        for step in trace.steps() {
            html.push_str("        ");
            html.push_str(&Self::format_step_row(step, target));
            html.push('\n');
        }
        html.push_str("    </table>\n");

        if self.include_diagrams {
            for step in trace.steps() {
                html.push_str(&format!("    <h3>Step {}</h3>\n", step.step_index));
                html.push_str("    <pre class=\"diagram\">");
                html.push_str(&Self::escape_html(&diagram::render_step(
                    trace.sorted(),
                    step,
                )));
                html.push_str("</pre>\n");
            }
        }

        html.push_str(&Self::render_result(trace));
        html.push_str(&Self::render_statistics(&TraceStats::from_trace(trace)));

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by bintrace - Binary Search Tracer\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }

    fn render_result(trace: &SearchTrace) -> String {
        match (trace.outcome().position, trace.original_index()) {
            (Some(position), original) => {
                let original = original
                    .map(|i| format!(", input index {}", i))
                    .unwrap_or_default();
                format!(
                    "    <h2 class=\"result-found\">Target {} found at sorted index {}{}</h2>\n",
                    trace.target(),
                    position,
                    original
                )
            }
            (None, _) => format!(
                "    <h2 class=\"result-missing\">Target {} not found</h2>\n",
                trace.target()
            ),
        }
    }

    /// Render statistics as HTML table
    fn render_statistics(stats: &TraceStats) -> String {
        let mut html = String::new();

        html.push_str("    <h2>Statistics Summary</h2>\n");
        html.push_str("    <table class=\"stats-table\">\n");
        html.push_str("        <tr><th>status</th><th>array size</th><th>steps</th><th>comparisons</th><th>worst case</th><th>time</th><th>space</th></tr>\n");
        html.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            stats.status(),
            stats.array_size,
            stats.total_steps,
            stats.comparisons,
            stats.worst_case_steps,
            Self::escape_html(&stats.time_complexity),
            Self::escape_html(&stats.space_complexity)
        ));
        html.push_str("    </table>\n");

        html
    }
}
