use super::escape::escape;

/// Placeholder shown before any query has run.
pub const NO_RESULTS_HTML: &str = concat!(
    "<div class=\"no-data\">",
    "<h3>No Query Results</h3>",
    "<p>Enter an SQL statement and press Execute Query</p>",
    "</div>"
);

/// One-click starters rendered under the query form.
const EXAMPLE_QUERIES: [(&str, &str); 3] = [
    ("Show databases", "SHOW DATABASES"),
    ("Show tables", "SHOW TABLES"),
    ("Server version", "SELECT version()"),
];

/// Transient status element above the results area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Banner {
    #[default]
    None,
    Error(String),
    Info { rows: usize, columns: usize },
}

impl Banner {
    pub fn to_html(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Error(message) => {
                format!("<div class=\"banner error\">{}</div>", escape(message))
            }
            Self::Info { rows, columns } => format!(
                "<div class=\"banner info\">Query successful! \
                 Returned {rows} rows, {columns} columns</div>"
            ),
        }
    }
}

/// Assembles the whole console document around the current results fragment.
pub fn render_page(sql_text: &str, banner: &Banner, results_html: &str) -> String {
    let mut examples = String::new();
    for (label, sql) in EXAMPLE_QUERIES {
        examples.push_str(&format!(
            "<form method=\"get\" action=\"/\">\
             <button class=\"example-query\" name=\"sql\" value=\"{}\">{}</button>\
             </form>",
            escape(sql),
            escape(label),
        ));
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>sqlpane</title>\n",
            "<link rel=\"stylesheet\" href=\"/style.css\">\n",
            "</head>\n",
            "<body>\n",
            "<h1>sqlpane</h1>\n",
            "<form method=\"post\" action=\"/query\" class=\"query-form\">\n",
            "<textarea name=\"sql\" rows=\"6\" placeholder=\"SELECT ...\">{sql}</textarea>\n",
            "<div class=\"actions\">\n",
            "<button type=\"submit\">Execute Query</button>\n",
            "<a href=\"/clear\" class=\"clear\">Clear</a>\n",
            "</div>\n",
            "</form>\n",
            "<div class=\"examples\">{examples}</div>\n",
            "{banner}\n",
            "<div class=\"results\">{results}</div>\n",
            "</body>\n",
            "</html>\n"
        ),
        sql = escape(sql_text),
        examples = examples,
        banner = banner.to_html(),
        results = results_html,
    )
}

pub const STYLE_CSS: &str = r#"body{font-family:-apple-system,'Segoe UI',sans-serif;font-size:14px;color:#222;max-width:1100px;margin:24px auto;padding:0 16px}
h1{font-size:20px;margin-bottom:12px}
textarea{width:100%;font-family:monospace;font-size:13px;padding:8px;border:1px solid #ccc;border-radius:4px;box-sizing:border-box}
.actions{display:flex;gap:10px;align-items:center;margin:8px 0}
.examples{display:flex;gap:6px;margin-bottom:12px}
.examples form{display:inline}
button{padding:6px 14px;border:1px solid #ccc;border-radius:4px;background:#f6f6f6;cursor:pointer}
button:hover{background:#ececec}
button:disabled{opacity:.45;cursor:default}
.banner{padding:8px 12px;border-radius:4px;margin-bottom:12px}
.banner.error{background:#fdecea;color:#b71c1c;border:1px solid #f5c6cb}
.banner.info{background:#e8f5e9;color:#1b5e20;border:1px solid #c8e6c9}
.table-container{overflow-x:auto;border:1px solid #ddd;border-radius:4px}
table{border-collapse:collapse;width:100%}
th,td{border-bottom:1px solid #eee;padding:6px 10px;text-align:left;white-space:nowrap}
thead th{background:#fafafa;position:sticky;top:0}
.pagination{display:flex;justify-content:space-between;align-items:center;margin-top:10px;gap:10px;flex-wrap:wrap}
.pagination-controls{display:flex;gap:6px;align-items:center}
.pagination-controls form{display:flex;gap:6px;align-items:center}
.page-status{color:#666}
.no-data{text-align:center;color:#888;padding:40px 0}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_banner_text() {
        let banner = Banner::Info { rows: 2, columns: 3 };
        assert_eq!(
            banner.to_html(),
            "<div class=\"banner info\">Query successful! Returned 2 rows, 3 columns</div>"
        );
    }

    #[test]
    fn test_error_banner_is_escaped() {
        let banner = Banner::Error("bad <thing> & worse".to_string());
        let html = banner.to_html();
        assert!(html.contains("bad &lt;thing&gt; &amp; worse"));
        assert!(!html.contains("<thing>"));
    }

    #[test]
    fn test_page_echoes_sql_safely() {
        let html = render_page("SELECT 1 -- </textarea><script>", &Banner::None, NO_RESULTS_HTML);
        assert!(!html.contains("</textarea><script>"));
        assert!(html.contains("SELECT 1 -- &lt;/textarea&gt;&lt;script&gt;"));
        assert!(html.contains("No Query Results"));
    }

    #[test]
    fn test_page_embeds_examples_and_results() {
        let html = render_page("", &Banner::None, "<em>fragment</em>");
        assert!(html.contains("Show databases"));
        assert!(html.contains("value=\"SHOW TABLES\""));
        assert!(html.contains("<em>fragment</em>"));
    }
}
