use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::client::{execute_query, QuerySource};
use crate::console::Console;
use crate::error::Result;
use crate::view::{render_page, Banner, NO_RESULTS_HTML, STYLE_CSS};

/// Console plus the page-level bits that travel with it between renders.
#[derive(Default)]
struct ConsoleState {
    console: Console,
    sql_text: String,
    banner: Banner,
}

impl ConsoleState {
    fn render(&self) -> Html<String> {
        let results = match self.console.render() {
            Some(view) => view.to_html(),
            None => NO_RESULTS_HTML.to_string(),
        };
        Html(render_page(&self.sql_text, &self.banner, &results))
    }
}

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn QuerySource>,
    console: Arc<Mutex<ConsoleState>>,
}

pub fn router(source: Arc<dyn QuerySource>) -> Router {
    let state = AppState {
        source,
        console: Arc::new(Mutex::new(ConsoleState::default())),
    };

    Router::new()
        .route("/", get(index))
        .route("/query", post(submit_query))
        .route("/page", get(go_to_page))
        .route("/page-size", get(change_page_size))
        .route("/clear", get(clear))
        .route("/style.css", get(style))
        .layer(CompressionLayer::new())
        .with_state(state)
}

pub async fn run(address: &str, source: Arc<dyn QuerySource>) -> Result<()> {
    let addr: SocketAddr = address.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "console listening");
    serve(listener, source).await
}

pub async fn serve(listener: TcpListener, source: Arc<dyn QuerySource>) -> Result<()> {
    axum::serve(listener, router(source)).await?;
    Ok(())
}

#[derive(Deserialize)]
struct IndexParams {
    /// Set by the example-query shortcuts to prefill the editor.
    sql: Option<String>,
}

async fn index(State(state): State<AppState>, Query(params): Query<IndexParams>) -> Html<String> {
    let mut st = state.console.lock().await;
    if let Some(sql) = params.sql {
        st.sql_text = sql;
    }
    st.render()
}

#[derive(Deserialize)]
struct QueryForm {
    sql: String,
}

/// The console lock is held across the request, so at most one query is in
/// flight at a time. An in-flight request is not aborted when superseded; a
/// later submission simply waits on the lock.
async fn submit_query(State(state): State<AppState>, Form(form): Form<QueryForm>) -> Html<String> {
    let mut st = state.console.lock().await;
    st.sql_text = form.sql.clone();

    match execute_query(state.source.as_ref(), &form.sql).await {
        Ok(result) => {
            st.banner = Banner::Info {
                rows: result.row_count(),
                columns: result.column_count(),
            };
            st.console.set_result(result);
        }
        Err(e) => {
            // The previous result, if any, stays on screen under the banner.
            st.banner = Banner::Error(e.to_string());
        }
    }
    st.render()
}

#[derive(Deserialize)]
struct PageParams {
    page: usize,
}

async fn go_to_page(State(state): State<AppState>, Query(params): Query<PageParams>) -> Html<String> {
    let mut st = state.console.lock().await;
    st.console.go_to_page(params.page);
    st.render()
}

#[derive(Deserialize)]
struct SizeParams {
    size: usize,
}

async fn change_page_size(
    State(state): State<AppState>,
    Query(params): Query<SizeParams>,
) -> Html<String> {
    let mut st = state.console.lock().await;
    st.console.change_rows_per_page(params.size);
    st.render()
}

async fn clear(State(state): State<AppState>) -> Redirect {
    let mut st = state.console.lock().await;
    st.console.clear();
    st.sql_text.clear();
    st.banner = Banner::None;
    Redirect::to("/")
}

async fn style() -> (HeaderMap, &'static str) {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("content-type"),
        HeaderValue::from_static("text/css"),
    );
    headers.insert(
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static("public, max-age=1209600, s-maxage=86400"),
    );
    (headers, STYLE_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticQuerySource;
    use crate::result::QueryResult;

    fn numbered_result(count: usize) -> QueryResult {
        let rows = (1..=count).map(|i| vec![i.to_string()]).collect();
        QueryResult::new(vec!["n".to_string()], rows).unwrap()
    }

    async fn spawn_console(source: Arc<dyn QuerySource>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(source)).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn submit(base: &str, sql: &str) -> String {
        reqwest::Client::new()
            .post(format!("{base}/query"))
            .form(&[("sql", sql)])
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_successful_query_renders_table_and_info_banner() {
        let source = Arc::new(StaticQuerySource::with_result(numbered_result(2)));
        let base = spawn_console(source).await;

        let body = submit(&base, "SELECT n FROM t").await;
        assert!(body.contains("Query successful! Returned 2 rows, 1 columns"));
        assert!(body.contains("<td>1</td>"));
        assert!(body.contains("Showing 1 to 2 of 2 rows"));
    }

    #[tokio::test]
    async fn test_pagination_routes_drive_the_console() {
        let source = Arc::new(StaticQuerySource::with_result(numbered_result(120)));
        let base = spawn_console(source).await;
        let client = reqwest::Client::new();

        submit(&base, "SELECT n FROM t").await;

        let page2 = client
            .get(format!("{base}/page?page=2"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(page2.contains("Showing 51 to 100 of 120 rows"));
        assert!(page2.contains("Page 2 of 3"));

        let resized = client
            .get(format!("{base}/page-size?size=200"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(resized.contains("Showing 1 to 120 of 120 rows"));
        assert!(resized.contains("Page 1 of 1"));
    }

    #[tokio::test]
    async fn test_empty_submission_shows_validation_banner_without_a_request() {
        let source = Arc::new(StaticQuerySource::with_result(numbered_result(1)));
        let base = spawn_console(source.clone()).await;

        let body = submit(&base, "   ").await;
        assert!(body.contains("Please enter an SQL query"));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_collaborator_error_is_shown_verbatim() {
        let source = Arc::new(StaticQuerySource::with_error("syntax error"));
        let base = spawn_console(source).await;

        let body = submit(&base, "SELEC 1").await;
        assert!(body.contains("<div class=\"banner error\">syntax error</div>"));
        assert!(!body.contains("Query successful"));
    }

    #[tokio::test]
    async fn test_clear_resets_to_placeholder() {
        let source = Arc::new(StaticQuerySource::with_result(numbered_result(5)));
        let base = spawn_console(source).await;
        let client = reqwest::Client::new();

        submit(&base, "SELECT n FROM t").await;
        // Redirect back to the index page is followed by the client.
        let body = client
            .get(format!("{base}/clear"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains("No Query Results"));
        assert!(!body.contains("<table"));
    }
}
