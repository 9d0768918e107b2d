use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, SqlPaneError};
use crate::result::{ApiResponse, QueryResult};

/// Where queries go. The HTTP implementation talks to the real endpoint;
/// [`StaticQuerySource`] stands in for it in tests and demos.
#[async_trait]
pub trait QuerySource: Send + Sync {
    async fn query(&self, sql: &str) -> Result<QueryResult>;
}

/// Validates and submits one query. Empty input fails before the source is
/// consulted, so no request is ever issued for it.
pub async fn execute_query(source: &dyn QuerySource, sql: &str) -> Result<QueryResult> {
    let sql = sql.trim();
    if sql.is_empty() {
        return Err(SqlPaneError::EmptyQuery);
    }
    match source.query(sql).await {
        Ok(result) => {
            info!(
                rows = result.row_count(),
                columns = result.column_count(),
                "query succeeded"
            );
            Ok(result)
        }
        Err(e) => {
            warn!(error = %e, "query failed");
            Err(e)
        }
    }
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    sql: &'a str,
}

/// Submits queries to the collaborator endpoint as `POST {"sql": ...}`.
///
/// No client-side timeout is applied and an in-flight request is never
/// aborted; the endpoint's own behavior governs how long we wait.
pub struct HttpQuerySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQuerySource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QuerySource for HttpQuerySource {
    async fn query(&self, sql: &str) -> Result<QueryResult> {
        info!(endpoint = %self.endpoint, "executing query");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { sql })
            .send()
            .await?;
        let body: ApiResponse = response.json().await?;
        QueryResult::try_from(body)
    }
}

enum StaticResponse {
    Result(QueryResult),
    Error(String),
}

/// Fixed-response source that also counts how often it was asked.
pub struct StaticQuerySource {
    response: StaticResponse,
    calls: AtomicUsize,
}

impl StaticQuerySource {
    pub fn with_result(result: QueryResult) -> Self {
        Self {
            response: StaticResponse::Result(result),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            response: StaticResponse::Error(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuerySource for StaticQuerySource {
    async fn query(&self, _sql: &str) -> Result<QueryResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            StaticResponse::Result(result) => Ok(result.clone()),
            StaticResponse::Error(message) => Err(SqlPaneError::Query(message.clone())),
        }
    }
}
