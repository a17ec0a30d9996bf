use log::debug;
use serde::Serialize;
use std::future::Future;
use tokio::sync::watch;

use crate::errors::{ErrorInfo, Result};

/// Observable state of a single query.
///
/// `Ready(None)` means the query succeeded and found nothing, which is not
/// the same thing as `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Failed(ErrorInfo),
    Ready(Option<T>),
}

impl<T> QueryState<T> {
    pub fn from_result(result: Result<Option<T>>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(err) => QueryState::Failed(ErrorInfo::from(&err)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// True when the query completed without finding anything
    pub fn is_absent(&self) -> bool {
        matches!(self, QueryState::Ready(None))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => data.as_ref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            QueryState::Failed(info) => Some(info),
            _ => None,
        }
    }
}

/// Flattened `{ loading, error, data }` form of a [`QueryState`] for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    pub data: Option<T>,
}

impl<T> From<QueryState<T>> for QueryResult<T> {
    fn from(state: QueryState<T>) -> Self {
        match state {
            QueryState::Loading => QueryResult {
                loading: true,
                error: None,
                data: None,
            },
            QueryState::Failed(info) => QueryResult {
                loading: false,
                error: Some(info),
                data: None,
            },
            QueryState::Ready(data) => QueryResult {
                loading: false,
                error: None,
                data,
            },
        }
    }
}

/// Run `fetch` on a background task and expose its progress as a [`QueryState`].
///
/// The receiver starts in `Loading`. If every receiver is dropped before the
/// fetch completes, the result is discarded.
pub fn spawn_query<T, F>(fetch: F) -> watch::Receiver<QueryState<T>>
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Option<T>>> + Send + 'static,
{
    let (tx, rx) = watch::channel(QueryState::Loading);
    tokio::spawn(async move {
        let state = QueryState::from_result(fetch.await);
        if tx.send(state).is_err() {
            debug!("Query observer went away before completion, result discarded");
        }
    });
    rx
}
