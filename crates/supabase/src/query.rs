//! Minimal PostgREST query builder.
//!
//! Covers the subset the catalog needs: column selection with embedded
//! resources, exact-match filters, ordering and row limits.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt::Display;

use crate::errors::{PostgrestErrorBody, SupabaseError};

pub struct QueryBuilder<'a> {
    http: &'a Client,
    url: String,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(http: &'a Client, rest_url: &str, table: &str) -> Self {
        Self {
            http,
            url: format!("{}/{}", rest_url, table),
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    /// Columns to return, including embedded resources like `d_period!inner(period_name)`
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    /// Keep rows where `column` equals `value`
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.into(), format!("eq.{}", value)));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params
            .push(("order".into(), format!("{}.{}", column, direction)));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".into(), count.to_string()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Run the query and decode every returned row
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, SupabaseError> {
        debug!("GET {} {:?}", self.url, self.params);
        let response = self.http.get(&self.url).query(&self.params).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_slice::<PostgrestErrorBody>(&body) {
                Ok(err) => (err.code.clone(), err.describe()),
                Err(_) => (None, String::from_utf8_lossy(&body).into_owned()),
            };
            return Err(SupabaseError::Api {
                table: self.table,
                status: status.as_u16(),
                code,
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| SupabaseError::Decode {
            table: self.table,
            message: e.to_string(),
        })
    }

    /// Run the query expecting zero or one row
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, SupabaseError> {
        let table = self.table.clone();
        let mut rows: Vec<T> = self.fetch().await?;
        match rows.len() {
            0 | 1 => Ok(rows.pop()),
            count => Err(SupabaseError::MultipleRows { table, count }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{SupabaseClient, SupabaseConfig};
    use mockito::{Matcher, Server};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    fn client(url: String) -> SupabaseClient {
        SupabaseClient::new(&SupabaseConfig::new(url, "test-key")).unwrap()
    }

    #[test]
    fn test_params_are_collected_in_order() {
        let client = client("https://abc.supabase.co".into());
        let query = client
            .table("f_coins")
            .select("coin_id")
            .eq("period_id", 7)
            .order("coin_id", false)
            .limit(1);

        assert_eq!(
            query.params(),
            &[
                ("select".to_string(), "coin_id".to_string()),
                ("period_id".to_string(), "eq.7".to_string()),
                ("order".to_string(), "coin_id.desc".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_filters_and_key() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/things")
            .match_header("apikey", "test-key")
            .match_header("authorization", "Bearer test-key")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "id".into()),
                Matcher::UrlEncoded("id".into(), "eq.3".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":3}]"#)
            .create_async()
            .await;

        let rows: Vec<Row> = client(server.url())
            .table("things")
            .select("id")
            .eq("id", 3)
            .fetch()
            .await
            .unwrap();

        assert_eq!(rows, vec![Row { id: 3 }]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_body_is_surfaced() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/v1/things")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"code":"PGRST100","message":"failed to parse filter","details":null,"hint":null}"#)
            .create_async()
            .await;

        let err = client(server.url())
            .table("things")
            .eq("id", "x")
            .fetch::<Row>()
            .await
            .unwrap_err();

        match err {
            SupabaseError::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(code.as_deref(), Some("PGRST100"));
                assert_eq!(message, "failed to parse filter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_maybe_single() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/v1/empty")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        server
            .mock("GET", "/rest/v1/many")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"id":1},{"id":2}]"#)
            .create_async()
            .await;

        let client = client(server.url());
        let none: Option<Row> = client.table("empty").maybe_single().await.unwrap();
        assert!(none.is_none());

        let many = client.table("many").maybe_single::<Row>().await;
        assert!(matches!(
            many,
            Err(SupabaseError::MultipleRows { count: 2, .. })
        ));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/v1/things")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"id":1}"#)
            .create_async()
            .await;

        let result = client(server.url()).table("things").fetch::<Row>().await;
        assert!(matches!(result, Err(SupabaseError::Decode { .. })));
    }
}
