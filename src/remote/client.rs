use crate::config::RemoteSettings;
use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::store::table::EntryTable;
use crate::store::wire::{EntryRecord, EntryRow, decode_rows};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// PostgREST/Postgres error codes for a relation that does not exist.
const MISSING_TABLE_CODES: &[&str] = &["PGRST205", "42P01"];

/// `{base}/rest/v1/{table}`
pub fn rest_endpoint(base: &reqwest::Url, table: &str) -> String {
    format!(
        "{}/rest/v1/{}",
        base.as_str().trim_end_matches('/'),
        table
    )
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// 404, or an error code naming a relation that does not exist.
fn is_missing_table(status: StatusCode, code: Option<&str>) -> bool {
    status == StatusCode::NOT_FOUND || code.is_some_and(|c| MISSING_TABLE_CODES.contains(&c))
}

pub struct RestTable {
    client: Client,
    endpoint: String,
    key: String,
}

impl RestTable {
    pub fn new(settings: &RemoteSettings, table: &str) -> AppResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;

        Ok(Self {
            client,
            endpoint: rest_endpoint(&settings.url, table),
            key: settings.key.clone(),
        })
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Accept", "application/json")
    }

    /// Map non-success responses: a missing relation becomes
    /// `RemoteUnavailable`, anything else a plain remote error.
    fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        let parsed: Option<PostgrestError> = serde_json::from_str(&body).ok();
        let code = parsed.as_ref().and_then(|e| e.code.clone());
        let message = parsed
            .and_then(|e| e.message)
            .unwrap_or_else(|| body.trim().to_string());

        debug!(%status, ?code, %message, "remote error response");

        if is_missing_table(status, code.as_deref()) {
            Err(AppError::RemoteUnavailable(format!("{} ({})", message, status)))
        } else {
            Err(AppError::Remote(format!("{}: {}", status, message)))
        }
    }

    fn single(rows: Vec<EntryRow>, id: Option<&str>) -> AppResult<EntryRow> {
        rows.into_iter().next().ok_or_else(|| match id {
            Some(id) => AppError::NotFound(id.to_string()),
            None => AppError::Remote("insert returned no row".into()),
        })
    }
}

impl EntryTable for RestTable {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    fn select_month(&mut self, period: Period) -> AppResult<Vec<EntryRow>> {
        let req = self.client.get(&self.endpoint).query(&[
            ("select", "*".to_string()),
            ("year", format!("eq.{}", period.year)),
            ("month", format!("eq.{}", period.month)),
            ("order", "day.asc".to_string()),
        ]);

        let resp = Self::check(self.authorized(req).send()?)?;
        let values: Vec<serde_json::Value> = resp.json()?;
        let total = values.len();
        let rows = decode_rows(values);
        debug!(%period, count = rows.len(), total, "remote rows fetched");
        Ok(rows)
    }

    fn select_one(&mut self, id: &str) -> AppResult<Option<EntryRow>> {
        let req = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{}", id))]);

        let resp = Self::check(self.authorized(req).send()?)?;
        let rows: Vec<EntryRow> = resp.json()?;
        Ok(rows.into_iter().next())
    }

    fn insert(&mut self, record: &EntryRecord) -> AppResult<EntryRow> {
        let req = self
            .client
            .post(&self.endpoint)
            .header("Prefer", "return=representation")
            .json(&[record]);

        let resp = Self::check(self.authorized(req).send()?)?;
        Self::single(resp.json()?, None)
    }

    fn update(&mut self, id: &str, record: &EntryRecord) -> AppResult<EntryRow> {
        let req = self
            .client
            .patch(&self.endpoint)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(record);

        let resp = Self::check(self.authorized(req).send()?)?;
        Self::single(resp.json()?, Some(id))
    }

    fn delete(&mut self, id: &str) -> AppResult<()> {
        let req = self
            .client
            .delete(&self.endpoint)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation");

        let resp = Self::check(self.authorized(req).send()?)?;
        let deleted: Vec<serde_json::Value> = resp.json()?;
        if deleted.is_empty() {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_relations_count_as_unavailable() {
        assert!(is_missing_table(StatusCode::NOT_FOUND, None));
        assert!(is_missing_table(StatusCode::BAD_REQUEST, Some("PGRST205")));
        assert!(is_missing_table(StatusCode::BAD_REQUEST, Some("42P01")));

        // "0 or many rows for a single object" is an operation error
        assert!(!is_missing_table(StatusCode::NOT_ACCEPTABLE, Some("PGRST116")));
        assert!(!is_missing_table(StatusCode::INTERNAL_SERVER_ERROR, None));
        assert!(!is_missing_table(StatusCode::CONFLICT, Some("23505")));
    }
}
