//! Google Sheets v4 REST implementation of [`SheetBackend`].
//!
//! | Operation | Request |
//! |-----------|---------|
//! | read | `GET values/{range}` |
//! | append | `POST values/{range}:append?valueInputOption=RAW` |
//! | overwrite | `PUT values/{range}?valueInputOption=RAW` |
//! | clear_runs | `POST {spreadsheet}:batchUpdate` with one `updateCells` per run |
//!
//! Clearing addresses sheets by numeric id, not by name. Ids are looked up
//! once per sheet name and remembered for the life of the backend.

use super::backend::SheetBackend;
use super::clearer::RowRun;
use super::range::SheetRange;
use crate::codec::Row;
use crate::config::SheetConfig;
use crate::error::{Result, VendorSheetError};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
struct ValuesBody<'a> {
    values: &'a [Row],
}

#[derive(Debug, Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

pub struct SheetsHttpBackend {
    http: Client,
    base: Url,
    spreadsheet_id: String,
    access_token: Option<String>,
    sheet_ids: Mutex<HashMap<String, i64>>,
}

impl SheetsHttpBackend {
    pub fn from_config(config: &SheetConfig) -> Result<Self> {
        let base = Url::parse(config.api_base()).map_err(|err| {
            VendorSheetError::InvalidInput(format!("Invalid api_base_url: {}", err))
        })?;
        if base.cannot_be_a_base() {
            return Err(VendorSheetError::InvalidInput(format!(
                "Invalid api_base_url: {}",
                config.api_base_url
            )));
        }
        let http = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(Self {
            http,
            base,
            spreadsheet_id: config.spreadsheet_id.clone(),
            access_token: config.access_token.clone(),
            sheet_ids: Mutex::new(HashMap::new()),
        })
    }

    /// `{base}/v4/spreadsheets/{spreadsheet_id}` followed by `tail`, each
    /// element percent-encoded as one path segment.
    fn url(&self, tail: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("v4").push("spreadsheets");
            match tail.split_first() {
                // `{id}:batchUpdate` style suffixes attach to the id segment.
                Some((first, rest)) if first.starts_with(':') => {
                    segments.push(&format!("{}{}", self.spreadsheet_id, first));
                    segments.extend(rest);
                }
                _ => {
                    segments.push(&self.spreadsheet_id);
                    segments.extend(tail);
                }
            }
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VendorSheetError::Upstream(format!(
                "Sheets API error {}: {}",
                status, body
            )));
        }
        Ok(response)
    }

    async fn sheet_id(&self, sheet: &str) -> Result<i64> {
        if let Some(id) = self.cached_sheet_id(sheet) {
            return Ok(id);
        }

        let request = self
            .http
            .get(self.url(&[]))
            .query(&[("fields", "sheets.properties(sheetId,title)")]);
        let spreadsheet: Spreadsheet = self.send(request).await?.json().await?;

        let mut cache = self.sheet_ids.lock().unwrap_or_else(|e| e.into_inner());
        for entry in spreadsheet.sheets {
            cache.insert(entry.properties.title, entry.properties.sheet_id);
        }
        cache
            .get(sheet)
            .copied()
            .ok_or_else(|| {
                VendorSheetError::Upstream(format!("Sheet {} not found in spreadsheet", sheet))
            })
    }

    fn cached_sheet_id(&self, sheet: &str) -> Option<i64> {
        self.sheet_ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(sheet)
            .copied()
    }
}

/// Cells come back as strings with the default render option, but a sheet
/// edited by hand can still produce numbers or booleans.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Pad every row to the range width so that overwriting a line also blanks
/// the cells the new row leaves out.
fn padded(rows: Vec<Row>, width: usize) -> Vec<Row> {
    rows.into_iter()
        .map(|mut row| {
            if row.len() < width {
                row.resize(width, String::new());
            }
            row
        })
        .collect()
}

fn clear_requests(sheet_id: i64, runs: &[RowRun]) -> Value {
    let requests: Vec<Value> = runs
        .iter()
        .map(|run| {
            json!({
                "updateCells": {
                    "range": {
                        "sheetId": sheet_id,
                        "startRowIndex": run.start - 1,
                        "endRowIndex": run.end,
                    },
                    "fields": "*",
                }
            })
        })
        .collect();
    json!({ "requests": requests })
}

impl SheetBackend for SheetsHttpBackend {
    async fn read(&self, range: &SheetRange) -> Result<Vec<Row>> {
        tracing::debug!(range = %range, "read");
        let request = self.http.get(self.url(&["values", &range.a1()]));
        let body: ValueRange = self.send(request).await?.json().await?;
        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn append(&self, range: &SheetRange, rows: Vec<Row>) -> Result<()> {
        tracing::debug!(range = %range, rows = rows.len(), "append");
        let segment = format!("{}:append", range.a1());
        let request = self
            .http
            .post(self.url(&["values", &segment]))
            .query(&[("valueInputOption", "RAW")])
            .json(&ValuesBody { values: &rows });
        self.send(request).await?;
        Ok(())
    }

    async fn overwrite(&self, range: &SheetRange, rows: Vec<Row>) -> Result<()> {
        tracing::debug!(range = %range, rows = rows.len(), "overwrite");
        let rows = padded(rows, range.width());
        let request = self
            .http
            .put(self.url(&["values", &range.a1()]))
            .query(&[("valueInputOption", "RAW")])
            .json(&ValuesBody { values: &rows });
        self.send(request).await?;
        Ok(())
    }

    async fn clear_runs(&self, sheet: &str, runs: Vec<RowRun>) -> Result<()> {
        tracing::debug!(sheet, runs = runs.len(), "clear runs");
        let sheet_id = self.sheet_id(sheet).await?;
        let request = self
            .http
            .post(self.url(&[":batchUpdate"]))
            .json(&clear_requests(sheet_id, &runs));
        self.send(request).await?;
        Ok(())
    }
}
