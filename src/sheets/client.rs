//! Thin client for the Google Sheets v4 REST API, covering just the calls
//! the attendance flow needs: worksheet lookup and creation, reading the
//! header row and date columns, and writing single cells.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::sheets::auth::{ServiceAccountKey, TokenProvider};
use crate::utils::logging::{log_sheets_error, log_sheets_operation};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Grid size for a worksheet created on demand
const NEW_WORKSHEET_ROWS: u32 = 2000;
const NEW_WORKSHEET_COLS: u32 = 100;

/// Date headers live in row 1
const HEADER_ROW: u32 = 1;
/// Records start below the header even in an otherwise empty column
const FIRST_RECORD_ROW: u32 = 2;

/// Properties of the worksheet tab attendance records are written to
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub sheet_id: i64,
    pub title: String,
    pub row_count: u32,
    pub column_count: u32,
}

impl Worksheet {
    fn from_properties(properties: SheetProperties) -> Self {
        Self {
            sheet_id: properties.sheet_id,
            title: properties.title,
            row_count: properties.grid_properties.row_count,
            column_count: properties.grid_properties.column_count,
        }
    }
}

/// 1-based position of a written record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub column: u32,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
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
    #[serde(default)]
    grid_properties: GridProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridProperties {
    #[serde(default)]
    row_count: u32,
    #[serde(default)]
    column_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateResponse {
    #[serde(default)]
    replies: Vec<BatchUpdateReply>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateReply {
    add_sheet: Option<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Google Sheets access for one spreadsheet and worksheet.
///
/// Shared behind an `Arc` between the command handlers and the health
/// service; the internal token cache handles its own locking.
pub struct SheetsClient {
    http: reqwest::Client,
    tokens: TokenProvider,
    spreadsheet_id: String,
    worksheet_title: String,
}

impl SheetsClient {
    /// Builds a client from configuration. Reads and parses the service
    /// account key but does not call Google yet.
    pub fn new(config: &Config) -> Result<Self> {
        let key = ServiceAccountKey::load(&config.service_account)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            tokens: TokenProvider::new(key, http.clone()),
            http,
            spreadsheet_id: config.spreadsheet_id.clone(),
            worksheet_title: config.worksheet_title.clone(),
        })
    }

    pub fn worksheet_title(&self) -> &str {
        &self.worksheet_title
    }

    /// Checks that the configured private key parses. Used by the health
    /// endpoints to catch bad credentials before a report does.
    pub fn verify_credentials(&self) -> Result<()> {
        self.tokens.key().signing_key()?;
        Ok(())
    }

    /// Whether an access token is cached and still valid
    pub async fn has_cached_token(&self) -> bool {
        self.tokens.has_cached_token().await
    }

    /// Appends one attendance record under the given date header and returns
    /// where it was written.
    ///
    /// The worksheet and the date column are created on demand, so the first
    /// report for a new training date sets up its own column.
    pub async fn append_attendance(&self, date_header: &str, record: &str) -> Result<CellRef> {
        match self.write_record(date_header, record).await {
            Ok(cell) => {
                log_sheets_operation(
                    "append_record",
                    date_header,
                    Some(&format!("row {}, column {}", cell.row, cell.column)),
                );
                Ok(cell)
            }
            Err(error) => {
                log_sheets_error("append_record", date_header, &format!("{error:#}"));
                Err(error)
            }
        }
    }

    async fn write_record(&self, date_header: &str, record: &str) -> Result<CellRef> {
        let worksheet = self.ensure_worksheet().await?;
        let column = self.date_column(&worksheet, date_header).await?;
        let row = self.append_in_column(column, record).await?;
        Ok(CellRef { row, column })
    }

    /// Returns the configured worksheet, creating it when the spreadsheet
    /// does not have a tab with that title yet.
    pub async fn ensure_worksheet(&self) -> Result<Worksheet> {
        let url = self.spreadsheet_url();
        let response = self.api_get(&url, &[("fields", "sheets.properties")]).await?;
        let meta: SpreadsheetMeta = response
            .json()
            .await
            .context("Spreadsheet metadata was not valid JSON")?;

        if let Some(entry) = meta
            .sheets
            .into_iter()
            .find(|sheet| sheet.properties.title == self.worksheet_title)
        {
            return Ok(Worksheet::from_properties(entry.properties));
        }

        log_sheets_operation("add_worksheet", &self.worksheet_title, None);
        let body = json!({
            "requests": [{
                "addSheet": {
                    "properties": {
                        "title": self.worksheet_title,
                        "gridProperties": {
                            "rowCount": NEW_WORKSHEET_ROWS,
                            "columnCount": NEW_WORKSHEET_COLS,
                        },
                    },
                },
            }],
        });
        let response = self.api_post(&format!("{url}:batchUpdate"), &body).await?;
        let created: BatchUpdateResponse = response
            .json()
            .await
            .context("batchUpdate response was not valid JSON")?;

        created
            .replies
            .into_iter()
            .find_map(|reply| reply.add_sheet)
            .map(|entry| Worksheet::from_properties(entry.properties))
            .ok_or_else(|| anyhow!("addSheet reply missing from batchUpdate response"))
    }

    /// Reads row 1, the date headers. Trailing empty cells are not returned
    /// by the API, so the length is the number of occupied header cells.
    pub async fn header_row(&self) -> Result<Vec<String>> {
        let url = self.values_url("1:1");
        let response = self.api_get(&url, &[]).await?;
        let range: ValueRange = response
            .json()
            .await
            .context("Header row response was not valid JSON")?;

        Ok(row_text(range))
    }

    /// Finds the 1-based column for a date header, creating the header in
    /// the first free column when the date has no column yet.
    pub async fn date_column(&self, worksheet: &Worksheet, header: &str) -> Result<u32> {
        let headers = self.header_row().await?;

        if let Some(position) = headers.iter().position(|cell| cell == header) {
            return Ok(position as u32 + 1);
        }

        let target = next_header_column(headers.len());
        if target > worksheet.column_count {
            self.append_columns(worksheet.sheet_id, target - worksheet.column_count)
                .await?;
        }
        self.update_cell(HEADER_ROW, target, header).await?;
        log_sheets_operation("add_date_column", header, Some(&format!("column {target}")));

        Ok(target)
    }

    /// Reads one column top to bottom, up to its last non-empty cell.
    pub async fn column_values(&self, column: u32) -> Result<Vec<String>> {
        let letter = column_letter(column);
        let url = self.values_url(&format!("{letter}:{letter}"));
        let response = self
            .api_get(&url, &[("majorDimension", "COLUMNS")])
            .await?;
        let range: ValueRange = response
            .json()
            .await
            .context("Column response was not valid JSON")?;

        Ok(row_text(range))
    }

    /// Writes a record into the first empty cell of a column, below any
    /// existing records, and returns the row it landed in.
    pub async fn append_in_column(&self, column: u32, record: &str) -> Result<u32> {
        let occupied = self.column_values(column).await?.len();
        let row = first_open_row(occupied);
        self.update_cell(row, column, record).await?;
        Ok(row)
    }

    async fn update_cell(&self, row: u32, column: u32, value: &str) -> Result<()> {
        let url = self.values_url(&format!("{}{row}", column_letter(column)));
        // RAW keeps date headers as literal text instead of letting Google
        // coerce them into serial date numbers
        let body = json!({ "values": [[value]] });
        self.api_put(&url, &[("valueInputOption", "RAW")], &body)
            .await?;
        Ok(())
    }

    async fn append_columns(&self, sheet_id: i64, additional: u32) -> Result<()> {
        let body = json!({
            "requests": [{
                "appendDimension": {
                    "sheetId": sheet_id,
                    "dimension": "COLUMNS",
                    "length": additional,
                },
            }],
        });
        self.api_post(&format!("{}:batchUpdate", self.spreadsheet_url()), &body)
            .await?;
        Ok(())
    }

    async fn api_get(&self, url: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let token = self.tokens.access_token().await?;
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await
            .context("Google Sheets request failed")?;
        ensure_success(response).await
    }

    async fn api_post(&self, url: &str, body: &Value) -> Result<reqwest::Response> {
        let token = self.tokens.access_token().await?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .context("Google Sheets request failed")?;
        ensure_success(response).await
    }

    async fn api_put(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<reqwest::Response> {
        let token = self.tokens.access_token().await?;
        let response = self
            .http
            .put(url)
            .query(query)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .context("Google Sheets request failed")?;
        ensure_success(response).await
    }

    fn spreadsheet_url(&self) -> String {
        format!("{SHEETS_API_BASE}/{}", self.spreadsheet_id)
    }

    fn values_url(&self, cells: &str) -> String {
        format!(
            "{}/values/{}",
            self.spreadsheet_url(),
            a1_range(&self.worksheet_title, cells)
        )
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.chars().take(200).collect();
    Err(anyhow!("Google Sheets API error: {status}: {snippet}"))
}

fn row_text(range: ValueRange) -> Vec<String> {
    range
        .values
        .into_iter()
        .next()
        .unwrap_or_default()
        .iter()
        .map(cell_text)
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Converts a 1-based column index to its A1 letter form.
pub fn column_letter(column: u32) -> String {
    let mut remaining = column.max(1);
    let mut letters = Vec::new();

    while remaining > 0 {
        remaining -= 1;
        letters.push(b'A' + (remaining % 26) as u8);
        remaining /= 26;
    }

    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Quotes a worksheet title for use in an A1 range, doubling any embedded
/// single quotes.
pub fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Builds a full A1 range like `'Sheet1'!B2` from a title and cell part.
pub fn a1_range(title: &str, cells: &str) -> String {
    format!("{}!{cells}", quote_sheet_title(title))
}

/// 1-based column where the next new date header goes.
pub fn next_header_column(occupied_headers: usize) -> u32 {
    if occupied_headers == 0 {
        1
    } else {
        occupied_headers as u32 + 1
    }
}

/// First writable row in a date column holding `occupied` values. Row 1 is
/// reserved for the header, so an empty column starts at row 2.
pub fn first_open_row(occupied: usize) -> u32 {
    (occupied as u32 + 1).max(FIRST_RECORD_ROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter_single_letters() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(2), "B");
        assert_eq!(column_letter(26), "Z");
    }

    #[test]
    fn test_column_letter_double_letters() {
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(28), "AB");
        assert_eq!(column_letter(52), "AZ");
        assert_eq!(column_letter(53), "BA");
        assert_eq!(column_letter(702), "ZZ");
        assert_eq!(column_letter(703), "AAA");
    }

    #[test]
    fn test_column_letter_treats_zero_as_first_column() {
        assert_eq!(column_letter(0), "A");
    }

    #[test]
    fn test_quote_sheet_title() {
        assert_eq!(quote_sheet_title("Sheet1"), "'Sheet1'");
        assert_eq!(quote_sheet_title("Term 3 2025"), "'Term 3 2025'");
        assert_eq!(quote_sheet_title("Jay's Sheet"), "'Jay''s Sheet'");
    }

    #[test]
    fn test_a1_range() {
        assert_eq!(a1_range("Sheet1", "1:1"), "'Sheet1'!1:1");
        assert_eq!(a1_range("Sheet1", "B7"), "'Sheet1'!B7");
        assert_eq!(a1_range("Term 3", "C:C"), "'Term 3'!C:C");
    }

    #[test]
    fn test_next_header_column() {
        // Empty header row starts at column 1
        assert_eq!(next_header_column(0), 1);
        assert_eq!(next_header_column(1), 2);
        assert_eq!(next_header_column(5), 6);
    }

    #[test]
    fn test_first_open_row_skips_header() {
        // A fresh column has no values, records still start at row 2
        assert_eq!(first_open_row(0), 2);
        // Only the header occupied
        assert_eq!(first_open_row(1), 2);
        // Header plus two records
        assert_eq!(first_open_row(3), 4);
    }

    #[test]
    fn test_cell_text_handles_non_string_cells() {
        assert_eq!(cell_text(&Value::String("03/09/2025".to_string())), "03/09/2025");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(true)), "true");
    }

    #[test]
    fn test_value_range_defaults_missing_values() {
        // The API omits `values` entirely for an empty range
        let range: ValueRange = serde_json::from_str(r#"{"range": "'Sheet1'!1:1"}"#).unwrap();
        assert!(row_text(range).is_empty());

        let range: ValueRange =
            serde_json::from_str(r#"{"values": [["03/09/2025", "04/09/2025"]]}"#).unwrap();
        assert_eq!(row_text(range), vec!["03/09/2025", "04/09/2025"]);
    }
}
