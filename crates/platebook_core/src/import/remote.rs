//! Published lesson sheet download.
//!
//! # Invariants
//! - The default client times out after `FETCH_TIMEOUT`.
//! - Non-success HTTP statuses are errors, never parsed as CSV.

use crate::import::{ImportError, ImportResult};
use log::info;
use reqwest::blocking::Client;
use std::time::Duration;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads the CSV export of a published lesson sheet.
///
/// # Errors
/// - `ImportError::Fetch` on connection failure, timeout, non-2xx status, or
///   an undecodable body.
pub fn fetch_sheet_csv(url: &str) -> ImportResult<String> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|source| fetch_error(url, source))?;
    fetch_sheet_csv_with(&client, url)
}

/// Same as [`fetch_sheet_csv`] with a caller-configured client.
pub fn fetch_sheet_csv_with(client: &Client, url: &str) -> ImportResult<String> {
    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|source| fetch_error(url, source))?;

    info!(
        "event=lesson_sheet_fetch module=import status=ok bytes={}",
        body.len()
    );
    Ok(body)
}

fn fetch_error(url: &str, source: reqwest::Error) -> ImportError {
    ImportError::Fetch {
        url: url.to_string(),
        source,
    }
}
