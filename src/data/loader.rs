use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use super::model::{Dataset, Record};

/// Published location of the weekly indicator CSV. Fixed; the loader has no
/// other configuration surface.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/mauforonda/bcb_semanal/refs/heads/main/datos.csv";

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong between the network and a parsed [`Dataset`].
///
/// The variants are surfaced to the caller unmerged, so an empty dashboard
/// after a failed load is distinguishable from a genuinely empty data set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching remote data: {0}")]
    Network(#[source] reqwest::Error),
    #[error("decoding response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("parsing CSV: {0}")]
    Parse(#[from] csv::Error),
    #[error("reading local file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch the published CSV and parse it into a [`Dataset`].
///
/// One network retrieval per call; each reload is an independent request.
pub fn fetch() -> Result<Dataset, LoadError> {
    fetch_from(DATA_URL)
}

/// Same pipeline against an arbitrary URL.
pub fn fetch_from(url: &str) -> Result<Dataset, LoadError> {
    let response = client()
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(LoadError::Network)?;
    let text = response.text().map_err(LoadError::Decode)?;
    Ok(Dataset::from_records(parse_records(&text)?))
}

/// Read a local CSV snapshot (e.g. one written by `generate_sample`) through
/// the same parse path as the remote file.
pub fn load_path(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(Dataset::from_records(parse_records(&text)?))
}

/// The retrieval intentionally carries no request timeout: the fetch is the
/// single suspending operation of the app and blocks until the response
/// resolves or errors.
fn client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text into records, first row as field names.
///
/// Rows come back in source order, one [`Record`] per data row. Fields are
/// looked up by header name, so column order in the source does not matter.
/// A missing required column is a [`LoadError::Parse`]; a non-numeric
/// `valor` cell is not (it becomes `NaN` in that record).
pub fn parse_records(text: &str) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    Ok(records)
}
