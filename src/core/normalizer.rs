//! Event normalizer: raw CSV rows → typed [`AccessEvent`]s.

use crate::config::{IngestConfig, IngestMode};
use crate::errors::{AppError, AppResult};
use crate::models::access_event::AccessEvent;
use crate::models::body_temp::BodyTemp;
use crate::models::direction::Direction;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ByteRecord, StringRecord};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COL_USER: &str = "User";
pub const COL_DEPARTMENT: &str = "Department";
pub const COL_DOOR: &str = "Door";
pub const COL_CARD_ID: &str = "Card ID";
pub const COL_TIME: &str = "Time";
pub const COL_DIRECTION: &str = "Entry/Exit";
pub const COL_BODY_TEMP: &str = "Body Temp";

/// A row skipped in lenient mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub row: usize,
    pub reason: String,
}

/// The complete, unfiltered result of one load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub events: Vec<AccessEvent>,
    pub rejected: Vec<RejectedRow>,
    pub has_temp_column: bool,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Min/max calendar dates of the accepted events.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.events.iter().map(|e| e.date()).min()?;
        let max = self.events.iter().map(|e| e.date()).max()?;
        Some((min, max))
    }
}

/// Positions of the known columns inside a record.
struct Columns {
    user: usize,
    department: usize,
    door: usize,
    card_id: usize,
    time: usize,
    direction: usize,
    body_temp: Option<usize>,
}

impl Columns {
    fn locate(headers: &ByteRecord) -> AppResult<Self> {
        // trim + drop a UTF-8 BOM on the first header
        let names: Vec<String> = headers
            .iter()
            .map(|h| {
                String::from_utf8_lossy(h)
                    .trim_start_matches('\u{feff}')
                    .trim()
                    .to_string()
            })
            .collect();

        let find = |name: &str| names.iter().position(|h| h == name);
        let require =
            |name: &str| find(name).ok_or_else(|| AppError::MissingColumn(name.to_string()));

        Ok(Self {
            user: require(COL_USER)?,
            department: require(COL_DEPARTMENT)?,
            door: require(COL_DOOR)?,
            card_id: require(COL_CARD_ID)?,
            time: require(COL_TIME)?,
            direction: require(COL_DIRECTION)?,
            body_temp: find(COL_BODY_TEMP),
        })
    }
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

/// Build one event, or explain why the row is unusable.
fn parse_row(
    row: usize,
    record: &StringRecord,
    cols: &Columns,
    cfg: &IngestConfig,
) -> Result<AccessEvent, String> {
    let user = field(record, cols.user);
    if user.is_empty() {
        return Err("empty User".to_string());
    }

    let raw_time = field(record, cols.time);
    let timestamp = NaiveDateTime::parse_from_str(raw_time, &cfg.time_format).map_err(|_| {
        format!(
            "invalid Time '{}' (expected format {})",
            raw_time, cfg.time_format
        )
    })?;

    let raw_dir = field(record, cols.direction);
    let direction = Direction::parse(raw_dir)
        .ok_or_else(|| format!("invalid Entry/Exit value '{}'", raw_dir))?;

    let department = match field(record, cols.department) {
        "" => cfg.unknown_department.as_str(),
        d => d,
    };

    let body_temp = cols
        .body_temp
        .map(|idx| BodyTemp::parse(field(record, idx)))
        .unwrap_or(BodyTemp::Missing);

    Ok(AccessEvent::new(
        row,
        user,
        department,
        field(record, cols.door),
        field(record, cols.card_id),
        timestamp,
        direction,
        body_temp,
    ))
}

/// Normalize every row read from `reader`.
///
/// In [`IngestMode::Strict`] the first bad row aborts the load; in
/// [`IngestMode::Lenient`] it is recorded in [`Dataset::rejected`].
pub fn normalize_reader<R: Read>(reader: R, cfg: &IngestConfig) -> AppResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let cols = Columns::locate(rdr.byte_headers()?)?;

    let mut dataset = Dataset {
        has_temp_column: cols.body_temp.is_some(),
        ..Dataset::default()
    };

    for (i, result) in rdr.byte_records().enumerate() {
        let row = i + 1;
        let raw = result?;

        // righe completamente vuote: ignorate
        if raw.iter().all(|f| f.trim_ascii().is_empty()) {
            continue;
        }

        // encoding problems are row errors, not load errors
        let parsed = StringRecord::from_byte_record(raw)
            .map_err(|e| {
                format!(
                    "invalid UTF-8 in field {} (save the log as UTF-8)",
                    e.utf8_error().field() + 1
                )
            })
            .and_then(|record| parse_row(row, &record, &cols, cfg));

        match parsed {
            Ok(ev) => dataset.events.push(ev),
            Err(reason) => match cfg.mode {
                IngestMode::Strict => return Err(AppError::InvalidRow { row, reason }),
                IngestMode::Lenient => {
                    log::warn!("skipping row {}: {}", row, reason);
                    dataset.rejected.push(RejectedRow { row, reason });
                }
            },
        }
    }

    log::debug!(
        "normalized {} events ({} rejected)",
        dataset.events.len(),
        dataset.rejected.len()
    );

    Ok(dataset)
}

/// Open `path` and normalize it.
pub fn load_file(path: &Path, cfg: &IngestConfig) -> AppResult<Dataset> {
    let file = File::open(path)?;
    normalize_reader(file, cfg)
}
