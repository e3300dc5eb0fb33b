use super::{Dataset, PortalStore, StoreError, StoreResult};
use crate::shift::{Shift, ShiftPriority, ShiftStatus, parse_clock_time};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_dataset_json<R: Read>(reader: R) -> StoreResult<PortalStore> {
    let dataset: Dataset = serde_json::from_reader(reader)?;
    PortalStore::from_dataset(dataset)
}

pub fn load_dataset_from_json<P: AsRef<Path>>(path: P) -> StoreResult<PortalStore> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let store = read_dataset_json(file)?;
    tracing::info!(
        path = %path.display(),
        shifts = store.shifts.len(),
        employees = store.employees.len(),
        "fixtures loaded"
    );
    Ok(store)
}

/// One shift per row; `assigned_employees` is a `;`-separated id list.
#[derive(Debug, Default, Deserialize)]
struct ShiftCsvRecord {
    id: u32,
    title: String,
    #[serde(default)]
    date: String,
    start_time: String,
    end_time: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    assigned_employees: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    contract_id: String,
    #[serde(default)]
    notes: String,
}

impl ShiftCsvRecord {
    fn into_shift(self) -> StoreResult<Shift> {
        let start_time = parse_clock_time(&self.start_time).map_err(StoreError::Invalid)?;
        let end_time = parse_clock_time(&self.end_time).map_err(StoreError::Invalid)?;
        let mut shift = Shift::new(
            self.id,
            self.title,
            parse_date(&self.date)?,
            start_time,
            end_time,
        );
        shift.location = self.location.trim().to_string();
        shift.assigned_employees = split_ids(&self.assigned_employees)?;
        if !self.status.trim().is_empty() {
            shift.status = self
                .status
                .parse::<ShiftStatus>()
                .map_err(|err| StoreError::Invalid(err.to_string()))?;
        }
        if !self.priority.trim().is_empty() {
            shift.priority = self
                .priority
                .parse::<ShiftPriority>()
                .map_err(|err| StoreError::Invalid(err.to_string()))?;
        }
        shift.contract_id = parse_u32(&self.contract_id)?;
        shift.notes = parse_string_option(self.notes);
        Ok(shift)
    }
}

pub fn read_shifts_csv<R: Read>(reader: R) -> StoreResult<Vec<Shift>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut shifts = Vec::new();
    for record in reader.deserialize::<ShiftCsvRecord>() {
        shifts.push(record?.into_shift()?);
    }
    if shifts.is_empty() {
        return Err(StoreError::Invalid("CSV file contained no shifts".into()));
    }
    Ok(shifts)
}

pub fn load_shifts_from_csv<P: AsRef<Path>>(path: P) -> StoreResult<Vec<Shift>> {
    let path = path.as_ref();
    let shifts = read_shifts_csv(File::open(path)?)?;
    tracing::info!(path = %path.display(), shifts = shifts.len(), "shift csv loaded");
    Ok(shifts)
}

fn parse_date(input: &str) -> StoreResult<Option<NaiveDate>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|e| StoreError::Invalid(format!("invalid date '{input}': {e}")))
}

fn parse_u32(input: &str) -> StoreResult<Option<u32>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    input
        .trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|e| StoreError::Invalid(format!("invalid id '{input}': {e}")))
}

fn split_ids(input: &str) -> StoreResult<Vec<u32>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(';')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| StoreError::Invalid(format!("invalid employee id '{part}': {e}")))
        })
        .collect()
}

fn parse_string_option(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
