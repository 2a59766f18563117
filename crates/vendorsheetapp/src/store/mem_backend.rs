use super::backend::SheetBackend;
use super::clearer::RowRun;
use super::range::SheetRange;
use crate::codec::Row;
use crate::error::{Result, VendorSheetError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory spreadsheet for testing.
///
/// Mimics the parts of the Sheets API the store relies on: ragged reads,
/// append after the last populated row, overwrite from row 1, and in-place
/// blanking. Sheets must be seeded before use; touching an unknown sheet is an
/// upstream error, the same as the real API.
///
/// Uses `std::sync::Mutex` since no lock is ever held across an `.await`.
#[derive(Default)]
pub struct MemBackend {
    sheets: Mutex<HashMap<String, Vec<Row>>>,
    simulate_error: AtomicBool,
    clear_delay: Mutex<Option<Duration>>,
    fail_clear_row: Mutex<Option<u32>>,
    clear_batches: Mutex<Vec<Vec<RowRun>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    writes: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content of a sheet.
    pub fn seed(&self, sheet: &str, rows: Vec<Row>) {
        self.lock_sheets().insert(sheet.to_string(), rows);
    }

    pub fn with_sheet(self, sheet: &str, rows: Vec<Row>) -> Self {
        self.seed(sheet, rows);
        self
    }

    /// Raw snapshot of a sheet, including blanked rows.
    pub fn rows(&self, sheet: &str) -> Vec<Row> {
        self.lock_sheets().get(sheet).cloned().unwrap_or_default()
    }

    /// Make every call fail with an upstream error.
    pub fn set_simulate_error(&self, simulate: bool) {
        self.simulate_error.store(simulate, Ordering::SeqCst);
    }

    /// Slow down each clear request, to observe how many run at once.
    pub fn set_clear_delay(&self, delay: Option<Duration>) {
        *self.clear_delay.lock().unwrap_or_else(|e| e.into_inner()) = delay;
    }

    /// Fail any clear request whose runs cover `row`.
    pub fn fail_clears_touching(&self, row: Option<u32>) {
        *self.fail_clear_row.lock().unwrap_or_else(|e| e.into_inner()) = row;
    }

    /// Every clear request received, in arrival order.
    pub fn clear_batches(&self) -> Vec<Vec<RowRun>> {
        self.clear_batches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn max_in_flight_clears(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Number of append and overwrite calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock_sheets(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Row>>> {
        self.sheets.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_error(&self) -> Result<()> {
        if self.simulate_error.load(Ordering::SeqCst) {
            return Err(VendorSheetError::Upstream("Simulated upstream error".to_string()));
        }
        Ok(())
    }

    fn with_sheet_mut<T>(&self, sheet: &str, f: impl FnOnce(&mut Vec<Row>) -> T) -> Result<T> {
        let mut sheets = self.lock_sheets();
        let rows = sheets
            .get_mut(sheet)
            .ok_or_else(|| VendorSheetError::Upstream(format!("Unable to parse range: {}", sheet)))?;
        Ok(f(rows))
    }

    fn write_line(row: &mut Row, range: &SheetRange, values: &[String]) {
        let first = range.first_column();
        let last = range.last_column();
        if row.len() <= last {
            row.resize(last + 1, String::new());
        }
        for (offset, column) in (first..=last).enumerate() {
            row[column] = values.get(offset).cloned().unwrap_or_default();
        }
    }
}

fn slice_line(row: &[String], range: &SheetRange) -> Row {
    let mut line: Row = row
        .iter()
        .skip(range.first_column())
        .take(range.width())
        .cloned()
        .collect();
    while line.last().is_some_and(|c| c.is_empty()) {
        line.pop();
    }
    line
}

impl SheetBackend for MemBackend {
    async fn read(&self, range: &SheetRange) -> Result<Vec<Row>> {
        self.check_error()?;
        self.with_sheet_mut(range.sheet(), |rows| {
            let mut lines: Vec<Row> = rows.iter().map(|row| slice_line(row, range)).collect();
            while lines.last().is_some_and(|line| line.is_empty()) {
                lines.pop();
            }
            lines
        })
    }

    async fn append(&self, range: &SheetRange, new_rows: Vec<Row>) -> Result<()> {
        self.check_error()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.with_sheet_mut(range.sheet(), |rows| {
            let populated = rows
                .iter()
                .rposition(|row| !slice_line(row, range).is_empty())
                .map_or(0, |last| last + 1);
            for (offset, values) in new_rows.iter().enumerate() {
                let index = populated + offset;
                if rows.len() <= index {
                    rows.resize(index + 1, Vec::new());
                }
                Self::write_line(&mut rows[index], range, values);
            }
        })
    }

    async fn overwrite(&self, range: &SheetRange, new_rows: Vec<Row>) -> Result<()> {
        self.check_error()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.with_sheet_mut(range.sheet(), |rows| {
            if rows.len() < new_rows.len() {
                rows.resize(new_rows.len(), Vec::new());
            }
            for (row, values) in rows.iter_mut().zip(new_rows.iter()) {
                Self::write_line(row, range, values);
            }
        })
    }

    async fn clear_runs(&self, sheet: &str, runs: Vec<RowRun>) -> Result<()> {
        self.check_error()?;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = *self.clear_delay.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let fail_row = *self.fail_clear_row.lock().unwrap_or_else(|e| e.into_inner());
        let result = if fail_row.is_some_and(|row| runs.iter().any(|run| run.contains(row))) {
            Err(VendorSheetError::Upstream("Simulated clear failure".to_string()))
        } else {
            self.clear_batches
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(runs.clone());
            self.with_sheet_mut(sheet, |rows| {
                for run in &runs {
                    for number in run.start..=run.end {
                        if let Some(row) = rows.get_mut(number as usize - 1) {
                            row.iter_mut().for_each(String::clear);
                        }
                    }
                }
            })
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn range() -> SheetRange {
        SheetRange::new("Items", 'A', 'C')
    }

    #[tokio::test]
    async fn reads_are_ragged() {
        let backend = MemBackend::new().with_sheet(
            "Items",
            vec![
                row(&["id", "name", "x"]),
                row(&["ITM-0001", "", ""]),
                row(&["", "", ""]),
                row(&["ITM-0003", "Bolt", ""]),
                row(&["", "", ""]),
            ],
        );
        let rows = backend.read(&range()).await.unwrap();
        assert_eq!(
            rows,
            vec![
                row(&["id", "name", "x"]),
                row(&["ITM-0001"]),
                vec![],
                row(&["ITM-0003", "Bolt"]),
            ]
        );
    }

    #[tokio::test]
    async fn read_clips_to_range_columns() {
        let backend = MemBackend::new().with_sheet("Items", vec![row(&["a", "b", "c", "d"])]);
        let rows = backend
            .read(&SheetRange::new("Items", 'A', 'A'))
            .await
            .unwrap();
        assert_eq!(rows, vec![row(&["a"])]);
    }

    #[tokio::test]
    async fn append_goes_after_last_populated_row() {
        let backend = MemBackend::new().with_sheet(
            "Items",
            vec![row(&["id"]), row(&["ITM-0001"]), row(&["", ""])],
        );
        backend
            .append(&range(), vec![row(&["ITM-0002", "Nut"])])
            .await
            .unwrap();
        let rows = backend.rows("Items");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], row(&["ITM-0002", "Nut", ""]));
    }

    #[tokio::test]
    async fn overwrite_replaces_whole_lines() {
        let backend = MemBackend::new().with_sheet(
            "Items",
            vec![row(&["id", "name", "x"]), row(&["ITM-0001", "Old", "keep?"])],
        );
        backend
            .overwrite(&range(), vec![row(&["id", "name", "x"]), row(&["ITM-0001", "New"])])
            .await
            .unwrap();
        assert_eq!(backend.rows("Items")[1], row(&["ITM-0001", "New", ""]));
    }

    #[tokio::test]
    async fn unknown_sheet_is_upstream_error() {
        let backend = MemBackend::new();
        let err = backend.read(&range()).await.unwrap_err();
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn simulated_errors() {
        let backend = MemBackend::new().with_sheet("Items", vec![row(&["id"])]);
        backend.set_simulate_error(true);
        assert!(backend.read(&range()).await.is_err());
        assert!(backend.append(&range(), vec![]).await.is_err());
        assert_eq!(backend.write_count(), 0);
    }
}
