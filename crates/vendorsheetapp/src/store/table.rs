use super::backend::SheetBackend;
use super::clearer::{ClearOptions, ClearReport, RowClearer};
use super::range::SheetRange;
use crate::codec::{is_blank, now_timestamp, row_id, Record, Row};
use crate::error::{Result, VendorSheetError};
use crate::ids::IdAllocator;
use std::collections::HashSet;
use std::sync::Arc;

/// Sheet row number of the first data row; row 1 is the header.
pub const FIRST_DATA_ROW: u32 = 2;

/// A live record row together with its absolute sheet row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub row_number: u32,
    pub cells: Row,
}

/// Typed record access over a [`SheetBackend`].
///
/// Every operation is a short sequence of remote calls with nothing held
/// between them. See the module docs for the create, update and delete
/// lifecycles.
pub struct SheetStore<B: SheetBackend> {
    backend: Arc<B>,
    clearer: RowClearer<B>,
}

impl<B: SheetBackend> SheetStore<B> {
    pub fn new(backend: B, options: ClearOptions) -> Self {
        Self::with_shared(Arc::new(backend), options)
    }

    pub fn with_shared(backend: Arc<B>, options: ClearOptions) -> Self {
        let clearer = RowClearer::new(Arc::clone(&backend), options);
        Self { backend, clearer }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clear_options(&self) -> ClearOptions {
        self.clearer.options()
    }

    /// Raw rows of a record's whole range, header included.
    pub async fn read_all<R: Record>(&self) -> Result<Vec<Row>> {
        self.backend.read(&SheetRange::of::<R>()).await
    }

    /// Every non-blank data row with its sheet row number.
    pub async fn rows<R: Record>(&self) -> Result<Vec<Located>> {
        let rows = self.read_all::<R>().await?;
        Ok(locate(rows))
    }

    pub async fn list<R: Record>(&self) -> Result<Vec<R>> {
        let rows = self.rows::<R>().await?;
        Ok(rows.iter().map(|row| R::decode(&row.cells)).collect())
    }

    /// Like [`list`](Self::list), dropping rows explicitly marked inactive.
    pub async fn list_live<R: Record>(&self) -> Result<Vec<R>> {
        let rows = self.rows::<R>().await?;
        Ok(rows
            .iter()
            .filter(|row| !R::is_deactivated(&row.cells))
            .map(|row| R::decode(&row.cells))
            .collect())
    }

    pub async fn get<R: Record>(&self, id: &str) -> Result<R> {
        let wanted = id.trim();
        self.rows::<R>()
            .await?
            .iter()
            .find(|row| row_id(&row.cells) == wanted)
            .map(|row| R::decode(&row.cells))
            .ok_or_else(|| VendorSheetError::not_found(R::ENTITY, wanted))
    }

    /// Allocate one identifier and append the record built from it.
    pub async fn create<R: Record>(&self, build: impl FnOnce(String) -> R) -> Result<R> {
        let mut allocator = self.allocator::<R>().await?;
        let record = build(allocator.allocate());
        self.backend
            .append(&SheetRange::of::<R>(), vec![record.encode()])
            .await?;
        tracing::debug!(entity = R::ENTITY, id = record.id(), "created");
        Ok(record)
    }

    /// Allocate consecutive identifiers from a single scan and append every
    /// record in one request. An empty batch writes nothing.
    pub async fn create_many<R: Record, D>(
        &self,
        drafts: Vec<D>,
        mut build: impl FnMut(String, D) -> R,
    ) -> Result<Vec<R>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }
        let mut allocator = self.allocator::<R>().await?;
        let records: Vec<R> = drafts
            .into_iter()
            .map(|draft| build(allocator.allocate(), draft))
            .collect();
        let rows = records.iter().map(Record::encode).collect();
        self.backend.append(&SheetRange::of::<R>(), rows).await?;
        tracing::debug!(entity = R::ENTITY, count = records.len(), "created batch");
        Ok(records)
    }

    /// Merge `patch` into the row holding `id` and write the whole range back.
    ///
    /// Cells the patch does not name are written back exactly as read, in
    /// this row and in every other. Records with an `updated_at` column get it
    /// stamped.
    pub async fn update<R: Record>(&self, id: &str, patch: &R::Patch) -> Result<R> {
        let wanted = id.trim();
        let range = SheetRange::of::<R>();
        let mut rows = self.backend.read(&range).await?;

        let index = rows
            .iter()
            .skip(1)
            .position(|row| row_id(row) == wanted)
            .map(|data_index| data_index + 1)
            .ok_or_else(|| VendorSheetError::not_found(R::ENTITY, wanted))?;

        let mut cells = R::patch_cells(patch);
        if let Some(column) = R::UPDATED_AT {
            cells = cells.set(column, now_timestamp());
        }
        cells.apply(&mut rows[index]);

        let updated = R::decode(&rows[index]);
        self.backend.overwrite(&range, rows).await?;
        tracing::debug!(entity = R::ENTITY, id = wanted, "updated");
        Ok(updated)
    }

    /// Blank every row whose identifier is `id`.
    pub async fn delete<R: Record>(&self, id: &str) -> Result<ClearReport> {
        let wanted = id.trim();
        let numbers = self.row_numbers::<R>(|row_id| row_id == wanted).await?;
        if numbers.is_empty() {
            return Err(VendorSheetError::not_found(R::ENTITY, wanted));
        }
        self.clearer.clear(R::SHEET, &numbers).await
    }

    /// Blank every row whose identifier is in `ids`. Fails only when nothing
    /// at all matched; unknown identifiers among known ones are ignored.
    pub async fn delete_many<R: Record, S: AsRef<str>>(&self, ids: &[S]) -> Result<ClearReport> {
        if ids.is_empty() {
            return Err(VendorSheetError::InvalidInput(
                "no ids provided".to_string(),
            ));
        }
        let wanted: HashSet<&str> = ids.iter().map(|id| id.as_ref().trim()).collect();
        let numbers = self
            .row_numbers::<R>(|row_id| wanted.contains(row_id))
            .await?;
        if numbers.is_empty() {
            let mut listed: Vec<&str> = wanted.into_iter().collect();
            listed.sort_unstable();
            return Err(VendorSheetError::not_found(R::ENTITY, listed.join(", ")));
        }
        self.clearer.clear(R::SHEET, &numbers).await
    }

    async fn row_numbers<R: Record>(&self, matches: impl Fn(&str) -> bool) -> Result<Vec<u32>> {
        let rows = self.rows::<R>().await?;
        Ok(rows
            .into_iter()
            .filter(|row| matches(row_id(&row.cells)))
            .map(|row| row.row_number)
            .collect())
    }

    async fn allocator<R: Record>(&self) -> Result<IdAllocator> {
        let ids = self.backend.read(&SheetRange::id_column::<R>()).await?;
        Ok(IdAllocator::from_rows(&ids, R::PREFIX))
    }
}

/// Pair data rows with their sheet row numbers, skipping the header and
/// blanked rows.
pub fn locate(rows: Vec<Row>) -> Vec<Located> {
    rows.into_iter()
        .enumerate()
        .skip(1)
        .filter(|(_, cells)| !is_blank(cells))
        .map(|(index, cells)| Located {
            row_number: index as u32 - 1 + FIRST_DATA_ROW,
            cells,
        })
        .collect()
}
