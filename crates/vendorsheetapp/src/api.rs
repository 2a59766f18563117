//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every vendorsheet operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the store**, built explicitly from configuration. There is no
//!   global client.
//! - **Dispatches** to the matching function in `commands/*.rs`
//! - **Returns structured types**: records, [`DeleteResult`], [`SearchHit`]
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O formatting**: No stdout, stderr or tables
//!
//! ## Generic Over SheetBackend
//!
//! `VendorSheetApi<B: SheetBackend>` is generic over the storage backend:
//! - Production: `VendorSheetApi<SheetsHttpBackend>`, via [`VendorSheetApi::from_config`]
//! - Testing: `VendorSheetApi<MemBackend>`
//!
//! ## Testing Strategy
//!
//! API tests (in `tests/`) check that each method reaches the right command
//! and that results come back intact. Command behavior is tested in the
//! command modules.

use crate::commands::search::{SearchHit, SearchQuery};
use crate::commands::{self, DeleteResult};
use crate::config::SheetConfig;
use crate::error::Result;
use crate::model::{
    Category, CategoryPatch, ContactDraft, ContactPatch, Item, ItemDraft, ItemPatch, MappingDraft,
    MappingPatch, PinDraft, PinnedSearch, SubCategory, SubCategoryPatch, Uom, UomPatch, Vendor,
    VendorContact, VendorDraft, VendorItemMapping, VendorPatch,
};
use crate::store::http_backend::SheetsHttpBackend;
use crate::store::{ClearOptions, SheetBackend, SheetStore};

/// The main API facade for vendorsheet operations.
pub struct VendorSheetApi<B: SheetBackend> {
    store: SheetStore<B>,
}

impl VendorSheetApi<SheetsHttpBackend> {
    /// Connect to the spreadsheet named in `config`. No request is made until
    /// the first operation.
    pub fn from_config(config: &SheetConfig) -> Result<Self> {
        let backend = SheetsHttpBackend::from_config(config)?;
        tracing::debug!(spreadsheet = %config.spreadsheet_id, base = config.api_base(), "api ready");
        Ok(Self::with_backend(backend, config.clear_options()))
    }
}

impl<B: SheetBackend> VendorSheetApi<B> {
    pub fn new(store: SheetStore<B>) -> Self {
        Self { store }
    }

    pub fn with_backend(backend: B, options: ClearOptions) -> Self {
        Self::new(SheetStore::new(backend, options))
    }

    pub fn store(&self) -> &SheetStore<B> {
        &self.store
    }

    // --- Categories -------------------------------------------------------

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        commands::categories::list(&self.store).await
    }

    pub async fn get_category(&self, id: &str) -> Result<Category> {
        commands::categories::get(&self.store, id).await
    }

    pub async fn create_category(&self, name: &str) -> Result<Category> {
        commands::categories::create(&self.store, name).await
    }

    pub async fn update_category(&self, id: &str, patch: &CategoryPatch) -> Result<Category> {
        commands::categories::update(&self.store, id, patch).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<DeleteResult> {
        commands::categories::delete(&self.store, id).await
    }

    // --- Subcategories ----------------------------------------------------

    pub async fn list_sub_categories(&self) -> Result<Vec<SubCategory>> {
        commands::subcategories::list(&self.store).await
    }

    pub async fn list_sub_categories_for(&self, category_id: &str) -> Result<Vec<SubCategory>> {
        commands::subcategories::list_for_category(&self.store, category_id).await
    }

    pub async fn create_sub_category(&self, category_id: &str, name: &str) -> Result<SubCategory> {
        commands::subcategories::create(&self.store, category_id, name).await
    }

    pub async fn update_sub_category(
        &self,
        id: &str,
        patch: &SubCategoryPatch,
    ) -> Result<SubCategory> {
        commands::subcategories::update(&self.store, id, patch).await
    }

    pub async fn delete_sub_category(&self, id: &str) -> Result<DeleteResult> {
        commands::subcategories::delete(&self.store, id).await
    }

    // --- Units of measure -------------------------------------------------

    pub async fn list_uoms(&self) -> Result<Vec<Uom>> {
        commands::uoms::list(&self.store).await
    }

    pub async fn create_uom(&self, name: &str, description: Option<&str>) -> Result<Uom> {
        commands::uoms::create(&self.store, name, description).await
    }

    pub async fn update_uom(&self, id: &str, patch: &UomPatch) -> Result<Uom> {
        commands::uoms::update(&self.store, id, patch).await
    }

    pub async fn delete_uom(&self, id: &str) -> Result<DeleteResult> {
        commands::uoms::delete(&self.store, id).await
    }

    // --- Items ------------------------------------------------------------

    pub async fn list_items(&self) -> Result<Vec<Item>> {
        commands::items::list(&self.store).await
    }

    pub async fn get_item(&self, id: &str) -> Result<Item> {
        commands::items::get(&self.store, id).await
    }

    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item> {
        commands::items::create(&self.store, draft).await
    }

    pub async fn bulk_create_items(&self, drafts: Vec<ItemDraft>) -> Result<Vec<Item>> {
        commands::items::bulk_create(&self.store, drafts).await
    }

    pub async fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<Item> {
        commands::items::update(&self.store, id, patch).await
    }

    pub async fn delete_item(&self, id: &str) -> Result<DeleteResult> {
        commands::items::delete(&self.store, id).await
    }

    pub async fn bulk_delete_items<S: AsRef<str>>(&self, ids: &[S]) -> Result<DeleteResult> {
        commands::items::bulk_delete(&self.store, ids).await
    }

    // --- Vendors ----------------------------------------------------------

    pub async fn list_vendors(&self) -> Result<Vec<Vendor>> {
        commands::vendors::list(&self.store).await
    }

    pub async fn get_vendor(&self, id: &str) -> Result<Vendor> {
        commands::vendors::get(&self.store, id).await
    }

    pub async fn create_vendor(&self, draft: VendorDraft) -> Result<Vendor> {
        commands::vendors::create(&self.store, draft).await
    }

    pub async fn update_vendor(&self, id: &str, patch: &VendorPatch) -> Result<Vendor> {
        commands::vendors::update(&self.store, id, patch).await
    }

    pub async fn delete_vendor(&self, id: &str) -> Result<DeleteResult> {
        commands::vendors::delete(&self.store, id).await
    }

    // --- Contacts ---------------------------------------------------------

    pub async fn list_contacts(&self, vendor_id: &str) -> Result<Vec<VendorContact>> {
        commands::contacts::list_for_vendor(&self.store, vendor_id).await
    }

    pub async fn add_contact(&self, vendor_id: &str, draft: ContactDraft) -> Result<VendorContact> {
        commands::contacts::add(&self.store, vendor_id, draft).await
    }

    pub async fn add_contacts(
        &self,
        vendor_id: &str,
        drafts: Vec<ContactDraft>,
    ) -> Result<Vec<VendorContact>> {
        commands::contacts::add_many(&self.store, vendor_id, drafts).await
    }

    pub async fn update_contact(&self, id: &str, patch: &ContactPatch) -> Result<VendorContact> {
        commands::contacts::update(&self.store, id, patch).await
    }

    pub async fn delete_contact(&self, id: &str) -> Result<DeleteResult> {
        commands::contacts::delete(&self.store, id).await
    }

    // --- Mappings ---------------------------------------------------------

    pub async fn list_mappings(&self, vendor_id: &str) -> Result<Vec<VendorItemMapping>> {
        commands::mappings::list_for_vendor(&self.store, vendor_id).await
    }

    pub async fn add_mapping(
        &self,
        vendor_id: &str,
        draft: MappingDraft,
    ) -> Result<VendorItemMapping> {
        commands::mappings::add(&self.store, vendor_id, draft).await
    }

    pub async fn add_mappings(
        &self,
        vendor_id: &str,
        drafts: Vec<MappingDraft>,
    ) -> Result<Vec<VendorItemMapping>> {
        commands::mappings::add_many(&self.store, vendor_id, drafts).await
    }

    pub async fn update_mapping(
        &self,
        id: &str,
        patch: &MappingPatch,
    ) -> Result<VendorItemMapping> {
        commands::mappings::update(&self.store, id, patch).await
    }

    pub async fn delete_mapping(&self, id: &str) -> Result<DeleteResult> {
        commands::mappings::delete(&self.store, id).await
    }

    // --- Pins and search --------------------------------------------------

    pub async fn list_pins(&self) -> Result<Vec<PinnedSearch>> {
        commands::pinned::list(&self.store).await
    }

    pub async fn pin(&self, draft: PinDraft) -> Result<PinnedSearch> {
        commands::pinned::create(&self.store, draft).await
    }

    pub async fn unpin(&self, id: &str) -> Result<DeleteResult> {
        commands::pinned::delete(&self.store, id).await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        commands::search::run(&self.store, query).await
    }
}
