//! Typed records for every sheet, plus the drafts used to create them and the
//! patches used to update them.
//!
//! Column order is the sheet layout and must not change: rows are addressed by
//! position, and the sheets are shared with people editing them by hand.

use crate::codec::{cell, decode_bool, encode_bool, Record, Row, RowPatch};
use serde::{Deserialize, Serialize};

// --- Category -------------------------------------------------------------

mod category_col {
    pub const NAME: usize = 1;
    pub const CREATED_AT: usize = 2;
    pub const UPDATED_AT: usize = 3;
    pub const ACTIVE: usize = 4;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl Record for Category {
    const ENTITY: &'static str = "Category";
    const SHEET: &'static str = "Categories";
    const LAST_COLUMN: char = 'E';
    const PREFIX: &'static str = "CAT";
    const UPDATED_AT: Option<usize> = Some(category_col::UPDATED_AT);
    const ACTIVE: Option<usize> = Some(category_col::ACTIVE);

    type Patch = CategoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use category_col::*;
        Self {
            id: cell(row, 0),
            name: cell(row, NAME),
            created_at: cell(row, CREATED_AT),
            updated_at: cell(row, UPDATED_AT),
            active: decode_bool(&cell(row, ACTIVE)),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
            encode_bool(self.active),
        ]
    }

    fn patch_cells(patch: &CategoryPatch) -> RowPatch {
        RowPatch::new()
            .set_opt(category_col::NAME, patch.name.as_deref())
            .set_bool(category_col::ACTIVE, patch.active)
    }
}

// --- SubCategory ----------------------------------------------------------

mod sub_category_col {
    pub const CATEGORY_ID: usize = 1;
    pub const NAME: usize = 2;
    pub const CREATED_AT: usize = 3;
    pub const UPDATED_AT: usize = 4;
    pub const ACTIVE: usize = 5;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SubCategoryPatch {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl Record for SubCategory {
    const ENTITY: &'static str = "Sub category";
    const SHEET: &'static str = "SubCategories";
    const LAST_COLUMN: char = 'F';
    const PREFIX: &'static str = "SUB";
    const UPDATED_AT: Option<usize> = Some(sub_category_col::UPDATED_AT);
    const ACTIVE: Option<usize> = Some(sub_category_col::ACTIVE);

    type Patch = SubCategoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use sub_category_col::*;
        Self {
            id: cell(row, 0),
            category_id: cell(row, CATEGORY_ID),
            name: cell(row, NAME),
            created_at: cell(row, CREATED_AT),
            updated_at: cell(row, UPDATED_AT),
            active: decode_bool(&cell(row, ACTIVE)),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.category_id.clone(),
            self.name.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
            encode_bool(self.active),
        ]
    }

    fn patch_cells(patch: &SubCategoryPatch) -> RowPatch {
        use sub_category_col::*;
        RowPatch::new()
            .set_opt(CATEGORY_ID, patch.category_id.as_deref())
            .set_opt(NAME, patch.name.as_deref())
            .set_bool(ACTIVE, patch.active)
    }
}

// --- Unit of measure ------------------------------------------------------

mod uom_col {
    pub const NAME: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const ACTIVE: usize = 3;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UomPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl Record for Uom {
    const ENTITY: &'static str = "UOM";
    const SHEET: &'static str = "UOMs";
    const LAST_COLUMN: char = 'D';
    const PREFIX: &'static str = "UOM";
    const ACTIVE: Option<usize> = Some(uom_col::ACTIVE);

    type Patch = UomPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use uom_col::*;
        Self {
            id: cell(row, 0),
            name: cell(row, NAME),
            description: cell(row, DESCRIPTION),
            active: decode_bool(&cell(row, ACTIVE)),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            encode_bool(self.active),
        ]
    }

    fn patch_cells(patch: &UomPatch) -> RowPatch {
        use uom_col::*;
        RowPatch::new()
            .set_opt(NAME, patch.name.as_deref())
            .set_opt(DESCRIPTION, patch.description.as_deref())
            .set_bool(ACTIVE, patch.active)
    }
}

// --- Item -----------------------------------------------------------------

mod item_col {
    pub const CATEGORY_ID: usize = 1;
    pub const SUB_CATEGORY_ID: usize = 2;
    pub const DESCRIPTION: usize = 3;
    pub const UOM_ID: usize = 4;
    pub const CREATED_AT: usize = 5;
    pub const UPDATED_AT: usize = 6;
    pub const ACTIVE: usize = 7;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub description: String,
    pub uom_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub category_id: String,
    pub sub_category_id: String,
    pub description: String,
    pub uom_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub category_id: Option<String>,
    pub sub_category_id: Option<String>,
    pub description: Option<String>,
    pub uom_id: Option<String>,
    pub active: Option<bool>,
}

impl Record for Item {
    const ENTITY: &'static str = "Item";
    const SHEET: &'static str = "Items";
    const LAST_COLUMN: char = 'H';
    const PREFIX: &'static str = "ITM";
    const UPDATED_AT: Option<usize> = Some(item_col::UPDATED_AT);
    const ACTIVE: Option<usize> = Some(item_col::ACTIVE);

    type Patch = ItemPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use item_col::*;
        Self {
            id: cell(row, 0),
            category_id: cell(row, CATEGORY_ID),
            sub_category_id: cell(row, SUB_CATEGORY_ID),
            description: cell(row, DESCRIPTION),
            uom_id: cell(row, UOM_ID),
            created_at: cell(row, CREATED_AT),
            updated_at: cell(row, UPDATED_AT),
            active: decode_bool(&cell(row, ACTIVE)),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.category_id.clone(),
            self.sub_category_id.clone(),
            self.description.clone(),
            self.uom_id.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
            encode_bool(self.active),
        ]
    }

    fn patch_cells(patch: &ItemPatch) -> RowPatch {
        use item_col::*;
        RowPatch::new()
            .set_opt(CATEGORY_ID, patch.category_id.as_deref())
            .set_opt(SUB_CATEGORY_ID, patch.sub_category_id.as_deref())
            .set_opt(DESCRIPTION, patch.description.as_deref())
            .set_opt(UOM_ID, patch.uom_id.as_deref())
            .set_bool(ACTIVE, patch.active)
    }
}

// --- Vendor ---------------------------------------------------------------

mod vendor_col {
    pub const NAME: usize = 1;
    pub const ADDRESS: usize = 2;
    pub const STATE: usize = 3;
    pub const CITY: usize = 4;
    pub const PIN_CODE: usize = 5;
    pub const GST: usize = 6;
    pub const PHONE: usize = 7;
    pub const EMAIL: usize = 8;
    pub const CREATED_AT: usize = 9;
    pub const UPDATED_AT: usize = 10;
    pub const ACTIVE: usize = 11;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub pin_code: String,
    pub gst: String,
    pub phone: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDraft {
    pub name: String,
    pub address: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub pin_code: Option<String>,
    pub gst: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VendorPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub pin_code: Option<String>,
    pub gst: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

impl Record for Vendor {
    const ENTITY: &'static str = "Vendor";
    const SHEET: &'static str = "Vendors";
    const LAST_COLUMN: char = 'L';
    const PREFIX: &'static str = "VND";
    const UPDATED_AT: Option<usize> = Some(vendor_col::UPDATED_AT);
    const ACTIVE: Option<usize> = Some(vendor_col::ACTIVE);

    type Patch = VendorPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use vendor_col::*;
        Self {
            id: cell(row, 0),
            name: cell(row, NAME),
            address: cell(row, ADDRESS),
            state: cell(row, STATE),
            city: cell(row, CITY),
            pin_code: cell(row, PIN_CODE),
            gst: cell(row, GST),
            phone: cell(row, PHONE),
            email: cell(row, EMAIL),
            created_at: cell(row, CREATED_AT),
            updated_at: cell(row, UPDATED_AT),
            active: decode_bool(&cell(row, ACTIVE)),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.address.clone(),
            self.state.clone(),
            self.city.clone(),
            self.pin_code.clone(),
            self.gst.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
            encode_bool(self.active),
        ]
    }

    fn patch_cells(patch: &VendorPatch) -> RowPatch {
        use vendor_col::*;
        RowPatch::new()
            .set_opt(NAME, patch.name.as_deref())
            .set_opt(ADDRESS, patch.address.as_deref())
            .set_opt(STATE, patch.state.as_deref())
            .set_opt(CITY, patch.city.as_deref())
            .set_opt(PIN_CODE, patch.pin_code.as_deref())
            .set_opt(GST, patch.gst.as_deref())
            .set_opt(PHONE, patch.phone.as_deref())
            .set_opt(EMAIL, patch.email.as_deref())
            .set_bool(ACTIVE, patch.active)
    }
}

// --- Vendor contact -------------------------------------------------------

mod contact_col {
    pub const VENDOR_ID: usize = 1;
    pub const NAME: usize = 2;
    pub const DESIGNATION: usize = 3;
    pub const PHONE: usize = 4;
    pub const EMAIL: usize = 5;
    pub const INFO: usize = 6;
    pub const ACTIVE: usize = 7;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorContact {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub designation: String,
    pub phone: String,
    pub email: String,
    pub info: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub info: Option<String>,
}

/// The owning vendor is fixed at creation; a contact cannot be moved.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub info: Option<String>,
    pub active: Option<bool>,
}

impl Record for VendorContact {
    const ENTITY: &'static str = "Contact";
    const SHEET: &'static str = "VendorContacts";
    const LAST_COLUMN: char = 'H';
    const PREFIX: &'static str = "C";
    const ACTIVE: Option<usize> = Some(contact_col::ACTIVE);

    type Patch = ContactPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use contact_col::*;
        Self {
            id: cell(row, 0),
            vendor_id: cell(row, VENDOR_ID),
            name: cell(row, NAME),
            designation: cell(row, DESIGNATION),
            phone: cell(row, PHONE),
            email: cell(row, EMAIL),
            info: cell(row, INFO),
            active: decode_bool(&cell(row, ACTIVE)),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.vendor_id.clone(),
            self.name.clone(),
            self.designation.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.info.clone(),
            encode_bool(self.active),
        ]
    }

    fn patch_cells(patch: &ContactPatch) -> RowPatch {
        use contact_col::*;
        RowPatch::new()
            .set_opt(NAME, patch.name.as_deref())
            .set_opt(DESIGNATION, patch.designation.as_deref())
            .set_opt(PHONE, patch.phone.as_deref())
            .set_opt(EMAIL, patch.email.as_deref())
            .set_opt(INFO, patch.info.as_deref())
            .set_bool(ACTIVE, patch.active)
    }
}

// --- Vendor item mapping --------------------------------------------------

mod mapping_col {
    pub const VENDOR_ID: usize = 1;
    pub const ITEM_ID: usize = 2;
    pub const PRICE: usize = 3;
    pub const UOM: usize = 4;
    pub const LEAD_TIME_DAYS: usize = 5;
    pub const NOTES: usize = 6;
    pub const ACTIVE: usize = 7;
}

/// A vendor's offer for one item. `price`, `uom` and `lead_time_days` are free
/// text, exactly as typed into the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorItemMapping {
    pub id: String,
    pub vendor_id: String,
    pub item_id: String,
    pub price: String,
    pub uom: String,
    pub lead_time_days: String,
    pub notes: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingDraft {
    pub item_id: String,
    pub price: Option<String>,
    pub uom: Option<String>,
    pub lead_time_days: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MappingPatch {
    pub item_id: Option<String>,
    pub price: Option<String>,
    pub uom: Option<String>,
    pub lead_time_days: Option<String>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}

impl Record for VendorItemMapping {
    const ENTITY: &'static str = "Mapping";
    const SHEET: &'static str = "VendorItemsMapping";
    const LAST_COLUMN: char = 'H';
    const PREFIX: &'static str = "M";
    const ACTIVE: Option<usize> = Some(mapping_col::ACTIVE);

    type Patch = MappingPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use mapping_col::*;
        Self {
            id: cell(row, 0),
            vendor_id: cell(row, VENDOR_ID),
            item_id: cell(row, ITEM_ID),
            price: cell(row, PRICE),
            uom: cell(row, UOM),
            lead_time_days: cell(row, LEAD_TIME_DAYS),
            notes: cell(row, NOTES),
            active: decode_bool(&cell(row, ACTIVE)),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.vendor_id.clone(),
            self.item_id.clone(),
            self.price.clone(),
            self.uom.clone(),
            self.lead_time_days.clone(),
            self.notes.clone(),
            encode_bool(self.active),
        ]
    }

    fn patch_cells(patch: &MappingPatch) -> RowPatch {
        use mapping_col::*;
        RowPatch::new()
            .set_opt(ITEM_ID, patch.item_id.as_deref())
            .set_opt(PRICE, patch.price.as_deref())
            .set_opt(UOM, patch.uom.as_deref())
            .set_opt(LEAD_TIME_DAYS, patch.lead_time_days.as_deref())
            .set_opt(NOTES, patch.notes.as_deref())
            .set_bool(ACTIVE, patch.active)
    }
}

// --- Pinned search result -------------------------------------------------

mod pin_col {
    pub const ITEM_ID: usize = 1;
    pub const ITEM_DESCRIPTION: usize = 2;
    pub const SEARCH_TERM: usize = 3;
    pub const CREATED_AT: usize = 4;
}

/// A search result the user pinned. Pins are never edited, only created and
/// blanked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedSearch {
    pub id: String,
    pub item_id: String,
    pub item_description: String,
    pub search_term: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDraft {
    pub item_id: String,
    pub item_description: Option<String>,
    pub search_term: Option<String>,
}

/// Pins have no editable fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPatch;

impl Record for PinnedSearch {
    const ENTITY: &'static str = "Pin";
    const SHEET: &'static str = "PinnedItems";
    const LAST_COLUMN: char = 'E';
    const PREFIX: &'static str = "PIN";

    type Patch = NoPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn decode(row: &[String]) -> Self {
        use pin_col::*;
        Self {
            id: cell(row, 0),
            item_id: cell(row, ITEM_ID),
            item_description: cell(row, ITEM_DESCRIPTION),
            search_term: cell(row, SEARCH_TERM),
            created_at: cell(row, CREATED_AT),
        }
    }

    fn encode(&self) -> Row {
        vec![
            self.id.clone(),
            self.item_id.clone(),
            self.item_description.clone(),
            self.search_term.clone(),
            self.created_at.clone(),
        ]
    }

    fn patch_cells(_patch: &NoPatch) -> RowPatch {
        RowPatch::new()
    }
}
