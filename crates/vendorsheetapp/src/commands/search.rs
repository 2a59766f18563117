//! Keyword search across items and the vendors that supply them.
//!
//! All seven sheets are read concurrently, then joined in memory:
//!
//! 1. **Filter** items by category and subcategory when given.
//! 2. **Match** the lower-cased keyword against the item description and the
//!    names of its category, subcategory and unit of measure. An empty keyword
//!    matches everything the filters let through.
//! 3. **Attach offers**: for each matching item, every mapping not marked
//!    inactive, paired with its vendor and that vendor's live contacts.
//!    Offers from inactive or missing vendors are dropped.
//!
//! Items are returned whether or not anyone supplies them, in sheet order.

use crate::codec::Record;
use crate::error::Result;
use crate::model::{
    Category, Item, SubCategory, Uom, Vendor, VendorContact, VendorItemMapping,
};
use crate::store::table::locate;
use crate::store::{SheetBackend, SheetStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub category_id: Option<String>,
    pub sub_category_id: Option<String>,
}

impl SearchQuery {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Default::default()
        }
    }
}

/// An item with its foreign keys resolved to names. Unknown references
/// resolve to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    #[serde(flatten)]
    pub item: Item,
    pub category_name: String,
    pub sub_category_name: String,
    pub uom_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorOffer {
    pub vendor: Vendor,
    pub contacts: Vec<VendorContact>,
    pub mapping: VendorItemMapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub item: ItemSummary,
    pub vendors: Vec<VendorOffer>,
}

/// Everything search reads, decoded.
struct Workbook {
    items: Vec<Item>,
    vendors: Vec<(Vendor, bool)>,
    contacts: Vec<(VendorContact, bool)>,
    mappings: Vec<(VendorItemMapping, bool)>,
    categories: Vec<Category>,
    sub_categories: Vec<SubCategory>,
    uoms: Vec<Uom>,
}

pub async fn run<B: SheetBackend>(store: &SheetStore<B>, query: &SearchQuery) -> Result<Vec<SearchHit>> {
    let workbook = load(store).await?;
    let hits = join(&workbook, query);
    tracing::debug!(hits = hits.len(), "search");
    Ok(hits)
}

async fn load<B: SheetBackend>(store: &SheetStore<B>) -> Result<Workbook> {
    let (items, vendors, contacts, mappings, categories, sub_categories, uoms) = tokio::try_join!(
        store.read_all::<Item>(),
        store.read_all::<Vendor>(),
        store.read_all::<VendorContact>(),
        store.read_all::<VendorItemMapping>(),
        store.read_all::<Category>(),
        store.read_all::<SubCategory>(),
        store.read_all::<Uom>(),
    )?;

    Ok(Workbook {
        items: decode(items),
        vendors: decode_flagged(vendors),
        contacts: decode_flagged(contacts),
        mappings: decode_flagged(mappings),
        categories: decode(categories),
        sub_categories: decode(sub_categories),
        uoms: decode(uoms),
    })
}

fn decode<R: Record>(rows: Vec<Vec<String>>) -> Vec<R> {
    locate(rows).iter().map(|row| R::decode(&row.cells)).collect()
}

/// Decode rows, remembering which ones are live (not explicitly inactive).
fn decode_flagged<R: Record>(rows: Vec<Vec<String>>) -> Vec<(R, bool)> {
    locate(rows)
        .iter()
        .map(|row| (R::decode(&row.cells), !R::is_deactivated(&row.cells)))
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn join(workbook: &Workbook, query: &SearchQuery) -> Vec<SearchHit> {
    let keyword = query
        .keyword
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    let category_filter = non_empty(&query.category_id);
    let sub_category_filter = non_empty(&query.sub_category_id);

    let category_names: HashMap<&str, &str> = workbook
        .categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();
    let sub_category_names: HashMap<&str, &str> = workbook
        .sub_categories
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();
    let uom_names: HashMap<&str, &str> = workbook
        .uoms
        .iter()
        .map(|u| (u.id.as_str(), u.name.as_str()))
        .collect();

    let live_vendors: HashMap<&str, &Vendor> = workbook
        .vendors
        .iter()
        .filter(|(_, live)| *live)
        .map(|(v, _)| (v.id.as_str(), v))
        .collect();
    let mut contacts_by_vendor: HashMap<&str, Vec<VendorContact>> = HashMap::new();
    for (contact, live) in &workbook.contacts {
        if *live {
            contacts_by_vendor
                .entry(contact.vendor_id.as_str())
                .or_default()
                .push(contact.clone());
        }
    }

    workbook
        .items
        .iter()
        .filter(|item| category_filter.map_or(true, |id| item.category_id == id))
        .filter(|item| sub_category_filter.map_or(true, |id| item.sub_category_id == id))
        .map(|item| ItemSummary {
            item: item.clone(),
            category_name: name_of(&category_names, &item.category_id),
            sub_category_name: name_of(&sub_category_names, &item.sub_category_id),
            uom_name: name_of(&uom_names, &item.uom_id),
        })
        .filter(|summary| keyword.is_empty() || matches_keyword(summary, &keyword))
        .map(|summary| {
            let vendors = workbook
                .mappings
                .iter()
                .filter(|(mapping, live)| *live && mapping.item_id == summary.item.id)
                .filter_map(|(mapping, _)| {
                    let vendor = live_vendors.get(mapping.vendor_id.as_str())?;
                    Some(VendorOffer {
                        vendor: (*vendor).clone(),
                        contacts: contacts_by_vendor
                            .get(mapping.vendor_id.as_str())
                            .cloned()
                            .unwrap_or_default(),
                        mapping: mapping.clone(),
                    })
                })
                .collect();
            SearchHit {
                item: summary,
                vendors,
            }
        })
        .collect()
}

fn name_of(names: &HashMap<&str, &str>, id: &str) -> String {
    names.get(id).copied().unwrap_or_default().to_string()
}

fn matches_keyword(summary: &ItemSummary, keyword: &str) -> bool {
    [
        &summary.item.description,
        &summary.category_name,
        &summary.sub_category_name,
        &summary.uom_name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(keyword))
}
