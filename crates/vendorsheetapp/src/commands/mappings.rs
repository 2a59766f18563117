use super::{or_blank, require, require_opt, trimmed, DeleteResult};
use crate::codec::Record;
use crate::error::Result;
use crate::model::{MappingDraft, MappingPatch, VendorItemMapping};
use crate::store::{SheetBackend, SheetStore};

/// Items one vendor supplies, minus mappings explicitly marked inactive.
pub async fn list_for_vendor<B: SheetBackend>(
    store: &SheetStore<B>,
    vendor_id: &str,
) -> Result<Vec<VendorItemMapping>> {
    let vendor_id = vendor_id.trim();
    let live: Vec<VendorItemMapping> = store.list_live().await?;
    Ok(live
        .into_iter()
        .filter(|mapping| mapping.vendor_id == vendor_id)
        .collect())
}

pub async fn add<B: SheetBackend>(
    store: &SheetStore<B>,
    vendor_id: &str,
    draft: MappingDraft,
) -> Result<VendorItemMapping> {
    let vendor_id = require("vendorId", vendor_id)?;
    require("itemId", &draft.item_id)?;
    store.create(|id| build(id, vendor_id, draft)).await
}

pub async fn add_many<B: SheetBackend>(
    store: &SheetStore<B>,
    vendor_id: &str,
    drafts: Vec<MappingDraft>,
) -> Result<Vec<VendorItemMapping>> {
    let vendor_id = require("vendorId", vendor_id)?;
    for draft in &drafts {
        require("itemId", &draft.item_id)?;
    }
    store
        .create_many(drafts, |id, draft| build(id, vendor_id.clone(), draft))
        .await
}

pub async fn update<B: SheetBackend>(
    store: &SheetStore<B>,
    id: &str,
    patch: &MappingPatch,
) -> Result<VendorItemMapping> {
    let patch = MappingPatch {
        item_id: require_opt("itemId", &patch.item_id)?,
        price: trimmed(&patch.price),
        uom: trimmed(&patch.uom),
        lead_time_days: trimmed(&patch.lead_time_days),
        notes: trimmed(&patch.notes),
        active: patch.active,
    };
    store.update(id, &patch).await
}

pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<VendorItemMapping>(id).await?;
    Ok(DeleteResult::new(
        VendorItemMapping::ENTITY,
        vec![id.trim().to_string()],
        report,
    ))
}

fn build(id: String, vendor_id: String, draft: MappingDraft) -> VendorItemMapping {
    VendorItemMapping {
        id,
        vendor_id,
        item_id: draft.item_id.trim().to_string(),
        price: or_blank(draft.price.as_deref()),
        uom: or_blank(draft.uom.as_deref()),
        lead_time_days: or_blank(draft.lead_time_days.as_deref()),
        notes: or_blank(draft.notes.as_deref()),
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_store;

    fn offer(item_id: &str, price: &str) -> MappingDraft {
        MappingDraft {
            item_id: item_id.into(),
            price: Some(price.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn listing_skips_inactive_mappings() {
        let store = sample_store();
        let volt = list_for_vendor(&store, "VND-0002").await.unwrap();
        let ids: Vec<&str> = volt.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["M-0002"]);
    }

    #[tokio::test]
    async fn add_keeps_free_text_and_blanks_missing_fields() {
        let store = sample_store();
        let mapping = add(&store, "VND-0001", offer("ITM-0002", "3.75 + GST"))
            .await
            .unwrap();
        assert_eq!(mapping.id, "M-0006");
        assert_eq!(mapping.price, "3.75 + GST");
        assert_eq!(mapping.uom, "");
        assert_eq!(mapping.lead_time_days, "");
        assert!(mapping.active);
    }

    #[tokio::test]
    async fn add_many_appends_once() {
        let store = sample_store();
        let added = add_many(
            &store,
            "VND-0002",
            vec![offer("ITM-0001", "14"), offer("ITM-0002", "6")],
        )
        .await
        .unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(added[1].id, "M-0007");
        assert_eq!(store.backend().write_count(), 1);
    }

    #[tokio::test]
    async fn update_reprices() {
        let store = sample_store();
        let patch = MappingPatch {
            price: Some("12.00".into()),
            ..Default::default()
        };
        let mapping = update(&store, "M-0001", &patch).await.unwrap();
        assert_eq!(mapping.price, "12.00");
        assert_eq!(mapping.lead_time_days, "7");
    }

    #[tokio::test]
    async fn delete_blanks_mapping() {
        let store = sample_store();
        delete(&store, "M-0002").await.unwrap();
        assert!(list_for_vendor(&store, "VND-0002").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_trims_patched_values() {
        let store = sample_store();
        let patch = MappingPatch {
            item_id: Some(" ITM-0002 ".into()),
            price: Some("  14 ".into()),
            ..Default::default()
        };
        update(&store, "M-0001", &patch).await.unwrap();
        let stored: VendorItemMapping = store.get("M-0001").await.unwrap();
        assert_eq!(stored.item_id, "ITM-0002");
        assert_eq!(stored.price, "14");
    }
}
