use super::{or_dash, require, require_opt, trimmed, DeleteResult};
use crate::codec::Record;
use crate::error::Result;
use crate::model::{ContactDraft, ContactPatch, VendorContact};
use crate::store::{SheetBackend, SheetStore};

/// Contacts of one vendor, minus those explicitly marked inactive.
pub async fn list_for_vendor<B: SheetBackend>(
    store: &SheetStore<B>,
    vendor_id: &str,
) -> Result<Vec<VendorContact>> {
    let vendor_id = vendor_id.trim();
    let live: Vec<VendorContact> = store.list_live().await?;
    Ok(live
        .into_iter()
        .filter(|contact| contact.vendor_id == vendor_id)
        .collect())
}

pub async fn add<B: SheetBackend>(
    store: &SheetStore<B>,
    vendor_id: &str,
    draft: ContactDraft,
) -> Result<VendorContact> {
    let vendor_id = require("vendorId", vendor_id)?;
    let name = require("name", &draft.name)?;
    store.create(|id| build(id, vendor_id, name, draft)).await
}

/// Add several contacts with consecutive identifiers in one append.
pub async fn add_many<B: SheetBackend>(
    store: &SheetStore<B>,
    vendor_id: &str,
    drafts: Vec<ContactDraft>,
) -> Result<Vec<VendorContact>> {
    let vendor_id = require("vendorId", vendor_id)?;
    for draft in &drafts {
        require("name", &draft.name)?;
    }
    store
        .create_many(drafts, |id, draft| {
            let name = draft.name.trim().to_string();
            build(id, vendor_id.clone(), name, draft)
        })
        .await
}

pub async fn update<B: SheetBackend>(
    store: &SheetStore<B>,
    id: &str,
    patch: &ContactPatch,
) -> Result<VendorContact> {
    let patch = ContactPatch {
        name: require_opt("name", &patch.name)?,
        designation: trimmed(&patch.designation),
        phone: trimmed(&patch.phone),
        email: trimmed(&patch.email),
        info: trimmed(&patch.info),
        active: patch.active,
    };
    store.update(id, &patch).await
}

pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<VendorContact>(id).await?;
    Ok(DeleteResult::new(
        VendorContact::ENTITY,
        vec![id.trim().to_string()],
        report,
    ))
}

fn build(id: String, vendor_id: String, name: String, draft: ContactDraft) -> VendorContact {
    VendorContact {
        id,
        vendor_id,
        name,
        designation: or_dash(draft.designation.as_deref()),
        phone: or_dash(draft.phone.as_deref()),
        email: or_dash(draft.email.as_deref()),
        info: draft.info.unwrap_or_default(),
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VendorSheetError;
    use crate::test_utils::sample_store;

    fn named(name: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn listing_hides_only_explicitly_inactive() {
        let store = sample_store();
        let acme = list_for_vendor(&store, "VND-0001").await.unwrap();
        assert_eq!(acme.len(), 1);
        assert_eq!(acme[0].name, "Asha");

        // C-0004 has a blank flag: listed, but decoded as inactive.
        let volt = list_for_vendor(&store, "VND-0002").await.unwrap();
        let names: Vec<&str> = volt.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Meera", "Sam"]);
        assert!(!volt[1].active);
    }

    #[tokio::test]
    async fn add_defaults_optional_fields() {
        let store = sample_store();
        let contact = add(&store, "VND-0002", named("Kiran")).await.unwrap();
        assert_eq!(contact.id, "C-0005");
        assert_eq!(contact.vendor_id, "VND-0002");
        assert_eq!(contact.designation, "-");
        assert_eq!(contact.phone, "-");
        assert_eq!(contact.email, "-");
        assert_eq!(contact.info, "");
    }

    #[tokio::test]
    async fn add_many_allocates_in_order() {
        let store = sample_store();
        let added = add_many(&store, "VND-0001", vec![named("A"), named("B")])
            .await
            .unwrap();
        let ids: Vec<&str> = added.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C-0005", "C-0006"]);
        assert_eq!(list_for_vendor(&store, "VND-0001").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn add_many_of_nothing_is_a_no_op() {
        let store = sample_store();
        assert!(add_many(&store, "VND-0001", vec![]).await.unwrap().is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[tokio::test]
    async fn add_requires_vendor() {
        let store = sample_store();
        let err = add(&store, " ", named("X")).await.unwrap_err();
        assert!(matches!(err, VendorSheetError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn deactivating_hides_from_listing() {
        let store = sample_store();
        let patch = ContactPatch {
            active: Some(false),
            ..Default::default()
        };
        update(&store, "C-0001", &patch).await.unwrap();
        assert!(list_for_vendor(&store, "VND-0001").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_list() {
        let store = sample_store();
        delete(&store, "C-0003").await.unwrap();
        let volt = list_for_vendor(&store, "VND-0002").await.unwrap();
        assert_eq!(volt.len(), 1);
        assert_eq!(volt[0].id, "C-0004");
    }

    #[tokio::test]
    async fn update_trims_patched_values() {
        let store = sample_store();
        let patch = ContactPatch {
            name: Some("  Asha K  ".into()),
            designation: Some(" Sales lead ".into()),
            ..Default::default()
        };
        update(&store, "C-0001", &patch).await.unwrap();
        let stored: VendorContact = store.get("C-0001").await.unwrap();
        assert_eq!(stored.name, "Asha K");
        assert_eq!(stored.designation, "Sales lead");
    }
}
