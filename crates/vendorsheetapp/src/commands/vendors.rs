use super::{or_dash, require, require_opt, trimmed, DeleteResult};
use crate::codec::{now_timestamp, Record};
use crate::error::Result;
use crate::model::{Vendor, VendorDraft, VendorPatch};
use crate::store::{SheetBackend, SheetStore};

pub async fn list<B: SheetBackend>(store: &SheetStore<B>) -> Result<Vec<Vendor>> {
    store.list().await
}

pub async fn get<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<Vendor> {
    store.get(id).await
}

/// Optional fields left blank are stored as `-` so the sheet never shows an
/// empty cell that looks like a deleted row.
pub async fn create<B: SheetBackend>(store: &SheetStore<B>, draft: VendorDraft) -> Result<Vendor> {
    let name = require("name", &draft.name)?;
    let now = now_timestamp();
    store
        .create(|id| Vendor {
            id,
            name,
            address: or_dash(draft.address.as_deref()),
            state: or_dash(draft.state.as_deref()),
            city: or_dash(draft.city.as_deref()),
            pin_code: or_dash(draft.pin_code.as_deref()),
            gst: or_dash(draft.gst.as_deref()),
            phone: or_dash(draft.phone.as_deref()),
            email: or_dash(draft.email.as_deref()),
            created_at: now.clone(),
            updated_at: now,
            active: true,
        })
        .await
}

pub async fn update<B: SheetBackend>(
    store: &SheetStore<B>,
    id: &str,
    patch: &VendorPatch,
) -> Result<Vendor> {
    let patch = VendorPatch {
        name: require_opt("name", &patch.name)?,
        address: trimmed(&patch.address),
        state: trimmed(&patch.state),
        city: trimmed(&patch.city),
        pin_code: trimmed(&patch.pin_code),
        gst: trimmed(&patch.gst),
        phone: trimmed(&patch.phone),
        email: trimmed(&patch.email),
        active: patch.active,
    };
    store.update(id, &patch).await
}

/// Blanks the vendor row only. Contacts and mappings stay; search drops offers
/// whose vendor no longer exists.
pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<Vendor>(id).await?;
    Ok(DeleteResult::new(Vendor::ENTITY, vec![id.trim().to_string()], report))
}
