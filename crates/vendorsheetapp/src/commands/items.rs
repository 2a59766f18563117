use super::{require, require_opt, trimmed, DeleteResult};
use crate::codec::{now_timestamp, Record};
use crate::error::Result;
use crate::model::{Item, ItemDraft, ItemPatch};
use crate::store::{SheetBackend, SheetStore};

pub async fn list<B: SheetBackend>(store: &SheetStore<B>) -> Result<Vec<Item>> {
    store.list().await
}

pub async fn get<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<Item> {
    store.get(id).await
}

pub async fn create<B: SheetBackend>(store: &SheetStore<B>, draft: ItemDraft) -> Result<Item> {
    validate(&draft)?;
    let now = now_timestamp();
    store.create(|id| build(id, draft, &now)).await
}

/// Create every draft in one append, with consecutive identifiers. Nothing is
/// written if any draft is invalid.
pub async fn bulk_create<B: SheetBackend>(
    store: &SheetStore<B>,
    drafts: Vec<ItemDraft>,
) -> Result<Vec<Item>> {
    for draft in &drafts {
        validate(draft)?;
    }
    let now = now_timestamp();
    store
        .create_many(drafts, |id, draft| build(id, draft, &now))
        .await
}

pub async fn update<B: SheetBackend>(
    store: &SheetStore<B>,
    id: &str,
    patch: &ItemPatch,
) -> Result<Item> {
    let patch = ItemPatch {
        category_id: trimmed(&patch.category_id),
        sub_category_id: trimmed(&patch.sub_category_id),
        description: require_opt("description", &patch.description)?,
        uom_id: trimmed(&patch.uom_id),
        active: patch.active,
    };
    store.update(id, &patch).await
}

pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<Item>(id).await?;
    Ok(DeleteResult::new(Item::ENTITY, vec![id.trim().to_string()], report))
}

pub async fn bulk_delete<B: SheetBackend, S: AsRef<str>>(
    store: &SheetStore<B>,
    ids: &[S],
) -> Result<DeleteResult> {
    let report = store.delete_many::<Item, S>(ids).await?;
    let ids = ids.iter().map(|id| id.as_ref().trim().to_string()).collect();
    Ok(DeleteResult::new(Item::ENTITY, ids, report))
}

fn validate(draft: &ItemDraft) -> Result<()> {
    require("description", &draft.description)?;
    Ok(())
}

fn build(id: String, draft: ItemDraft, now: &str) -> Item {
    Item {
        id,
        category_id: draft.category_id.trim().to_string(),
        sub_category_id: draft.sub_category_id.trim().to_string(),
        description: draft.description.trim().to_string(),
        uom_id: draft.uom_id.trim().to_string(),
        created_at: now.to_string(),
        updated_at: now.to_string(),
        active: true,
    }
}
