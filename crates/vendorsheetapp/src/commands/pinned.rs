use super::{or_blank, require, DeleteResult};
use crate::codec::{now_timestamp, Record};
use crate::error::Result;
use crate::model::{PinDraft, PinnedSearch};
use crate::store::{SheetBackend, SheetStore};

/// Pins that still point at an item. Rows with an identifier but no item are
/// left over from hand edits and are not shown.
pub async fn list<B: SheetBackend>(store: &SheetStore<B>) -> Result<Vec<PinnedSearch>> {
    let all: Vec<PinnedSearch> = store.list().await?;
    Ok(all
        .into_iter()
        .filter(|pin| !pin.item_id.trim().is_empty())
        .collect())
}

pub async fn create<B: SheetBackend>(store: &SheetStore<B>, draft: PinDraft) -> Result<PinnedSearch> {
    let item_id = require("itemId", &draft.item_id)?;
    let created_at = now_timestamp();
    store
        .create(|id| PinnedSearch {
            id,
            item_id,
            item_description: or_blank(draft.item_description.as_deref()),
            search_term: or_blank(draft.search_term.as_deref()),
            created_at,
        })
        .await
}

pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<PinnedSearch>(id).await?;
    Ok(DeleteResult::new(
        PinnedSearch::ENTITY,
        vec![id.trim().to_string()],
        report,
    ))
}
