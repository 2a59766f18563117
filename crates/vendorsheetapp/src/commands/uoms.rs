use super::{or_blank, require, require_opt, trimmed, DeleteResult};
use crate::codec::Record;
use crate::error::Result;
use crate::model::{Uom, UomPatch};
use crate::store::{SheetBackend, SheetStore};

pub async fn list<B: SheetBackend>(store: &SheetStore<B>) -> Result<Vec<Uom>> {
    store.list().await
}

pub async fn create<B: SheetBackend>(
    store: &SheetStore<B>,
    name: &str,
    description: Option<&str>,
) -> Result<Uom> {
    let name = require("name", name)?;
    let description = or_blank(description);
    store
        .create(|id| Uom {
            id,
            name,
            description,
            active: true,
        })
        .await
}

pub async fn update<B: SheetBackend>(
    store: &SheetStore<B>,
    id: &str,
    patch: &UomPatch,
) -> Result<Uom> {
    let patch = UomPatch {
        name: require_opt("name", &patch.name)?,
        description: trimmed(&patch.description),
        active: patch.active,
    };
    store.update(id, &patch).await
}

pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<Uom>(id).await?;
    Ok(DeleteResult::new(Uom::ENTITY, vec![id.trim().to_string()], report))
}
