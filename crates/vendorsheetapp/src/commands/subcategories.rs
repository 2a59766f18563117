use super::{require, require_opt, DeleteResult};
use crate::codec::{now_timestamp, Record};
use crate::error::Result;
use crate::model::{SubCategory, SubCategoryPatch};
use crate::store::{SheetBackend, SheetStore};

pub async fn list<B: SheetBackend>(store: &SheetStore<B>) -> Result<Vec<SubCategory>> {
    store.list().await
}

pub async fn list_for_category<B: SheetBackend>(
    store: &SheetStore<B>,
    category_id: &str,
) -> Result<Vec<SubCategory>> {
    let category_id = category_id.trim();
    let all: Vec<SubCategory> = store.list().await?;
    Ok(all
        .into_iter()
        .filter(|sub| sub.category_id == category_id)
        .collect())
}

pub async fn create<B: SheetBackend>(
    store: &SheetStore<B>,
    category_id: &str,
    name: &str,
) -> Result<SubCategory> {
    let category_id = require("categoryId", category_id)?;
    let name = require("name", name)?;
    let now = now_timestamp();
    store
        .create(|id| SubCategory {
            id,
            category_id,
            name,
            created_at: now.clone(),
            updated_at: now,
            active: true,
        })
        .await
}

pub async fn update<B: SheetBackend>(
    store: &SheetStore<B>,
    id: &str,
    patch: &SubCategoryPatch,
) -> Result<SubCategory> {
    let patch = SubCategoryPatch {
        category_id: require_opt("categoryId", &patch.category_id)?,
        name: require_opt("name", &patch.name)?,
        active: patch.active,
    };
    store.update(id, &patch).await
}

pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<SubCategory>(id).await?;
    Ok(DeleteResult::new(
        SubCategory::ENTITY,
        vec![id.trim().to_string()],
        report,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_store;

    #[tokio::test]
    async fn lists_by_category() {
        let store = sample_store();
        let subs = list_for_category(&store, "CAT-0001").await.unwrap();
        let names: Vec<&str> = subs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bolts", "Nuts"]);
        assert!(list_for_category(&store, "CAT-0404").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_continues_numbering() {
        let store = sample_store();
        let sub = create(&store, "CAT-0002", "Switches").await.unwrap();
        assert_eq!(sub.id, "SUB-0004");
        assert_eq!(sub.category_id, "CAT-0002");
        assert_eq!(list(&store).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn update_can_move_to_another_category() {
        let store = sample_store();
        let patch = SubCategoryPatch {
            category_id: Some("CAT-0002".into()),
            ..Default::default()
        };
        let moved = update(&store, "SUB-0002", &patch).await.unwrap();
        assert_eq!(moved.category_id, "CAT-0002");
        assert_eq!(moved.name, "Nuts");
        assert_eq!(list_for_category(&store, "CAT-0002").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_blanks_in_place() {
        let store = sample_store();
        delete(&store, "SUB-0001").await.unwrap();
        let rows = store.backend().rows("SubCategories");
        assert_eq!(rows.len(), 4);
        assert!(rows[1].iter().all(String::is_empty));
        assert_eq!(rows[2][0], "SUB-0002");
    }

    #[tokio::test]
    async fn update_trims_patched_values() {
        let store = sample_store();
        let patch = SubCategoryPatch {
            category_id: Some(" CAT-0002 ".into()),
            name: Some("  Washers ".into()),
            ..Default::default()
        };
        update(&store, "SUB-0002", &patch).await.unwrap();
        let stored: SubCategory = store.get("SUB-0002").await.unwrap();
        assert_eq!(stored.category_id, "CAT-0002");
        assert_eq!(stored.name, "Washers");
    }
}
