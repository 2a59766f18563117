use super::{require, require_opt, DeleteResult};
use crate::codec::{now_timestamp, Record};
use crate::error::Result;
use crate::model::{Category, CategoryPatch};
use crate::store::{SheetBackend, SheetStore};

pub async fn list<B: SheetBackend>(store: &SheetStore<B>) -> Result<Vec<Category>> {
    store.list().await
}

pub async fn get<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<Category> {
    store.get(id).await
}

pub async fn create<B: SheetBackend>(store: &SheetStore<B>, name: &str) -> Result<Category> {
    let name = require("name", name)?;
    let now = now_timestamp();
    store
        .create(|id| Category {
            id,
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
    patch: &CategoryPatch,
) -> Result<Category> {
    let patch = CategoryPatch {
        name: require_opt("name", &patch.name)?,
        active: patch.active,
    };
    store.update(id, &patch).await
}

/// Blanks the category row. Subcategories and items that reference it are
/// left as they are.
pub async fn delete<B: SheetBackend>(store: &SheetStore<B>, id: &str) -> Result<DeleteResult> {
    let report = store.delete::<Category>(id).await?;
    Ok(DeleteResult::new(Category::ENTITY, vec![id.trim().to_string()], report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VendorSheetError;
    use crate::test_utils::{empty_workbook, sample_store, store};

    #[tokio::test]
    async fn create_starts_at_one_on_empty_sheet() {
        let store = store(empty_workbook());
        let created = create(&store, "Fasteners").await.unwrap();
        assert_eq!(created.id, "CAT-0001");
        assert!(created.active);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(list(&store).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn create_requires_a_name() {
        let store = sample_store();
        let err = create(&store, "  ").await.unwrap_err();
        assert!(matches!(err, VendorSheetError::InvalidInput(_)));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[tokio::test]
    async fn update_renames_and_deactivates() {
        let store = sample_store();
        let patch = CategoryPatch {
            name: Some("Hardware".into()),
            active: Some(false),
        };
        let updated = update(&store, "CAT-0001", &patch).await.unwrap();
        assert_eq!(updated.name, "Hardware");
        assert!(!updated.active);
        assert_eq!(updated.created_at, crate::test_utils::SEEDED_AT);

        let other = get(&store, "CAT-0002").await.unwrap();
        assert_eq!(other.name, "Electrical");
        assert_eq!(other.updated_at, crate::test_utils::SEEDED_AT);
    }

    #[tokio::test]
    async fn delete_blanks_only_the_category() {
        let store = sample_store();
        let result = delete(&store, "CAT-0001").await.unwrap();
        assert_eq!(result.ids, vec!["CAT-0001"]);
        assert_eq!(result.rows, 1);

        let remaining = list(&store).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "CAT-0002");
        // Row 2 is blank, row 3 still holds CAT-0002.
        assert_eq!(store.backend().rows("Categories")[2][0], "CAT-0002");
        // No cascade.
        let subs = crate::commands::subcategories::list_for_category(&store, "CAT-0001")
            .await
            .unwrap();
        assert_eq!(subs.len(), 2);
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let store = sample_store();
        let err = delete(&store, "CAT-0404").await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found: CAT-0404");
    }

    #[tokio::test]
    async fn update_trims_the_new_name() {
        let store = sample_store();
        let patch = CategoryPatch {
            name: Some("  Hardware  ".into()),
            ..Default::default()
        };
        assert_eq!(update(&store, "CAT-0001", &patch).await.unwrap().name, "Hardware");
        assert_eq!(get(&store, "CAT-0001").await.unwrap().name, "Hardware");
    }

    #[tokio::test]
    async fn update_rejects_a_blank_name() {
        let store = sample_store();
        let patch = CategoryPatch {
            name: Some("   ".into()),
            ..Default::default()
        };
        let err = update(&store, "CAT-0001", &patch).await.unwrap_err();
        assert!(matches!(err, VendorSheetError::InvalidInput(_)));
        assert_eq!(store.backend().write_count(), 0);
    }
}
