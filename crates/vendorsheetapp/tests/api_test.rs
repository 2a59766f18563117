use vendorsheetapp::api::VendorSheetApi;
use vendorsheetapp::commands::search::SearchQuery;
use vendorsheetapp::error::VendorSheetError;
use vendorsheetapp::model::{
    CategoryPatch, ContactDraft, ItemDraft, MappingDraft, PinDraft, VendorDraft,
};
use vendorsheetapp::store::mem_backend::MemBackend;
use vendorsheetapp::store::ClearOptions;
use vendorsheetapp::test_utils::{empty_workbook, sample_workbook};

fn api(backend: MemBackend) -> VendorSheetApi<MemBackend> {
    VendorSheetApi::with_backend(backend, ClearOptions::default())
}

#[tokio::test]
async fn test_build_catalog_from_scratch() {
    let api = api(empty_workbook());

    let fasteners = api.create_category("Fasteners").await.unwrap();
    let bolts = api.create_sub_category(&fasteners.id, "Bolts").await.unwrap();
    let piece = api.create_uom("Piece", Some("Single unit")).await.unwrap();
    assert_eq!(
        (fasteners.id.as_str(), bolts.id.as_str(), piece.id.as_str()),
        ("CAT-0001", "SUB-0001", "UOM-0001")
    );

    let items = api
        .bulk_create_items(vec![
            ItemDraft {
                category_id: fasteners.id.clone(),
                sub_category_id: bolts.id.clone(),
                description: "Hex bolt M8".into(),
                uom_id: piece.id.clone(),
            },
            ItemDraft {
                category_id: fasteners.id.clone(),
                sub_category_id: bolts.id.clone(),
                description: "Hex bolt M10".into(),
                uom_id: piece.id.clone(),
            },
        ])
        .await
        .unwrap();
    assert_eq!(items[1].id, "ITM-0002");

    let vendor = api
        .create_vendor(VendorDraft {
            name: "Acme".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    api.add_contact(
        &vendor.id,
        ContactDraft {
            name: "Asha".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    api.add_mappings(
        &vendor.id,
        vec![
            MappingDraft {
                item_id: items[0].id.clone(),
                price: Some("12".into()),
                ..Default::default()
            },
            MappingDraft {
                item_id: items[1].id.clone(),
                price: Some("15".into()),
                ..Default::default()
            },
        ],
    )
    .await
    .unwrap();

    let hits = api.search(&SearchQuery::keyword("m10")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item.sub_category_name, "Bolts");
    assert_eq!(hits[0].vendors[0].vendor.name, "Acme");
    assert_eq!(hits[0].vendors[0].mapping.price, "15");
    assert_eq!(hits[0].vendors[0].contacts[0].name, "Asha");
}

#[tokio::test]
async fn test_delete_keeps_other_rows_addressable() {
    let backend = sample_workbook();
    let api = api(backend);

    api.delete_item("ITM-0002").await.unwrap();
    let rows = api.store().backend().rows("Items");
    assert_eq!(rows.len(), 4);
    assert!(rows[2].iter().all(String::is_empty));

    // Updating a later row still targets it, and the blank row stays blank.
    let patch = vendorsheetapp::model::ItemPatch {
        description: Some("Copper cable 4mm".into()),
        ..Default::default()
    };
    api.update_item("ITM-0003", &patch).await.unwrap();
    let rows = api.store().backend().rows("Items");
    assert!(rows[2].iter().all(String::is_empty));
    assert_eq!(rows[3][3], "Copper cable 4mm");
}

#[tokio::test]
async fn test_not_found_and_upstream_are_distinct() {
    let api = api(sample_workbook());

    let err = api.get_vendor("VND-0404").await.unwrap_err();
    assert!(matches!(err, VendorSheetError::NotFound { entity: "Vendor", .. }));
    assert!(!err.is_upstream());

    api.store().backend().set_simulate_error(true);
    let err = api.get_vendor("VND-0001").await.unwrap_err();
    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_update_category_through_api() {
    let api = api(sample_workbook());
    let patch = CategoryPatch {
        active: Some(false),
        ..Default::default()
    };
    let updated = api.update_category("CAT-0002", &patch).await.unwrap();
    assert!(!updated.active);
    assert_eq!(api.get_category("CAT-0002").await.unwrap(), updated);
}

#[tokio::test]
async fn test_pin_round_trip() {
    let api = api(sample_workbook());
    let pin = api
        .pin(PinDraft {
            item_id: "ITM-0002".into(),
            item_description: Some("Hex nut M8".into()),
            search_term: Some("nut".into()),
        })
        .await
        .unwrap();
    assert_eq!(api.list_pins().await.unwrap().len(), 2);

    let result = api.unpin(&pin.id).await.unwrap();
    assert_eq!(result.entity, "Pin");
    assert_eq!(api.list_pins().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_vendor_listings() {
    let api = api(sample_workbook());
    assert_eq!(api.list_vendors().await.unwrap().len(), 3);
    assert_eq!(api.list_contacts("VND-0002").await.unwrap().len(), 2);
    assert_eq!(api.list_mappings("VND-0001").await.unwrap().len(), 1);
    assert_eq!(api.list_sub_categories().await.unwrap().len(), 3);
    assert_eq!(api.list_sub_categories_for("CAT-0002").await.unwrap().len(), 1);
    assert_eq!(api.list_uoms().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_bulk_delete_items() {
    let api = api(sample_workbook());
    let result = api
        .bulk_delete_items(&["ITM-0001", "ITM-0003"])
        .await
        .unwrap();
    assert_eq!(result.rows, 2);
    assert_eq!(result.requests, 1);
    let remaining = api.list_items().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "ITM-0002");
}
