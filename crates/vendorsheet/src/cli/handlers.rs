//! One handler per subcommand.
//!
//! Handlers turn parsed arguments into API calls and API results into an
//! [`Output`]. They are generic over the backend so tests can drive them with
//! the in-memory workbook.

use super::render::{self, Output};
use super::setup::{
    CategoryAction, Commands, ContactAction, ContactFields, ItemAction, MappingAction,
    MappingFields, PinAction, SubCategoryAction, UomAction, VendorAction, VendorFields,
};
use anyhow::{Context, Result};
use std::path::Path;
use vendorsheetapp::api::VendorSheetApi;
use vendorsheetapp::commands::search::SearchQuery;
use vendorsheetapp::model::{
    CategoryPatch, ContactDraft, ContactPatch, ItemDraft, ItemPatch, MappingDraft, MappingPatch,
    PinDraft, SubCategoryPatch, UomPatch, VendorDraft, VendorPatch,
};
use vendorsheetapp::store::SheetBackend;

pub async fn handle<B: SheetBackend>(api: &VendorSheetApi<B>, command: Commands) -> Result<Output> {
    match command {
        Commands::Category { action } => category(api, action).await,
        Commands::Subcategory { action } => sub_category(api, action).await,
        Commands::Uom { action } => uom(api, action).await,
        Commands::Item { action } => item(api, action).await,
        Commands::Vendor { action } => vendor(api, action).await,
        Commands::Contact { action } => contact(api, action).await,
        Commands::Mapping { action } => mapping(api, action).await,
        Commands::Pin { action } => pin(api, action).await,
        Commands::Search {
            keyword,
            category,
            sub_category,
        } => {
            let query = SearchQuery {
                keyword: Some(keyword.join(" ")),
                category_id: category,
                sub_category_id: sub_category,
            };
            render::search(&api.search(&query).await?)
        }
    }
}

async fn category<B: SheetBackend>(
    api: &VendorSheetApi<B>,
    action: CategoryAction,
) -> Result<Output> {
    match action {
        CategoryAction::List => render::list(&api.list_categories().await?),
        CategoryAction::Get { id } => render::record(&api.get_category(&id).await?),
        CategoryAction::Create { name } => {
            render::written("Created", &api.create_category(&name.join(" ")).await?)
        }
        CategoryAction::Update { id, name, active } => {
            let patch = CategoryPatch { name, active };
            render::written("Updated", &api.update_category(&id, &patch).await?)
        }
        CategoryAction::Delete { id } => render::deleted(&api.delete_category(&id).await?),
    }
}

async fn sub_category<B: SheetBackend>(
    api: &VendorSheetApi<B>,
    action: SubCategoryAction,
) -> Result<Output> {
    match action {
        SubCategoryAction::List { category: None } => {
            render::list(&api.list_sub_categories().await?)
        }
        SubCategoryAction::List {
            category: Some(category_id),
        } => render::list(&api.list_sub_categories_for(&category_id).await?),
        SubCategoryAction::Create { category_id, name } => render::written(
            "Created",
            &api.create_sub_category(&category_id, &name.join(" ")).await?,
        ),
        SubCategoryAction::Update {
            id,
            category,
            name,
            active,
        } => {
            let patch = SubCategoryPatch {
                category_id: category,
                name,
                active,
            };
            render::written("Updated", &api.update_sub_category(&id, &patch).await?)
        }
        SubCategoryAction::Delete { id } => {
            render::deleted(&api.delete_sub_category(&id).await?)
        }
    }
}

async fn uom<B: SheetBackend>(api: &VendorSheetApi<B>, action: UomAction) -> Result<Output> {
    match action {
        UomAction::List => render::list(&api.list_uoms().await?),
        UomAction::Create { name, description } => render::written(
            "Created",
            &api.create_uom(&name, description.as_deref()).await?,
        ),
        UomAction::Update {
            id,
            name,
            description,
            active,
        } => {
            let patch = UomPatch {
                name,
                description,
                active,
            };
            render::written("Updated", &api.update_uom(&id, &patch).await?)
        }
        UomAction::Delete { id } => render::deleted(&api.delete_uom(&id).await?),
    }
}

fn read_item_drafts(file: &Path) -> Result<Vec<ItemDraft>> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of items", file.display()))
}

async fn item<B: SheetBackend>(api: &VendorSheetApi<B>, action: ItemAction) -> Result<Output> {
    match action {
        ItemAction::List => render::list(&api.list_items().await?),
        ItemAction::Get { id } => render::record(&api.get_item(&id).await?),
        ItemAction::Create {
            category,
            sub_category,
            uom,
            description,
        } => {
            let draft = ItemDraft {
                category_id: category,
                sub_category_id: sub_category,
                description: description.join(" "),
                uom_id: uom,
            };
            render::written("Created", &api.create_item(draft).await?)
        }
        ItemAction::Import { file } => {
            let drafts = read_item_drafts(&file)?;
            render::written_many("Created", &api.bulk_create_items(drafts).await?)
        }
        ItemAction::Update {
            id,
            category,
            sub_category,
            uom,
            description,
            active,
        } => {
            let patch = ItemPatch {
                category_id: category,
                sub_category_id: sub_category,
                description,
                uom_id: uom,
                active,
            };
            render::written("Updated", &api.update_item(&id, &patch).await?)
        }
        ItemAction::Delete { ids } => {
            let result = match ids.as_slice() {
                [id] => api.delete_item(id).await?,
                _ => api.bulk_delete_items(ids.as_slice()).await?,
            };
            render::deleted(&result)
        }
    }
}

fn vendor_draft(name: String, fields: VendorFields) -> VendorDraft {
    VendorDraft {
        name,
        address: fields.address,
        state: fields.state,
        city: fields.city,
        pin_code: fields.pin_code,
        gst: fields.gst,
        phone: fields.phone,
        email: fields.email,
    }
}

async fn vendor<B: SheetBackend>(api: &VendorSheetApi<B>, action: VendorAction) -> Result<Output> {
    match action {
        VendorAction::List => render::list(&api.list_vendors().await?),
        VendorAction::Get { id } => render::record(&api.get_vendor(&id).await?),
        VendorAction::Create { name, fields } => {
            let draft = vendor_draft(name.join(" "), fields);
            render::written("Created", &api.create_vendor(draft).await?)
        }
        VendorAction::Update {
            id,
            name,
            fields,
            active,
        } => {
            let patch = VendorPatch {
                name,
                address: fields.address,
                state: fields.state,
                city: fields.city,
                pin_code: fields.pin_code,
                gst: fields.gst,
                phone: fields.phone,
                email: fields.email,
                active,
            };
            render::written("Updated", &api.update_vendor(&id, &patch).await?)
        }
        VendorAction::Delete { id } => render::deleted(&api.delete_vendor(&id).await?),
    }
}

fn contact_draft(name: String, fields: ContactFields) -> ContactDraft {
    ContactDraft {
        name,
        designation: fields.designation,
        phone: fields.phone,
        email: fields.email,
        info: fields.info,
    }
}

async fn contact<B: SheetBackend>(
    api: &VendorSheetApi<B>,
    action: ContactAction,
) -> Result<Output> {
    match action {
        ContactAction::List { vendor_id } => render::list(&api.list_contacts(&vendor_id).await?),
        ContactAction::Add {
            vendor_id,
            name,
            fields,
        } => render::written(
            "Added",
            &api.add_contact(&vendor_id, contact_draft(name, fields)).await?,
        ),
        ContactAction::Update {
            id,
            name,
            fields,
            active,
        } => {
            let patch = ContactPatch {
                name,
                designation: fields.designation,
                phone: fields.phone,
                email: fields.email,
                info: fields.info,
                active,
            };
            render::written("Updated", &api.update_contact(&id, &patch).await?)
        }
        ContactAction::Delete { id } => render::deleted(&api.delete_contact(&id).await?),
    }
}

fn mapping_draft(item_id: String, fields: MappingFields) -> MappingDraft {
    MappingDraft {
        item_id,
        price: fields.price,
        uom: fields.uom,
        lead_time_days: fields.lead_time_days,
        notes: fields.notes,
    }
}

async fn mapping<B: SheetBackend>(
    api: &VendorSheetApi<B>,
    action: MappingAction,
) -> Result<Output> {
    match action {
        MappingAction::List { vendor_id } => render::list(&api.list_mappings(&vendor_id).await?),
        MappingAction::Add {
            vendor_id,
            item_id,
            fields,
        } => render::written(
            "Added",
            &api.add_mapping(&vendor_id, mapping_draft(item_id, fields)).await?,
        ),
        MappingAction::Update {
            id,
            item,
            fields,
            active,
        } => {
            let patch = MappingPatch {
                item_id: item,
                price: fields.price,
                uom: fields.uom,
                lead_time_days: fields.lead_time_days,
                notes: fields.notes,
                active,
            };
            render::written("Updated", &api.update_mapping(&id, &patch).await?)
        }
        MappingAction::Delete { id } => render::deleted(&api.delete_mapping(&id).await?),
    }
}

async fn pin<B: SheetBackend>(api: &VendorSheetApi<B>, action: PinAction) -> Result<Output> {
    match action {
        PinAction::List => render::list(&api.list_pins().await?),
        PinAction::Add {
            item_id,
            description,
            term,
        } => {
            let draft = PinDraft {
                item_id,
                item_description: description,
                search_term: term,
            };
            render::written("Pinned", &api.pin(draft).await?)
        }
        PinAction::Remove { id } => render::deleted(&api.unpin(&id).await?),
    }
}
