//! Seeded in-memory workbooks shared by unit and integration tests.

use crate::codec::Row;
use crate::store::mem_backend::MemBackend;
use crate::store::{ClearOptions, SheetStore};

pub const SEEDED_AT: &str = "2024-01-01 09:00:00";

/// Header row for every sheet the store knows about.
pub const HEADERS: &[(&str, &[&str])] = &[
    ("Categories", &["id", "name", "createdAt", "updatedAt", "active"]),
    (
        "SubCategories",
        &["id", "categoryId", "name", "createdAt", "updatedAt", "active"],
    ),
    ("UOMs", &["id", "name", "description", "active"]),
    (
        "Items",
        &[
            "id",
            "categoryId",
            "subCategoryId",
            "description",
            "uomId",
            "createdAt",
            "updatedAt",
            "active",
        ],
    ),
    (
        "Vendors",
        &[
            "id", "name", "address", "state", "city", "pinCode", "gst", "phone", "email",
            "createdAt", "updatedAt", "active",
        ],
    ),
    (
        "VendorContacts",
        &["id", "vendorId", "name", "designation", "phone", "email", "info", "active"],
    ),
    (
        "VendorItemsMapping",
        &["id", "vendorId", "itemId", "price", "uom", "leadTimeDays", "notes", "active"],
    ),
    (
        "PinnedItems",
        &["id", "itemId", "itemDescription", "searchTerm", "createdAt"],
    ),
];

pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Every sheet present with only its header.
pub fn empty_workbook() -> MemBackend {
    let backend = MemBackend::new();
    for (sheet, header) in HEADERS {
        backend.seed(sheet, vec![row(header)]);
    }
    backend
}

/// A small but complete workbook.
///
/// - Categories `CAT-0001` Fasteners and `CAT-0002` Electrical.
/// - Items `ITM-0001` hex bolt, `ITM-0002` hex nut, `ITM-0003` copper cable.
/// - Vendors `VND-0001` and `VND-0002` active, `VND-0003` inactive.
/// - Contacts: `C-0002` is inactive, `C-0004` has a blank flag.
/// - Mappings: `M-0003` points at the inactive vendor, `M-0004` is inactive,
///   `M-0005` points at a vendor that does not exist.
/// - Pins: one live, one blanked row, one without an item.
pub fn sample_workbook() -> MemBackend {
    let backend = empty_workbook();
    let t = SEEDED_AT;

    extend(
        &backend,
        "Categories",
        &[
            &["CAT-0001", "Fasteners", t, t, "true"],
            &["CAT-0002", "Electrical", t, t, "true"],
        ],
    );
    extend(
        &backend,
        "SubCategories",
        &[
            &["SUB-0001", "CAT-0001", "Bolts", t, t, "true"],
            &["SUB-0002", "CAT-0001", "Nuts", t, t, "true"],
            &["SUB-0003", "CAT-0002", "Cables", t, t, "true"],
        ],
    );
    extend(
        &backend,
        "UOMs",
        &[
            &["UOM-0001", "Piece", "Single unit", "true"],
            &["UOM-0002", "Metre", "", "true"],
        ],
    );
    extend(
        &backend,
        "Items",
        &[
            &["ITM-0001", "CAT-0001", "SUB-0001", "Hex bolt M8", "UOM-0001", t, t, "true"],
            &["ITM-0002", "CAT-0001", "SUB-0002", "Hex nut M8", "UOM-0001", t, t, "true"],
            &["ITM-0003", "CAT-0002", "SUB-0003", "Copper cable 2.5mm", "UOM-0002", t, t, "true"],
        ],
    );
    extend(
        &backend,
        "Vendors",
        &[
            &[
                "VND-0001", "Acme Fasteners", "12 Mill Rd", "MH", "Pune", "411001", "27AAAAA0000A1Z5",
                "020-5550101", "sales@acme.test", t, t, "true",
            ],
            &[
                "VND-0002", "Volt Traders", "-", "KA", "Bengaluru", "-", "-", "080-5550102", "-", t,
                t, "true",
            ],
            &[
                "VND-0003", "Old Supply Co", "-", "-", "-", "-", "-", "-", "-", t, t, "false",
            ],
        ],
    );
    extend(
        &backend,
        "VendorContacts",
        &[
            &["C-0001", "VND-0001", "Asha", "Sales", "98200 00001", "asha@acme.test", "", "true"],
            &["C-0002", "VND-0001", "Ravi", "Accounts", "-", "-", "", "false"],
            &["C-0003", "VND-0002", "Meera", "Owner", "-", "meera@volt.test", "", "true"],
            &["C-0004", "VND-0002", "Sam", "-", "-", "-", "", ""],
        ],
    );
    extend(
        &backend,
        "VendorItemsMapping",
        &[
            &["M-0001", "VND-0001", "ITM-0001", "12.50", "Piece", "7", "", "true"],
            &["M-0002", "VND-0002", "ITM-0003", "85", "Metre", "3", "", "true"],
            &["M-0003", "VND-0003", "ITM-0001", "11", "Piece", "10", "", "true"],
            &["M-0004", "VND-0002", "ITM-0001", "13", "Piece", "2", "", "false"],
            &["M-0005", "VND-0009", "ITM-0002", "5", "Piece", "1", "", "true"],
        ],
    );
    extend(
        &backend,
        "PinnedItems",
        &[
            &["PIN-0001", "ITM-0001", "Hex bolt M8", "bolt", t],
            &["", "", "", "", ""],
            &["PIN-0003", "", "", "orphan", t],
        ],
    );
    backend
}

pub fn store(backend: MemBackend) -> SheetStore<MemBackend> {
    SheetStore::new(backend, ClearOptions::default())
}

pub fn sample_store() -> SheetStore<MemBackend> {
    store(sample_workbook())
}

fn extend(backend: &MemBackend, sheet: &str, rows: &[&[&str]]) {
    let mut all = backend.rows(sheet);
    all.extend(rows.iter().map(|cells| row(cells)));
    backend.seed(sheet, all);
}
