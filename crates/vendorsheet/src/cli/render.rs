//! # Rendering Module
//!
//! Every handler produces an [`Output`]: the JSON value for `--json` and the
//! text for a terminal, built together so the two never drift apart.
//!
//! ## Table Layout
//!
//! Lists are plain aligned tables. Column widths come from the display width
//! of the widest cell (`unicode-width`, so vendor names in any script line
//! up). Cells are padded first and styled second, so escape codes never count
//! toward a width. Inactive records are dimmed rather than hidden.

use super::styles;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;
use vendorsheetapp::codec::Record;
use vendorsheetapp::commands::search::SearchHit;
use vendorsheetapp::commands::DeleteResult;
use vendorsheetapp::model::{
    Category, Item, PinnedSearch, SubCategory, Uom, Vendor, VendorContact, VendorItemMapping,
};

const GAP: &str = "  ";

/// What a command hands back to be printed.
#[derive(Debug)]
pub struct Output {
    pub data: Value,
    pub text: String,
}

impl Output {
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string_pretty(&self.data)?)
        } else {
            Ok(self.text.clone())
        }
    }
}

/// A record that can be shown as a table row.
pub trait Tabular: Record + Serialize {
    /// Plural noun for counts and empty lists.
    const PLURAL: &'static str;
    const COLUMNS: &'static [&'static str];

    /// One cell per entry in [`Self::COLUMNS`].
    fn cells(&self) -> Vec<String>;

    fn inactive(&self) -> bool {
        false
    }
}

impl Tabular for Category {
    const PLURAL: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "UPDATED", "ACTIVE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.updated_at.clone(),
            yes_no(self.active),
        ]
    }

    fn inactive(&self) -> bool {
        !self.active
    }
}

impl Tabular for SubCategory {
    const PLURAL: &'static str = "subcategories";
    const COLUMNS: &'static [&'static str] = &["ID", "CATEGORY", "NAME", "UPDATED", "ACTIVE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.category_id.clone(),
            self.name.clone(),
            self.updated_at.clone(),
            yes_no(self.active),
        ]
    }

    fn inactive(&self) -> bool {
        !self.active
    }
}

impl Tabular for Uom {
    const PLURAL: &'static str = "units of measure";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "DESCRIPTION", "ACTIVE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            yes_no(self.active),
        ]
    }

    fn inactive(&self) -> bool {
        !self.active
    }
}

impl Tabular for Item {
    const PLURAL: &'static str = "items";
    const COLUMNS: &'static [&'static str] =
        &["ID", "DESCRIPTION", "CATEGORY", "SUBCATEGORY", "UOM", "ACTIVE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.description.clone(),
            self.category_id.clone(),
            self.sub_category_id.clone(),
            self.uom_id.clone(),
            yes_no(self.active),
        ]
    }

    fn inactive(&self) -> bool {
        !self.active
    }
}

impl Tabular for Vendor {
    const PLURAL: &'static str = "vendors";
    const COLUMNS: &'static [&'static str] =
        &["ID", "NAME", "CITY", "STATE", "PHONE", "EMAIL", "GST", "ACTIVE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.city.clone(),
            self.state.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.gst.clone(),
            yes_no(self.active),
        ]
    }

    fn inactive(&self) -> bool {
        !self.active
    }
}

impl Tabular for VendorContact {
    const PLURAL: &'static str = "contacts";
    const COLUMNS: &'static [&'static str] =
        &["ID", "VENDOR", "NAME", "DESIGNATION", "PHONE", "EMAIL", "INFO"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.vendor_id.clone(),
            self.name.clone(),
            self.designation.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.info.clone(),
        ]
    }
}

impl Tabular for VendorItemMapping {
    const PLURAL: &'static str = "mappings";
    const COLUMNS: &'static [&'static str] =
        &["ID", "VENDOR", "ITEM", "PRICE", "UOM", "LEAD DAYS", "NOTES"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.vendor_id.clone(),
            self.item_id.clone(),
            self.price.clone(),
            self.uom.clone(),
            self.lead_time_days.clone(),
            self.notes.clone(),
        ]
    }
}

impl Tabular for PinnedSearch {
    const PLURAL: &'static str = "pins";
    const COLUMNS: &'static [&'static str] = &["ID", "ITEM", "DESCRIPTION", "SEARCH", "PINNED"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.item_id.clone(),
            self.item_description.clone(),
            self.search_term.clone(),
            self.created_at.clone(),
        ]
    }
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Aligned table. The first column is treated as the record id. The last
/// column is not padded, so lines carry no trailing spaces.
pub fn table(headers: &[&str], rows: &[(Vec<String>, bool)]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for (cells, _) in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }
    let last = headers.len().saturating_sub(1);
    let fit = |index: usize, text: &str| {
        if index == last {
            text.to_string()
        } else {
            pad(text, widths[index])
        }
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| styles::header().apply_to(fit(i, *h)).to_string())
        .collect();
    lines.push(header_line.join(GAP));

    for (cells, inactive) in rows {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let text = fit(i, cell.as_str());
                let style = if *inactive {
                    styles::muted()
                } else if i == 0 {
                    styles::id()
                } else {
                    console::Style::new()
                };
                style.apply_to(text).to_string()
            })
            .collect();
        lines.push(line.join(GAP));
    }
    lines.join("\n")
}

fn rows_of<T: Tabular>(records: &[T]) -> Vec<(Vec<String>, bool)> {
    records.iter().map(|r| (r.cells(), r.inactive())).collect()
}

pub fn list<T: Tabular>(records: &[T]) -> Result<Output> {
    let text = if records.is_empty() {
        styles::muted()
            .apply_to(format!("No {} found.", T::PLURAL))
            .to_string()
    } else {
        table(T::COLUMNS, &rows_of(records))
    };
    Ok(Output {
        data: serde_json::to_value(records)?,
        text,
    })
}

fn fields<T: Tabular>(record: &T) -> String {
    let width = T::COLUMNS.iter().map(|c| c.width()).max().unwrap_or(0);
    T::COLUMNS
        .iter()
        .zip(record.cells())
        .map(|(label, value)| {
            let value = if value.is_empty() {
                styles::muted().apply_to("-".to_string()).to_string()
            } else {
                value
            };
            format!("{}{}{}", styles::header().apply_to(pad(label, width)), GAP, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn record<T: Tabular>(record: &T) -> Result<Output> {
    Ok(Output {
        data: serde_json::to_value(record)?,
        text: fields(record),
    })
}

/// A record just created or updated: a confirmation line, then its fields.
pub fn written<T: Tabular>(verb: &str, record: &T) -> Result<Output> {
    let headline = styles::success()
        .apply_to(format!("{} {} {}", verb, T::ENTITY, record.id()))
        .to_string();
    Ok(Output {
        data: serde_json::to_value(record)?,
        text: format!("{}\n{}", headline, fields(record)),
    })
}

pub fn written_many<T: Tabular>(verb: &str, records: &[T]) -> Result<Output> {
    let headline = styles::success()
        .apply_to(format!("{} {} {}", verb, records.len(), T::PLURAL))
        .to_string();
    Ok(Output {
        data: serde_json::to_value(records)?,
        text: format!("{}\n{}", headline, table(T::COLUMNS, &rows_of(records))),
    })
}

pub fn deleted(result: &DeleteResult) -> Result<Output> {
    let rows = if result.rows == 1 { "row" } else { "rows" };
    let requests = if result.requests == 1 {
        "request"
    } else {
        "requests"
    };
    let text = format!(
        "{} {}",
        styles::success().apply_to(format!("Deleted {} {}", result.entity, result.ids.join(", "))),
        styles::muted().apply_to(format!(
            "({} {} blanked in {} {})",
            result.rows, rows, result.requests, requests
        )),
    );
    Ok(Output {
        data: serde_json::to_value(result)?,
        text,
    })
}

fn contact_line(contact: &VendorContact) -> String {
    [&contact.name, &contact.phone, &contact.email]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty() && *part != "-")
        .collect::<Vec<_>>()
        .join(" ")
}

/// Each hit as a titled block: the item, where it sits in the catalogue,
/// then one line per vendor offer.
pub fn search(hits: &[SearchHit]) -> Result<Output> {
    let data = serde_json::to_value(hits)?;
    if hits.is_empty() {
        return Ok(Output {
            data,
            text: styles::muted().apply_to("No matching items.").to_string(),
        });
    }

    let blocks: Vec<String> = hits
        .iter()
        .map(|hit| {
            let summary = &hit.item;
            let title = format!(
                "{}  {}",
                styles::id().apply_to(&summary.item.id),
                styles::title().apply_to(&summary.item.description)
            );
            let path = styles::muted()
                .apply_to(format!(
                    "{} / {} / {}",
                    summary.category_name, summary.sub_category_name, summary.uom_name
                ))
                .to_string();
            if hit.vendors.is_empty() {
                let none = styles::muted().apply_to("no active vendors").to_string();
                return format!("{}\n{}\n{}", title, path, none);
            }

            let rows: Vec<(Vec<String>, bool)> = hit
                .vendors
                .iter()
                .map(|offer| {
                    let contacts: Vec<String> =
                        offer.contacts.iter().map(contact_line).collect();
                    (
                        vec![
                            offer.vendor.id.clone(),
                            offer.vendor.name.clone(),
                            offer.mapping.price.clone(),
                            offer.mapping.lead_time_days.clone(),
                            contacts.join("; "),
                        ],
                        false,
                    )
                })
                .collect();
            let offers = table(&["VENDOR", "NAME", "PRICE", "LEAD DAYS", "CONTACTS"], &rows);
            format!("{}\n{}\n{}", title, path, offers)
        })
        .collect();

    Ok(Output {
        data,
        text: blocks.join("\n\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn plain(text: &str) -> String {
        strip_ansi_codes(text).to_string()
    }

    fn category(id: &str, name: &str, active: bool) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            created_at: "2024-01-01 09:00:00".into(),
            updated_at: "2024-01-01 09:00:00".into(),
            active,
        }
    }

    #[test]
    fn table_aligns_by_display_width() {
        let rows = vec![
            (vec!["A".to_string(), "résumé".to_string(), "x".to_string()], false),
            (vec!["BB".to_string(), "日本".to_string(), "y".to_string()], false),
        ];
        let text = plain(&table(&["ID", "NAME", "Z"], &rows));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID  NAME    Z");
        assert_eq!(lines[1], "A   résumé  x");
        assert_eq!(lines[2], "BB  日本    y");
    }

    #[test]
    fn list_renders_rows_and_json() {
        let records = vec![
            category("CAT-0001", "Fasteners", true),
            category("CAT-0002", "Electrical", false),
        ];
        let output = list(&records).unwrap();
        let text = plain(&output.text);
        assert!(text.starts_with("ID"));
        assert!(text.contains("CAT-0002  Electrical"));
        assert_eq!(output.data[1]["name"], "Electrical");
        assert_eq!(output.data[1]["active"], false);
    }

    #[test]
    fn empty_list_says_so() {
        let output = list::<Uom>(&[]).unwrap();
        assert_eq!(plain(&output.text), "No units of measure found.");
        assert_eq!(output.data, serde_json::json!([]));
    }

    #[test]
    fn written_shows_headline_and_fields() {
        let output = written("Created", &category("CAT-0003", "Tools", true)).unwrap();
        let text = plain(&output.text);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Created Category CAT-0003"));
        assert_eq!(lines.next(), Some("ID       CAT-0003"));
        assert!(text.contains("NAME     Tools"));
    }

    #[test]
    fn deleted_counts_rows_and_requests() {
        let result = DeleteResult {
            entity: "Item",
            ids: vec!["ITM-0001".into(), "ITM-0003".into()],
            rows: 2,
            requests: 1,
        };
        let output = deleted(&result).unwrap();
        assert_eq!(
            plain(&output.text),
            "Deleted Item ITM-0001, ITM-0003 (2 rows blanked in 1 request)"
        );
        assert_eq!(output.data["ids"][1], "ITM-0003");
    }

    #[test]
    fn render_picks_json_or_text() {
        let output = Output {
            data: serde_json::json!({"id": "X"}),
            text: "X".into(),
        };
        assert_eq!(output.render(false).unwrap(), "X");
        assert_eq!(output.render(true).unwrap(), "{\n  \"id\": \"X\"\n}");
    }

    #[test]
    fn contact_line_skips_placeholders() {
        let contact = VendorContact {
            id: "C-0001".into(),
            vendor_id: "VND-0001".into(),
            name: "Asha".into(),
            designation: "-".into(),
            phone: "98450".into(),
            email: "-".into(),
            info: "".into(),
            active: true,
        };
        assert_eq!(contact_line(&contact), "Asha 98450");
    }
}
