//! Plain-text rendering of command results.

use shared::{ApplicationInfo, FiberyEntity, FiberySchema, Page, Product, Result};

/// `about` output, one `Label: value` line per field.
pub fn about(info: &ApplicationInfo) -> String {
    format!(
        "Name: {}\nVersion: {}\nDescription: {}\nAuthor-email: {}\nProject URL: {}\n",
        info.name, info.version, info.description, info.author_email, info.project_url
    )
}

/// Left-aligned columns padded to the widest cell, with a dashed rule under the header.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = line(headers.iter().copied(), &widths);
    out.push_str(&line(rule.iter().map(String::as_str), &widths));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let mut line = padded.join("  ").trim_end().to_string();
    line.push('\n');
    line
}

fn product_rows(products: &[Product]) -> Vec<Vec<String>> {
    products
        .iter()
        .map(|p| vec![p.name.clone(), p.product_group_name.clone()])
        .collect()
}

/// All products under a `Products` heading.
pub fn products(products: &[Product]) -> String {
    let mut out = String::from("Products\n\n");
    out.push_str(&table(&["Name", "Product Group"], &product_rows(products)));
    out
}

/// One page of products followed by a position line.
pub fn product_page(page: &Page<Product>) -> String {
    let mut out = products(&page.items);
    out.push_str(&format!(
        "\nPage {} of {} ({} products)\n",
        page.page,
        page.total_pages().max(1),
        page.total
    ));
    out
}

pub fn databases(names: &[String]) -> String {
    let mut out = String::from("Available Fibery Databases:\n");
    out.push_str("-------------------------\n");
    for name in names {
        out.push_str(&format!("- {}\n", name));
    }
    out
}

/// Schema table followed by the sample entities, or the error that prevented loading them.
pub fn database(schema: &FiberySchema, entities: &Result<Vec<FiberyEntity>>) -> String {
    let rows: Vec<Vec<String>> = schema
        .fields
        .iter()
        .map(|f| vec![f.name.clone(), f.type_name.clone()])
        .collect();

    let mut out = format!("Schema: {}\n\n", schema.name);
    out.push_str(&table(&["Field", "Type"], &rows));

    out.push_str("\nExample Entities\n\n");
    let entities = match entities {
        Ok(entities) => entities,
        Err(e) => {
            out.push_str(&format!("Error: {}\n", e));
            return out;
        }
    };
    if entities.is_empty() {
        out.push_str("(none)\n");
    }
    for entity in entities {
        out.push_str(&format!("- {} ({})\n", entity.name, entity.id));
        if let Some(description) = entity.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("  {}\n", description));
        }
    }
    out
}
