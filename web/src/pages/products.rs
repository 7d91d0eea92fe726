//! Product listing and detail pages.

use shared::{Error, Page, PageRequest, Product, ProductColumn, ProductRepository, Result};
use tracing::error;

use crate::components::{card, frame, html_escape, link, message, model_card, table};
use crate::pages::{error_text, Rendered};

pub const ROWS_PER_PAGE_OPTIONS: [i64; 3] = [10, 25, 50];

/// Columns shown in the listing as `(column, label)`.
const COLUMNS: [(ProductColumn, &str); 2] = [
    (ProductColumn::Name, "Name"),
    (ProductColumn::ProductGroupName, "Product Group"),
];

/// Listing state carried in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsQuery {
    pub page: i64,
    pub rows_per_page: i64,
    pub sort_by: Option<ProductColumn>,
    pub descending: bool,
    pub filter: Option<String>,
}

impl Default for ProductsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
            sort_by: None,
            descending: false,
            filter: None,
        }
    }
}

impl ProductsQuery {
    /// Parse `page`, `rowsPerPage`, `sortBy`, `descending` and `filter`.
    pub fn from_params(param: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let page = match param("page") {
            Some(value) => parse_number("page", &value)?,
            None => defaults.page,
        };
        let rows_per_page = match param("rowsPerPage") {
            Some(value) => parse_number("rowsPerPage", &value)?,
            None => defaults.rows_per_page,
        };
        let sort_by = param("sortBy")
            .filter(|value| !value.is_empty())
            .map(|value| value.parse::<ProductColumn>())
            .transpose()?;
        let descending = param("descending")
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);
        let filter = param("filter")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(Self {
            page,
            rows_per_page,
            sort_by,
            descending,
            filter,
        })
    }

    pub fn to_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            items_per_page: self.rows_per_page,
            sort_by: self.sort_by.map(|column| column.as_str().to_string()),
            descending: self.descending,
            filter_text: self.filter.clone(),
        }
    }

    /// Listing URL for this state.
    pub fn href(&self) -> String {
        let mut href = format!(
            "/products?page={}&rowsPerPage={}",
            self.page, self.rows_per_page
        );
        if let Some(column) = self.sort_by {
            href.push_str(&format!("&sortBy={}", column));
            if self.descending {
                href.push_str("&descending=true");
            }
        }
        if let Some(filter) = &self.filter {
            href.push_str(&format!("&filter={}", urlencoding::encode(filter)));
        }
        href
    }

    fn with_page(&self, page: i64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    fn with_rows_per_page(&self, rows_per_page: i64) -> Self {
        Self {
            page: 1,
            rows_per_page,
            ..self.clone()
        }
    }

    /// Sort on `column`; a second click on the same column flips the direction.
    fn sorted_by(&self, column: ProductColumn) -> Self {
        let descending = self.sort_by == Some(column) && !self.descending;
        Self {
            page: 1,
            sort_by: Some(column),
            descending,
            ..self.clone()
        }
    }
}

fn parse_number(name: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Validation(format!("Invalid {} parameter: {}", name, value)))
}

/// Render the paginated product table.
pub async fn list(
    repository: &ProductRepository,
    param: impl Fn(&str) -> Option<String>,
) -> Rendered {
    let result = match ProductsQuery::from_params(param) {
        Ok(query) => repository
            .get_paginated(&query.to_request())
            .await
            .map(|page| (query, page)),
        Err(e) => Err(e),
    };

    match result {
        Ok((query, page)) => Rendered::ok(frame("Products", &listing(&query, &page))),
        Err(e) => {
            if !matches!(e, Error::Validation(_)) {
                error!(error = %e, "Failed to load products");
            }
            Rendered::with_status(e.status_code(), frame("Products", &message(&error_text(&e))))
        }
    }
}

fn listing(query: &ProductsQuery, page: &Page<Product>) -> String {
    let mut body = filter_form(query);

    let headers: Vec<String> = COLUMNS
        .iter()
        .map(|(column, label)| {
            let arrow = match (query.sort_by == Some(*column), query.descending) {
                (true, false) => " &#9650;",
                (true, true) => " &#9660;",
                (false, _) => "",
            };
            format!(
                "<a href=\"{}\">{}</a>{}",
                html_escape(&query.sorted_by(*column).href()),
                label,
                arrow
            )
        })
        .collect();

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|product| {
            vec![
                link(&product.name, &format!("/products/{}", product.id), false),
                html_escape(&product.product_group_name),
            ]
        })
        .collect();

    body.push_str(&table(&headers, &rows));
    body.push_str(&pagination(query, page));
    body
}

fn filter_form(query: &ProductsQuery) -> String {
    let mut html = String::from("<form class=\"filter\" method=\"get\" action=\"/products\">\n");
    html.push_str(&format!(
        "<input type=\"text\" name=\"filter\" placeholder=\"Filter\" value=\"{}\">\n",
        html_escape(query.filter.as_deref().unwrap_or(""))
    ));
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"rowsPerPage\" value=\"{}\">\n",
        query.rows_per_page
    ));
    if let Some(column) = query.sort_by {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"sortBy\" value=\"{}\">\n",
            column
        ));
        if query.descending {
            html.push_str("<input type=\"hidden\" name=\"descending\" value=\"true\">\n");
        }
    }
    html.push_str("<button type=\"submit\">Filter</button>\n</form>\n");
    html
}

fn pagination(query: &ProductsQuery, page: &Page<Product>) -> String {
    let mut html = String::from("<div class=\"pagination\">\n");

    if page.has_previous() {
        html.push_str(&link(
            "Previous",
            &query.with_page(query.page - 1).href(),
            false,
        ));
    }
    html.push_str(&format!(
        "<span>Page {} of {} ({} products)</span>\n",
        page.page,
        page.total_pages().max(1),
        page.total
    ));
    if page.has_next() {
        html.push_str(&link("Next", &query.with_page(query.page + 1).href(), false));
    }

    html.push_str("<span>Rows per page:</span>");
    for option in ROWS_PER_PAGE_OPTIONS {
        if option == query.rows_per_page {
            html.push_str(&format!("<strong>{}</strong>", option));
        } else {
            html.push_str(&link(
                &option.to_string(),
                &query.with_rows_per_page(option).href(),
                false,
            ));
        }
    }

    html.push_str("\n</div>\n");
    html
}

/// Render a single product.
pub async fn detail(repository: &ProductRepository, raw_id: &str) -> Rendered {
    let id: i64 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return Rendered::with_status(
                400,
                frame(
                    "Product",
                    &message(&format!("Invalid product id: {}", raw_id)),
                ),
            )
        }
    };

    match repository.get_by_id(id).await {
        Ok(Some(product)) => {
            let mut body = model_card(
                Some(&product.name),
                &[
                    ("Id", product.id.to_string()),
                    ("Name", product.name.clone()),
                    ("Product Group Id", product.product_group_id.to_string()),
                    ("Product Group", product.product_group_name.clone()),
                ],
            );
            body.push_str(&card(None, &link("Back to products", "/products", false)));
            Rendered::ok(frame(&product.name, &body))
        }
        Ok(None) => Rendered::with_status(
            404,
            frame(
                "Product",
                &message(&format!("Product {} not found", id)),
            ),
        ),
        Err(e) => {
            error!(error = %e, product_id = id, "Failed to load product");
            Rendered::with_status(e.status_code(), frame("Product", &message(&error_text(&e))))
        }
    }
}
