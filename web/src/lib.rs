//! Vine App web frontend.
//!
//! Routes:
//! - GET / - Home
//! - GET /about - Application info
//! - GET /products - Paginated, sortable, filterable product table
//! - GET /products/{id} - Product detail
//! - GET /kb - Fibery knowledge base overview
//! - GET /kb/database/{name} - Schema and sample entities of a Fibery database
//! - GET /articles - Article index
//! - GET /articles/items/{id} - Article

pub mod components;
pub mod pages;

use std::borrow::Cow;
use std::sync::Arc;

use lambda_http::{Body, Error, Request, RequestExt, Response};
use shared::{Config, FiberyClient, FiberyInfo, KnowledgeBase, ProductRepository};
use tracing::info;

use crate::pages::Rendered;

/// Application state
pub struct AppState {
    pub products: ProductRepository,
    pub knowledge_base: KnowledgeBase,
}

impl AppState {
    pub async fn from_config(config: &Config) -> shared::Result<Self> {
        let products = ProductRepository::connect(&config.database).await?;
        let client = FiberyClient::from_config(&config.fibery)?;
        let knowledge_base = KnowledgeBase::new(client, FiberyInfo::from_config(&config.fibery));

        Ok(Self {
            products,
            knowledge_base,
        })
    }
}

pub async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let raw_path = event.uri().path();
    let path = route_path(raw_path);
    let method = event.method().as_str();

    info!("Received request: method={}, path={} (raw: {})", method, path, raw_path);

    if method != "GET" {
        return html_response(pages::method_not_allowed(method));
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let page = match segments.as_slice() {
        [] => pages::home::render(),
        ["about"] => pages::about::render(&shared::get_application_info()),
        ["products"] => {
            let params = event.query_string_parameters();
            pages::products::list(&state.products, |key| {
                params.first(key).map(str::to_string)
            })
            .await
        }
        ["products", id] => pages::products::detail(&state.products, id).await,
        ["kb"] => pages::kb::render(&state.knowledge_base).await,
        ["kb", "database", name] => {
            pages::database::render(&state.knowledge_base, &decode_segment(name)).await
        }
        ["articles"] => pages::articles::index(),
        ["articles", "items", id] => pages::articles::item(&decode_segment(id)),
        _ => pages::not_found(path),
    };

    html_response(page)
}

/// Path without the API Gateway stage prefix.
fn route_path(raw_path: &str) -> &str {
    match raw_path.strip_prefix("/api") {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => raw_path,
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}

fn html_response(page: Rendered) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(page.status)
        .header("content-type", "text/html; charset=utf-8")
        .body(Body::from(page.html))?)
}
