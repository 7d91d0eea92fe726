//! Fibery workspace and schema models.

use serde::{Deserialize, Serialize};

use crate::config::FiberyConfig;
use crate::{Error, Result};

/// Information about the configured Fibery workspace.
#[derive(Debug, Clone, Serialize)]
pub struct FiberyInfo {
    pub name: String,
    pub description: String,
    /// Workspace URL, never with a trailing slash
    pub base_url: String,
    pub space_name: String,
    /// Databases highlighted on the knowledge base page
    pub databases: Vec<String>,
}

impl FiberyInfo {
    pub fn new(base_url: impl Into<String>, space_name: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            name: "Fibery Knowledge Base".to_string(),
            description: "Access Serra Vine's Fibery knowledge base and databases".to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            space_name: space_name.into(),
            databases: vec![
                "Process Segments".to_string(),
                "Products".to_string(),
                "Schemas".to_string(),
            ],
        }
    }

    pub fn from_config(config: &FiberyConfig) -> Self {
        Self::new(config.base_url.clone(), config.space_name.clone())
    }

    /// Space name as it appears in URLs and GraphQL type names.
    ///
    /// Whitespace runs become a single underscore; casing is preserved.
    pub fn type_prefix(&self) -> String {
        self.space_name.split_whitespace().collect::<Vec<_>>().join("_")
    }

    /// Browser URL of the space.
    pub fn kb_url(&self) -> String {
        format!("{}/{}/", self.base_url, self.type_prefix())
    }

    pub fn api_url(&self) -> String {
        format!("{}/api/graphql/space/{}", self.base_url, self.type_prefix())
    }

    /// GraphQL endpoint of the space.
    pub fn graphql_url(&self) -> String {
        self.api_url()
    }
}

/// A field of a Fibery database type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiberyField {
    pub name: String,
    pub type_name: String,
}

/// The field list of a Fibery database type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiberySchema {
    pub name: String,
    pub fields: Vec<FiberyField>,
}

#[derive(Debug, Deserialize)]
struct RawTypeInfo {
    name: String,
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type", default)]
    field_type: Option<RawTypeRef>,
}

#[derive(Debug, Deserialize)]
struct RawTypeRef {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "ofType", default)]
    of_type: Option<Box<RawTypeRef>>,
}

impl RawTypeRef {
    /// Named type, looking through NON_NULL and LIST wrappers.
    fn resolved_name(&self) -> Option<&str> {
        match (&self.name, &self.of_type) {
            (Some(name), _) => Some(name.as_str()),
            (None, Some(inner)) => inner.resolved_name(),
            (None, None) => None,
        }
    }
}

impl FiberySchema {
    /// Build a schema from the `__type` object of an introspection response.
    pub fn from_type_info(type_info: &serde_json::Value) -> Result<Self> {
        let raw = RawTypeInfo::deserialize(type_info)
            .map_err(|e| Error::Malformed(format!("Invalid type info: {}", e)))?;

        let fields = raw
            .fields
            .into_iter()
            .map(|field| FiberyField {
                type_name: field
                    .field_type
                    .as_ref()
                    .and_then(RawTypeRef::resolved_name)
                    .unwrap_or("Unknown")
                    .to_string(),
                name: field.name,
            })
            .collect();

        Ok(Self {
            name: raw.name,
            fields,
        })
    }
}

/// A sample entity of a Fibery database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiberyEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Entity as returned by a `find<Name>` query.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEntity {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<RichText>,
}

/// Fibery returns rich-text fields as `{ "text": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RichText {
    Plain(String),
    Document {
        #[serde(default)]
        text: Option<String>,
    },
}

impl RichText {
    fn into_text(self) -> Option<String> {
        match self {
            RichText::Plain(text) => Some(text),
            RichText::Document { text } => text,
        }
    }
}

impl From<RawEntity> for FiberyEntity {
    fn from(raw: RawEntity) -> Self {
        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            description: raw.description.and_then(RichText::into_text),
        }
    }
}
