//! Resolve Fibery databases to their GraphQL schema and sample entities.

use std::collections::HashMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::fibery::client::{FiberyClient, GraphqlResponse};
use crate::fibery::models::{FiberyEntity, FiberyInfo, FiberySchema, RawEntity};
use crate::{Error, Result};

/// Number of entities fetched per database.
pub const SAMPLE_LIMIT: usize = 5;

/// Type names that are generated alongside databases but are not databases.
const EXCLUDED_TYPE_MARKERS: [&str; 2] = ["BackgroundJob", "Operations"];

const SCHEMA_LISTING_QUERY: &str = r#"
    query {
        __schema {
            types {
                name
                fields {
                    name
                }
            }
        }
    }
"#;

/// Schema and sample entities of one database.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseView {
    pub schema: FiberySchema,
    pub entities: Vec<FiberyEntity>,
}

/// Outcome of a single `find<Name>` query attempt.
#[derive(Debug)]
enum FieldLookup {
    Found(Vec<FiberyEntity>),
    FieldNotFound,
    GraphqlError(String),
}

#[derive(Debug, Deserialize)]
struct TypeData {
    #[serde(rename = "__type")]
    type_info: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct SchemaData {
    #[serde(rename = "__schema")]
    schema: SchemaTypes,
}

#[derive(Debug, Deserialize)]
struct SchemaTypes {
    types: Vec<TypeSummary>,
}

#[derive(Debug, Deserialize)]
struct TypeSummary {
    name: String,
    #[serde(default)]
    fields: Option<Vec<IgnoredAny>>,
}

/// Knowledge base browser over one Fibery space.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    client: FiberyClient,
    info: FiberyInfo,
}

impl KnowledgeBase {
    pub fn new(client: FiberyClient, info: FiberyInfo) -> Self {
        Self { client, info }
    }

    pub fn info(&self) -> &FiberyInfo {
        &self.info
    }

    /// GraphQL type name of a database in this space.
    pub fn type_name(&self, name: &str) -> Result<String> {
        validate_database_name(name)?;
        Ok(format!("{}{}", self.info.type_prefix(), name))
    }

    /// Names of the databases in this space, without the space prefix.
    pub async fn list_databases(&self) -> Result<Vec<String>> {
        let response: GraphqlResponse<SchemaData> =
            self.client.execute_as(SCHEMA_LISTING_QUERY).await?;
        if let Some(message) = response.first_error() {
            return Err(Error::Graphql(message.to_string()));
        }
        let data = response
            .data
            .ok_or_else(|| Error::Malformed("Unexpected API response format".to_string()))?;

        let prefix = self.info.type_prefix();
        let mut databases: Vec<String> = data
            .schema
            .types
            .into_iter()
            .filter(|t| is_database_type(t, &prefix))
            .map(|t| t.name[prefix.len()..].to_string())
            .collect();
        databases.sort();

        debug!(count = databases.len(), "Listed Fibery databases");
        Ok(databases)
    }

    /// Field list of the database called `name`.
    pub async fn schema(&self, name: &str) -> Result<FiberySchema> {
        let type_name = self.type_name(name)?;
        let response: GraphqlResponse<TypeData> =
            self.client.execute_as(&schema_query(&type_name)).await?;

        if let Some(message) = response.first_error() {
            return Err(Error::Graphql(message.to_string()));
        }
        let data = response
            .data
            .ok_or_else(|| Error::Malformed("Unexpected API response format".to_string()))?;

        match data.type_info {
            Some(type_info) if !type_info.is_null() => FiberySchema::from_type_info(&type_info),
            _ => Err(Error::NotFound(format!("Type '{}' not found", type_name))),
        }
    }

    /// Up to [`SAMPLE_LIMIT`] entities of the database called `name`.
    ///
    /// Fibery names the query field either `find<Name>` or `find<Name>s`; the
    /// singular form is tried first and the plural exactly once after it.
    pub async fn sample_entities(&self, name: &str) -> Result<Vec<FiberyEntity>> {
        validate_database_name(name)?;

        let singular = format!("find{}", name);
        match self.find_entities(&singular).await? {
            FieldLookup::Found(entities) => return Ok(entities),
            FieldLookup::FieldNotFound => debug!(field = %singular, "Entity field missing"),
            FieldLookup::GraphqlError(message) => {
                debug!(field = %singular, error = %message, "Singular entity query failed")
            }
        }

        let plural = format!("{}s", singular);
        match self.find_entities(&plural).await? {
            FieldLookup::Found(entities) => Ok(entities),
            FieldLookup::FieldNotFound => {
                Err(Error::NotFound(format!("No entities found for '{}'", name)))
            }
            FieldLookup::GraphqlError(message) => Err(Error::Graphql(message)),
        }
    }

    /// Schema and sample entities; entities are only fetched once the schema resolved.
    pub async fn resolve(&self, name: &str) -> Result<DatabaseView> {
        let schema = self.schema(name).await?;
        let entities = self.sample_entities(name).await?;

        info!(
            database = name,
            fields = schema.fields.len(),
            entities = entities.len(),
            "Resolved Fibery database"
        );

        Ok(DatabaseView { schema, entities })
    }

    async fn find_entities(&self, field: &str) -> Result<FieldLookup> {
        let response: GraphqlResponse<HashMap<String, Option<Vec<RawEntity>>>> =
            self.client.execute_as(&entities_query(field)).await?;

        if let Some(message) = response.first_error() {
            return Ok(FieldLookup::GraphqlError(message.to_string()));
        }
        let mut data = response
            .data
            .ok_or_else(|| Error::Malformed("Unexpected API response format".to_string()))?;

        match data.remove(field) {
            Some(Some(entities)) => Ok(FieldLookup::Found(
                entities
                    .into_iter()
                    .take(SAMPLE_LIMIT)
                    .map(FiberyEntity::from)
                    .collect(),
            )),
            // present but null still means the field exists
            Some(None) => Ok(FieldLookup::Found(Vec::new())),
            None => Ok(FieldLookup::FieldNotFound),
        }
    }
}

/// Database names end up inside query text, so only identifier characters pass.
fn validate_database_name(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::Validation(format!("Invalid database name: '{}'", name)));
    }
    Ok(())
}

fn is_database_type(type_info: &TypeSummary, prefix: &str) -> bool {
    type_info.name.len() > prefix.len()
        && type_info.name.starts_with(prefix)
        && type_info.fields.as_ref().is_some_and(|f| !f.is_empty())
        && !EXCLUDED_TYPE_MARKERS
            .iter()
            .any(|marker| type_info.name.contains(marker))
}

fn schema_query(type_name: &str) -> String {
    format!(
        r#"
        query {{
            __type(name: "{}") {{
                name
                fields {{
                    name
                    type {{
                        name
                        ofType {{
                            name
                            ofType {{
                                name
                            }}
                        }}
                    }}
                }}
            }}
        }}
        "#,
        type_name
    )
}

fn entities_query(field: &str) -> String {
    format!(
        r#"
        query {{
            {} (limit: {}) {{
                id
                name
                description {{
                    text
                }}
            }}
        }}
        "#,
        field, SAMPLE_LIMIT
    )
}
