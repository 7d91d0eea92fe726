//! Fibery database detail page.

use shared::{FiberyEntity, FiberySchema, KnowledgeBase};
use tracing::warn;

use crate::components::{card, field_label, frame, html_escape, message, model_card, table};
use crate::pages::{error_text, Rendered};

/// Render the schema and sample entities of database `name`.
///
/// A schema failure replaces the whole content; an entity failure only
/// replaces the entity section.
pub async fn render(knowledge_base: &KnowledgeBase, name: &str) -> Rendered {
    let title = format!("{} Database", name);

    let schema = match knowledge_base.schema(name).await {
        Ok(schema) => schema,
        Err(e) => {
            warn!(database = name, error = %e, "Failed to load Fibery schema");
            return Rendered::with_status(e.status_code(), frame(&title, &message(&error_text(&e))));
        }
    };

    let mut body = schema_card(&schema);
    match knowledge_base.sample_entities(name).await {
        Ok(entities) if entities.is_empty() => {}
        Ok(entities) => body.push_str(&entities_card(&entities)),
        Err(e) => {
            warn!(database = name, error = %e, "Failed to load Fibery entities");
            body.push_str(&message(&error_text(&e)));
        }
    }

    Rendered::ok(frame(&title, &body))
}

fn schema_card(schema: &FiberySchema) -> String {
    let headers = vec!["Field".to_string(), "Type".to_string()];
    let rows: Vec<Vec<String>> = schema
        .fields
        .iter()
        .map(|field| vec![html_escape(&field.name), html_escape(&field.type_name)])
        .collect();
    card(Some("Schema"), &table(&headers, &rows))
}

fn entities_card(entities: &[FiberyEntity]) -> String {
    let cards: String = entities
        .iter()
        .map(|entity| {
            model_card(
                None,
                &[
                    (field_label("id").as_str(), entity.id.clone()),
                    (field_label("name").as_str(), entity.name.clone()),
                    (
                        field_label("description").as_str(),
                        entity.description.clone().unwrap_or_default(),
                    ),
                ],
            )
        })
        .collect();
    card(Some("Example Entities"), &cards)
}
