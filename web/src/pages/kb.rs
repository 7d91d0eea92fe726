//! Knowledge base overview.

use shared::KnowledgeBase;
use tracing::warn;

use crate::components::{card, frame, html_escape, link, message};
use crate::pages::{error_text, Rendered};

pub async fn render(knowledge_base: &KnowledgeBase) -> Rendered {
    let info = knowledge_base.info();

    let mut rows = String::new();
    for (label, value) in [
        ("Name", html_escape(&info.name)),
        ("Base Url", link(&info.base_url, &info.kb_url(), true)),
        ("Space Name", html_escape(&info.space_name)),
        ("Databases", html_escape(&info.databases.join(", "))),
    ] {
        rows.push_str(&format!(
            "<div class=\"row\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
            label, value
        ));
    }
    let mut body = card(Some(&info.description), &rows);

    match knowledge_base.list_databases().await {
        Ok(databases) => {
            let links: String = databases
                .iter()
                .map(|name| {
                    format!(
                        "<p>{}</p>\n",
                        link(
                            name,
                            &format!("/kb/database/{}", urlencoding::encode(name)),
                            false
                        )
                    )
                })
                .collect();
            body.push_str(&card(Some("Available Databases"), &links));
        }
        Err(e) => {
            warn!(error = %e, "Failed to list Fibery databases");
            body.push_str(&message(&error_text(&e)));
        }
    }

    Rendered::ok(frame("Knowledge Base", &body))
}
