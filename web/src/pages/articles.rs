//! Static article pages.

use crate::components::{frame, html_escape, link, message};
use crate::pages::Rendered;

const ARTICLES_PATH: &str = "/articles";

pub fn index() -> Rendered {
    let mut body = message("Articles");
    body.push_str("<p>This page and its subpages are served by the article routes.</p>\n");
    for id in 1..=3 {
        body.push_str(&format!(
            "<p>{}</p>\n",
            link(
                &format!("Item {}", id),
                &format!("{}/items/{}", ARTICLES_PATH, id),
                false
            )
        ));
    }
    Rendered::ok(frame("Articles", &body))
}

pub fn item(item_id: &str) -> Rendered {
    let mut body = message(&format!("Item  #{}", item_id));
    body.push_str(&link("go back", ARTICLES_PATH, false));
    Rendered::ok(frame(&format!("Article -{}-", item_id), &body))
}
