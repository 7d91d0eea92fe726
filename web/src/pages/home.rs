//! Home page.

use crate::components::{card, frame, link};
use crate::pages::Rendered;

const NAV_CARDS: [(&str, &str, &str, &str); 3] = [
    ("Products", "View and manage your data products", "View Products", "/products"),
    ("Knowledge Base", "Browse the Fibery knowledge base", "Knowledge Base", "/kb"),
    ("About", "Learn more about Vine App", "About", "/about"),
];

pub fn render() -> Rendered {
    let cards: String = NAV_CARDS
        .iter()
        .map(|(title, text, label, href)| {
            format!(
                "<div class=\"nav-card\"><h3>{}</h3><p class=\"value\">{}</p>{}</div>\n",
                title,
                text,
                link(label, href, false)
            )
        })
        .collect();

    let body = format!(
        "<p class=\"value\">Explore and manage your data pipeline with ease</p>\n\
         <div class=\"nav-cards\">\n{}</div>\n",
        cards
    );

    Rendered::ok(frame("Homepage", &card(Some("Welcome to Vine App"), &body)))
}
