//! HTML building blocks shared by every page.

/// Theme colors, exposed to pages as CSS custom properties.
pub const THEME_COLORS: [(&str, &str); 8] = [
    ("brand", "#009279"),
    ("primary", "#009279"),
    ("secondary", "#b5d334"),
    ("accent", "#f39c21"),
    ("positive", "#b5d334"),
    ("negative", "#ad1b11"),
    ("info", "#c5b4ff"),
    ("warning", "#d38334"),
];

pub const CARD_CLASSES: &str = "card";
pub const HEADER_CLASSES: &str = "text-header";
pub const LINK_CLASSES: &str = "link";

/// Navigation entries as `(label, href)`.
pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Products", "/products"),
    ("Knowledge Base", "/kb"),
    ("Articles", "/articles"),
    ("About", "/about"),
];

/// Wrap page content in the themed document with header and navigation.
pub fn frame(navigation_title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>Vine App - {}</title>\n",
        html_escape(navigation_title)
    ));
    push_style(&mut html);
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n<div class=\"titles\">");
    html.push_str("<span class=\"app-name\">Vine App</span>");
    html.push_str(&format!(
        "<span class=\"page-title\">{}</span>",
        html_escape(navigation_title)
    ));
    html.push_str("</div>\n");
    html.push_str(&menu());
    html.push_str("</header>\n");

    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Navigation menu.
pub fn menu() -> String {
    let links: String = MENU_ITEMS
        .iter()
        .map(|(label, href)| format!("<a href=\"{}\">{}</a>", href, label))
        .collect();
    format!("<nav>{}</nav>\n", links)
}

/// Heading-style message, also used for errors shown in place of content.
pub fn message(text: &str) -> String {
    format!("<p class=\"message\">{}</p>\n", html_escape(text))
}

/// Link, opened in a new tab when `new_tab` is set.
pub fn link(text: &str, href: &str, new_tab: bool) -> String {
    let target = if new_tab {
        " target=\"_blank\" rel=\"noopener\""
    } else {
        ""
    };
    format!(
        "<a class=\"{}\" href=\"{}\"{}>{}</a>",
        LINK_CLASSES,
        html_escape(href),
        target,
        html_escape(text)
    )
}

/// Card with an optional header; `inner` is already-rendered HTML.
pub fn card(title: Option<&str>, inner: &str) -> String {
    let mut html = format!("<section class=\"{}\">\n", CARD_CLASSES);
    if let Some(title) = title {
        html.push_str(&format!(
            "<h2 class=\"{}\">{}</h2>\n",
            HEADER_CLASSES,
            html_escape(title)
        ));
    }
    html.push_str(inner);
    html.push_str("</section>\n");
    html
}

/// Card listing labelled values, one row per `(label, value)` pair.
pub fn model_card(title: Option<&str>, rows: &[(&str, String)]) -> String {
    let body: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                "<div class=\"row\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
                html_escape(label),
                html_escape(value)
            )
        })
        .collect();
    card(title, &body)
}

/// Title-cased label for a snake_case field name.
pub fn field_label(field_name: &str) -> String {
    field_name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Table with pre-rendered header cells and escaped body cells.
pub fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    if rows.is_empty() {
        html.push_str(&format!(
            "<tr><td class=\"empty\" colspan=\"{}\">No data available</td></tr>\n",
            headers.len().max(1)
        ));
    }
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// Minimal HTML escaping for user-facing strings.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_style(html: &mut String) {
    html.push_str("<style>\n:root{");
    for (name, color) in THEME_COLORS {
        html.push_str(&format!("--{}:{};", name, color));
    }
    html.push_str("}\n");
    html.push_str(
        "*{box-sizing:border-box}\n\
         body{font-family:system-ui,-apple-system,sans-serif;margin:0;color:#333}\n\
         header{display:flex;align-items:center;justify-content:space-between;\
         background:var(--primary);color:#fff;padding:.75rem 1.5rem}\n\
         header .titles{display:flex;align-items:center;gap:1rem}\n\
         .app-name{font-size:1.25rem;font-weight:700}\n\
         .page-title{font-size:1.1rem}\n\
         nav{display:flex;gap:1rem}\n\
         nav a{color:#fff;text-decoration:none}\n\
         main{display:flex;flex-direction:column;align-items:center;padding:1rem}\n\
         .card{width:100%;max-width:48rem;margin:0 auto 1rem;padding:1rem;\
         box-shadow:0 1px 4px rgba(0,0,0,.2);border-radius:4px}\n\
         .text-header{font-size:1.5rem;font-weight:700;color:var(--primary);margin:0 0 1rem}\n\
         .row{display:flex;gap:.5rem;align-items:flex-start;margin-bottom:.5rem}\n\
         .label{font-weight:700;color:var(--secondary)}\n\
         .value{color:#555}\n\
         .link{color:var(--accent)}\n\
         .link:hover{color:var(--secondary)}\n\
         .message{font-size:2rem;color:#616161}\n\
         .nav-cards{display:flex;gap:1rem;justify-content:center;flex-wrap:wrap}\n\
         .nav-card{width:16rem;padding:1rem;box-shadow:0 1px 4px rgba(0,0,0,.2)}\n\
         table{width:100%;max-width:48rem;border-collapse:collapse}\n\
         th,td{padding:.5rem .75rem;text-align:left;border-bottom:1px solid #ddd}\n\
         .pagination{display:flex;gap:1rem;align-items:center;margin-top:1rem}\n",
    );
    html.push_str("</style>\n");
}
