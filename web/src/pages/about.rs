//! About page.

use shared::ApplicationInfo;

use crate::components::{card, frame, html_escape, link};
use crate::pages::Rendered;

pub fn render(info: &ApplicationInfo) -> Rendered {
    let mut body = String::new();
    for (label, value) in [
        ("Version:", &info.version),
        ("Description:", &info.description),
        ("Author:", &info.author_email),
    ] {
        body.push_str(&format!(
            "<div class=\"row\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
            label,
            html_escape(value)
        ));
    }
    body.push_str(&format!(
        "<div class=\"row\"><span class=\"label\">Links:</span>{} {}</div>\n",
        link("GitHub", &info.project_url, true),
        link("Documentation", &info.docs_url(), true)
    ));

    Rendered::ok(frame("About", &card(Some(&info.name), &body)))
}
