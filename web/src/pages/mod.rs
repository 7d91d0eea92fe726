//! Page renderers. Each returns the status code and the full HTML document.

pub mod about;
pub mod articles;
pub mod database;
pub mod home;
pub mod kb;
pub mod products;

use shared::Error;

use crate::components::{frame, message};

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: u16,
    pub html: String,
}

impl Rendered {
    pub fn ok(html: String) -> Self {
        Self { status: 200, html }
    }

    pub fn with_status(status: u16, html: String) -> Self {
        Self { status, html }
    }
}

/// Text shown to the user in place of content that failed to load.
pub fn error_text(err: &Error) -> String {
    match err {
        Error::Graphql(message) => format!("GraphQL Error: {}", message),
        Error::Validation(message) | Error::NotFound(message) | Error::Malformed(message) => {
            message.clone()
        }
        other => format!("Error: {}", other),
    }
}

pub fn not_found(path: &str) -> Rendered {
    Rendered::with_status(
        404,
        frame("Not Found", &message(&format!("Page '{}' not found", path))),
    )
}

pub fn method_not_allowed(method: &str) -> Rendered {
    Rendered::with_status(
        405,
        frame(
            "Method Not Allowed",
            &message(&format!("Method {} is not allowed", method)),
        ),
    )
}
