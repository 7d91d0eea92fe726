//! Application metadata.

use serde::Serialize;

/// Application metadata taken from the package manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author_email: String,
    pub project_url: String,
}

impl ApplicationInfo {
    /// Documentation lives under the project URL.
    pub fn docs_url(&self) -> String {
        format!("{}/docs", self.project_url)
    }
}

/// Get application metadata information.
pub fn get_application_info() -> ApplicationInfo {
    ApplicationInfo {
        name: "vineapp".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
        author_email: author_email(env!("CARGO_PKG_AUTHORS")),
        project_url: env!("CARGO_PKG_REPOSITORY").to_string(),
    }
}

/// First author of a `Name <email>` list, as cargo joins it with `:`.
fn author_email(authors: &str) -> String {
    authors.split(':').next().unwrap_or_default().trim().to_string()
}
