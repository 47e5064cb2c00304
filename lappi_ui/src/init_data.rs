//! Data handed from the server-rendered page to the browser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `id` of the injected script element.
pub const INIT_DATA_SCRIPT_ID: &str = "lappi-init-data";

/// Published as `window.INIT_DATA` so the browser never re-resolves the API
/// host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitData {
    /// Base URL of the registered API client.
    pub api_base_url: Option<String>,
    /// Normalised request path.
    pub path: String,
    /// Route pattern that matched.
    pub pattern: String,
    /// Captured route parameters.
    pub params: HashMap<String, String>,
}

impl InitData {
    /// `<script>` element assigning `window.INIT_DATA`.
    ///
    /// `<`, `>` and `&` are written as JSON unicode escapes so no value can
    /// end the element or open a comment inside it.
    pub fn script(&self) -> String {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize init data");
                return String::new();
            }
        };

        format!(
            r#"<script id="{INIT_DATA_SCRIPT_ID}">window.INIT_DATA = {};</script>"#,
            escape_script_json(&json)
        )
    }

    /// Insert [`Self::script`] right before `</head>`.
    ///
    /// Pages without a head are returned unchanged.
    pub fn inject(&self, html: &str) -> String {
        match html.find("</head>") {
            Some(head_end) => {
                let mut result = html.to_owned();
                result.insert_str(head_end, &self.script());
                result
            }
            None => html.to_owned(),
        }
    }
}

fn escape_script_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());

    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }

    escaped
}
