use serde::{Deserialize, Serialize};

/// External forms and documents the catalog links to.
///
/// These are opaque: nothing here parses or dereferences them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Freelancer signup form.
    pub freelancer_signup: String,
    /// Client project posting form. Also the base of inquiry links.
    pub client_post: String,
    /// Pricing and discount policy document.
    pub price_policy: String,
    /// Sole-proprietor / tax FAQ.
    pub tax_faq: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            freelancer_signup: "https://your-google-form-for-freelancers".to_string(),
            client_post: "https://your-google-form-for-clients".to_string(),
            price_policy: "https://your-notion-doc-pricing".to_string(),
            tax_faq: "https://your-notion-tax-faq".to_string(),
        }
    }
}

/// Link that opens the client posting form pre-filled with a talent's name.
pub fn inquiry_link(client_post: &str, talent_name: &str) -> String {
    format!("{}?talent={}", client_post, encode_component(talent_name))
}

/// Percent-encode a single query value. Spaces become `%20`, not `+`.
pub fn encode_component(value: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
