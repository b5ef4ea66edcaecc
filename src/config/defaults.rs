//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn author_url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [seo] Section Defaults
// ============================================================================

pub mod seo {
    pub fn application_category() -> String {
        "DeveloperApplication".into()
    }

    pub fn operating_system() -> String {
        "Windows, macOS, Linux".into()
    }

    pub fn price() -> String {
        "0".into()
    }

    pub fn currency() -> String {
        "USD".into()
    }
}
