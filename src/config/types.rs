use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "selectors.cursorDot")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    pub selectors: SelectorSettings,
    pub scroll: ScrollSettings,
    pub cursor: CursorSettings,
    pub language: LanguageSettings,

    /// `tracing` filter directive (e.g. `"info"`, `"portfolio_page=debug"`).
    pub log_level: String,
}

/// CSS selectors binding the page markup to each behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorSettings {
    pub cursor_dot: String,
    pub cursor_outline: String,
    pub blog_container: String,
    /// Matches every page section; each needs an `id`.
    pub sections: String,
    pub nav_links: String,
    pub header: String,
    /// Optional on the page: the handler is not wired when nothing matches.
    pub contact_form: String,
    pub form_status: String,
    pub language_toggle: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            cursor_dot: ".cursor-dot".to_string(),
            cursor_outline: ".cursor-outline".to_string(),
            blog_container: "#blog-container".to_string(),
            sections: "section".to_string(),
            nav_links: "header nav a".to_string(),
            header: "header".to_string(),
            contact_form: "#contact-form".to_string(),
            form_status: "#form-status".to_string(),
            language_toggle: "#lang-toggle".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollSettings {
    /// A section becomes active this many pixels before its top reaches the viewport top.
    pub section_offset: i32,
    /// The header is sticky once the page is scrolled past this many pixels.
    pub sticky_threshold: i32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self { section_offset: 150, sticky_threshold: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CursorSettings {
    pub outline_duration_ms: u32,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self { outline_duration_ms: 500 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageSettings {
    /// Local storage key holding the chosen locale code.
    pub storage_key: String,
    /// Used on first visit, or when the stored code is not a supported locale.
    pub default_locale: Locale,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self { storage_key: "language".to_string(), default_locale: Locale::Tr }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            selectors: SelectorSettings::default(),
            scroll: ScrollSettings::default(),
            cursor: CursorSettings::default(),
            language: LanguageSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SelectorSettings {
    /// `(field path, selector)` pairs in declaration order.
    fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("selectors.cursorDot", self.cursor_dot.as_str()),
            ("selectors.cursorOutline", self.cursor_outline.as_str()),
            ("selectors.blogContainer", self.blog_container.as_str()),
            ("selectors.sections", self.sections.as_str()),
            ("selectors.navLinks", self.nav_links.as_str()),
            ("selectors.header", self.header.as_str()),
            ("selectors.contactForm", self.contact_form.as_str()),
            ("selectors.formStatus", self.form_status.as_str()),
            ("selectors.languageToggle", self.language_toggle.as_str()),
        ]
    }
}

impl PageSettings {
    /// # Errors
    /// - Empty selector
    /// - Negative scroll distance
    /// - Empty storage key
    /// - Invalid log directive
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field_path, selector) in self.selectors.entries() {
            if selector.trim().is_empty() {
                errors.push(ValidationError::new(
                    field_path,
                    "The selector cannot be empty. Example: \"#blog-container\"",
                ));
            }
        }

        if self.scroll.section_offset < 0 {
            errors.push(ValidationError::new(
                "scroll.sectionOffset",
                format!("Must be zero or positive, got {}", self.scroll.section_offset),
            ));
        }

        if self.scroll.sticky_threshold < 0 {
            errors.push(ValidationError::new(
                "scroll.stickyThreshold",
                format!("Must be zero or positive, got {}", self.scroll.sticky_threshold),
            ));
        }

        if self.language.storage_key.is_empty() {
            errors.push(ValidationError::new(
                "language.storageKey",
                "The storage key cannot be empty. Example: \"language\"",
            ));
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.log_level) {
            errors.push(ValidationError::new(
                "logLevel",
                format!("Invalid log directive '{}': {e}", self.log_level),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
