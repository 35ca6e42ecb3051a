//! Fetcher configuration and conventional resource paths.
//!
//! A [`FetcherConfig`] is built once at engine construction and never
//! mutated afterwards. All path segments are normalized on the way in,
//! so URL assembly is plain string joining.

use serde::{Deserialize, Serialize};

/// Default base path for component and template resources.
pub const DEFAULT_BASE: &str = "static/vue";
/// Default directory segment for component sources.
pub const DEFAULT_COMPONENT_DIR: &str = "components";
/// Default directory segment for template sources.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
/// Default extension for component sources.
pub const DEFAULT_COMPONENT_EXT: &str = ".vue.js";
/// Default extension for template sources.
pub const DEFAULT_TEMPLATE_EXT: &str = ".vue.html";

/// Immutable fetcher configuration.
///
/// Layout contract for remote resources:
/// - component: `{base}/{component_dir}/{name}{component_ext}`
/// - template: `{base}/{template_dir}/{name}{template_ext}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    base: String,
    component_dir: String,
    template_dir: String,
    component_ext: String,
    template_ext: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            component_dir: DEFAULT_COMPONENT_DIR.to_string(),
            template_dir: DEFAULT_TEMPLATE_DIR.to_string(),
            component_ext: DEFAULT_COMPONENT_EXT.to_string(),
            template_ext: DEFAULT_TEMPLATE_EXT.to_string(),
        }
    }
}

impl FetcherConfig {
    /// Create a configuration with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path. Trailing slashes are stripped.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = trim_base(base.into());
        self
    }

    /// Set the component directory segment. Surrounding slashes are stripped.
    pub fn with_component_dir(mut self, dir: impl Into<String>) -> Self {
        self.component_dir = trim_dir(dir.into());
        self
    }

    /// Set the template directory segment. Surrounding slashes are stripped.
    pub fn with_template_dir(mut self, dir: impl Into<String>) -> Self {
        self.template_dir = trim_dir(dir.into());
        self
    }

    /// Set the component file extension. Leading dots collapse to one.
    pub fn with_component_ext(mut self, ext: impl Into<String>) -> Self {
        self.component_ext = trim_ext(ext.into());
        self
    }

    /// Set the template file extension. Leading dots collapse to one.
    pub fn with_template_ext(mut self, ext: impl Into<String>) -> Self {
        self.template_ext = trim_ext(ext.into());
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn component_dir(&self) -> &str {
        &self.component_dir
    }

    pub fn template_dir(&self) -> &str {
        &self.template_dir
    }

    pub fn component_ext(&self) -> &str {
        &self.component_ext
    }

    pub fn template_ext(&self) -> &str {
        &self.template_ext
    }

    /// Conventional fetch target for a component source.
    pub fn component_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.base, self.component_dir, name, self.component_ext
        )
    }

    /// Conventional fetch target for a template source.
    pub fn template_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.base, self.template_dir, name, self.template_ext
        )
    }
}

/// Whether a segment is worth normalizing at all. Values without any
/// word character (e.g. "/" as a base) are kept verbatim.
fn can_trim(value: &str) -> bool {
    value.chars().any(|c| c.is_alphanumeric() || c == '_')
}

fn trim_base(value: String) -> String {
    let value = value.trim().to_string();
    if !can_trim(&value) {
        return value;
    }
    value.trim_end_matches('/').to_string()
}

fn trim_dir(value: String) -> String {
    let value = value.trim().to_string();
    if !can_trim(&value) {
        return value;
    }
    value.trim_matches('/').to_string()
}

fn trim_ext(value: String) -> String {
    let value = value.trim().to_string();
    if !can_trim(&value) {
        return value;
    }
    let stripped = value.trim_start_matches('.');
    format!(".{}", stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = FetcherConfig::default();
        assert_eq!(
            config.component_url("greet"),
            "static/vue/components/greet.vue.js"
        );
        assert_eq!(
            config.template_url("greet"),
            "static/vue/templates/greet.vue.html"
        );
    }

    #[test]
    fn test_segments_are_normalized() {
        let config = FetcherConfig::new()
            .with_base("assets/vue///")
            .with_component_dir("/widgets/")
            .with_template_dir("  markup ")
            .with_component_ext("...js")
            .with_template_ext("html");

        assert_eq!(config.base(), "assets/vue");
        assert_eq!(config.component_dir(), "widgets");
        assert_eq!(config.template_dir(), "markup");
        assert_eq!(config.component_ext(), ".js");
        assert_eq!(config.template_ext(), ".html");
        assert_eq!(config.component_url("card"), "assets/vue/widgets/card.js");
    }

    #[test]
    fn test_wordless_values_kept_verbatim() {
        let config = FetcherConfig::new().with_base("/");
        assert_eq!(config.base(), "/");
    }

    #[test]
    fn test_nested_component_name() {
        let config = FetcherConfig::default();
        assert_eq!(
            config.component_url("parent/child"),
            "static/vue/components/parent/child.vue.js"
        );
    }
}
