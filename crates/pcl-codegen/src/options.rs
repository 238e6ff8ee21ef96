//! Code generation options.

use pcl_core::CodegenError;
use serde::Deserialize;

/// Settings for one generation run.
///
/// Every field has a default, so a TOML document only needs the keys it
/// changes:
///
/// ```
/// use pcl_codegen::CodegenOptions;
///
/// let options = CodegenOptions::from_toml_str("line_directives = true").unwrap();
/// assert!(options.line_directives);
/// assert_eq!(options.extension, "j");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenOptions {
    /// Base class named in `.super` and called by the constructor.
    pub super_class: String,

    /// Extension of the written assembly file.
    pub extension: String,

    /// Minimum `.limit stack` for `main`.
    pub main_stack_limit: u32,

    /// `.limit locals` for `main`.
    pub main_locals_limit: u32,

    /// Echo each statement's source line as a comment.
    pub source_comments: bool,

    /// Emit `.line` directives.
    pub line_directives: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            super_class: "java/lang/Object".to_string(),
            extension: "j".to_string(),
            main_stack_limit: 16,
            main_locals_limit: 16,
            source_comments: true,
            line_directives: false,
        }
    }
}

impl CodegenOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CodegenError> {
        toml::from_str(text).map_err(|e| CodegenError::InvalidOptions {
            message: e.to_string(),
        })
    }

    /// Disable source comments and line directives.
    pub fn without_annotations(mut self) -> Self {
        self.source_comments = false;
        self.line_directives = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let options = CodegenOptions::from_toml_str("").unwrap();
        assert_eq!(options, CodegenOptions::default());
    }

    #[test]
    fn defaults() {
        let options = CodegenOptions::default();
        assert_eq!(options.super_class, "java/lang/Object");
        assert_eq!(options.main_stack_limit, 16);
        assert_eq!(options.main_locals_limit, 16);
        assert!(options.source_comments);
        assert!(!options.line_directives);
    }

    #[test]
    fn partial_document() {
        let options = CodegenOptions::from_toml_str(
            r#"
            super_class = "pcl/runtime/Base"
            main_stack_limit = 32
            source_comments = false
            "#,
        )
        .unwrap();

        assert_eq!(options.super_class, "pcl/runtime/Base");
        assert_eq!(options.main_stack_limit, 32);
        assert_eq!(options.main_locals_limit, 16);
        assert!(!options.source_comments);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = CodegenOptions::from_toml_str("stack = 3").unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOptions { .. }));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let text = "main_stack_limit = \"big\"";
        let err = CodegenOptions::from_toml_str(text).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("invalid code generation options"));
    }

    #[test]
    fn without_annotations() {
        let options = CodegenOptions {
            line_directives: true,
            ..CodegenOptions::default()
        }
        .without_annotations();
        assert!(!options.source_comments);
        assert!(!options.line_directives);
    }
}
