use std::path::Path;

use serde::Deserialize;

use crate::diagnostics::RenderError;

/// Rendering knobs. Every field has a compiled-in default, so an empty
/// settings file is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Initializers whose constructor plus entries (each counted with a two
    /// character separator) fit within this many characters render inline.
    pub inline_initializer_limit: usize,
    pub max_depth: usize,
    /// Catch clauses of this type with an unused variable drop the type.
    pub root_error_type: String,
    /// Identifiers escaped with `@` in addition to the built-in keywords.
    pub extra_reserved_words: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inline_initializer_limit: 40,
            max_depth: 256,
            root_error_type: "Exception".to_string(),
            extra_reserved_words: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(source: &str) -> Result<Settings, RenderError> {
        let settings: Settings = toml::from_str(source)
            .map_err(|e| RenderError::settings(e.message().to_string(), e.span()))?;
        settings.validate(source)?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Settings, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            RenderError::settings(format!("could not read settings file: {e}"), None)
                .with_path(path.to_path_buf())
        })?;
        Self::from_toml_str(&source).map_err(|e| e.with_path(path.to_path_buf()))
    }

    fn validate(&self, source: &str) -> Result<(), RenderError> {
        if self.max_depth == 0 {
            let span = source.find("max_depth").map(|start| start..start + "max_depth".len());
            return Err(RenderError::settings("max_depth must be at least 1", span));
        }
        if self.root_error_type.trim().is_empty() {
            let span = source
                .find("root_error_type")
                .map(|start| start..start + "root_error_type".len());
            return Err(RenderError::settings("root_error_type must not be empty", span));
        }
        Ok(())
    }
}
