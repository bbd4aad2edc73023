pub mod code_block;
pub mod diagnostics;
pub mod keywords;
pub mod settings;
pub mod translate;
pub mod tree;
pub mod usage;
pub mod visit;

use diagnostics::RenderError;
use std::sync::OnceLock;
use tracing::Level;

pub use settings::Settings;
pub use translate::{Registry, Translator};
pub use tree::{Expr, ExprKind, TypeRef};

/// The registry built from default settings, created on first use.
pub fn default_registry() -> Result<&'static Registry, RenderError> {
    static REGISTRY: OnceLock<Result<Registry, RenderError>> = OnceLock::new();
    REGISTRY
        .get_or_init(|| Registry::new(Settings::default()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Render `expr` as readable source-like text (default registry → translate).
pub fn render_readable(expr: &Expr) -> Result<String, RenderError> {
    let registry = default_registry()?;
    if tracing::enabled!(Level::DEBUG) {
        tracing::debug!(kind = %expr.kind(), nodes = visit::count_nodes(expr), "rendering expression");
    }
    registry.translate(expr)
}

/// `expr.to_readable_string()` as a shorthand for [`render_readable`].
pub trait ToReadableString {
    fn to_readable_string(&self) -> Result<String, RenderError>;
}

impl ToReadableString for Expr {
    fn to_readable_string(&self) -> Result<String, RenderError> {
        render_readable(self)
    }
}
