use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

use crate::tree::ExprKind;

#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Malformed {kind} node: {reason}")]
    MalformedTree { kind: ExprKind, reason: String },

    #[error("Expression nesting exceeds the depth limit of {limit}")]
    StructureTooDeep { limit: usize },

    #[error("Kind {kind} is handled by both the '{first}' and '{second}' translators")]
    DuplicateTranslator { kind: ExprKind, first: &'static str, second: &'static str },

    #[error("Settings error: {msg}")]
    Settings { msg: String, path: Option<PathBuf>, span: Option<Range<usize>> },

    #[error("Input error: {msg}")]
    Input { msg: String },
}

impl RenderError {
    pub fn malformed(kind: ExprKind, reason: impl Into<String>) -> Self {
        Self::MalformedTree { kind, reason: reason.into() }
    }

    pub fn settings(msg: impl Into<String>, span: Option<Range<usize>>) -> Self {
        Self::Settings { msg: msg.into(), path: None, span }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input { msg: msg.into() }
    }

    /// Attach the file a settings error came from.
    pub fn with_path(self, file: PathBuf) -> Self {
        match self {
            Self::Settings { msg, span, .. } => Self::Settings { msg, path: Some(file), span },
            other => other,
        }
    }
}

/// Render a RenderError for the terminal. Settings errors that carry a span
/// are drawn with ariadne against the settings source.
pub fn render_error(source: Option<&str>, err: &RenderError) {
    use ariadne::{Label, Report, ReportKind, Source};

    match (err, source) {
        (RenderError::Settings { msg, path, span: Some(span) }, Some(source)) => {
            let title = match path {
                Some(path) => format!("invalid settings in {}", path.display()),
                None => "invalid settings".to_string(),
            };
            let printed = Report::build(ReportKind::Error, (), span.start)
                .with_message(title)
                .with_label(Label::new(span.clone()).with_message(msg))
                .finish()
                .eprint(Source::from(source));
            if printed.is_err() {
                eprintln!("error: {err}");
            }
        }
        (RenderError::Settings { msg, path: Some(path), .. }, _) => {
            eprintln!("error[settings]: {msg}");
            eprintln!("  --> {}", path.display());
        }
        _ => eprintln!("error: {err}"),
    }
}
