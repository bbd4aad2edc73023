//! Layout of already-translated statements.
//!
//! A [`CodeBlock`] is a value: every operation returns a new block or a
//! string and never mutates shared state, so the same block can be queried
//! repeatedly (`has_return` then `append`, for instance).

pub const INDENT: &str = "    ";

const TERMINATORS: &[&str] =
    &["return;", "return ", "throw;", "throw ", "break;", "continue;", "goto "];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
    statements: Vec<String>,
    inline: bool,
}

impl CodeBlock {
    /// A block whose statements may collapse into an expression body when
    /// there is only one of them.
    pub fn new(statements: Vec<String>) -> Self {
        Self { statements, inline: true }
    }

    /// A block that always renders as statements, e.g. one that declares
    /// variables.
    pub fn statements_only(statements: Vec<String>) -> Self {
        Self { statements, inline: false }
    }

    pub fn single(statement: impl Into<String>) -> Self {
        Self::new(vec![statement.into()])
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Prefix every non-empty line with one indent unit.
    pub fn indent(self) -> Self {
        let statements = self.statements.iter().map(|s| indent_lines(s)).collect();
        Self { statements, inline: self.inline }
    }

    pub fn append(mut self, line: impl Into<String>) -> Self {
        self.statements.push(line.into());
        self
    }

    /// Prepend `lines`, keeping their order.
    pub fn insert<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut statements: Vec<String> = lines.into_iter().map(Into::into).collect();
        statements.extend(self.statements);
        Self { statements, inline: self.inline }
    }

    pub fn with_curly_braces(&self) -> String {
        if self.statements.is_empty() {
            return "{\n}".to_string();
        }
        format!("{{\n{}\n}}", self.clone().indent().without_curly_braces())
    }

    pub fn without_curly_braces(&self) -> String {
        self.join("\n")
    }

    pub fn join(&self, separator: &str) -> String {
        self.statements.join(separator)
    }

    /// True for exactly one single-line statement that can stand as an
    /// expression.
    pub fn is_single_statement(&self) -> bool {
        self.inline && self.statements.len() == 1 && !self.statements[0].contains('\n')
    }

    /// The lone statement with its terminator and any `return ` removed.
    pub fn as_expression_body(&self) -> String {
        let text = self.join("\n");
        let text = text.strip_suffix(';').unwrap_or(&text);
        text.strip_prefix("return ").unwrap_or(text).to_string()
    }

    /// Whether the last statement already leaves the enclosing block.
    pub fn has_return(&self) -> bool {
        self.statements
            .last()
            .map(|last| {
                let last = last.trim_start();
                TERMINATORS.iter().any(|t| last.starts_with(t))
            })
            .unwrap_or(false)
    }
}

pub fn indent_lines(text: &str) -> String {
    text.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{INDENT}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}
