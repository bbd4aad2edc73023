use crate::code_block::CodeBlock;
use crate::diagnostics::RenderError;
use crate::tree::{Expr, ExprKind};

use super::context::TranslationContext;
use super::unexpected;

pub(super) fn switch(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Switch { value, cases, default_body } = expr else {
        return Err(unexpected(expr, "switch"));
    };
    if cases.is_empty() {
        return Err(RenderError::malformed(ExprKind::Switch, "a switch needs at least one case"));
    }
    let value = ctx.translate(value)?;

    let mut sections = Vec::with_capacity(cases.len() + 1);
    for case in cases {
        let labels = case
            .test_values
            .iter()
            .map(|test| Ok(format!("case {}:", ctx.translate(test)?)))
            .collect::<Result<Vec<_>, RenderError>>()?;
        let body = ctx.translate_code_block(&case.body)?;
        sections.push(format_case(body, labels));
    }
    if let Some(default_body) = default_body {
        let body = ctx.translate_code_block(default_body)?;
        sections.push(format_case(body, vec!["default:".to_string()]));
    }

    Ok(format!("switch ({value})\n{{\n{}\n}}", sections.join("\n\n")))
}

/// Labels over the body, both indented inside the switch braces, with a
/// `break;` unless the body already leaves the switch.
fn format_case(body: CodeBlock, labels: Vec<String>) -> String {
    let body = if body.has_return() { body } else { body.append("break;") };
    body.indent().insert(labels).indent().without_curly_braces()
}
