//! Statement-level nodes: blocks, lambdas and control flow.

use crate::code_block::CodeBlock;
use crate::diagnostics::RenderError;
use crate::tree::{AssignOp, Expr, ExprKind, GotoKind, Parameter};
use crate::usage::references;

use super::context::TranslationContext;
use super::leaves::parameter_name;
use super::unexpected;

/// Nodes that read as statements rather than expressions, so they can
/// never sit inside a ternary or an expression-bodied lambda.
pub(super) fn is_statement_shaped(expr: &Expr) -> bool {
    match expr {
        Expr::Block { .. }
        | Expr::Loop { .. }
        | Expr::Switch { .. }
        | Expr::Try { .. }
        | Expr::Label { .. }
        | Expr::DebugInfo { .. }
        | Expr::Goto { .. } => true,
        Expr::Conditional { ty, if_true, if_false, .. } => {
            ty.is_void() || is_statement_shaped(if_true) || is_statement_shaped(if_false)
        }
        _ => false,
    }
}

/// `text` as a statement: `;`-terminated unless the node ends in its own
/// braces, is a label or is a comment.
pub(super) fn terminate(expr: &Expr, text: String) -> String {
    if is_statement_shaped(expr) && !matches!(expr, Expr::Goto { .. }) {
        text
    } else {
        format!("{text};")
    }
}

/// The first top-level statement of a block may declare a variable with
/// `var` when it is a plain assignment to it and nothing earlier mentions
/// it.
fn inline_declarations(variables: &[Parameter], expressions: &[Expr]) -> Vec<Option<usize>> {
    variables
        .iter()
        .map(|v| {
            let first = expressions.iter().position(|e| references(e, v.id))?;
            match &expressions[first] {
                Expr::Assign { op: AssignOp::Assign, target, value }
                    if target.as_parameter().is_some_and(|p| p.id == v.id) && !references(value, v.id) =>
                {
                    Some(first)
                }
                _ => None,
            }
        })
        .collect()
}

pub(super) fn block_statements(
    variables: &[Parameter],
    expressions: &[Expr],
    ctx: &mut TranslationContext<'_>,
    return_last: bool,
) -> Result<CodeBlock, RenderError> {
    if expressions.is_empty() {
        return Err(RenderError::malformed(ExprKind::Block, "a block needs at least one expression"));
    }
    let inline = inline_declarations(variables, expressions);
    let mut statements = Vec::new();
    let mut expression_like = true;

    for (variable, declared_at) in variables.iter().zip(&inline) {
        if declared_at.is_none() {
            let name = parameter_name(variable, ctx);
            statements.push(format!("{} {name};", variable.ty.friendly_name()));
            expression_like = false;
        }
    }

    let last = expressions.len() - 1;
    for (index, expr) in expressions.iter().enumerate() {
        let is_last = index == last;
        if let Expr::Block { variables, expressions, .. } = expr {
            let nested =
                ctx.nested(|ctx| block_statements(variables, expressions, ctx, return_last && is_last))?;
            statements.extend(nested.statements().iter().cloned());
            expression_like = false;
            continue;
        }

        let declared = variables
            .iter()
            .zip(&inline)
            .find(|(_, at)| **at == Some(index))
            .map(|(v, _)| v);
        let text = match (declared, expr) {
            (Some(variable), Expr::Assign { value, .. }) => {
                expression_like = false;
                let name = parameter_name(variable, ctx);
                format!("var {name} = {}", ctx.translate(value)?)
            }
            _ => ctx.translate(expr)?,
        };
        if text.is_empty() {
            continue;
        }
        let returns = return_last
            && is_last
            && !is_statement_shaped(expr)
            && !matches!(expr, Expr::Throw { .. } | Expr::Assign { .. });
        let text = if returns { format!("return {text}") } else { text };
        if is_last && is_statement_shaped(expr) {
            expression_like = false;
        }
        statements.push(terminate(expr, text));
    }

    Ok(if expression_like {
        CodeBlock::new(statements)
    } else {
        CodeBlock::statements_only(statements)
    })
}

pub(super) fn block(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Block { variables, expressions, .. } = expr else {
        return Err(unexpected(expr, "block"));
    };
    Ok(block_statements(variables, expressions, ctx, false)?.without_curly_braces())
}

// ── Lambdas ──────────────────────────────────────────────────────────

fn lambda_parameters(parameters: &[Parameter], ctx: &TranslationContext<'_>) -> String {
    let typed = parameters.iter().any(|p| p.by_ref);
    let rendered: Vec<String> = parameters
        .iter()
        .map(|p| {
            let name = parameter_name(p, ctx);
            match (typed, p.by_ref) {
                (true, true) => format!("ref {} {name}", p.ty.friendly_name()),
                (true, false) => format!("{} {name}", p.ty.friendly_name()),
                _ => name,
            }
        })
        .collect();
    match rendered.as_slice() {
        [single] if !typed => single.clone(),
        _ => format!("({})", rendered.join(", ")),
    }
}

pub(super) fn lambda(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Lambda { parameters, body, return_type } = expr else {
        return Err(unexpected(expr, "lambda"));
    };
    let params = lambda_parameters(parameters, ctx);
    let body = ctx.with_rethrow_target(None, |ctx| match body.as_ref() {
        Expr::Block { variables, expressions, .. } => {
            ctx.nested(|ctx| block_statements(variables, expressions, ctx, !return_type.is_void()))
        }
        other => ctx.translate_code_block(other),
    })?;
    if body.is_single_statement() {
        Ok(format!("{params} => {}", body.as_expression_body()))
    } else {
        Ok(format!("{params} =>\n{}", body.with_curly_braces()))
    }
}

pub(super) fn quote(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Quote { operand } = expr else {
        return Err(unexpected(expr, "quoted lambda"));
    };
    ctx.translate(operand)
}

// ── Control flow ─────────────────────────────────────────────────────

pub(super) fn loop_(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Loop { body } = expr else {
        return Err(unexpected(expr, "loop"));
    };
    let body = ctx.translate_code_block(body)?;
    Ok(format!("while (true)\n{}", body.with_curly_braces()))
}

pub(super) fn goto(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Goto { kind, target, value } = expr else {
        return Err(unexpected(expr, "goto"));
    };
    match kind {
        GotoKind::Goto => match &target.name {
            Some(name) => Ok(format!("goto {name}")),
            None => Err(RenderError::malformed(ExprKind::Goto, "a goto needs a named label")),
        },
        GotoKind::Return => match value {
            Some(value) => Ok(format!("return {}", ctx.translate(value)?)),
            None => Ok("return".to_string()),
        },
        GotoKind::Break => Ok("break".to_string()),
        GotoKind::Continue => Ok("continue".to_string()),
    }
}

pub(super) fn label(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Label { target, default_value } = expr else {
        return Err(unexpected(expr, "label"));
    };
    match (&target.name, default_value) {
        (Some(name), _) => Ok(format!("{name}:")),
        (None, Some(value)) => ctx.translate(value),
        (None, None) => Ok(String::new()),
    }
}

pub(super) fn default(expr: &Expr, _ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Default { ty } = expr else {
        return Err(unexpected(expr, "default"));
    };
    if ty.is_void() {
        return Ok(String::new());
    }
    Ok(format!("default({})", ty.friendly_name()))
}

pub(super) fn runtime_variables(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::RuntimeVariables { variables } = expr else {
        return Err(unexpected(expr, "runtime variables"));
    };
    let names: Vec<String> = variables.iter().map(|v| parameter_name(v, ctx)).collect();
    Ok(format!("RuntimeVariables({})", names.join(", ")))
}

pub(super) fn debug_info(expr: &Expr, _ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::DebugInfo { document, start_line, start_column, end_line, end_column, is_clear } = expr else {
        return Err(unexpected(expr, "debug info"));
    };
    if *is_clear {
        return Ok(format!("// Clear debug info from {document}"));
    }
    Ok(format!("// Debug to {document}, {start_line}, {start_column} -> {end_line}, {end_column}"))
}
