use crate::code_block::indent_lines;
use crate::diagnostics::RenderError;
use crate::tree::{ElementInit, Expr, ExprKind, MemberBinding, NewArrayOp, NewExpr, TypeRef};

use super::context::TranslationContext;
use super::unexpected;

pub(super) fn new_object(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::New(new) = expr else {
        return Err(unexpected(expr, "new"));
    };
    let args = ctx.translate_all(&new.arguments)?;
    Ok(format!("new {}({})", new.ty.friendly_name(), args.join(", ")))
}

pub(super) fn new_array(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::NewArray { op, element_type, expressions } = expr else {
        return Err(unexpected(expr, "new array"));
    };
    match op {
        NewArrayOp::Init if expressions.is_empty() => Ok(sized_array(element_type, &["0".to_string()])),
        NewArrayOp::Init => {
            let items = ctx.translate_all(expressions)?;
            Ok(format!("new[] {{ {} }}", items.join(", ")))
        }
        NewArrayOp::Bounds => {
            if expressions.is_empty() {
                return Err(RenderError::malformed(
                    ExprKind::NewArray(NewArrayOp::Bounds),
                    "a bounded array needs at least one bound",
                ));
            }
            let bounds = ctx.translate_all(expressions)?;
            Ok(sized_array(element_type, &bounds))
        }
    }
}

/// `new T[a, b]`, keeping any array rank of the element type after the
/// bounds (`new int[3][]`).
fn sized_array(element_type: &TypeRef, bounds: &[String]) -> String {
    let element = TypeRef { array_rank: 0, ..element_type.clone() };
    let mut out = format!("new {}[{}]", element.friendly_name(), bounds.join(", "));
    if element_type.array_rank > 0 {
        out.push('[');
        out.push_str(&",".repeat(element_type.array_rank as usize - 1));
        out.push(']');
    }
    out
}

// ── Initialisers ─────────────────────────────────────────────────────

pub(super) fn initialisation(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    match expr {
        Expr::ListInit { new, initializers } => {
            if initializers.is_empty() {
                return Err(RenderError::malformed(
                    ExprKind::ListInit,
                    "a list initialisation needs at least one entry",
                ));
            }
            let head = constructor_head(new, ctx)?;
            let entries = element_entries(initializers, ctx)?;
            Ok(layout_initialisation(&head, &entries, ctx.settings().inline_initializer_limit))
        }
        Expr::MemberInit { new, bindings } if bindings.is_empty() => {
            let args = ctx.translate_all(&new.arguments)?;
            Ok(format!("new {}({})", new.ty.friendly_name(), args.join(", ")))
        }
        Expr::MemberInit { new, bindings } => {
            let head = constructor_head(new, ctx)?;
            let entries = binding_entries(bindings, ctx)?;
            Ok(layout_initialisation(&head, &entries, ctx.settings().inline_initializer_limit))
        }
        _ => Err(unexpected(expr, "initialisation")),
    }
}

/// The constructor call with empty argument parentheses elided.
fn constructor_head(new: &NewExpr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let ty = new.ty.friendly_name();
    if new.arguments.is_empty() {
        return Ok(format!("new {ty}"));
    }
    let args = ctx.translate_all(&new.arguments)?;
    Ok(format!("new {ty}({})", args.join(", ")))
}

fn element_entries(initializers: &[ElementInit], ctx: &mut TranslationContext<'_>) -> Result<Vec<String>, RenderError> {
    initializers
        .iter()
        .map(|init| {
            let args = ctx.translate_all(&init.arguments)?;
            Ok(match args.as_slice() {
                [single] => single.clone(),
                [] => "{ }".to_string(),
                many => format!("{{ {} }}", many.join(", ")),
            })
        })
        .collect()
}

fn binding_entries(bindings: &[MemberBinding], ctx: &mut TranslationContext<'_>) -> Result<Vec<String>, RenderError> {
    let limit = ctx.settings().inline_initializer_limit;
    bindings
        .iter()
        .map(|binding| match binding {
            MemberBinding::Assignment { member, value } => Ok(format!("{member} = {}", ctx.translate(value)?)),
            MemberBinding::MemberInit { member, bindings } => {
                let entries = binding_entries(bindings, ctx)?;
                Ok(layout_initialisation(&format!("{member} ="), &entries, limit))
            }
            MemberBinding::List { member, initializers } => {
                let entries = element_entries(initializers, ctx)?;
                Ok(layout_initialisation(&format!("{member} ="), &entries, limit))
            }
        })
        .collect()
}

/// `head { a, b }` when the head plus every entry (counted with a two
/// character separator) fits in `limit`; otherwise one indented entry per
/// line.
pub(super) fn layout_initialisation(head: &str, entries: &[String], limit: usize) -> String {
    if entries.is_empty() {
        return format!("{head} {{ }}");
    }
    let width = head.chars().count() + entries.iter().map(|e| e.chars().count() + 2).sum::<usize>();
    if width <= limit && !entries.iter().any(|e| e.contains('\n')) {
        return format!("{head} {{ {} }}", entries.join(", "));
    }
    let body: Vec<String> = entries.iter().map(|e| indent_lines(e)).collect();
    format!("{head}\n{{\n{}\n}}", body.join(",\n"))
}
