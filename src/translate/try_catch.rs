use crate::diagnostics::RenderError;
use crate::tree::{CatchBlock, Expr, TypeRef};
use crate::usage::is_variable_used;

use super::context::TranslationContext;
use super::leaves::parameter_name;
use super::unexpected;

pub(super) fn try_catch(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Try { body, handlers, fault, finally } = expr else {
        return Err(unexpected(expr, "try/catch"));
    };
    let body = ctx.translate_code_block(body)?;
    let mut out = format!("try\n{}", body.with_curly_braces());
    for handler in handlers {
        out.push('\n');
        out.push_str(&catch_clause(handler, ctx)?);
    }
    for (keyword, block) in [("fault", fault), ("finally", finally)] {
        let Some(block) = block else { continue };
        let block = ctx.with_rethrow_target(None, |ctx| ctx.translate_code_block(block))?;
        out.push_str(&format!("\n{keyword}\n{}", block.with_curly_braces()));
    }
    Ok(out)
}

fn catch_clause(handler: &CatchBlock, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let used = is_variable_used(handler);
    let root = TypeRef::named(ctx.settings().root_error_type.as_str());
    let type_name = handler.test.friendly_name();

    let mut clause = match &handler.variable {
        Some(variable) if used => format!(" ({type_name} {})", parameter_name(variable, ctx)),
        _ if handler.test.same_as(&root) => String::new(),
        _ => format!(" ({type_name})"),
    };
    if let Some(filter) = &handler.filter {
        clause.push_str(&format!(" when {}", ctx.translate(filter)?));
    }

    let rethrow_target = match &handler.variable {
        Some(variable) if !used => Some(variable.id),
        _ => None,
    };
    let body = ctx.with_rethrow_target(rethrow_target, |ctx| ctx.translate_code_block(&handler.body))?;
    Ok(format!("catch{clause}\n{}", body.with_curly_braces()))
}
