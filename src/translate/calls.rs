use crate::diagnostics::RenderError;
use crate::tree::{AssignOp, DynamicOp, Expr, ExprKind, MethodRef, TypeRef};

use super::context::TranslationContext;
use super::operators::{concatenation_operands, format_assignment, translate_concatenation};
use super::precedence::{Precedence, precedence, wrap_if};
use super::unexpected;

/// The text of `expr` when something is accessed on it.
fn receiver(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let text = ctx.translate(expr)?;
    Ok(wrap_if(text, precedence(expr) < Precedence::Primary))
}

fn type_arguments(args: &[TypeRef]) -> String {
    if args.is_empty() {
        return String::new();
    }
    let names: Vec<String> = args.iter().map(TypeRef::friendly_name).collect();
    format!("<{}>", names.join(", "))
}

pub(super) fn format_call(receiver: &str, name: &str, type_args: &[TypeRef], args: &[String]) -> String {
    format!("{receiver}.{name}{}({})", type_arguments(type_args), args.join(", "))
}

pub(super) fn method_call(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    match expr {
        Expr::Call { object, method, arguments } => {
            if let Some(operands) = concatenation_operands(expr) {
                return translate_concatenation(&operands, ctx);
            }
            call(object.as_deref(), method, arguments, ctx)
        }
        Expr::Invoke { target, arguments } => {
            let target = receiver(target, ctx)?;
            let args = ctx.translate_all(arguments)?;
            Ok(format_call(&target, "Invoke", &[], &args))
        }
        _ => Err(unexpected(expr, "method call")),
    }
}

fn call(
    object: Option<&Expr>,
    method: &MethodRef,
    arguments: &[Expr],
    ctx: &mut TranslationContext<'_>,
) -> Result<String, RenderError> {
    if method.is_extension {
        let Some((first, rest)) = arguments.split_first() else {
            return Err(RenderError::malformed(
                ExprKind::Call,
                format!("extension method '{}' has no receiver argument", method.name),
            ));
        };
        let target = receiver(first, ctx)?;
        let args = ctx.translate_all(rest)?;
        return Ok(format_call(&target, &method.name, &method.type_args, &args));
    }

    let target = match object {
        Some(object) if !method.is_static => receiver(object, ctx)?,
        _ => method.declaring_type.friendly_name(),
    };

    if let Some(property) = method.name.strip_prefix("get_") {
        if property == "Item" && !arguments.is_empty() {
            let args = ctx.translate_all(arguments)?;
            return Ok(format!("{target}[{}]", args.join(", ")));
        }
        if arguments.is_empty() {
            return Ok(format!("{target}.{property}"));
        }
    }
    if let Some(property) = method.name.strip_prefix("set_") {
        if let [value] = arguments {
            let value = ctx.translate(value)?;
            return Ok(format_assignment(&format!("{target}.{property}"), AssignOp::Assign, &value));
        }
    }

    let args = ctx.translate_all(arguments)?;
    Ok(format_call(&target, &method.name, &method.type_args, &args))
}

pub(super) fn member_access(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::MemberAccess { object, declaring_type, member } = expr else {
        return Err(unexpected(expr, "member access"));
    };
    let target = match object {
        Some(object) => receiver(object, ctx)?,
        None => declaring_type.friendly_name(),
    };
    Ok(format!("{target}.{member}"))
}

pub(super) fn array_length(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::ArrayLength { array } = expr else {
        return Err(unexpected(expr, "array length"));
    };
    Ok(format!("{}.Length", receiver(array, ctx)?))
}

pub(super) fn index_access(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Index { object, arguments } = expr else {
        return Err(unexpected(expr, "index access"));
    };
    if arguments.is_empty() {
        return Err(RenderError::malformed(ExprKind::Index, "index access needs at least one argument"));
    }
    let target = receiver(object, ctx)?;
    let args = ctx.translate_all(arguments)?;
    Ok(format!("{target}[{}]", args.join(", ")))
}

pub(super) fn dynamic(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Dynamic { operation, arguments } = expr else {
        return Err(unexpected(expr, "dynamic"));
    };
    let required = match operation {
        DynamicOp::SetIndex => 3,
        DynamicOp::SetMember { .. } | DynamicOp::GetIndex => 2,
        _ => 1,
    };
    if arguments.len() < required {
        return Err(RenderError::malformed(
            ExprKind::Dynamic,
            format!(
                "dynamic {} needs at least {required} argument(s), found {}",
                operation.name(),
                arguments.len()
            ),
        ));
    }
    if let DynamicOp::Convert { ty } = operation {
        let text = ctx.translate(&arguments[0])?;
        let text = wrap_if(text, precedence(&arguments[0]) < Precedence::Unary);
        return Ok(format!("({}){text}", ty.friendly_name()));
    }
    let target = receiver(&arguments[0], ctx)?;
    let rest = &arguments[1..];
    match operation {
        DynamicOp::GetMember { name } => Ok(format!("{target}.{name}")),
        DynamicOp::SetMember { name } => {
            let value = ctx.translate(&rest[0])?;
            Ok(format_assignment(&format!("{target}.{name}"), AssignOp::Assign, &value))
        }
        DynamicOp::InvokeMember { name, type_args } => {
            let args = ctx.translate_all(rest)?;
            Ok(format_call(&target, name, type_args, &args))
        }
        DynamicOp::Invoke => {
            let args = ctx.translate_all(rest)?;
            Ok(format_call(&target, "Invoke", &[], &args))
        }
        DynamicOp::GetIndex => {
            let args = ctx.translate_all(rest)?;
            Ok(format!("{target}[{}]", args.join(", ")))
        }
        DynamicOp::SetIndex => {
            let (value, indices) = rest.split_last().ok_or_else(|| unexpected(expr, "dynamic"))?;
            let indices = ctx.translate_all(indices)?;
            let value = ctx.translate(value)?;
            Ok(format_assignment(&format!("{target}[{}]", indices.join(", ")), AssignOp::Assign, &value))
        }
        DynamicOp::Convert { .. } => Err(unexpected(expr, "dynamic")),
    }
}
