use crate::diagnostics::RenderError;
use crate::tree::{Expr, Literal, Parameter};

use super::context::TranslationContext;
use super::unexpected;

/// The name of a parameter or variable, `@`-escaped when it collides with
/// a reserved word.
pub(super) fn parameter_name(parameter: &Parameter, ctx: &TranslationContext<'_>) -> String {
    ctx.reserved_words().escape(&parameter.name).into_owned()
}

pub(super) fn parameter(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Parameter(p) = expr else {
        return Err(unexpected(expr, "parameter"));
    };
    Ok(parameter_name(p, ctx))
}

pub(super) fn extension(expr: &Expr, _ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Extension { description } = expr else {
        return Err(unexpected(expr, "extension"));
    };
    Ok(description.clone())
}

pub(super) fn constant(expr: &Expr, _ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Constant { value } = expr else {
        return Err(unexpected(expr, "constant"));
    };
    Ok(format_literal(value))
}

fn format_literal(value: &Literal) -> String {
    match value {
        Literal::Null => "null".to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Int(n) => n.to_string(),
        Literal::Long(n) => format!("{n}L"),
        Literal::UInt(n) => format!("{n}u"),
        Literal::ULong(n) => format!("{n}UL"),
        Literal::Float(v) if v.is_nan() => "float.NaN".to_string(),
        Literal::Float(v) if v.is_infinite() => infinity("float", v.is_sign_positive()),
        Literal::Float(v) => format!("{v}f"),
        Literal::Double(v) if v.is_nan() => "double.NaN".to_string(),
        Literal::Double(v) if v.is_infinite() => infinity("double", v.is_sign_positive()),
        Literal::Double(v) => {
            let text = v.to_string();
            if text.contains('.') { text } else { format!("{text}d") }
        }
        Literal::Decimal(s) => format!("{s}m"),
        Literal::Char(c) => format!("'{}'", escape(&c.to_string(), '\'')),
        Literal::String(s) => format!("\"{}\"", escape(s, '"')),
        Literal::Type(ty) => format!("typeof({})", ty.friendly_name()),
        Literal::EnumMember { ty, member } => format!("{}.{member}", ty.friendly_name()),
    }
}

fn infinity(ty: &str, positive: bool) -> String {
    if positive {
        format!("{ty}.PositiveInfinity")
    } else {
        format!("{ty}.NegativeInfinity")
    }
}

fn escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
