use crate::diagnostics::RenderError;
use crate::tree::{AssignOp, BinaryOp, ConvertOp, Expr, NewArrayOp, TypeTestOp, UnaryOp};

use super::context::TranslationContext;
use super::precedence::{Precedence, Side, needs_parentheses, precedence, wrap_if};
use super::statements::is_statement_shaped;
use super::unexpected;

// ── Binary ───────────────────────────────────────────────────────────

pub(super) fn binary(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Binary { op, left, right, .. } = expr else {
        return Err(unexpected(expr, "binary"));
    };
    if let Some(operands) = concatenation_operands(expr) {
        return translate_concatenation(&operands, ctx);
    }
    if *op == BinaryOp::Power {
        let l = ctx.translate(left)?;
        let r = ctx.translate(right)?;
        return Ok(format!("Math.Pow({l}, {r})"));
    }
    let l = ctx.translate(left)?;
    let l = wrap_if(l, needs_parentheses(left, *op, Side::Left));
    let r = ctx.translate(right)?;
    let r = wrap_if(r, needs_parentheses(right, *op, Side::Right));
    Ok(format!("{l} {} {r}", op.symbol()))
}

/// The flattened operands of a string concatenation, whether written as
/// `+` or as an explicit `string.Concat` call. `None` for anything else.
pub(super) fn concatenation_operands(expr: &Expr) -> Option<Vec<&Expr>> {
    let parts: Vec<&Expr> = match expr {
        Expr::Binary { op: BinaryOp::Add, left, right, method: Some(m) } if m.is_string_concat() => {
            vec![left.as_ref(), right.as_ref()]
        }
        Expr::Call { object: None, method, arguments } if method.is_string_concat() => {
            match arguments.as_slice() {
                [Expr::NewArray { op: NewArrayOp::Init, expressions, .. }] => expressions.iter().collect(),
                args if (2..=4).contains(&args.len()) => args.iter().collect(),
                _ => return None,
            }
        }
        _ => return None,
    };
    let mut operands = Vec::with_capacity(parts.len());
    for part in parts {
        match concatenation_operands(part) {
            Some(nested) => operands.extend(nested),
            None => operands.push(part),
        }
    }
    Some(operands)
}

pub(super) fn translate_concatenation(
    operands: &[&Expr],
    ctx: &mut TranslationContext<'_>,
) -> Result<String, RenderError> {
    let mut parts = Vec::with_capacity(operands.len());
    for operand in operands {
        let operand = strip_redundant_text_conversion(operand);
        let text = ctx.translate(operand)?;
        let needs_wrap = concatenation_operands(operand).is_none() && precedence(operand) < Precedence::Unary;
        parts.push(wrap_if(text, needs_wrap));
    }
    Ok(parts.join(" + "))
}

/// Concatenation converts its operands to text anyway, so a boxing
/// conversion or a parameterless `ToString()` adds nothing.
fn strip_redundant_text_conversion(expr: &Expr) -> &Expr {
    match expr {
        Expr::Convert { op: ConvertOp::Convert, operand, ty, method: None } if ty.is_object() => {
            strip_redundant_text_conversion(operand)
        }
        Expr::Call { object: Some(object), method, arguments }
            if method.name == "ToString" && arguments.is_empty() && !method.is_static =>
        {
            strip_redundant_text_conversion(object)
        }
        _ => expr,
    }
}

// ── Unary ────────────────────────────────────────────────────────────

pub(super) fn negation(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Unary { op, operand } = expr else {
        return Err(unexpected(expr, "negation"));
    };
    let symbol = match op {
        UnaryOp::Not => "!",
        UnaryOp::Negate | UnaryOp::NegateChecked => "-",
        UnaryOp::OnesComplement => "~",
        _ => return Err(unexpected(expr, "negation")),
    };
    Ok(format!("{symbol}{}", prefix_operand(operand, symbol, ctx)?))
}

pub(super) fn unary(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Unary { op, operand } = expr else {
        return Err(unexpected(expr, "unary"));
    };
    match op {
        UnaryOp::UnaryPlus => Ok(format!("+{}", prefix_operand(operand, "+", ctx)?)),
        UnaryOp::Increment | UnaryOp::Decrement => {
            let text = ctx.translate(operand)?;
            let text = wrap_if(text, precedence(operand) < Precedence::Additive);
            let sign = if *op == UnaryOp::Increment { '+' } else { '-' };
            Ok(format!("{text} {sign} 1"))
        }
        UnaryOp::PreIncrementAssign => Ok(format!("++{}", prefix_operand(operand, "+", ctx)?)),
        UnaryOp::PreDecrementAssign => Ok(format!("--{}", prefix_operand(operand, "-", ctx)?)),
        UnaryOp::PostIncrementAssign | UnaryOp::PostDecrementAssign => {
            let text = ctx.translate(operand)?;
            let text = wrap_if(text, precedence(operand) < Precedence::Primary);
            let suffix = if *op == UnaryOp::PostIncrementAssign { "++" } else { "--" };
            Ok(format!("{text}{suffix}"))
        }
        _ => Err(unexpected(expr, "unary")),
    }
}

/// An operand of a prefix operator; `-(-x)` keeps its parentheses so the
/// two signs never merge into `--x`.
fn prefix_operand(operand: &Expr, symbol: &str, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let text = ctx.translate(operand)?;
    let merges = matches!(symbol, "-" | "+") && text.starts_with(symbol);
    Ok(wrap_if(text, merges || precedence(operand) < Precedence::Unary))
}

// ── Conversions and type tests ───────────────────────────────────────

pub(super) fn cast(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Convert { op, operand, ty, method } = expr else {
        return Err(unexpected(expr, "cast"));
    };
    if method.as_ref().is_some_and(|m| m.name == "op_Implicit") {
        return ctx.translate(operand);
    }
    let text = ctx.translate(operand)?;
    match op {
        ConvertOp::TypeAs => {
            let text = wrap_if(text, precedence(operand) < Precedence::Relational);
            Ok(format!("{text} as {}", ty.friendly_name()))
        }
        ConvertOp::Convert | ConvertOp::ConvertChecked | ConvertOp::Unbox => {
            let text = wrap_if(text, precedence(operand) < Precedence::Unary);
            Ok(format!("({}){text}", ty.friendly_name()))
        }
    }
}

pub(super) fn type_test(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::TypeTest { op, operand, type_operand } = expr else {
        return Err(unexpected(expr, "type test"));
    };
    let text = ctx.translate(operand)?;
    let ty = type_operand.friendly_name();
    Ok(match op {
        TypeTestOp::Is => format!("{} is {ty}", wrap_if(text, precedence(operand) < Precedence::Relational)),
        TypeTestOp::Equal => {
            format!("{}.GetType() == typeof({ty})", wrap_if(text, precedence(operand) < Precedence::Primary))
        }
    })
}

// ── Throw and assignment ─────────────────────────────────────────────

pub(super) fn throw(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Throw { operand } = expr else {
        return Err(unexpected(expr, "throw"));
    };
    let Some(operand) = operand else {
        return Ok("throw".to_string());
    };
    let rethrows_target = match (operand.as_parameter(), ctx.rethrow_target()) {
        (Some(p), Some(target)) => p.id == target,
        _ => false,
    };
    if rethrows_target {
        return Ok("throw".to_string());
    }
    Ok(format!("throw {}", ctx.translate(operand)?))
}

pub(super) fn assignment(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Assign { op, target, value } = expr else {
        return Err(unexpected(expr, "assignment"));
    };
    let target = ctx.translate(target)?;
    let value = ctx.translate(value)?;
    Ok(format_assignment(&target, *op, &value))
}

pub(super) fn format_assignment(target: &str, op: AssignOp, value: &str) -> String {
    match op {
        AssignOp::PowerAssign => format!("{target} = Math.Pow({target}, {value})"),
        _ => format!("{target} {} {value}", op.symbol()),
    }
}

// ── Conditional ──────────────────────────────────────────────────────

pub(super) fn conditional(expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
    let Expr::Conditional { test, if_true, if_false, .. } = expr else {
        return Err(unexpected(expr, "conditional"));
    };
    if is_statement_shaped(expr) {
        return if_statement(test, if_true, if_false, ctx);
    }
    let test_text = ctx.translate(test)?;
    let test_text = wrap_if(test_text, precedence(test) <= Precedence::Conditional);
    let true_text = ctx.translate(if_true)?;
    let true_text = wrap_if(true_text, precedence(if_true) <= Precedence::Conditional);
    let false_text = ctx.translate(if_false)?;
    let false_text = wrap_if(false_text, precedence(if_false) < Precedence::Conditional);
    Ok(format!("{test_text} ? {true_text} : {false_text}"))
}

fn if_statement(
    test: &Expr,
    if_true: &Expr,
    if_false: &Expr,
    ctx: &mut TranslationContext<'_>,
) -> Result<String, RenderError> {
    let test_text = ctx.translate(test)?;
    let body = ctx.translate_code_block(if_true)?;
    let mut out = format!("if ({test_text})\n{}", body.with_curly_braces());
    if if_false.is_void_default() {
        return Ok(out);
    }
    if matches!(if_false, Expr::Conditional { .. }) && is_statement_shaped(if_false) {
        out.push_str("\nelse ");
        out.push_str(&ctx.translate(if_false)?);
    } else {
        let otherwise = ctx.translate_code_block(if_false)?;
        out.push_str("\nelse\n");
        out.push_str(&otherwise.with_curly_braces());
    }
    Ok(out)
}
