//! Operator precedence and parenthesization.
//!
//! Parentheses are always decided by the consumer of an operand, never by
//! the node that produced the text.

use crate::tree::{BinaryOp, ConvertOp, DynamicOp, Expr, Literal, TypeTestOp, UnaryOp};

/// Binding strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Assignment,
    Conditional,
    Coalesce,
    ConditionalOr,
    ConditionalAnd,
    LogicalOr,
    LogicalXor,
    LogicalAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub fn binary_precedence(op: BinaryOp) -> Precedence {
    match op {
        BinaryOp::Multiply | BinaryOp::MultiplyChecked | BinaryOp::Divide | BinaryOp::Modulo => {
            Precedence::Multiplicative
        }
        BinaryOp::Add | BinaryOp::AddChecked | BinaryOp::Subtract | BinaryOp::SubtractChecked => {
            Precedence::Additive
        }
        BinaryOp::LeftShift | BinaryOp::RightShift => Precedence::Shift,
        BinaryOp::LessThan
        | BinaryOp::LessThanOrEqual
        | BinaryOp::GreaterThan
        | BinaryOp::GreaterThanOrEqual => Precedence::Relational,
        BinaryOp::Equal | BinaryOp::NotEqual => Precedence::Equality,
        BinaryOp::And => Precedence::LogicalAnd,
        BinaryOp::ExclusiveOr => Precedence::LogicalXor,
        BinaryOp::Or => Precedence::LogicalOr,
        BinaryOp::AndAlso => Precedence::ConditionalAnd,
        BinaryOp::OrElse => Precedence::ConditionalOr,
        BinaryOp::Coalesce => Precedence::Coalesce,
        // Rendered as a Math.Pow call.
        BinaryOp::Power => Precedence::Primary,
    }
}

/// The precedence of `expr` as it will be rendered.
pub fn precedence(expr: &Expr) -> Precedence {
    match expr {
        Expr::Binary { method: Some(m), .. } if m.is_string_concat() => Precedence::Additive,
        Expr::Binary { op, .. } => binary_precedence(*op),
        Expr::Call { object: None, method, .. } if method.is_string_concat() => Precedence::Additive,
        Expr::Call { object: Some(_), method, arguments } if method.name.starts_with("set_") && arguments.len() == 1 => {
            Precedence::Assignment
        }
        Expr::Unary { op, .. } => match op {
            UnaryOp::PostIncrementAssign | UnaryOp::PostDecrementAssign => Precedence::Primary,
            UnaryOp::Increment | UnaryOp::Decrement => Precedence::Additive,
            _ => Precedence::Unary,
        },
        Expr::Convert { method: Some(m), operand, .. } if m.name == "op_Implicit" => precedence(operand),
        Expr::Convert { op: ConvertOp::TypeAs, .. } => Precedence::Relational,
        Expr::Convert { .. } => Precedence::Unary,
        Expr::TypeTest { op: TypeTestOp::Is, .. } => Precedence::Relational,
        Expr::TypeTest { op: TypeTestOp::Equal, .. } => Precedence::Equality,
        Expr::Assign { .. } | Expr::Lambda { .. } | Expr::Throw { .. } => Precedence::Assignment,
        Expr::Quote { operand } => precedence(operand),
        Expr::Conditional { .. } => Precedence::Conditional,
        Expr::Dynamic { operation, .. } => match operation {
            DynamicOp::SetMember { .. } | DynamicOp::SetIndex => Precedence::Assignment,
            DynamicOp::Convert { .. } => Precedence::Unary,
            _ => Precedence::Primary,
        },
        Expr::Constant { value } if is_negative(value) => Precedence::Unary,
        _ => Precedence::Primary,
    }
}

fn is_negative(value: &Literal) -> bool {
    match value {
        Literal::Int(n) | Literal::Long(n) => *n < 0,
        Literal::Float(v) => v.is_sign_negative(),
        Literal::Double(v) => v.is_sign_negative(),
        Literal::Decimal(s) => s.starts_with('-'),
        _ => false,
    }
}

fn is_bitwise(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::And | BinaryOp::Or | BinaryOp::ExclusiveOr)
}

fn is_shift(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::LeftShift | BinaryOp::RightShift)
}

/// Whether `operand`, rendered on `side` of a `parent` operator, must be
/// wrapped to read back with the same meaning.
pub fn needs_parentheses(operand: &Expr, parent: BinaryOp, side: Side) -> bool {
    let inner = precedence(operand);
    let outer = binary_precedence(parent);
    if inner < outer {
        return true;
    }
    if inner == outer {
        // ?? groups to the right, everything else to the left.
        return match parent {
            BinaryOp::Coalesce => side == Side::Left,
            _ => side == Side::Right,
        };
    }
    // Tighter-binding operands that still read ambiguously.
    let Expr::Binary { op: inner_op, method, .. } = operand else {
        return false;
    };
    if method.as_ref().is_some_and(|m| m.is_string_concat()) {
        return is_shift(parent);
    }
    match (*inner_op, parent) {
        (BinaryOp::AndAlso, BinaryOp::OrElse) => true,
        (a, b) if is_bitwise(a) && is_bitwise(b) => a != b,
        (a, b) if is_shift(b) => matches!(binary_precedence(a), Precedence::Additive | Precedence::Multiplicative),
        (BinaryOp::Coalesce, _) | (_, BinaryOp::Coalesce) => inner != Precedence::Primary,
        _ => false,
    }
}

/// Whether the whole of `text` is enclosed by one pair of parentheses.
/// String and character literals are skipped while matching.
pub fn is_parenthesized(text: &str) -> bool {
    if !text.starts_with('(') || !text.ends_with(')') {
        return false;
    }
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let last = text.len() - 1;
    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == last;
                }
            }
            _ => {}
        }
    }
    false
}

/// `(text)`, unless `text` is already wrapped.
pub fn wrap(text: String) -> String {
    if is_parenthesized(&text) {
        text
    } else {
        format!("({text})")
    }
}

pub fn wrap_if(text: String, condition: bool) -> String {
    if condition { wrap(text) } else { text }
}
