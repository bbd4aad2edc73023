//! Variable reference queries over a subtree.

use crate::tree::{CatchBlock, Expr, ParamId};
use crate::visit::{Visitor, children, walk_expr};

/// Whether a catch clause's variable is used anywhere other than as the
/// direct operand of a rethrow. The filter is searched before the body.
pub fn is_variable_used(handler: &CatchBlock) -> bool {
    let Some(variable) = &handler.variable else {
        return false;
    };
    if let Some(filter) = &handler.filter {
        if find_usage(filter, variable.id, false) {
            return true;
        }
    }
    find_usage(&handler.body, variable.id, false)
}

/// `inside_rethrow` is set only while looking at the direct operand of a
/// throw, where a bare reference to `target` does not count.
///
/// Lambda bodies, nested catch bodies and fault or finally blocks render
/// with a different rethrow target, so every reference inside them counts.
pub fn find_usage(expr: &Expr, target: ParamId, inside_rethrow: bool) -> bool {
    match expr {
        Expr::Parameter(p) => !inside_rethrow && p.id == target,
        Expr::Throw { operand: Some(operand) } => find_usage(operand, target, true),
        Expr::RuntimeVariables { variables } => variables.iter().any(|v| v.id == target),
        Expr::Lambda { body, .. } => references(body, target),
        Expr::Try { body, handlers, fault, finally } => {
            find_usage(body, target, false)
                || handlers.iter().any(|h| {
                    h.filter.as_ref().is_some_and(|f| find_usage(f, target, false)) || references(&h.body, target)
                })
                || fault.as_deref().is_some_and(|f| references(f, target))
                || finally.as_deref().is_some_and(|f| references(f, target))
        }
        _ => children(expr).into_iter().any(|child| find_usage(child, target, false)),
    }
}

struct ReferenceFinder {
    target: ParamId,
    found: bool,
}

impl Visitor for ReferenceFinder {
    fn visit_expr(&mut self, expr: &Expr) {
        if self.found {
            return;
        }
        match expr {
            Expr::Parameter(p) if p.id == self.target => self.found = true,
            Expr::RuntimeVariables { variables } if variables.iter().any(|v| v.id == self.target) => {
                self.found = true
            }
            _ => walk_expr(self, expr),
        }
    }
}

/// Whether `expr` mentions the variable `id` at all.
pub fn references(expr: &Expr, id: ParamId) -> bool {
    let mut finder = ReferenceFinder { target: id, found: false };
    finder.visit_expr(expr);
    finder.found
}
