//! Read-only tree traversal.
//!
//! [`children`] enumerates the direct expression children of a node in
//! source order. Declarations (block variables, lambda parameters, catch
//! variables, runtime-variable groups) are not children.
//!
//! Implement [`Visitor`] for an analysis pass, overriding only `visit_expr`,
//! and call [`walk_expr`] inside the override to continue the default
//! recursion. Omit the walk call to prune traversal at that node.

use crate::tree::{Expr, MemberBinding};

pub trait Visitor: Sized {
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_expr<V: Visitor>(v: &mut V, expr: &Expr) {
    for child in children(expr) {
        v.visit_expr(child);
    }
}

pub fn children(expr: &Expr) -> Vec<&Expr> {
    let mut out = Vec::new();
    match expr {
        Expr::Binary { left, right, .. } => {
            out.push(left.as_ref());
            out.push(right.as_ref());
        }
        Expr::Unary { operand, .. }
        | Expr::Convert { operand, .. }
        | Expr::Quote { operand }
        | Expr::TypeTest { operand, .. } => out.push(operand.as_ref()),
        Expr::Throw { operand } => out.extend(operand.as_deref()),
        Expr::Assign { target, value, .. } => {
            out.push(target.as_ref());
            out.push(value.as_ref());
        }
        Expr::Conditional { test, if_true, if_false, .. } => {
            out.push(test.as_ref());
            out.push(if_true.as_ref());
            out.push(if_false.as_ref());
        }
        Expr::Lambda { body, .. } | Expr::Loop { body } => out.push(body.as_ref()),
        Expr::Call { object, arguments, .. } => {
            out.extend(object.as_deref());
            out.extend(arguments);
        }
        Expr::Invoke { target, arguments } => {
            out.push(target.as_ref());
            out.extend(arguments);
        }
        Expr::MemberAccess { object, .. } => out.extend(object.as_deref()),
        Expr::ArrayLength { array } => out.push(array.as_ref()),
        Expr::Index { object, arguments } => {
            out.push(object.as_ref());
            out.extend(arguments);
        }
        Expr::New(new) => out.extend(&new.arguments),
        Expr::NewArray { expressions, .. } => out.extend(expressions),
        Expr::ListInit { new, initializers } => {
            out.extend(&new.arguments);
            for init in initializers {
                out.extend(&init.arguments);
            }
        }
        Expr::MemberInit { new, bindings } => {
            out.extend(&new.arguments);
            collect_bindings(bindings, &mut out);
        }
        Expr::Switch { value, cases, default_body } => {
            out.push(value.as_ref());
            for case in cases {
                out.extend(&case.test_values);
                out.push(&case.body);
            }
            out.extend(default_body.as_deref());
        }
        Expr::Try { body, handlers, fault, finally } => {
            out.push(body.as_ref());
            for handler in handlers {
                out.extend(handler.filter.as_ref());
                out.push(&handler.body);
            }
            out.extend(fault.as_deref());
            out.extend(finally.as_deref());
        }
        Expr::Goto { value, .. } => out.extend(value.as_deref()),
        Expr::Label { default_value, .. } => out.extend(default_value.as_deref()),
        Expr::Block { expressions, .. } => out.extend(expressions),
        Expr::Dynamic { arguments, .. } => out.extend(arguments),
        Expr::Constant { .. }
        | Expr::Default { .. }
        | Expr::Parameter(_)
        | Expr::RuntimeVariables { .. }
        | Expr::DebugInfo { .. }
        | Expr::Extension { .. } => {}
    }
    out
}

fn collect_bindings<'a>(bindings: &'a [MemberBinding], out: &mut Vec<&'a Expr>) {
    for binding in bindings {
        match binding {
            MemberBinding::Assignment { value, .. } => out.push(value),
            MemberBinding::MemberInit { bindings, .. } => collect_bindings(bindings, out),
            MemberBinding::List { initializers, .. } => {
                for init in initializers {
                    out.extend(&init.arguments);
                }
            }
        }
    }
}

struct NodeCounter {
    count: usize,
}

impl Visitor for NodeCounter {
    fn visit_expr(&mut self, expr: &Expr) {
        self.count += 1;
        walk_expr(self, expr);
    }
}

/// Total number of nodes reachable from `root`, including `root`.
pub fn count_nodes(root: &Expr) -> usize {
    let mut counter = NodeCounter { count: 0 };
    counter.visit_expr(root);
    counter.count
}
