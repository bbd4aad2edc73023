#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use readable_expr::tree::build::*;
use readable_expr::tree::{BinaryOp, GotoKind, Parameter, TypeRef, UnaryOp};
use readable_expr::{Expr, render_readable};

/// Minimal fuzzing-friendly tree representation
#[derive(Arbitrary, Debug)]
enum FuzzNode {
    Var(u8),
    Int(i32),
    Text(String),
    Add(Box<FuzzNode>, Box<FuzzNode>),
    Multiply(Box<FuzzNode>, Box<FuzzNode>),
    Concat(Box<FuzzNode>, Box<FuzzNode>),
    Negate(Box<FuzzNode>),
    Not(Box<FuzzNode>),
    Ternary(Box<FuzzNode>, Box<FuzzNode>, Box<FuzzNode>),
    If(Box<FuzzNode>, Box<FuzzNode>),
    Assign(u8, Box<FuzzNode>),
    Call(Box<FuzzNode>, Vec<FuzzNode>),
    Block(Vec<FuzzNode>),
    Lambda(Box<FuzzNode>),
    Loop(Box<FuzzNode>),
    Break,
    Throw(Option<Box<FuzzNode>>),
    Try(Box<FuzzNode>, Option<Box<FuzzNode>>),
}

fn pick(vars: &[Parameter], index: u8) -> &Parameter {
    &vars[index as usize % vars.len()]
}

impl FuzzNode {
    fn to_expr(&self, vars: &[Parameter]) -> Expr {
        match self {
            FuzzNode::Var(i) => param_ref(pick(vars, *i)),
            FuzzNode::Int(n) => int(i64::from(*n)),
            FuzzNode::Text(s) => string(s),
            FuzzNode::Add(l, r) => binary(BinaryOp::Add, l.to_expr(vars), r.to_expr(vars)),
            FuzzNode::Multiply(l, r) => binary(BinaryOp::Multiply, l.to_expr(vars), r.to_expr(vars)),
            FuzzNode::Concat(l, r) => concat_add(l.to_expr(vars), r.to_expr(vars)),
            FuzzNode::Negate(e) => unary(UnaryOp::Negate, e.to_expr(vars)),
            FuzzNode::Not(e) => unary(UnaryOp::Not, e.to_expr(vars)),
            FuzzNode::Ternary(t, a, b) => {
                conditional(t.to_expr(vars), a.to_expr(vars), b.to_expr(vars), TypeRef::int())
            }
            FuzzNode::If(t, a) => {
                conditional(t.to_expr(vars), a.to_expr(vars), default_of(TypeRef::void()), TypeRef::void())
            }
            FuzzNode::Assign(i, value) => assign(param_ref(pick(vars, *i)), value.to_expr(vars)),
            FuzzNode::Call(target, args) => call(
                target.to_expr(vars),
                method("Apply", TypeRef::named("Widget")),
                args.iter().map(|a| a.to_expr(vars)).collect(),
            ),
            FuzzNode::Block(items) => block(
                vars.to_vec(),
                items.iter().map(|i| i.to_expr(vars)).collect(),
                TypeRef::void(),
            ),
            FuzzNode::Lambda(body) => lambda(vars.to_vec(), body.to_expr(vars), TypeRef::int()),
            FuzzNode::Loop(body) => Expr::Loop { body: Box::new(body.to_expr(vars)) },
            FuzzNode::Break => goto(GotoKind::Break, None, None),
            FuzzNode::Throw(operand) => match operand {
                Some(operand) => throw(operand.to_expr(vars)),
                None => rethrow(),
            },
            FuzzNode::Try(body, handler) => Expr::Try {
                body: Box::new(body.to_expr(vars)),
                handlers: handler
                    .iter()
                    .map(|h| catch(TypeRef::exception(), Some(vars[0].clone()), h.to_expr(vars)))
                    .collect(),
                fault: None,
                finally: None,
            },
        }
    }
}

fuzz_target!(|node: FuzzNode| {
    let mut b = TreeBuilder::new();
    let vars = vec![b.param("x", TypeRef::int()), b.param("ex", TypeRef::exception())];
    // Malformed trees (an empty block, say) are errors, never panics
    let _ = render_readable(&node.to_expr(&vars));
});
