//! Terse constructors for assembling trees in tests, benches and adapters.

use super::*;

/// Hands out fresh parameter identities.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    next_id: u32,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(&mut self, name: &str, ty: TypeRef) -> Parameter {
        self.next_id += 1;
        Parameter { id: ParamId(self.next_id), name: name.to_string(), ty, by_ref: false }
    }

    pub fn ref_param(&mut self, name: &str, ty: TypeRef) -> Parameter {
        Parameter { by_ref: true, ..self.param(name, ty) }
    }
}

pub fn param_ref(p: &Parameter) -> Expr {
    Expr::Parameter(p.clone())
}

pub fn constant(value: Literal) -> Expr {
    Expr::Constant { value }
}

pub fn string(s: &str) -> Expr {
    constant(Literal::String(s.to_string()))
}

pub fn int(n: i64) -> Expr {
    constant(Literal::Int(n))
}

pub fn boolean(b: bool) -> Expr {
    constant(Literal::Bool(b))
}

pub fn null() -> Expr {
    constant(Literal::Null)
}

pub fn default_of(ty: TypeRef) -> Expr {
    Expr::Default { ty }
}

pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary { op, left: Box::new(left), right: Box::new(right), method: None }
}

pub fn string_concat_method() -> MethodRef {
    MethodRef {
        name: "Concat".to_string(),
        declaring_type: TypeRef::string(),
        type_args: Vec::new(),
        is_static: true,
        is_extension: false,
    }
}

/// `left + right` as the host compiles string addition.
pub fn concat_add(left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op: BinaryOp::Add,
        left: Box::new(left),
        right: Box::new(right),
        method: Some(string_concat_method()),
    }
}

/// An explicit `string.Concat(…)` call.
pub fn string_concat(arguments: Vec<Expr>) -> Expr {
    Expr::Call { object: None, method: string_concat_method(), arguments }
}

pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
    Expr::Unary { op, operand: Box::new(operand) }
}

pub fn convert(operand: Expr, ty: TypeRef) -> Expr {
    Expr::Convert { op: ConvertOp::Convert, operand: Box::new(operand), ty, method: None }
}

pub fn type_as(operand: Expr, ty: TypeRef) -> Expr {
    Expr::Convert { op: ConvertOp::TypeAs, operand: Box::new(operand), ty, method: None }
}

pub fn method(name: &str, declaring_type: TypeRef) -> MethodRef {
    MethodRef {
        name: name.to_string(),
        declaring_type,
        type_args: Vec::new(),
        is_static: false,
        is_extension: false,
    }
}

pub fn static_method(name: &str, declaring_type: TypeRef) -> MethodRef {
    MethodRef { is_static: true, ..method(name, declaring_type) }
}

pub fn call(object: Expr, method: MethodRef, arguments: Vec<Expr>) -> Expr {
    Expr::Call { object: Some(Box::new(object)), method, arguments }
}

pub fn static_call(method: MethodRef, arguments: Vec<Expr>) -> Expr {
    Expr::Call { object: None, method, arguments }
}

pub fn member(object: Expr, declaring_type: TypeRef, name: &str) -> Expr {
    Expr::MemberAccess {
        object: Some(Box::new(object)),
        declaring_type,
        member: name.to_string(),
    }
}

pub fn conditional(test: Expr, if_true: Expr, if_false: Expr, ty: TypeRef) -> Expr {
    Expr::Conditional {
        test: Box::new(test),
        if_true: Box::new(if_true),
        if_false: Box::new(if_false),
        ty,
    }
}

pub fn lambda(parameters: Vec<Parameter>, body: Expr, return_type: TypeRef) -> Expr {
    Expr::Lambda { parameters, body: Box::new(body), return_type }
}

pub fn block(variables: Vec<Parameter>, expressions: Vec<Expr>, ty: TypeRef) -> Expr {
    Expr::Block { variables, expressions, ty }
}

pub fn assign(target: Expr, value: Expr) -> Expr {
    Expr::Assign { op: AssignOp::Assign, target: Box::new(target), value: Box::new(value) }
}

pub fn throw(operand: Expr) -> Expr {
    Expr::Throw { operand: Some(Box::new(operand)) }
}

pub fn rethrow() -> Expr {
    Expr::Throw { operand: None }
}

pub fn goto(kind: GotoKind, label: Option<&str>, value: Option<Expr>) -> Expr {
    Expr::Goto {
        kind,
        target: LabelTarget { name: label.map(str::to_string) },
        value: value.map(Box::new),
    }
}

pub fn new_object(ty: TypeRef, arguments: Vec<Expr>) -> NewExpr {
    NewExpr { ty, arguments }
}

pub fn catch(test: TypeRef, variable: Option<Parameter>, body: Expr) -> CatchBlock {
    CatchBlock { test, variable, filter: None, body }
}

pub fn case(test_values: Vec<Expr>, body: Expr) -> SwitchCase {
    SwitchCase { test_values, body }
}
