mod common;
use common::{params, render};

use readable_expr::Expr;
use readable_expr::tree::build::*;
use readable_expr::tree::{BinaryOp, TypeRef};

#[test]
fn single_parameter_is_bare() {
    let mut b = TreeBuilder::new();
    let [x] = params(&mut b, [("x", TypeRef::int())]);
    let expr = lambda(vec![x.clone()], binary(BinaryOp::Multiply, param_ref(&x), int(2)), TypeRef::int());
    assert_eq!(render(&expr), "x => x * 2");
}

#[test]
fn no_and_many_parameters_are_parenthesized() {
    let mut b = TreeBuilder::new();
    let [x, y] = params(&mut b, [("x", TypeRef::int()), ("y", TypeRef::int())]);
    let none = lambda(vec![], int(42), TypeRef::int());
    assert_eq!(render(&none), "() => 42");

    let two = lambda(vec![x.clone(), y.clone()], binary(BinaryOp::Add, param_ref(&x), param_ref(&y)), TypeRef::int());
    assert_eq!(render(&two), "(x, y) => x + y");
}

#[test]
fn by_ref_parameters_are_typed() {
    let mut b = TreeBuilder::new();
    let counter = b.ref_param("counter", TypeRef::int());
    let step = b.param("step", TypeRef::int());
    let body = Expr::Assign {
        op: readable_expr::tree::AssignOp::AddAssign,
        target: Box::new(param_ref(&counter)),
        value: Box::new(param_ref(&step)),
    };
    let expr = lambda(vec![counter, step], body, TypeRef::void());
    assert_eq!(render(&expr), "(ref int counter, int step) => counter += step");
}

#[test]
fn single_statement_block_body_collapses() {
    let mut b = TreeBuilder::new();
    let [x] = params(&mut b, [("x", TypeRef::int())]);
    let body = block(vec![], vec![binary(BinaryOp::Add, param_ref(&x), int(1))], TypeRef::int());
    let expr = lambda(vec![x], body, TypeRef::int());
    assert_eq!(render(&expr), "x => x + 1");
}

#[test]
fn multi_statement_body_is_braced_with_return() {
    let mut b = TreeBuilder::new();
    let [x] = params(&mut b, [("x", TypeRef::int())]);
    let doubled = b.param("doubled", TypeRef::int());
    let body = block(
        vec![doubled.clone()],
        vec![
            assign(param_ref(&doubled), binary(BinaryOp::Multiply, param_ref(&x), int(2))),
            binary(BinaryOp::Add, param_ref(&doubled), int(1)),
        ],
        TypeRef::int(),
    );
    let expr = lambda(vec![x], body, TypeRef::int());
    insta::assert_snapshot!(render(&expr), @r"
    x =>
    {
        var doubled = x * 2;
        return doubled + 1;
    }
    ");
}

#[test]
fn void_lambda_has_no_return() {
    let mut b = TreeBuilder::new();
    let [message] = params(&mut b, [("message", TypeRef::string())]);
    let write = |arg: Expr| static_call(static_method("WriteLine", TypeRef::named("Console")), vec![arg]);
    let body = block(vec![], vec![write(param_ref(&message)), write(string("done"))], TypeRef::void());
    let expr = lambda(vec![message], body, TypeRef::void());
    insta::assert_snapshot!(render(&expr), @r#"
    message =>
    {
        Console.WriteLine(message);
        Console.WriteLine("done");
    }
    "#);
}

#[test]
fn quoted_lambda_renders_the_lambda() {
    let mut b = TreeBuilder::new();
    let [x] = params(&mut b, [("x", TypeRef::int())]);
    let inner = lambda(vec![x.clone()], param_ref(&x), TypeRef::int());
    let expr = Expr::Quote { operand: Box::new(inner) };
    assert_eq!(render(&expr), "x => x");
}

#[test]
fn reserved_parameter_names_are_escaped() {
    let mut b = TreeBuilder::new();
    let [class, value] = params(&mut b, [("class", TypeRef::string()), ("value", TypeRef::string())]);
    let expr = lambda(
        vec![class.clone(), value.clone()],
        concat_add(param_ref(&class), param_ref(&value)),
        TypeRef::string(),
    );
    assert_eq!(render(&expr), "(@class, value) => @class + value");
}

#[test]
fn lambda_invoked_in_place_is_wrapped() {
    let mut b = TreeBuilder::new();
    let [x] = params(&mut b, [("x", TypeRef::int())]);
    let square = lambda(vec![x.clone()], binary(BinaryOp::Multiply, param_ref(&x), param_ref(&x)), TypeRef::int());
    let expr = Expr::Invoke { target: Box::new(square), arguments: vec![int(3)] };
    assert_eq!(render(&expr), "(x => x * x).Invoke(3)");
}
