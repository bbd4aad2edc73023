mod common;
use common::{params, render};

use readable_expr::diagnostics::RenderError;
use readable_expr::tree::build::*;
use readable_expr::tree::{AssignOp, BinaryOp, GotoKind, LabelTarget, TypeRef, UnaryOp};
use readable_expr::{Expr, ExprKind, render_readable};

fn write_line(arg: Expr) -> Expr {
    static_call(static_method("WriteLine", TypeRef::named("System.Console")), vec![arg])
}

#[test]
fn first_assignment_declares_with_var() {
    let mut b = TreeBuilder::new();
    let [total] = params(&mut b, [("total", TypeRef::int())]);
    let expr = block(
        vec![total.clone()],
        vec![
            assign(param_ref(&total), int(0)),
            Expr::Assign { op: AssignOp::AddAssign, target: Box::new(param_ref(&total)), value: Box::new(int(5)) },
            write_line(param_ref(&total)),
        ],
        TypeRef::void(),
    );
    insta::assert_snapshot!(render(&expr), @r"
    var total = 0;
    total += 5;
    Console.WriteLine(total);
    ");
}

#[test]
fn variables_used_before_assignment_are_declared_up_front() {
    let mut b = TreeBuilder::new();
    let [count, x] = params(&mut b, [("count", TypeRef::int()), ("x", TypeRef::long())]);
    let expr = block(
        vec![count.clone(), x.clone()],
        vec![
            unary(UnaryOp::PostIncrementAssign, param_ref(&count)),
            assign(param_ref(&x), binary(BinaryOp::Add, param_ref(&x), int(1))),
        ],
        TypeRef::void(),
    );
    insta::assert_snapshot!(render(&expr), @r"
    int count;
    long x;
    count++;
    x = x + 1;
    ");
}

#[test]
fn nested_blocks_are_flattened() {
    let mut b = TreeBuilder::new();
    let [x] = params(&mut b, [("x", TypeRef::int())]);
    let inner = block(vec![x.clone()], vec![assign(param_ref(&x), int(1)), write_line(param_ref(&x))], TypeRef::void());
    let expr = block(vec![], vec![write_line(string("start")), inner], TypeRef::void());
    insta::assert_snapshot!(render(&expr), @r#"
    Console.WriteLine("start");
    var x = 1;
    Console.WriteLine(x);
    "#);
}

#[test]
fn loop_with_break() {
    let mut b = TreeBuilder::new();
    let [x] = params(&mut b, [("x", TypeRef::int())]);
    let exit = conditional(
        binary(BinaryOp::GreaterThan, param_ref(&x), int(10)),
        goto(GotoKind::Break, None, None),
        default_of(TypeRef::void()),
        TypeRef::void(),
    );
    let body = block(vec![], vec![exit, unary(UnaryOp::PreIncrementAssign, param_ref(&x))], TypeRef::void());
    let expr = Expr::Loop { body: Box::new(body) };
    insta::assert_snapshot!(render(&expr), @r"
    while (true)
    {
        if (x > 10)
        {
            break;
        }
        ++x;
    }
    ");
}

#[test]
fn goto_and_labels() {
    let expr = block(
        vec![],
        vec![
            goto(GotoKind::Goto, Some("end"), None),
            write_line(string("skipped")),
            Expr::Label { target: LabelTarget { name: Some("end".into()) }, default_value: None },
            goto(GotoKind::Return, None, Some(int(1))),
        ],
        TypeRef::int(),
    );
    insta::assert_snapshot!(render(&expr), @r#"
    goto end;
    Console.WriteLine("skipped");
    end:
    return 1;
    "#);
}

#[test]
fn goto_without_a_label_name_is_malformed() {
    let err = render_readable(&goto(GotoKind::Goto, None, None)).unwrap_err();
    assert!(matches!(err, RenderError::MalformedTree { kind: ExprKind::Goto, .. }), "{err}");
}

#[test]
fn unnamed_label_renders_its_default_value() {
    let expr = Expr::Label { target: LabelTarget { name: None }, default_value: Some(Box::new(int(7))) };
    assert_eq!(render(&expr), "7");
}

#[test]
fn void_defaults_are_skipped() {
    let expr = block(
        vec![],
        vec![write_line(int(1)), default_of(TypeRef::void()), write_line(int(2))],
        TypeRef::void(),
    );
    assert_eq!(render(&expr), "Console.WriteLine(1);\nConsole.WriteLine(2);");
    assert_eq!(render(&default_of(TypeRef::int())), "default(int)");
}

#[test]
fn debug_info_renders_as_a_comment() {
    let marker = Expr::DebugInfo {
        document: "Program.cs".into(),
        start_line: 3,
        start_column: 5,
        end_line: 3,
        end_column: 20,
        is_clear: false,
    };
    let clear = Expr::DebugInfo {
        document: "Program.cs".into(),
        start_line: 0,
        start_column: 0,
        end_line: 0,
        end_column: 0,
        is_clear: true,
    };
    let expr = block(vec![], vec![marker, write_line(int(1)), clear], TypeRef::void());
    insta::assert_snapshot!(render(&expr), @r"
    // Debug to Program.cs, 3, 5 -> 3, 20
    Console.WriteLine(1);
    // Clear debug info from Program.cs
    ");
}

#[test]
fn runtime_variables() {
    let mut b = TreeBuilder::new();
    let [a, c] = params(&mut b, [("a", TypeRef::int()), ("c", TypeRef::string())]);
    let expr = Expr::RuntimeVariables { variables: vec![a, c] };
    assert_eq!(render(&expr), "RuntimeVariables(a, c)");
}

#[test]
fn empty_block_is_malformed() {
    let err = render_readable(&block(vec![], vec![], TypeRef::void())).unwrap_err();
    assert!(matches!(err, RenderError::MalformedTree { kind: ExprKind::Block, .. }), "{err}");
}
