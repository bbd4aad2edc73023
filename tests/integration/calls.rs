mod common;
use common::{params, render};

use readable_expr::tree::build::*;
use readable_expr::tree::{BinaryOp, DynamicOp, ExprKind, MethodRef, TypeRef};
use readable_expr::{Expr, render_readable};
use readable_expr::diagnostics::RenderError;

fn list_of_strings() -> TypeRef {
    TypeRef::generic("System.Collections.Generic.List`1", vec![TypeRef::string()])
}

#[test]
fn instance_and_static_calls() {
    let mut b = TreeBuilder::new();
    let [names] = params(&mut b, [("names", list_of_strings())]);
    let add = call(param_ref(&names), method("Add", list_of_strings()), vec![string("Ann")]);
    assert_eq!(render(&add), r#"names.Add("Ann")"#);

    let write = static_call(static_method("WriteLine", TypeRef::named("System.Console")), vec![int(1)]);
    assert_eq!(render(&write), "Console.WriteLine(1)");
}

#[test]
fn generic_method_arguments() {
    let mut b = TreeBuilder::new();
    let [items] = params(&mut b, [("items", list_of_strings())]);
    let cast = MethodRef {
        type_args: vec![TypeRef::object()],
        is_static: true,
        is_extension: true,
        ..method("Cast", TypeRef::named("System.Linq.Enumerable"))
    };
    let expr = static_call(cast, vec![param_ref(&items)]);
    assert_eq!(render(&expr), "items.Cast<object>()");
}

#[test]
fn extension_method_uses_first_argument_as_receiver() {
    let mut b = TreeBuilder::new();
    let [items] = params(&mut b, [("items", list_of_strings())]);
    let take = MethodRef { is_static: true, is_extension: true, ..method("Take", TypeRef::named("Enumerable")) };
    let expr = static_call(take, vec![param_ref(&items), int(3)]);
    assert_eq!(render(&expr), "items.Take(3)");
}

#[test]
fn extension_method_without_receiver_is_malformed() {
    let take = MethodRef { is_static: true, is_extension: true, ..method("Take", TypeRef::named("Enumerable")) };
    let err = render_readable(&static_call(take, vec![])).unwrap_err();
    assert!(matches!(err, RenderError::MalformedTree { kind: ExprKind::Call, .. }), "{err}");
}

#[test]
fn property_accessors_and_indexers() {
    let mut b = TreeBuilder::new();
    let [names, person] = params(&mut b, [("names", list_of_strings()), ("person", TypeRef::named("Person"))]);

    let count = call(param_ref(&names), method("get_Count", list_of_strings()), vec![]);
    assert_eq!(render(&count), "names.Count");

    let item = call(param_ref(&names), method("get_Item", list_of_strings()), vec![int(0)]);
    assert_eq!(render(&item), "names[0]");

    let set = call(param_ref(&person), method("set_Name", TypeRef::named("Person")), vec![string("Bo")]);
    assert_eq!(render(&set), r#"person.Name = "Bo""#);
}

#[test]
fn receivers_are_wrapped_when_needed() {
    let mut b = TreeBuilder::new();
    let [a, c] = params(&mut b, [("a", TypeRef::int()), ("c", TypeRef::int())]);
    let sum = binary(BinaryOp::Add, param_ref(&a), param_ref(&c));
    let expr = call(sum, method("ToString", TypeRef::int()), vec![]);
    assert_eq!(render(&expr), "(a + c).ToString()");
}

#[test]
fn invocation_member_access_and_length() {
    let mut b = TreeBuilder::new();
    let [callback, arr, person] = params(
        &mut b,
        [
            ("callback", TypeRef::named("Action")),
            ("arr", TypeRef::array_of(TypeRef::int())),
            ("person", TypeRef::named("Person")),
        ],
    );
    let invoke = Expr::Invoke { target: Box::new(param_ref(&callback)), arguments: vec![int(1), int(2)] };
    assert_eq!(render(&invoke), "callback.Invoke(1, 2)");

    let length = Expr::ArrayLength { array: Box::new(param_ref(&arr)) };
    assert_eq!(render(&length), "arr.Length");

    assert_eq!(render(&member(param_ref(&person), TypeRef::named("Person"), "Name")), "person.Name");

    let now = Expr::MemberAccess { object: None, declaring_type: TypeRef::named("System.DateTime"), member: "Now".into() };
    assert_eq!(render(&now), "DateTime.Now");
}

#[test]
fn index_access() {
    let mut b = TreeBuilder::new();
    let [grid] = params(&mut b, [("grid", TypeRef { array_rank: 2, ..TypeRef::int() })]);
    let expr = Expr::Index { object: Box::new(param_ref(&grid)), arguments: vec![int(1), int(2)] };
    assert_eq!(render(&expr), "grid[1, 2]");

    let empty = Expr::Index { object: Box::new(param_ref(&grid)), arguments: vec![] };
    assert!(matches!(render_readable(&empty), Err(RenderError::MalformedTree { kind: ExprKind::Index, .. })));
}

#[test]
fn dynamic_operations() {
    let mut b = TreeBuilder::new();
    let [d] = params(&mut b, [("d", TypeRef::object())]);
    let dynamic = |operation, arguments| Expr::Dynamic { operation, arguments };

    let get = dynamic(DynamicOp::GetMember { name: "Size".into() }, vec![param_ref(&d)]);
    assert_eq!(render(&get), "d.Size");

    let set = dynamic(DynamicOp::SetMember { name: "Size".into() }, vec![param_ref(&d), int(3)]);
    assert_eq!(render(&set), "d.Size = 3");

    let invoke = dynamic(
        DynamicOp::InvokeMember { name: "Resize".into(), type_args: vec![] },
        vec![param_ref(&d), int(2), int(4)],
    );
    assert_eq!(render(&invoke), "d.Resize(2, 4)");

    let get_index = dynamic(DynamicOp::GetIndex, vec![param_ref(&d), string("key")]);
    assert_eq!(render(&get_index), r#"d["key"]"#);

    let set_index = dynamic(DynamicOp::SetIndex, vec![param_ref(&d), int(0), string("v")]);
    assert_eq!(render(&set_index), r#"d[0] = "v""#);

    let convert = dynamic(DynamicOp::Convert { ty: TypeRef::int() }, vec![param_ref(&d)]);
    assert_eq!(render(&convert), "(int)d");
}

#[test]
fn dynamic_operation_without_enough_arguments_is_malformed() {
    let expr = Expr::Dynamic { operation: DynamicOp::SetMember { name: "Size".into() }, arguments: vec![int(1)] };
    let err = render_readable(&expr).unwrap_err();
    assert_eq!(err.to_string(), "Malformed Dynamic node: dynamic set member needs at least 2 argument(s), found 1");
}
