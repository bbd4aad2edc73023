mod common;
use common::{params, render};

use readable_expr::tree::build::*;
use readable_expr::tree::{BinaryOp, TypeRef};

#[test]
fn two_argument_concatenation() {
    let mut b = TreeBuilder::new();
    let [str1, str2] = params(&mut b, [("str1", TypeRef::string()), ("str2", TypeRef::string())]);
    let expr = concat_add(param_ref(&str1), param_ref(&str2));
    assert_eq!(render(&expr), "str1 + str2");
}

#[test]
fn three_argument_concatenation() {
    let mut b = TreeBuilder::new();
    let [str1, str2, str3] = params(
        &mut b,
        [("str1", TypeRef::string()), ("str2", TypeRef::string()), ("str3", TypeRef::string())],
    );
    let expr = concat_add(concat_add(param_ref(&str1), param_ref(&str2)), param_ref(&str3));
    assert_eq!(render(&expr), "str1 + str2 + str3");
}

#[test]
fn mixed_type_concatenation_drops_boxing() {
    let mut b = TreeBuilder::new();
    let [str1, i] = params(&mut b, [("str1", TypeRef::string()), ("i", TypeRef::int())]);
    let expr = concat_add(convert(param_ref(&i), TypeRef::object()), param_ref(&str1));
    assert_eq!(render(&expr), "i + str1");
}

#[test]
fn explicit_parameterless_to_string_is_dropped() {
    let mut b = TreeBuilder::new();
    let [str1, i] = params(&mut b, [("str1", TypeRef::string()), ("i", TypeRef::int())]);
    let to_string = call(param_ref(&i), method("ToString", TypeRef::int()), vec![]);
    let expr = concat_add(to_string, param_ref(&str1));
    assert_eq!(render(&expr), "i + str1");
}

#[test]
fn to_string_with_arguments_is_kept() {
    let mut b = TreeBuilder::new();
    let [str1, i] = params(&mut b, [("str1", TypeRef::string()), ("i", TypeRef::int())]);
    let to_string = call(param_ref(&i), method("ToString", TypeRef::int()), vec![string("x")]);
    let expr = concat_add(to_string, param_ref(&str1));
    assert_eq!(render(&expr), "i.ToString(\"x\") + str1");
}

#[test]
fn explicit_two_argument_concat_call() {
    let mut b = TreeBuilder::new();
    let [str1, str2] = params(&mut b, [("str1", TypeRef::string()), ("str2", TypeRef::string())]);
    let expr = string_concat(vec![param_ref(&str1), param_ref(&str2)]);
    assert_eq!(render(&expr), "str1 + str2");
}

#[test]
fn explicit_three_argument_concat_call() {
    let mut b = TreeBuilder::new();
    let [str1, str2, str3] = params(
        &mut b,
        [("str1", TypeRef::string()), ("str2", TypeRef::string()), ("str3", TypeRef::string())],
    );
    let expr = string_concat(vec![param_ref(&str1), param_ref(&str2), param_ref(&str3)]);
    assert_eq!(render(&expr), "str1 + str2 + str3");
}

#[test]
fn explicit_mixed_type_three_argument_concat_call() {
    let mut b = TreeBuilder::new();
    let [str1, i, l] =
        params(&mut b, [("str1", TypeRef::string()), ("i", TypeRef::int()), ("l", TypeRef::long())]);
    let expr = string_concat(vec![
        param_ref(&str1),
        convert(param_ref(&i), TypeRef::object()),
        convert(param_ref(&l), TypeRef::object()),
    ]);
    assert_eq!(render(&expr), "str1 + i + l");
}

#[test]
fn concat_call_over_an_array() {
    let mut b = TreeBuilder::new();
    let names = ["a", "b", "c", "d", "e"];
    let args: Vec<_> = names.iter().map(|n| param_ref(&b.param(n, TypeRef::string()))).collect();
    let array = readable_expr::Expr::NewArray {
        op: readable_expr::tree::NewArrayOp::Init,
        element_type: TypeRef::string(),
        expressions: args,
    };
    let expr = string_concat(vec![array]);
    assert_eq!(render(&expr), "a + b + c + d + e");
}

#[test]
fn five_argument_concat_call_stays_a_call() {
    let args: Vec<_> = (1..=5).map(|n| string(&n.to_string())).collect();
    let expr = string_concat(args);
    assert_eq!(render(&expr), r#"string.Concat("1", "2", "3", "4", "5")"#);
}

#[test]
fn ternary_operand_keeps_parentheses() {
    let mut b = TreeBuilder::new();
    let [condition, if_true, if_false] = params(
        &mut b,
        [("condition", TypeRef::bool()), ("ifTrue", TypeRef::string()), ("ifFalse", TypeRef::string())],
    );
    let ternary = conditional(
        param_ref(&condition),
        param_ref(&if_true),
        param_ref(&if_false),
        TypeRef::string(),
    );
    let expr = concat_add(ternary, string("Hello!"));
    assert_eq!(render(&expr), r#"(condition ? ifTrue : ifFalse) + "Hello!""#);
}

#[test]
fn arithmetic_operand_is_wrapped_exactly_once() {
    let mut b = TreeBuilder::new();
    let [i, j, k] = params(&mut b, [("i", TypeRef::int()), ("j", TypeRef::int()), ("k", TypeRef::int())]);
    let maths = binary(
        BinaryOp::Divide,
        binary(BinaryOp::Subtract, param_ref(&i), param_ref(&j)),
        param_ref(&k),
    );
    let expr = concat_add(convert(maths, TypeRef::object()), string(" Maths!"));
    assert_eq!(render(&expr), r#"((i - j) / k) + " Maths!""#);
}

#[test]
fn numeric_sum_on_the_right_is_wrapped() {
    let mut b = TreeBuilder::new();
    let [i, j] = params(&mut b, [("i", TypeRef::int()), ("j", TypeRef::int())]);
    let sum = binary(BinaryOp::Add, param_ref(&i), param_ref(&j));
    let expr = concat_add(string("Total: "), convert(sum, TypeRef::object()));
    assert_eq!(render(&expr), r#""Total: " + (i + j)"#);
}
