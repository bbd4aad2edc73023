mod common;
use common::{params, render, render_with};

use readable_expr::Settings;
use readable_expr::tree::build::*;
use readable_expr::tree::{BinaryOp, CatchBlock, TypeRef};
use readable_expr::{Expr, tree::Parameter};

fn do_work() -> Expr {
    static_call(static_method("DoWork", TypeRef::named("Worker")), vec![])
}

fn log(arg: Expr) -> Expr {
    static_call(static_method("WriteLine", TypeRef::named("System.Console")), vec![arg])
}

fn try_with(handlers: Vec<CatchBlock>) -> Expr {
    Expr::Try { body: Box::new(do_work()), handlers, fault: None, finally: None }
}

fn exception(b: &mut TreeBuilder, ty: TypeRef) -> Parameter {
    b.param("ex", ty)
}

#[test]
fn rethrowing_root_catch_collapses_to_bare_catch() {
    let mut b = TreeBuilder::new();
    let ex = exception(&mut b, TypeRef::exception());
    let expr = try_with(vec![catch(TypeRef::exception(), Some(ex.clone()), throw(param_ref(&ex)))]);
    insta::assert_snapshot!(render(&expr), @r"
    try
    {
        Worker.DoWork();
    }
    catch
    {
        throw;
    }
    ");
}

#[test]
fn typed_catch_without_a_used_variable_keeps_the_type() {
    let mut b = TreeBuilder::new();
    let ex = exception(&mut b, TypeRef::named("System.TimeoutException"));
    let handler = catch(TypeRef::named("System.TimeoutException"), Some(ex), log(string("timed out")));
    insta::assert_snapshot!(render(&try_with(vec![handler])), @r#"
    try
    {
        Worker.DoWork();
    }
    catch (TimeoutException)
    {
        Console.WriteLine("timed out");
    }
    "#);
}

#[test]
fn used_variable_is_declared() {
    let mut b = TreeBuilder::new();
    let ex = exception(&mut b, TypeRef::exception());
    let message = member(param_ref(&ex), TypeRef::exception(), "Message");
    let body = block(vec![], vec![log(message), throw(param_ref(&ex))], TypeRef::void());
    let expr = try_with(vec![catch(TypeRef::exception(), Some(ex), body)]);
    insta::assert_snapshot!(render(&expr), @r"
    try
    {
        Worker.DoWork();
    }
    catch (Exception ex)
    {
        Console.WriteLine(ex.Message);
        throw ex;
    }
    ");
}

#[test]
fn filters_are_kept() {
    let mut b = TreeBuilder::new();
    let [ex, retry] = params(
        &mut b,
        [("ex", TypeRef::named("System.IO.IOException")), ("retry", TypeRef::bool())],
    );
    let io = TypeRef::named("System.IO.IOException");

    let code = member(param_ref(&ex), io.clone(), "HResult");
    let using_variable = CatchBlock {
        filter: Some(binary(BinaryOp::Equal, code, int(32))),
        ..catch(io.clone(), Some(ex.clone()), log(string("locked")))
    };
    let without_variable = CatchBlock {
        filter: Some(param_ref(&retry)),
        ..catch(io.clone(), Some(ex), log(string("retrying")))
    };
    let expr = try_with(vec![using_variable, without_variable]);
    insta::assert_snapshot!(render(&expr), @r#"
    try
    {
        Worker.DoWork();
    }
    catch (IOException ex) when ex.HResult == 32
    {
        Console.WriteLine("locked");
    }
    catch (IOException) when retry
    {
        Console.WriteLine("retrying");
    }
    "#);
}

#[test]
fn fault_and_finally() {
    let expr = Expr::Try {
        body: Box::new(do_work()),
        handlers: vec![],
        fault: Some(Box::new(log(string("faulted")))),
        finally: Some(Box::new(log(string("done")))),
    };
    insta::assert_snapshot!(render(&expr), @r#"
    try
    {
        Worker.DoWork();
    }
    fault
    {
        Console.WriteLine("faulted");
    }
    finally
    {
        Console.WriteLine("done");
    }
    "#);
}

#[test]
fn nested_lambda_does_not_inherit_the_rethrow() {
    let mut b = TreeBuilder::new();
    let ex = exception(&mut b, TypeRef::exception());
    let deferred = lambda(vec![], throw(param_ref(&ex)), TypeRef::void());
    let body = static_call(static_method("Run", TypeRef::named("Task")), vec![deferred]);
    let expr = try_with(vec![catch(TypeRef::exception(), Some(ex), body)]);
    insta::assert_snapshot!(render(&expr), @r"
    try
    {
        Worker.DoWork();
    }
    catch (Exception ex)
    {
        Task.Run(() => throw ex);
    }
    ");
}

#[test]
fn throw_inside_finally_declares_the_variable() {
    let mut b = TreeBuilder::new();
    let ex = exception(&mut b, TypeRef::exception());
    let cleanup = Expr::Try {
        body: Box::new(log(string("cleanup"))),
        handlers: vec![],
        fault: None,
        finally: Some(Box::new(throw(param_ref(&ex)))),
    };
    let expr = try_with(vec![catch(TypeRef::exception(), Some(ex), cleanup)]);
    let text = render(&expr);
    assert!(text.contains("catch (Exception ex)\n"), "{text}");
    assert!(text.contains("throw ex;"), "{text}");
}

#[test]
fn inner_catch_keeps_outer_variable_declared() {
    let mut b = TreeBuilder::new();
    let ex = exception(&mut b, TypeRef::exception());
    let inner = b.param("io", TypeRef::named("System.IO.IOException"));
    let retry = Expr::Try {
        body: Box::new(do_work()),
        handlers: vec![catch(inner.ty.clone(), Some(inner), throw(param_ref(&ex)))],
        fault: None,
        finally: None,
    };
    let expr = try_with(vec![catch(TypeRef::exception(), Some(ex), retry)]);
    let text = render(&expr);
    assert!(text.contains("catch (Exception ex)\n"), "{text}");
    assert!(text.contains("catch (IOException)\n"), "{text}");
    assert!(text.contains("throw ex;"), "{text}");
}

#[test]
fn root_error_type_is_configurable() {
    let mut b = TreeBuilder::new();
    let err = exception(&mut b, TypeRef::named("AppError"));
    let expr = try_with(vec![catch(TypeRef::named("AppError"), Some(err.clone()), throw(param_ref(&err)))]);

    let default = render(&expr);
    assert!(default.contains("catch (AppError)\n"), "{default}");

    let settings = Settings { root_error_type: "AppError".into(), ..Settings::default() };
    let custom = render_with(settings, &expr);
    assert!(custom.contains("catch\n{\n    throw;\n}"), "{custom}");
}
