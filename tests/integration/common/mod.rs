#![allow(dead_code)]

use std::process::Command;

use readable_expr::tree::{Parameter, TypeRef};
use readable_expr::tree::build::TreeBuilder;
use readable_expr::{Expr, Registry, Settings, render_readable};

pub fn readexpr() -> Command {
    Command::new(env!("CARGO_BIN_EXE_readexpr"))
}

/// Render with the default registry, panicking on error.
pub fn render(expr: &Expr) -> String {
    render_readable(expr).unwrap_or_else(|e| panic!("render failed: {e}"))
}

pub fn render_with(settings: Settings, expr: &Expr) -> String {
    Registry::new(settings).unwrap().translate(expr).unwrap()
}

/// Several fresh parameters at once, in declaration order.
pub fn params<const N: usize>(b: &mut TreeBuilder, specs: [(&str, TypeRef); N]) -> [Parameter; N] {
    specs.map(|(name, ty)| b.param(name, ty))
}
