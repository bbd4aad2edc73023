use crate::code_block::CodeBlock;
use crate::diagnostics::RenderError;
use crate::keywords::ReservedWords;
use crate::settings::Settings;
use crate::tree::{Expr, ParamId};

use super::statements;

/// The capability to translate a child node. The registry implements it;
/// translators only ever see it through [`TranslationContext`].
pub trait TranslateNode {
    fn translate_node(&self, expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError>;
}

/// Per-render state threaded through every translator.
pub struct TranslationContext<'a> {
    translator: &'a dyn TranslateNode,
    settings: &'a Settings,
    reserved: &'a ReservedWords,
    depth: usize,
    rethrow_target: Option<ParamId>,
}

impl<'a> TranslationContext<'a> {
    pub fn new(translator: &'a dyn TranslateNode, settings: &'a Settings, reserved: &'a ReservedWords) -> Self {
        Self { translator, settings, reserved, depth: 0, rethrow_target: None }
    }

    pub fn translate(&mut self, expr: &Expr) -> Result<String, RenderError> {
        let translator = self.translator;
        self.nested(|ctx| translator.translate_node(expr, ctx))
    }

    /// Run `f` one level deeper, failing once `max_depth` levels are open.
    /// Every recursive path through the tree goes through here.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, RenderError>) -> Result<T, RenderError> {
        if self.depth >= self.settings.max_depth {
            return Err(RenderError::StructureTooDeep { limit: self.settings.max_depth });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn translate_opt(&mut self, expr: Option<&Expr>) -> Result<Option<String>, RenderError> {
        expr.map(|e| self.translate(e)).transpose()
    }

    pub fn translate_all(&mut self, exprs: &[Expr]) -> Result<Vec<String>, RenderError> {
        exprs.iter().map(|e| self.translate(e)).collect()
    }

    /// Translate `expr` as the body of a statement: blocks expand into
    /// their statements, anything else becomes one terminated statement.
    pub fn translate_code_block(&mut self, expr: &Expr) -> Result<CodeBlock, RenderError> {
        match expr {
            Expr::Block { variables, expressions, .. } => {
                self.nested(|ctx| statements::block_statements(variables, expressions, ctx, false))
            }
            other => {
                let text = self.translate(other)?;
                if text.is_empty() {
                    return Ok(CodeBlock::empty());
                }
                let statement = statements::terminate(other, text);
                if statements::is_statement_shaped(other) {
                    Ok(CodeBlock::statements_only(vec![statement]))
                } else {
                    Ok(CodeBlock::single(statement))
                }
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        self.reserved
    }

    /// The catch variable whose direct rethrow renders as bare `throw`.
    pub fn rethrow_target(&self) -> Option<ParamId> {
        self.rethrow_target
    }

    /// Run `f` with `target` as the active rethrow target, restoring the
    /// previous one afterwards.
    pub fn with_rethrow_target<T>(
        &mut self,
        target: Option<ParamId>,
        f: impl FnOnce(&mut Self) -> Result<T, RenderError>,
    ) -> Result<T, RenderError> {
        let saved = std::mem::replace(&mut self.rethrow_target, target);
        let result = f(self);
        self.rethrow_target = saved;
        result
    }
}
