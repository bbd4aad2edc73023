//! Translation of tree nodes into source-like text.
//!
//! Each node kind is rendered by exactly one [`Translator`]; the
//! [`Registry`] maps kinds to translators and is the recursion entry point.
//! Translators reach their children through the [`TranslationContext`], so
//! none of them depends on the registry type.

use std::collections::HashMap;

use crate::diagnostics::RenderError;
use crate::keywords::ReservedWords;
use crate::settings::Settings;
use crate::tree::{AssignOp, BinaryOp, ConvertOp, Expr, ExprKind, NewArrayOp, TypeTestOp, UnaryOp};

mod calls;
mod construction;
pub mod context;
mod leaves;
mod operators;
pub mod precedence;
mod statements;
mod switch;
mod try_catch;

pub use context::{TranslateNode, TranslationContext};

pub type TranslateFn = fn(&Expr, &mut TranslationContext<'_>) -> Result<String, RenderError>;

/// A stateless rendering function and the kinds it handles.
#[derive(Clone)]
pub struct Translator {
    pub name: &'static str,
    pub kinds: Vec<ExprKind>,
    pub translate: TranslateFn,
}

impl Translator {
    pub fn new(name: &'static str, kinds: Vec<ExprKind>, translate: TranslateFn) -> Self {
        Self { name, kinds, translate }
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").field("name", &self.name).field("kinds", &self.kinds).finish()
    }
}

/// The kind → translator table. Immutable once built.
#[derive(Debug)]
pub struct Registry {
    translators: Vec<Translator>,
    by_kind: HashMap<ExprKind, usize>,
    settings: Settings,
    reserved: ReservedWords,
}

impl Registry {
    /// A registry holding every built-in translator.
    pub fn new(settings: Settings) -> Result<Self, RenderError> {
        Self::with_translators(settings, builtin_translators())
    }

    /// Fails if two entries claim the same kind.
    pub fn with_translators(settings: Settings, translators: Vec<Translator>) -> Result<Self, RenderError> {
        let mut by_kind: HashMap<ExprKind, usize> = HashMap::new();
        for (index, translator) in translators.iter().enumerate() {
            for &kind in &translator.kinds {
                if let Some(&first) = by_kind.get(&kind) {
                    return Err(RenderError::DuplicateTranslator {
                        kind,
                        first: translators[first].name,
                        second: translator.name,
                    });
                }
                by_kind.insert(kind, index);
            }
        }
        tracing::debug!(translators = translators.len(), kinds = by_kind.len(), "built translator registry");
        let reserved = ReservedWords::new(&settings);
        Ok(Self { translators, by_kind, settings, reserved })
    }

    pub fn translate(&self, expr: &Expr) -> Result<String, RenderError> {
        let mut ctx = TranslationContext::new(self, &self.settings, &self.reserved);
        ctx.translate(expr)
    }

    /// Absence propagates: `None` in, `None` out.
    pub fn translate_opt(&self, expr: Option<&Expr>) -> Result<Option<String>, RenderError> {
        expr.map(|e| self.translate(e)).transpose()
    }

    /// Registered kinds with the name of the translator handling each, in
    /// kind order.
    pub fn kinds(&self) -> Vec<(ExprKind, &'static str)> {
        let mut kinds: Vec<_> = self
            .by_kind
            .iter()
            .map(|(&kind, &index)| (kind, self.translators[index].name))
            .collect();
        kinds.sort_by_key(|(kind, _)| *kind);
        kinds
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl TranslateNode for Registry {
    fn translate_node(&self, expr: &Expr, ctx: &mut TranslationContext<'_>) -> Result<String, RenderError> {
        match self.by_kind.get(&expr.kind()) {
            Some(&index) => (self.translators[index].translate)(expr, ctx),
            None => {
                tracing::trace!(kind = %expr.kind(), "no translator registered, using default text");
                Ok(expr.to_string())
            }
        }
    }
}

/// A translator was handed a node of a kind it does not render.
fn unexpected(expr: &Expr, translator: &str) -> RenderError {
    RenderError::malformed(expr.kind(), format!("not a node the {translator} translator renders"))
}

pub fn builtin_translators() -> Vec<Translator> {
    use ExprKind as K;

    let negations = [UnaryOp::Not, UnaryOp::Negate, UnaryOp::NegateChecked, UnaryOp::OnesComplement];
    let other_unary = [
        UnaryOp::UnaryPlus,
        UnaryOp::Increment,
        UnaryOp::Decrement,
        UnaryOp::PreIncrementAssign,
        UnaryOp::PreDecrementAssign,
        UnaryOp::PostIncrementAssign,
        UnaryOp::PostDecrementAssign,
    ];

    vec![
        Translator::new("binary", BinaryOp::ALL.map(K::Binary).to_vec(), operators::binary),
        Translator::new("negation", negations.map(K::Unary).to_vec(), operators::negation),
        Translator::new("unary", other_unary.map(K::Unary).to_vec(), operators::unary),
        Translator::new("cast", ConvertOp::ALL.map(K::Convert).to_vec(), operators::cast),
        Translator::new("throw", vec![K::Throw], operators::throw),
        Translator::new("assignment", AssignOp::ALL.map(K::Assign).to_vec(), operators::assignment),
        Translator::new("conditional", vec![K::Conditional], operators::conditional),
        Translator::new(
            "type test",
            vec![K::TypeTest(TypeTestOp::Is), K::TypeTest(TypeTestOp::Equal)],
            operators::type_test,
        ),
        Translator::new("lambda", vec![K::Lambda], statements::lambda),
        Translator::new("quoted lambda", vec![K::Quote], statements::quote),
        Translator::new("method call", vec![K::Call, K::Invoke], calls::method_call),
        Translator::new("member access", vec![K::MemberAccess], calls::member_access),
        Translator::new("array length", vec![K::ArrayLength], calls::array_length),
        Translator::new("index access", vec![K::Index], calls::index_access),
        Translator::new("dynamic", vec![K::Dynamic], calls::dynamic),
        Translator::new("new", vec![K::New], construction::new_object),
        Translator::new(
            "new array",
            vec![K::NewArray(NewArrayOp::Init), K::NewArray(NewArrayOp::Bounds)],
            construction::new_array,
        ),
        Translator::new("initialisation", vec![K::ListInit, K::MemberInit], construction::initialisation),
        Translator::new("switch", vec![K::Switch], switch::switch),
        Translator::new("try/catch", vec![K::Try], try_catch::try_catch),
        Translator::new("block", vec![K::Block], statements::block),
        Translator::new("loop", vec![K::Loop], statements::loop_),
        Translator::new("goto", vec![K::Goto], statements::goto),
        Translator::new("label", vec![K::Label], statements::label),
        Translator::new("default", vec![K::Default], statements::default),
        Translator::new("runtime variables", vec![K::RuntimeVariables], statements::runtime_variables),
        Translator::new("debug info", vec![K::DebugInfo], statements::debug_info),
        Translator::new("constant", vec![K::Constant], leaves::constant),
        Translator::new("parameter", vec![K::Parameter], leaves::parameter),
        Translator::new("extension", vec![K::Extension], leaves::extension),
    ]
}
