//! The expression tree model.
//!
//! Nodes are immutable once built and are only ever borrowed by the
//! translators. Every node has a [`ExprKind`]; operator-carrying variants
//! contribute one kind per operator so a translator can declare exactly the
//! set of kinds it renders.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod build;
mod types;

pub use types::{TYPE_ALIASES, TypeRef};

/// Identity of a parameter or variable. Two references denote the same
/// variable iff their ids are equal; names may repeat across scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub by_ref: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRef {
    pub name: String,
    pub declaring_type: TypeRef,
    #[serde(default)]
    pub type_args: Vec<TypeRef>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_extension: bool,
}

impl MethodRef {
    pub fn is_string_concat(&self) -> bool {
        self.name == "Concat" && self.declaring_type.is_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelTarget {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpr {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInit {
    pub add_method: MethodRef,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "binding", rename_all = "snake_case")]
pub enum MemberBinding {
    Assignment { member: String, value: Expr },
    MemberInit { member: String, bindings: Vec<MemberBinding> },
    List { member: String, initializers: Vec<ElementInit> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    pub test_values: Vec<Expr>,
    pub body: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchBlock {
    pub test: TypeRef,
    #[serde(default)]
    pub variable: Option<Parameter>,
    #[serde(default)]
    pub filter: Option<Expr>,
    pub body: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Long(i64),
    UInt(u64),
    ULong(u64),
    Float(f32),
    Double(f64),
    Decimal(String),
    Char(char),
    String(String),
    Type(TypeRef),
    EnumMember { ty: TypeRef, member: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DynamicOp {
    GetMember { name: String },
    SetMember { name: String },
    InvokeMember {
        name: String,
        #[serde(default)]
        type_args: Vec<TypeRef>,
    },
    Invoke,
    GetIndex,
    SetIndex,
    Convert {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
}

impl DynamicOp {
    pub fn name(&self) -> &'static str {
        match self {
            DynamicOp::GetMember { .. } => "get member",
            DynamicOp::SetMember { .. } => "set member",
            DynamicOp::InvokeMember { .. } => "invoke member",
            DynamicOp::Invoke => "invoke",
            DynamicOp::GetIndex => "get index",
            DynamicOp::SetIndex => "set index",
            DynamicOp::Convert { .. } => "convert",
        }
    }
}

// ── Operators ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    AddChecked,
    Subtract,
    SubtractChecked,
    Multiply,
    MultiplyChecked,
    Divide,
    Modulo,
    Power,
    And,
    Or,
    ExclusiveOr,
    AndAlso,
    OrElse,
    LeftShift,
    RightShift,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Coalesce,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 23] = [
        BinaryOp::Add,
        BinaryOp::AddChecked,
        BinaryOp::Subtract,
        BinaryOp::SubtractChecked,
        BinaryOp::Multiply,
        BinaryOp::MultiplyChecked,
        BinaryOp::Divide,
        BinaryOp::Modulo,
        BinaryOp::Power,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::ExclusiveOr,
        BinaryOp::AndAlso,
        BinaryOp::OrElse,
        BinaryOp::LeftShift,
        BinaryOp::RightShift,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::LessThan,
        BinaryOp::LessThanOrEqual,
        BinaryOp::GreaterThan,
        BinaryOp::GreaterThanOrEqual,
        BinaryOp::Coalesce,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "Add",
            BinaryOp::AddChecked => "AddChecked",
            BinaryOp::Subtract => "Subtract",
            BinaryOp::SubtractChecked => "SubtractChecked",
            BinaryOp::Multiply => "Multiply",
            BinaryOp::MultiplyChecked => "MultiplyChecked",
            BinaryOp::Divide => "Divide",
            BinaryOp::Modulo => "Modulo",
            BinaryOp::Power => "Power",
            BinaryOp::And => "And",
            BinaryOp::Or => "Or",
            BinaryOp::ExclusiveOr => "ExclusiveOr",
            BinaryOp::AndAlso => "AndAlso",
            BinaryOp::OrElse => "OrElse",
            BinaryOp::LeftShift => "LeftShift",
            BinaryOp::RightShift => "RightShift",
            BinaryOp::Equal => "Equal",
            BinaryOp::NotEqual => "NotEqual",
            BinaryOp::LessThan => "LessThan",
            BinaryOp::LessThanOrEqual => "LessThanOrEqual",
            BinaryOp::GreaterThan => "GreaterThan",
            BinaryOp::GreaterThanOrEqual => "GreaterThanOrEqual",
            BinaryOp::Coalesce => "Coalesce",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add | BinaryOp::AddChecked => "+",
            BinaryOp::Subtract | BinaryOp::SubtractChecked => "-",
            BinaryOp::Multiply | BinaryOp::MultiplyChecked => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "**",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::ExclusiveOr => "^",
            BinaryOp::AndAlso => "&&",
            BinaryOp::OrElse => "||",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::Coalesce => "??",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Negate,
    NegateChecked,
    UnaryPlus,
    Not,
    OnesComplement,
    Increment,
    Decrement,
    PreIncrementAssign,
    PreDecrementAssign,
    PostIncrementAssign,
    PostDecrementAssign,
}

impl UnaryOp {
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Negate => "Negate",
            UnaryOp::NegateChecked => "NegateChecked",
            UnaryOp::UnaryPlus => "UnaryPlus",
            UnaryOp::Not => "Not",
            UnaryOp::OnesComplement => "OnesComplement",
            UnaryOp::Increment => "Increment",
            UnaryOp::Decrement => "Decrement",
            UnaryOp::PreIncrementAssign => "PreIncrementAssign",
            UnaryOp::PreDecrementAssign => "PreDecrementAssign",
            UnaryOp::PostIncrementAssign => "PostIncrementAssign",
            UnaryOp::PostDecrementAssign => "PostDecrementAssign",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertOp {
    Convert,
    ConvertChecked,
    TypeAs,
    Unbox,
}

impl ConvertOp {
    pub const ALL: [ConvertOp; 4] =
        [ConvertOp::Convert, ConvertOp::ConvertChecked, ConvertOp::TypeAs, ConvertOp::Unbox];

    pub fn name(self) -> &'static str {
        match self {
            ConvertOp::Convert => "Convert",
            ConvertOp::ConvertChecked => "ConvertChecked",
            ConvertOp::TypeAs => "TypeAs",
            ConvertOp::Unbox => "Unbox",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOp {
    Assign,
    AddAssign,
    AddAssignChecked,
    SubtractAssign,
    SubtractAssignChecked,
    MultiplyAssign,
    MultiplyAssignChecked,
    DivideAssign,
    ModuloAssign,
    PowerAssign,
    AndAssign,
    OrAssign,
    ExclusiveOrAssign,
    LeftShiftAssign,
    RightShiftAssign,
}

impl AssignOp {
    pub const ALL: [AssignOp; 15] = [
        AssignOp::Assign,
        AssignOp::AddAssign,
        AssignOp::AddAssignChecked,
        AssignOp::SubtractAssign,
        AssignOp::SubtractAssignChecked,
        AssignOp::MultiplyAssign,
        AssignOp::MultiplyAssignChecked,
        AssignOp::DivideAssign,
        AssignOp::ModuloAssign,
        AssignOp::PowerAssign,
        AssignOp::AndAssign,
        AssignOp::OrAssign,
        AssignOp::ExclusiveOrAssign,
        AssignOp::LeftShiftAssign,
        AssignOp::RightShiftAssign,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AssignOp::Assign => "Assign",
            AssignOp::AddAssign => "AddAssign",
            AssignOp::AddAssignChecked => "AddAssignChecked",
            AssignOp::SubtractAssign => "SubtractAssign",
            AssignOp::SubtractAssignChecked => "SubtractAssignChecked",
            AssignOp::MultiplyAssign => "MultiplyAssign",
            AssignOp::MultiplyAssignChecked => "MultiplyAssignChecked",
            AssignOp::DivideAssign => "DivideAssign",
            AssignOp::ModuloAssign => "ModuloAssign",
            AssignOp::PowerAssign => "PowerAssign",
            AssignOp::AndAssign => "AndAssign",
            AssignOp::OrAssign => "OrAssign",
            AssignOp::ExclusiveOrAssign => "ExclusiveOrAssign",
            AssignOp::LeftShiftAssign => "LeftShiftAssign",
            AssignOp::RightShiftAssign => "RightShiftAssign",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign | AssignOp::AddAssignChecked => "+=",
            AssignOp::SubtractAssign | AssignOp::SubtractAssignChecked => "-=",
            AssignOp::MultiplyAssign | AssignOp::MultiplyAssignChecked => "*=",
            AssignOp::DivideAssign => "/=",
            AssignOp::ModuloAssign => "%=",
            AssignOp::PowerAssign => "**=",
            AssignOp::AndAssign => "&=",
            AssignOp::OrAssign => "|=",
            AssignOp::ExclusiveOrAssign => "^=",
            AssignOp::LeftShiftAssign => "<<=",
            AssignOp::RightShiftAssign => ">>=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewArrayOp {
    Init,
    Bounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTestOp {
    Is,
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GotoKind {
    Goto,
    Return,
    Break,
    Continue,
}

// ── Nodes ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Expr {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        #[serde(default)]
        method: Option<MethodRef>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Convert {
        op: ConvertOp,
        operand: Box<Expr>,
        #[serde(rename = "type")]
        ty: TypeRef,
        #[serde(default)]
        method: Option<MethodRef>,
    },
    Throw {
        #[serde(default)]
        operand: Option<Box<Expr>>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
        #[serde(rename = "type")]
        ty: TypeRef,
    },
    Lambda {
        parameters: Vec<Parameter>,
        body: Box<Expr>,
        return_type: TypeRef,
    },
    Quote {
        operand: Box<Expr>,
    },
    Call {
        #[serde(default)]
        object: Option<Box<Expr>>,
        method: MethodRef,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    Invoke {
        target: Box<Expr>,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    MemberAccess {
        #[serde(default)]
        object: Option<Box<Expr>>,
        declaring_type: TypeRef,
        member: String,
    },
    ArrayLength {
        array: Box<Expr>,
    },
    Index {
        object: Box<Expr>,
        arguments: Vec<Expr>,
    },
    New(NewExpr),
    NewArray {
        op: NewArrayOp,
        element_type: TypeRef,
        #[serde(default)]
        expressions: Vec<Expr>,
    },
    ListInit {
        new: NewExpr,
        initializers: Vec<ElementInit>,
    },
    MemberInit {
        new: NewExpr,
        bindings: Vec<MemberBinding>,
    },
    Switch {
        value: Box<Expr>,
        cases: Vec<SwitchCase>,
        #[serde(default)]
        default_body: Option<Box<Expr>>,
    },
    Try {
        body: Box<Expr>,
        #[serde(default)]
        handlers: Vec<CatchBlock>,
        #[serde(default)]
        fault: Option<Box<Expr>>,
        #[serde(default)]
        finally: Option<Box<Expr>>,
    },
    Loop {
        body: Box<Expr>,
    },
    Goto {
        kind: GotoKind,
        target: LabelTarget,
        #[serde(default)]
        value: Option<Box<Expr>>,
    },
    Label {
        target: LabelTarget,
        #[serde(default)]
        default_value: Option<Box<Expr>>,
    },
    Block {
        #[serde(default)]
        variables: Vec<Parameter>,
        expressions: Vec<Expr>,
        #[serde(rename = "type")]
        ty: TypeRef,
    },
    Constant {
        value: Literal,
    },
    Default {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
    Dynamic {
        operation: DynamicOp,
        arguments: Vec<Expr>,
    },
    Parameter(Parameter),
    RuntimeVariables {
        variables: Vec<Parameter>,
    },
    TypeTest {
        op: TypeTestOp,
        operand: Box<Expr>,
        type_operand: TypeRef,
    },
    DebugInfo {
        document: String,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        #[serde(default)]
        is_clear: bool,
    },
    Extension {
        description: String,
    },
}

/// The discriminant of a node, the key of the translator registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExprKind {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Convert(ConvertOp),
    Throw,
    Assign(AssignOp),
    Conditional,
    Lambda,
    Quote,
    Call,
    Invoke,
    MemberAccess,
    ArrayLength,
    Index,
    New,
    NewArray(NewArrayOp),
    ListInit,
    MemberInit,
    Switch,
    Try,
    Loop,
    Goto,
    Label,
    Block,
    Constant,
    Default,
    Dynamic,
    Parameter,
    RuntimeVariables,
    TypeTest(TypeTestOp),
    DebugInfo,
    Extension,
}

impl ExprKind {
    /// Every kind a tree can contain.
    pub fn all() -> Vec<ExprKind> {
        let mut kinds: Vec<ExprKind> = BinaryOp::ALL.iter().map(|&op| ExprKind::Binary(op)).collect();
        kinds.extend(
            [
                UnaryOp::Negate,
                UnaryOp::NegateChecked,
                UnaryOp::UnaryPlus,
                UnaryOp::Not,
                UnaryOp::OnesComplement,
                UnaryOp::Increment,
                UnaryOp::Decrement,
                UnaryOp::PreIncrementAssign,
                UnaryOp::PreDecrementAssign,
                UnaryOp::PostIncrementAssign,
                UnaryOp::PostDecrementAssign,
            ]
            .map(ExprKind::Unary),
        );
        kinds.extend(ConvertOp::ALL.map(ExprKind::Convert));
        kinds.extend(AssignOp::ALL.map(ExprKind::Assign));
        kinds.extend([
            ExprKind::Throw,
            ExprKind::Conditional,
            ExprKind::Lambda,
            ExprKind::Quote,
            ExprKind::Call,
            ExprKind::Invoke,
            ExprKind::MemberAccess,
            ExprKind::ArrayLength,
            ExprKind::Index,
            ExprKind::New,
            ExprKind::NewArray(NewArrayOp::Init),
            ExprKind::NewArray(NewArrayOp::Bounds),
            ExprKind::ListInit,
            ExprKind::MemberInit,
            ExprKind::Switch,
            ExprKind::Try,
            ExprKind::Loop,
            ExprKind::Goto,
            ExprKind::Label,
            ExprKind::Block,
            ExprKind::Constant,
            ExprKind::Default,
            ExprKind::Dynamic,
            ExprKind::Parameter,
            ExprKind::RuntimeVariables,
            ExprKind::TypeTest(TypeTestOp::Is),
            ExprKind::TypeTest(TypeTestOp::Equal),
            ExprKind::DebugInfo,
            ExprKind::Extension,
        ]);
        kinds
    }

    pub fn name(self) -> &'static str {
        match self {
            ExprKind::Binary(op) => op.name(),
            ExprKind::Unary(op) => op.name(),
            ExprKind::Convert(op) => op.name(),
            ExprKind::Assign(op) => op.name(),
            ExprKind::Throw => "Throw",
            ExprKind::Conditional => "Conditional",
            ExprKind::Lambda => "Lambda",
            ExprKind::Quote => "Quote",
            ExprKind::Call => "Call",
            ExprKind::Invoke => "Invoke",
            ExprKind::MemberAccess => "MemberAccess",
            ExprKind::ArrayLength => "ArrayLength",
            ExprKind::Index => "Index",
            ExprKind::New => "New",
            ExprKind::NewArray(NewArrayOp::Init) => "NewArrayInit",
            ExprKind::NewArray(NewArrayOp::Bounds) => "NewArrayBounds",
            ExprKind::ListInit => "ListInit",
            ExprKind::MemberInit => "MemberInit",
            ExprKind::Switch => "Switch",
            ExprKind::Try => "Try",
            ExprKind::Loop => "Loop",
            ExprKind::Goto => "Goto",
            ExprKind::Label => "Label",
            ExprKind::Block => "Block",
            ExprKind::Constant => "Constant",
            ExprKind::Default => "Default",
            ExprKind::Dynamic => "Dynamic",
            ExprKind::Parameter => "Parameter",
            ExprKind::RuntimeVariables => "RuntimeVariables",
            ExprKind::TypeTest(TypeTestOp::Is) => "TypeIs",
            ExprKind::TypeTest(TypeTestOp::Equal) => "TypeEqual",
            ExprKind::DebugInfo => "DebugInfo",
            ExprKind::Extension => "Extension",
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Expr {
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Binary { op, .. } => ExprKind::Binary(*op),
            Expr::Unary { op, .. } => ExprKind::Unary(*op),
            Expr::Convert { op, .. } => ExprKind::Convert(*op),
            Expr::Throw { .. } => ExprKind::Throw,
            Expr::Assign { op, .. } => ExprKind::Assign(*op),
            Expr::Conditional { .. } => ExprKind::Conditional,
            Expr::Lambda { .. } => ExprKind::Lambda,
            Expr::Quote { .. } => ExprKind::Quote,
            Expr::Call { .. } => ExprKind::Call,
            Expr::Invoke { .. } => ExprKind::Invoke,
            Expr::MemberAccess { .. } => ExprKind::MemberAccess,
            Expr::ArrayLength { .. } => ExprKind::ArrayLength,
            Expr::Index { .. } => ExprKind::Index,
            Expr::New(_) => ExprKind::New,
            Expr::NewArray { op, .. } => ExprKind::NewArray(*op),
            Expr::ListInit { .. } => ExprKind::ListInit,
            Expr::MemberInit { .. } => ExprKind::MemberInit,
            Expr::Switch { .. } => ExprKind::Switch,
            Expr::Try { .. } => ExprKind::Try,
            Expr::Loop { .. } => ExprKind::Loop,
            Expr::Goto { .. } => ExprKind::Goto,
            Expr::Label { .. } => ExprKind::Label,
            Expr::Block { .. } => ExprKind::Block,
            Expr::Constant { .. } => ExprKind::Constant,
            Expr::Default { .. } => ExprKind::Default,
            Expr::Dynamic { .. } => ExprKind::Dynamic,
            Expr::Parameter(_) => ExprKind::Parameter,
            Expr::RuntimeVariables { .. } => ExprKind::RuntimeVariables,
            Expr::TypeTest { op, .. } => ExprKind::TypeTest(*op),
            Expr::DebugInfo { .. } => ExprKind::DebugInfo,
            Expr::Extension { .. } => ExprKind::Extension,
        }
    }

    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Expr::Parameter(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_void_default(&self) -> bool {
        matches!(self, Expr::Default { ty } if ty.is_void())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(n) | Literal::Long(n) => write!(f, "{n}"),
            Literal::UInt(n) | Literal::ULong(n) => write!(f, "{n}"),
            Literal::Float(v) => write!(f, "{v}"),
            Literal::Double(v) => write!(f, "{v}"),
            Literal::Decimal(s) => f.write_str(s),
            Literal::Char(c) => write!(f, "'{c}'"),
            Literal::String(s) => write!(f, "\"{s}\""),
            Literal::Type(ty) => f.write_str(&ty.friendly_name()),
            Literal::EnumMember { ty, member } => write!(f, "{}.{member}", ty.friendly_name()),
        }
    }
}

/// The node's default textual form, used when no translator is registered
/// for its kind.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Extension { description } => f.write_str(description),
            Expr::Parameter(p) => f.write_str(&p.name),
            Expr::Constant { value } => write!(f, "{value}"),
            _ => {
                write!(f, "{}(", self.kind())?;
                for (i, child) in crate::visit::children(self).into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}
