//! The expression tree produced by the parser. Every node carries the span
//! of the source text it covers; spans always describe a contiguous region.

use num_bigint::{BigInt, BigUint};
use ordered_float::OrderedFloat;
use serde::Serialize;
use url::Url;

use crate::diagnostics::Span;

/// A label as written: `quoted` records whether it was backtick-quoted.
/// The name stores neither the backticks nor a `@n` index suffix.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub name: String,
    pub quoted: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Const {
    Type,
    Kind,
}

impl Const {
    pub fn from_name(name: &str) -> Option<Const> {
        match name {
            "Type" => Some(Const::Type),
            "Kind" => Some(Const::Kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Builtin {
    Bool,
    Natural,
    Integer,
    Double,
    Text,
    List,
    Optional,
    NaturalFold,
    NaturalBuild,
    NaturalIsZero,
    NaturalEven,
    NaturalOdd,
    NaturalToInteger,
    NaturalShow,
    IntegerShow,
    DoubleShow,
    ListBuild,
    ListFold,
    ListLength,
    ListHead,
    ListLast,
    ListIndexed,
    ListReverse,
    OptionalFold,
    OptionalBuild,
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "Bool" => Some(Builtin::Bool),
            "Natural" => Some(Builtin::Natural),
            "Integer" => Some(Builtin::Integer),
            "Double" => Some(Builtin::Double),
            "Text" => Some(Builtin::Text),
            "List" => Some(Builtin::List),
            "Optional" => Some(Builtin::Optional),
            "Natural/fold" => Some(Builtin::NaturalFold),
            "Natural/build" => Some(Builtin::NaturalBuild),
            "Natural/isZero" => Some(Builtin::NaturalIsZero),
            "Natural/even" => Some(Builtin::NaturalEven),
            "Natural/odd" => Some(Builtin::NaturalOdd),
            "Natural/toInteger" => Some(Builtin::NaturalToInteger),
            "Natural/show" => Some(Builtin::NaturalShow),
            "Integer/show" => Some(Builtin::IntegerShow),
            "Double/show" => Some(Builtin::DoubleShow),
            "List/build" => Some(Builtin::ListBuild),
            "List/fold" => Some(Builtin::ListFold),
            "List/length" => Some(Builtin::ListLength),
            "List/head" => Some(Builtin::ListHead),
            "List/last" => Some(Builtin::ListLast),
            "List/indexed" => Some(Builtin::ListIndexed),
            "List/reverse" => Some(Builtin::ListReverse),
            "Optional/fold" => Some(Builtin::OptionalFold),
            "Optional/build" => Some(Builtin::OptionalBuild),
            _ => None,
        }
    }
}

/// The twelve binary operators, loosest-binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Op {
    ImportAlt,
    BoolOr,
    NaturalPlus,
    TextAppend,
    ListAppend,
    BoolAnd,
    Combine,
    Prefer,
    CombineTypes,
    NaturalTimes,
    BoolEq,
    BoolNe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilePrefix {
    Absolute,
    Here,
    Parent,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImportMode {
    Code,
    RawText,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoteImport {
    pub url: Url,
    /// `using <import>` request headers, themselves a (possibly hashed)
    /// import.
    pub headers: Option<Box<Import>>,
}

#[derive(Debug, Clone, Serialize)]
pub enum ImportLocation {
    Local { prefix: FilePrefix, components: Vec<String> },
    Env { name: String },
    Remote(RemoteImport),
    /// Never resolves; pairs with the `?` import-alternative operator.
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct Import {
    pub location: ImportLocation,
    /// `sha256:` integrity hash, stored as 64 lowercase-insensitive hex
    /// digits exactly as written. Verification happens at resolution time.
    pub hash: Option<String>,
    pub mode: ImportMode,
}

#[derive(Debug, Clone, Serialize)]
pub enum TextPart {
    /// Raw text between interpolation splices. Multi-line chunks keep their
    /// line endings and indentation; de-indentation is a downstream concern.
    Chunk { text: String, span: Span },
    Interp { expr: Box<Expr>, span: Span },
}

#[derive(Debug, Clone, Serialize)]
pub enum Expr {
    Var { name: Label, index: u64, span: Span },
    Builtin { builtin: Builtin, span: Span },
    Const { constant: Const, span: Span },
    BoolLit { value: bool, span: Span },
    NaturalLit { value: BigUint, span: Span },
    IntegerLit { value: BigInt, span: Span },
    DoubleLit { value: OrderedFloat<f64>, span: Span },
    TextLit { parts: Vec<TextPart>, span: Span },
    Lambda { label: Label, domain: Box<Expr>, body: Box<Expr>, span: Span },
    /// `forall (x : A) -> B`; arrow types `A -> B` use the label `_`.
    Pi { label: Label, domain: Box<Expr>, body: Box<Expr>, span: Span },
    App { func: Box<Expr>, arg: Box<Expr>, span: Span },
    Constructors { inner: Box<Expr>, span: Span },
    Let { label: Label, annot: Option<Box<Expr>>, value: Box<Expr>, body: Box<Expr>, span: Span },
    If { cond: Box<Expr>, then: Box<Expr>, otherwise: Box<Expr>, span: Span },
    BinOp { op: Op, left: Box<Expr>, right: Box<Expr>, span: Span },
    Field { record: Box<Expr>, label: Label, span: Span },
    Project { record: Box<Expr>, labels: Vec<Label>, span: Span },
    /// Fields in declaration order; duplicate detection is a downstream
    /// concern.
    RecordLit { fields: Vec<(Label, Expr)>, span: Span },
    RecordType { fields: Vec<(Label, Expr)>, span: Span },
    UnionType { alternatives: Vec<(Label, Option<Expr>)>, span: Span },
    UnionLit { label: Label, value: Box<Expr>, alternatives: Vec<(Label, Option<Expr>)>, span: Span },
    /// `elem_type` is present only for the annotated empty form `[] : List T`.
    ListLit { elems: Vec<Expr>, elem_type: Option<Box<Expr>>, span: Span },
    OptionalLit { value: Option<Box<Expr>>, value_type: Box<Expr>, span: Span },
    Merge { handler: Box<Expr>, subject: Box<Expr>, annot: Option<Box<Expr>>, span: Span },
    Annot { expr: Box<Expr>, annot: Box<Expr>, span: Span },
    Import { import: Import, span: Span },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Var { span, .. }
            | Expr::Builtin { span, .. }
            | Expr::Const { span, .. }
            | Expr::BoolLit { span, .. }
            | Expr::NaturalLit { span, .. }
            | Expr::IntegerLit { span, .. }
            | Expr::DoubleLit { span, .. }
            | Expr::TextLit { span, .. }
            | Expr::Lambda { span, .. }
            | Expr::Pi { span, .. }
            | Expr::App { span, .. }
            | Expr::Constructors { span, .. }
            | Expr::Let { span, .. }
            | Expr::If { span, .. }
            | Expr::BinOp { span, .. }
            | Expr::Field { span, .. }
            | Expr::Project { span, .. }
            | Expr::RecordLit { span, .. }
            | Expr::RecordType { span, .. }
            | Expr::UnionType { span, .. }
            | Expr::UnionLit { span, .. }
            | Expr::ListLit { span, .. }
            | Expr::OptionalLit { span, .. }
            | Expr::Merge { span, .. }
            | Expr::Annot { span, .. }
            | Expr::Import { span, .. } => *span,
        }
    }
}
