// Expression nodes as delivered by the parser adapter

use crate::source::anchor::SourceAnchor;

/// Binary operators the mutation catalog knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    // Compound assignment
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    OrAssign,
    XorAssign,
}

impl BinOp {
    /// The C spelling of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::AddAssign => "+=",
            BinOp::SubAssign => "-=",
            BinOp::MulAssign => "*=",
            BinOp::DivAssign => "/=",
            BinOp::ModAssign => "%=",
            BinOp::ShlAssign => "<<=",
            BinOp::ShrAssign => ">>=",
            BinOp::AndAssign => "&=",
            BinOp::OrAssign => "|=",
            BinOp::XorAssign => "^=",
        }
    }
}

/// Coarse classification of a binary expression's operand types.
///
/// Both operands are assumed category-compatible; the adapter reads the
/// category from one representative operand.  The category decides which
/// relational/equality replacement row applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandCategory {
    Boolean,
    Floating,
    Enum,
    Pointer,
    Other,
}

/// Where (if anywhere) an expression's location resolved to.
///
/// The adapter walks macro-expansion history and applies the parser's
/// system-header predicate before handing the node over, so an expression
/// whose physical origin cannot be pinned to a concrete file+offset is
/// represented explicitly instead of carrying bogus anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanStatus {
    /// Concrete anchors into the original file text.
    Resolved {
        start: SourceAnchor,
        end: SourceAnchor,
    },
    /// Location is inside a system or externally-supplied header.
    SystemHeader,
    /// Macro expansion whose physical origin could not be resolved.
    MacroUnresolved,
}

/// One binary expression as printed by the parser
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub category: OperandCategory,
    /// Printed source text of the left operand
    pub lhs: String,
    /// Printed source text of the right operand
    pub rhs: String,
    pub span: SpanStatus,
}

/// Closed set of node shapes the mutation core consumes.
///
/// Deliberately a sum type rather than a downcastable hierarchy: the parser
/// adapter classifies nodes once, and everything downstream matches
/// exhaustively.  Unary operators and overloaded-operator calls are not
/// modeled (not mutated).
#[derive(Debug, Clone)]
pub enum ExprNode {
    Binary(BinaryExpr),
}
