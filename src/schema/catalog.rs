//! Operator replacement catalog
//!
//! Pure lookup tables mapping an original binary operator plus an operand
//! type category to the set of replacement operators and degenerate
//! "singleton" forms.  Operator families are independent: arithmetic,
//! relational/equality, logical, bitwise, shift, and compound-assignment
//! rules each fire for every qualifying expression.  Bitwise XOR, `%=`,
//! `^=`, and plain assignment have no rules.

use crate::source::expr::{BinOp, BinaryExpr, OperandCategory};

/// Degenerate replacement forms that keep the operands but drop the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Singleton {
    /// Reduce the expression to its left operand
    Lhs,
    /// Reduce the expression to its right operand
    Rhs,
    /// Replace the expression with the literal `true`
    True,
    /// Replace the expression with the literal `false`
    False,
}

impl Singleton {
    /// Render this form as replacement text for `expr`
    pub fn render(&self, expr: &BinaryExpr) -> String {
        match self {
            Singleton::Lhs => expr.lhs.clone(),
            Singleton::Rhs => expr.rhs.clone(),
            Singleton::True => "true".to_string(),
            Singleton::False => "false".to_string(),
        }
    }
}

/// Result of a catalog lookup: candidate operators plus singleton forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacements {
    pub operators: &'static [BinOp],
    pub singletons: &'static [Singleton],
}

const NONE: Replacements = Replacements {
    operators: &[],
    singletons: &[],
};

const LHS_RHS: &[Singleton] = &[Singleton::Lhs, Singleton::Rhs];
const TRUE_ONLY: &[Singleton] = &[Singleton::True];
const FALSE_ONLY: &[Singleton] = &[Singleton::False];

/// Look up the replacement set for `op` applied to operands of `category`.
///
/// Deterministic and side-effect free; the returned slices are in the order
/// candidates are numbered in the generated schema.  An empty result means
/// the operator is not mutated (e.g. `^`).
pub fn lookup(op: BinOp, category: OperandCategory) -> Replacements {
    use BinOp::*;
    use OperandCategory::*;

    match op {
        // Arithmetic: the other four of the set, plus both operand forms.
        Add => Replacements {
            operators: &[Sub, Mul, Div, Mod],
            singletons: LHS_RHS,
        },
        Sub => Replacements {
            operators: &[Add, Mul, Div, Mod],
            singletons: LHS_RHS,
        },
        Mul => Replacements {
            operators: &[Add, Sub, Div, Mod],
            singletons: LHS_RHS,
        },
        Div => Replacements {
            operators: &[Add, Sub, Mul, Mod],
            singletons: LHS_RHS,
        },
        Mod => Replacements {
            operators: &[Add, Sub, Mul, Div],
            singletons: LHS_RHS,
        },

        // Relational: category-aware rows.
        Lt => match category {
            Boolean => NONE,
            Floating => Replacements {
                operators: &[Gt],
                singletons: FALSE_ONLY,
            },
            Enum | Pointer => Replacements {
                operators: &[Ge, Ne],
                singletons: FALSE_ONLY,
            },
            Other => Replacements {
                operators: &[Le, Ne],
                singletons: FALSE_ONLY,
            },
        },
        Gt => match category {
            Boolean => NONE,
            Floating => Replacements {
                operators: &[Lt],
                singletons: FALSE_ONLY,
            },
            Enum | Pointer => Replacements {
                operators: &[Ge, Ne],
                singletons: FALSE_ONLY,
            },
            Other => Replacements {
                operators: &[Ge, Ne],
                singletons: FALSE_ONLY,
            },
        },
        Le => match category {
            Boolean => NONE,
            Floating => Replacements {
                operators: &[Gt],
                singletons: TRUE_ONLY,
            },
            Enum | Pointer | Other => Replacements {
                operators: &[Lt, Eq],
                singletons: TRUE_ONLY,
            },
        },
        Ge => match category {
            Boolean => NONE,
            Floating => Replacements {
                operators: &[Lt],
                singletons: TRUE_ONLY,
            },
            Enum | Pointer | Other => Replacements {
                operators: &[Gt, Eq],
                singletons: TRUE_ONLY,
            },
        },

        // Equality: category-aware rows.
        Eq => match category {
            Boolean | Pointer => Replacements {
                operators: &[Ne],
                singletons: FALSE_ONLY,
            },
            Floating | Other => Replacements {
                operators: &[Le, Ge],
                singletons: FALSE_ONLY,
            },
            Enum => Replacements {
                operators: &[],
                singletons: FALSE_ONLY,
            },
        },
        Ne => match category {
            Boolean | Pointer => Replacements {
                operators: &[Eq],
                singletons: TRUE_ONLY,
            },
            Floating | Other => Replacements {
                operators: &[Lt, Gt],
                singletons: TRUE_ONLY,
            },
            Enum => Replacements {
                operators: &[],
                singletons: TRUE_ONLY,
            },
        },

        // Logical connectors.
        And => Replacements {
            operators: &[Or],
            singletons: &[
                Singleton::True,
                Singleton::False,
                Singleton::Lhs,
                Singleton::Rhs,
            ],
        },
        Or => Replacements {
            operators: &[And],
            singletons: &[
                Singleton::True,
                Singleton::False,
                Singleton::Lhs,
                Singleton::Rhs,
            ],
        },

        // Bitwise connectors.  XOR is deliberately unsupported.
        BitAnd => Replacements {
            operators: &[BitOr],
            singletons: LHS_RHS,
        },
        BitOr => Replacements {
            operators: &[BitAnd],
            singletons: LHS_RHS,
        },
        BitXor => NONE,

        // Shifts and compound assignments: direction/operator swap only,
        // no singleton forms.  `%=` and `^=` have no rule, like `^`.
        Shl => Replacements {
            operators: &[Shr],
            singletons: &[],
        },
        Shr => Replacements {
            operators: &[Shl],
            singletons: &[],
        },
        AddAssign => Replacements {
            operators: &[SubAssign],
            singletons: &[],
        },
        SubAssign => Replacements {
            operators: &[AddAssign],
            singletons: &[],
        },
        MulAssign => Replacements {
            operators: &[DivAssign],
            singletons: &[],
        },
        DivAssign => Replacements {
            operators: &[MulAssign],
            singletons: &[],
        },
        ShlAssign => Replacements {
            operators: &[ShrAssign],
            singletons: &[],
        },
        ShrAssign => Replacements {
            operators: &[ShlAssign],
            singletons: &[],
        },
        AndAssign => Replacements {
            operators: &[OrAssign],
            singletons: &[],
        },
        OrAssign => Replacements {
            operators: &[AndAssign],
            singletons: &[],
        },
        ModAssign | XorAssign => NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::expr::{BinOp, OperandCategory};

    #[test]
    fn test_boolean_equality_row() {
        let r = lookup(BinOp::Eq, OperandCategory::Boolean);
        assert_eq!(r.operators, &[BinOp::Ne]);
        assert_eq!(r.singletons, &[Singleton::False]);

        let r = lookup(BinOp::Ne, OperandCategory::Boolean);
        assert_eq!(r.operators, &[BinOp::Eq]);
        assert_eq!(r.singletons, &[Singleton::True]);
    }

    #[test]
    fn test_boolean_relational_has_no_rule() {
        for op in [BinOp::Lt, BinOp::Gt, BinOp::Le, BinOp::Ge] {
            let r = lookup(op, OperandCategory::Boolean);
            assert!(r.operators.is_empty());
            assert!(r.singletons.is_empty());
        }
    }

    #[test]
    fn test_arithmetic_replaces_with_other_four() {
        let r = lookup(BinOp::Add, OperandCategory::Other);
        assert_eq!(
            r.operators,
            &[BinOp::Sub, BinOp::Mul, BinOp::Div, BinOp::Mod]
        );
        assert_eq!(r.singletons, &[Singleton::Lhs, Singleton::Rhs]);

        // Arithmetic rows are category-independent.
        let r2 = lookup(BinOp::Add, OperandCategory::Floating);
        assert_eq!(r.operators, r2.operators);
    }

    #[test]
    fn test_enum_equality_keeps_only_singleton() {
        let r = lookup(BinOp::Eq, OperandCategory::Enum);
        assert!(r.operators.is_empty());
        assert_eq!(r.singletons, &[Singleton::False]);
    }

    #[test]
    fn test_pointer_relational_row() {
        let r = lookup(BinOp::Lt, OperandCategory::Pointer);
        assert_eq!(r.operators, &[BinOp::Ge, BinOp::Ne]);
        assert_eq!(r.singletons, &[Singleton::False]);
    }

    #[test]
    fn test_logical_singletons() {
        let r = lookup(BinOp::And, OperandCategory::Boolean);
        assert_eq!(r.operators, &[BinOp::Or]);
        assert_eq!(r.singletons.len(), 4);
    }

    #[test]
    fn test_shifts_swap_direction() {
        let r = lookup(BinOp::Shl, OperandCategory::Other);
        assert_eq!(r.operators, &[BinOp::Shr]);
        assert!(r.singletons.is_empty());

        let r = lookup(BinOp::Shr, OperandCategory::Other);
        assert_eq!(r.operators, &[BinOp::Shl]);
    }

    #[test]
    fn test_compound_assignments_swap_pairwise() {
        let pairs = [
            (BinOp::AddAssign, BinOp::SubAssign),
            (BinOp::SubAssign, BinOp::AddAssign),
            (BinOp::MulAssign, BinOp::DivAssign),
            (BinOp::DivAssign, BinOp::MulAssign),
            (BinOp::ShlAssign, BinOp::ShrAssign),
            (BinOp::ShrAssign, BinOp::ShlAssign),
            (BinOp::AndAssign, BinOp::OrAssign),
            (BinOp::OrAssign, BinOp::AndAssign),
        ];
        for (op, swapped) in pairs {
            let r = lookup(op, OperandCategory::Other);
            assert_eq!(r.operators, &[swapped]);
            assert!(r.singletons.is_empty());
        }
    }

    #[test]
    fn test_mod_and_xor_assign_have_no_rule() {
        for op in [BinOp::ModAssign, BinOp::XorAssign] {
            let r = lookup(op, OperandCategory::Other);
            assert!(r.operators.is_empty());
            assert!(r.singletons.is_empty());
        }
    }

    #[test]
    fn test_xor_is_unsupported() {
        for cat in [
            OperandCategory::Boolean,
            OperandCategory::Floating,
            OperandCategory::Enum,
            OperandCategory::Pointer,
            OperandCategory::Other,
        ] {
            let r = lookup(BinOp::BitXor, cat);
            assert!(r.operators.is_empty());
            assert!(r.singletons.is_empty());
        }
    }
}
