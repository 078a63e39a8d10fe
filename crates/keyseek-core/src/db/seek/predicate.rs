use crate::value::Value;
use std::{
    fmt,
    ops::{BitAnd, BitOr},
};

///
/// Predicate AST
///
/// Backend-neutral filter produced by the seek compiler. Only the shapes a
/// keyset seek needs are representable: conjunction, disjunction and a single
/// column comparison against a bound value.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    /// SQL operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }

    #[must_use]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, Self::Eq | Self::Lte | Self::Gte)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    And(Vec<Self>),
    Or(Vec<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[must_use]
    pub fn compare(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self::Compare(ComparePredicate::new(field, op, value))
    }

    /// Every comparison in the tree, in left-to-right order.
    #[must_use]
    pub fn comparisons(&self) -> Vec<&ComparePredicate> {
        let mut out = Vec::new();
        self.collect_comparisons(&mut out);

        out
    }

    fn collect_comparisons<'a>(&'a self, out: &mut Vec<&'a ComparePredicate>) {
        match self {
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.collect_comparisons(out);
                }
            }
            Self::Compare(cmp) => out.push(cmp),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}
