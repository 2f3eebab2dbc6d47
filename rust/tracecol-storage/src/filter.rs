//! Single-column filter predicates.

use std::fmt;

/// Comparison operator of a [`FilterPredicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    IsNull,
    IsNotNull,
}

impl FilterOp {
    pub const ALL: [FilterOp; 8] = [
        FilterOp::Eq,
        FilterOp::Ne,
        FilterOp::Lt,
        FilterOp::Le,
        FilterOp::Gt,
        FilterOp::Ge,
        FilterOp::IsNull,
        FilterOp::IsNotNull,
    ];

    /// Returns `true` for `IsNull` and `IsNotNull`, which ignore the operand.
    pub fn is_null_check(self) -> bool {
        matches!(self, FilterOp::IsNull | FilterOp::IsNotNull)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
            FilterOp::Gt => ">",
            FilterOp::Ge => ">=",
            FilterOp::IsNull => "IS NULL",
            FilterOp::IsNotNull => "IS NOT NULL",
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a predicate.
///
/// Integer operands are carried as `i64` so that values outside the `u32`
/// domain of a column can still be expressed; each storage kind decides how
/// such values resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Null,
    Int(i64),
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Int(value as i64)
    }
}

impl From<Option<i64>> for Operand {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Operand::Null, Operand::Int)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Null => f.write_str("NULL"),
            Operand::Int(value) => write!(f, "{value}"),
        }
    }
}

/// A predicate over a single column: `value <op> operand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterPredicate {
    pub op: FilterOp,
    pub operand: Operand,
}

impl FilterPredicate {
    pub fn new(op: FilterOp, operand: impl Into<Operand>) -> FilterPredicate {
        FilterPredicate {
            op,
            operand: operand.into(),
        }
    }

    pub fn eq(value: impl Into<Operand>) -> FilterPredicate {
        Self::new(FilterOp::Eq, value)
    }

    pub fn ne(value: impl Into<Operand>) -> FilterPredicate {
        Self::new(FilterOp::Ne, value)
    }

    pub fn lt(value: impl Into<Operand>) -> FilterPredicate {
        Self::new(FilterOp::Lt, value)
    }

    pub fn le(value: impl Into<Operand>) -> FilterPredicate {
        Self::new(FilterOp::Le, value)
    }

    pub fn gt(value: impl Into<Operand>) -> FilterPredicate {
        Self::new(FilterOp::Gt, value)
    }

    pub fn ge(value: impl Into<Operand>) -> FilterPredicate {
        Self::new(FilterOp::Ge, value)
    }

    pub fn is_null() -> FilterPredicate {
        Self::new(FilterOp::IsNull, Operand::Null)
    }

    pub fn is_not_null() -> FilterPredicate {
        Self::new(FilterOp::IsNotNull, Operand::Null)
    }

    /// Evaluates the predicate against a single non-null column value.
    ///
    /// Comparisons against a `Null` operand are never true. Integer operands
    /// outside the `u32` domain compare naturally in `i64`.
    pub fn matches(&self, value: u32) -> bool {
        let ord = match (self.op, self.operand) {
            (FilterOp::IsNull, _) => return false,
            (FilterOp::IsNotNull, _) => return true,
            (_, Operand::Null) => return false,
            (_, Operand::Int(operand)) => (value as i64).cmp(&operand),
        };
        match self.op {
            FilterOp::Eq => ord.is_eq(),
            FilterOp::Ne => ord.is_ne(),
            FilterOp::Lt => ord.is_lt(),
            FilterOp::Le => ord.is_le(),
            FilterOp::Gt => ord.is_gt(),
            FilterOp::Ge => ord.is_ge(),
            FilterOp::IsNull => false,
            FilterOp::IsNotNull => true,
        }
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op.is_null_check() {
            f.write_str(self.op.as_str())
        } else {
            write!(f, "{} {}", self.op, self.operand)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterOp, FilterPredicate, Operand};

    #[test]
    fn test_matches_comparisons() {
        assert!(FilterPredicate::eq(5u32).matches(5));
        assert!(!FilterPredicate::eq(5u32).matches(4));
        assert!(FilterPredicate::ne(5u32).matches(4));
        assert!(FilterPredicate::lt(5u32).matches(4));
        assert!(!FilterPredicate::lt(5u32).matches(5));
        assert!(FilterPredicate::le(5u32).matches(5));
        assert!(FilterPredicate::gt(5u32).matches(6));
        assert!(!FilterPredicate::gt(5u32).matches(5));
        assert!(FilterPredicate::ge(5u32).matches(5));
    }

    #[test]
    fn test_matches_out_of_domain() {
        assert!(FilterPredicate::ge(-1i64).matches(0));
        assert!(!FilterPredicate::lt(-1i64).matches(0));
        assert!(FilterPredicate::lt(u32::MAX as i64 + 1).matches(u32::MAX));
        assert!(!FilterPredicate::eq(u32::MAX as i64 + 1).matches(u32::MAX));
    }

    #[test]
    fn test_matches_nulls() {
        for op in FilterOp::ALL {
            let predicate = FilterPredicate::new(op, Operand::Null);
            assert_eq!(predicate.matches(0), op == FilterOp::IsNotNull, "{op}");
        }
        assert!(FilterPredicate::is_not_null().matches(17));
        assert!(!FilterPredicate::is_null().matches(17));
    }

    #[test]
    fn test_display() {
        assert_eq!(FilterPredicate::le(3u32).to_string(), "<= 3");
        assert_eq!(FilterPredicate::ne(Operand::Null).to_string(), "!= NULL");
        assert_eq!(FilterPredicate::is_null().to_string(), "IS NULL");
        assert_eq!(Operand::from(None).to_string(), "NULL");
    }
}
