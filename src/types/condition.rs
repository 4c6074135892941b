use std::fmt;
use std::str::FromStr;

use crate::parse::ParseError;

/// Comparison operators supported in condition strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Gt,
    Lte,
    Gte,
    Eq,
    Neq,
}

impl CompareOp {
    /// Apply the operator with `value` on the left and `threshold` on the right.
    #[must_use]
    pub fn holds(self, value: i32, threshold: i32) -> bool {
        match self {
            CompareOp::Lt => value < threshold,
            CompareOp::Gt => value > threshold,
            CompareOp::Lte => value <= threshold,
            CompareOp::Gte => value >= threshold,
            CompareOp::Eq => value == threshold,
            CompareOp::Neq => value != threshold,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Lte => write!(f, "<="),
            CompareOp::Gte => write!(f, ">="),
            CompareOp::Eq => write!(f, "="),
            CompareOp::Neq => write!(f, "!="),
        }
    }
}

/// A single `op threshold` test, e.g. `>=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub op: CompareOp,
    pub threshold: i32,
}

impl Comparison {
    #[must_use]
    pub fn new(op: CompareOp, threshold: i32) -> Self {
        Self { op, threshold }
    }

    #[must_use]
    pub fn evaluate(&self, value: i32) -> bool {
        self.op.holds(value, self.threshold)
    }
}

/// Comparisons joined by `&`. Holds when every comparison holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjunction {
    comparisons: Vec<Comparison>,
}

impl Conjunction {
    #[must_use]
    pub fn new(comparisons: Vec<Comparison>) -> Self {
        Self { comparisons }
    }

    #[must_use]
    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    #[must_use]
    pub fn evaluate(&self, value: i32) -> bool {
        self.comparisons.iter().all(|c| c.evaluate(value))
    }
}

/// A parsed condition string: conjunctions joined by `|`.
///
/// `&` binds tighter than `|`, so `">3 & <10 | =15"` reads as
/// `(>3 AND <10) OR =15`.
///
/// ```
/// use overlay_state::Condition;
///
/// let cond: Condition = ">3 & <10 | =15".parse().unwrap();
/// assert!(cond.evaluate(5));
/// assert!(cond.evaluate(15));
/// assert!(!cond.evaluate(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    conjunctions: Vec<Conjunction>,
}

impl Condition {
    #[must_use]
    pub fn new(conjunctions: Vec<Conjunction>) -> Self {
        Self { conjunctions }
    }

    /// Parse a condition string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when `text` is not a condition at all. This is
    /// distinct from a condition that evaluates to `false`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        crate::parse::parse_condition(text)
    }

    #[must_use]
    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.conjunctions
    }

    /// True iff at least one conjunction has all of its comparisons true.
    #[must_use]
    pub fn evaluate(&self, value: i32) -> bool {
        self.conjunctions.iter().any(|c| c.evaluate(value))
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.threshold)
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.comparisons.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.conjunctions.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
