use std::fmt;

use crate::selector::{CombinatorExpression, SimpleSelector};

/// Anything that renders to a selector string: a compound selector or two
/// expressions joined by a combinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorExpression {
    Simple(SimpleSelector),
    Combinator(CombinatorExpression),
}

impl SelectorExpression {
    pub fn is_simple(&self) -> bool {
        matches!(self, SelectorExpression::Simple(_))
    }

    pub fn is_combinator(&self) -> bool {
        matches!(self, SelectorExpression::Combinator(_))
    }

    pub fn as_simple(&self) -> Option<&SimpleSelector> {
        match self {
            SelectorExpression::Simple(simple) => Some(simple),
            SelectorExpression::Combinator(_) => None,
        }
    }

    pub fn as_combinator(&self) -> Option<&CombinatorExpression> {
        match self {
            SelectorExpression::Combinator(expr) => Some(expr),
            SelectorExpression::Simple(_) => None,
        }
    }

    /// Renders the whole tree. Calling it repeatedly yields the same string.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorExpression::Simple(simple) => fmt::Display::fmt(simple, f),
            SelectorExpression::Combinator(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl From<SimpleSelector> for SelectorExpression {
    fn from(simple: SimpleSelector) -> Self {
        SelectorExpression::Simple(simple)
    }
}

impl From<CombinatorExpression> for SelectorExpression {
    fn from(expr: CombinatorExpression) -> Self {
        SelectorExpression::Combinator(expr)
    }
}
