use std::fmt;

use crate::selector::SelectorExpression;

/// The four standard CSS combinators.
///
/// [`combine`](crate::combine) accepts any token string; this enum only names
/// the usual ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // " "
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }

    /// Recognizes one of the standard tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Combinator::Descendant),
            ">" => Some(Combinator::Child),
            "+" => Some(Combinator::AdjacentSibling),
            "~" => Some(Combinator::GeneralSibling),
            _ => None,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        combinator.as_str().to_string()
    }
}

/// Two selector expressions joined by a combinator token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinatorExpression {
    left: Box<SelectorExpression>,
    token: String,
    right: Box<SelectorExpression>,
}

impl CombinatorExpression {
    /// Joins `left` and `right`. The token is stored verbatim.
    pub fn new(
        left: SelectorExpression,
        token: impl Into<String>,
        right: SelectorExpression,
    ) -> Self {
        Self {
            left: Box::new(left),
            token: token.into(),
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &SelectorExpression {
        &self.left
    }

    pub fn right(&self) -> &SelectorExpression {
        &self.right
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The token as a standard combinator, if it is one.
    pub fn combinator(&self) -> Option<Combinator> {
        Combinator::from_token(&self.token)
    }

    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinatorExpression {
    /// Always pads the token with one space per side, so a descendant
    /// combinator renders as three spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.token, self.right)
    }
}
