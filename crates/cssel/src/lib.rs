//! # cssel - CSS selector builder
//!
//! Renders CSS selector strings from chained method calls. Nothing is parsed
//! or matched; the crate only checks that fragments are chained in a valid
//! order and then concatenates them with the right punctuation.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssel::{Combinator, combine, element, id};
//!
//! # fn main() -> cssel::Result<()> {
//! let main = id("main").class("container")?.class("editable")?;
//! assert_eq!(main.stringify(), "#main.container.editable");
//!
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let both = combine(main, Combinator::Child, link);
//! assert_eq!(both.stringify(), r#"#main.container.editable > a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Fragment order
//!
//! A simple selector takes its fragments in this order:
//!
//! 1. element (once)
//! 2. id (once), rendered `#id`
//! 3. classes (repeatable), rendered `.class`
//! 4. attribute (last call wins), rendered `[attr]`
//! 5. pseudo-classes (repeatable), rendered `:name`
//! 6. pseudo-element (once), rendered `::name`
//!
//! Going backwards yields [`SelectorError::OutOfOrder`]; repeating a
//! once-only fragment yields [`SelectorError::DuplicateSingleton`].
//!
//! ## Combinators
//!
//! [`combine`] joins two expressions with any token, padding it with a space
//! on each side. A descendant combinator (`" "`) therefore renders as three
//! spaces.
//!
//! ## Modules
//!
//! - [`selector`]: selector expression types
//! - [`error`]: errors for malformed call chains

pub mod error;
pub mod selector;

pub use error::{Result, SelectorError};
pub use selector::{
    Combinator, CombinatorExpression, Fragment, SelectorExpression, SimpleSelector,
};

/// Starts a selector with an element name.
pub fn element(name: impl Into<String>) -> SimpleSelector {
    SimpleSelector {
        element: Some(name.into()),
        ..SimpleSelector::default()
    }
}

/// Starts a selector with an id.
pub fn id(name: impl Into<String>) -> SimpleSelector {
    SimpleSelector {
        id: Some(name.into()),
        ..SimpleSelector::default()
    }
}

/// Starts a selector with a class.
pub fn class(name: impl Into<String>) -> SimpleSelector {
    SimpleSelector {
        classes: vec![name.into()],
        ..SimpleSelector::default()
    }
}

/// Starts a selector with an attribute clause, e.g. `attr("href^=\"http\"")`.
pub fn attr(clause: impl Into<String>) -> SimpleSelector {
    SimpleSelector {
        attr: Some(clause.into()),
        ..SimpleSelector::default()
    }
}

/// Starts a selector with a pseudo-class.
pub fn pseudo_class(name: impl Into<String>) -> SimpleSelector {
    SimpleSelector {
        pseudo_classes: vec![name.into()],
        ..SimpleSelector::default()
    }
}

/// Starts a selector with a pseudo-element.
pub fn pseudo_element(name: impl Into<String>) -> SimpleSelector {
    SimpleSelector {
        pseudo_element: Some(name.into()),
        ..SimpleSelector::default()
    }
}

/// Joins two expressions with a combinator token.
///
/// The token is not validated; pass a [`Combinator`] or any string.
///
/// ```rust
/// use cssel::{combine, element};
///
/// let nested = combine(combine(element("h1"), "+", element("p")), "~", element("ul"));
/// assert_eq!(nested.stringify(), "h1 + p ~ ul");
/// ```
pub fn combine(
    left: impl Into<SelectorExpression>,
    token: impl Into<String>,
    right: impl Into<SelectorExpression>,
) -> SelectorExpression {
    let token = token.into();
    log::trace!("combining selectors with {token:?}");
    CombinatorExpression::new(left.into(), token, right.into()).into()
}
