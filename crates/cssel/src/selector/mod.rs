//! Selector expression types.
//!
//! - [`Fragment`]: the six compound-selector pieces, in grammar order
//! - [`SimpleSelector`]: accumulates fragments and enforces their order
//! - [`CombinatorExpression`] and [`Combinator`]: two expressions joined by a token
//! - [`SelectorExpression`]: either of the above, rendered via `stringify`

pub mod combinator;
pub mod expression;
pub mod fragment;
pub mod simple;

pub use crate::selector::combinator::{Combinator, CombinatorExpression};
pub use crate::selector::expression::SelectorExpression;
pub use crate::selector::fragment::Fragment;
pub use crate::selector::simple::SimpleSelector;
