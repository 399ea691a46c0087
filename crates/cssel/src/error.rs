//! Error types for selector construction.
//!
//! Only the fragment setters on [`SimpleSelector`](crate::SimpleSelector) can
//! fail. Both variants describe a malformed call chain: the caller has to fix
//! the order of calls, retrying will not help.

use thiserror::Error;

use crate::selector::Fragment;

/// Errors raised while chaining fragments onto a simple selector.
///
/// # Examples
///
/// ```rust
/// use cssel::{SelectorError, id};
///
/// let err = id("main").id("other").unwrap_err();
/// assert!(matches!(err, SelectorError::DuplicateSingleton(_)));
/// assert_eq!(err.to_string(), "id occurs more than once");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id, or pseudo-element was set a second time.
    #[error("{0} occurs more than once")]
    DuplicateSingleton(Fragment),

    /// A fragment was supplied after one that must follow it.
    ///
    /// `fragment` is the setter that was rejected, `after` the latest stage
    /// already populated on the selector.
    #[error(
        "fragments must appear in order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder { fragment: Fragment, after: Fragment },
}

impl SelectorError {
    /// The fragment whose setter failed.
    pub fn fragment(&self) -> Fragment {
        match self {
            SelectorError::DuplicateSingleton(fragment) => *fragment,
            SelectorError::OutOfOrder { fragment, .. } => *fragment,
        }
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, SelectorError>;
