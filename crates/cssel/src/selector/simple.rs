use std::fmt;

use crate::error::{Result, SelectorError};
use crate::selector::Fragment;

/// A compound selector such as `a#nav.link[href]:hover::after`.
///
/// Fragments must be supplied in grammar order (see [`Fragment`]). Each
/// setter consumes the selector and hands it back, so chains read
/// `id("main").class("container")?.class("editable")?`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    pub(crate) element: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attr: Option<String>,
    pub(crate) pseudo_classes: Vec<String>,
    pub(crate) pseudo_element: Option<String>,
}

impl SimpleSelector {
    /// Creates a selector with no fragments. It renders as an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element (type) name.
    pub fn element(mut self, name: impl Into<String>) -> Result<Self> {
        self.check(Fragment::Element)?;
        self.element = Some(name.into());
        Ok(self)
    }

    /// Sets the id, rendered as `#name`.
    pub fn id(mut self, name: impl Into<String>) -> Result<Self> {
        self.check(Fragment::Id)?;
        self.id = Some(name.into());
        Ok(self)
    }

    /// Appends a class, rendered as `.name`. Repeats are kept.
    pub fn class(mut self, name: impl Into<String>) -> Result<Self> {
        self.check(Fragment::Class)?;
        self.classes.push(name.into());
        Ok(self)
    }

    /// Sets the attribute clause, rendered as `[clause]`.
    ///
    /// A second call replaces the previous clause instead of failing.
    pub fn attr(mut self, clause: impl Into<String>) -> Result<Self> {
        self.check(Fragment::Attribute)?;
        self.attr = Some(clause.into());
        Ok(self)
    }

    /// Appends a pseudo-class, rendered as `:name`. Repeats are kept.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self> {
        self.check(Fragment::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        Ok(self)
    }

    /// Sets the pseudo-element, rendered as `::name`.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self> {
        self.check(Fragment::PseudoElement)?;
        self.pseudo_element = Some(name.into());
        Ok(self)
    }

    /// Validates that `fragment` may be set next. Never mutates.
    fn check(&self, fragment: Fragment) -> Result<()> {
        if fragment.is_singleton() && self.has(fragment) {
            log::debug!("rejected {fragment}: already set on `{self}`");
            return Err(SelectorError::DuplicateSingleton(fragment));
        }

        match self.latest() {
            Some(after) if after > fragment => {
                log::debug!("rejected {fragment}: {after} already set on `{self}`");
                Err(SelectorError::OutOfOrder { fragment, after })
            }
            _ => Ok(()),
        }
    }

    /// Values stored for `fragment`, in insertion order.
    ///
    /// Single-valued fragments yield at most one entry.
    pub fn values(&self, fragment: Fragment) -> &[String] {
        match fragment {
            Fragment::Element => self.element.as_slice(),
            Fragment::Id => self.id.as_slice(),
            Fragment::Class => &self.classes,
            Fragment::Attribute => self.attr.as_slice(),
            Fragment::PseudoClass => &self.pseudo_classes,
            Fragment::PseudoElement => self.pseudo_element.as_slice(),
        }
    }

    pub fn has(&self, fragment: Fragment) -> bool {
        !self.values(fragment).is_empty()
    }

    /// The furthest stage of the grammar populated so far.
    pub fn latest(&self) -> Option<Fragment> {
        Fragment::ALL.into_iter().rev().find(|f| self.has(*f))
    }

    pub fn is_empty(&self) -> bool {
        self.latest().is_none()
    }

    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attribute(&self) -> Option<&str> {
        self.attr.as_deref()
    }

    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Renders the selector, e.g. `a[href$=".png"]:focus`.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compound selectors have no separators between groups.
        for fragment in Fragment::ALL {
            for value in self.values(fragment) {
                write!(f, "{}{}{}", fragment.prefix(), value, fragment.suffix())?;
            }
        }
        Ok(())
    }
}
