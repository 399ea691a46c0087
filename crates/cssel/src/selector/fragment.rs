use std::fmt;

/// One of the six pieces a simple selector is assembled from.
///
/// Variants are declared in the order they must be supplied to the builder,
/// so the derived `Ord` is the ordering grammar itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fragment {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl Fragment {
    /// Every fragment kind, in grammar order.
    pub const ALL: [Fragment; 6] = [
        Fragment::Element,
        Fragment::Id,
        Fragment::Class,
        Fragment::Attribute,
        Fragment::PseudoClass,
        Fragment::PseudoElement,
    ];

    /// Name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Fragment::Element => "element",
            Fragment::Id => "id",
            Fragment::Class => "class",
            Fragment::Attribute => "attribute",
            Fragment::PseudoClass => "pseudo-class",
            Fragment::PseudoElement => "pseudo-element",
        }
    }

    /// Fragments that may occur at most once per simple selector.
    ///
    /// The attribute clause is single-valued but overwrites instead of
    /// failing, so it is not a singleton here.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            Fragment::Element | Fragment::Id | Fragment::PseudoElement
        )
    }

    /// Punctuation written before the fragment value.
    pub fn prefix(self) -> &'static str {
        match self {
            Fragment::Element => "",
            Fragment::Id => "#",
            Fragment::Class => ".",
            Fragment::Attribute => "[",
            Fragment::PseudoClass => ":",
            Fragment::PseudoElement => "::",
        }
    }

    /// Punctuation written after the fragment value.
    pub fn suffix(self) -> &'static str {
        match self {
            Fragment::Attribute => "]",
            _ => "",
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
