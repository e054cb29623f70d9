use crate::error::{CoreError, CoreResult};

/// What an event offers on a night it runs.
///
/// Every listed event is a class, a social, or both; an event that is
/// neither would never appear in any listing, so that state is not
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Class,
    Social,
    ClassAndSocial,
}

impl EventKind {
    /// Builds an `EventKind` from the boundary row's class/social flags.
    ///
    /// ## Errors
    /// Returns an error when both flags are false - such an event would
    /// never be listed anywhere.
    pub fn from_flags(has_class: bool, has_social: bool) -> CoreResult<Self> {
        match (has_class, has_social) {
            (true, true) => Ok(Self::ClassAndSocial),
            (true, false) => Ok(Self::Class),
            (false, true) => Ok(Self::Social),
            (false, false) => Err(CoreError::InvariantViolation(
                "events must have either a social or a class",
            )),
        }
    }

    #[must_use]
    pub const fn has_class(self) -> bool {
        matches!(self, Self::Class | Self::ClassAndSocial)
    }

    #[must_use]
    pub const fn has_social(self) -> bool {
        matches!(self, Self::Social | Self::ClassAndSocial)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Social => "social",
            Self::ClassAndSocial => "class_and_social",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
