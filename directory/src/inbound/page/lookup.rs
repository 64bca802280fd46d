//! Three-way lookup outcome.

/// Result of a lookup that may be skipped before it starts.
///
/// Distinguishes "nothing to look up" from "looked, found nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The required input was absent, so no lookup happened.
    Skipped,
    /// The lookup ran and matched nothing.
    NotFound,
    /// The lookup matched.
    Found(T),
}

impl<T> Lookup<T> {
    /// Build from an optional match, for lookups that did run.
    pub fn from_match(found: Option<T>) -> Self {
        found.map_or(Self::NotFound, Self::Found)
    }

    /// Return the matched value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Skipped | Self::NotFound => None,
        }
    }

    /// Whether the lookup was skipped.
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_matches_carry_a_value() {
        assert_eq!(Lookup::<u8>::Skipped.found(), None);
        assert_eq!(Lookup::<u8>::NotFound.found(), None);
        assert_eq!(Lookup::Found(3_u8).found(), Some(3));
    }

    #[test]
    fn lookups_that_ran_are_never_skipped() {
        assert_eq!(Lookup::<u8>::from_match(None), Lookup::NotFound);
        assert!(!Lookup::from_match(Some(1_u8)).is_skipped());
    }
}
