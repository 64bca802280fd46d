//! Admission rules for user and post identifiers.
//!
//! Every identifier-keyed operation first passes its raw id through a
//! [`ZeroIdPolicy`]. Absent ids are always skipped; whether `0` counts as
//! absent is the policy's choice.

/// How an identifier of `0` is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroIdPolicy {
    /// `0` is indistinguishable from an absent id and is skipped.
    #[default]
    TreatAsAbsent,
    /// `0` is a real identifier and is looked up like any other.
    Accept,
}

impl ZeroIdPolicy {
    /// Select the policy from a boolean "accept zero ids" switch.
    #[must_use]
    pub const fn from_accept_zero(accept_zero: bool) -> Self {
        if accept_zero {
            Self::Accept
        } else {
            Self::TreatAsAbsent
        }
    }

    /// Return the id to act on, or `None` when the operation must be skipped.
    ///
    /// # Examples
    /// ```
    /// use employee_directory::domain::ZeroIdPolicy;
    ///
    /// assert_eq!(ZeroIdPolicy::TreatAsAbsent.admit(Some(0)), None);
    /// assert_eq!(ZeroIdPolicy::Accept.admit(Some(0)), Some(0));
    /// assert_eq!(ZeroIdPolicy::Accept.admit(None), None);
    /// ```
    #[must_use]
    pub const fn admit(self, raw: Option<u64>) -> Option<u64> {
        match (self, raw) {
            (_, None) | (Self::TreatAsAbsent, Some(0)) => None,
            (_, Some(id)) => Some(id),
        }
    }

    /// Parse a textual id (attribute or form value) and admit it.
    ///
    /// Blank or non-numeric text is absent.
    #[must_use]
    pub fn admit_text(self, raw: Option<&str>) -> Option<u64> {
        self.admit(raw.and_then(|text| text.trim().parse().ok()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::absent_default(ZeroIdPolicy::TreatAsAbsent, None, None)]
    #[case::zero_default(ZeroIdPolicy::TreatAsAbsent, Some(0), None)]
    #[case::positive_default(ZeroIdPolicy::TreatAsAbsent, Some(7), Some(7))]
    #[case::absent_accepting(ZeroIdPolicy::Accept, None, None)]
    #[case::zero_accepting(ZeroIdPolicy::Accept, Some(0), Some(0))]
    #[case::positive_accepting(ZeroIdPolicy::Accept, Some(7), Some(7))]
    fn admits_ids_per_policy(
        #[case] policy: ZeroIdPolicy,
        #[case] raw: Option<u64>,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(policy.admit(raw), expected);
    }

    #[rstest]
    #[case::numeric(Some("12"), Some(12))]
    #[case::padded(Some(" 3 "), Some(3))]
    #[case::blank(Some(""), None)]
    #[case::word(Some("abc"), None)]
    #[case::negative(Some("-1"), None)]
    #[case::absent(None, None)]
    fn admits_textual_ids(#[case] raw: Option<&str>, #[case] expected: Option<u64>) {
        assert_eq!(ZeroIdPolicy::Accept.admit_text(raw), expected);
    }

    #[test]
    fn zero_text_follows_the_policy() {
        assert_eq!(ZeroIdPolicy::TreatAsAbsent.admit_text(Some("0")), None);
        assert_eq!(ZeroIdPolicy::Accept.admit_text(Some("0")), Some(0));
    }

    #[test]
    fn switch_selects_policy() {
        assert_eq!(ZeroIdPolicy::from_accept_zero(false), ZeroIdPolicy::TreatAsAbsent);
        assert_eq!(ZeroIdPolicy::from_accept_zero(true), ZeroIdPolicy::Accept);
    }
}
