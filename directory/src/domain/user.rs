//! Directory user (employee) records.

/// Employer details attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Company slogan shown under the author line.
    pub catch_phrase: String,
}

impl Company {
    /// Build a company record.
    pub fn new(name: impl Into<String>, catch_phrase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catch_phrase: catch_phrase.into(),
        }
    }
}

/// One employee as returned by the directory API.
///
/// `User::default()` is the empty record a failed single-user lookup degrades
/// to: id `0`, no name, no company.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    /// Numeric identifier, also used as the select option value.
    pub id: u64,
    /// Display name, also used as the select option label.
    pub name: String,
    /// Employer, when the API provides one.
    pub company: Option<Company>,
}

impl User {
    /// Build a user without a company.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            company: None,
        }
    }

    /// Attach a company to the user.
    #[must_use]
    pub fn with_company(mut self, company: Company) -> Self {
        self.company = Some(company);
        self
    }

    /// Company name, or an empty string when the user has no company.
    #[must_use]
    pub fn company_name(&self) -> &str {
        self.company
            .as_ref()
            .map_or("", |company| company.name.as_str())
    }

    /// Company catchphrase, or an empty string when the user has no company.
    #[must_use]
    pub fn catch_phrase(&self) -> &str {
        self.company
            .as_ref()
            .map_or("", |company| company.catch_phrase.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_accessors_fall_back_to_empty_strings() {
        let user = User::new(1, "Leanne Graham");
        assert_eq!(user.company_name(), "");
        assert_eq!(user.catch_phrase(), "");

        let user = user.with_company(Company::new("Romaguera-Crona", "Multi-layered"));
        assert_eq!(user.company_name(), "Romaguera-Crona");
        assert_eq!(user.catch_phrase(), "Multi-layered");
    }

    #[test]
    fn default_user_is_the_empty_record() {
        let user = User::default();
        assert_eq!(user.id, 0);
        assert!(user.name.is_empty());
        assert!(user.company.is_none());
    }
}
