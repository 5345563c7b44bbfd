//! Account edit form.
//!
//! The form starts from the last fetched [`User`], takes field edits on top,
//! and turns into a [`UserUpdate`] on submit. A blank password never reaches
//! the payload; every other field is sent as it stands, so an empty string
//! clears the stored value.

use vault_api_models::{User, UserUpdate};

/// Editable copy of the account fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Display name.
    pub full_name: String,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// New password; starts empty.
    pub password: String,
}

/// Field edits requested by the caller. `None` keeps the prefilled value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEdits {
    /// Replacement display name.
    pub full_name: Option<String>,
    /// Replacement login name.
    pub username: Option<String>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement phone.
    pub phone: Option<String>,
    /// New password.
    pub password: Option<String>,
}

impl ProfileEdits {
    /// `true` when no field was touched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password.is_none()
    }
}

impl ProfileForm {
    /// Prefill from the current account; missing fields become empty strings.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone().unwrap_or_default(),
            username: user.username.clone(),
            email: user.email.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            password: String::new(),
        }
    }

    /// Apply caller edits on top of the prefilled values.
    #[must_use]
    pub fn with_edits(mut self, edits: ProfileEdits) -> Self {
        if let Some(value) = edits.full_name {
            self.full_name = value;
        }
        if let Some(value) = edits.username {
            self.username = value;
        }
        if let Some(value) = edits.email {
            self.email = value;
        }
        if let Some(value) = edits.phone {
            self.phone = value;
        }
        if let Some(value) = edits.password {
            self.password = value;
        }
        self
    }

    /// Build the PATCH payload, dropping an empty password.
    ///
    /// Only the empty string counts as "no new password"; whitespace typed
    /// by the user is sent as it stands.
    #[must_use]
    pub fn into_update(self) -> UserUpdate {
        let password = if self.password.is_empty() {
            None
        } else {
            Some(self.password)
        };
        UserUpdate {
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vault_test_support::fixtures::{bare_user, sample_user};

    #[test]
    fn prefill_turns_missing_fields_into_empty_strings() {
        let form = ProfileForm::from_user(&bare_user());
        assert_eq!(
            form,
            ProfileForm {
                username: "grace".into(),
                ..ProfileForm::default()
            }
        );
    }

    #[test]
    fn empty_password_is_absent_from_payload() {
        let update = ProfileForm::from_user(&sample_user())
            .with_edits(ProfileEdits {
                password: Some(String::new()),
                ..ProfileEdits::default()
            })
            .into_update();
        let value = serde_json::to_value(&update).expect("serialize");
        assert!(value.get("password").is_none());

        let untouched = ProfileForm::from_user(&sample_user()).into_update();
        assert_eq!(untouched.password, None);
    }

    #[test]
    fn whitespace_password_is_sent_as_typed() {
        let update = ProfileForm::from_user(&sample_user())
            .with_edits(ProfileEdits {
                password: Some("   ".into()),
                ..ProfileEdits::default()
            })
            .into_update();
        let value = serde_json::to_value(&update).expect("serialize");
        assert_eq!(value["password"], "   ");
    }

    #[test]
    fn empty_strings_are_sent_to_clear_fields() {
        let update = ProfileForm::from_user(&sample_user())
            .with_edits(ProfileEdits {
                phone: Some(String::new()),
                password: Some("s3cret".into()),
                ..ProfileEdits::default()
            })
            .into_update();
        assert_eq!(
            serde_json::to_value(&update).expect("serialize"),
            json!({
                "fullName": "Ada Lovelace",
                "username": "ada",
                "email": "ada@example.com",
                "phone": "",
                "password": "s3cret"
            })
        );
    }

    #[test]
    fn edits_report_emptiness() {
        assert!(ProfileEdits::default().is_empty());
        assert!(
            !ProfileEdits {
                email: Some(String::new()),
                ..ProfileEdits::default()
            }
            .is_empty()
        );
    }
}
