use serde::Serialize;

/// Body for `PUT /profile`.
///
/// Password fields are only sent when a password change was requested.
#[derive(Clone, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl ProfileUpdate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            old_password: None,
            password: None,
            password_confirmation: None,
        }
    }

    /// Request a password change. An empty `old_password` means no change.
    pub fn with_password_change(
        mut self,
        old_password: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        let old_password = old_password.into();
        if old_password.is_empty() {
            return self;
        }

        self.old_password = Some(old_password);
        self.password = Some(password.into());
        self.password_confirmation = Some(password_confirmation.into());
        self
    }

    pub fn changes_password(&self) -> bool {
        self.old_password.is_some()
    }
}

impl std::fmt::Debug for ProfileUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileUpdate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("changes_password", &self.changes_password())
            .finish()
    }
}
