//! Login Form State

/// The non-secret part of a login attempt, safe to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    email: String,
    password: String,
    show_password: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn toggle_show_password(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn submit(&self) -> Option<LoginAttempt> {
        self.can_submit().then(|| LoginAttempt {
            email: self.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_requires_both_fields() {
        let mut form = LoginForm::new();
        assert!(!form.can_submit());

        form.set_email("ada@example.com");
        assert!(!form.can_submit());

        form.set_password("x");
        assert!(form.can_submit());
        assert_eq!(form.submit().map(|a| a.email), Some("ada@example.com".to_string()));
    }

    #[test]
    fn toggle_keeps_entered_values() {
        let mut form = LoginForm::new();
        form.set_email("ada@example.com");
        form.set_password("hunter22");

        assert!(form.toggle_show_password());
        assert!(form.show_password());
        assert_eq!(form.email(), "ada@example.com");
        assert_eq!(form.password(), "hunter22");
    }
}
