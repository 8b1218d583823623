//! Sign-Up Form State
//!
//! Local form state for the sign-up view. The password strength is derived
//! from the password on every change and has no setter of its own.

use crate::constants::MIN_SUBMIT_SCORE;
use crate::domain::password::PasswordStrength;

/// The non-secret part of a sign-up attempt, safe to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpAttempt {
    pub name: String,
    pub email: String,
}

/// Sign-up form state
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    password_strength: PasswordStrength,
    show_password: bool,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn password_strength(&self) -> PasswordStrength {
        self.password_strength
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    // ==================== Setters ====================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replace the password and recompute its strength
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.password_strength = PasswordStrength::evaluate(&self.password);
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    /// Flip between masked and plaintext password rendering
    pub fn toggle_show_password(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    // ==================== Validation ====================

    /// Both password fields are filled in and differ
    pub fn password_mismatch(&self) -> bool {
        !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.password != self.confirm_password
    }

    /// Submit gate
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.password == self.confirm_password
            && self.password_strength.score() >= MIN_SUBMIT_SCORE
    }

    /// Produce the loggable attempt if the gate is open
    pub fn submit(&self) -> Option<SignUpAttempt> {
        self.can_submit().then(|| SignUpAttempt {
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::password::StrengthTier;

    fn filled(password: &str, confirm: &str) -> SignUpForm {
        let mut form = SignUpForm::new();
        form.set_name("Ada Lovelace");
        form.set_email("ada@example.com");
        form.set_password(password);
        form.set_confirm_password(confirm);
        form
    }

    #[test]
    fn strength_follows_password() {
        let mut form = SignUpForm::new();
        assert_eq!(form.password_strength().score(), 0);

        form.set_password("abc");
        assert_eq!(form.password_strength().score(), 1);

        form.set_password("Abcdef1!");
        assert_eq!(form.password_strength().score(), 5);
        assert_eq!(form.password_strength().tier(), StrengthTier::Strong);

        form.set_password("");
        assert_eq!(form.password_strength(), PasswordStrength::default());
    }

    #[test]
    fn strong_matching_password_opens_gate() {
        let form = filled("Abcdef1!", "Abcdef1!");
        assert!(form.can_submit());
        assert_eq!(
            form.submit(),
            Some(SignUpAttempt {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            })
        );
    }

    #[test]
    fn weak_password_keeps_gate_closed() {
        let form = filled("abc", "abc");
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn score_of_three_is_enough() {
        let form = filled("Abc1", "Abc1");
        assert_eq!(form.password_strength().score(), 3);
        assert!(form.can_submit());
    }

    #[test]
    fn mismatch_keeps_gate_closed() {
        let form = filled("Abcdef1!", "Abcdef1?");
        assert!(form.password_mismatch());
        assert!(!form.can_submit());
    }

    #[test]
    fn each_empty_field_closes_gate() {
        let mut form = filled("Abcdef1!", "Abcdef1!");
        form.set_name("");
        assert!(!form.can_submit());

        let mut form = filled("Abcdef1!", "Abcdef1!");
        form.set_email("");
        assert!(!form.can_submit());

        let form = filled("", "");
        assert!(!form.can_submit());

        let form = filled("Abcdef1!", "");
        assert!(!form.can_submit());
    }

    #[test]
    fn mismatch_needs_both_fields() {
        assert!(!filled("Abcdef1!", "").password_mismatch());
        assert!(!filled("", "Abcdef1!").password_mismatch());
        assert!(!filled("same", "same").password_mismatch());
    }

    #[test]
    fn toggle_show_password_does_not_touch_data() {
        let mut form = filled("Abcdef1!", "Abcdef1!");
        assert!(form.toggle_show_password());
        assert!(form.show_password());
        assert_eq!(form.password(), "Abcdef1!");
        assert!(!form.toggle_show_password());
        assert!(form.can_submit());
    }

    #[test]
    fn setters_store_field_values() {
        let form = filled("Abcdef1!", "Abcdef1?");
        assert_eq!(form.name(), "Ada Lovelace");
        assert_eq!(form.email(), "ada@example.com");
        assert_eq!(form.password(), "Abcdef1!");
        assert_eq!(form.confirm_password(), "Abcdef1?");
    }
}
