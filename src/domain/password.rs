//! Password - Strength Evaluation
//!
//! Scores a password against five independent complexity checks.

use crate::constants::MIN_PASSWORD_LENGTH;

/// Characters that satisfy the special-character check
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single complexity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthCheck {
    /// At least `MIN_PASSWORD_LENGTH` characters
    Length,
    /// Contains an ASCII uppercase letter
    Uppercase,
    /// Contains an ASCII lowercase letter
    Lowercase,
    /// Contains an ASCII digit
    Number,
    /// Contains one of `SPECIAL_CHARACTERS`
    Special,
}

impl StrengthCheck {
    /// All checks in display order
    pub fn all() -> &'static [StrengthCheck] {
        &[
            StrengthCheck::Length,
            StrengthCheck::Uppercase,
            StrengthCheck::Lowercase,
            StrengthCheck::Number,
            StrengthCheck::Special,
        ]
    }

    /// Translation key (within the `signup` namespace) for the check label
    pub fn label_key(self) -> &'static str {
        match self {
            StrengthCheck::Length => "check_length",
            StrengthCheck::Uppercase => "check_uppercase",
            StrengthCheck::Lowercase => "check_lowercase",
            StrengthCheck::Number => "check_number",
            StrengthCheck::Special => "check_special",
        }
    }
}

/// Three-tier strength label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Map a score (0-5) to its tier
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => StrengthTier::Weak,
            2..=3 => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    /// English label
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Translation key (within the `signup` namespace)
    pub fn label_key(self) -> &'static str {
        match self {
            StrengthTier::Weak => "strength_weak",
            StrengthTier::Medium => "strength_medium",
            StrengthTier::Strong => "strength_strong",
        }
    }
}

/// Result of evaluating a password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordStrength {
    /// Evaluate all checks against `password`
    pub fn evaluate(password: &str) -> Self {
        Self {
            // UTF-16 code units, so astral characters count twice
            length: password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    /// Whether a single check passed
    pub fn passed(&self, check: StrengthCheck) -> bool {
        match check {
            StrengthCheck::Length => self.length,
            StrengthCheck::Uppercase => self.uppercase,
            StrengthCheck::Lowercase => self.lowercase,
            StrengthCheck::Number => self.number,
            StrengthCheck::Special => self.special,
        }
    }

    /// Number of passed checks (0-5)
    pub fn score(&self) -> u8 {
        StrengthCheck::all()
            .iter()
            .filter(|check| self.passed(**check))
            .count() as u8
    }

    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_score(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        let strength = PasswordStrength::evaluate("");
        assert_eq!(strength, PasswordStrength::default());
        assert_eq!(strength.score(), 0);
        assert_eq!(strength.tier(), StrengthTier::Weak);
    }

    #[test]
    fn short_lowercase_is_weak() {
        let strength = PasswordStrength::evaluate("abc");
        assert!(strength.lowercase);
        assert!(!strength.length);
        assert!(!strength.uppercase);
        assert!(!strength.number);
        assert!(!strength.special);
        assert_eq!(strength.score(), 1);
        assert_eq!(strength.tier().label(), "Weak");
    }

    #[test]
    fn all_checks_pass_is_strong() {
        let strength = PasswordStrength::evaluate("Abcdef1!");
        assert_eq!(strength.score(), 5);
        assert_eq!(strength.tier(), StrengthTier::Strong);
    }

    #[test]
    fn score_counts_passed_checks() {
        let cases = [
            ("abcdefgh", 2),
            ("ABCDEFGH", 2),
            ("12345678", 2),
            ("Ab1", 3),
            ("aB1\"", 4),
            ("        ", 1),
        ];
        for (password, expected) in cases {
            let strength = PasswordStrength::evaluate(password);
            let counted = StrengthCheck::all()
                .iter()
                .filter(|c| strength.passed(**c))
                .count() as u8;
            assert_eq!(strength.score(), expected, "password {password:?}");
            assert_eq!(strength.score(), counted);
        }
    }

    #[test]
    fn length_counts_utf16_units() {
        assert!(!PasswordStrength::evaluate("ééééééé").length);
        assert!(PasswordStrength::evaluate("éééééééé").length);
        // each emoji is a surrogate pair
        assert!(!PasswordStrength::evaluate("😀😀😀").length);
        assert!(PasswordStrength::evaluate("😀😀😀😀").length);
        assert!(PasswordStrength::evaluate("😀😀😀a").length);
    }

    #[test]
    fn non_ascii_letters_do_not_count_as_cased() {
        let strength = PasswordStrength::evaluate("ÄÖÜäöü");
        assert!(!strength.uppercase);
        assert!(!strength.lowercase);
    }

    #[test]
    fn every_special_character_is_recognized() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(PasswordStrength::evaluate(&c.to_string()).special, "{c}");
        }
        assert!(!PasswordStrength::evaluate("-_=+~").special);
    }

    #[test]
    fn tier_thresholds() {
        let tiers: Vec<_> = (0..=5).map(StrengthTier::from_score).collect();
        assert_eq!(
            tiers,
            vec![
                StrengthTier::Weak,
                StrengthTier::Weak,
                StrengthTier::Medium,
                StrengthTier::Medium,
                StrengthTier::Strong,
                StrengthTier::Strong,
            ]
        );
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    }
}
