//! Registration validation rules
//!
//! Pure validity checks over the registration fields. Each rule reads field
//! values and yields zero or one warning string; none of them touch the
//! page. [`RuleSet::evaluate`] runs every rule on every attempt so a single
//! submit surfaces all violations at once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// Three-part email shape: local part, `@`, domain, `.`, suffix, where no
// part may contain whitespace or `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Minimum username length, counted in characters after trimming.
pub const USERNAME_MIN_CHARS: usize = 3;

/// Minimum password length, counted in characters, untrimmed.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Ordered warnings produced by one validation attempt.
pub type WarningList = Vec<String>;

/// Snapshot of the four registration field values at submit time.
///
/// Taken once per attempt; rules read it and never write it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
	pub username: String,
	pub email: String,
	pub password1: String,
	pub password2: String,
}

impl RegistrationInput {
	/// Creates a snapshot from the four field values.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::RegistrationInput;
	///
	/// let input = RegistrationInput::new("alice", "alice@example.com", "Secret123", "Secret123");
	/// assert_eq!(input.username, "alice");
	/// ```
	pub fn new(
		username: impl Into<String>,
		email: impl Into<String>,
		password1: impl Into<String>,
		password2: impl Into<String>,
	) -> Self {
		Self {
			username: username.into(),
			email: email.into(),
			password1: password1.into(),
			password2: password2.into(),
		}
	}
}

/// Warns when the trimmed username is shorter than three characters.
///
/// # Examples
///
/// ```
/// use formguard::UsernameLengthRule;
///
/// let rule = UsernameLengthRule::new();
/// assert!(rule.check("alice").is_none());
/// assert!(rule.check("ab").is_some());
/// assert!(rule.check("  a  ").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UsernameLengthRule {
	/// Optional custom warning shown on failure
	message: Option<String>,
}

impl UsernameLengthRule {
	/// Creates the rule with the default warning message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom warning message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Effective warning message for a failed check.
	pub fn message(&self) -> &str {
		self.message
			.as_deref()
			.unwrap_or("Username must be at least 3 characters.")
	}

	/// Checks the username, returning the warning when it is too short.
	pub fn check(&self, username: &str) -> Option<String> {
		if username.trim().chars().count() < USERNAME_MIN_CHARS {
			Some(self.message().to_string())
		} else {
			None
		}
	}
}

/// Warns when the trimmed email does not have a three-part shape:
/// local part, `@`, domain, `.`, suffix, none containing spaces or `@`.
///
/// # Examples
///
/// ```
/// use formguard::EmailFormatRule;
///
/// let rule = EmailFormatRule::new();
/// assert!(rule.check("a@b.c").is_none());
/// assert!(rule.check("a@b").is_some());
/// assert!(rule.check("a b@c.d").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailFormatRule {
	/// Optional custom warning shown on failure
	message: Option<String>,
}

impl EmailFormatRule {
	/// Creates the rule with the default warning message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom warning message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Effective warning message for a failed check.
	pub fn message(&self) -> &str {
		self.message
			.as_deref()
			.unwrap_or("Please enter a valid email address.")
	}

	/// Checks the email, returning the warning when the shape is invalid.
	pub fn check(&self, email: &str) -> Option<String> {
		if EMAIL_REGEX.is_match(email.trim()) {
			None
		} else {
			Some(self.message().to_string())
		}
	}
}

/// Warns when the password is shorter than eight characters, untrimmed.
#[derive(Debug, Clone, Default)]
pub struct PasswordLengthRule {
	/// Optional custom warning shown on failure
	message: Option<String>,
}

impl PasswordLengthRule {
	/// Creates the rule with the default warning message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom warning message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Effective warning message for a failed check.
	pub fn message(&self) -> &str {
		self.message
			.as_deref()
			.unwrap_or("Password must be at least 8 characters.")
	}

	/// Checks the password, returning the warning when it is too short.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::PasswordLengthRule;
	///
	/// let rule = PasswordLengthRule::new();
	/// assert!(rule.check("12345678").is_none());
	/// assert!(rule.check("short").is_some());
	/// ```
	pub fn check(&self, password: &str) -> Option<String> {
		if password.chars().count() < PASSWORD_MIN_CHARS {
			Some(self.message().to_string())
		} else {
			None
		}
	}
}

/// Warns when the two passwords are not character-identical.
///
/// Comparison is exact and untrimmed; a trailing-space difference warns.
#[derive(Debug, Clone, Default)]
pub struct PasswordMatchRule {
	/// Optional custom warning shown on failure
	message: Option<String>,
}

impl PasswordMatchRule {
	/// Creates the rule with the default warning message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom warning message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Effective warning message for a failed check.
	pub fn message(&self) -> &str {
		self.message.as_deref().unwrap_or("Passwords do not match.")
	}

	/// Checks the pair, returning the warning when they differ.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::PasswordMatchRule;
	///
	/// let rule = PasswordMatchRule::new();
	/// assert!(rule.check("Abc12345", "Abc12345").is_none());
	/// assert!(rule.check("Abc12345", "Abc12345 ").is_some());
	/// ```
	pub fn check(&self, password1: &str, password2: &str) -> Option<String> {
		if password1 == password2 {
			None
		} else {
			Some(self.message().to_string())
		}
	}
}

/// Warns when the password lacks an ASCII letter or lacks an ASCII digit.
///
/// Letter and digit may appear anywhere, in any order. Presence of both is
/// the whole policy; no other character classes or positions are required.
#[derive(Debug, Clone, Default)]
pub struct PasswordStrengthRule {
	/// Optional custom warning shown on failure
	message: Option<String>,
}

impl PasswordStrengthRule {
	/// Creates the rule with the default warning message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom warning message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Effective warning message for a failed check.
	pub fn message(&self) -> &str {
		self.message
			.as_deref()
			.unwrap_or("Password must contain at least one letter and one number.")
	}

	/// Checks the password, returning the warning when a class is missing.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::PasswordStrengthRule;
	///
	/// let rule = PasswordStrengthRule::new();
	/// assert!(rule.check("abcd1234").is_none());
	/// assert!(rule.check("12345678").is_some());
	/// assert!(rule.check("abcdefgh").is_some());
	/// ```
	pub fn check(&self, password: &str) -> Option<String> {
		let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
		let has_digit = password.chars().any(|c| c.is_ascii_digit());
		if has_letter && has_digit {
			None
		} else {
			Some(self.message().to_string())
		}
	}
}

/// The five registration rules in their fixed evaluation order.
///
/// Evaluation is pure: it reads a [`RegistrationInput`] and returns a fresh
/// [`WarningList`], with no side effects. Every rule runs on every attempt;
/// there is no short-circuiting.
///
/// # Examples
///
/// ```
/// use formguard::{RegistrationInput, RuleSet};
///
/// let rules = RuleSet::new();
/// let input = RegistrationInput::new("alice", "alice@example.com", "Secret123", "Secret123");
/// assert!(rules.evaluate(&input).is_empty());
///
/// let input = RegistrationInput::new("ab", "bad", "short", "short");
/// assert_eq!(rules.evaluate(&input).len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
	username_length: UsernameLengthRule,
	email_format: EmailFormatRule,
	password_length: PasswordLengthRule,
	password_match: PasswordMatchRule,
	password_strength: PasswordStrengthRule,
}

impl RuleSet {
	/// Creates the rule set with default messages.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the username length rule (e.g. for a custom message).
	pub fn with_username_length(mut self, rule: UsernameLengthRule) -> Self {
		self.username_length = rule;
		self
	}

	/// Replaces the email format rule.
	pub fn with_email_format(mut self, rule: EmailFormatRule) -> Self {
		self.email_format = rule;
		self
	}

	/// Replaces the password length rule.
	pub fn with_password_length(mut self, rule: PasswordLengthRule) -> Self {
		self.password_length = rule;
		self
	}

	/// Replaces the password match rule.
	pub fn with_password_match(mut self, rule: PasswordMatchRule) -> Self {
		self.password_match = rule;
		self
	}

	/// Replaces the password strength rule.
	pub fn with_password_strength(mut self, rule: PasswordStrengthRule) -> Self {
		self.password_strength = rule;
		self
	}

	/// Returns the username length rule.
	pub fn username_length(&self) -> &UsernameLengthRule {
		&self.username_length
	}

	/// Returns the email format rule.
	pub fn email_format(&self) -> &EmailFormatRule {
		&self.email_format
	}

	/// Returns the password length rule.
	pub fn password_length(&self) -> &PasswordLengthRule {
		&self.password_length
	}

	/// Returns the password match rule.
	pub fn password_match(&self) -> &PasswordMatchRule {
		&self.password_match
	}

	/// Returns the password strength rule.
	pub fn password_strength(&self) -> &PasswordStrengthRule {
		&self.password_strength
	}

	/// Runs all five rules against the input, in order.
	///
	/// The returned list is rebuilt from scratch; nothing carries over from
	/// prior attempts.
	pub fn evaluate(&self, input: &RegistrationInput) -> WarningList {
		[
			self.username_length.check(&input.username),
			self.email_format.check(&input.email),
			self.password_length.check(&input.password1),
			self.password_match.check(&input.password1, &input.password2),
			self.password_strength.check(&input.password1),
		]
		.into_iter()
		.flatten()
		.collect()
	}
}
