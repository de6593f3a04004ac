//! Client-side validation for registration forms
//!
//! This crate guards a registration form against bad input before the
//! browser submits it:
//! - A pure rule set over the four registration fields (username length,
//!   email shape, password length, match, and strength)
//! - A warning renderer that owns the inline warning container
//! - A submit interceptor that blocks or allows the native submission
//! - Serializable rule descriptors for shipping the rule set to a client
//!
//! The guard binds to an explicit element tree rather than a global
//! document, so rules and rendering are testable without a live page.
//! Server-side validation remains the authoritative check; nothing here
//! talks to a server.

pub mod dom;
pub mod guard;
pub mod metadata;
pub mod render;
pub mod rules;

pub use dom::{Display, Element, Node};
pub use guard::{
	FIELD_NAMES, FormGuard, GuardError, GuardResult, SubmitOutcome, SubmitState,
	WARNINGS_CONTAINER_ID,
};
pub use metadata::{RuleMetadata, RuleSetExt};
pub use render::WarningRenderer;
pub use rules::{
	EmailFormatRule, PASSWORD_MIN_CHARS, PasswordLengthRule, PasswordMatchRule,
	PasswordStrengthRule, RegistrationInput, RuleSet, USERNAME_MIN_CHARS, UsernameLengthRule,
	WarningList,
};
