//! FormGuard: registration form attachment and submit interception
//!
//! A guard binds to one form subtree, inserts the hidden warning container
//! as the form's first child, and decides on every submit attempt whether
//! the native submission may proceed. The guard itself never submits
//! anything; it only returns the decision.

use crate::dom::{Display, Element};
use crate::render::WarningRenderer;
use crate::rules::{RegistrationInput, RuleSet, WarningList};

/// `id` attribute of the warning container the guard inserts.
pub const WARNINGS_CONTAINER_ID: &str = "registration-warnings";

/// The four required input names, in field order.
pub const FIELD_NAMES: [&str; 4] = ["username", "email", "password1", "password2"];

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
	#[error("Expected a form element, found <{0}>")]
	NotAForm(String),
	#[error("Form is missing required input: {0}")]
	FieldMissing(String),
}

pub type GuardResult<T> = Result<T, GuardError>;

/// Phase of the submit interceptor.
///
/// Every attempt moves Idle → Validating → Blocked or Allowed → Idle; the
/// guard is back in [`SubmitState::Idle`] whenever `handle_submit` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
	Idle,
	Validating,
	Blocked,
	Allowed,
}

/// Decision for one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Validation passed; the native submission proceeds unmodified.
	Allowed,
	/// Validation failed; the native submission is cancelled and the
	/// warnings have been rendered.
	Blocked(WarningList),
}

impl SubmitOutcome {
	/// Whether the browser's default submit action may continue.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::SubmitOutcome;
	///
	/// assert!(SubmitOutcome::Allowed.allows_default());
	/// assert!(!SubmitOutcome::Blocked(vec!["bad".to_string()]).allows_default());
	/// ```
	pub fn allows_default(&self) -> bool {
		matches!(self, SubmitOutcome::Allowed)
	}

	/// Warnings from a blocked attempt, empty when allowed.
	pub fn warnings(&self) -> &[String] {
		match self {
			SubmitOutcome::Allowed => &[],
			SubmitOutcome::Blocked(warnings) => warnings,
		}
	}
}

/// Validator bound to a single registration form.
///
/// Constructed once per form via [`FormGuard::attach`]; the constructor
/// owning the subtree makes double attachment unrepresentable.
///
/// # Examples
///
/// ```
/// use formguard::{Element, FormGuard};
///
/// let form = Element::new("form")
/// 	.child(Element::new("input").attr("name", "username").attr("value", "alice"))
/// 	.child(Element::new("input").attr("name", "email").attr("value", "alice@example.com"))
/// 	.child(Element::new("input").attr("name", "password1").attr("value", "Secret123"))
/// 	.child(Element::new("input").attr("name", "password2").attr("value", "Secret123"));
///
/// let mut guard = FormGuard::attach(form).unwrap();
/// assert!(guard.handle_submit().allows_default());
/// ```
pub struct FormGuard {
	form: Element,
	rules: RuleSet,
	state: SubmitState,
}

impl FormGuard {
	/// Attaches a guard to the form with the default rule set.
	///
	/// Verifies the element is a form containing the four named inputs, then
	/// inserts the empty, hidden warning container as the form's very first
	/// child so warnings render above all fields.
	pub fn attach(form: Element) -> GuardResult<Self> {
		Self::attach_with_rules(form, RuleSet::new())
	}

	/// Attaches a guard with a customized rule set.
	pub fn attach_with_rules(mut form: Element, rules: RuleSet) -> GuardResult<Self> {
		if form.tag_name() != "form" {
			return Err(GuardError::NotAForm(form.tag_name().to_string()));
		}
		for name in FIELD_NAMES {
			if form.input_named(name).is_none() {
				return Err(GuardError::FieldMissing(name.to_string()));
			}
		}

		let mut container = Element::new("ul").attr("id", WARNINGS_CONTAINER_ID);
		container.set_display(Display::None);
		form.insert_first(container);

		tracing::debug!("attached registration guard to form");
		Ok(Self {
			form,
			rules,
			state: SubmitState::Idle,
		})
	}

	/// Runs one submit attempt.
	///
	/// Snapshots the current field values, evaluates the full rule set, and
	/// renders the result into the warning container: a non-empty list
	/// blocks the native submission, an empty list clears prior warnings and
	/// lets it proceed. Attempts are independent; the guard is back in
	/// [`SubmitState::Idle`] when this returns.
	pub fn handle_submit(&mut self) -> SubmitOutcome {
		self.state = SubmitState::Validating;
		let input = self.snapshot();
		let warnings = self.rules.evaluate(&input);

		let outcome = if warnings.is_empty() {
			self.state = SubmitState::Allowed;
			WarningRenderer::render(self.container_mut(), &[]);
			tracing::debug!("registration submit allowed");
			SubmitOutcome::Allowed
		} else {
			self.state = SubmitState::Blocked;
			WarningRenderer::render(self.container_mut(), &warnings);
			tracing::debug!(warnings = warnings.len(), "registration submit blocked");
			SubmitOutcome::Blocked(warnings)
		};

		self.state = SubmitState::Idle;
		outcome
	}

	/// Current interceptor state. [`SubmitState::Idle`] between attempts.
	pub fn state(&self) -> SubmitState {
		self.state
	}

	/// The guarded form subtree, warning container included.
	pub fn form(&self) -> &Element {
		&self.form
	}

	/// Mutable access to the form subtree, e.g. to change field values
	/// between attempts. The guard itself only ever mutates the warning
	/// container.
	pub fn form_mut(&mut self) -> &mut Element {
		&mut self.form
	}

	/// The warning container.
	pub fn warning_container(&self) -> &Element {
		self.form
			.element_by_id(WARNINGS_CONTAINER_ID)
			.expect("warning container inserted at attach")
	}

	fn container_mut(&mut self) -> &mut Element {
		self.form
			.element_by_id_mut(WARNINGS_CONTAINER_ID)
			.expect("warning container inserted at attach")
	}

	/// Current value of a named input; missing `value` reads as empty.
	fn field_value(&self, name: &str) -> String {
		self.form
			.input_named(name)
			.and_then(|input| input.attr_value("value"))
			.unwrap_or_default()
			.to_string()
	}

	fn snapshot(&self) -> RegistrationInput {
		RegistrationInput {
			username: self.field_value("username"),
			email: self.field_value("email"),
			password1: self.field_value("password1"),
			password2: self.field_value("password2"),
		}
	}
}
