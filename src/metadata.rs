//! Serializable rule descriptors for client transport
//!
//! The registration rules run wherever the form lives, but a server that
//! builds the page may also want to ship the rule set across the wire (to
//! render hints, or to reconstruct an equivalent guard on the client). This
//! module provides plain-data descriptions of the rule set for that
//! purpose. The descriptors are informational; they carry parameters and
//! messages, not executable checks.

use crate::guard::FIELD_NAMES;
use crate::rules::{PASSWORD_MIN_CHARS, RuleSet, USERNAME_MIN_CHARS};
use serde::{Deserialize, Serialize};

/// Description of one registration rule.
///
/// Serialized with a `type` tag so clients can dispatch on rule shape:
/// single-field rules versus cross-field rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleMetadata {
	/// Rule over one field's value.
	FieldRule {
		/// Field name the rule reads
		field_name: String,
		/// Rule identifier (e.g. "min_length", "email_format")
		rule_id: String,
		/// Rule parameters as JSON (e.g. {"min": 8})
		params: serde_json::Value,
		/// Warning shown when the rule fires
		message: String,
	},
	/// Rule over several fields' values.
	CrossFieldRule {
		/// Field names the rule reads, in order
		field_names: Vec<String>,
		/// Rule identifier (e.g. "fields_equal")
		rule_id: String,
		/// Warning shown when the rule fires
		message: String,
	},
}

/// Extension trait producing transportable descriptors from a rule set.
pub trait RuleSetExt {
	/// Describes every rule, in evaluation order.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::{RuleSet, RuleSetExt};
	///
	/// let metadata = RuleSet::new().to_metadata();
	/// assert_eq!(metadata.len(), 5);
	///
	/// let json = serde_json::to_string(&metadata).unwrap();
	/// assert!(json.contains("\"type\":\"field_rule\""));
	/// assert!(json.contains("\"type\":\"cross_field_rule\""));
	/// ```
	fn to_metadata(&self) -> Vec<RuleMetadata>;
}

impl RuleSetExt for RuleSet {
	fn to_metadata(&self) -> Vec<RuleMetadata> {
		vec![
			RuleMetadata::FieldRule {
				field_name: FIELD_NAMES[0].to_string(),
				rule_id: "min_length".to_string(),
				params: serde_json::json!({ "min": USERNAME_MIN_CHARS, "trim": true }),
				message: self.username_length().message().to_string(),
			},
			RuleMetadata::FieldRule {
				field_name: FIELD_NAMES[1].to_string(),
				rule_id: "email_format".to_string(),
				params: serde_json::json!({ "trim": true }),
				message: self.email_format().message().to_string(),
			},
			RuleMetadata::FieldRule {
				field_name: FIELD_NAMES[2].to_string(),
				rule_id: "min_length".to_string(),
				params: serde_json::json!({ "min": PASSWORD_MIN_CHARS, "trim": false }),
				message: self.password_length().message().to_string(),
			},
			RuleMetadata::CrossFieldRule {
				field_names: vec![FIELD_NAMES[2].to_string(), FIELD_NAMES[3].to_string()],
				rule_id: "fields_equal".to_string(),
				message: self.password_match().message().to_string(),
			},
			RuleMetadata::FieldRule {
				field_name: FIELD_NAMES[2].to_string(),
				rule_id: "letter_and_digit".to_string(),
				params: serde_json::json!({}),
				message: self.password_strength().message().to_string(),
			},
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::PasswordMatchRule;
	use rstest::rstest;

	#[rstest]
	fn test_metadata_follows_evaluation_order() {
		// Arrange
		let rules = RuleSet::new();

		// Act
		let metadata = rules.to_metadata();

		// Assert
		assert_eq!(metadata.len(), 5);
		match &metadata[0] {
			RuleMetadata::FieldRule {
				field_name, rule_id, ..
			} => {
				assert_eq!(field_name, "username");
				assert_eq!(rule_id, "min_length");
			}
			other => panic!("Expected field rule first, got {other:?}"),
		}
		match &metadata[3] {
			RuleMetadata::CrossFieldRule { field_names, .. } => {
				assert_eq!(field_names, &["password1", "password2"]);
			}
			other => panic!("Expected cross-field rule fourth, got {other:?}"),
		}
	}

	#[rstest]
	fn test_metadata_json_round_trip() {
		// Arrange
		let metadata = RuleSet::new().to_metadata();

		// Act
		let json = serde_json::to_string(&metadata).expect("Failed to serialize");
		let deserialized: Vec<RuleMetadata> =
			serde_json::from_str(&json).expect("Failed to deserialize");

		// Assert
		assert_eq!(deserialized, metadata);
	}

	#[rstest]
	fn test_metadata_carries_custom_messages() {
		// Arrange
		let rules = RuleSet::new()
			.with_password_match(PasswordMatchRule::new().with_message("Both entries must agree"));

		// Act
		let metadata = rules.to_metadata();

		// Assert
		match &metadata[3] {
			RuleMetadata::CrossFieldRule { message, .. } => {
				assert_eq!(message, "Both entries must agree");
			}
			other => panic!("Expected cross-field rule, got {other:?}"),
		}
	}
}
