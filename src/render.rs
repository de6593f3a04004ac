//! Warning renderer
//!
//! Sole owner of the warning container's contents. Rule evaluation never
//! touches the page; everything visible is derived here from the current
//! [`WarningList`](crate::WarningList).

use crate::dom::{Display, Element};

/// Renders a warning list into the warning container.
///
/// Rendering replaces all prior contents with one `li` per warning, in
/// order, and shows the container only when the list is non-empty. The
/// mutation is confined to the container subtree and is idempotent:
/// rendering the same list twice leaves the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarningRenderer;

impl WarningRenderer {
	/// Replaces the container's contents with the given warnings.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::{Display, Element, WarningRenderer};
	///
	/// let mut container = Element::new("ul").attr("id", "registration-warnings");
	/// WarningRenderer::render(&mut container, &["Passwords do not match.".to_string()]);
	///
	/// assert_eq!(container.display(), Some(Display::Block));
	/// assert_eq!(container.children().len(), 1);
	///
	/// WarningRenderer::render(&mut container, &[]);
	/// assert_eq!(container.display(), Some(Display::None));
	/// assert!(container.children().is_empty());
	/// ```
	pub fn render(container: &mut Element, warnings: &[String]) {
		container.clear_children();
		for warning in warnings {
			container.append_child(Element::new("li").text(warning.clone()));
		}
		container.set_display(if warnings.is_empty() {
			Display::None
		} else {
			Display::Block
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn container() -> Element {
		Element::new("ul").attr("id", "registration-warnings")
	}

	#[rstest]
	fn test_render_one_item_per_warning_in_order() {
		// Arrange
		let mut container = container();
		let warnings = vec!["first".to_string(), "second".to_string()];

		// Act
		WarningRenderer::render(&mut container, &warnings);

		// Assert
		assert_eq!(
			container.render_to_string(),
			r#"<ul id="registration-warnings" style="display: block"><li>first</li><li>second</li></ul>"#
		);
	}

	#[rstest]
	fn test_render_empty_list_hides_and_clears() {
		// Arrange: container starts with stale warnings
		let mut container = container();
		WarningRenderer::render(&mut container, &["stale".to_string()]);

		// Act
		WarningRenderer::render(&mut container, &[]);

		// Assert
		assert!(container.children().is_empty());
		assert_eq!(container.display(), Some(Display::None));
	}

	#[rstest]
	fn test_render_replaces_rather_than_appends() {
		// Arrange
		let mut container = container();
		let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];

		// Act
		WarningRenderer::render(&mut container, &three);
		WarningRenderer::render(&mut container, &["only".to_string()]);

		// Assert
		assert_eq!(container.children().len(), 1);
		assert_eq!(container.text_content(), "only");
	}

	#[rstest]
	fn test_render_is_idempotent() {
		// Arrange
		let mut container = container();
		let warnings = vec!["Passwords do not match.".to_string()];

		// Act
		WarningRenderer::render(&mut container, &warnings);
		let first = container.render_to_string();
		WarningRenderer::render(&mut container, &warnings);
		let second = container.render_to_string();

		// Assert
		assert_eq!(first, second);
	}
}
