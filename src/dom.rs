//! Minimal element tree for the page a guard binds to
//!
//! This module models just enough of a document for registration-form
//! validation: elements with a tag name, attributes, an inline display
//! style, and ordered children. A [`FormGuard`](crate::FormGuard) receives
//! an explicit [`Element`] subtree instead of reaching into a process-global
//! document, so validation and rendering stay testable without a live page.

use std::borrow::Cow;

/// Inline display style of an element.
///
/// Only the two values the warning container toggles between are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
	/// Element is rendered (`display: block`).
	Block,
	/// Element is hidden (`display: none`).
	None,
}

impl Display {
	/// CSS value for this display mode.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::Display;
	///
	/// assert_eq!(Display::Block.as_css(), "block");
	/// assert_eq!(Display::None.as_css(), "none");
	/// ```
	pub fn as_css(&self) -> &'static str {
		match self {
			Display::Block => "block",
			Display::None => "none",
		}
	}
}

/// A node in the element tree: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
}

/// An element in the page model.
///
/// Attributes keep insertion order; children keep document order.
///
/// # Examples
///
/// ```
/// use formguard::Element;
///
/// let form = Element::new("form")
/// 	.attr("method", "post")
/// 	.child(Element::new("input").attr("name", "username"));
///
/// assert_eq!(form.tag_name(), "form");
/// assert!(form.input_named("username").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Vec<(String, String)>,
	display: Option<Display>,
	children: Vec<Node>,
	is_void: bool,
}

impl Element {
	/// Creates an element with the given tag name and no attributes or children.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			display: None,
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute (builder form).
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attr(name, value);
		self
	}

	/// Adds a child element (builder form).
	pub fn child(mut self, child: Element) -> Self {
		self.children.push(Node::Element(child));
		self
	}

	/// Adds a text child (builder form).
	///
	/// # Examples
	///
	/// ```
	/// use formguard::Element;
	///
	/// let li = Element::new("li").text("Passwords do not match.");
	/// assert_eq!(li.text_content(), "Passwords do not match.");
	/// ```
	pub fn text(mut self, content: impl Into<String>) -> Self {
		self.children.push(Node::Text(content.into()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the value of an attribute, if present.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Sets an attribute, replacing any existing value.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::Element;
	///
	/// let mut input = Element::new("input").attr("name", "email");
	/// input.set_attr("value", "alice@example.com");
	/// assert_eq!(input.attr_value("value"), Some("alice@example.com"));
	/// ```
	pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some((_, v)) => *v = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Returns the inline display style, if one has been set.
	pub fn display(&self) -> Option<Display> {
		self.display
	}

	/// Sets the inline display style.
	pub fn set_display(&mut self, display: Display) {
		self.display = Some(display);
	}

	/// Returns the children in document order.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Inserts an element as the very first child.
	pub fn insert_first(&mut self, child: Element) {
		self.children.insert(0, Node::Element(child));
	}

	/// Appends an element as the last child.
	pub fn append_child(&mut self, child: Element) {
		self.children.push(Node::Element(child));
	}

	/// Removes all children.
	pub fn clear_children(&mut self) {
		self.children.clear();
	}

	/// Concatenated text of all descendant text nodes, in document order.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			match child {
				Node::Element(el) => out.push_str(&el.text_content()),
				Node::Text(text) => out.push_str(text),
			}
		}
		out
	}

	/// Finds the first `input` in this subtree with the given `name` attribute.
	pub fn input_named(&self, name: &str) -> Option<&Element> {
		let is_match = self.tag == "input" && self.attr_value("name") == Some(name);
		if is_match {
			return Some(self);
		}
		self.children.iter().find_map(|node| match node {
			Node::Element(el) => el.input_named(name),
			Node::Text(_) => None,
		})
	}

	/// Mutable variant of [`input_named`](Self::input_named).
	pub fn input_named_mut(&mut self, name: &str) -> Option<&mut Element> {
		let is_match = self.tag == "input" && self.attr_value("name") == Some(name);
		if is_match {
			return Some(self);
		}
		self.children.iter_mut().find_map(|node| match node {
			Node::Element(el) => el.input_named_mut(name),
			Node::Text(_) => None,
		})
	}

	/// Finds the first element in this subtree (including self) with the
	/// given `id` attribute.
	pub fn element_by_id(&self, id: &str) -> Option<&Element> {
		if self.attr_value("id") == Some(id) {
			return Some(self);
		}
		self.children.iter().find_map(|node| match node {
			Node::Element(el) => el.element_by_id(id),
			Node::Text(_) => None,
		})
	}

	/// Mutable variant of [`element_by_id`](Self::element_by_id).
	pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
		let is_match = self.attr_value("id") == Some(id);
		if is_match {
			return Some(self);
		}
		self.children.iter_mut().find_map(|node| match node {
			Node::Element(el) => el.element_by_id_mut(id),
			Node::Text(_) => None,
		})
	}

	/// Renders this subtree to an HTML string.
	///
	/// Attribute values and text content are escaped. The inline display
	/// style, when set, is emitted as a `style` attribute.
	///
	/// # Examples
	///
	/// ```
	/// use formguard::{Display, Element};
	///
	/// let mut ul = Element::new("ul").attr("id", "registration-warnings");
	/// ul.set_display(Display::None);
	/// assert_eq!(
	/// 	ul.render_to_string(),
	/// 	r#"<ul id="registration-warnings" style="display: none"></ul>"#
	/// );
	/// ```
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);

		for (name, value) in &self.attrs {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}

		if let Some(display) = self.display {
			output.push_str(" style=\"display: ");
			output.push_str(display.as_css());
			output.push('"');
		}

		if self.is_void {
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &self.children {
			match child {
				Node::Element(el) => el.render_to_string_inner(output),
				Node::Text(text) => output.push_str(&html_escape(text)),
			}
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

fn html_escape(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#39;"),
			_ => output.push(c),
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_set_attr_replaces_existing_value() {
		// Arrange
		let mut input = Element::new("input").attr("value", "old");

		// Act
		input.set_attr("value", "new");

		// Assert
		assert_eq!(input.attr_value("value"), Some("new"));
		assert_eq!(input.render_to_string(), r#"<input value="new" />"#);
	}

	#[rstest]
	fn test_insert_first_places_child_before_existing_children() {
		// Arrange
		let mut form = Element::new("form").child(Element::new("input").attr("name", "username"));

		// Act
		form.insert_first(Element::new("ul").attr("id", "warnings"));

		// Assert
		match &form.children()[0] {
			Node::Element(el) => assert_eq!(el.tag_name(), "ul"),
			Node::Text(_) => panic!("Expected element as first child"),
		}
		assert_eq!(form.children().len(), 2);
	}

	#[rstest]
	fn test_input_named_searches_nested_children() {
		// Arrange
		let form = Element::new("form").child(
			Element::new("div").child(
				Element::new("input")
					.attr("name", "email")
					.attr("value", "a@b.c"),
			),
		);

		// Act
		let input = form.input_named("email");

		// Assert
		assert_eq!(input.and_then(|el| el.attr_value("value")), Some("a@b.c"));
		assert!(form.input_named("missing").is_none());
	}

	#[rstest]
	fn test_input_named_ignores_non_input_elements_with_name() {
		// Arrange
		let form =
			Element::new("form").child(Element::new("select").attr("name", "username"));

		// Act & Assert
		assert!(form.input_named("username").is_none());
	}

	#[rstest]
	fn test_element_by_id_matches_self() {
		// Arrange
		let ul = Element::new("ul").attr("id", "registration-warnings");

		// Act & Assert
		assert!(ul.element_by_id("registration-warnings").is_some());
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<script>", "&lt;script&gt;")]
	#[case(r#"say "hi""#, "say &quot;hi&quot;")]
	fn test_text_content_is_escaped_in_rendering(#[case] raw: &str, #[case] escaped: &str) {
		// Arrange
		let li = Element::new("li").text(raw);

		// Act
		let html = li.render_to_string();

		// Assert
		assert_eq!(html, format!("<li>{escaped}</li>"));
	}

	#[rstest]
	fn test_render_includes_display_style() {
		// Arrange
		let mut ul = Element::new("ul");
		ul.set_display(Display::Block);

		// Act & Assert
		assert_eq!(ul.render_to_string(), r#"<ul style="display: block"></ul>"#);
	}

	#[rstest]
	fn test_text_content_concatenates_descendants() {
		// Arrange
		let ul = Element::new("ul")
			.child(Element::new("li").text("first"))
			.child(Element::new("li").text("second"));

		// Act & Assert
		assert_eq!(ul.text_content(), "firstsecond");
	}
}
