//! Node model for server-rendered HTML fragments.
//!
//! A [`Node`] is a value describing a piece of HTML: an element, escaped text,
//! trusted raw markup, an attribute, a transparent group of nodes, or nothing at
//! all. Trees are built by component factories, rendered once, and dropped.
//!
//! ## Attributes as children
//!
//! Attributes are ordinary nodes. They may be passed in the same argument list
//! as an element's children; the renderer moves every attribute found among
//! the direct children (or inside a direct child [`Node::Group`]) into the
//! element's open tag:
//!
//! ```
//! use forma_core::node::attributes::class;
//! use forma_core::node::html::div;
//!
//! let html = div((class("x"), "hi")).render_to_string();
//! assert_eq!(html, r#"<div class="x">hi</div>"#);
//! ```

pub mod attributes;
pub mod html;
mod util;

pub(crate) use util::{escape_attribute, escape_text};
pub use util::{VOID_ELEMENTS, is_void_element};

use std::borrow::Cow;

/// A renderable unit of the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// An HTML (or inline SVG) element.
	Element(Element),
	/// Plain text, escaped on render.
	Text(Cow<'static, str>),
	/// Markup emitted verbatim. Build it with [`Node::unsafe_raw`].
	Raw(Cow<'static, str>),
	/// An attribute; only rendered inside its owning element's open tag.
	Attribute(Attribute),
	/// A transparent sequence of nodes, rendered inline with no wrapper.
	Group(Vec<Node>),
	/// Renders nothing.
	Empty,
}

/// A single `name="value"` pair, or a bare `name` when valueless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	name: Cow<'static, str>,
	value: Cow<'static, str>,
	valueless: bool,
}

impl Attribute {
	/// Creates a `name="value"` attribute.
	pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			valueless: false,
		}
	}

	/// Creates a bare attribute such as `disabled`.
	pub fn valueless(name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: Cow::Borrowed(""),
			valueless: true,
		}
	}

	/// Returns the attribute name exactly as supplied.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the unescaped value (empty for valueless attributes).
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Returns whether this attribute renders without `="..."`.
	pub fn is_valueless(&self) -> bool {
		self.valueless
	}
}

/// An element in the node tree.
///
/// `attrs` holds attributes added through the builder methods; attributes
/// passed as children stay in `children` and are partitioned at render time.
///
/// Builder attributes ([`Element::attr`], [`Element::attr_valueless`])
/// always render before attributes passed as children, regardless of call
/// order:
///
/// ```
/// use forma_core::prelude::*;
///
/// let node: Node = Element::new("div")
/// 	.child(class("late"))
/// 	.attr("id", "early")
/// 	.into();
/// assert_eq!(node.render_to_string(), r#"<div id="early" class="late"></div>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Vec<Attribute>,
	children: Vec<Node>,
}

impl Element {
	/// Creates an empty element. The tag is lowercased.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: normalize_tag(tag.into()),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute. It renders ahead of any attribute children.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push(Attribute::new(name, value));
		self
	}

	/// Adds a valueless attribute.
	pub fn attr_valueless(mut self, name: impl Into<Cow<'static, str>>) -> Self {
		self.attrs.push(Attribute::valueless(name));
		self
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Appends several children, one per member of `children`.
	pub fn children(mut self, children: impl IntoChildren) -> Self {
		self.children.extend(children.into_children());
		self
	}

	/// Returns the (lowercase) tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes added through the builder.
	pub fn attrs(&self) -> &[Attribute] {
		&self.attrs
	}

	/// Returns the children, including attribute-valued ones.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns whether this element never has a closing tag.
	pub fn is_void(&self) -> bool {
		is_void_element(&self.tag)
	}
}

fn normalize_tag(tag: Cow<'static, str>) -> Cow<'static, str> {
	if tag.bytes().any(|b| b.is_ascii_uppercase()) {
		Cow::Owned(tag.to_ascii_lowercase())
	} else {
		tag
	}
}

impl Node {
	/// Creates an element node from a tag and its children.
	pub fn element(tag: impl Into<Cow<'static, str>>, children: impl IntoChildren) -> Self {
		Self::Element(Element::new(tag).children(children))
	}

	/// Creates an escaped text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a node whose content is emitted without escaping.
	///
	/// The caller vouches that `content` is well-formed, trusted markup.
	pub fn unsafe_raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(content.into())
	}

	/// Creates an attribute node.
	pub fn attr(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self::Attribute(Attribute::new(name, value))
	}

	/// Creates a valueless attribute node.
	pub fn attr_valueless(name: impl Into<Cow<'static, str>>) -> Self {
		Self::Attribute(Attribute::valueless(name))
	}

	/// Creates a transparent group.
	pub fn group(children: impl IntoChildren) -> Self {
		Self::Group(children.into_children())
	}

	/// Creates a node that renders nothing.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns whether this is [`Node::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(el) => Some(el),
			_ => None,
		}
	}
}

/// Creates an element node. Equivalent to [`Node::element`].
pub fn element(tag: impl Into<Cow<'static, str>>, children: impl IntoChildren) -> Node {
	Node::element(tag, children)
}

/// Creates an escaped text node.
pub fn text(content: impl Into<Cow<'static, str>>) -> Node {
	Node::text(content)
}

/// Creates a raw (unescaped) node. See [`Node::unsafe_raw`].
pub fn unsafe_raw(content: impl Into<Cow<'static, str>>) -> Node {
	Node::unsafe_raw(content)
}

/// Creates a `name="value"` attribute node.
pub fn attr(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Node {
	Node::attr(name, value)
}

/// Creates a bare attribute node.
pub fn attr_valueless(name: impl Into<Cow<'static, str>>) -> Node {
	Node::attr_valueless(name)
}

/// Creates a transparent group.
pub fn group(children: impl IntoChildren) -> Node {
	Node::group(children)
}

/// Creates a node that renders nothing.
pub fn empty() -> Node {
	Node::Empty
}

/// Returns `node` when `cond` holds, otherwise [`Node::Empty`].
pub fn when(cond: bool, node: impl IntoNode) -> Node {
	if cond { node.into_node() } else { Node::Empty }
}

/// Returns `then` when `cond` holds, otherwise `otherwise`.
pub fn when_else(cond: bool, then: impl IntoNode, otherwise: impl IntoNode) -> Node {
	if cond {
		then.into_node()
	} else {
		otherwise.into_node()
	}
}

/// Conversion of a single value into a [`Node`].
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

/// Conversion of an argument list into an element's children.
///
/// A tuple is the argument list itself: each member becomes one direct child,
/// so heterogeneous attributes and nodes can be mixed in one call.
pub trait IntoChildren {
	/// Converts self into the ordered list of children.
	fn into_children(self) -> Vec<Node>;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for Attribute {
	fn into_node(self) -> Node {
		Node::Attribute(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.clone()))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Group(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

impl From<Element> for Node {
	fn from(el: Element) -> Self {
		Node::Element(el)
	}
}

impl From<Attribute> for Node {
	fn from(attr: Attribute) -> Self {
		Node::Attribute(attr)
	}
}

macro_rules! single_child {
	($($ty:ty),+ $(,)?) => {
		$(
			impl IntoChildren for $ty {
				fn into_children(self) -> Vec<Node> {
					vec![self.into_node()]
				}
			}
		)+
	};
}

single_child!(
	Node,
	Element,
	Attribute,
	String,
	&String,
	&'static str,
	Cow<'static, str>,
);

impl IntoChildren for () {
	fn into_children(self) -> Vec<Node> {
		Vec::new()
	}
}

impl<T: IntoNode> IntoChildren for Option<T> {
	fn into_children(self) -> Vec<Node> {
		self.into_iter().map(IntoNode::into_node).collect()
	}
}

impl<T: IntoNode> IntoChildren for Vec<T> {
	fn into_children(self) -> Vec<Node> {
		self.into_iter().map(IntoNode::into_node).collect()
	}
}

impl<T: IntoNode, const N: usize> IntoChildren for [T; N] {
	fn into_children(self) -> Vec<Node> {
		self.into_iter().map(IntoNode::into_node).collect()
	}
}

macro_rules! tuple_children {
	($($name:ident),+) => {
		impl<$($name: IntoNode),+> IntoNode for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_node(self) -> Node {
				let ($($name,)+) = self;
				Node::Group(vec![$($name.into_node()),+])
			}
		}

		impl<$($name: IntoNode),+> IntoChildren for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_children(self) -> Vec<Node> {
				let ($($name,)+) = self;
				vec![$($name.into_node()),+]
			}
		}
	};
}

tuple_children!(A);
tuple_children!(A, B);
tuple_children!(A, B, C);
tuple_children!(A, B, C, D);
tuple_children!(A, B, C, D, E);
tuple_children!(A, B, C, D, E, F);
tuple_children!(A, B, C, D, E, F, G);
tuple_children!(A, B, C, D, E, F, G, H);
tuple_children!(A, B, C, D, E, F, G, H, I);
tuple_children!(A, B, C, D, E, F, G, H, I, J);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K, L);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K, L, M);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_element_creation() {
		let el = Element::new("div");
		assert_eq!(el.tag_name(), "div");
		assert!(!el.is_void());
		assert!(el.attrs().is_empty());
		assert!(el.child_nodes().is_empty());
	}

	#[rstest]
	#[case("DIV", "div")]
	#[case("Span", "span")]
	#[case("svg", "svg")]
	#[case("foreignObject", "foreignobject")]
	fn test_tag_is_lowercased(#[case] input: &'static str, #[case] expected: &str) {
		assert_eq!(Element::new(input).tag_name(), expected);
	}

	#[rstest]
	fn test_lowercase_tag_stays_borrowed() {
		let el = Element::new("section");
		assert!(matches!(el.tag, Cow::Borrowed("section")));
	}

	#[rstest]
	#[case("img", true)]
	#[case("INPUT", true)]
	#[case("path", true)]
	#[case("circle", true)]
	#[case("wbr", true)]
	#[case("div", false)]
	#[case("svg", false)]
	#[case("textarea", false)]
	fn test_void_detection(#[case] tag: &'static str, #[case] expected: bool) {
		assert_eq!(Element::new(tag).is_void(), expected);
	}

	#[rstest]
	fn test_attribute_constructors() {
		let a = Attribute::new("class", "x");
		assert_eq!(a.name(), "class");
		assert_eq!(a.value(), "x");
		assert!(!a.is_valueless());

		let b = Attribute::valueless("disabled");
		assert_eq!(b.name(), "disabled");
		assert_eq!(b.value(), "");
		assert!(b.is_valueless());
	}

	#[rstest]
	fn test_tuple_is_argument_list() {
		let node = element("div", (attr("id", "a"), "text", group(("x", "y"))));
		let el = node.as_element().unwrap();
		assert_eq!(el.child_nodes().len(), 3);
		assert_eq!(el.child_nodes()[0], Node::attr("id", "a"));
		assert_eq!(el.child_nodes()[1], Node::text("text"));
		assert_eq!(
			el.child_nodes()[2],
			Node::Group(vec![Node::text("x"), Node::text("y")])
		);
	}

	#[rstest]
	fn test_single_group_child_is_not_spliced() {
		let node = element("div", group(("a", "b")));
		let el = node.as_element().unwrap();
		assert_eq!(el.child_nodes().len(), 1);
		assert!(matches!(el.child_nodes()[0], Node::Group(_)));
	}

	#[rstest]
	fn test_when() {
		assert_eq!(when(true, "shown"), Node::text("shown"));
		assert!(when(false, "hidden").is_empty());
		assert_eq!(when_else(false, "a", "b"), Node::text("b"));
	}

	#[rstest]
	fn test_option_and_unit_children() {
		assert!(None::<Node>.into_children().is_empty());
		assert_eq!(Some("x").into_children(), vec![Node::text("x")]);
		assert!(().into_children().is_empty());
		assert!(().into_node().is_empty());
	}

	#[rstest]
	fn test_vec_and_array_children() {
		let from_vec = vec!["a", "b"].into_children();
		let from_array = ["a", "b"].into_children();
		assert_eq!(from_vec, from_array);
		assert_eq!(
			vec!["a", "b"].into_node(),
			Node::Group(vec![Node::text("a"), Node::text("b")])
		);
	}

	#[rstest]
	fn test_builder_keeps_attribute_order() {
		let el = Element::new("input")
			.attr("type", "text")
			.attr_valueless("disabled")
			.attr("name", "q");
		let names: Vec<&str> = el.attrs().iter().map(Attribute::name).collect();
		assert_eq!(names, ["type", "disabled", "name"]);
	}
}
