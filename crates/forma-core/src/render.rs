//! HTML serialisation of node trees.
//!
//! Rendering is a single pre-order pass that writes straight into the sink.
//! For each element the renderer first gathers the attribute-valued nodes
//! among its direct children (looking one level into child groups), writes the
//! open tag with them, then writes the remaining children.

use std::fmt;
use std::io;

use indexmap::IndexMap;

use crate::error::{RenderError, Result};
use crate::node::{Attribute, Element, Node, escape_attribute, escape_text};

/// How void elements are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoidStyle {
	/// `<input disabled>`
	#[default]
	Html5,
	/// `<input disabled />`
	SelfClosing,
}

/// What to do when an element carries the same attribute name twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateAttributes {
	/// Emit every attribute in supplied order. Browsers honour the first.
	#[default]
	EmitAll,
	/// Emit one attribute per name, at the position of its first occurrence,
	/// carrying the value of its last occurrence.
	LastWins,
}

/// Options for HTML rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
	/// How void elements are closed.
	pub void_style: VoidStyle,
	/// How repeated attribute names are handled.
	pub duplicate_attributes: DuplicateAttributes,
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Closes void elements with ` />`.
	pub fn self_closing(mut self) -> Self {
		self.void_style = VoidStyle::SelfClosing;
		self
	}

	/// Collapses repeated attribute names, last value wins.
	pub fn dedupe_attributes(mut self) -> Self {
		self.duplicate_attributes = DuplicateAttributes::LastWins;
		self
	}
}

/// Stateless HTML renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
	options: RenderOptions,
}

impl HtmlRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Returns the options in effect.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders `node` into an `io::Write` sink.
	///
	/// Stops at the first failed write and returns that error unchanged.
	pub fn render<W: io::Write + ?Sized>(&self, node: &Node, writer: &mut W) -> Result<()> {
		let mut sink = IoSink {
			inner: writer,
			error: None,
		};
		match self.write_node(node, &mut sink) {
			Ok(()) => Ok(()),
			Err(fmt::Error) => {
				let err = sink.error.take().map_or(RenderError::Format, RenderError::Writer);
				tracing::debug!(error = %err, "rendering aborted by the output sink");
				Err(err)
			}
		}
	}

	/// Renders `node` into a `fmt::Write` sink.
	pub fn render_fmt<W: fmt::Write + ?Sized>(&self, node: &Node, writer: &mut W) -> Result<()> {
		self.write_node(node, writer).map_err(|_| RenderError::Format)
	}

	/// Renders `node` to an owned string.
	pub fn render_to_string(&self, node: &Node) -> String {
		let mut output = String::new();
		// Writing into a String cannot fail.
		let _ = self.write_node(node, &mut output);
		output
	}

	fn write_node<W: fmt::Write + ?Sized>(&self, node: &Node, out: &mut W) -> fmt::Result {
		match node {
			Node::Element(el) => self.write_element(el, out),
			Node::Text(text) => out.write_str(&escape_text(text)),
			Node::Raw(raw) => out.write_str(raw),
			Node::Group(children) => {
				for child in children {
					self.write_node(child, out)?;
				}
				Ok(())
			}
			// Attributes only render inside their owning element's open tag.
			Node::Attribute(_) | Node::Empty => Ok(()),
		}
	}

	fn write_element<W: fmt::Write + ?Sized>(&self, el: &Element, out: &mut W) -> fmt::Result {
		out.write_char('<')?;
		out.write_str(el.tag_name())?;

		let attrs = collect_attributes(el);
		match self.options.duplicate_attributes {
			DuplicateAttributes::EmitAll => {
				for attr in attrs {
					write_attribute(attr, out)?;
				}
			}
			DuplicateAttributes::LastWins => {
				let mut by_name: IndexMap<&str, &Attribute> = IndexMap::with_capacity(attrs.len());
				for attr in attrs {
					by_name.insert(attr.name(), attr);
				}
				for attr in by_name.into_values() {
					write_attribute(attr, out)?;
				}
			}
		}

		if el.is_void() {
			return match self.options.void_style {
				VoidStyle::Html5 => out.write_char('>'),
				VoidStyle::SelfClosing => out.write_str(" />"),
			};
		}

		out.write_char('>')?;
		for child in el.child_nodes() {
			match child {
				Node::Group(nodes) => {
					// Attributes in this group were lifted into the open tag.
					for node in nodes.iter().filter(|n| !matches!(n, Node::Attribute(_))) {
						self.write_node(node, out)?;
					}
				}
				other => self.write_node(other, out)?,
			}
		}
		out.write_str("</")?;
		out.write_str(el.tag_name())?;
		out.write_char('>')
	}
}

/// Builder attributes first, then attribute-valued children in order.
fn collect_attributes(el: &Element) -> Vec<&Attribute> {
	let mut attrs: Vec<&Attribute> = el.attrs().iter().collect();
	for child in el.child_nodes() {
		match child {
			Node::Attribute(attr) => attrs.push(attr),
			Node::Group(nodes) => attrs.extend(nodes.iter().filter_map(|n| match n {
				Node::Attribute(attr) => Some(attr),
				_ => None,
			})),
			_ => {}
		}
	}
	attrs
}

fn write_attribute<W: fmt::Write + ?Sized>(attr: &Attribute, out: &mut W) -> fmt::Result {
	out.write_char(' ')?;
	out.write_str(attr.name())?;
	if attr.is_valueless() {
		return Ok(());
	}
	out.write_str("=\"")?;
	out.write_str(&escape_attribute(attr.value()))?;
	out.write_char('"')
}

/// Bridges `fmt::Write` onto an `io::Write`, keeping the first io error.
struct IoSink<'w, W: io::Write + ?Sized> {
	inner: &'w mut W,
	error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> fmt::Write for IoSink<'_, W> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.inner.write_all(s.as_bytes()).map_err(|e| {
			self.error = Some(e);
			fmt::Error
		})
	}
}

impl Node {
	/// Renders this node into `writer` with default options.
	pub fn render<W: io::Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
		HtmlRenderer::new().render(self, writer)
	}

	/// Renders this node to a string with default options.
	pub fn render_to_string(&self) -> String {
		HtmlRenderer::new().render_to_string(self)
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		HtmlRenderer::new().write_node(self, f)
	}
}
