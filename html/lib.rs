use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::html;

#[derive(Clone, Debug, From)]
pub enum Node {
	RawText(RawTextNode),
	Text(TextNode),
	Host(HostNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

/// Text that is written exactly as given, regardless of the escaping policy.
#[derive(Clone, Debug)]
pub struct RawTextNode(pub Cow<'static, str>);

/// Text content. It is escaped according to [`RenderOptions::text`].
#[derive(Clone, Debug)]
pub struct TextNode(pub Cow<'static, str>);

#[derive(Clone, Debug)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

/// An attribute value. `None` omits the attribute, as does a boolean that is not `Some(true)`.
#[derive(Clone, Debug, PartialEq, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escape {
	/// Replace `<`, `>`, `"`, `&` and `'` with their entities.
	Entities,
	/// Write the value unchanged. The caller is responsible for it being safe markup.
	Verbatim,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
	pub text: Escape,
	pub attributes: Escape,
}

impl Default for RenderOptions {
	fn default() -> RenderOptions {
		RenderOptions {
			text: Escape::Entities,
			attributes: Escape::Entities,
		}
	}
}

/// A node paired with the options to serialize it with. Created by [`Node::render`].
pub struct Render<'a> {
	node: &'a Node,
	options: RenderOptions,
}

impl Node {
	pub fn render(&self, options: RenderOptions) -> Render<'_> {
		Render {
			node: self,
			options,
		}
	}

	pub fn render_to_string(&self) -> String {
		self.render_to_string_with(RenderOptions::default())
	}

	pub fn render_to_string_with(&self, options: RenderOptions) -> String {
		self.render(options).to_string()
	}

	pub fn as_host(&self) -> Option<&HostNode> {
		match self {
			Node::Host(node) => Some(node),
			_ => None,
		}
	}

	/// The content of a text or raw text node.
	pub fn text(&self) -> Option<&str> {
		match self {
			Node::Text(node) => Some(&node.0),
			Node::RawText(node) => Some(&node.0),
			_ => None,
		}
	}

	/// Flattens `Option` and `Vec` nodes, skipping null entries.
	pub fn flatten(&self) -> Vec<&Node> {
		let mut nodes = Vec::new();
		flatten_into(self, &mut nodes);
		nodes
	}
}

fn flatten_into<'a>(node: &'a Node, nodes: &mut Vec<&'a Node>) {
	match node {
		Node::Option(node) => {
			if let Some(node) = node {
				flatten_into(node, nodes);
			}
		}
		Node::Vec(children) => {
			for child in children.iter() {
				flatten_into(child, nodes);
			}
		}
		node => nodes.push(node),
	}
}

impl HostNode {
	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(k, _)| *k == key)
			.and_then(|(_, value)| match value {
				AttributeValue::Bool(Some(true)) => Some(""),
				AttributeValue::Bool(_) => None,
				AttributeValue::String(value) => value.as_deref(),
			})
	}

	pub fn class_list(&self) -> impl Iterator<Item = &str> {
		self.attribute("class")
			.into_iter()
			.flat_map(|class| class.split_whitespace())
	}

	pub fn child_nodes(&self) -> Vec<&Node> {
		let mut nodes = Vec::new();
		for child in self.children.iter() {
			flatten_into(child, &mut nodes);
		}
		nodes
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_node(f, self, RenderOptions::default())
	}
}

impl<'a> std::fmt::Display for Render<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_node(f, self.node, self.options)
	}
}

fn write_node(f: &mut dyn Write, node: &Node, options: RenderOptions) -> std::fmt::Result {
	match node {
		Node::RawText(node) => {
			f.write_str(&node.0)?;
		}
		Node::Text(node) => {
			write_escaped(f, &node.0, options.text)?;
		}
		Node::Host(node) => {
			write_host(f, node, options)?;
		}
		Node::Option(node) => {
			if let Some(node) = node {
				write_node(f, node, options)?;
			}
		}
		Node::Vec(node) => {
			for node in node {
				write_node(f, node, options)?;
			}
		}
	};
	Ok(())
}

fn write_host(f: &mut dyn Write, node: &HostNode, options: RenderOptions) -> std::fmt::Result {
	write!(f, "<{}", node.name)?;
	for (key, value) in node.attributes.iter() {
		match value {
			AttributeValue::Bool(value) => {
				if let Some(true) = value {
					write!(f, " {}", key)?;
				}
			}
			AttributeValue::String(value) => {
				if let Some(value) = value {
					write!(f, r#" {}=""#, key)?;
					write_escaped(f, value, options.attributes)?;
					f.write_char('"')?;
				}
			}
		}
	}
	if node.self_closing {
		write!(f, " /")?;
	}
	write!(f, ">")?;
	if !node.self_closing {
		for child in node.children.iter() {
			write_node(f, child, options)?;
		}
		write!(f, "</{}>", node.name)?;
	}
	Ok(())
}

fn write_escaped(f: &mut dyn Write, value: &str, escape: Escape) -> std::fmt::Result {
	if escape == Escape::Verbatim {
		return f.write_str(value);
	}
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::Text(TextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::Text(TextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::TextNode($t.into())
	};
}
