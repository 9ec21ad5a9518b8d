use html::{html, Node};
use serde::{Deserialize, Deserializer};

/// Options for [`button`]. Every field is optional. `ButtonOptions::default()` builds a plain `<button class="button">`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonOptions {
	/// Additional classes, appended after the base `button` class.
	pub classes: Classes,
	pub href: Option<String>,
	/// Whether the button links to an external site. This appends an external link indicator.
	#[serde(deserialize_with = "null_as_default")]
	pub external: bool,
	/// The target of a link button. Only emitted when `href` is set. See [`ButtonOptions::resolved_target`].
	pub target: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	pub icon_position: IconPosition,
	#[serde(deserialize_with = "null_as_default")]
	pub icon_type: IconType,
	/// An icon font glyph class or an image url, depending on `icon_type`.
	pub icon_name: Option<String>,
	pub text: Option<String>,
}

/// A list of class tokens. A single token converts to a one element list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classes(Vec<String>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconPosition {
	Before,
	After,
	/// Any other value. The icon is placed in neither slot.
	Unrecognized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconType {
	FontAwesome,
	Image,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Icon {
	/// The glyph class of an icon font, for example `fa-star`.
	FontAwesome(String),
	/// The url of an image.
	Image(String),
}

impl ButtonOptions {
	/// The explicit target if there is one, otherwise `_blank` for external links and `_self` for the rest.
	pub fn resolved_target(&self) -> &str {
		match &self.target {
			Some(target) => target,
			None if self.external => "_blank",
			None => "_self",
		}
	}

	pub fn icon(&self) -> Option<Icon> {
		self.icon_name
			.clone()
			.map(|icon_name| Icon::new(self.icon_type, icon_name))
	}
}

/// Builds an `<a>` if `href` is set and a `<button>` otherwise.
pub fn button(options: ButtonOptions) -> Node {
	let target = options.resolved_target().to_owned();
	let (icon_before, icon_after) = match options.icon_position {
		IconPosition::Before => (options.icon().map(|icon| icon.render("before")), None),
		IconPosition::After => (None, options.icon().map(|icon| icon.render("after"))),
		IconPosition::Unrecognized => (None, None),
	};
	let ButtonOptions {
		classes,
		href,
		external,
		text,
		..
	} = options;
	let class = std::iter::once("button".to_owned())
		.chain(classes)
		.collect::<Vec<_>>()
		.join(" ");
	let text = text.map(|text| {
		html! {
			<span class="button__text">{text}</span>
		}
	});
	let external_icon = if external {
		Some(html! {
			<span class="button__external-icon fa-thin fa-arrow-up-right-from-square"></span>
		})
	} else {
		None
	};
	if let Some(href) = href {
		html! {
			<a class={class} href={href} target={target}>
				{icon_before}
				{text}
				{icon_after}
				{external_icon}
			</a>
		}
	} else {
		html! {
			<button class={class}>
				{icon_before}
				{text}
				{icon_after}
				{external_icon}
			</button>
		}
	}
}

impl Icon {
	pub fn new(icon_type: IconType, name: String) -> Icon {
		match icon_type {
			IconType::FontAwesome => Icon::FontAwesome(name),
			IconType::Image => Icon::Image(name),
		}
	}

	fn render(self, position: &str) -> Node {
		match self {
			Icon::FontAwesome(name) => {
				let class = format!("button__icon button__icon--{} {}", position, name);
				html! {
					<span class={class}></span>
				}
			}
			Icon::Image(src) => html! {
				<img class="button__icon" src={src} alt="Button Icon" />
			},
		}
	}
}

impl Default for IconPosition {
	fn default() -> IconPosition {
		IconPosition::Before
	}
}

impl From<String> for IconPosition {
	fn from(value: String) -> IconPosition {
		match value.as_str() {
			"before" => IconPosition::Before,
			"after" => IconPosition::After,
			_ => {
				tracing::debug!(icon_position = %value, "unrecognized icon position, omitting the icon");
				IconPosition::Unrecognized
			}
		}
	}
}

impl Default for IconType {
	fn default() -> IconType {
		IconType::FontAwesome
	}
}

impl From<String> for IconType {
	fn from(value: String) -> IconType {
		match value.as_str() {
			"font-awesome" => IconType::FontAwesome,
			"image" => IconType::Image,
			_ => {
				tracing::debug!(icon_type = %value, "unrecognized icon type, using font-awesome");
				IconType::FontAwesome
			}
		}
	}
}

impl<'de> Deserialize<'de> for IconPosition {
	fn deserialize<D>(deserializer: D) -> Result<IconPosition, D::Error>
	where
		D: Deserializer<'de>,
	{
		match EnumRepr::deserialize(deserializer)? {
			EnumRepr::Known(value) => Ok(value.into()),
			EnumRepr::Other(_) => {
				tracing::debug!("non string icon position, omitting the icon");
				Ok(IconPosition::Unrecognized)
			}
		}
	}
}

impl<'de> Deserialize<'de> for IconType {
	fn deserialize<D>(deserializer: D) -> Result<IconType, D::Error>
	where
		D: Deserializer<'de>,
	{
		match EnumRepr::deserialize(deserializer)? {
			EnumRepr::Known(value) => Ok(value.into()),
			EnumRepr::Other(_) => {
				tracing::debug!("non string icon type, using font-awesome");
				Ok(IconType::FontAwesome)
			}
		}
	}
}

/// An enum option as written in a config file. Values of any other type are accepted and ignored.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnumRepr {
	Known(String),
	Other(serde::de::IgnoredAny),
}

impl Classes {
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|class| class.as_str())
	}
}

impl IntoIterator for Classes {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'de> Deserialize<'de> for Classes {
	fn deserialize<D>(deserializer: D) -> Result<Classes, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum ClassesRepr {
			One(String),
			Many(Vec<String>),
		}
		let classes = match Option::<ClassesRepr>::deserialize(deserializer)? {
			None => Vec::new(),
			Some(ClassesRepr::One(class)) => vec![class],
			Some(ClassesRepr::Many(classes)) => classes,
		};
		Ok(Classes(classes))
	}
}

impl From<&str> for Classes {
	fn from(value: &str) -> Classes {
		Classes(vec![value.to_owned()])
	}
}

impl From<String> for Classes {
	fn from(value: String) -> Classes {
		Classes(vec![value])
	}
}

impl From<Vec<String>> for Classes {
	fn from(value: Vec<String>) -> Classes {
		Classes(value)
	}
}

impl From<Vec<&str>> for Classes {
	fn from(value: Vec<&str>) -> Classes {
		Classes(value.into_iter().map(|class| class.to_owned()).collect())
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
fn class_list(node: &Node) -> Vec<&str> {
	node.as_host().unwrap().class_list().collect()
}

#[test]
fn test_external_link() {
	let node = button(ButtonOptions {
		href: Some("https://x.com".to_owned()),
		external: true,
		text: Some("Go".to_owned()),
		..Default::default()
	});
	let root = node.as_host().unwrap();
	assert_eq!(root.name, "a");
	assert_eq!(root.attribute("target"), Some("_blank"));
	let children = root.child_nodes();
	assert_eq!(children.len(), 2);
	assert_eq!(class_list(children[0]), vec!["button__text"]);
	assert_eq!(
		children[0].as_host().unwrap().child_nodes()[0].text(),
		Some("Go")
	);
	assert!(class_list(children[1]).contains(&"button__external-icon"));
	insta::assert_snapshot!(node.render_to_string(), @r###"<a class="button" href="https://x.com" target="_blank"><span class="button__text">Go</span><span class="button__external-icon fa-thin fa-arrow-up-right-from-square"></span></a>"###);
}

#[test]
fn test_image_icon_after_text() {
	let node = button(ButtonOptions {
		text: Some("Click".to_owned()),
		icon_name: Some("star".to_owned()),
		icon_type: IconType::Image,
		icon_position: IconPosition::After,
		..Default::default()
	});
	let root = node.as_host().unwrap();
	assert_eq!(root.name, "button");
	assert_eq!(root.attribute("target"), None);
	let children = root.child_nodes();
	assert_eq!(children.len(), 2);
	assert_eq!(class_list(children[0]), vec!["button__text"]);
	let image = children[1].as_host().unwrap();
	assert_eq!(image.name, "img");
	assert_eq!(image.attribute("src"), Some("star"));
	insta::assert_snapshot!(node.render_to_string(), @r###"<button class="button"><span class="button__text">Click</span><img class="button__icon" src="star" alt="Button Icon" /></button>"###);
}

#[test]
fn test_root_tag_and_target() {
	let cases = vec![
		(None, false, None, "button", None),
		(None, true, Some("_top"), "button", None),
		(Some("/docs"), false, None, "a", Some("_self")),
		(Some("/docs"), true, None, "a", Some("_blank")),
		(Some("/docs"), true, Some("_parent"), "a", Some("_parent")),
	];
	for (href, external, target, name, expected_target) in cases {
		let node = button(ButtonOptions {
			href: href.map(|href: &str| href.to_owned()),
			external,
			target: target.map(|target: &str| target.to_owned()),
			..Default::default()
		});
		let root = node.as_host().unwrap();
		assert_eq!(root.name, name);
		assert_eq!(root.attribute("href"), href);
		assert_eq!(root.attribute("target"), expected_target);
	}
}

#[test]
fn test_external_indicator_is_last() {
	for icon_position in [IconPosition::Before, IconPosition::After].iter() {
		let node = button(ButtonOptions {
			external: true,
			icon_name: Some("fa-star".to_owned()),
			icon_position: *icon_position,
			text: Some("Star".to_owned()),
			..Default::default()
		});
		let children = node.as_host().unwrap().child_nodes();
		assert_eq!(children.len(), 3);
		assert!(class_list(children[2]).contains(&"button__external-icon"));
	}
	let node = button(ButtonOptions {
		external: true,
		..Default::default()
	});
	let children = node.as_host().unwrap().child_nodes();
	assert_eq!(children.len(), 1);
	assert!(class_list(children[0]).contains(&"button__external-icon"));
}

#[test]
fn test_font_awesome_icon_position() {
	let node = button(ButtonOptions {
		icon_name: Some("fa-star".to_owned()),
		text: Some("Star".to_owned()),
		..Default::default()
	});
	let children = node.as_host().unwrap().child_nodes();
	assert_eq!(
		class_list(children[0]),
		vec!["button__icon", "button__icon--before", "fa-star"]
	);
	assert_eq!(class_list(children[1]), vec!["button__text"]);
	let node = button(ButtonOptions {
		icon_name: Some("fa-star".to_owned()),
		icon_position: IconPosition::After,
		text: Some("Star".to_owned()),
		..Default::default()
	});
	let children = node.as_host().unwrap().child_nodes();
	assert_eq!(class_list(children[0]), vec!["button__text"]);
	assert_eq!(
		class_list(children[1]),
		vec!["button__icon", "button__icon--after", "fa-star"]
	);
}

#[test]
fn test_classes() {
	let single = button(ButtonOptions {
		classes: "primary".into(),
		..Default::default()
	});
	let sequence = button(ButtonOptions {
		classes: vec!["primary"].into(),
		..Default::default()
	});
	assert_eq!(single.render_to_string(), sequence.render_to_string());
	assert_eq!(class_list(&single), vec!["button", "primary"]);
	let node = button(ButtonOptions {
		classes: vec!["button", "wide"].into(),
		..Default::default()
	});
	assert_eq!(class_list(&node), vec!["button", "button", "wide"]);
}

#[test]
fn test_default_options() {
	let node = button(ButtonOptions::default());
	assert_eq!(node.render_to_string(), r#"<button class="button"></button>"#);
}

#[test]
fn test_values_pass_through() {
	let node = button(ButtonOptions {
		href: Some("not a url".to_owned()),
		icon_name: Some("".to_owned()),
		icon_type: IconType::Image,
		..Default::default()
	});
	let root = node.as_host().unwrap();
	assert_eq!(root.attribute("href"), Some("not a url"));
	let image = root.child_nodes()[0].as_host().unwrap();
	assert_eq!(image.attribute("src"), Some(""));
}

#[test]
fn test_text_escaping_is_chosen_by_the_caller() {
	let node = button(ButtonOptions {
		text: Some("<b>Go</b>".to_owned()),
		..Default::default()
	});
	assert_eq!(
		node.render_to_string(),
		r#"<button class="button"><span class="button__text">&lt;b&gt;Go&lt;/b&gt;</span></button>"#
	);
	let verbatim = html::RenderOptions {
		text: html::Escape::Verbatim,
		..Default::default()
	};
	assert_eq!(
		node.render_to_string_with(verbatim),
		r#"<button class="button"><span class="button__text"><b>Go</b></span></button>"#
	);
}

#[test]
fn test_deserialize_options() {
	let single: ButtonOptions = serde_json::from_str(r#"{ "classes": "primary" }"#).unwrap();
	let sequence: ButtonOptions = serde_json::from_str(r#"{ "classes": ["primary"] }"#).unwrap();
	assert_eq!(single.classes, sequence.classes);
	assert_eq!(single.classes, Classes::from("primary"));
	let options: ButtonOptions = serde_json::from_str(
		r#"{
			"href": "https://x.com",
			"external": true,
			"iconPosition": "after",
			"iconType": "image",
			"iconName": "star.png",
			"text": "Go"
		}"#,
	)
	.unwrap();
	assert_eq!(options.href.as_deref(), Some("https://x.com"));
	assert!(options.external);
	assert_eq!(options.icon_position, IconPosition::After);
	assert_eq!(options.icon(), Some(Icon::Image("star.png".to_owned())));
	assert_eq!(options.text.as_deref(), Some("Go"));
	assert_eq!(options.resolved_target(), "_blank");
}

#[test]
fn test_deserialize_null_and_unknown_values() {
	let options: ButtonOptions = serde_json::from_str(
		r#"{
			"classes": null,
			"external": null,
			"iconPosition": "middle",
			"iconType": "material",
			"iconName": "star"
		}"#,
	)
	.unwrap();
	assert_eq!(options.classes, Classes::default());
	assert!(!options.external);
	assert_eq!(options.icon_position, IconPosition::Unrecognized);
	assert_eq!(options.icon(), Some(Icon::FontAwesome("star".to_owned())));
	assert_eq!(options.resolved_target(), "_self");
	let options: ButtonOptions =
		serde_json::from_str(r#"{ "iconType": 7, "iconPosition": ["after"], "iconName": "fa-star" }"#)
			.unwrap();
	assert_eq!(options.icon_type, IconType::FontAwesome);
	assert_eq!(options.icon_position, IconPosition::Unrecognized);
	let options: ButtonOptions = serde_json::from_str("{}").unwrap();
	assert_eq!(options.icon_type, IconType::FontAwesome);
	assert_eq!(options.icon(), None);
}

#[test]
fn test_unrecognized_icon_position_omits_icon() {
	let options: ButtonOptions =
		serde_json::from_str(r#"{ "iconPosition": "middle", "iconName": "fa-star", "text": "Star" }"#)
			.unwrap();
	let node = button(options);
	let children = node.as_host().unwrap().child_nodes();
	assert_eq!(children.len(), 1);
	assert_eq!(class_list(children[0]), vec!["button__text"]);
	let node = button(ButtonOptions {
		external: true,
		icon_name: Some("star.png".to_owned()),
		icon_type: IconType::Image,
		icon_position: IconPosition::Unrecognized,
		..Default::default()
	});
	assert_eq!(
		node.render_to_string(),
		r#"<button class="button"><span class="button__external-icon fa-thin fa-arrow-up-right-from-square"></span></button>"#
	);
}

#[test]
fn test_non_string_icon_type_falls_back_to_font_awesome() {
	let options: ButtonOptions =
		serde_json::from_str(r#"{ "iconType": 7, "iconName": "fa-star" }"#).unwrap();
	assert_eq!(options.icon(), Some(Icon::FontAwesome("fa-star".to_owned())));
	assert_eq!(
		button(options).render_to_string(),
		r#"<button class="button"><span class="button__icon button__icon--before fa-star"></span></button>"#
	);
}
