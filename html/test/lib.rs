use html::{html, raw, text, Escape, Node, RenderOptions};

#[test]
fn test_render() {
	let html = html!(<div class="greeting">{"Hello World"}</div>).render_to_string();
	assert_eq!(html, r#"<div class="greeting">Hello World</div>"#);
}

#[test]
fn test_nested_and_self_closing() {
	let src = "logo.png".to_owned();
	let html = html! {
		<p>
			<img alt="logo" src={src} />
			<span>{"after"}</span>
		</p>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<p><img alt="logo" src="logo.png" /><span>after</span></p>"#
	);
}

#[test]
fn test_hyphenated_attribute() {
	let html = html!(<div data-role="icon"></div>).render_to_string();
	assert_eq!(html, r#"<div data-role="icon"></div>"#);
}

#[test]
fn test_omitted_values() {
	let title: Option<String> = None;
	let label: Option<String> = None;
	let html = html! {
		<button disabled={Some(false)} title={title}>
			{label}
		</button>
	}
	.render_to_string();
	assert_eq!(html, "<button></button>");
	let html = html!(<button disabled={true}></button>).render_to_string();
	assert_eq!(html, "<button disabled></button>");
}

#[test]
fn test_escaping() {
	let name = "<b>Tom & Jerry</b>".to_owned();
	let node = html! {
		<a href={"/?a=1&b=\"2\""}>{name}</a>
	};
	assert_eq!(
		node.render_to_string(),
		r#"<a href="/?a=1&amp;b=&quot;2&quot;">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</a>"#
	);
	let verbatim = RenderOptions {
		text: Escape::Verbatim,
		attributes: Escape::Verbatim,
	};
	assert_eq!(
		node.render_to_string_with(verbatim),
		r#"<a href="/?a=1&b="2""><b>Tom & Jerry</b></a>"#
	);
	assert_eq!(node.to_string(), node.render_to_string());
}

#[test]
fn test_raw_and_text_macros() {
	let node = html! {
		<div>
			{raw!("<br />")}
			{text!("it's")}
		</div>
	};
	assert_eq!(node.render_to_string(), "<div><br />it&apos;s</div>");
}

#[test]
fn test_accessors() {
	let missing: Option<Node> = None;
	let node = html! {
		<span class="a  b" hidden={true}>
			{missing}
			{vec![html!(<i></i>), "text".into()]}
		</span>
	};
	let host = node.as_host().unwrap();
	assert_eq!(host.name, "span");
	assert_eq!(host.class_list().collect::<Vec<_>>(), vec!["a", "b"]);
	assert_eq!(host.attribute("hidden"), Some(""));
	assert_eq!(host.attribute("id"), None);
	let children = host.child_nodes();
	assert_eq!(children.len(), 2);
	assert_eq!(children[0].as_host().map(|host| host.name), Some("i"));
	assert_eq!(children[1].text(), Some("text"));
	assert_eq!(node.flatten().len(), 1);
}
