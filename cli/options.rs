use anyhow::{format_err, Context, Result};
use std::path::Path;
use std::str::FromStr;
use ui::ButtonOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	Json,
	Yaml,
}

impl Format {
	/// `.yaml` and `.yml` files are yaml, everything else is json.
	pub fn from_path(path: &Path) -> Format {
		match path.extension().and_then(|extension| extension.to_str()) {
			Some("yaml") | Some("yml") => Format::Yaml,
			_ => Format::Json,
		}
	}
}

impl FromStr for Format {
	type Err = anyhow::Error;
	fn from_str(value: &str) -> Result<Format> {
		match value {
			"json" => Ok(Format::Json),
			"yaml" | "yml" => Ok(Format::Yaml),
			_ => Err(format_err!("unknown options format {}, expected json or yaml", value)),
		}
	}
}

/// Reads options from `path`. The format is taken from the extension unless one is given.
pub fn load_options(path: &Path, format: Option<Format>) -> Result<ButtonOptions> {
	let source = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read options file {}", path.display()))?;
	let format = format.unwrap_or_else(|| Format::from_path(path));
	parse_options(&source, format)
		.with_context(|| format!("failed to parse options file {}", path.display()))
}

pub fn parse_options(source: &str, format: Format) -> Result<ButtonOptions> {
	let options: ButtonOptions = match format {
		Format::Json => serde_json::from_str(source)?,
		Format::Yaml => serde_yaml::from_str(source)?,
	};
	Ok(options)
}

#[test]
fn test_format_from_path() {
	assert_eq!(Format::from_path(Path::new("button.yaml")), Format::Yaml);
	assert_eq!(Format::from_path(Path::new("button.yml")), Format::Yaml);
	assert_eq!(Format::from_path(Path::new("button.json")), Format::Json);
	assert_eq!(Format::from_path(Path::new("button")), Format::Json);
}

#[test]
fn test_format_from_str() {
	assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
	assert_eq!("yaml".parse::<Format>().unwrap(), Format::Yaml);
	assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
	assert!("toml".parse::<Format>().is_err());
}

#[test]
fn test_parse_json_options() {
	let options = parse_options(
		r#"{ "href": "https://x.com", "external": true, "text": "Go", "classes": "primary" }"#,
		Format::Json,
	)
	.unwrap();
	assert_eq!(options.href.as_deref(), Some("https://x.com"));
	assert_eq!(options.resolved_target(), "_blank");
	assert_eq!(options.classes.iter().collect::<Vec<_>>(), vec!["primary"]);
}

#[test]
fn test_parse_yaml_options() {
	let source = "classes:\n  - primary\n  - wide\niconType: image\niconName: star.png\niconPosition: after\ntext: Click\n";
	let options = parse_options(source, Format::Yaml).unwrap();
	assert_eq!(
		options.classes.iter().collect::<Vec<_>>(),
		vec!["primary", "wide"]
	);
	assert_eq!(options.icon(), Some(ui::Icon::Image("star.png".to_owned())));
	assert_eq!(options.icon_position, ui::IconPosition::After);
	assert_eq!(
		ui::button(options).render_to_string(),
		r#"<button class="button primary wide"><span class="button__text">Click</span><img class="button__icon" src="star.png" alt="Button Icon" /></button>"#
	);
}

#[test]
fn test_parse_invalid_options() {
	assert!(parse_options(r#"{ "external": "yes" }"#, Format::Json).is_err());
	assert!(parse_options("[", Format::Json).is_err());
}

#[test]
fn test_load_missing_file() {
	let error = load_options(Path::new("does/not/exist.json"), None).unwrap_err();
	assert!(format!("{:#}", error).contains("failed to read options file"));
}
