use obs_switch::{SceneCollection, SceneRef, VersionInfo};

use super::*;

fn scenes() -> SceneCollection {
	SceneCollection::new(vec![SceneRef::new("Live", 2), SceneRef::new("BRB", 1), SceneRef::new("Intro", 0)])
}

#[test]
fn scenes_as_json() {
	let rendered = Output::Scenes(scenes()).render(OutputFormat::Json).unwrap();
	assert_eq!(
		rendered,
		"{\"scenes\":[{\"index\":2,\"name\":\"Live\"},{\"index\":1,\"name\":\"BRB\"},{\"index\":0,\"name\":\"Intro\"}]}\n"
	);
}

#[test]
fn scenes_as_text() {
	let rendered = Output::Scenes(scenes()).render(OutputFormat::Text).unwrap();
	assert_eq!(rendered, "Live\nBRB\nIntro\n");
}

#[test]
fn scene_names_are_json_escaped() {
	let scenes = SceneCollection::new(vec![SceneRef::new("Say \"hi\"", 0)]);
	let rendered = Output::Scenes(scenes).render(OutputFormat::Json).unwrap();
	assert_eq!(rendered, "{\"scenes\":[{\"index\":0,\"name\":\"Say \\\"hi\\\"\"}]}\n");
}

#[test]
fn version_in_both_formats() {
	let info = VersionInfo {
		obs_version: "30.2.3".into(),
		websocket_version: "5.5.2".into(),
	};

	assert_eq!(
		Output::Version(info.clone()).render(OutputFormat::Json).unwrap(),
		"{\"obs\":\"30.2.3\",\"websocket\":\"5.5.2\"}\n"
	);
	assert_eq!(
		Output::Version(info).render(OutputFormat::Text).unwrap(),
		"OBS version: 30.2.3\nOBS websocket version: 5.5.2\n"
	);
}

#[test]
fn source_and_help_ignore_format() {
	for format in [OutputFormat::Json, OutputFormat::Text] {
		assert_eq!(Output::Source("fn main() {}\n").render(format).unwrap(), "fn main() {}\n");
		assert_eq!(Output::Help("Usage: x\n".into()).render(format).unwrap(), "Usage: x\n");
	}
}

#[test]
fn output_format_from_str_and_display() {
	assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
	assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
	assert!("Text".parse::<OutputFormat>().is_err());
	assert_eq!(OutputFormat::Text.to_string(), "text");
	assert_eq!(OutputFormat::default(), OutputFormat::Json);
}

#[test]
fn error_codes_serialize_screaming_snake_case() {
	let json = serde_json::to_string(&ErrorCode::UnknownCurrentScene).unwrap();
	assert_eq!(json, "\"UNKNOWN_CURRENT_SCENE\"");
	assert_eq!(ErrorCode::UnknownCurrentScene.to_string(), "UNKNOWN_CURRENT_SCENE");
}

#[test]
fn write_to_writes_rendered_bytes() {
	let mut out = Vec::new();
	Output::Scenes(scenes()).write_to(OutputFormat::Text, &mut out).unwrap();
	assert_eq!(out, b"Live\nBRB\nIntro\n");
}
