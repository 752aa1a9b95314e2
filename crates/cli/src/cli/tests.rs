use clap::Parser;

use super::*;

#[test]
fn parse_scene_index() {
	let cli = Cli::try_parse_from(["obs-switch", "scene", "2"]).unwrap();

	match cli.command {
		Commands::Scene(args) => {
			assert!(!args.toggle);
			assert!(!args.backwards);
			assert_eq!(args.index, ["2"]);
		}
		_ => panic!("Expected Scene command"),
	}
}

#[test]
fn parse_scene_toggle_backwards() {
	let cli = Cli::try_parse_from(["obs-switch", "scene", "-t", "-b"]).unwrap();

	match cli.command {
		Commands::Scene(args) => {
			assert!(args.toggle);
			assert!(args.backwards);
			assert!(args.index.is_empty());
		}
		_ => panic!("Expected Scene command"),
	}
}

#[test]
fn scene_keeps_extra_and_negative_positionals_for_validation() {
	let cli = Cli::try_parse_from(["obs-switch", "scene", "1", "2"]).unwrap();
	assert!(matches!(cli.command, Commands::Scene(ref args) if args.index == ["1", "2"]));

	let cli = Cli::try_parse_from(["obs-switch", "scene", "-1"]).unwrap();
	assert!(matches!(cli.command, Commands::Scene(ref args) if args.index == ["-1"]));

	let cli = Cli::try_parse_from(["obs-switch", "scene", "abc"]).unwrap();
	assert!(matches!(cli.command, Commands::Scene(ref args) if args.index == ["abc"]));
}

#[test]
fn list_format_defaults_to_json() {
	let cli = Cli::try_parse_from(["obs-switch", "list"]).unwrap();
	assert!(matches!(cli.command, Commands::List(FormatArgs { format: OutputFormat::Json })));

	let cli = Cli::try_parse_from(["obs-switch", "ls", "-f", "text"]).unwrap();
	assert!(matches!(cli.command, Commands::List(FormatArgs { format: OutputFormat::Text })));
}

#[test]
fn format_is_case_sensitive() {
	assert!(Cli::try_parse_from(["obs-switch", "list", "--format", "JSON"]).is_err());
	assert!(Cli::try_parse_from(["obs-switch", "version", "--format", "yaml"]).is_err());
}

#[test]
fn command_aliases() {
	let cli = Cli::try_parse_from(["obs-switch", "obs-version", "--format", "text"]).unwrap();
	assert!(matches!(cli.command, Commands::Version(FormatArgs { format: OutputFormat::Text })));

	for alias in ["dump-code", "dump", "code"] {
		let cli = Cli::try_parse_from(["obs-switch", alias]).unwrap();
		assert!(matches!(cli.command, Commands::DumpCode), "alias {alias}");
	}
}

#[test]
fn global_flags_default() {
	let cli = Cli::try_parse_from(["obs-switch", "list"]).unwrap();
	assert_eq!(cli.server, "localhost:4455");
	assert_eq!(cli.timeout_ms, DEFAULT_TIMEOUT_MS);
	assert_eq!(cli.verbose, 0);
}

#[test]
fn global_flags_after_subcommand() {
	let cli = Cli::try_parse_from([
		"obs-switch",
		"scene",
		"0",
		"-s",
		"studio:4455",
		"-P",
		"hunter2",
		"--timeout-ms",
		"250",
		"-vv",
	])
	.unwrap();

	assert_eq!(cli.server, "studio:4455");
	assert_eq!(cli.password.as_deref(), Some("hunter2"));
	assert_eq!(cli.timeout_ms, 250);
	assert_eq!(cli.verbose, 2);
}

#[test]
fn scene_help_names_the_subcommand() {
	let help = scene_help();
	assert!(help.contains("obs-switch scene"), "{help}");
	assert!(help.contains("--toggle"));
	assert!(help.contains("--backwards"));
	assert!(help.contains("[INDEX]..."));
}

#[test]
fn scene_help_is_plain_text() {
	let help = scene_help();
	assert!(!help.contains('\x1b'), "{help:?}");
}

#[test]
fn cli_definition_is_consistent() {
	Cli::command().debug_assert();
}
