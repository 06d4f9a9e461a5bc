use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use color_eyre::eyre::{eyre, Result};
use itertools::Itertools;
use log::{debug, LevelFilter};
use std::fs;
use std::path::PathBuf;

use qr_frames::config::{DEFAULT_PRESET_ENV_VAR, PRESETS_ENV_VAR};
use qr_frames::logger::setup_logger;
use qr_frames::{FrameConfig, FramePreset, FrameSettings};

fn cli() -> Command {
    command!()
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase logging verbosity (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("presets")
                .long("presets")
                .value_name("JSON")
                .conflicts_with("presets-file")
                .global(true)
                .help(format!("Frame presets override, replaces ${PRESETS_ENV_VAR}")),
        )
        .arg(
            Arg::new("presets-file")
                .long("presets-file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Read the frame presets override from a JSON file"),
        )
        .arg(
            Arg::new("default")
                .long("default")
                .value_name("NAME")
                .global(true)
                .help(format!("Default preset name, replaces ${DEFAULT_PRESET_ENV_VAR}")),
        )
        .subcommand(Command::new("list").about("List the active presets (default command)"))
        .subcommand(
            Command::new("show")
                .about("Print a preset, the default one if no name is given")
                .arg(Arg::new("name").value_name("NAME"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["yaml", "json"])
                        .default_value("yaml"),
                ),
        )
        .subcommand(Command::new("frames").about("List the frame types and their components"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = cli().get_matches();

    let level = match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    setup_logger(level);

    let config = load_config(&matches)?;
    let settings = FrameSettings::init(&config);

    match matches.subcommand() {
        Some(("show", sub)) => show(&settings, sub),
        Some(("frames", _)) => {
            frames(&settings);
            Ok(())
        }
        _ => {
            list(&settings);
            Ok(())
        }
    }
}

/// Environment first, then command line flags.
fn load_config(matches: &ArgMatches) -> Result<FrameConfig> {
    let mut config = FrameConfig::from_env();
    if let Some(json) = matches.get_one::<String>("presets") {
        config.presets_json = Some(json.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("presets-file") {
        debug!("Reading frame presets from: {}", path.display());
        let json = fs::read_to_string(path)
            .map_err(|e| eyre!("Could not read presets file {}: {e}", path.display()))?;
        config.presets_json = Some(json);
    }
    if let Some(name) = matches.get_one::<String>("default") {
        config.default_preset = Some(name.clone());
    }
    Ok(config)
}

fn list(settings: &FrameSettings) {
    let catalog = settings.catalog();
    let default_preset = catalog.default_preset();
    for preset in catalog.presets() {
        let marker = if std::ptr::eq(preset, default_preset) { "*" } else { " " };
        let mut details = vec![preset.frame_type.to_string()];
        if let Some(text) = &preset.text {
            details.push(format!("{text:?}"));
        }
        if let Some(position) = preset.position {
            details.push(position.to_string());
        }
        println!("{marker} {} ({})", preset.name, details.iter().join(", "));
    }
    println!("\nSource: {}", catalog.source());
    for diagnostic in catalog.diagnostics() {
        let action = if diagnostic.drops_record() { "skipped" } else { "ignored" };
        println!("  {action} {diagnostic}");
    }
}

fn show(settings: &FrameSettings, matches: &ArgMatches) -> Result<()> {
    let catalog = settings.catalog();
    let preset: &FramePreset = match matches.get_one::<String>("name") {
        Some(name) => catalog.find(name).ok_or_else(|| {
            eyre!(
                "No frame preset named '{name}'. Available: {}",
                catalog.presets().iter().map(|p| &p.name).join(", ")
            )
        })?,
        None => catalog.default_preset(),
    };

    let output = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => serde_json::to_string_pretty(preset)?,
        _ => serde_yaml::to_string(preset)?,
    };
    println!("{}", output.trim_end());
    println!("# frame: {}", settings.component_for(preset));
    Ok(())
}

fn frames(settings: &FrameSettings) {
    for (key, component) in settings.registry().entries() {
        println!("{:<8} {component}", key.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_presets_flag_overrides_config() {
        let matches = cli().get_matches_from(["qr-frames", "--presets", "[]", "--default", "A"]);
        let config = load_config(&matches).unwrap();
        assert_eq!(config.presets_json.as_deref(), Some("[]"));
        assert_eq!(config.default_preset.as_deref(), Some("A"));
    }

    #[test]
    fn test_missing_presets_file_is_an_error() {
        let matches =
            cli().get_matches_from(["qr-frames", "--presets-file", "/nonexistent/presets.json"]);
        assert!(load_config(&matches).is_err());
    }

    #[test]
    fn test_show_unknown_preset_is_an_error() {
        let settings = FrameSettings::init(&FrameConfig::new());
        let matches = cli().get_matches_from(["qr-frames", "show", "Nope"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert!(show(&settings, sub).is_err());
    }
}
