//! TOML configuration: embedded defaults with an optional user override at
//! `<config dir>/sonant/config.toml`. A malformed or unreadable user file is
//! logged and ignored, never fatal.

use std::path::PathBuf;

use serde::Deserialize;

use sonant_types::{AccidentalNotation, DetectOptions};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    detection: DetectionConfig,
}

#[derive(Deserialize, Default)]
struct DetectionConfig {
    accidental_notation: Option<String>,
    return_all: Option<bool>,
    merge_parentheses: Option<bool>,
}

pub struct Config {
    detection: DetectionConfig,
}

impl Config {
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_detection(&mut base.detection, user.detection),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            detection: base.detection,
        }
    }

    /// Default detection options for callers that don't pass their own.
    pub fn detect_options(&self) -> DetectOptions {
        let fallback = DetectOptions::default();
        DetectOptions {
            accidental_notation: self
                .detection
                .accidental_notation
                .as_deref()
                .and_then(parse_accidental)
                .unwrap_or(fallback.accidental_notation),
            return_all: self.detection.return_all.unwrap_or(fallback.return_all),
            merge_parentheses: self
                .detection
                .merge_parentheses
                .unwrap_or(fallback.merge_parentheses),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sonant").join("config.toml"))
}

fn merge_detection(base: &mut DetectionConfig, user: DetectionConfig) {
    if user.accidental_notation.is_some() {
        base.accidental_notation = user.accidental_notation;
    }
    if user.return_all.is_some() {
        base.return_all = user.return_all;
    }
    if user.merge_parentheses.is_some() {
        base.merge_parentheses = user.merge_parentheses;
    }
}

fn parse_accidental(s: &str) -> Option<AccidentalNotation> {
    match s {
        "sharp" => Some(AccidentalNotation::Sharp),
        "flat" => Some(AccidentalNotation::Flat),
        _ => None,
    }
}
