//! Integration tests for config file loading

use colorstr::{ColorMode, Config, Error};

use crate::helpers::temp_config;

#[test]
fn load_from_reads_color_mode() {
    let (_dir, path) = temp_config("color = \"never\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.color, ColorMode::Never);
}

#[test]
fn load_from_empty_file_uses_defaults() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn load_from_invalid_toml_names_file() {
    let (_dir, path) = temp_config("color = \"rainbow\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn config_path_is_under_colorstr_dir() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with("colorstr/config.toml"));
    }
}
