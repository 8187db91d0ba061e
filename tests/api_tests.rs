//! Library API integration tests.

use std::fs;
use std::path::Path;

use fmuconfig::{
    ConfigParser, ConfigParserFmu, Error, ExportParams, Flavor, Mode, convert_file, load_config,
    render_file,
};
use tempfile::TempDir;

const MASTER: &str = "\
global:
  NWELLS: 4
  KH_MULT: 1.5 ~ <KH_MULT>
  USE_FAULTS: yes ~ <USE_FAULTS>
  WELLS:
    - OP_1
    - OP_2 ~ <WELL2>
rms:
  NWELLS: 5
";

fn write_master(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("master.yml");
    fs::write(&path, MASTER).unwrap();
    path
}

#[test]
fn test_load_config_missing_file() {
    let err = load_config(Path::new("/nowhere/master.yml")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_render_ipl_both_flavors() {
    let dir = TempDir::new().unwrap();
    let path = write_master(&dir);

    let dest = render_file(&path, Mode::Ipl, "rms", Flavor::Destination).unwrap();
    assert!(dest.contains("Int NWELLS = 5\n"));
    assert!(dest.contains("Float KH_MULT = 1.5\n"));
    assert!(dest.contains("String WELLS[]\nWELLS[1] = \"OP_1\"\nWELLS[2] = \"OP_2\"\n"));

    let tmpl = render_file(&path, Mode::Ipl, "rms", Flavor::Template).unwrap();
    assert!(tmpl.contains("Float KH_MULT = <KH_MULT>\n"));
    assert!(tmpl.contains("WELLS[2] = <WELL2>\n"));
}

#[test]
fn test_yaml_1_1_words_stay_text() {
    // serde_yaml follows YAML 1.2, where `yes` is a plain string
    let dir = TempDir::new().unwrap();
    let path = write_master(&dir);
    let dest = render_file(&path, Mode::Ipl, "rms", Flavor::Destination).unwrap();
    assert!(dest.contains("String USE_FAULTS = \"yes\"\n"));
}

#[test]
fn test_convert_yaml_template_only() {
    let dir = TempDir::new().unwrap();
    let path = write_master(&dir);
    let params = ExportParams {
        template: Some(dir.path().join("templates")),
        ..ExportParams::default()
    };

    convert_file(&path, Mode::Yaml, &params).unwrap();

    let text =
        fs::read_to_string(dir.path().join("templates/global_variables.yml.tmpl")).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(doc["global"]["KH_MULT"], serde_yaml::Value::from("<KH_MULT>"));
    assert_eq!(doc["rms"]["NWELLS"], serde_yaml::Value::from(5));
    assert!(!dir.path().join("templates/global_variables.yml").exists());
}

#[test]
fn test_parse_then_display_names_source() {
    let dir = TempDir::new().unwrap();
    let path = write_master(&dir);
    let mut cfg = ConfigParserFmu::new();
    assert_eq!(cfg.to_string(), "ConfigParserFmu(unparsed)");
    cfg.parse(&path).unwrap();
    assert_eq!(cfg.to_string(), format!("ConfigParserFmu({})", path.display()));
}
