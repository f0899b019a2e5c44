//! Unit tests for config module

use mdpaste::clipboard::{ScriptStore, DEFAULT_POWERSHELL};
use mdpaste::Config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert!(config.scripts.directory.is_none());
    assert_eq!(config.scripts.powershell, DEFAULT_POWERSHELL);
    assert!(config.log.enabled);
    assert!(config.log.file.is_none());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.scripts.powershell, config.scripts.powershell);
    assert_eq!(parsed.log.enabled, config.log.enabled);
}

#[test]
fn empty_file_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.scripts.powershell, DEFAULT_POWERSHELL);
    assert!(config.log.enabled);
}

#[test]
fn scripts_section_parses_from_toml() {
    let toml_str = r#"
[scripts]
directory = "/opt/mdpaste/scripts"
powershell = 'D:\tools\pwsh.exe'
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.script_store(),
        ScriptStore::Custom("/opt/mdpaste/scripts".into())
    );
    assert_eq!(config.scripts.powershell, r"D:\tools\pwsh.exe");
}

#[test]
fn log_section_defaults_when_missing() {
    let toml_str = r#"
[scripts]
directory = "~/scripts"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.log.enabled);
    assert!(config.diagnostic_log().is_some());
}

#[test]
fn log_can_be_disabled() {
    let toml_str = r#"
[log]
enabled = false
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.diagnostic_log().is_none());
}
