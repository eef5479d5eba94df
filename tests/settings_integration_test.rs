//! Settings integration tests
//!
//! These tests load settings files from disk and check that the resulting
//! client carries the configured binary and theme into its invocations.

use gum::config::{EnvironmentLoader, SettingsLoader, GUM_BINARY_VAR, GUM_SETTINGS_VAR};
use gum::schema::{Color, Flatten};
use tempfile::TempDir;

#[test]
fn test_settings_file_and_environment_override() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("gum.toml");
    std::fs::write(
        &settings_path,
        r#"
binary = "gum-from-file"

[theme.choose]
selected_prefix = "✓ "

[theme.choose.item_style]
foreground = 250
"#,
    )
    .unwrap();

    let loader = SettingsLoader::new(Some(&settings_path)).unwrap();
    assert_eq!(loader.settings.binary, "gum-from-file");
    let flags = loader.settings.theme.choose.flatten();
    assert_eq!(flags.get("--selected-prefix"), Some("✓ "));
    assert_eq!(flags.get("--item-foreground"), Some("250"));

    std::env::set_var(GUM_SETTINGS_VAR, &settings_path);
    std::env::set_var(GUM_BINARY_VAR, "/opt/gum");
    let loader = SettingsLoader::from_environment(&EnvironmentLoader::default()).unwrap();
    std::env::remove_var(GUM_SETTINGS_VAR);
    std::env::remove_var(GUM_BINARY_VAR);

    assert_eq!(loader.settings_path, settings_path);
    assert_eq!(loader.settings.binary, "/opt/gum");
    assert_eq!(
        loader.settings.theme.choose.item_style.foreground,
        Some(Color::Ansi(250))
    );

    let gum = loader.build();
    assert_eq!(gum.binary(), "/opt/gum");
    assert_eq!(gum.command("choose").to_args(), ["/opt/gum", "choose"]);
}

#[test]
fn test_malformed_settings_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("broken.toml");
    std::fs::write(&settings_path, "binary = [").unwrap();

    let err = SettingsLoader::new(Some(&settings_path)).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}
