use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .xcsyncrc.json"));

    let content = test.read_file(".xcsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["catalogPath"], "Localizable.xcstrings");
    assert!(parsed["targetLanguages"].is_array());
    assert_eq!(parsed["apiKeyEnv"], "OPENAI_API_KEY");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".xcsyncrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".xcsyncrc.json already exists"));
    assert_eq!(test.read_file(".xcsyncrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file(
        "Localizable.xcstrings",
        r#"{ "sourceLanguage": "en", "strings": {} }"#,
    )?;

    let output = test.check_command().args(["--languages", "es"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join(".xcsyncrc.json").exists());
    Ok(())
}
