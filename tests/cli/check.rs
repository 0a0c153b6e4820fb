use anyhow::Result;

use crate::{CliTest, SAMPLE_CATALOG, stderr, stdout};

fn setup_config(test: &CliTest, languages: &str) -> Result<()> {
    test.write_file(
        ".xcsyncrc.json",
        &format!(
            r#"{{
                "catalogPath": "App/Localizable.xcstrings",
                "targetLanguages": {}
            }}"#,
            languages
        ),
    )
}

#[test]
fn test_check_reports_missing_and_stale() -> Result<()> {
    let test = CliTest::with_file("App/Localizable.xcstrings", SAMPLE_CATALOG)?;
    setup_config(&test, r#"["es", "fr"]"#)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("stale old"));
    assert!(out.contains("missing hi (es)"));
    assert!(out.contains("missing hi (fr)"));
    assert!(out.contains("missing bye (fr)"));
    assert!(!out.contains("bye (es)"));
    assert!(!out.contains("build.id"));
    assert!(out.contains("3 translation(s) missing, 1 stale key(s)"));

    // check never writes
    assert_eq!(test.read_file("App/Localizable.xcstrings")?, SAMPLE_CATALOG);
    Ok(())
}

#[test]
fn test_check_up_to_date_exits_zero() -> Result<()> {
    let test = CliTest::with_file(
        "App/Localizable.xcstrings",
        r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "bye" : {
      "localizations" : {
        "es" : { "stringUnit" : { "state" : "translated", "value" : "Adiós" } }
      }
    }
  }
}"#,
    )?;
    setup_config(&test, r#"["es"]"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("App/Localizable.xcstrings is up to date (es)"));
    Ok(())
}

#[test]
fn test_check_cli_overrides_config() -> Result<()> {
    let test = CliTest::with_file("Other.xcstrings", SAMPLE_CATALOG)?;
    setup_config(&test, r#"["de"]"#)?;

    let output = test
        .check_command()
        .args(["--catalog", "Other.xcstrings", "--languages", "fr"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("missing hi (fr)"));
    assert!(!out.contains("(de)"));
    Ok(())
}

#[test]
fn test_check_missing_catalog_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#"["es"]"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("catalog not found: App/Localizable.xcstrings"));
    Ok(())
}

#[test]
fn test_check_malformed_catalog_is_an_error() -> Result<()> {
    let test = CliTest::with_file("App/Localizable.xcstrings", "{ \"strings\": ")?;
    setup_config(&test, r#"["es"]"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse catalog"));
    Ok(())
}

#[test]
fn test_check_without_languages_is_an_error() -> Result<()> {
    let test = CliTest::with_file("Localizable.xcstrings", SAMPLE_CATALOG)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No target languages configured"));
    Ok(())
}

#[test]
fn test_check_duplicate_languages_in_config_fail() -> Result<()> {
    let test = CliTest::with_file("App/Localizable.xcstrings", SAMPLE_CATALOG)?;
    setup_config(&test, r#"["es", "es"]"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Duplicate language"));
    Ok(())
}
