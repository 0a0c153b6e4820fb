use std::{
    io::Read,
    net::SocketAddr,
    thread::{self, JoinHandle},
};

use anyhow::Result;
use serde_json::{Value, json};
use tiny_http::{Response, Server};

use crate::{CliTest, SAMPLE_CATALOG, stderr, stdout};

/// Fake chat-completions endpoint answering a single request.
///
/// The join handle yields the JSON body the client sent.
fn fake_provider(status: u16, content: Value) -> Result<(SocketAddr, JoinHandle<String>)> {
    let server = Server::http("127.0.0.1:0").map_err(|err| anyhow::anyhow!("{}", err))?;
    let addr = server
        .server_addr()
        .to_ip()
        .ok_or_else(|| anyhow::anyhow!("server has no IP address"))?;

    let handle = thread::spawn(move || {
        let Ok(mut request) = server.recv() else {
            return String::new();
        };
        let mut body = String::new();
        let _ = request.as_reader().read_to_string(&mut body);
        let reply = json!({
            "choices": [{ "message": { "role": "assistant", "content": content.to_string() } }]
        });
        let _ = request.respond(Response::from_string(reply.to_string()).with_status_code(status));
        body
    });

    Ok((addr, handle))
}

fn setup(test: &CliTest, addr: Option<SocketAddr>) -> Result<()> {
    let base = addr
        .map(|addr| format!("http://{}/v1", addr))
        .unwrap_or_else(|| "http://127.0.0.1:9/v1".to_string());
    test.write_file(
        ".xcsyncrc.json",
        &format!(
            r#"{{
                "catalogPath": "Localizable.xcstrings",
                "targetLanguages": ["es", "fr"],
                "apiBaseUrl": "{}",
                "apiKeyEnv": "TEST_TRANSLATE_KEY",
                "timeoutSecs": 10
            }}"#,
            base
        ),
    )?;
    test.write_file("Localizable.xcstrings", SAMPLE_CATALOG)
}

#[test]
fn test_sync_translates_and_rewrites_catalog() -> Result<()> {
    let test = CliTest::new()?;
    let (addr, handle) = fake_provider(
        200,
        json!({
            "translations": [
                { "key": "hi", "translations": { "es": "Hola", "fr": "Salut" } },
                { "key": "bye", "translations": { "fr": "Au revoir" } }
            ]
        }),
    )?;
    setup(&test, Some(addr))?;

    let output = test
        .sync_command()
        .args(["--summary", "summary.md"])
        .env("TEST_TRANSLATE_KEY", "secret")
        .output()?;
    let request_body = handle.join().map_err(|_| anyhow::anyhow!("provider thread panicked"))?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("added hi (es)"));
    assert!(out.contains("added bye (fr)"));
    assert!(out.contains("removed old"));
    assert!(out.contains("Update translations: 3 added, 1 removed"));

    let expected = r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "hi" : {
      "localizations" : {
        "es" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "Hola"
          }
        },
        "fr" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "Salut"
          }
        }
      }
    },
    "bye" : {
      "localizations" : {
        "es" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "Adiós"
          }
        },
        "fr" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "Au revoir"
          }
        }
      }
    },
    "build.id" : {
      "shouldTranslate" : false
    }
  },
  "version" : "1.0"
}"#;
    assert_eq!(test.read_file("Localizable.xcstrings")?, expected);

    let summary = test.read_file("summary.md")?;
    assert!(summary.starts_with("## Update translations: 3 added, 1 removed"));
    assert!(summary.contains("- `hi (fr)`"));

    // one batch carrying only the keys that need work
    let sent: Value = serde_json::from_str(&request_body)?;
    let payload: Value = serde_json::from_str(
        sent["messages"][1]["content"]
            .as_str()
            .unwrap_or_default(),
    )?;
    let keys: Vec<&str> = payload["requests"]
        .as_array()
        .map(|requests| requests.iter().filter_map(|r| r["key"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["hi", "bye"]);
    assert_eq!(payload["sourceLanguage"], "en");
    Ok(())
}

#[test]
fn test_sync_partial_response_exits_one() -> Result<()> {
    let test = CliTest::new()?;
    let (addr, handle) = fake_provider(
        200,
        json!({
            "translations": [
                { "key": "hi", "translations": { "es": "Hola", "fr": "Salut", "de": "Hallo" } },
                { "key": "ghost", "translations": { "es": "Fantasma" } }
            ]
        }),
    )?;
    setup(&test, Some(addr))?;

    let output = test
        .sync_command()
        .env("TEST_TRANSLATE_KEY", "secret")
        .output()?;
    let _ = handle.join();

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("missing bye (fr)"));
    assert!(out.contains("warning: 1 translation(s) were not returned"));

    let content = test.read_file("Localizable.xcstrings")?;
    assert!(content.contains("\"value\" : \"Salut\""));
    assert!(!content.contains("Hallo"));
    assert!(!content.contains("ghost"));
    Ok(())
}

#[test]
fn test_sync_provider_error_leaves_catalog_untouched() -> Result<()> {
    let test = CliTest::new()?;
    let (addr, handle) = fake_provider(500, json!({ "error": "boom" }))?;
    setup(&test, Some(addr))?;

    let output = test
        .sync_command()
        .args(["--summary", "summary.md"])
        .env("TEST_TRANSLATE_KEY", "secret")
        .output()?;
    let _ = handle.join();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Translation provider request failed"));
    assert_eq!(test.read_file("Localizable.xcstrings")?, SAMPLE_CATALOG);
    assert!(!test.root().join("summary.md").exists());
    Ok(())
}

#[test]
fn test_sync_requires_api_key() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, None)?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Environment variable TEST_TRANSLATE_KEY is not set"));
    assert_eq!(test.read_file("Localizable.xcstrings")?, SAMPLE_CATALOG);
    Ok(())
}

#[test]
fn test_sync_up_to_date_does_not_call_provider() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, None)?;
    let catalog = r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "ok" : {
      "localizations" : {
        "es" : { "stringUnit" : { "state" : "translated", "value" : "vale" } },
        "fr" : { "stringUnit" : { "state" : "translated", "value" : "d'accord" } }
      }
    }
  }
}"#;
    test.write_file("Localizable.xcstrings", catalog)?;

    let output = test
        .sync_command()
        .env("TEST_TRANSLATE_KEY", "secret")
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Localizable.xcstrings is up to date"));
    // untouched byte-for-byte, even though it is not in canonical layout
    assert_eq!(test.read_file("Localizable.xcstrings")?, catalog);
    Ok(())
}
