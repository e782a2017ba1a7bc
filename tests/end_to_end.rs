#![allow(clippy::unwrap_used)]
//! Runs the binary against a mocked chat-completions endpoint.

use assert_cmd::Command;
use httpmock::Method::POST;
use httpmock::MockServer;
use httpmock::prelude::HttpMockRequest;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

const COMPLETIONS: &str = "/v1/chat/completions";

fn completion(content: &str) -> Value {
    json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
}

fn config_home(endpoint: &str, extra: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("lingo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        format!(
            "[lingo]\nprovider = \"stub\"\nmodel = \"stub-model\"\n\n\
             [providers.stub]\nendpoint = \"{endpoint}\"\n\n{extra}"
        ),
    )
    .unwrap();
    home
}

#[allow(deprecated)]
fn lingo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lingo").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .env("NO_PROXY", "127.0.0.1")
        .env("no_proxy", "127.0.0.1")
        .current_dir(home.path())
        .arg("--no-color");
    cmd
}

fn has_no_temperature(req: &HttpMockRequest) -> bool {
    req.body
        .as_ref()
        .is_some_and(|b| !String::from_utf8_lossy(b).contains("temperature"))
}

#[test]
fn test_list_prints_parsed_items() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("\"model\":\"stub-model\"")
            .body_contains("\"content\":\"colors\"")
            .matches(has_no_temperature);
        then.status(200)
            .json_body(completion("red, green, blue, yellow, purple"));
    });
    let home = config_home(&server.base_url(), "");

    lingo(&home)
        .args(["list", "colors"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Comma-separated list: ['red', 'green', 'blue', 'yellow', 'purple']",
        ));

    mock.assert();
}

#[test]
fn test_translate_single_key_at_zero_temperature() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("\"temperature\":0.0")
            .body_contains("translates English to Spanish.")
            .body_contains("\"content\":\"Hello\"");
        then.status(200).json_body(completion("Hola"));
    });
    let home = config_home(
        &server.base_url(),
        "[translate]\ninput_language = \"English\"\ntext = \"Hello\"\n\n\
         [[translate.languages]]\nkey = \"S\"\nname = \"Spanish\"\n",
    );

    lingo(&home)
        .args(["translate", "--key", "S"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original (English): Hello"))
        .stdout(predicate::str::contains("Translation (Spanish): Hola"));

    mock.assert();
}

#[test]
fn test_unknown_key_fails_without_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(COMPLETIONS);
        then.status(200).json_body(completion("unused"));
    });
    let home = config_home(&server.base_url(), "");

    lingo(&home)
        .args(["translate", "--key", "Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language key 'Q'"));

    mock.assert_hits(0);
}

#[test]
fn test_loop_with_explicit_language() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("\"role\":\"system\"")
            .body_contains("Generate a loop in Python that prints the text 'Hi' 2 times");
        then.status(200)
            .json_body(completion("for i in range(2):\n    print('Hi')"));
    });
    let home = config_home(&server.base_url(), "");

    lingo(&home)
        .args(["loop", "--text", "Hi", "--times", "2", "--language", "Python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loop code (Python):"))
        .stdout(predicate::str::contains("print('Hi')"));

    mock.assert();
}

#[test]
fn test_loop_menu_reads_choice_from_stdin() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("Generate a loop in Ruby");
        then.status(200).json_body(completion("puts 'Hi'"));
    });
    let home = config_home(&server.base_url(), "");

    lingo(&home)
        .args(["loop", "--text", "Hi", "--times", "1"])
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loop code (Ruby):"));

    mock.assert();
}

#[test]
fn test_demo_replays_script_output() {
    let server = MockServer::start();
    let general = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("colorful socks")
            .body_contains("\"model\":\"stub-model\"");
        then.status(200).json_body(completion("Sock It"));
    });
    let translation_model = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("colorful socks")
            .body_contains("\"model\":\"translate-model\"");
        then.status(200).json_body(completion("Toe Co"));
    });
    let translation = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("translates English to Spanish.");
        then.status(200).json_body(completion("Hola"));
    });
    let list = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS)
            .body_contains("generate 5 objects");
        then.status(200).json_body(completion("red, green, blue"));
    });
    let home = config_home(
        &server.base_url(),
        "[translate]\nmodel = \"translate-model\"\n\n\
         [[translate.languages]]\nkey = \"S\"\nname = \"Spanish\"\n",
    );

    lingo(&home)
        .args(["demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello there, Doctor Ew"))
        .stdout(predicate::str::contains("Prediction: Sock It vs Toe Co"))
        .stdout(predicate::str::contains(
            "Original (English): What would be a good company name for a company that makes colorful socks?",
        ))
        .stdout(predicate::str::contains("Translation (Spanish): Hola"))
        .stdout(predicate::str::contains(
            "Comma-separated list: ['red', 'green', 'blue']",
        ));

    general.assert();
    translation_model.assert();
    translation.assert();
    list.assert();
}

#[test]
fn test_http_error_is_reported() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(COMPLETIONS);
        then.status(401).json_body(json!({"error": "bad key"}));
    });
    let home = config_home(&server.base_url(), "");

    lingo(&home)
        .args(["predict", "Anyone there?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("401"));

    mock.assert();
}
