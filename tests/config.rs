#![cfg(feature = "server")]

use std::io::Write;

use cozy_journal::models::config::ServerConfig;
use tempfile::NamedTempFile;

fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn loads_yaml_and_fills_defaults() {
    let file = yaml_file("content_api_url: https://cms.example.com/api\nport: 9000\n");

    let config = ServerConfig::load(file.path().to_str().unwrap()).expect("config should load");

    assert_eq!(config.content_api_url, "https://cms.example.com/api");
    assert_eq!(config.port, 9000);
    assert_eq!(config.address, "127.0.0.1");
    assert_eq!(config.items_per_page, 9);
    assert_eq!(config.request_timeout().as_secs(), 10);
}

#[test]
fn rejects_invalid_api_url() {
    let file = yaml_file("content_api_url: definitely not a url\n");

    assert!(ServerConfig::load(file.path().to_str().unwrap()).is_err());
}
