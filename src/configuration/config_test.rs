use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>().unwrap();

    assert!(doc.get("convert-url").is_some());
    assert!(doc.get("download-dir").is_some());
    assert!(doc.get("gateway-health-check-timeout").is_some());
    assert!(doc.get("player").is_some());
    assert!(doc.get("config-file").is_none());
}

#[test]
fn it_defaults_the_convert_url() {
    assert_eq!(
        Config::default(ConfigKey::ConvertUrl),
        "http://localhost:5000"
    );
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["podium", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["podium", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
