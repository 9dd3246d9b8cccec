use anyhow::Result;

use super::NoopPlayer;
use crate::domain::models::Player;
use crate::domain::models::PlayerName;

#[test]
fn it_reports_its_name() {
    assert_eq!(NoopPlayer::default().name(), PlayerName::None);
}

#[tokio::test]
async fn it_successfully_health_checks() -> Result<()> {
    NoopPlayer::default().health_check().await?;
    return Ok(());
}

#[tokio::test]
async fn it_probes_an_unknown_duration() -> Result<()> {
    let res = NoopPlayer::default()
        .probe_duration("/tmp/talk.mp3".as_ref())
        .await?;
    assert_eq!(res, 0.0);
    return Ok(());
}

#[tokio::test]
async fn it_returns_an_error_playing_media() -> Result<()> {
    let err = NoopPlayer::default()
        .play("/tmp/talk.mp3".as_ref(), 0.0)
        .await
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"The 'none' player cannot play media. Configure a real player such as 'ffplay' to audition files");
    return Ok(());
}
