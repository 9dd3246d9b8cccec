use anyhow::Result;

use super::ConvertPayload;
use super::Step;

#[test]
fn it_serializes_text_payload_without_steps() -> Result<()> {
    let payload = ConvertPayload::text("hello");
    let json = serde_json::to_string(&payload)?;
    assert_eq!(json, r#"{"text":"hello"}"#);
    return Ok(());
}

#[test]
fn it_serializes_steps_reordered_payload() -> Result<()> {
    let steps = vec![
        Step::new(2, "Exploration", "explain"),
        Step::new(1, "Hook", "open"),
        Step::new(3, "Resolution", "close"),
    ];

    let payload = ConvertPayload::steps_reordered(&steps);
    let json = serde_json::to_value(&payload)?;

    assert_eq!(json["text"], "steps_reordered");
    assert_eq!(json["steps"][0]["position"], 1);
    assert_eq!(json["steps"][0]["name"], "Exploration");
    assert_eq!(json["steps"][1]["position"], 2);
    assert_eq!(json["steps"][1]["name"], "Hook");
    assert_eq!(json["steps"][2]["position"], 3);
    assert_eq!(json["steps"][2]["description"], "close");
    return Ok(());
}
