use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_quit() {
    let cmd = SlashCommand::parse("/modify").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_modify() {
    let cmd = SlashCommand::parse("/mod").unwrap();
    assert!(cmd.is_modify());
}
#[test]
fn it_is_modify() {
    let cmd = SlashCommand::parse("/modify").unwrap();
    assert!(cmd.is_modify());
}
#[test]
fn it_is_not_modify() {
    let cmd = SlashCommand::parse("/execute").unwrap();
    assert!(!cmd.is_modify());
}

#[test]
fn it_is_short_execute() {
    let cmd = SlashCommand::parse("/exec").unwrap();
    assert!(cmd.is_execute());
}
#[test]
fn it_is_execute() {
    let cmd = SlashCommand::parse("/execute").unwrap();
    assert!(cmd.is_execute());
}
#[test]
fn it_is_next() {
    let cmd = SlashCommand::parse("/next").unwrap();
    assert!(cmd.is_execute());
}
#[test]
fn it_is_short_next() {
    let cmd = SlashCommand::parse("/n").unwrap();
    assert!(cmd.is_execute());
}
#[test]
fn it_is_not_execute() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(!cmd.is_execute());
}

#[test]
fn it_is_short_help() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_not_help() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(!cmd.is_help());
}
