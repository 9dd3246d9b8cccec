#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let prefix = text
            .trim()
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_string();

        let cmd = SlashCommand { command: prefix };
        if cmd.is_quit() || cmd.is_modify() || cmd.is_execute() || cmd.is_help() {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_modify(&self) -> bool {
        return ["/mod", "/modify"].contains(&self.command.as_str());
    }

    // "/next" is the same action re-labeled once the outline stage has been
    // executed, it intentionally repeats the identical prompt.
    pub fn is_execute(&self) -> bool {
        return ["/exec", "/execute", "/n", "/next"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
