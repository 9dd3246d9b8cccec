#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::suggestions;
use super::BubbleList;
use super::RenderContext;
use super::Scroll;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ConvertPayload;
use crate::domain::models::ConvertRequest;
use crate::domain::models::MediaKind;
use crate::domain::models::Message;
use crate::domain::models::MessageContent;
use crate::domain::models::MessageType;
use crate::domain::models::Outline;
use crate::domain::models::RequestKind;
use crate::domain::models::SlashCommand;
use crate::domain::models::Transport;
use crate::infrastructure::gateway::GatewayManager;

pub const GREETING: &str = "Hey there! Paste your research summary and I'll suggest storytelling, metaphor, and analogy framings for it. Type /help for commands.";
pub const ORDER_PROMPT: &str = "Enter the step order you want (for example: 1 3 2):";
pub const MODIFY_HINT: &str = "Drag a step box with the mouse to reorder the outline, or type the new order like \"1 3 2\".";
pub const DROPZONE_PROMPT: &str = "Drop an audio or video file here to audition your delivery.";

// Both trigger phrases open the reorder dialogue, matched as substrings,
// case-insensitively.
const REORDER_TRIGGER_ZH: &str = "调整步骤";
const REORDER_TRIGGER_EN: &str = "reorder steps";

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /modify (/mod) - Shows how to reorder the outline steps.
- /execute (/exec) - Moves on to the rehearsal stage and asks for a media file. Once executed, /next repeats the prompt.
- /quit /exit (/q) - Exit Podium.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Tab - Switch between the draft pane and the chat prompt.
- Mouse wheel - Scroll the chat history.
- PageUp/PageDown, CTRL+U/CTRL+D - Page up / page down.
- CTRL+T - Play or pause the most recent media file.
- CTRL+LEFT / CTRL+RIGHT - Seek backwards / forwards.
- CTRL+S - Save a copy of the active media file to your download directory.
- CTRL+C - Exit.

REORDERING:
Ask to "reorder steps" and reply with three numbers like "1 3 2", or drag a
step box directly with the mouse. The coach is told about the new order
either way.
        "#;

    return text.trim().to_string();
}

pub enum SubmitOutcome {
    Continue,
    Quit,
}

/// The media entry currently wired to the transport. Re-created whenever a
/// new file is dropped, never persisted.
pub struct ActiveMedia {
    pub index: usize,
    pub path: PathBuf,
    pub transport: Transport,
}

pub struct AppState<'a> {
    pub bubble_list: BubbleList<'a>,
    pub scroll: Scroll,
    pub messages: Vec<Message>,
    pub outline: Outline,
    pub active_media: Option<ActiveMedia>,
    pub has_given_suggestions: bool,
    pub is_executed: bool,
    pub waiting_for_backend: bool,
    pub last_known_width: u16,
    pub last_known_height: u16,
}

impl<'a> AppState<'a> {
    pub async fn new() -> Result<AppState<'a>> {
        let mut app_state = AppState {
            bubble_list: BubbleList::new(),
            scroll: Scroll::default(),
            messages: vec![Message::new(Author::Podium, GREETING)],
            outline: Outline::default(),
            active_media: None,
            has_given_suggestions: false,
            is_executed: false,
            waiting_for_backend: false,
            last_known_width: 0,
            last_known_height: 0,
        };

        let gateway = GatewayManager::get();
        if let Err(err) = gateway.health_check().await {
            let url = Config::get(ConfigKey::ConvertUrl);
            app_state.messages.push(Message::new_with_type(
                Author::Podium,
                MessageType::Error,
                &format!("Hey, it looks like the convert gateway at {url} isn't reachable. Requests will fail until it's back.\n\nError: {err}"),
            ));
        }

        return Ok(app_state);
    }

    /// The decision procedure for one submitted chat message. Empty input is
    /// a no-op, slash commands act locally, the first substantive message
    /// asks for framing suggestions, and afterwards reorder dialogue is
    /// handled locally while anything else is forwarded verbatim.
    pub fn handle_submit(
        &mut self,
        input: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<SubmitOutcome> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(SubmitOutcome::Continue);
        }

        self.add_message(Message::new(Author::User, input));

        if let Some(command) = SlashCommand::parse(input) {
            if command.is_quit() {
                return Ok(SubmitOutcome::Quit);
            }
            if command.is_modify() {
                self.add_message(Message::new(Author::Podium, MODIFY_HINT));
                return Ok(SubmitOutcome::Continue);
            }
            if command.is_execute() {
                // "/next" after execution re-emits the identical prompt.
                self.is_executed = true;
                self.add_message(Message::with_content(
                    Author::Podium,
                    MessageContent::DropzonePrompt {
                        text: DROPZONE_PROMPT.to_string(),
                    },
                ));
                return Ok(SubmitOutcome::Continue);
            }
            if command.is_help() {
                self.add_message(Message::new(Author::Podium, &help_text()));
                return Ok(SubmitOutcome::Continue);
            }
        }

        if !self.has_given_suggestions {
            self.waiting_for_backend = true;
            self.sync_dependants();
            tx.send(Action::ConvertRequest(ConvertRequest::new(
                RequestKind::Suggestions,
                ConvertPayload::text(&suggestions::first_prompt(input)),
            )))?;
            return Ok(SubmitOutcome::Continue);
        }

        let lowered = input.to_lowercase();
        if lowered.contains(REORDER_TRIGGER_ZH) || lowered.contains(REORDER_TRIGGER_EN) {
            self.add_message(Message::new(Author::Podium, ORDER_PROMPT));
            return Ok(SubmitOutcome::Continue);
        }

        if Outline::is_reorder_command(input) {
            let reply = self.outline.reorder_from_command(input);
            self.add_message(Message::new(Author::Podium, &reply));
            return Ok(SubmitOutcome::Continue);
        }

        self.waiting_for_backend = true;
        self.sync_dependants();
        tx.send(Action::ConvertRequest(ConvertRequest::new(
            RequestKind::Freeform,
            ConvertPayload::text(input),
        )))?;

        return Ok(SubmitOutcome::Continue);
    }

    pub fn handle_convert_response(&mut self, kind: RequestKind, text: &str) {
        self.waiting_for_backend = false;

        match kind {
            RequestKind::Suggestions => {
                let extracted = suggestions::extract(text);
                if extracted.is_empty() {
                    // Extraction never hard-fails the turn, show the reply
                    // verbatim instead.
                    self.add_message(Message::new(Author::Model, text));
                } else {
                    for content in extracted {
                        self.add_message(Message::with_content(Author::Model, content));
                    }
                }
                self.has_given_suggestions = true;
            }
            RequestKind::ReorderNotice => {
                if text.trim().is_empty() {
                    self.sync_dependants();
                } else {
                    self.add_message(Message::new(Author::Model, text));
                }
            }
            RequestKind::Freeform => {
                self.add_message(Message::new(Author::Model, text));
            }
        }
    }

    /// Failures are terminal for the one request that caused them. A failed
    /// suggestion exchange leaves the gate open so the user can retry.
    pub fn handle_convert_error(&mut self, kind: RequestKind, err: &str) {
        self.waiting_for_backend = false;

        let text = match kind {
            RequestKind::ReorderNotice => format!("Error updating step order: {err}"),
            _ => format!("Error: {err}"),
        };
        self.add_message(Message::new_with_type(
            Author::Podium,
            MessageType::Error,
            &text,
        ));
    }

    /// Appends one media entry per dropped file with an audio/video declared
    /// type. Anything else is dropped silently, with no feedback message.
    pub fn handle_file_drop(&mut self, paths: &[PathBuf]) -> Vec<usize> {
        let mut appended = vec![];

        for path in paths {
            let kind = match MediaKind::detect(path) {
                Some(kind) => kind,
                None => continue,
            };
            self.add_message(Message::with_content(
                Author::Model,
                MessageContent::media_file(kind, path),
            ));
            appended.push(self.messages.len() - 1);
        }

        return appended;
    }

    pub fn set_active_media(&mut self, index: usize, duration: f64) {
        let path = match self.messages.get(index).map(|m| return &m.content) {
            Some(MessageContent::MediaFile { path, .. }) => path.clone(),
            _ => return,
        };

        self.active_media = Some(ActiveMedia {
            index,
            path,
            transport: Transport::with_duration(duration),
        });
        self.sync_dependants();
    }

    pub fn handle_mouse_down(&mut self, line: usize) {
        if let Some(step_id) = self.bubble_list.step_at_line(line) {
            self.outline.drag_start(step_id);
            self.sync_dependants();
        }
    }

    pub fn handle_mouse_drag(&mut self, line: f32) {
        if self.outline.dragged().is_none() {
            return;
        }

        let boxes = self.bubble_list.step_boxes().to_vec();
        self.outline.drag_over(line, &boxes);
        self.sync_dependants();
    }

    /// Finishing a drag notifies the gateway of the new order,
    /// fire-and-forget relative to the rest of the chat.
    pub fn handle_mouse_up(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if !self.outline.drag_end() {
            return Ok(());
        }

        self.waiting_for_backend = true;
        tx.send(Action::ConvertRequest(ConvertRequest::new(
            RequestKind::ReorderNotice,
            ConvertPayload::steps_reordered(self.outline.steps()),
        )))?;
        self.sync_dependants();

        return Ok(());
    }

    pub fn set_media_playing(&mut self, playing: bool) {
        if let Some(active) = self.active_media.as_mut() {
            active.transport.playing = playing;
        }
        self.sync_dependants();
    }

    /// Moves the transport by a fraction of the file duration, translated to
    /// absolute seconds and clamped to the file bounds. Returns what the
    /// caller needs to restart the external player at the new position.
    pub fn seek_media(&mut self, fraction: f64) -> Option<(PathBuf, f64, bool)> {
        let state = match self.active_media.as_mut() {
            Some(active) => {
                let delta = active.transport.duration.max(0.0) * fraction;
                active.transport.elapsed = (active.transport.elapsed + delta)
                    .clamp(0.0, active.transport.duration.max(0.0));
                (
                    active.path.clone(),
                    active.transport.elapsed,
                    active.transport.playing,
                )
            }
            None => return None,
        };

        self.sync_dependants();
        return Some(state);
    }

    pub fn tick_media(&mut self, delta_seconds: f64) {
        let ticked = match self.active_media.as_mut() {
            Some(active) if active.transport.playing => {
                active.transport.tick(delta_seconds);
                true
            }
            _ => false,
        };

        if ticked {
            self.sync_dependants();
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        let context = RenderContext {
            dragged_step: self.outline.dragged(),
            is_executed: self.is_executed,
            active_media: self
                .active_media
                .as_ref()
                .map(|active| return (active.index, active.transport)),
        };

        self.bubble_list
            .set_messages(&self.messages, self.last_known_width as usize, context);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}
