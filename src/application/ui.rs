use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::Message;
use crate::domain::models::MessageContent;
use crate::domain::models::MessageType;
use crate::domain::models::PlayerBox;
use crate::domain::models::PlayerName;
use crate::domain::models::TextArea;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;
use crate::domain::services::Scroll;
use crate::domain::services::SubmitOutcome;
use crate::infrastructure::players::PlayerManager;

// One UITick, in seconds.
const TICK_SECONDS: f64 = 0.5;
// One seek step, as a fraction of the file duration.
const SEEK_FRACTION: f64 = 0.05;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Draft,
    Prompt,
}

/// Maps a terminal cell to an absolute bubble-list line, when it falls inside
/// the chat pane.
fn chat_line(rect: Rect, scroll: &Scroll, column: u16, row: u16) -> Option<usize> {
    if column < rect.x || column >= rect.x + rect.width {
        return None;
    }
    if row < rect.y || row >= rect.y + rect.height {
        return None;
    }

    return Some(scroll.position as usize + (row - rect.y) as usize);
}

/// A bracketed paste that consists solely of existing file paths is treated
/// as a file drop. Anything else is returned untouched for the focused text
/// area.
fn paste_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = vec![];

    for line in text.lines() {
        let cleaned = line
            .trim()
            .trim_matches('\'')
            .trim_matches('"')
            .replace("\\ ", " ");
        if cleaned.is_empty() {
            continue;
        }

        let path = PathBuf::from(&cleaned);
        if !path.is_file() {
            return vec![];
        }
        paths.push(path);
    }

    return paths;
}

async fn handle_file_drop(
    app_state: &mut AppState<'_>,
    player: &mut PlayerBox,
    paths: &[PathBuf],
) -> Result<()> {
    let appended = app_state.handle_file_drop(paths);
    let last = match appended.last() {
        Some(last) => *last,
        None => return Ok(()),
    };

    // The newest drop takes over the transport.
    player.stop().await?;
    let path = match &app_state.messages[last].content {
        MessageContent::MediaFile { path, .. } => path.clone(),
        _ => return Ok(()),
    };
    let duration = player.probe_duration(&path).await.unwrap_or(0.0);
    app_state.set_active_media(last, duration);

    return Ok(());
}

async fn toggle_playback(app_state: &mut AppState<'_>, player: &mut PlayerBox) -> Result<()> {
    let state = app_state.active_media.as_ref().map(|active| {
        return (
            active.transport.playing,
            active.transport.elapsed,
            active.path.clone(),
        );
    });

    match state {
        Some((true, _, _)) => {
            player.stop().await?;
            app_state.set_media_playing(false);
        }
        Some((false, elapsed, path)) => {
            if let Err(err) = player.play(&path, elapsed).await {
                app_state.add_message(Message::new_with_type(
                    Author::Podium,
                    MessageType::Error,
                    &format!("Playback failed: {err}"),
                ));
                return Ok(());
            }
            app_state.set_media_playing(true);
        }
        None => {}
    }

    return Ok(());
}

async fn seek(app_state: &mut AppState<'_>, player: &mut PlayerBox, fraction: f64) -> Result<()> {
    if let Some((path, elapsed, playing)) = app_state.seek_media(fraction) {
        if playing {
            player.play(&path, elapsed).await?;
        }
    }

    return Ok(());
}

async fn start_loop(
    app_state: &mut AppState<'_>,
    player: &mut PlayerBox,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut draft = TextArea::draft();
    let mut prompt = TextArea::prompt();
    let loading = Loading::default();
    let mut focus = Focus::Prompt;
    let mut chat_rect = Rect::default();

    #[cfg(feature = "dev")]
    {
        for char in "We trained a model that predicts grid failures from weather data.".chars() {
            draft.input(tui_textarea::Input {
                key: tui_textarea::Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(frame.size());

            let chat_column = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(columns[1]);

            frame.render_widget(draft.widget(), columns[0]);

            chat_rect = chat_column[0];
            if chat_rect.width != app_state.last_known_width
                || chat_rect.height != app_state.last_known_height
            {
                app_state.set_rect(chat_rect);
            }

            app_state
                .bubble_list
                .render(frame, chat_rect, app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                chat_rect.inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.waiting_for_backend {
                loading.render(frame, chat_column[1]);
            } else {
                frame.render_widget(prompt.widget(), chat_column[1]);
            }
        })?;

        match events.next().await? {
            Event::AppMessage(message) => {
                app_state.add_message(message);
            }
            Event::ConvertResponse(kind, text) => {
                app_state.handle_convert_response(kind, &text);
            }
            Event::ConvertError(kind, err) => {
                app_state.handle_convert_error(kind, &err);
            }
            Event::KeyboardCharInput(input) => match focus {
                Focus::Draft => {
                    draft.input(input);
                }
                Focus::Prompt => {
                    prompt.input(input);
                }
            },
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => match focus {
                Focus::Draft => {
                    draft.insert_newline();
                }
                Focus::Prompt => {
                    let input_str = prompt.lines().join("\n");
                    prompt = TextArea::prompt();

                    if let SubmitOutcome::Quit = app_state.handle_submit(&input_str, &tx)? {
                        break;
                    }
                }
            },
            Event::KeyboardPaste(text) => {
                let paths = paste_paths(&text);
                if paths.is_empty() {
                    match focus {
                        Focus::Draft => {
                            draft.insert_str(&text.replace('\r', "\n"));
                        }
                        Focus::Prompt => {
                            prompt.insert_str(&text.replace('\r', "\n"));
                        }
                    }
                } else {
                    handle_file_drop(app_state, player, &paths).await?;
                }
            }
            Event::KeyboardTab() => {
                focus = match focus {
                    Focus::Draft => Focus::Prompt,
                    Focus::Prompt => Focus::Draft,
                };
            }
            Event::MediaTogglePlay() => {
                toggle_playback(app_state, player).await?;
            }
            Event::MediaSave() => {
                if let Some(active) = app_state.active_media.as_ref() {
                    tx.send(Action::SaveMedia(active.path.clone()))?;
                }
            }
            Event::MediaSeekBack() => {
                seek(app_state, player, -SEEK_FRACTION).await?;
            }
            Event::MediaSeekForward() => {
                seek(app_state, player, SEEK_FRACTION).await?;
            }
            Event::MouseDown(column, row) => {
                if let Some(line) = chat_line(chat_rect, &app_state.scroll, column, row) {
                    app_state.handle_mouse_down(line);
                }
            }
            Event::MouseDrag(column, row) => {
                if let Some(line) = chat_line(chat_rect, &app_state.scroll, column, row) {
                    app_state.handle_mouse_drag(line as f32);
                }
            }
            Event::MouseUp(_, _) => {
                app_state.handle_mouse_up(&tx)?;
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                app_state.tick_media(TICK_SECONDS);
            }
        }
    }

    player.stop().await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new().await?;

    let player_name =
        PlayerName::parse(Config::get(ConfigKey::Player)).unwrap_or(PlayerName::None);
    let mut player = PlayerManager::get(player_name)?;
    if let Err(err) = player.health_check().await {
        app_state.add_message(Message::new_with_type(
            Author::Podium,
            MessageType::Error,
            &format!(
                "The '{}' player isn't available, so dropped files can't be auditioned.\n\nError: {err}",
                player.name()
            ),
        ));
    }

    let mut events = EventsService::new(event_rx);
    start_loop(&mut app_state, &mut player, tx, &mut events).await?;

    return Ok(());
}
