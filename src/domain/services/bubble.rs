#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageContent;
use crate::domain::models::MessageType;
use crate::domain::models::StepBox;
use crate::domain::models::Transport;

const PROGRESS_BAR_WIDTH: usize = 24;
const MEDIA_KEYS_HINT: &str = "ctrl+t play/pause · ctrl+left/right seek · ctrl+s save";

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

/// Per-message slice of UI state the renderer needs: whether a step box is
/// being dragged, which action label the outline block shows, and the
/// transport for the active media entry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BubbleContext {
    pub dragged_step: Option<u8>,
    pub is_executed: bool,
    pub transport: Option<Transport>,
}

struct RawLine {
    text: String,
    style: Style,
    step_id: Option<u8>,
}

impl RawLine {
    fn plain(text: &str) -> RawLine {
        return RawLine {
            text: text.to_string(),
            style: Style::default(),
            step_id: None,
        };
    }

    fn styled(text: &str, style: Style) -> RawLine {
        return RawLine {
            text: text.to_string(),
            style,
            step_id: None,
        };
    }

    fn step(text: &str, style: Style, step_id: u8) -> RawLine {
        return RawLine {
            text: text.to_string(),
            style,
            step_id: Some(step_id),
        };
    }
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
    context: BubbleContext,
}

fn char_len(text: &str) -> usize {
    return text.chars().count();
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let count = subtractions
        .into_iter()
        .map(|e| {
            return i32::try_from(e).unwrap_or(i32::MAX);
        })
        .reduce(|a, b| {
            return a - b;
        })
        .unwrap_or(0);

    if count <= 0 {
        return "".to_string();
    }

    return [text].repeat(count as usize).join("");
}

/// Word-wraps one logical line to the given width. Blank lines survive as a
/// single space so the bubble keeps its height.
fn wrap_text(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for full_line in text.split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        let mut char_count = 0;
        let mut current_words: Vec<&str> = vec![];

        for word in full_line.split(' ') {
            if char_len(word) + char_count > line_max_width && !current_words.is_empty() {
                lines.push(current_words.join(" ").trim_end().to_string());
                current_words = vec![word];
                char_count = char_len(word) + 1;
            } else {
                current_words.push(word);
                char_count += char_len(word) + 1;
            }
        }
        if !current_words.is_empty() {
            lines.push(current_words.join(" ").trim_end().to_string());
        }
    }

    return lines;
}

pub fn progress_bar(percent: f64, width: usize) -> String {
    if width == 0 {
        return "".to_string();
    }

    let position = ((percent.clamp(0.0, 100.0) / 100.0) * (width - 1) as f64).round() as usize;
    return (0..width)
        .map(|idx| {
            if idx < position {
                return '━';
            }
            if idx == position {
                return '●';
            }
            return '─';
        })
        .collect();
}

impl<'a> Bubble<'_> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
        context: BubbleContext,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
            context,
        };
    }

    /// Renders the bubble. Returns the styled lines plus the screen geometry
    /// of any outline step boxes, with tops relative to the bubble's first
    /// line (the top border).
    pub fn as_lines(&self) -> (Vec<Line<'a>>, Vec<StepBox>) {
        let raw_lines = self.content_lines();
        let max_line_length = self.max_line_length(&raw_lines);

        let mut wrapped: Vec<RawLine> = vec![];
        for raw in raw_lines {
            for piece in wrap_text(&raw.text, max_line_length) {
                wrapped.push(RawLine {
                    text: piece,
                    style: raw.style,
                    step_id: raw.step_id,
                });
            }
        }

        // Step boxes are contiguous runs of lines tagged with the same step
        // id, offset by one for the top border.
        let mut step_boxes: Vec<StepBox> = vec![];
        for (idx, line) in wrapped.iter().enumerate() {
            let step_id = match line.step_id {
                Some(id) => id,
                None => continue,
            };
            match step_boxes.last_mut() {
                Some(last) if last.step_id == step_id && last.top + last.height == idx + 1 => {
                    last.height += 1;
                }
                _ => {
                    step_boxes.push(StepBox {
                        step_id,
                        top: idx + 1,
                        height: 1,
                    });
                }
            }
        }

        let lines = wrapped
            .into_iter()
            .map(|raw| return self.wrap_in_border(raw, max_line_length))
            .collect::<Vec<Line<'a>>>();

        return (self.wrap_lines_in_bubble(lines, max_line_length), step_boxes);
    }

    fn content_lines(&self) -> Vec<RawLine> {
        match &self.message.content {
            MessageContent::Text(text) => {
                return vec![RawLine::plain(text)];
            }
            MessageContent::Suggestion { title, text } => {
                return vec![
                    RawLine::styled(
                        title,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    RawLine::plain(" "),
                    RawLine::plain(text),
                ];
            }
            MessageContent::DropzonePrompt { text } => {
                return vec![RawLine::styled(
                    &format!("◌ {text}"),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )];
            }
            MessageContent::MediaFile {
                kind, file_name, ..
            } => {
                let transport = match self.context.transport {
                    Some(transport) => transport,
                    None => {
                        return vec![RawLine::plain(&format!(
                            "♪ {file_name} ({})",
                            kind.to_string()
                        ))];
                    }
                };

                let control = if transport.playing { "⏸" } else { "▶" };
                let bar = progress_bar(transport.percent(), PROGRESS_BAR_WIDTH);
                return vec![
                    RawLine::styled(
                        &format!("♪ {file_name}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    RawLine::plain(&format!(
                        "{control} {} {bar} {}",
                        transport.format_elapsed(),
                        transport.format_duration()
                    )),
                    RawLine::styled(MEDIA_KEYS_HINT, Style::default().fg(Color::DarkGray)),
                ];
            }
            MessageContent::Outline { text, steps } => {
                let mut lines = vec![RawLine::plain(text), RawLine::plain(" ")];

                for (idx, step) in steps.iter().enumerate() {
                    let mut style = Style::default();
                    if self.context.dragged_step == Some(step.id) {
                        style = style.fg(Color::Yellow);
                    }

                    lines.push(RawLine::styled(
                        &format!("Step {}", idx + 1),
                        Style::default().fg(Color::DarkGray),
                    ));
                    lines.push(RawLine::step(
                        &step.name,
                        style.add_modifier(Modifier::BOLD),
                        step.id,
                    ));
                    lines.push(RawLine::step(&step.description, style, step.id));
                    lines.push(RawLine::plain(" "));
                }

                let action = if self.context.is_executed {
                    "[/modify]  [/next]"
                } else {
                    "[/modify]  [/execute]"
                };
                lines.push(RawLine::styled(action, Style::default().fg(Color::Green)));

                return lines;
            }
        }
    }

    fn max_line_length(&self, raw_lines: &[RawLine]) -> usize {
        // Left border + left padding + right padding + right border +
        // scrollbar.
        let border_elements_length = 5;
        // Minimum 4% outer padding.
        let min_outer_padding = ((self.window_max_width as f32 * 0.04).ceil()) as usize;
        let line_border_width = border_elements_length + min_outer_padding;

        let mut max_line_length = raw_lines
            .iter()
            .flat_map(|raw| {
                return raw.text.split('\n').map(char_len);
            })
            .max()
            .unwrap_or(1);

        if max_line_length > (self.window_max_width - line_border_width) {
            max_line_length = self.window_max_width - line_border_width;
        }

        let username = self.message.author.to_string();
        if max_line_length < char_len(&username) {
            max_line_length = char_len(&username);
        }

        return max_line_length;
    }

    fn wrap_in_border(&self, raw: RawLine, max_line_length: usize) -> Line<'a> {
        let fill = repeat_from_subtractions(" ", vec![max_line_length, char_len(&raw.text)]);
        // Unicode border characters plus inner padding.
        let bubble_padding = 8;
        let formatted_line_length = char_len(&raw.text) + char_len(&fill) + bubble_padding;

        let mut spans = vec![self.highlight_span("│ ".to_string())];
        spans.push(Span::styled(raw.text, raw.style));
        spans.push(self.highlight_span(format!("{fill} │")));

        let outer_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(outer_padding));
            return Line::from(spans);
        }

        let mut line_spans = vec![Span::from(outer_padding)];
        line_spans.extend(spans);

        return Line::from(line_spans);
    }

    fn wrap_lines_in_bubble(&self, lines: Vec<Line<'a>>, max_line_length: usize) -> Vec<Line<'a>> {
        // Add 2 for the vertical bars.
        let inner_bar = ["─"].repeat(max_line_length + 2).join("");
        let top_left_border = "╭";
        let mut top_bar = format!("{top_left_border}{inner_bar}╮");
        let bottom_bar = format!("╰{inner_bar}╯");
        let bar_padding = repeat_from_subtractions(
            " ",
            vec![self.window_max_width, max_line_length, 8],
        );

        let username = self.message.author.to_string();
        let top_replace = ["─"].repeat(char_len(&username)).join("");
        top_bar = top_bar.replace(
            format!("{top_left_border}{top_replace}").as_str(),
            format!("{top_left_border}{username}").as_str(),
        );

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_padding}")));
            return res;
        }

        let mut res = vec![self.highlight_line(format!("{bar_padding}{top_bar}"))];
        res.extend(lines);
        res.push(self.highlight_line(format!("{bar_padding}{bottom_bar}")));
        return res;
    }

    fn highlight_span(&self, text: String) -> Span<'a> {
        if self.message.message_type() == MessageType::Error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        } else if self.message.author == Author::Podium {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(88, 129, 87)), // Sage
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }

    fn highlight_line(&self, text: String) -> Line<'a> {
        return Line::from(self.highlight_span(text));
    }
}
