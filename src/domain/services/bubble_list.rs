#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use super::BubbleAlignment;
use super::BubbleContext;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::StepBox;
use crate::domain::models::Transport;

/// UI state that feeds the renderer alongside the messages. A change to any
/// of it invalidates the bubble cache.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderContext {
    pub dragged_step: Option<u8>,
    pub is_executed: bool,
    pub active_media: Option<(usize, Transport)>,
}

struct BubbleCacheEntry<'a> {
    text_len: usize,
    lines: Vec<Line<'a>>,
    step_boxes: Vec<StepBox>,
}

pub struct BubbleList<'a> {
    cache: HashMap<usize, BubbleCacheEntry<'a>>,
    line_width: usize,
    lines_len: usize,
    context: RenderContext,
    step_boxes: Vec<StepBox>,
}

impl<'a> BubbleList<'a> {
    pub fn new() -> BubbleList<'a> {
        return BubbleList {
            cache: HashMap::new(),
            line_width: 0,
            lines_len: 0,
            context: RenderContext::default(),
            step_boxes: vec![],
        };
    }

    pub fn set_messages(
        &mut self,
        messages: &[Message],
        line_width: usize,
        context: RenderContext,
    ) {
        if self.line_width != line_width || self.context != context {
            self.cache.clear();
            self.line_width = line_width;
            self.context = context;
        }

        let mut line_offset = 0;
        let mut step_boxes: Vec<StepBox> = vec![];

        self.lines_len = messages
            .iter()
            .enumerate()
            .map(|(idx, message)| {
                if let Some(cache_entry) = self.cache.get(&idx) {
                    if idx < (messages.len() - 1) || content_len(message) == cache_entry.text_len {
                        let lines_len = cache_entry.lines.len();
                        for step_box in &cache_entry.step_boxes {
                            step_boxes.push(offset_box(step_box, line_offset));
                        }
                        line_offset += lines_len;
                        return lines_len;
                    }
                }

                let mut align = BubbleAlignment::Left;
                if message.author == Author::User {
                    align = BubbleAlignment::Right;
                }

                let transport = match context.active_media {
                    Some((media_idx, transport)) if media_idx == idx => Some(transport),
                    _ => None,
                };
                let bubble_context = BubbleContext {
                    dragged_step: context.dragged_step,
                    is_executed: context.is_executed,
                    transport,
                };

                let (bubble_lines, bubble_boxes) =
                    Bubble::new(message, align, line_width, bubble_context).as_lines();
                let bubble_line_len = bubble_lines.len();

                for step_box in &bubble_boxes {
                    step_boxes.push(offset_box(step_box, line_offset));
                }
                line_offset += bubble_line_len;

                self.cache.insert(
                    idx,
                    BubbleCacheEntry {
                        text_len: content_len(message),
                        lines: bubble_lines,
                        step_boxes: bubble_boxes,
                    },
                );

                return bubble_line_len;
            })
            .sum();

        self.step_boxes = step_boxes;
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    /// Geometry of every rendered outline step box, in absolute bubble-list
    /// line coordinates.
    pub fn step_boxes(&self) -> &[StepBox] {
        return &self.step_boxes;
    }

    /// Resolves an absolute line to the step box covering it, if any.
    pub fn step_at_line(&self, line: usize) -> Option<u8> {
        return self
            .step_boxes
            .iter()
            .find(|step_box| {
                return line >= step_box.top && line < step_box.top + step_box.height;
            })
            .map(|step_box| return step_box.step_id);
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let mut indexes: Vec<usize> = self.cache.keys().cloned().collect();
        indexes.sort();
        let lines: Vec<Line<'a>> = indexes
            .iter()
            .flat_map(|idx| {
                return self.cache.get(idx).unwrap().lines.to_owned();
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}

fn offset_box(step_box: &StepBox, line_offset: usize) -> StepBox {
    return StepBox {
        step_id: step_box.step_id,
        top: step_box.top + line_offset,
        height: step_box.height,
    };
}

// Cheap change detector for the cache, mirrors how message content grows.
fn content_len(message: &Message) -> usize {
    use crate::domain::models::MessageContent;

    match &message.content {
        MessageContent::Text(text) => return text.len(),
        MessageContent::Outline { text, steps } => return text.len() + steps.len(),
        MessageContent::DropzonePrompt { text } => return text.len(),
        MessageContent::MediaFile { file_name, .. } => return file_name.len(),
        MessageContent::Suggestion { title, text } => return title.len() + text.len(),
    }
}
