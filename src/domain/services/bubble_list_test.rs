use super::BubbleList;
use super::RenderContext;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageContent;
use crate::domain::models::Outline;

fn outline_message() -> Message {
    return Message::with_content(
        Author::Model,
        MessageContent::Outline {
            text: "Your outline".to_string(),
            steps: Outline::default().steps().to_vec(),
        },
    );
}

#[test]
fn it_counts_lines_across_messages() {
    let mut bubble_list = BubbleList::new();
    let messages = vec![
        Message::new(Author::Model, "Hello"),
        Message::new(Author::Podium, "World"),
    ];

    bubble_list.set_messages(&messages, 80, RenderContext::default());

    // Two bubbles of one content line each, plus borders.
    assert_eq!(bubble_list.len(), 6);
}

#[test]
fn it_offsets_step_boxes_by_preceding_bubbles() {
    let mut bubble_list = BubbleList::new();
    let messages = vec![Message::new(Author::Model, "Hello"), outline_message()];

    bubble_list.set_messages(&messages, 100, RenderContext::default());

    let boxes = bubble_list.step_boxes();
    assert_eq!(boxes.len(), 3);
    // The first bubble occupies lines 0..3, so every box sits past it.
    assert!(boxes[0].top > 3);
    assert!(boxes[0].top < boxes[1].top);
    assert!(boxes[1].top < boxes[2].top);
}

#[test]
fn it_resolves_lines_to_step_boxes() {
    let mut bubble_list = BubbleList::new();
    let messages = vec![outline_message()];

    bubble_list.set_messages(&messages, 100, RenderContext::default());

    let boxes = bubble_list.step_boxes().to_vec();
    assert_eq!(bubble_list.step_at_line(boxes[0].top), Some(1));
    assert_eq!(bubble_list.step_at_line(boxes[0].top + 1), Some(1));
    assert_eq!(bubble_list.step_at_line(boxes[2].top), Some(3));
    assert_eq!(bubble_list.step_at_line(0), None);
}

#[test]
fn it_rerenders_when_the_context_changes() {
    let mut bubble_list = BubbleList::new();
    let messages = vec![outline_message()];

    bubble_list.set_messages(&messages, 100, RenderContext::default());
    let before = bubble_list.len();

    let context = RenderContext {
        dragged_step: Some(2),
        ..RenderContext::default()
    };
    bubble_list.set_messages(&messages, 100, context);

    // Same shape, but the cache was rebuilt with the dragged highlight.
    assert_eq!(bubble_list.len(), before);
    assert_eq!(bubble_list.step_boxes().len(), 3);
}
