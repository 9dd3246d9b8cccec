use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

/// Thin builders around tui-textarea, one for the research-summary draft
/// pane and one for the single-line chat prompt.
pub struct TextArea {}

impl<'a> TextArea {
    pub fn draft() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Draft")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    pub fn prompt() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title("Ask questions")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }
}
