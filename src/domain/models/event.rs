use tui_textarea::Input;

use super::Message;
use super::RequestKind;

pub enum Event {
    AppMessage(Message),
    ConvertError(RequestKind, String),
    ConvertResponse(RequestKind, String),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    KeyboardTab(),
    MediaSave(),
    MediaSeekBack(),
    MediaSeekForward(),
    MediaTogglePlay(),
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
