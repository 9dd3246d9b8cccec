use std::path::PathBuf;

use super::ConvertRequest;

#[derive(Debug)]
pub enum Action {
    ConvertRequest(ConvertRequest),
    SaveMedia(PathBuf),
}
