#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Step;

/// MIME type derived from the file extension. Terminals do not carry a
/// declared type with a drop, so the extension is the declaration.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    let mime = match extension.as_str() {
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "opus" => "audio/opus",
        "wav" => "audio/wav",
        "avi" => "video/x-msvideo",
        "m4v" => "video/x-m4v",
        "mkv" => "video/x-matroska",
        "mov" => "video/quicktime",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "gif" => "image/gif",
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => return None,
    };

    return Some(mime);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Accepts only files whose declared type begins with `audio/` or
    /// `video/`. Everything else is None and dropped silently by callers.
    pub fn detect(path: &Path) -> Option<MediaKind> {
        let mime = mime_from_path(path)?;
        if mime.starts_with("audio/") {
            return Some(MediaKind::Audio);
        }
        if mime.starts_with("video/") {
            return Some(MediaKind::Video);
        }

        return None;
    }
}

impl ToString for MediaKind {
    fn to_string(&self) -> String {
        match self {
            MediaKind::Audio => return String::from("audio"),
            MediaKind::Video => return String::from("video"),
        }
    }
}

/// Everything a chat entry can carry. The renderer matches exhaustively on
/// this, there is no untyped fallback shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MessageContent {
    Text(String),
    /// An outline block with draggable step boxes. Part of the content
    /// surface and fully rendered, though the current flow never emits one
    /// into history on its own.
    Outline { text: String, steps: Vec<Step> },
    /// Prompt instructing the user to drop a media file.
    DropzonePrompt { text: String },
    /// A dropped media file, playable inline.
    MediaFile {
        kind: MediaKind,
        file_name: String,
        path: PathBuf,
    },
    /// One rhetorical framing suggestion.
    Suggestion { title: String, text: String },
}

impl MessageContent {
    pub fn text(text: &str) -> MessageContent {
        return MessageContent::Text(text.to_string());
    }

    pub fn media_file(kind: MediaKind, path: &Path) -> MessageContent {
        let file_name = path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_else(|| return path.to_string_lossy().to_string());

        return MessageContent::MediaFile {
            kind,
            file_name,
            path: path.to_path_buf(),
        };
    }
}
