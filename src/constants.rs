// Centralized labels, extensions & default values
pub const MEDIA_EXTENSIONS: [&str; 4] = [".mp4", ".mkv", ".avi", ".mov"];
pub const SELECT_ALL_LABEL: &str = "(select all)";

pub const SELECTOR_TITLE: &str = "Media files";
pub const SELECTOR_FOOTER: &str =
    "Use 'up'/'down' arrows to navigate, 'space' to toggle selection, 'enter' to proceed, 'q' to quit.";
pub const MENU_TITLE: &str = "Post-process";
pub const MENU_FOOTER: &str = "Use 'up'/'down' arrows to navigate, 'enter' to select, 'q' to quit.";

pub const AUDIO_EXTENSION: &str = "mp3";
pub const CONTAINER_EXTENSION: &str = "mp4";
pub const TRANSCRIPT_EXTENSION: &str = "txt";

pub const DEFAULT_FFMPEG: &str = "ffmpeg";
pub const DEFAULT_WHISPER: &str = "whisper-cli";
pub const MODEL_FILE_NAME: &str = "ggml-base.bin";
pub const DEFAULT_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.bin";
