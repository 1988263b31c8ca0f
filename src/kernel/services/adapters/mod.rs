//! Service adapters: filesystem implementations of the ports.

pub mod paths;
pub mod question_file;
pub mod settings;

pub use paths::{ensure_log_dir, get_log_dir};
pub use question_file::QuestionFile;
pub use settings::{ensure_settings_file, get_settings_path, load_settings};
