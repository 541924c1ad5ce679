mod acip_ops;
mod convert_ops;
mod validate_ops;

pub use acip_ops::acip_cmd;
pub use convert_ops::{convert_cmd, file_cmd, reverse_cmd};
pub use validate_ops::validate_cmd;

/// Errors surfaced by the command layer; conversion itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    File(#[from] ewts_engine::files::FileError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
