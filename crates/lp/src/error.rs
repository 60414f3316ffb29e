use std::{io, path::PathBuf};

use thiserror::Error;
use triad_core::ModelError;

/// Errors that can occur when exporting a model to a file.
///
/// On any error the target file is left as it was before the call.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The model breaks a structural invariant and cannot be rendered.
    #[error("model is not exportable")]
    Invalid(#[from] ModelError),

    /// Creating, writing or flushing the temporary output failed.
    #[error("failed to write `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Moving the finished output over the target failed.
    #[error("failed to replace `{}`", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
