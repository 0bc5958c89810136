use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GnockError {
    #[error("invalid URL: {0} (expected <host>/<owner>/<repo>)")]
    InvalidUrl(String),

    #[error("failed to retrieve {url}: {reason}")]
    RetrievalFailed { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to {action} {}: {source}", path.display())]
    FileOp {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid module declaration: {0}")]
    InvalidDeclaration(String),

    #[error("module declaration not found in {}", .0.display())]
    DeclarationNotFound(PathBuf),

    #[error("failed to parse gno.mod file in {}: {source}", rel_path.display())]
    InvalidManifest {
        rel_path: PathBuf,
        #[source]
        source: Box<GnockError>,
    },

    #[error("module path '{0}' cannot be mapped into the workspace")]
    UnsafeModulePath(String),

    #[error("gnock.json already exists")]
    ConfigAlreadyExists,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl GnockError {
    /// Attach the path an I/O failure happened on.
    pub fn file_op(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| GnockError::FileOp {
            action,
            path,
            source,
        }
    }

    pub fn retrieval(url: &str, reason: impl Into<String>) -> Self {
        GnockError::RetrievalFailed {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
