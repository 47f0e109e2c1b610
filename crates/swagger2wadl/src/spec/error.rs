#[derive(Debug, thiserror::Error)]
pub enum SpecError {
  #[error("failed to fetch '{location}': {source}")]
  Fetch {
    location: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("fetching '{location}' returned HTTP {status}")]
  Status {
    location: String,
    status: reqwest::StatusCode,
  },

  #[error("failed to read '{location}': {source}")]
  Read {
    location: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("malformed Swagger document at {path}: {inner}")]
  Shape { path: String, inner: serde_json::Error },

  #[error("operation '{method} {path}' declares {count} body parameters; at most one is allowed")]
  MultipleBodies { method: String, path: String, count: usize },
}

impl SpecError {
  pub(crate) fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
    let path = err.path().to_string();
    Self::Shape {
      path,
      inner: err.into_inner(),
    }
  }
}
