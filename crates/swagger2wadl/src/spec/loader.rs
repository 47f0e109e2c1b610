use std::{fmt, path::PathBuf};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use super::{ApiDeclaration, SpecError};

/// Where a Swagger API declaration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
  Remote(String),
  File(PathBuf),
}

impl SpecSource {
  #[must_use]
  pub fn parse(location: &str) -> Self {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
      Self::Remote(location.to_string())
    } else {
      Self::File(PathBuf::from(location))
    }
  }

  pub async fn load(&self) -> Result<ApiDeclaration, SpecError> {
    match self {
      Self::Remote(url) => {
        let bytes = fetch(url).await?;
        ApiDeclaration::from_slice(&bytes)
      }
      Self::File(path) => {
        let file = AsyncMmapFile::open(path).await.map_err(|source| SpecError::Read {
          location: path.display().to_string(),
          source: Box::new(source),
        })?;
        ApiDeclaration::from_slice(file.as_slice())
      }
    }
  }
}

impl fmt::Display for SpecSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Remote(url) => f.write_str(url),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

async fn fetch(url: &str) -> Result<Vec<u8>, SpecError> {
  let fetch_error = |source| SpecError::Fetch {
    location: url.to_string(),
    source,
  };

  let response = reqwest::get(url).await.map_err(fetch_error)?;
  let status = response.status();
  if !status.is_success() {
    return Err(SpecError::Status {
      location: url.to_string(),
      status,
    });
  }

  let body = response.bytes().await.map_err(fetch_error)?;
  Ok(body.to_vec())
}
