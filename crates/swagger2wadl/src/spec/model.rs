//! Typed view of a Swagger 1.x API declaration.
//!
//! Only the fields the WADL conversion reads are modelled. Everything the
//! converter relies on unconditionally is a required field, so a document that
//! deserializes successfully is safe to convert without further presence checks.

use serde::Deserialize;

use super::SpecError;

pub(crate) const BODY_PARAM_TYPE: &str = "body";
pub(crate) const PATH_PARAM_TYPE: &str = "path";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeclaration {
  pub resource_path: String,
  #[serde(default)]
  pub description: Option<String>,
  pub apis: Vec<ApiEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiEntry {
  pub path: String,
  pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub method: String,
  #[serde(default)]
  pub notes: Option<String>,
  pub parameters: Vec<Parameter>,
  pub response_messages: Vec<ResponseMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
  pub name: String,
  pub param_type: String,
  pub required: bool,
  #[serde(default)]
  pub data_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
  pub code: u16,
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub response_model: Option<String>,
}

impl ApiDeclaration {
  /// Parses and validates a JSON API declaration.
  ///
  /// Missing or mistyped required fields are reported with the JSON path of the
  /// offending value. Operations with more than one `body` parameter are rejected.
  pub fn from_slice(bytes: &[u8]) -> Result<Self, SpecError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let declaration: Self = serde_path_to_error::deserialize(&mut deserializer).map_err(SpecError::from_path_error)?;
    deserializer.end().map_err(|inner| SpecError::Shape {
      path: ".".to_string(),
      inner,
    })?;
    declaration.validate()?;
    Ok(declaration)
  }

  pub fn from_value(value: serde_json::Value) -> Result<Self, SpecError> {
    let declaration: Self = serde_path_to_error::deserialize(value).map_err(SpecError::from_path_error)?;
    declaration.validate()?;
    Ok(declaration)
  }

  fn validate(&self) -> Result<(), SpecError> {
    for api in &self.apis {
      for operation in &api.operations {
        let count = operation.body_parameters().count();
        if count > 1 {
          return Err(SpecError::MultipleBodies {
            method: operation.http_method(),
            path: api.path.clone(),
            count,
          });
        }
      }
    }
    Ok(())
  }

  pub fn operation_count(&self) -> usize {
    self.apis.iter().map(|api| api.operations.len()).sum()
  }
}

impl Operation {
  /// The HTTP verb in the uppercase form WADL expects.
  pub fn http_method(&self) -> String {
    self.method.to_uppercase()
  }

  pub fn body_parameters(&self) -> impl Iterator<Item = &Parameter> {
    self.parameters.iter().filter(|param| param.is_body())
  }

  pub fn body_parameter(&self) -> Option<&Parameter> {
    self.body_parameters().next()
  }

  pub fn path_parameters(&self) -> impl Iterator<Item = &Parameter> {
    self.parameters.iter().filter(|param| param.is_path())
  }
}

impl Parameter {
  pub fn is_body(&self) -> bool {
    self.param_type == BODY_PARAM_TYPE
  }

  pub fn is_path(&self) -> bool {
    self.param_type == PATH_PARAM_TYPE
  }
}
