use super::naming::{camel_case, template_name};
use crate::{
  spec::Parameter,
  wadl::{Element, PARAM},
};

pub(crate) const TEMPLATE_STYLE: &str = "template";

/// Appends a `param` for every parameter that is neither `body` nor `path`.
///
/// Returns how many were written.
pub(crate) fn add_parameters(parent: &mut Element, parameters: &[Parameter]) -> usize {
  let mut written = 0;
  for param in parameters.iter().filter(|param| !param.is_body() && !param.is_path()) {
    parent.push(
      Element::new(PARAM)
        .with_attr("name", camel_case(&param.name))
        .with_attr("style", param.param_type.as_str())
        .with_attr("required", param.required.to_string()),
    );
    written += 1;
  }
  written
}

/// The `param` describing a `{name}` template segment.
pub(crate) fn template_param(token: &str) -> Element {
  Element::new(PARAM)
    .with_attr("name", template_name(token))
    .with_attr("style", TEMPLATE_STYLE)
    .with_attr("required", "true")
}
