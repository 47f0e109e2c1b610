use super::parameters::add_parameters;
use crate::{
  spec::Parameter,
  wadl::{Element, REQUEST, json_representation},
};

/// Appends the `request` element for one operation.
///
/// Query, header and form parameters become `param` children. A `body` parameter
/// with a `dataType` becomes a JSON `representation` linked to that schema.
/// Returns the number of `param` children written.
pub(crate) fn add_request(parent: &mut Element, parameters: &[Parameter]) -> usize {
  let request = parent.push(Element::new(REQUEST));
  let written = add_parameters(request, parameters);

  let body_schema = parameters
    .iter()
    .find(|param| param.is_body())
    .and_then(|param| param.data_type.as_deref());

  if let Some(schema) = body_schema {
    request.push(json_representation(Some(schema)));
  }

  written
}
