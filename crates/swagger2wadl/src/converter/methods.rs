use super::{
  metrics::{ConversionStats, ConversionWarning},
  requests::add_request,
  responses::ResponsePolicy,
};
use crate::{
  spec::Operation,
  wadl::{Element, METHOD, doc},
};

/// Appends one `method` per operation to `parent`, in input order.
pub(crate) fn add_operations(
  parent: &mut Element,
  api_path: &str,
  operations: &[Operation],
  policy: ResponsePolicy,
  stats: &mut ConversionStats,
) {
  for operation in operations {
    let verb = operation.http_method();
    let method = parent.push(Element::new(METHOD).with_attr("name", verb.as_str()));

    if let Some(notes) = &operation.notes {
      method.push(doc(notes));
    }

    if let Some(body) = operation.body_parameter()
      && body.data_type.is_none()
    {
      stats.record_warning(ConversionWarning::UntypedBody {
        method: verb.clone(),
        path: api_path.to_string(),
        param: body.name.clone(),
      });
    }

    let params = add_request(method, &operation.parameters);
    let responses = policy.add_responses(method, &operation.response_messages);
    stats.record_method(params, responses);
  }
}
