use serde_json::json;

use crate::{
  converter::parameters::{add_parameters, template_param},
  spec::Parameter,
  wadl::Element,
};

fn params(value: serde_json::Value) -> Vec<Parameter> {
  serde_json::from_value(value).unwrap()
}

#[test]
fn test_skips_body_and_path_parameters() {
  let parameters = params(json!([
    { "name": "pet_id", "paramType": "path", "required": true },
    { "name": "tag", "paramType": "query", "required": false },
    { "name": "pet", "paramType": "body", "required": true, "dataType": "Pet" },
    { "name": "api_key", "paramType": "header", "required": true },
    { "name": "nick_name", "paramType": "form", "required": false }
  ]));

  let mut request = Element::new("request");
  let written = add_parameters(&mut request, &parameters);

  assert_eq!(written, 3);
  let emitted: Vec<_> = request
    .children_named("param")
    .map(|param| (param.attr("name"), param.attr("style"), param.attr("required")))
    .collect();
  assert_eq!(
    emitted,
    vec![
      (Some("tag"), Some("query"), Some("false")),
      (Some("apiKey"), Some("header"), Some("true")),
      (Some("nickName"), Some("form"), Some("false")),
    ]
  );
}

#[test]
fn test_unknown_param_type_is_passed_through() {
  let parameters = params(json!([{ "name": "session", "paramType": "cookie", "required": false }]));

  let mut request = Element::new("request");
  add_parameters(&mut request, &parameters);

  assert_eq!(request.children()[0].attr("style"), Some("cookie"));
}

#[test]
fn test_empty_parameter_list_writes_nothing() {
  let mut request = Element::new("request");
  assert_eq!(add_parameters(&mut request, &[]), 0);
  assert!(request.children().is_empty());
}

#[test]
fn test_template_param() {
  let param = template_param("{order_id}");
  assert_eq!(param.name(), "param");
  assert_eq!(param.attr("name"), Some("orderId"));
  assert_eq!(param.attr("style"), Some("template"));
  assert_eq!(param.attr("required"), Some("true"));
}
