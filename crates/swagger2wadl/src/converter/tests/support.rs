use serde_json::Value;

use crate::{
  converter::{ConversionOutput, ConvertOptions, ResponsePolicy, WadlConverter},
  spec::ApiDeclaration,
  wadl::Element,
};

pub(super) const ENDPOINT: &str = "http://localhost:8080";

pub(super) fn declaration(value: Value) -> ApiDeclaration {
  ApiDeclaration::from_value(value).expect("failed to parse test declaration")
}

pub(super) fn petstore() -> ApiDeclaration {
  ApiDeclaration::from_slice(include_bytes!("../../../fixtures/petstore.json")).expect("petstore fixture should parse")
}

pub(super) fn convert_with(declaration: &ApiDeclaration, policy: ResponsePolicy) -> ConversionOutput {
  let options = ConvertOptions::builder().response_policy(policy).build();
  WadlConverter::new(declaration, ENDPOINT, options).convert()
}

pub(super) fn convert(declaration: &ApiDeclaration) -> ConversionOutput {
  convert_with(declaration, ResponsePolicy::PerStatus)
}

pub(super) fn resources(document: &Element) -> &Element {
  document.child("resources").expect("document should have resources")
}

pub(super) fn resources_with_path<'a>(parent: &'a Element, path: &'a str) -> Vec<&'a Element> {
  parent
    .children_named("resource")
    .filter(|resource| resource.attr("path") == Some(path))
    .collect()
}

pub(super) fn method_names(resource: &Element) -> Vec<&str> {
  resource
    .children_named("method")
    .filter_map(|method| method.attr("name"))
    .collect()
}
