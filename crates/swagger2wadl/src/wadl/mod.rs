pub mod element;

pub use element::{Element, XmlError};

pub(crate) const WADL_NAMESPACE: &str = "http://wadl.dev.java.net/2009/02";
pub(crate) const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub(crate) const WADL_SCHEMA_LOCATION: &str =
  "http://wadl.dev.java.net/2009/02 http://www.w3.org/Submission/wadl/wadl.xsd";
pub(crate) const JSON_SCHEMA_NAMESPACE: &str = "http://wadl.dev.java.net/2009/02/json-schema";

pub(crate) const JSON_MEDIA_TYPE: &str = "application/json";
pub(crate) const DESCRIBED_BY_ATTR: &str = "json:describedBy";

pub(crate) const APPLICATION: &str = "application";
pub(crate) const DOC: &str = "doc";
pub(crate) const RESOURCES: &str = "resources";
pub(crate) const RESOURCE: &str = "resource";
pub(crate) const METHOD: &str = "method";
pub(crate) const REQUEST: &str = "request";
pub(crate) const RESPONSE: &str = "response";
pub(crate) const PARAM: &str = "param";
pub(crate) const REPRESENTATION: &str = "representation";

/// Namespace declarations attached to the `application` root, in emission order.
pub(crate) const ROOT_NAMESPACES: &[(&str, &str)] = &[
  ("xmlns", WADL_NAMESPACE),
  ("xmlns:xsi", XSI_NAMESPACE),
  ("xsi:schemaLocation", WADL_SCHEMA_LOCATION),
  ("xmlns:json", JSON_SCHEMA_NAMESPACE),
];

/// A `representation` element for a JSON body, optionally linked to a schema.
pub(crate) fn json_representation(described_by: Option<&str>) -> Element {
  let representation = Element::new(REPRESENTATION).with_attr("mediaType", JSON_MEDIA_TYPE);
  match described_by {
    Some(schema) => representation.with_attr(DESCRIBED_BY_ATTR, schema),
    None => representation,
  }
}

pub(crate) fn doc(text: &str) -> Element {
  Element::new(DOC).with_text(text)
}
