//! Swagger 1.x to WADL conversion.
//!
//! [`WadlConverter`] walks the `apis` of an [`ApiDeclaration`] in order and builds
//! the WADL `application` tree:
//!
//! - literal paths become one `resource` each, shared by every entry with that path
//! - a path with a `/{token}` segment becomes a parent `resource` owning a nested
//!   template `resource` with a `template` param
//! - each operation becomes a `method` with a `request` and its `response`s, shaped
//!   by the configured [`ResponsePolicy`]
//!
//! The converter holds no state between runs; the same inputs always produce the
//! same document.

pub(crate) mod methods;
pub mod metrics;
pub(crate) mod naming;
pub(crate) mod parameters;
pub(crate) mod requests;
pub(crate) mod resources;
pub mod responses;

pub use metrics::{ConversionStats, ConversionWarning};
pub use responses::ResponsePolicy;

use crate::{
  spec::ApiDeclaration,
  wadl::{APPLICATION, DOC, Element, ROOT_NAMESPACES, XmlError},
};
use resources::ResourceTreeBuilder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
pub struct ConvertOptions {
  #[builder(default)]
  pub response_policy: ResponsePolicy,
}

#[derive(Debug)]
pub struct ConversionOutput {
  pub document: Element,
  pub stats: ConversionStats,
}

impl ConversionOutput {
  pub fn to_xml(&self, pretty: bool) -> Result<String, XmlError> {
    self.document.to_xml_string(pretty)
  }
}

pub struct WadlConverter<'a> {
  declaration: &'a ApiDeclaration,
  endpoint: &'a str,
  options: ConvertOptions,
}

impl<'a> WadlConverter<'a> {
  /// `endpoint` is prefixed verbatim to the declaration's `resourcePath` to form
  /// the `base` of the `resources` element.
  pub fn new(declaration: &'a ApiDeclaration, endpoint: &'a str, options: ConvertOptions) -> Self {
    Self {
      declaration,
      endpoint,
      options,
    }
  }

  pub fn base(&self) -> String {
    format!("{}{}", self.endpoint, self.declaration.resource_path)
  }

  pub fn convert(&self) -> ConversionOutput {
    let mut application = Element::new(APPLICATION);

    let mut doc = Element::new(DOC);
    if let Some(description) = &self.declaration.description {
      doc.set_text(description.as_str());
    }
    application.push(doc);

    let mut builder = ResourceTreeBuilder::new(self.options.response_policy);
    for api in &self.declaration.apis {
      builder.add_api(api);
    }
    let (resources, stats) = builder.finish(&self.base());
    application.push(resources);

    for (key, value) in ROOT_NAMESPACES {
      application.set_attr(*key, *value);
    }

    ConversionOutput {
      document: application,
      stats,
    }
  }
}

#[cfg(test)]
mod tests;
