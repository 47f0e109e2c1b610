use std::{ops::Range, sync::LazyLock};

use indexmap::IndexMap;
use regex::Regex;

use super::{
  metrics::{ConversionStats, ConversionWarning},
  methods::add_operations,
  naming::{camel_case, template_name},
  parameters::template_param,
  responses::ResponsePolicy,
};
use crate::{
  spec::ApiEntry,
  wadl::{Element, RESOURCE, RESOURCES},
};

static TEMPLATE_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\{(.+?)\}").unwrap());

/// The first `/{token}` segment of an API path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TemplateSegment {
  /// Byte range of the whole `/{token}` match.
  pub(crate) span: Range<usize>,
  /// The token including its braces, e.g. `{petId}`.
  pub(crate) token: String,
  /// Whether further template segments follow the first one.
  pub(crate) has_more: bool,
}

impl TemplateSegment {
  pub(crate) fn find(path: &str) -> Option<Self> {
    let mut matches = TEMPLATE_SEGMENT_RE.find_iter(path);
    let first = matches.next()?;
    Some(Self {
      span: first.range(),
      token: first.as_str().trim_start_matches('/').to_string(),
      has_more: matches.next().is_some(),
    })
  }

  /// `path` without this segment and without one leading and one trailing slash.
  pub(crate) fn parent_path(&self, path: &str) -> String {
    let remainder = format!("{}{}", &path[..self.span.start], &path[self.span.end..]);
    let trimmed = remainder.strip_prefix('/').unwrap_or(&remainder);
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
  }
}

/// Builds the children of the WADL `resources` element from Swagger API entries.
///
/// Literal paths are deduplicated through `index`, which maps a resource path to
/// its position in `nodes`. Every templated entry gets a fresh parent resource;
/// the first parent created for a path is also indexed, so a later literal entry
/// with that path merges into it.
#[derive(Debug)]
pub(crate) struct ResourceTreeBuilder {
  policy: ResponsePolicy,
  nodes: Vec<Element>,
  index: IndexMap<String, usize>,
  stats: ConversionStats,
}

impl ResourceTreeBuilder {
  pub(crate) fn new(policy: ResponsePolicy) -> Self {
    Self {
      policy,
      nodes: Vec::new(),
      index: IndexMap::new(),
      stats: ConversionStats::default(),
    }
  }

  pub(crate) fn add_api(&mut self, api: &ApiEntry) {
    self.stats.record_api();
    match TemplateSegment::find(&api.path) {
      Some(segment) => self.add_templated(api, &segment),
      None => self.add_literal(api),
    }
  }

  fn add_literal(&mut self, api: &ApiEntry) {
    let key = api.path.strip_prefix('/').unwrap_or(&api.path).to_string();

    for operation in &api.operations {
      for param in operation.path_parameters() {
        self.stats.record_warning(ConversionWarning::UnboundPathParameter {
          method: operation.http_method(),
          path: api.path.clone(),
          param: param.name.clone(),
        });
      }
    }

    let position = if let Some(&position) = self.index.get(&key) {
      self.stats.record_merge();
      position
    } else {
      let position = self.nodes.len();
      self.nodes.push(Element::new(RESOURCE).with_attr("path", key.as_str()));
      self.index.insert(key, position);
      self.stats.record_resource();
      position
    };

    add_operations(
      &mut self.nodes[position],
      &api.path,
      &api.operations,
      self.policy,
      &mut self.stats,
    );
  }

  fn add_templated(&mut self, api: &ApiEntry, segment: &TemplateSegment) {
    let parent_path = segment.parent_path(&api.path);
    let name = template_name(&segment.token);

    if segment.has_more {
      self.stats.record_warning(ConversionWarning::ExtraTemplateSegments {
        path: api.path.clone(),
        template: segment.token.clone(),
      });
    }

    for operation in &api.operations {
      let declared = operation.path_parameters().any(|param| camel_case(&param.name) == name);
      if !declared {
        self.stats.record_warning(ConversionWarning::UndeclaredTemplate {
          method: operation.http_method(),
          path: api.path.clone(),
          template: segment.token.clone(),
        });
      }
    }

    let mut parent = Element::new(RESOURCE).with_attr("path", parent_path.as_str());
    let template = parent.push(Element::new(RESOURCE).with_attr("path", name.as_str()));
    template.push(template_param(&segment.token));
    add_operations(template, &api.path, &api.operations, self.policy, &mut self.stats);

    self.stats.record_resource();
    self.stats.record_template_resource();

    let position = self.nodes.len();
    self.nodes.push(parent);
    self.index.entry(parent_path).or_insert(position);
  }

  /// Resource paths reachable for literal-path merging, in creation order.
  #[cfg(test)]
  pub(crate) fn indexed_paths(&self) -> impl Iterator<Item = &str> {
    self.index.keys().map(String::as_str)
  }

  /// Wraps the built resources in a `resources` element rooted at `base`.
  pub(crate) fn finish(self, base: &str) -> (Element, ConversionStats) {
    let mut resources = Element::new(RESOURCES).with_attr("base", base);
    for node in self.nodes {
      resources.push(node);
    }
    (resources, self.stats)
  }
}
