use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionStats {
  pub apis_processed: usize,
  pub resources_created: usize,
  pub template_resources_created: usize,
  pub resources_merged: usize,
  pub methods_generated: usize,
  pub params_generated: usize,
  pub responses_generated: usize,
  pub warnings: Vec<ConversionWarning>,
}

impl ConversionStats {
  pub fn record_api(&mut self) {
    self.apis_processed += 1;
  }

  pub fn record_resource(&mut self) {
    self.resources_created += 1;
  }

  pub fn record_template_resource(&mut self) {
    self.resources_created += 1;
    self.template_resources_created += 1;
  }

  pub fn record_merge(&mut self) {
    self.resources_merged += 1;
  }

  pub fn record_method(&mut self, params: usize, responses: usize) {
    self.methods_generated += 1;
    self.params_generated += params;
    self.responses_generated += responses;
  }

  pub fn record_warning(&mut self, warning: ConversionWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConversionWarning {
  #[strum(to_string = "'{method} {path}': path parameter '{param}' has no template segment and was dropped")]
  UnboundPathParameter {
    method: String,
    path: String,
    param: String,
  },
  #[strum(to_string = "'{path}': only the first template segment '{template}' becomes a nested resource")]
  ExtraTemplateSegments { path: String, template: String },
  #[strum(to_string = "'{method} {path}': template '{template}' is not declared as a path parameter")]
  UndeclaredTemplate {
    method: String,
    path: String,
    template: String,
  },
  #[strum(to_string = "'{method} {path}': body parameter '{param}' has no dataType; no representation emitted")]
  UntypedBody {
    method: String,
    path: String,
    param: String,
  },
}
