use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use super::convert::{ConvertConfig, ConvertLogger};
use crate::{
  converter::{naming::template_name, resources::TemplateSegment},
  spec::{ApiDeclaration, ApiEntry},
  ui::{Colors, colors::table_color, term_width},
};

/// The WADL resource path an API entry maps to, e.g. `pets/{petId}` for `/pets/{pet_id}`.
fn wadl_resource_path(api: &ApiEntry) -> String {
  match TemplateSegment::find(&api.path) {
    Some(segment) => {
      let parent = segment.parent_path(&api.path);
      let name = template_name(&segment.token);
      if parent.is_empty() {
        format!("{{{name}}}")
      } else {
        format!("{parent}/{{{name}}}")
      }
    }
    None => api.path.strip_prefix('/').unwrap_or(&api.path).to_string(),
  }
}

pub(crate) fn resource_rows(declaration: &ApiDeclaration) -> Vec<(String, String, String)> {
  declaration
    .apis
    .iter()
    .map(|api| {
      let methods = api.operations.iter().map(|operation| operation.http_method()).join(", ");
      (api.path.clone(), methods, wadl_resource_path(api))
    })
    .collect()
}

pub async fn list_resources(config: &ConvertConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = ConvertLogger::new(config, colors);
  logger.log_loading();
  let declaration = config.load_declaration().await?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("SWAGGER PATH").fg(table_color(colors.label())));
  header.add_cell(Cell::new("METHODS").fg(table_color(colors.label())));
  header.add_cell(Cell::new("WADL RESOURCE").fg(table_color(colors.label())));
  table.set_header(header);

  for (path, methods, resource) in resource_rows(&declaration) {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(path)
        .fg(table_color(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(methods)
        .fg(table_color(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(resource).fg(table_color(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");
  logger.info(&format!(
    "{} APIs, {} operations, base {}{}",
    declaration.apis.len(),
    declaration.operation_count(),
    config.endpoint,
    declaration.resource_path
  ));

  Ok(())
}
