use serde_json::json;

use super::support::{ENDPOINT, convert, convert_with, declaration, method_names, petstore, resources, resources_with_path};
use crate::converter::{ConversionWarning, ConvertOptions, ResponsePolicy, WadlConverter};

#[test]
fn test_minimal_document_serializes_exactly() {
  let declaration = declaration(json!({
    "resourcePath": "/pets",
    "description": "Pets",
    "apis": [{
      "path": "/pets/{pet_id}",
      "operations": [{
        "method": "get",
        "parameters": [{ "name": "pet_id", "paramType": "path", "required": true }],
        "responseMessages": [{ "code": 200 }]
      }]
    }]
  }));

  let xml = convert(&declaration).to_xml(false).unwrap();
  let expected = concat!(
    r#"<application xmlns="http://wadl.dev.java.net/2009/02" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xsi:schemaLocation="http://wadl.dev.java.net/2009/02 http://www.w3.org/Submission/wadl/wadl.xsd" "#,
    r#"xmlns:json="http://wadl.dev.java.net/2009/02/json-schema">"#,
    r#"<doc>Pets</doc>"#,
    r#"<resources base="http://localhost:8080/pets">"#,
    r#"<resource path="pets"><resource path="petId">"#,
    r#"<param name="petId" style="template" required="true"/>"#,
    r#"<method name="GET"><request/><response status="200"/></method>"#,
    r#"</resource></resource>"#,
    r#"</resources></application>"#,
  );
  assert_eq!(xml, expected);
}

#[test]
fn test_root_has_doc_and_namespaces_in_order() {
  let declaration = declaration(json!({ "resourcePath": "/empty", "apis": [] }));
  let output = convert(&declaration);
  let document = &output.document;

  assert_eq!(document.name(), "application");
  let keys: Vec<_> = document.attributes().iter().map(|(key, _)| key.as_str()).collect();
  assert_eq!(keys, vec!["xmlns", "xmlns:xsi", "xsi:schemaLocation", "xmlns:json"]);

  let names: Vec<_> = document.children().iter().map(|child| child.name()).collect();
  assert_eq!(names, vec!["doc", "resources"]);
  assert_eq!(document.child("doc").unwrap().text(), None);
  assert!(resources(document).children().is_empty());
}

#[test]
fn test_base_is_plain_concatenation() {
  let declaration = declaration(json!({ "resourcePath": "/pet", "apis": [] }));

  let converter = WadlConverter::new(&declaration, "http://host:8080/api/", ConvertOptions::default());
  assert_eq!(converter.base(), "http://host:8080/api//pet");

  let output = converter.convert();
  assert_eq!(resources(&output.document).attr("base"), Some("http://host:8080/api//pet"));
}

#[test]
fn test_method_notes_become_doc_before_request() {
  let declaration = declaration(json!({
    "resourcePath": "/pets",
    "apis": [{
      "path": "/pets",
      "operations": [{ "method": "Post", "notes": "Adds a pet", "parameters": [], "responseMessages": [] }]
    }]
  }));

  let output = convert(&declaration);
  let method = resources(&output.document).children()[0].child("method").unwrap();

  assert_eq!(method.attr("name"), Some("POST"));
  let order: Vec<_> = method.children().iter().map(|child| child.name()).collect();
  assert_eq!(order, vec!["doc", "request"]);
  assert_eq!(method.child("doc").unwrap().text(), Some("Adds a pet"));
}

#[test]
fn test_petstore_resource_tree() {
  let declaration = petstore();
  let output = convert(&declaration);
  let document = &output.document;

  assert_eq!(document.child("doc").unwrap().text(), Some("Operations about pets"));
  let resources = resources(document);
  assert_eq!(resources.attr("base"), Some("http://localhost:8080/pet"));

  let paths: Vec<_> = resources.children().iter().filter_map(|r| r.attr("path")).collect();
  assert_eq!(paths, vec!["pet", "pet/findByStatus", "pet/uploadImage"]);

  let pet = resources_with_path(resources, "pet")[0];
  assert_eq!(method_names(pet), vec!["POST", "PUT"]);

  let by_id = resources_with_path(pet, "petId")[0];
  assert_eq!(by_id.child("param").unwrap().attr("name"), Some("petId"));
  assert_eq!(method_names(by_id), vec!["GET", "DELETE"]);

  let get = by_id.child("method").unwrap();
  assert_eq!(get.child("doc").unwrap().text(), Some("Returns a pet based on ID"));
  assert!(get.child("request").unwrap().children().is_empty());
  let statuses: Vec<_> = get.children_named("response").filter_map(|r| r.attr("status")).collect();
  assert_eq!(statuses, vec!["200", "400", "404"]);

  let delete = by_id.children_named("method").nth(1).unwrap();
  let delete_params: Vec<_> = delete
    .child("request")
    .unwrap()
    .children_named("param")
    .filter_map(|p| p.attr("name"))
    .collect();
  assert_eq!(delete_params, vec!["apiKey"]);

  let find = resources_with_path(resources, "pet/findByStatus")[0];
  let find_params: Vec<_> = find
    .child("method")
    .unwrap()
    .child("request")
    .unwrap()
    .children_named("param")
    .filter_map(|p| p.attr("name"))
    .collect();
  assert_eq!(find_params, vec!["status", "pageSize"]);
}

#[test]
fn test_petstore_stats_and_warnings() {
  let declaration = petstore();
  let stats = convert(&declaration).stats;

  assert_eq!(stats.apis_processed, 5);
  assert_eq!(stats.resources_created, 4);
  assert_eq!(stats.template_resources_created, 1);
  assert_eq!(stats.resources_merged, 2);
  assert_eq!(stats.methods_generated, 6);
  assert_eq!(stats.params_generated, 4);
  assert_eq!(stats.responses_generated, 10);
  assert_eq!(
    stats.warnings,
    vec![ConversionWarning::UntypedBody {
      method: "POST".to_string(),
      path: "/pet/uploadImage".to_string(),
      param: "file".to_string(),
    }]
  );
}

#[test]
fn test_petstore_bucketed_responses() {
  let declaration = petstore();
  let output = convert_with(&declaration, ResponsePolicy::Bucketed);

  let pet = resources_with_path(resources(&output.document), "pet")[0];
  let put = pet.children_named("method").find(|m| m.attr("name") == Some("PUT")).unwrap();
  let statuses: Vec<_> = put.children_named("response").filter_map(|r| r.attr("status")).collect();
  assert_eq!(statuses, vec!["400 405", "401 404"]);
  assert!(put.children_named("response").all(|r| r.child("doc").is_none()));
}

#[test]
fn test_conversion_is_deterministic() {
  let declaration = petstore();

  let first = convert(&declaration).to_xml(false).unwrap();
  let second = convert(&declaration).to_xml(false).unwrap();
  assert_eq!(first, second);

  let reparsed = petstore();
  let third = WadlConverter::new(&reparsed, ENDPOINT, ConvertOptions::default())
    .convert()
    .to_xml(false)
    .unwrap();
  assert_eq!(first, third);
}

#[test]
fn test_pretty_output_matches_compact_content() {
  let declaration = petstore();
  let output = convert(&declaration);

  let compact = output.to_xml(false).unwrap();
  let pretty = output.to_xml(true).unwrap();

  assert!(pretty.contains("\n  <doc>Operations about pets</doc>"));
  let squashed: String = pretty.lines().map(str::trim_start).collect();
  assert_eq!(squashed, compact);
}
