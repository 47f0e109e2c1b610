/// Converts an underscore-separated name to camel case.
///
/// The first word is kept as-is; every later word gets an uppercase first letter
/// and a lowercase remainder. `first_name_field` becomes `firstNameField`.
pub(crate) fn camel_case(value: &str) -> String {
  let mut words = value.split('_');
  let mut result = String::with_capacity(value.len());

  if let Some(first) = words.next() {
    result.push_str(first);
  }

  for word in words {
    let mut chars = word.chars();
    if let Some(head) = chars.next() {
      result.extend(head.to_uppercase());
      result.push_str(&chars.as_str().to_lowercase());
    }
  }

  result
}

/// Strips the braces from a `{name}` template token.
pub(crate) fn strip_braces(token: &str) -> String {
  token.chars().filter(|c| *c != '{' && *c != '}').collect()
}

/// The camel-cased name of a `{name}` template token.
pub(crate) fn template_name(token: &str) -> String {
  camel_case(&strip_braces(token))
}
