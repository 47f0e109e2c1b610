use std::io::Write;

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

/// An owned XML element: name, attributes in insertion order, optional text, children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
  name: String,
  attributes: Vec<(String, String)>,
  text: Option<String>,
  children: Vec<Element>,
}

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
  #[error("failed to write XML: {0}")]
  Write(#[from] std::io::Error),

  #[error("serialized XML is not valid UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

impl Element {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.set_attr(key, value);
    self
  }

  #[must_use]
  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  /// Sets an attribute, replacing the value in place if the key already exists.
  pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
    let key = key.into();
    let value = value.into();
    match self.attributes.iter_mut().find(|(existing, _)| *existing == key) {
      Some((_, slot)) => *slot = value,
      None => self.attributes.push((key, value)),
    }
  }

  pub fn set_text(&mut self, text: impl Into<String>) {
    self.text = Some(text.into());
  }

  /// Appends `child` and returns a mutable reference to it.
  pub fn push(&mut self, child: Element) -> &mut Element {
    self.children.push(child);
    let last = self.children.len() - 1;
    &mut self.children[last]
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn attr(&self, key: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|(existing, _)| existing == key)
      .map(|(_, value)| value.as_str())
  }

  pub fn attributes(&self) -> &[(String, String)] {
    &self.attributes
  }

  pub fn text(&self) -> Option<&str> {
    self.text.as_deref()
  }

  pub fn children(&self) -> &[Element] {
    &self.children
  }

  pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    self.children.iter().filter(move |child| child.name == name)
  }

  pub fn child(&self, name: &str) -> Option<&Element> {
    self.children.iter().find(|child| child.name == name)
  }

  /// Serializes the element. No XML declaration is written.
  pub fn to_xml_string(&self, pretty: bool) -> Result<String, XmlError> {
    let mut buffer = Vec::new();
    if pretty {
      let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);
      self.write_to(&mut writer)?;
    } else {
      let mut writer = Writer::new(&mut buffer);
      self.write_to(&mut writer)?;
    }
    Ok(String::from_utf8(buffer)?)
  }

  fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> std::io::Result<()> {
    let mut start = BytesStart::new(self.name.as_str());
    for (key, value) in &self.attributes {
      start.push_attribute((key.as_str(), value.as_str()));
    }

    if self.text.is_none() && self.children.is_empty() {
      return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &self.text {
      writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &self.children {
      child.write_to(writer)?;
    }
    writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))
  }
}
