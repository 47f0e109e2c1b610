use itertools::Itertools;
use strum::Display;

use crate::{
  spec::ResponseMessage,
  wadl::{Element, RESPONSE, doc, json_representation},
};

pub(crate) const UNAUTHORIZED: u16 = 401;
pub(crate) const NOT_FOUND: u16 = 404;
const FIRST_ERROR_CODE: u16 = 400;

/// How response messages are turned into `response` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ResponsePolicy {
  /// One `response` per message, keeping its text and response model.
  #[default]
  #[strum(to_string = "per-status")]
  PerStatus,
  /// Codes grouped into success and failure responses plus a fixed
  /// `401` (`401 404`) response. Message text and response models are dropped.
  #[strum(to_string = "bucketed")]
  Bucketed,
}

impl ResponsePolicy {
  /// Appends the `response` elements for one operation and returns how many were written.
  pub(crate) fn add_responses(self, parent: &mut Element, messages: &[ResponseMessage]) -> usize {
    match self {
      Self::PerStatus => add_per_status(parent, messages),
      Self::Bucketed => add_bucketed(parent, messages),
    }
  }
}

fn add_per_status(parent: &mut Element, messages: &[ResponseMessage]) -> usize {
  for message in messages {
    let response = parent.push(Element::new(RESPONSE).with_attr("status", message.code.to_string()));

    if let Some(text) = &message.message {
      response.push(doc(text));
    }

    if let Some(model) = &message.response_model {
      response.push(json_representation(Some(model)));
    }
  }
  messages.len()
}

#[derive(Debug, Default)]
struct StatusBuckets {
  success: Vec<u16>,
  failure: Vec<u16>,
  not_found: Vec<u16>,
}

impl StatusBuckets {
  fn from_messages(messages: &[ResponseMessage]) -> Self {
    let mut buckets = Self::default();
    for message in messages {
      match message.code {
        NOT_FOUND => buckets.not_found.push(message.code),
        code if code < FIRST_ERROR_CODE => buckets.success.push(code),
        code => buckets.failure.push(code),
      }
    }
    buckets
  }
}

fn join_codes(codes: &[u16]) -> String {
  codes.iter().join(" ")
}

fn add_bucketed(parent: &mut Element, messages: &[ResponseMessage]) -> usize {
  let buckets = StatusBuckets::from_messages(messages);
  let mut written = 0;

  for codes in [&buckets.success, &buckets.failure] {
    if codes.is_empty() {
      continue;
    }
    let response = parent.push(Element::new(RESPONSE).with_attr("status", join_codes(codes)));
    response.push(json_representation(None));
    written += 1;
  }

  let mut fixed = vec![UNAUTHORIZED];
  if !buckets.not_found.is_empty() {
    fixed.push(NOT_FOUND);
  }
  parent.push(Element::new(RESPONSE).with_attr("status", join_codes(&fixed)));

  written + 1
}
