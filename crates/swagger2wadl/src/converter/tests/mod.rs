mod converter;
mod parameters;
mod support;
