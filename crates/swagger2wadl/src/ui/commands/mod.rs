pub mod convert;
pub mod list;

pub use convert::{ConvertConfig, convert};
pub use list::list_resources;
