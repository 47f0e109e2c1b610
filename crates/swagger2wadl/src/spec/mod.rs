pub mod error;
pub mod loader;
pub mod model;

pub use error::SpecError;
pub use loader::SpecSource;
pub use model::{ApiDeclaration, ApiEntry, Operation, Parameter, ResponseMessage};
