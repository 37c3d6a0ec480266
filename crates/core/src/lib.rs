pub mod dispatch;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;

pub use dispatch::{Action, dispatch};
pub use error::{MalformedSchemaError, Result, SchemaError};
pub use index::{Category, SchemaIndex};
pub use model::render::{Line, Span};
pub use model::signature::{Argument, Callable, CompositeType, Field, TypeRef};
