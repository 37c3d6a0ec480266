pub mod render;
pub mod signature;

pub use render::{Line, Span};
pub use signature::{Argument, Callable, CompositeType, Field, TypeRef};
