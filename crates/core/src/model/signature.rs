use super::render::{Line, Span};
use std::cmp::Ordering;
use std::fmt;

/// A possibly list-wrapped reference to a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Direct reference (e.g., `User`)
    Named(String),

    /// List of an element type (e.g., `[User]`)
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Helper to create a Named type
    pub fn named(s: impl Into<String>) -> Self {
        TypeRef::Named(s.into())
    }

    /// Helper to create a List type
    pub fn list(element: TypeRef) -> Self {
        TypeRef::List(Box::new(element))
    }

    /// Innermost named type, unwrapping every list level.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) => inner.base_name(),
        }
    }

    /// Only one list level is shown: `[[Int]]` renders as `[Int]`.
    pub fn spans(&self) -> Vec<Span> {
        match self {
            TypeRef::Named(name) => vec![Span::Type(name.clone())],
            TypeRef::List(inner) => vec![
                Span::Plain("[".to_string()),
                Span::Type(inner.base_name().to_string()),
                Span::Plain("]".to_string()),
            ],
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{}]", inner.base_name()),
        }
    }
}

pub fn render_type_ref(type_ref: &TypeRef) -> String {
    type_ref.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn render(&self) -> Line {
        Line::new()
            .name(self.name.clone())
            .plain(": ")
            .extend(self.ty.spans())
    }
}

pub fn compare_fields(a: &Field, b: &Field) -> Ordering {
    a.name.cmp(&b.name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub ty: TypeRef,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn render(&self) -> Line {
        Line::new()
            .name(self.name.clone())
            .plain(": ")
            .extend(self.ty.spans())
    }
}

/// An object, interface or input type together with its fields in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeType {
    pub name: String,
    pub fields: Vec<Field>,
}

impl CompositeType {
    pub fn sorted_fields(&self) -> Vec<&Field> {
        let mut fields: Vec<&Field> = self.fields.iter().collect();
        fields.sort_by(|a, b| compare_fields(a, b));
        fields
    }

    /// One line per field, ordered by field name.
    pub fn render(&self) -> Vec<Line> {
        self.sorted_fields().into_iter().map(Field::render).collect()
    }
}

/// A query or mutation entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub name: String,
    pub return_type: TypeRef,
    pub args: Vec<Argument>,
}

impl Callable {
    /// Renders `name (`, the arguments in declared order, then `) -> Return`.
    pub fn render(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(self.args.len() + 2);
        lines.push(Line::new().name(self.name.clone()).plain(" ("));
        for arg in &self.args {
            lines.push(Line::new().plain("  ").extend(arg.render().spans().to_vec()));
        }
        lines.push(Line::new().plain(") -> ").extend(self.return_type.spans()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_rendering() {
        assert_eq!(render_type_ref(&TypeRef::named("User")), "User");
        assert_eq!(render_type_ref(&TypeRef::list(TypeRef::named("User"))), "[User]");
    }

    #[test]
    fn nested_list_shows_single_bracket_level() {
        let nested = TypeRef::list(TypeRef::list(TypeRef::named("Int")));
        assert_eq!(render_type_ref(&nested), "[Int]");
        assert_eq!(nested.base_name(), "Int");
    }

    #[test]
    fn list_spans_mark_only_the_element_as_type() {
        let spans = TypeRef::list(TypeRef::named("Post")).spans();
        assert_eq!(
            spans,
            vec![
                Span::Plain("[".to_string()),
                Span::Type("Post".to_string()),
                Span::Plain("]".to_string()),
            ]
        );
    }

    #[test]
    fn field_and_argument_render_alike() {
        let field = Field::new("tags", TypeRef::list(TypeRef::named("String")));
        let arg = Argument::new("tags", TypeRef::list(TypeRef::named("String")));
        assert_eq!(field.render().to_string(), "tags: [String]");
        assert_eq!(field.render(), arg.render());
    }

    #[test]
    fn fields_sort_case_sensitively() {
        let ty = CompositeType {
            name: "Thing".to_string(),
            fields: vec![
                Field::new("name", TypeRef::named("String")),
                Field::new("ID", TypeRef::named("ID")),
                Field::new("age", TypeRef::named("Int")),
            ],
        };
        let rendered: Vec<String> = ty.render().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["ID: ID", "age: Int", "name: String"]);
        // declaration order is left untouched
        assert_eq!(ty.fields[0].name, "name");
    }

    #[test]
    fn callable_keeps_argument_order() {
        let callable = Callable {
            name: "search".to_string(),
            return_type: TypeRef::list(TypeRef::named("Result")),
            args: vec![
                Argument::new("term", TypeRef::named("String")),
                Argument::new("limit", TypeRef::named("Int")),
            ],
        };
        let rendered: Vec<String> = callable.render().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["search (", "  term: String", "  limit: Int", ") -> [Result]"]
        );
    }

    #[test]
    fn callable_without_arguments() {
        let callable = Callable {
            name: "me".to_string(),
            return_type: TypeRef::named("User"),
            args: vec![],
        };
        let rendered: Vec<String> = callable.render().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["me (", ") -> User"]);
    }
}
