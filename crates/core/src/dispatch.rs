use crate::index::SchemaIndex;
use crate::model::{Callable, CompositeType, Line};
use tracing::debug;

pub const LIST_TYPES: &str = ".types";
pub const LIST_QUERIES: &str = ".queries";
pub const LIST_MUTATIONS: &str = ".mutations";

/// Literal listing commands understood by [`dispatch`].
pub const DIRECTIVES: [&str; 3] = [LIST_TYPES, LIST_QUERIES, LIST_MUTATIONS];

/// What a single line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<'a> {
    ShowType(CompositeType),
    ShowQuery(Callable),
    ShowMutation(Callable),
    ListTypes(Vec<&'a str>),
    ListQueries(Vec<&'a str>),
    ListMutations(Vec<&'a str>),
    NoMatch,
}

/// Resolves trimmed input against the index.
///
/// Types win over queries, queries over mutations, and schema names over the
/// listing directives.
pub fn dispatch<'a>(input: &str, index: &'a SchemaIndex) -> Action<'a> {
    let action = if let Some(ty) = index.lookup_type(input) {
        Action::ShowType(ty)
    } else if let Some(query) = index.lookup_query(input) {
        Action::ShowQuery(query)
    } else if let Some(mutation) = index.lookup_mutation(input) {
        Action::ShowMutation(mutation)
    } else {
        match input {
            LIST_TYPES => Action::ListTypes(index.type_names()),
            LIST_QUERIES => Action::ListQueries(index.query_names()),
            LIST_MUTATIONS => Action::ListMutations(index.mutation_names()),
            _ => Action::NoMatch,
        }
    };
    debug!("Dispatched {:?} to {}", input, action.kind());
    action
}

impl Action<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::ShowType(_) => "ShowType",
            Action::ShowQuery(_) => "ShowQuery",
            Action::ShowMutation(_) => "ShowMutation",
            Action::ListTypes(_) => "ListTypes",
            Action::ListQueries(_) => "ListQueries",
            Action::ListMutations(_) => "ListMutations",
            Action::NoMatch => "NoMatch",
        }
    }

    /// Lines to print for this action; empty for [`Action::NoMatch`].
    pub fn render(&self) -> Vec<Line> {
        match self {
            Action::ShowType(ty) => ty.render(),
            Action::ShowQuery(callable) | Action::ShowMutation(callable) => callable.render(),
            Action::ListTypes(names)
            | Action::ListQueries(names)
            | Action::ListMutations(names) => {
                names.iter().map(|name| Line::new().name(*name)).collect()
            }
            Action::NoMatch => Vec::new(),
        }
    }
}
