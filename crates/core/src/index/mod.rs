mod builder;

use crate::dispatch::DIRECTIVES;
use crate::error::{MalformedSchemaError, Result, SchemaError};
use crate::model::{Callable, CompositeType};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Which lookup table an identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Type,
    Query,
    Mutation,
    Directive,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Type => "type",
            Category::Query => "query",
            Category::Mutation => "mutation",
            Category::Directive => "directive",
        };
        f.write_str(s)
    }
}

/// Read-only view over a validated schema: types, queries and mutations by
/// name.
///
/// Entries are kept in the schema's declaration order; listings sort on
/// demand.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    types: IndexMap<String, CompositeType>,
    queries: IndexMap<String, Callable>,
    mutations: IndexMap<String, Callable>,
}

impl SchemaIndex {
    /// Indexes a parsed schema, checking that both operation roots exist.
    pub fn build(
        schema: &apollo_compiler::Schema,
    ) -> std::result::Result<Self, MalformedSchemaError> {
        let index = builder::build(schema)?;
        info!(
            "Schema indexed. Types: {}, Queries: {}, Mutations: {}",
            index.types.len(),
            index.queries.len(),
            index.mutations.len()
        );
        Ok(index)
    }

    /// Parses, indexes and validates SDL text. `path` only labels diagnostics.
    ///
    /// Missing roots are reported as [`MalformedSchemaError`] before the
    /// remaining validation runs.
    pub fn from_sdl(source: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let schema = apollo_compiler::Schema::parse(source, path)
            .map_err(|err| SchemaError::Parse(err.errors.to_string()))?;
        let index = Self::build(&schema)?;
        schema
            .validate()
            .map_err(|err| SchemaError::Parse(err.errors.to_string()))?;
        Ok(index)
    }

    /// Reads a schema file and indexes it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| {
            warn!("Cannot read schema {}: {}", path.display(), source);
            SchemaError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_sdl(source, path)
    }

    /// Assembles an index from already converted entries.
    pub fn from_parts(
        types: impl IntoIterator<Item = CompositeType>,
        queries: impl IntoIterator<Item = Callable>,
        mutations: impl IntoIterator<Item = Callable>,
    ) -> Self {
        Self {
            types: types.into_iter().map(|t| (t.name.clone(), t)).collect(),
            queries: queries.into_iter().map(|c| (c.name.clone(), c)).collect(),
            mutations: mutations.into_iter().map(|c| (c.name.clone(), c)).collect(),
        }
    }

    pub fn lookup_type(&self, name: &str) -> Option<CompositeType> {
        self.types.get(name).cloned()
    }

    pub fn lookup_query(&self, name: &str) -> Option<Callable> {
        self.queries.get(name).cloned()
    }

    pub fn lookup_mutation(&self, name: &str) -> Option<Callable> {
        self.mutations.get(name).cloned()
    }

    pub fn type_names(&self) -> Vec<&str> {
        sorted_keys(&self.types)
    }

    pub fn query_names(&self) -> Vec<&str> {
        sorted_keys(&self.queries)
    }

    pub fn mutation_names(&self) -> Vec<&str> {
        sorted_keys(&self.mutations)
    }

    /// Every name a user can type, directives included.
    pub fn all_identifiers(&self) -> BTreeSet<String> {
        self.types
            .keys()
            .chain(self.queries.keys())
            .chain(self.mutations.keys())
            .cloned()
            .chain(DIRECTIVES.iter().map(|d| d.to_string()))
            .collect()
    }

    /// Category an identifier dispatches to, using the same precedence as
    /// [`crate::dispatch`].
    pub fn category_of(&self, name: &str) -> Option<Category> {
        if self.types.contains_key(name) {
            Some(Category::Type)
        } else if self.queries.contains_key(name) {
            Some(Category::Query)
        } else if self.mutations.contains_key(name) {
            Some(Category::Mutation)
        } else if DIRECTIVES.contains(&name) {
            Some(Category::Directive)
        } else {
            None
        }
    }
}

fn sorted_keys<V>(map: &IndexMap<String, V>) -> Vec<&str> {
    let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
