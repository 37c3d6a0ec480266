use super::SchemaIndex;
use crate::error::MalformedSchemaError;
use crate::model::{Argument, Callable, CompositeType, Field, TypeRef};
use apollo_compiler::Schema;
use apollo_compiler::ast::{FieldDefinition, Type};
use apollo_compiler::schema::{ComponentName, ExtendedType, ObjectType};
use tracing::debug;

pub(super) fn build(schema: &Schema) -> Result<SchemaIndex, MalformedSchemaError> {
    let definition = &schema.schema_definition;

    let query_root = root_object(
        schema,
        "query",
        definition.query.as_ref(),
        MalformedSchemaError::MissingQueryRoot,
    )?;
    let mutation_root = root_object(
        schema,
        "mutation",
        definition.mutation.as_ref(),
        MalformedSchemaError::MissingMutationRoot,
    )?;

    let types = schema
        .types
        .iter()
        .map(|(name, ty)| composite(name.as_str(), ty));
    let queries = query_root.fields.values().map(|f| callable(f));
    let mutations = mutation_root.fields.values().map(|f| callable(f));

    Ok(SchemaIndex::from_parts(types, queries, mutations))
}

fn root_object<'s>(
    schema: &'s Schema,
    operation: &'static str,
    root: Option<&ComponentName>,
    missing: MalformedSchemaError,
) -> Result<&'s ObjectType, MalformedSchemaError> {
    let name = root.ok_or(missing)?.name.as_str();
    debug!("Using `{}` as {} root", name, operation);
    schema
        .get_object(name)
        .map(|obj| &**obj)
        .ok_or_else(|| MalformedSchemaError::RootNotObject {
            operation,
            name: name.to_string(),
        })
}

/// Non-null wrappers are dropped; only list wrapping is kept.
fn type_ref(ty: &Type) -> TypeRef {
    match ty {
        Type::Named(name) | Type::NonNullNamed(name) => TypeRef::named(name.as_str()),
        Type::List(inner) | Type::NonNullList(inner) => TypeRef::list(type_ref(inner)),
    }
}

fn composite(name: &str, ty: &ExtendedType) -> CompositeType {
    let fields = match ty {
        ExtendedType::Object(obj) => obj
            .fields
            .values()
            .map(|f| Field::new(f.name.as_str(), type_ref(&f.ty)))
            .collect(),
        ExtendedType::Interface(iface) => iface
            .fields
            .values()
            .map(|f| Field::new(f.name.as_str(), type_ref(&f.ty)))
            .collect(),
        ExtendedType::InputObject(input) => input
            .fields
            .values()
            .map(|f| Field::new(f.name.as_str(), type_ref(&f.ty)))
            .collect(),
        // Scalars, enums and unions have no fields to show
        _ => Vec::new(),
    };

    CompositeType {
        name: name.to_string(),
        fields,
    }
}

fn callable(field: &FieldDefinition) -> Callable {
    Callable {
        name: field.name.to_string(),
        return_type: type_ref(&field.ty),
        args: field
            .arguments
            .iter()
            .map(|arg| Argument::new(arg.name.as_str(), type_ref(&arg.ty)))
            .collect(),
    }
}
