//! Building [`Schema`]s and checking them against their schema text.
//!
//! Juniper derives a schema from Rust code, while each demo also ships the
//! schema as GraphQL SDL text. [`build()`] reduces both to a [`Signature`] and
//! refuses to hand out a [`Schema`] unless they agree.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use derive_more::{Display, Error, From};
use graphql_parser::schema::{self as sdl, Definition, TypeDefinition};
use itertools::{EitherOrBoth, Itertools as _};
use juniper::{
    DefaultScalarValue, EmptyMutation, EmptySubscription, GraphQLType, IntrospectionFormat,
    RootNode,
};
use serde::Deserialize;
use tracing::debug;

use crate::context::Context;

/// Root query type name assumed when the schema text has no `schema` block.
const DEFAULT_QUERY_TYPE: &str = "Query";

/// Executable schema of a demo with the root query `Q`.
pub type Schema<Q> = RootNode<'static, Q, EmptyMutation<Context>, EmptySubscription<Context>>;

/// Error of building a [`Schema`].
#[derive(Debug, Display, Error, From)]
pub enum SchemaError {
    /// Schema text is not valid GraphQL SDL.
    #[display("failed to parse schema text: {_0}")]
    #[from]
    Parse(sdl::ParseError),

    /// Built schema could not be introspected.
    #[display("failed to introspect schema: {message}")]
    Introspection {
        /// Reason reported by the executor.
        message: String,
    },

    /// Schema text and resolvers describe different surfaces.
    #[display("schema text does not match resolvers: {}", mismatches.iter().join("; "))]
    Mismatch {
        /// Every discrepancy found.
        mismatches: Vec<String>,
    },
}

/// Builds the [`Schema`] resolved by `query`, verifying it against `sdl`.
///
/// # Errors
///
/// If `sdl` doesn't parse, or doesn't declare exactly the types, fields,
/// arguments and enum members `query` resolves.
pub fn build<Q>(sdl: &str, query: Q) -> Result<Schema<Q>, SchemaError>
where
    Q: GraphQLType<DefaultScalarValue, Context = Context, TypeInfo = ()>,
{
    let declared = Signature::parse(sdl)?;
    let schema = Schema::new(query, EmptyMutation::new(), EmptySubscription::new());
    let resolved = Signature::of(&schema)?;

    let mismatches = declared.mismatches(&resolved);
    if !mismatches.is_empty() {
        return Err(SchemaError::Mismatch { mismatches });
    }

    debug!(
        query_type = %resolved.query_type,
        objects = resolved.objects.len(),
        enums = resolved.enums.len(),
        "schema text matches resolvers"
    );
    Ok(schema)
}

/// Comparable description of a schema's object and enum types.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Signature {
    query_type: String,
    objects: BTreeMap<String, BTreeMap<String, FieldSignature>>,
    enums: BTreeMap<String, BTreeSet<String>>,
}

/// Arguments and return type of a single field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldSignature {
    arguments: BTreeMap<String, String>,
    ty: String,
}

impl fmt::Display for FieldSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.arguments.is_empty() {
            let args = self
                .arguments
                .iter()
                .format_with(", ", |(name, ty), f| f(&format_args!("{name}: {ty}")));
            write!(f, "({args})")?;
        }
        write!(f, ": {}", self.ty)
    }
}

impl Signature {
    /// Reads the [`Signature`] declared by the `sdl` schema text.
    ///
    /// # Errors
    ///
    /// If `sdl` is not valid GraphQL SDL.
    pub fn parse(sdl: &str) -> Result<Self, SchemaError> {
        let doc = sdl::parse_schema::<String>(sdl)?;

        let mut sig = Self {
            query_type: DEFAULT_QUERY_TYPE.into(),
            ..Self::default()
        };
        for def in doc.definitions {
            match def {
                Definition::SchemaDefinition(s) => {
                    if let Some(query) = s.query {
                        sig.query_type = query;
                    }
                }
                Definition::TypeDefinition(TypeDefinition::Object(o)) => {
                    let fields = o
                        .fields
                        .into_iter()
                        .map(|f| {
                            let arguments = f
                                .arguments
                                .into_iter()
                                .map(|a| (a.name, a.value_type.to_string()))
                                .collect();
                            let ty = f.field_type.to_string();
                            (f.name, FieldSignature { arguments, ty })
                        })
                        .collect();
                    sig.objects.insert(o.name, fields);
                }
                Definition::TypeDefinition(TypeDefinition::Enum(e)) => {
                    let members = e.values.into_iter().map(|v| v.name).collect();
                    sig.enums.insert(e.name, members);
                }
                _ => {}
            }
        }
        Ok(sig)
    }

    /// Reads the [`Signature`] of the built `schema` through introspection.
    ///
    /// # Errors
    ///
    /// If the introspection query fails or returns an unexpected shape.
    pub fn of<Q>(schema: &Schema<Q>) -> Result<Self, SchemaError>
    where
        Q: GraphQLType<DefaultScalarValue, Context = Context, TypeInfo = ()>,
    {
        let ctx = Context::new(Some("Signature"));
        let (data, errors) =
            juniper::introspect(schema, &ctx, IntrospectionFormat::WithoutDescriptions).map_err(
                |e| SchemaError::Introspection {
                    message: e.to_string(),
                },
            )?;
        if !errors.is_empty() {
            return Err(SchemaError::Introspection {
                message: errors.iter().map(|e| e.error().message()).join("; "),
            });
        }

        let Introspection { schema } = serde_json::to_value(&data)
            .and_then(serde_json::from_value)
            .map_err(|e| SchemaError::Introspection {
                message: e.to_string(),
            })?;

        let mut sig = Self {
            query_type: schema.query_type.name,
            ..Self::default()
        };
        for ty in schema.types {
            let Some(name) = ty.name.filter(|n| !n.starts_with('_')) else {
                continue;
            };
            match ty.kind.as_str() {
                "OBJECT" => {
                    let fields = ty
                        .fields
                        .unwrap_or_default()
                        .into_iter()
                        .map(|f| {
                            let arguments = f
                                .args
                                .into_iter()
                                .map(|a| (a.name, a.ty.render()))
                                .collect();
                            let ty = f.ty.render();
                            (f.name, FieldSignature { arguments, ty })
                        })
                        .collect();
                    sig.objects.insert(name, fields);
                }
                "ENUM" => {
                    let members = ty
                        .enum_values
                        .unwrap_or_default()
                        .into_iter()
                        .map(|v| v.name)
                        .collect();
                    sig.enums.insert(name, members);
                }
                _ => {}
            }
        }
        Ok(sig)
    }

    /// Name of the root query type.
    pub fn query_type(&self) -> &str {
        &self.query_type
    }

    /// Lists how `resolved` deviates from this declared [`Signature`].
    ///
    /// Empty if both describe the same surface.
    pub fn mismatches(&self, resolved: &Self) -> Vec<String> {
        let mut out = vec![];

        if self.query_type != resolved.query_type {
            out.push(format!(
                "root query type is `{}` in schema text but `{}` in resolvers",
                self.query_type, resolved.query_type,
            ));
        }

        for entry in self.objects.iter().merge_join_by(&resolved.objects, |l, r| l.0.cmp(r.0)) {
            match entry {
                EitherOrBoth::Left((name, _)) => {
                    out.push(format!("type `{name}` is declared but not resolved"));
                }
                EitherOrBoth::Right((name, _)) => {
                    out.push(format!("type `{name}` is resolved but not declared"));
                }
                EitherOrBoth::Both((name, d), (_, r)) => {
                    out.extend(field_mismatches(name, d, r));
                }
            }
        }

        for entry in self.enums.iter().merge_join_by(&resolved.enums, |l, r| l.0.cmp(r.0)) {
            match entry {
                EitherOrBoth::Left((name, _)) => {
                    out.push(format!("enum `{name}` is declared but not resolved"));
                }
                EitherOrBoth::Right((name, _)) => {
                    out.push(format!("enum `{name}` is resolved but not declared"));
                }
                EitherOrBoth::Both((name, d), (_, r)) if d != r => {
                    out.push(format!(
                        "enum `{name}` declares {{{}}} but resolves {{{}}}",
                        d.iter().join(", "),
                        r.iter().join(", "),
                    ));
                }
                EitherOrBoth::Both(..) => {}
            }
        }

        out
    }
}

fn field_mismatches(
    type_name: &str,
    declared: &BTreeMap<String, FieldSignature>,
    resolved: &BTreeMap<String, FieldSignature>,
) -> Vec<String> {
    declared
        .iter()
        .merge_join_by(resolved, |l, r| l.0.cmp(r.0))
        .filter_map(|entry| match entry {
            EitherOrBoth::Left((name, _)) => Some(format!(
                "field `{type_name}.{name}` is declared but not resolved",
            )),
            EitherOrBoth::Right((name, _)) => Some(format!(
                "field `{type_name}.{name}` is resolved but not declared",
            )),
            EitherOrBoth::Both((name, d), (_, r)) => (d != r).then(|| {
                format!("field `{type_name}.{name}` is declared as `{d}` but resolved as `{r}`")
            }),
        })
        .collect()
}

#[derive(Deserialize)]
struct Introspection {
    #[serde(rename = "__schema")]
    schema: IntrospectedSchema,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectedSchema {
    query_type: Named,
    types: Vec<IntrospectedType>,
}

#[derive(Deserialize)]
struct Named {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectedType {
    kind: String,
    name: Option<String>,
    fields: Option<Vec<IntrospectedField>>,
    enum_values: Option<Vec<Named>>,
}

#[derive(Deserialize)]
struct IntrospectedField {
    name: String,
    args: Vec<IntrospectedArgument>,
    #[serde(rename = "type")]
    ty: TypeRef,
}

#[derive(Deserialize)]
struct IntrospectedArgument {
    name: String,
    #[serde(rename = "type")]
    ty: TypeRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeRef {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Renders this reference the way SDL spells it, e.g. `[String!]!`.
    fn render(&self) -> String {
        let inner = || self.of_type.as_deref().map(Self::render).unwrap_or_default();
        match self.kind.as_str() {
            "NON_NULL" => format!("{}!", inner()),
            "LIST" => format!("[{}]", inner()),
            _ => self.name.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use juniper::graphql_object;
    use pretty_assertions::assert_eq;

    use crate::context::Context;

    use super::{build, SchemaError, Signature};

    struct Query;

    #[graphql_object(context = Context)]
    impl Query {
        fn echo(text: String, times: Option<i32>) -> Vec<String> {
            vec![text; times.unwrap_or(1).max(0) as usize]
        }
    }

    struct Grid;

    #[graphql_object(context = Context)]
    impl Grid {
        fn cells() -> Vec<Vec<String>> {
            vec![vec!["x".into()]]
        }

        fn layers(depth: Option<Vec<Option<Vec<i32>>>>) -> Vec<Vec<Vec<Option<String>>>> {
            let _ = depth;
            vec![]
        }
    }

    const MATCHING: &str = r#"
        schema { query: Query }

        type Query {
            echo(times: Int, text: String!): [String!]!
        }
    "#;

    fn rejection(sdl: &str) -> SchemaError {
        build(sdl, Query)
            .err()
            .expect("schema text should be rejected")
    }

    #[test]
    fn builds_from_matching_text() {
        let schema = build(MATCHING, Query).expect("schema should build");

        let sig = Signature::of(&schema).unwrap();

        assert_eq!(sig, Signature::parse(MATCHING).unwrap());
        assert_eq!(sig.query_type(), "Query");
    }

    #[test]
    fn builds_with_nested_lists() {
        let sdl = r#"
            schema { query: Grid }

            type Grid {
                cells: [[String!]!]!
                layers(depth: [[Int!]]): [[[String]!]!]!
            }
        "#;

        let schema = build(sdl, Grid).expect("nested lists should match");

        assert_eq!(
            Signature::of(&schema).unwrap(),
            Signature::parse(sdl).unwrap(),
        );
    }

    #[test]
    fn assumes_query_root_without_schema_block() {
        let sig = Signature::parse("type Query { echo(text: String!, times: Int): [String!]! }");

        assert_eq!(sig.unwrap(), Signature::parse(MATCHING).unwrap());
    }

    #[test]
    fn rejects_malformed_text() {
        let err = rejection("type Query { echo(");

        assert!(matches!(err, SchemaError::Parse(_)), "unexpected: {err}");
    }

    #[test]
    fn rejects_missing_field() {
        let err =
            rejection("type Query { echo(text: String!, times: Int): [String!]! shout: String! }");

        let SchemaError::Mismatch { mismatches } = &err else {
            panic!("expected mismatch, got: {err}");
        };
        assert_eq!(
            *mismatches,
            ["field `Query.shout` is declared but not resolved"],
        );
    }

    #[test]
    fn rejects_differing_argument_type() {
        let err = rejection("type Query { echo(text: String, times: Int): [String!]! }");

        assert_eq!(
            err.to_string(),
            "schema text does not match resolvers: \
             field `Query.echo` is declared as `(text: String, times: Int): [String!]!` \
             but resolved as `(text: String!, times: Int): [String!]!`",
        );
    }

    #[test]
    fn rejects_differing_list_depth() {
        let err = rejection("type Query { echo(text: String!, times: Int): [[String!]!]! }");

        assert_eq!(
            err.to_string(),
            "schema text does not match resolvers: \
             field `Query.echo` is declared as `(text: String!, times: Int): [[String!]!]!` \
             but resolved as `(text: String!, times: Int): [String!]!`",
        );
    }

    #[test]
    fn rejects_undeclared_root_and_types() {
        let err = rejection(
            "schema { query: Root } type Root { echo(text: String!, times: Int): [String!]! }",
        );

        let SchemaError::Mismatch { mismatches } = &err else {
            panic!("expected mismatch, got: {err}");
        };
        assert_eq!(
            *mismatches,
            [
                "root query type is `Root` in schema text but `Query` in resolvers",
                "type `Query` is resolved but not declared",
                "type `Root` is declared but not resolved",
            ],
        );
    }
}
