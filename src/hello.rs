//! One-field demo greeting the world.

use juniper::graphql_object;

use crate::{
    context::Context,
    driver::ClientQuery,
    resolver::Greeter,
    schema::{self, Schema, SchemaError},
};

/// Schema text of this demo.
pub const SCHEMA: &str = r#"
# Define the schema
schema {
    query: Query
}

# Define the queries for the schema
type Query {
    greet: String!
}
"#;

/// Root query of this demo.
#[derive(Clone, Debug, Default)]
pub struct Query {
    greeter: Greeter,
}

#[graphql_object(context = Context)]
impl Query {
    fn greet(&self) -> String {
        self.greeter.greet()
    }
}

/// Builds the [`Schema`] of this demo.
///
/// # Errors
///
/// If [`SCHEMA`] diverges from [`Query`].
pub fn schema() -> Result<Schema<Query>, SchemaError> {
    schema::build(SCHEMA, Query::default())
}

/// Client queries this demo executes.
pub fn queries() -> Vec<ClientQuery> {
    vec![ClientQuery::new(
        "Greet",
        r#"query Greet {
            greet
        }"#,
    )]
}
