//! Three-field demo greeting people by name and time of day.

use juniper::{graphql_input_value, graphql_object};
use tracing::warn;

use crate::{
    context::Context,
    driver::ClientQuery,
    resolver::Greeter,
    schema::{self, Schema, SchemaError},
    time_of_day::TimeOfDay,
};

/// Schema text of this demo.
pub const SCHEMA: &str = r#"
schema {
    query: Query
}

type Query {
    greet: String!
    greetPerson(person: String!): String!
    greetPersonTimeOfDay(person: String!, timeOfDay: TimeOfDay!): String!
}

# Enumerate times of day:
enum TimeOfDay {
    MORNING
    AFTERNOON
    EVENING
}
"#;

/// Root query of this demo.
#[derive(Clone, Debug, Default)]
pub struct Query {
    greeter: Greeter,
}

impl Query {
    /// Creates a [`Query`] resolving with the given `greeter`.
    pub fn new(greeter: Greeter) -> Self {
        Self { greeter }
    }
}

#[graphql_object(context = Context)]
impl Query {
    fn greet(&self) -> String {
        self.greeter.greet()
    }

    fn greet_person(&self, person: String) -> String {
        self.greeter.greet_person(&person)
    }

    fn greet_person_time_of_day(
        &self,
        context: &Context,
        person: String,
        time_of_day: TimeOfDay,
    ) -> String {
        self.greeter
            .greet_person_time_of_day(context, &person, time_of_day)
    }
}

/// Builds the [`Schema`] of this demo.
///
/// # Errors
///
/// If [`SCHEMA`] diverges from [`Query`].
pub fn schema() -> Result<Schema<Query>, SchemaError> {
    schema_with(Query::default())
}

/// Builds the [`Schema`] of this demo around the given `query` root.
///
/// A phrase table lacking some [`TimeOfDay`] member is accepted, but logged,
/// as such members are greeted with the fallback phrase.
///
/// # Errors
///
/// If [`SCHEMA`] diverges from [`Query`].
pub fn schema_with(query: Query) -> Result<Schema<Query>, SchemaError> {
    let phrases = query.greeter.phrases();
    if !phrases.is_complete() {
        let missing = TimeOfDay::ALL
            .into_iter()
            .filter(|t| !phrases.contains(*t))
            .collect::<Vec<_>>();
        warn!(?missing, "phrase table does not cover every time of day");
    }
    schema::build(SCHEMA, query)
}

/// Client queries this demo executes, in order.
pub fn queries() -> Vec<ClientQuery> {
    vec![
        ClientQuery::new(
            "Greet",
            r#"query Greet {
                greet
            }"#,
        ),
        ClientQuery::new(
            "GreetPerson",
            r#"query GreetPerson($person: String!) {
                greetPerson(person: $person)
            }"#,
        )
        .with_variables(graphql_input_value!({"person": "Robinson"})),
        ClientQuery::new(
            "GreetPersonTimeOfDay",
            r#"query GreetPersonTimeOfDay($person: String!, $timeOfDay: TimeOfDay!) {
                greetPersonTimeOfDay(person: $person, timeOfDay: $timeOfDay)
            }"#,
        )
        .with_variables(graphql_input_value!({
            "person": "Robinson",
            "timeOfDay": "MORNING"
        })),
    ]
}
