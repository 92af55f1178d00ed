use graphql_greetings::{greetings, hello, schema, SchemaError};
use pretty_assertions::assert_eq;

fn mismatches(err: SchemaError) -> Vec<String> {
    match err {
        SchemaError::Mismatch { mismatches } => mismatches,
        err => panic!("expected mismatch, got: {err}"),
    }
}

#[test]
fn demo_schemas_match_their_resolvers() {
    assert!(hello::schema().is_ok());
    assert!(greetings::schema().is_ok());
}

#[test]
fn reports_fields_missing_from_text() {
    let err = schema::build(hello::SCHEMA, greetings::Query::default())
        .err()
        .expect("schema text should be rejected");

    assert_eq!(
        mismatches(err),
        [
            "field `Query.greetPerson` is resolved but not declared",
            "field `Query.greetPersonTimeOfDay` is resolved but not declared",
            "enum `TimeOfDay` is resolved but not declared",
        ],
    );
}

#[test]
fn reports_fields_missing_from_resolvers() {
    let err = schema::build(greetings::SCHEMA, hello::Query::default())
        .err()
        .expect("schema text should be rejected");

    assert_eq!(
        mismatches(err),
        [
            "field `Query.greetPerson` is declared but not resolved",
            "field `Query.greetPersonTimeOfDay` is declared but not resolved",
            "enum `TimeOfDay` is declared but not resolved",
        ],
    );
}

#[test]
fn reports_diverging_enum_members() {
    let text = greetings::SCHEMA.replace("EVENING", "EVENING\n    NIGHT");

    let err = schema::build(&text, greetings::Query::default())
        .err()
        .expect("schema text should be rejected");

    assert_eq!(
        mismatches(err),
        ["enum `TimeOfDay` declares {AFTERNOON, EVENING, MORNING, NIGHT} \
          but resolves {AFTERNOON, EVENING, MORNING}"],
    );
}

#[test]
fn reports_diverging_argument_names() {
    let text = greetings::SCHEMA.replace("greetPerson(person:", "greetPerson(name:");

    let err = schema::build(&text, greetings::Query::default())
        .err()
        .expect("schema text should be rejected");

    assert_eq!(
        mismatches(err),
        ["field `Query.greetPerson` is declared as `(name: String!): String!` \
          but resolved as `(person: String!): String!`"],
    );
}

#[test]
fn rejects_malformed_text() {
    let err = schema::build("type Query {", hello::Query::default())
        .err()
        .expect("schema text should be rejected");

    assert!(matches!(err, SchemaError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse schema text"));
}
