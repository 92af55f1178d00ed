//! Sequential execution of hardcoded client queries.

use std::io::Write;

use derive_more::{Display, Error};
use juniper::{
    http::{GraphQLRequest, GraphQLResponse},
    DefaultScalarValue, ExecutionError, GraphQLError, GraphQLType, InputValue, Value,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use crate::{context::Context, schema::Schema};

/// Indentation of every printed response.
const INDENT: &[u8] = b"\t";

/// Client query fixed at compile time.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientQuery {
    /// Name of the operation to execute in [`ClientQuery::query`].
    pub operation_name: &'static str,

    /// GraphQL query document.
    pub query: &'static str,

    /// Variables object to execute the operation with.
    pub variables: Option<InputValue>,
}

impl ClientQuery {
    /// Creates a [`ClientQuery`] without variables.
    pub fn new(operation_name: &'static str, query: &'static str) -> Self {
        Self {
            operation_name,
            query,
            variables: None,
        }
    }

    /// Sets the variables object of this [`ClientQuery`].
    #[must_use]
    pub fn with_variables(mut self, variables: InputValue) -> Self {
        self.variables = Some(variables);
        self
    }

    fn to_request(&self) -> GraphQLRequest {
        GraphQLRequest::new(
            self.query.into(),
            Some(self.operation_name.into()),
            self.variables.clone(),
        )
    }
}

/// Error of printing query responses.
#[derive(Debug, Display, Error)]
pub enum DriverError {
    /// Response could not be serialized or written out.
    #[display("failed to write `{operation_name}` response: {source}")]
    Serialize {
        /// Operation whose response failed.
        operation_name: String,

        /// Underlying serialization or I/O error.
        source: serde_json::Error,
    },
}

/// Executes a single `query` against the `schema`.
pub fn execute<Q>(schema: &Schema<Q>, query: &ClientQuery) -> GraphQLResponse
where
    Q: GraphQLType<DefaultScalarValue, Context = Context, TypeInfo = ()>,
{
    let ctx = Context::new(Some(query.operation_name));
    let request = query.to_request();
    let result = juniper::execute_sync(
        &request.query,
        request.operation_name.as_deref(),
        schema,
        &request.variables(),
        &ctx,
    );
    Outcome::of(&result).log(query.operation_name);
    GraphQLResponse::from_result(result)
}

type ExecutionResult = Result<(Value, Vec<ExecutionError<DefaultScalarValue>>), GraphQLError>;

/// Result of executing a query, as far as logging is concerned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    /// Executed without errors.
    Executed,

    /// Executed, but the response carries this many field errors.
    FieldErrors(usize),

    /// Rejected before execution (parsing, validation, variable coercion).
    Rejected,
}

impl Outcome {
    fn of(result: &ExecutionResult) -> Self {
        match result {
            Ok((_, errors)) if errors.is_empty() => Self::Executed,
            Ok((_, errors)) => Self::FieldErrors(errors.len()),
            Err(_) => Self::Rejected,
        }
    }

    fn log(self, operation: &str) {
        match self {
            Self::Executed => info!(operation, "executed query"),
            Self::FieldErrors(errors) => warn!(operation, errors, "query executed with errors"),
            Self::Rejected => warn!(operation, "query rejected before execution"),
        }
    }
}

/// Executes `queries` one after another, writing each response to `out` as
/// tab-indented JSON followed by a newline.
///
/// A response is fully written and flushed before the next query runs.
///
/// # Errors
///
/// Stops at the first response that fails to serialize or to be written.
pub fn run<Q, W>(
    schema: &Schema<Q>,
    queries: &[ClientQuery],
    mut out: W,
) -> Result<(), DriverError>
where
    Q: GraphQLType<DefaultScalarValue, Context = Context, TypeInfo = ()>,
    W: Write,
{
    for query in queries {
        let response = execute(schema, query);
        write_json(&response, &mut out).map_err(|source| DriverError::Serialize {
            operation_name: query.operation_name.into(),
            source,
        })?;
    }
    Ok(())
}

/// Writes `value` to `out` as tab-indented JSON, followed by a newline.
///
/// # Errors
///
/// If `value` fails to serialize or `out` fails to be written.
pub fn write_json<T, W>(value: &T, mut out: W) -> Result<(), serde_json::Error>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    out.write_all(b"\n")
        .and_then(|()| out.flush())
        .map_err(serde_json::Error::io)
}
