//! Greeting demos backed by [Juniper](https://docs.rs/juniper).
//!
//! Each demo pairs a static GraphQL schema text with a root query object,
//! checks at startup that both describe the same surface, and then executes a
//! fixed list of client queries, printing every response as tab-indented JSON.
//!
//! - [`hello`]: a single `greet` field.
//! - [`greetings`]: `greet`, `greetPerson` and `greetPersonTimeOfDay`, the last
//!   one taking a [`TimeOfDay`] enum argument.
#![warn(missing_docs)]

pub mod context;
pub mod driver;
pub mod greetings;
pub mod hello;
pub mod resolver;
pub mod schema;
pub mod telemetry;
pub mod time_of_day;

#[doc(inline)]
pub use self::{
    context::Context,
    driver::{ClientQuery, DriverError},
    resolver::Greeter,
    schema::{Schema, SchemaError, Signature},
    time_of_day::{Phrases, TimeOfDay},
};
