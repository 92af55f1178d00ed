//! Greeting logic shared by every demo schema.

use tracing::trace;

use crate::{
    context::Context,
    time_of_day::{Phrases, TimeOfDay},
};

/// Stateless greeting resolver.
///
/// Holds nothing but the [`Phrases`] table it was given, so it can be
/// exercised without building a schema.
#[derive(Clone, Debug, Default)]
pub struct Greeter {
    phrases: Phrases,
}

impl Greeter {
    /// Creates a [`Greeter`] answering with the given `phrases`.
    pub fn new(phrases: Phrases) -> Self {
        Self { phrases }
    }

    /// Phrases this [`Greeter`] answers with.
    pub fn phrases(&self) -> &Phrases {
        &self.phrases
    }

    /// Greets the world.
    pub fn greet(&self) -> String {
        "Hello, world!".into()
    }

    /// Greets `person`, verbatim.
    pub fn greet_person(&self, person: &str) -> String {
        format!("Hello, {person}!")
    }

    /// Greets `person` with the phrase matching `time_of_day`.
    pub fn greet_person_time_of_day(
        &self,
        context: &Context,
        person: &str,
        time_of_day: TimeOfDay,
    ) -> String {
        trace!(
            operation = context.operation_name(),
            ?time_of_day,
            "greeting person by time of day"
        );
        format!("{}, {person}!", self.phrases.phrase(time_of_day))
    }
}
