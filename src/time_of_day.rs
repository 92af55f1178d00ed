//! [`TimeOfDay`] enum and the phrases greeting each of its members.

use std::collections::HashMap;

use juniper::GraphQLEnum;

/// Phrase used when a [`Phrases`] table has no entry for a [`TimeOfDay`].
pub const FALLBACK_PHRASE: &str = "Go to bed";

/// Times of day a person can be greeted at.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, Hash, PartialEq)]
pub enum TimeOfDay {
    /// `MORNING`
    Morning,
    /// `AFTERNOON`
    Afternoon,
    /// `EVENING`
    Evening,
}

impl TimeOfDay {
    /// All members, in declaration order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];
}

/// Read-only mapping from [`TimeOfDay`] to a greeting phrase.
///
/// [`Phrases::default()`] covers every member. Tables built with
/// [`FromIterator`] may leave members out, in which case [`Phrases::phrase()`]
/// silently answers with [`FALLBACK_PHRASE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrases(HashMap<TimeOfDay, &'static str>);

impl Default for Phrases {
    fn default() -> Self {
        [
            (TimeOfDay::Morning, "Good morning"),
            (TimeOfDay::Afternoon, "Good afternoon"),
            (TimeOfDay::Evening, "Good evening"),
        ]
        .into_iter()
        .collect()
    }
}

impl FromIterator<(TimeOfDay, &'static str)> for Phrases {
    fn from_iter<I: IntoIterator<Item = (TimeOfDay, &'static str)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Phrases {
    /// Returns the phrase for `time_of_day`, or [`FALLBACK_PHRASE`].
    pub fn phrase(&self, time_of_day: TimeOfDay) -> &'static str {
        self.0.get(&time_of_day).copied().unwrap_or(FALLBACK_PHRASE)
    }

    /// Indicates whether `time_of_day` has its own phrase.
    pub fn contains(&self, time_of_day: TimeOfDay) -> bool {
        self.0.contains_key(&time_of_day)
    }

    /// Indicates whether every [`TimeOfDay`] member has its own phrase.
    pub fn is_complete(&self) -> bool {
        TimeOfDay::ALL.into_iter().all(|t| self.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::{Phrases, TimeOfDay, FALLBACK_PHRASE};

    #[test]
    fn default_table_covers_every_member() {
        let phrases = Phrases::default();

        assert!(phrases.is_complete());
        assert_eq!(phrases.phrase(TimeOfDay::Morning), "Good morning");
        assert_eq!(phrases.phrase(TimeOfDay::Afternoon), "Good afternoon");
        assert_eq!(phrases.phrase(TimeOfDay::Evening), "Good evening");
    }

    #[test]
    fn missing_member_falls_back() {
        let phrases: Phrases = [(TimeOfDay::Morning, "Rise and shine")]
            .into_iter()
            .collect();

        assert!(!phrases.is_complete());
        assert!(phrases.contains(TimeOfDay::Morning));
        assert!(!phrases.contains(TimeOfDay::Evening));
        assert_eq!(phrases.phrase(TimeOfDay::Morning), "Rise and shine");
        assert_eq!(phrases.phrase(TimeOfDay::Evening), FALLBACK_PHRASE);
    }

    #[test]
    fn empty_table_always_falls_back() {
        let phrases = Phrases::from_iter([]);

        for t in TimeOfDay::ALL {
            assert_eq!(phrases.phrase(t), "Go to bed");
        }
    }
}
