//! Input validators gating what an adventure may receive next.

use std::fmt;

use crate::adventure::short_type_name;

/// A pluggable validator consulted before input reaches the active adventure.
///
/// `None` is the "no input" value delivered while priming a campaign.
pub trait Challenge<I> {
    /// Returns `true` if `input` is acceptable.
    fn filter(&self, input: Option<&I>) -> bool;

    /// Human-readable name used in errors and logs.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// The default challenge of every campaign: accepts anything, including no
/// input at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<I> Challenge<I> for AcceptAll {
    fn filter(&self, _input: Option<&I>) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accept-all"
    }
}

/// A named challenge backed by a closure.
pub struct Predicate<F> {
    name: String,
    check: F,
}

impl<F> Predicate<F> {
    /// Creates a challenge that accepts input for which `check` returns `true`.
    pub fn new<I>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(Option<&I>) -> bool,
    {
        Self {
            name: name.into(),
            check,
        }
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<I, F> Challenge<I> for Predicate<F>
where
    F: Fn(Option<&I>) -> bool,
{
    fn filter(&self, input: Option<&I>) -> bool {
        (self.check)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all_accepts_missing_and_present_input() {
        assert!(<AcceptAll as Challenge<String>>::filter(&AcceptAll, None));
        assert!(AcceptAll.filter(Some(&"anything".to_owned())));
    }

    #[test]
    fn test_predicate_delegates_to_closure() {
        // Arrange
        let numeric = Predicate::new("numeric", |input: Option<&String>| {
            input.is_some_and(|text| text.parse::<i64>().is_ok())
        });

        // Act / Assert
        assert!(numeric.filter(Some(&"42".to_owned())));
        assert!(!numeric.filter(Some(&"abc".to_owned())));
        assert!(!numeric.filter(None));
        assert_eq!(Challenge::<String>::name(&numeric), "numeric");
    }

    #[test]
    fn test_default_name_is_the_short_type_name() {
        struct OnlyYes;

        impl Challenge<String> for OnlyYes {
            fn filter(&self, input: Option<&String>) -> bool {
                input.is_some_and(|text| text == "yes")
            }
        }

        assert_eq!(OnlyYes.name(), "OnlyYes");
    }

    #[test]
    fn test_predicate_debug_marks_the_hidden_closure() {
        let numeric = Predicate::new("numeric", |input: Option<&String>| input.is_some());

        assert_eq!(format!("{numeric:?}"), "Predicate { name: \"numeric\", .. }");
    }
}
