//! Built-in dialogs offered by the REPL.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, PoisonError};

use wayfarer_core::adventure::Adventure;
use wayfarer_core::challenge::Predicate;
use wayfarer_core::outcome::Outcome;
use wayfarer_core::rng::DeterministicRng;

type Step = Outcome<String, String>;

/// RNG shared by every game a dialog starts, including replays.
pub type SharedRng = Arc<Mutex<dyn DeterministicRng>>;

const GUESS_RANGE: RangeInclusive<u32> = 1..=100;

/// Returns the starting adventure registered under `name`. Dialogs that need
/// randomness draw from `rng`.
#[must_use]
pub fn start(name: &str, rng: &SharedRng) -> Option<Box<dyn Adventure<String, String>>> {
    match name {
        "greet" => Some(Box::new(Greeter::default())),
        "guess" => Some(Box::new(Guess::new(Arc::clone(rng)))),
        _ => None,
    }
}

fn say(text: impl Into<String>) -> Step {
    Outcome::output([text.into()])
}

/// Asks for a name, then passes whatever arrives to [`NameAsker`].
#[derive(Debug, Default)]
pub struct Greeter {
    greeted: bool,
}

impl Adventure<String, String> for Greeter {
    fn resume(&mut self, _input: Option<&String>) -> Step {
        if self.greeted {
            return Outcome::hand_off(NameAsker::default());
        }
        self.greeted = true;
        say("Hello! Say your name.")
    }
}

/// Greets whoever it receives first, then finishes.
#[derive(Debug, Default)]
pub struct NameAsker {
    answered: bool,
}

impl Adventure<String, String> for NameAsker {
    fn resume(&mut self, input: Option<&String>) -> Step {
        if self.answered {
            return Outcome::Finished;
        }
        self.answered = true;
        let name = input.map_or("stranger", |text| text.trim());
        say(format!("Nice to meet you, {name}."))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuessState {
    Opening,
    Guessing,
    Won,
}

/// A number guessing game. Guesses must be whole numbers in range; after a
/// win the player may start over with a fresh secret or stop.
pub struct Guess {
    secret: u32,
    attempts: u32,
    state: GuessState,
    rng: SharedRng,
}

impl Guess {
    /// Creates a game whose secret is drawn from `rng`. A replay draws its
    /// secret from the same generator.
    #[must_use]
    pub fn new(rng: SharedRng) -> Self {
        let secret = rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u32_range(*GUESS_RANGE.start(), *GUESS_RANGE.end());
        Self {
            secret,
            attempts: 0,
            state: GuessState::Opening,
            rng,
        }
    }
}

impl fmt::Debug for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guess")
            .field("attempts", &self.attempts)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn parse_guess(input: Option<&String>) -> Option<u32> {
    input
        .and_then(|text| text.trim().parse().ok())
        .filter(|value| GUESS_RANGE.contains(value))
}

fn is_yes_or_no(input: Option<&String>) -> bool {
    input.is_some_and(|text| matches!(text.trim().to_ascii_lowercase().as_str(), "yes" | "no"))
}

impl Adventure<String, String> for Guess {
    fn resume(&mut self, input: Option<&String>) -> Step {
        match self.state {
            GuessState::Opening => {
                self.state = GuessState::Guessing;
                let in_range =
                    Predicate::new("number between 1 and 100", |input: Option<&String>| {
                        parse_guess(input).is_some()
                    });
                Outcome::challenge_and_output(
                    in_range,
                    ["I'm thinking of a number between 1 and 100.".to_owned()],
                )
            }
            GuessState::Guessing => {
                let Some(guess) = parse_guess(input) else {
                    return say("That's not a number between 1 and 100.");
                };
                self.attempts += 1;
                match guess.cmp(&self.secret) {
                    Ordering::Less => say("Higher."),
                    Ordering::Greater => say("Lower."),
                    Ordering::Equal => {
                        self.state = GuessState::Won;
                        Outcome::challenge_and_output(
                            Predicate::new("yes or no", is_yes_or_no),
                            [format!(
                                "Correct! You needed {} guesses. Play again? (yes/no)",
                                self.attempts
                            )],
                        )
                    }
                }
            }
            GuessState::Won => {
                let again = input.is_some_and(|text| text.trim().eq_ignore_ascii_case("yes"));
                if again {
                    Outcome::hand_off(Guess::new(Arc::clone(&self.rng)))
                } else {
                    Outcome::Finished
                }
            }
        }
    }
}
