//! Integration tests driving complete dialogs through a campaign.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use wayfarer_campaign::{Campaign, CampaignConfig};
use wayfarer_core::adventure::{Adventure, from_fn};
use wayfarer_core::challenge::Predicate;
use wayfarer_core::error::CampaignError;
use wayfarer_core::outcome::Outcome;
use wayfarer_test_support::FixedClock;

/// Greets on the priming turn, then hands whatever comes next to `NameAsker`.
struct Greeter {
    greeted: bool,
}

impl Adventure<String, String> for Greeter {
    fn resume(&mut self, _input: Option<&String>) -> Outcome<String, String> {
        if self.greeted {
            return Outcome::hand_off(NameAsker);
        }
        self.greeted = true;
        Outcome::output(["Hello! Say your name.".to_owned()])
    }
}

struct NameAsker;

impl Adventure<String, String> for NameAsker {
    fn resume(&mut self, input: Option<&String>) -> Outcome<String, String> {
        let name = input.map_or("stranger", String::as_str);
        Outcome::output([format!("Nice to meet you, {name}.")])
    }
}

fn numeric_adventure() -> impl Adventure<String, String> {
    let mut asked = false;
    from_fn("doubler", move |input: Option<&String>| {
        if !asked {
            asked = true;
            let numeric = Predicate::new("numeric", |input: Option<&String>| {
                input.is_some_and(|text| text.trim().parse::<i64>().is_ok())
            });
            return Outcome::challenge_and_output(numeric, ["Give me a number.".to_owned()]);
        }
        let value: i64 = input.and_then(|text| text.trim().parse().ok()).unwrap_or_default();
        Outcome::output([format!("Twice that is {}.", value * 2)])
    })
}

#[test]
fn test_greeter_hands_name_to_name_asker() {
    // Arrange
    let (mut campaign, greeting) = Campaign::create(Greeter { greeted: false }).unwrap();

    // Act
    let reply = campaign.advance(Some(&"Alice".to_owned())).unwrap();

    // Assert
    assert_eq!(greeting, vec!["Hello! Say your name.".to_owned()]);
    assert_eq!(reply, vec!["Nice to meet you, Alice.".to_owned()]);
    assert_eq!(campaign.adventure().name(), "NameAsker");
}

#[test]
fn test_numeric_challenge_rejects_then_accepts() {
    // Arrange
    let clock = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ));
    let (mut campaign, prompt) = Campaign::create_with(
        Box::new(numeric_adventure()),
        CampaignConfig::default(),
        clock,
    )
    .unwrap();

    // Act
    let rejected = campaign.advance(Some(&"abc".to_owned()));
    let accepted = campaign.advance(Some(&"42".to_owned()));

    // Assert
    assert_eq!(prompt, vec!["Give me a number.".to_owned()]);
    let err = rejected.unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(
        err,
        CampaignError::ChallengeFailed {
            challenge: "numeric".to_owned()
        }
    );
    assert_eq!(accepted.unwrap(), vec!["Twice that is 84.".to_owned()]);
}

#[test]
fn test_caller_can_reprompt_until_input_is_accepted() {
    // Arrange
    let (mut campaign, _) = Campaign::create(numeric_adventure()).unwrap();
    let replies = ["one", "two", "3"];
    let mut reprompts = 0;
    let mut answer = Vec::new();

    // Act
    for reply in replies {
        match campaign.advance(Some(&reply.to_owned())) {
            Ok(output) => {
                answer = output;
                break;
            }
            Err(err) if err.is_recoverable() => reprompts += 1,
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    // Assert
    assert_eq!(reprompts, 2);
    assert_eq!(answer, vec!["Twice that is 6.".to_owned()]);
}

#[test]
fn test_switching_dialog_on_input_content_consumes_that_input() {
    // Arrange
    let router = from_fn("router", |input: Option<&String>| match input.map(String::as_str) {
        None => Outcome::output(["Say hi or ask for a number.".to_owned()]),
        Some("number") => Outcome::hand_off(numeric_adventure()),
        Some(_) => Outcome::hand_off(NameAsker),
    });
    let (mut campaign, _) = Campaign::create(router).unwrap();

    // Act
    let output = campaign.advance(Some(&"number".to_owned())).unwrap();

    // Assert
    assert_eq!(output, vec!["Give me a number.".to_owned()]);
    assert_eq!(campaign.challenge().name(), "numeric");
    assert_eq!(campaign.adventure().name(), "doubler");
}
