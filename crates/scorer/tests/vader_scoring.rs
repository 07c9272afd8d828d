use scorer::SentimentScorer;
use shared::domain::{BandKind, Verdict};

fn scorer() -> SentimentScorer {
    SentimentScorer::load().expect("lexicon loads")
}

#[test]
fn love_is_positive_and_lands_in_green_band() {
    let result = scorer().score("I love this!");
    assert_eq!(result.verdict, Verdict::Positive);
    assert!(result.score > 0.0);
    assert_eq!(result.band(), BandKind::Positive);
}

#[test]
fn hate_is_negative() {
    let result = scorer().score("I hate this.");
    assert_eq!(result.verdict, Verdict::Negative);
    assert!(result.score < 0.0);
}

#[test]
fn empty_input_is_neutral_zero() {
    let result = scorer().score("");
    assert_eq!(result.score, 0.0);
    assert_eq!(result.verdict, Verdict::Neutral);
}

#[test]
fn factual_statement_is_neutral_zero() {
    let result = scorer().score("The table is brown.");
    assert_eq!(result.score, 0.0);
    assert_eq!(result.verdict, Verdict::Neutral);
}

#[test]
fn scores_stay_in_range_and_agree_with_verdict() {
    let scorer = scorer();
    let inputs = [
        "",
        "   ",
        "\n\t",
        "VADER is smart, handsome, and funny!!!",
        "The movie was NOT good at all :(",
        "not bad",
        "I really, REALLY hate waiting in line!!!",
        "meh",
        "good good good good good good good good good good good good",
        "terrible horrible awful disgusting worst ever",
    ];

    for text in inputs {
        let result = scorer.score(text);
        assert!(
            (-1.0..=1.0).contains(&result.score),
            "{text:?} scored {}",
            result.score
        );
        let expected = if result.score > 0.0 {
            Verdict::Positive
        } else if result.score < 0.0 {
            Verdict::Negative
        } else {
            Verdict::Neutral
        };
        assert_eq!(result.verdict, expected, "{text:?}");
    }
}

#[test]
fn scoring_is_idempotent() {
    let scorer = scorer();
    for text in ["I love this!", "I hate this.", "", "The table is brown."] {
        assert_eq!(scorer.score(text), scorer.score(text));
    }
}

#[test]
fn whitespace_only_input_is_passed_through() {
    let result = scorer().score("     ");
    assert_eq!(result.verdict, Verdict::Neutral);
}
