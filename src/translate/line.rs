//! Line rules.
//!
//! A log line is cleaned with [`clean_line`], sorted into a [`ParsedLine`]
//! by [`classify_line`], and rendered back into hand history text. The
//! individual rules are public so each one can be checked on its own.
use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::core::{format_cards, parse_card_run, Card};

const COSMETIC_PREFIX: &str = r"\[B\]\s?";
const BANNERS: [&str; 3] = ["CPokers Hand", "Button is in", "Log Version"];
const RECAPS: [&str; 2] = ["SummaryTotal", "Board"];
const HERO_DEAL: &str = "Dealt";
const SHOWS: &str = "shows";

static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
static SMALL_BLIND_REGEX: OnceLock<Regex> = OnceLock::new();
static BIG_BLIND_REGEX: OnceLock<Regex> = OnceLock::new();
static WON_REGEX: OnceLock<Regex> = OnceLock::new();

fn prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(COSMETIC_PREFIX).expect("Invalid prefix regex"))
}

fn small_blind_regex() -> &'static Regex {
    SMALL_BLIND_REGEX.get_or_init(|| Regex::new(r"\bposts 1\b").expect("Invalid blind regex"))
}

fn big_blind_regex() -> &'static Regex {
    BIG_BLIND_REGEX.get_or_init(|| Regex::new(r"\bposts 2\b").expect("Invalid blind regex"))
}

fn won_regex() -> &'static Regex {
    WON_REGEX.get_or_init(|| Regex::new(r"won (\d+)").expect("Invalid winnings regex"))
}

/// Betting rounds that reveal board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    /// Match a street label, ignoring case and anything before the last word.
    pub fn from_label(label: &str) -> Option<Self> {
        let word = label.split_whitespace().last()?;
        if word.eq_ignore_ascii_case("flop") {
            Some(Self::Flop)
        } else if word.eq_ignore_ascii_case("turn") {
            Some(Self::Turn)
        } else if word.eq_ignore_ascii_case("river") {
            Some(Self::River)
        } else {
            None
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Street::Flop => "FLOP",
            Street::Turn => "TURN",
            Street::River => "RIVER",
        };
        f.write_str(label)
    }
}

/// What one cleaned log line means for the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Site banners. Dropped.
    Noise,
    /// The site's own pot and board recap. Dropped from the body, the record
    /// builds its own, but any winnings on it still count.
    Recap { winnings: Option<u64> },
    /// The hero's hole cards.
    HeroDeal(Vec<Card>),
    /// A street marker and the cards it revealed.
    Street { street: Street, cards: Vec<Card> },
    /// A showdown reveal.
    Showdown {
        name: String,
        cards: Vec<Card>,
        winnings: Option<u64>,
    },
    /// Anything else, copied into the body as is.
    Action {
        text: String,
        winnings: Option<u64>,
    },
}

impl ParsedLine {
    /// Chips this line awards, if it is a winnings line.
    pub fn winnings(&self) -> Option<u64> {
        match self {
            ParsedLine::Recap { winnings }
            | ParsedLine::Showdown { winnings, .. }
            | ParsedLine::Action { winnings, .. } => *winnings,
            _ => None,
        }
    }

    /// Body text for this line, without the trailing newline.
    ///
    /// `None` for lines that never reach the body. The hero deal is emitted
    /// under the header instead.
    pub fn body_text(&self) -> Option<String> {
        match self {
            ParsedLine::Noise | ParsedLine::Recap { .. } | ParsedLine::HeroDeal(_) => None,
            ParsedLine::Street { street, cards } => {
                Some(format!("*** {} *** [{}]", street, format_cards(cards)))
            }
            ParsedLine::Showdown { name, cards, .. } => {
                Some(format!("{} shows [{}]", name, format_cards(cards)))
            }
            ParsedLine::Action { text, .. } => Some(text.clone()),
        }
    }
}

/// Remove every cosmetic `[B]` marker and trim.
pub fn clean_line(raw: &str) -> String {
    prefix_regex().replace_all(raw, "").trim().to_string()
}

pub fn is_banner(line: &str) -> bool {
    BANNERS.iter().any(|b| line.contains(b))
}

pub fn is_recap(line: &str) -> bool {
    RECAPS.iter().any(|r| line.starts_with(r))
}

/// Hole cards from a `Dealt ... Preflop` line.
///
/// `None` if the line isn't a deal line or the cards can't be read.
pub fn rewrite_hero_deal(line: &str) -> Option<Vec<Card>> {
    let rest = line.strip_prefix(HERO_DEAL)?;
    let rest = rest.replacen("Preflop", "", 1);
    parse_card_run(&rest).ok()
}

/// Street and cards from a `Flop: ...` style line.
pub fn rewrite_street(line: &str) -> Option<(Street, Vec<Card>)> {
    let (label, cards) = line.split_once(':')?;
    let street = Street::from_label(label)?;
    let cards = parse_card_run(&cards.replace(['[', ']'], " ")).ok()?;
    Some((street, cards))
}

/// Player name and shown cards from a showdown line.
///
/// Anything from the first `(` on is the site's hand strength note and is
/// dropped.
pub fn rewrite_showdown(line: &str) -> Option<(String, Vec<Card>)> {
    let (name, rest) = line.split_once(SHOWS)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let cards = rest.split('(').next().unwrap_or_default();
    let cards = cards.trim_start().trim_start_matches(':');
    let cards = parse_card_run(&cards.replace(['[', ']'], " ")).ok()?;
    Some((name.to_string(), cards))
}

/// Rewrite site action wording into hand history wording.
///
/// Each substitution is independent and applies to its first match only.
pub fn normalize_action(line: &str) -> String {
    let line = small_blind_regex().replace(line, "posts small blind 1");
    let line = big_blind_regex().replace(&line, "posts big blind 2");
    let line = line.replacen("collects", "won", 1);
    line.replacen("mucks", " mucks", 1)
}

/// The amount on a `won N from` line.
pub fn winnings_amount(line: &str) -> Option<u64> {
    if !(line.contains("won") && line.contains("from")) {
        return None;
    }
    won_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Sort a cleaned line into its rule. First match wins.
///
/// Deal, street, and showdown lines whose cards can't be read fall back to
/// [`ParsedLine::Action`] holding the line unchanged. Winnings are read off
/// the normalized line before the recap and showdown rules, so a dropped or
/// unreadable line still adds to the pot.
pub fn classify_line(line: &str) -> ParsedLine {
    if is_banner(line) {
        return ParsedLine::Noise;
    }

    if line.starts_with(HERO_DEAL) {
        return match rewrite_hero_deal(line) {
            Some(cards) => ParsedLine::HeroDeal(cards),
            None => ParsedLine::Action {
                text: line.to_string(),
                winnings: None,
            },
        };
    }

    if let Some((street, cards)) = rewrite_street(line) {
        return ParsedLine::Street { street, cards };
    }

    let normalized = normalize_action(line);
    let winnings = winnings_amount(&normalized);

    if is_recap(&normalized) {
        return ParsedLine::Recap { winnings };
    }

    if normalized.contains(SHOWS) {
        return match rewrite_showdown(&normalized) {
            Some((name, cards)) => ParsedLine::Showdown {
                name,
                cards,
                winnings,
            },
            None => ParsedLine::Action {
                text: line.to_string(),
                winnings,
            },
        };
    }

    ParsedLine::Action {
        text: normalized,
        winnings,
    }
}

/// Clean then classify. Handy for callers holding raw log text.
pub fn parse_line(raw: &str) -> ParsedLine {
    classify_line(&clean_line(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_clean_line_strips_every_marker() {
        assert_eq!("P1 folds", clean_line("  [B] P1 folds "));
        assert_eq!("P1 folds", clean_line("[B]P1 folds"));
        assert_eq!("P1 bets 4", clean_line("[B] P1 [B] bets 4"));
    }

    #[test]
    fn test_banners_are_noise() {
        assert_eq!(ParsedLine::Noise, classify_line("CPokers Hand #42"));
        assert_eq!(ParsedLine::Noise, classify_line("Button is in seat 3"));
        assert_eq!(ParsedLine::Noise, classify_line("Log Version 2.1"));
    }

    fn action(text: &str, winnings: Option<u64>) -> ParsedLine {
        ParsedLine::Action {
            text: text.to_string(),
            winnings,
        }
    }

    #[test]
    fn test_recaps_are_dropped() {
        assert_eq!(
            ParsedLine::Recap { winnings: None },
            classify_line("SummaryTotal pot 99")
        );
        assert_eq!(
            ParsedLine::Recap { winnings: None },
            classify_line("Board 2♠ 7♥ 9♦")
        );
        assert_eq!(None, classify_line("Board 2♠ 7♥ 9♦").body_text());
    }

    #[test]
    fn test_recap_keeps_winnings() {
        let parsed = classify_line("Boardwalk collects 30 from pot");
        assert_eq!(ParsedLine::Recap { winnings: Some(30) }, parsed);
        assert_eq!(Some(30), parsed.winnings());
        assert_eq!(None, parsed.body_text());
    }

    #[test]
    fn test_hero_deal() {
        let parsed = classify_line("Dealt ♠A ♠K Preflop");
        assert_eq!(
            ParsedLine::HeroDeal(vec![
                Card::new(Value::Ace, Suit::Spade),
                Card::new(Value::King, Suit::Spade),
            ]),
            parsed
        );
        assert_eq!(None, parsed.body_text());
    }

    #[test]
    fn test_malformed_hero_deal_passes_through() {
        assert_eq!(action("Dealt Preflop", None), classify_line("Dealt Preflop"));
    }

    #[test]
    fn test_street_rewrite() {
        let parsed = classify_line("Flop: 2♠ 7♥ 9♦");
        assert_eq!(
            Some("*** FLOP *** [2s 7h 9d]".to_string()),
            parsed.body_text()
        );
        assert_eq!(
            Some("*** RIVER *** [As]".to_string()),
            classify_line("River: A♠").body_text()
        );
    }

    #[test]
    fn test_street_label_case() {
        assert_eq!(Some(Street::Turn), Street::from_label("TURN"));
        assert_eq!(Some(Street::Flop), Street::from_label("*** flop"));
        assert_eq!(None, Street::from_label("Seat"));
    }

    #[test]
    fn test_blind_posts() {
        assert_eq!("P1 posts small blind 1", normalize_action("P1 posts 1"));
        assert_eq!("P2 posts big blind 2", normalize_action("P2 posts 2"));
        assert_eq!("P2 posts 10", normalize_action("P2 posts 10"));
        assert_eq!("P2 posts 25", normalize_action("P2 posts 25"));
    }

    #[test]
    fn test_collects_and_mucks() {
        assert_eq!(
            "P1 won 30 from pot",
            normalize_action("P1 collects 30 from pot")
        );
        assert_eq!("P2  mucks", normalize_action("P2 mucks"));
    }

    #[test]
    fn test_winnings_amount() {
        assert_eq!(Some(30), winnings_amount("P1 won 30 from pot"));
        assert_eq!(None, winnings_amount("P1 won 30"));
        assert_eq!(None, winnings_amount("P1 bets 30 from the button"));
        assert_eq!(
            Some(20),
            classify_line("P2 collects 20 from pot").winnings()
        );
    }

    #[test]
    fn test_showdown() {
        let parsed = classify_line("Guest10388: shows A♥5♣ (two pair)");
        assert_eq!(
            Some("Guest10388: shows [Ah 5c]".to_string()),
            parsed.body_text()
        );

        let parsed = classify_line("Guest10388:shows: A♥5♣");
        assert_eq!(
            Some("Guest10388: shows [Ah 5c]".to_string()),
            parsed.body_text()
        );
    }

    #[test]
    fn test_malformed_showdown_passes_through() {
        assert_eq!(action("shows A♥5♣", None), classify_line("shows A♥5♣"));
        assert_eq!(
            action("P1 shows nothing", None),
            classify_line("P1 shows nothing")
        );
    }

    #[test]
    fn test_malformed_showdown_keeps_winnings() {
        let parsed = classify_line("P1 shows and collects 5 from pot");
        assert_eq!(action("P1 shows and collects 5 from pot", Some(5)), parsed);
        assert_eq!(
            Some("P1 shows and collects 5 from pot".to_string()),
            parsed.body_text()
        );
    }

    #[test]
    fn test_generic_action_passthrough() {
        assert_eq!(action("P3 raises to 8", None), parse_line("[B] P3 raises to 8"));
    }
}
