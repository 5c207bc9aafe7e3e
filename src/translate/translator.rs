use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::core::{format_cards, Card};

use super::{
    line::{clean_line, classify_line, ParsedLine},
    CanonicalHandRecord, HandId, TranslateError, TranslatorConfig,
};

const HERO_MARKER: &str = "Dealt";
const COMPLETION_MARKERS: [&str; 3] = ["Summary", "collects", "won"];

static HAND_ID_REGEX: OnceLock<Regex> = OnceLock::new();
static PLAYED_AT_REGEX: OnceLock<Regex> = OnceLock::new();

fn hand_id_regex() -> &'static Regex {
    HAND_ID_REGEX.get_or_init(|| Regex::new(r"Hand #(\d+)").expect("Invalid hand id regex"))
}

fn played_at_regex() -> &'static Regex {
    PLAYED_AT_REGEX
        .get_or_init(|| Regex::new(r"Played at ([\d\-T:Z.]+)").expect("Invalid timestamp regex"))
}

/// Turns one rendered hand view into a hand history record.
///
/// Translation is pure: the same view and fallback time always produce the
/// same record.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use hh_translate::translate::{HandTranslator, TranslatorConfig};
///
/// let translator = HandTranslator::new(TranslatorConfig::with_hero("Guest10388"));
/// let lines = [
///     "Hand #77 Played at 2024-05-01T10:00:00.000Z",
///     "Dealt A♠K♠ Preflop",
///     "P1 posts 1",
///     "P1 collects 3 from pot",
/// ];
/// let raw = lines.join("\n");
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
///
/// let record = translator.translate_at(&raw, lines, now).unwrap();
/// assert_eq!("77", record.id().as_str());
/// assert!(record.text().contains("Dealt to Guest10388 [As Ks]"));
/// assert!(record.text().contains("Total pot 3 | Rake 0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandTranslator {
    config: TranslatorConfig,
}

impl HandTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate using the current time when the view has no timestamp.
    pub fn translate<I, S>(
        &self,
        raw_text: &str,
        lines: I,
    ) -> Result<CanonicalHandRecord, TranslateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.translate_at(raw_text, lines, Utc::now())
    }

    /// Translate a hand view.
    ///
    /// `raw_text` is the flattened text of the whole view and is only used to
    /// decide whether the hand is ready and to find its number and time.
    /// `lines` are the individual log lines, in order. `now` stands in for
    /// the hand's time when the view doesn't show one.
    #[instrument(level = "trace", skip_all)]
    pub fn translate_at<I, S>(
        &self,
        raw_text: &str,
        lines: I,
        now: DateTime<Utc>,
    ) -> Result<CanonicalHandRecord, TranslateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = check_ready(raw_text)?;
        let timestamp = played_at_regex()
            .captures(raw_text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));

        let mut transcript = HandTranscript::new(format!(
            "{} Hand #{}: {} - {}\n",
            self.config.room_label, id, self.config.stakes, timestamp
        ));

        for raw in lines {
            let line = clean_line(raw.as_ref());
            let parsed = classify_line(&line);
            trace!(?parsed, "Classified line");
            transcript.push(parsed);
        }

        let text = transcript.finish(&self.config.hero_name);
        debug!(%id, "Translated hand");
        Ok(CanonicalHandRecord::new(id, text))
    }
}

/// Run the rejection checks in order and return the hand number.
fn check_ready(raw_text: &str) -> Result<HandId, TranslateError> {
    if !raw_text.contains(HERO_MARKER) {
        return Err(TranslateError::NotHeroHandOrIncomplete);
    }

    let id = hand_id_regex()
        .captures(raw_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| HandId::parse(m.as_str()))
        .ok_or(TranslateError::MissingId)?;

    if !COMPLETION_MARKERS.iter().any(|m| raw_text.contains(m)) {
        return Err(TranslateError::HandIncomplete);
    }

    Ok(id)
}

/// Working state while walking the lines of one hand.
#[derive(Debug)]
struct HandTranscript {
    header: String,
    hole_cards: Option<Vec<Card>>,
    body: String,
    board: Vec<Card>,
    total_pot: u64,
}

impl HandTranscript {
    fn new(header: String) -> Self {
        Self {
            header,
            hole_cards: None,
            body: String::new(),
            board: Vec::new(),
            total_pot: 0,
        }
    }

    fn push(&mut self, parsed: ParsedLine) {
        if let Some(amount) = parsed.winnings() {
            self.total_pot = self.total_pot.saturating_add(amount);
        }

        match &parsed {
            ParsedLine::HeroDeal(cards) => {
                self.hole_cards = Some(cards.clone());
                return;
            }
            ParsedLine::Street { cards, .. } => {
                for card in cards {
                    if !self.board.contains(card) {
                        self.board.push(*card);
                    }
                }
            }
            _ => {}
        }

        if let Some(text) = parsed.body_text() {
            self.body.push_str(&text);
            self.body.push('\n');
        }
    }

    fn finish(self, hero_name: &str) -> String {
        let mut text = self.header;
        if let Some(cards) = &self.hole_cards {
            text.push_str(&format!(
                "Dealt to {} [{}]\n",
                hero_name,
                format_cards(cards)
            ));
        }
        text.push_str(&self.body);
        text.push_str("*** SUMMARY ***\n");
        text.push_str(&format!("Total pot {} | Rake 0\n", self.total_pot));
        if !self.board.is_empty() {
            text.push_str(&format!("Board [{}]\n", format_cards(&self.board)));
        }
        text.push('\n');
        text
    }
}
