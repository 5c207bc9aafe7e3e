use std::fmt;

use super::CardParseError;

/// Card rank. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// Parse a single rank character.
    ///
    /// The two character `10` rank is handled by [`parse_card_run`], this
    /// only sees the canonical `T`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' | 't' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

/// Card suit.
///
/// Site logs draw suits as glyphs; hand histories want a single lower case
/// letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// Map a suit glyph, filled or outlined, to a suit.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '♠' | '♤' => Some(Self::Spade),
            '♥' | '♡' => Some(Self::Heart),
            '♦' | '♢' => Some(Self::Diamond),
            '♣' | '♧' => Some(Self::Club),
            _ => None,
        }
    }

    /// Map the canonical suit letter to a suit.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Spade),
            'h' => Some(Self::Heart),
            'd' => Some(Self::Diamond),
            'c' => Some(Self::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Diamond => 'd',
            Self::Club => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a free form group of cards as a site log renders them.
///
/// Both rank first (`A♥5♣`, `As Kd`) and suit first (`♠A ♠K`) encodings
/// are accepted, with or without whitespace between cards. Suit letters are
/// only read as suits when they follow a rank, so `s` never starts a card.
///
/// # Examples
/// ```
/// use hh_translate::core::{format_cards, parse_card_run};
///
/// let cards = parse_card_run("♠A ♠K").unwrap();
/// assert_eq!("As Ks", format_cards(&cards));
///
/// let cards = parse_card_run("10♥J♦").unwrap();
/// assert_eq!("Th Jd", format_cards(&cards));
/// ```
pub fn parse_card_run(text: &str) -> Result<Vec<Card>, CardParseError> {
    let mut cards = Vec::new();
    let mut pending_value: Option<Value> = None;
    let mut pending_suit: Option<Suit> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if let Some(suit) = Suit::from_glyph(c) {
            match pending_value.take() {
                Some(value) => cards.push(Card::new(value, suit)),
                None if pending_suit.is_none() => pending_suit = Some(suit),
                None => return Err(CardParseError::DanglingSuit),
            }
            continue;
        }

        if pending_value.is_some() {
            if let Some(suit) = Suit::from_char(c) {
                if let Some(value) = pending_value.take() {
                    cards.push(Card::new(value, suit));
                }
                continue;
            }
        }

        let value = if c == '1' && chars.peek() == Some(&'0') {
            chars.next();
            Some(Value::Ten)
        } else {
            Value::from_char(c)
        };

        match value {
            Some(value) => match pending_suit.take() {
                Some(suit) => cards.push(Card::new(value, suit)),
                None if pending_value.is_none() => pending_value = Some(value),
                None => return Err(CardParseError::DanglingValue),
            },
            None => return Err(CardParseError::UnexpectedChar(c)),
        }
    }

    if pending_value.is_some() {
        return Err(CardParseError::DanglingValue);
    }
    if pending_suit.is_some() {
        return Err(CardParseError::DanglingSuit);
    }
    if cards.is_empty() {
        return Err(CardParseError::Empty);
    }
    Ok(cards)
}

/// Space separated canonical card tokens.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_glyphs() {
        assert_eq!(Some(Suit::Spade), Suit::from_glyph('♠'));
        assert_eq!(Some(Suit::Heart), Suit::from_glyph('♥'));
        assert_eq!(Some(Suit::Diamond), Suit::from_glyph('♦'));
        assert_eq!(Some(Suit::Club), Suit::from_glyph('♣'));
        assert_eq!(Some(Suit::Heart), Suit::from_glyph('♡'));
        assert_eq!(None, Suit::from_glyph('s'));
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Value::Ten, Suit::Diamond);
        assert_eq!("Td", card.to_string());
    }

    #[test]
    fn test_parse_rank_first() {
        let cards = parse_card_run("A♥5♣").unwrap();
        assert_eq!(
            vec![
                Card::new(Value::Ace, Suit::Heart),
                Card::new(Value::Five, Suit::Club)
            ],
            cards
        );
    }

    #[test]
    fn test_parse_suit_first() {
        let cards = parse_card_run("♠A ♠K").unwrap();
        assert_eq!("As Ks", format_cards(&cards));
    }

    #[test]
    fn test_parse_letters() {
        let cards = parse_card_run("As Kd").unwrap();
        assert_eq!("As Kd", format_cards(&cards));
    }

    #[test]
    fn test_parse_ten() {
        let cards = parse_card_run("10♣ T♠").unwrap();
        assert_eq!("Tc Ts", format_cards(&cards));
    }

    #[test]
    fn test_no_glyphs_survive() {
        let text = format_cards(&parse_card_run("2♠ 7♥ 9♦ K♣").unwrap());
        assert_eq!("2s 7h 9d Kc", text);
        assert!(!text.contains(['♠', '♥', '♦', '♣']));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(CardParseError::Empty), parse_card_run("   "));
        assert_eq!(Err(CardParseError::DanglingValue), parse_card_run("A♠ K"));
        assert_eq!(Err(CardParseError::DanglingSuit), parse_card_run("♠"));
        assert_eq!(
            Err(CardParseError::UnexpectedChar('x')),
            parse_card_run("A♠ x")
        );
        assert_eq!(Err(CardParseError::DanglingValue), parse_card_run("AK"));
    }
}
