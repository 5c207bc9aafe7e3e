use std::{cmp::Ordering, fmt};

/// The site's hand number.
///
/// Two ids are the same hand only when their digits match exactly. Ordering
/// is numeric for any length, so `"9" < "10"`, with the digit string as a
/// tiebreak when only leading zeros differ: `"007" < "7"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandId(String);

impl HandId {
    /// Build from a run of ASCII digits. Anything else is `None`.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits without leading zeros. `"0"` stays `"0"`.
    fn significant(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

impl Ord for HandId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for HandId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One finished hand in hand history text form.
///
/// Only the translator builds these, so `text` always has a single header
/// naming `id` and a single summary section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHandRecord {
    id: HandId,
    text: String,
}

impl CanonicalHandRecord {
    pub(crate) fn new(id: HandId, text: String) -> Self {
        Self { id, text }
    }

    pub fn id(&self) -> &HandId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits_only() {
        assert!(HandId::parse("12345").is_some());
        assert!(HandId::parse("").is_none());
        assert!(HandId::parse("12a").is_none());
        assert!(HandId::parse("-1").is_none());
    }

    #[test]
    fn test_numeric_ordering() {
        let mut ids: Vec<HandId> = ["2", "10", "1", "9"]
            .iter()
            .filter_map(|s| HandId::parse(s))
            .collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(HandId::as_str).collect();
        assert_eq!(vec!["1", "2", "9", "10"], sorted);
    }

    #[test]
    fn test_longer_than_u64() {
        let big = HandId::parse("123456789012345678901234567890").unwrap();
        let small = HandId::parse("99999999999999999999").unwrap();
        assert!(small < big);
    }

    #[test]
    fn test_leading_zeros_are_distinct() {
        let a = HandId::parse("007").unwrap();
        let b = HandId::parse("7").unwrap();
        assert_ne!(a, b);
        assert_eq!("007", a.to_string());
        assert!(a < b);
        assert!(b < HandId::parse("08").unwrap());
        assert_ne!(HandId::parse("0").unwrap(), HandId::parse("000").unwrap());
    }
}
