//! Optional field filter used by list queries.
//!
//! Query strings carry either a concrete value (`?status=accepted`) or the
//! wildcard `all`. Absent parameters deserialize to [`Filter::All`] via
//! `#[serde(default)]`.

use serde::de::{self, Deserializer, IntoDeserializer};
use serde::Deserialize;

/// Matches every value, or only values equal to the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// Returns true when `value` passes the filter.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(selected) => selected == value,
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Filter::All, Filter::Only)
    }
}

impl<'de, T> Deserialize<'de> for Filter<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        let de: de::value::StringDeserializer<de::value::Error> = raw.into_deserializer();
        T::deserialize(de)
            .map(Filter::Only)
            .map_err(|e| de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Colour {
        Red,
        Blue,
    }

    #[derive(Debug, Deserialize)]
    struct Query {
        #[serde(default)]
        colour: Filter<Colour>,
    }

    #[test]
    fn all_matches_everything() {
        let f: Filter<Colour> = Filter::All;
        assert!(f.matches(&Colour::Red));
        assert!(f.matches(&Colour::Blue));
    }

    #[test]
    fn only_matches_selected_value() {
        let f = Filter::Only(Colour::Red);
        assert!(f.matches(&Colour::Red));
        assert!(!f.matches(&Colour::Blue));
    }

    #[test]
    fn deserializes_wildcard_and_values() {
        let q: Query = serde_json::from_str(r#"{"colour": "all"}"#).unwrap();
        assert_eq!(q.colour, Filter::All);

        let q: Query = serde_json::from_str(r#"{"colour": "blue"}"#).unwrap();
        assert_eq!(q.colour, Filter::Only(Colour::Blue));

        let q: Query = serde_json::from_str("{}").unwrap();
        assert_eq!(q.colour, Filter::All);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(serde_json::from_str::<Query>(r#"{"colour": "green"}"#).is_err());
    }
}
