//! Serialization for card types: SCREAMING_SNAKE suits, compact card tokens.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Suit::Hearts => "HEARTS",
            Suit::Leaves => "LEAVES",
            Suit::Acorns => "ACORNS",
            Suit::Bells => "BELLS",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "HEARTS" => Ok(Suit::Hearts),
            "LEAVES" => Ok(Suit::Leaves),
            "ACORNS" => Ok(Suit::Acorns),
            "BELLS" => Ok(Suit::Bells),
            _ => Err(serde::de::Error::custom(format!("invalid suit: {s}"))),
        }
    }
}

// Cards serialize as their two-character token ("AH", "7B").
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
