//! Records returned by the OWS API.
//!
//! Field names on the wire are PascalCase and case-sensitive (`Title`,
//! `StoreID`, `NodeId`, ...). Missing fields fall back to their defaults.
//! Text fields also accept numbers and `null`; ids are signed since the API
//! uses `-1` for "none".

mod category;
mod store;

pub use category::Category;
pub use store::Store;

/// Deserializes a JSON string or number into a `String`.
pub(crate) mod string_or_number {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Number(serde_json::Number),
        Bool(bool),
        Null,
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer) {
            Ok(Raw::String(s)) => Ok(s),
            Ok(Raw::Number(n)) => Ok(n.to_string()),
            Ok(Raw::Bool(b)) => Ok(b.to_string()),
            Ok(Raw::Null) => Ok(String::new()),
            Err(_) => Err(de::Error::custom("expected a string or a number")),
        }
    }
}
