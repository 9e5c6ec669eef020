pub mod url {
    use reqwest::Url;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Url, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Url::parse(value.trim())
            .map_err(|err| D::Error::custom(format!("invalid url '{}': {}", value, err)))
    }
}

pub mod secret {
    use std::fmt;

    /// Replaces every character of a secret with `*`.
    pub fn masked(secret: &str) -> String {
        "*".repeat(secret.chars().count())
    }

    pub fn fmt_secret(secret: &String, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&masked(secret))
    }

    pub fn fmt_optional_secret(secret: &Option<String>, f: &mut fmt::Formatter) -> fmt::Result {
        match secret {
            Some(secret) => write!(f, "Some({})", masked(secret)),
            None => f.write_str("None"),
        }
    }
}
