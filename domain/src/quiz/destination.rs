//! Destination value object

use serde::{Deserialize, Serialize};

/// A candidate answer: a city with its clue, fun-fact and trivia text.
///
/// Serialized with the question API's field names (`city`, `fun_fact`), so
/// the same type is used on the wire and in the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// City name; identifies the destination within a question.
    #[serde(rename = "city")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub clues: Vec<String>,
    #[serde(rename = "fun_fact", default)]
    pub fun_facts: Vec<String>,
    #[serde(default)]
    pub trivia: Vec<String>,
}

impl Destination {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: None,
            clues: Vec::new(),
            fun_facts: Vec::new(),
            trivia: Vec::new(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clues.push(clue.into());
        self
    }

    pub fn with_fun_fact(mut self, fact: impl Into<String>) -> Self {
        self.fun_facts.push(fact.into());
        self
    }

    pub fn with_trivia(mut self, trivia: impl Into<String>) -> Self {
        self.trivia.push(trivia.into());
        self
    }

    /// Name with country suffix when known, e.g. `"Paris, France"`.
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
