//! Token <-> id lookup for question tokens.
//!
//! Ids follow Keras `StringLookup` with one OOV bucket and no mask token:
//! id 0 is `[UNK]` and the i-th vocabulary entry gets id `i + 1`.

use std::collections::HashMap;

use crate::error::{VqaError, VqaResult};

pub const UNKNOWN_TOKEN: &str = "[UNK]";
pub const UNKNOWN_ID: i64 = 0;

#[derive(Debug, Clone)]
pub struct Vocabulary {
    // tokens[id] is the token for `id`; tokens[0] is UNKNOWN_TOKEN
    tokens: Vec<String>,
    ids: HashMap<String, i64>,
}

impl Vocabulary {
    /// Builds the lookup from tokens in id order.
    ///
    /// Fails if a token repeats or if the list contains the reserved `[UNK]`
    /// token, the same inputs Keras `StringLookup` refuses.
    pub fn new<I, S>(tokens: I) -> VqaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all_tokens = vec![UNKNOWN_TOKEN.to_string()];
        all_tokens.extend(tokens.into_iter().map(Into::into));

        let mut ids = HashMap::with_capacity(all_tokens.len());
        let mut repeated = Vec::new();
        for (id, token) in all_tokens.iter().enumerate() {
            if ids.insert(token.clone(), id as i64).is_some() && !repeated.contains(token) {
                repeated.push(token.clone());
            }
        }

        if repeated.iter().any(|token| token == UNKNOWN_TOKEN) {
            return Err(VqaError::InvalidVocabulary(format!(
                "reserved OOV token {} found in vocabulary",
                UNKNOWN_TOKEN
            )));
        }
        if !repeated.is_empty() {
            return Err(VqaError::InvalidVocabulary(format!(
                "repeated terms {:?}",
                repeated
            )));
        }

        Ok(Vocabulary {
            tokens: all_tokens,
            ids,
        })
    }

    /// Concatenates the two vocabulary lists stored in the model bundle.
    pub fn from_parts(first: &[String], second: &[String]) -> VqaResult<Self> {
        Self::new(first.iter().chain(second.iter()).cloned())
    }

    pub fn token_to_id(&self, token: &str) -> i64 {
        self.ids.get(token).copied().unwrap_or(UNKNOWN_ID)
    }

    pub fn id_to_token(&self, id: i64) -> Option<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|id| self.tokens.get(id))
            .map(String::as_str)
    }

    pub fn encode<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> Vec<i64> {
        tokens
            .into_iter()
            .map(|token| self.token_to_id(token))
            .collect()
    }

    /// Number of ids, counting the unknown token.
    pub fn vocabulary_size(&self) -> usize {
        self.tokens.len()
    }

    pub fn top_tokens(&self, n: usize) -> &[String] {
        &self.tokens[..n.min(self.tokens.len())]
    }
}
