//! Word frequency clouds per topic.
//!
//! Frequencies are stored upstream as a serialized JSON object per topic and
//! are not trusted: values may be strings, negative, or not numbers at all.
//! A blob that can't be read degrades to an empty cloud for that topic only.
use crate::error::Error;
use crate::store::SentimentStore;
use crate::topics_input::distinct_in_order;
use crate::WordFrequencyBlob;
use log::*;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Maximum number of words returned per topic.
pub const MAX_WORDS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WordFrequency {
    pub text: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicWordcloud {
    pub topic: String,
    pub word_freqs: Vec<WordFrequency>,
}

/// Returns the word cloud of every requested topic that has one stored, in
/// first-seen request order.
pub async fn find_by_topics<S>(store: &S, topics: &[String]) -> Result<Vec<TopicWordcloud>, Error>
where
    S: SentimentStore + ?Sized,
{
    if topics.is_empty() {
        return Ok(Vec::new());
    }

    let mut blobs: HashMap<String, WordFrequencyBlob> = store
        .word_frequency_blobs(topics)
        .await?
        .into_iter()
        .map(|blob| (blob.topic_name.clone(), blob))
        .collect();

    Ok(distinct_in_order(topics)
        .into_iter()
        .filter_map(|topic| blobs.remove(&topic))
        .map(reshape)
        .collect())
}

/// Turns one stored blob into the top [`MAX_WORDS`] words by frequency.
pub fn reshape(blob: WordFrequencyBlob) -> TopicWordcloud {
    let word_freqs = match parse_word_freqs(blob.word_freqs.as_deref()) {
        Ok(word_freqs) => word_freqs,
        Err(reason) => {
            warn!(
                "Error processing word frequencies for topic {}: {reason}",
                blob.topic_name
            );
            Vec::new()
        }
    };

    TopicWordcloud {
        topic: blob.topic_name,
        word_freqs,
    }
}

fn parse_word_freqs(raw: Option<&str>) -> Result<Vec<WordFrequency>, String> {
    let raw = raw.ok_or_else(|| "no word frequencies stored".to_string())?;
    let parsed: Value = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    let Value::Object(entries) = parsed else {
        return Err("word frequencies are not a JSON object".to_string());
    };

    let mut word_freqs: Vec<WordFrequency> = entries
        .into_iter()
        .filter_map(|(text, freq)| {
            coerce_frequency(&freq)
                .filter(|value| *value > 0)
                .map(|value| WordFrequency { text, value })
        })
        .collect();

    // Stable, so equally frequent words keep their stored order
    word_freqs.sort_by(|a, b| b.value.cmp(&a.value));
    word_freqs.truncate(MAX_WORDS);

    Ok(word_freqs)
}

/// Coerces a stored frequency to an integer. Numbers pass through (fractions
/// truncated), strings are read leniently by [`parse_leading_int`], anything
/// else has no frequency.
///
/// Frequencies are whole counts, so a fractional weight below 1 such as `0.5`
/// truncates to 0 and the word is dropped by the positive filter.
fn coerce_frequency(freq: &Value) -> Option<i64> {
    match freq {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64)),
        Value::String(text) => parse_leading_int(text),
        _ => None,
    }
}

/// Reads the base 10 integer at the start of `text`, after any leading
/// whitespace and an optional sign: `" 12px"` is 12, `"abc"` is `None`.
/// Digit runs too long for an `i64` saturate instead of being discarded.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }
    // Only an overflow can fail here
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);

    Some(if negative { -magnitude } else { magnitude })
}
