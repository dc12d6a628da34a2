use std::str::FromStr;

/// Sentiment label assigned to a comment by the upstream classifier.
///
/// Labels are stored as plain text, so values outside of these three can
/// appear in the data. Those fail to parse and are treated as unrecognized.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SentimentParseError;

impl FromStr for Sentiment {
    type Err = SentimentParseError;

    fn from_str(label: &str) -> Result<Sentiment, Self::Err> {
        match label {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(SentimentParseError),
        }
    }
}
