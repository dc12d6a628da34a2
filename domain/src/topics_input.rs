//! Normalization of the `topics` selection sent by dashboard clients.
//!
//! Clients send either a single topic or a list of topics. Both shapes are
//! accepted and flattened into one ordered list before anything reaches the
//! query layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicsInput {
    Single(String),
    Multiple(Vec<String>),
}

impl TopicsInput {
    /// Flattens the input into an ordered list of topic names, keeping the
    /// caller's order and any duplicates.
    pub fn normalize(self) -> Vec<String> {
        match self {
            TopicsInput::Single(topic) => vec![topic],
            TopicsInput::Multiple(topics) => topics,
        }
    }
}

/// Returns the distinct topics of `topics` in first-seen order.
pub fn distinct_in_order(topics: &[String]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(topics.len());
    for topic in topics {
        if !distinct.contains(topic) {
            distinct.push(topic.clone());
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_topic_becomes_a_one_element_list() {
        assert_eq!(
            TopicsInput::Single("climate".to_string()).normalize(),
            vec!["climate".to_string()]
        );
    }

    #[test]
    fn multiple_topics_keep_their_order_and_duplicates() {
        let input = TopicsInput::Multiple(vec!["b".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(
            input.normalize(),
            vec!["b".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn distinct_in_order_drops_later_duplicates() {
        let topics = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(
            distinct_in_order(&topics),
            vec!["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }
}
