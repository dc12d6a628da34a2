use domain::error::{Error, ValidationErrorKind};
use domain::topics_input::TopicsInput;
use url::form_urlencoded;
use utoipa::IntoParams;

const TOPICS_KEY: &str = "topics";

/// The topic selection shared by the stats, trends and wordclouds endpoints.
///
/// Accepted encodings of the `topics` query parameter:
///
/// * `topics=a` for a single topic
/// * `topics=a&topics=b` for several topics
/// * `topics[]=a&topics[]=b` or `topics[0]=a&topics[1]=b`, as sent by common
///   JavaScript query string serializers
///
/// Anything object shaped, such as `topics[key]=a`, is rejected.
#[derive(Debug, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct TopicsParams {
    /// Topic to include. Repeat the parameter to select several topics.
    #[param(example = json!(["climate", "elections"]))]
    topics: Vec<String>,
}

/// Where one `topics` value came from in the query string.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Plain,
    Appended,
    Indexed(usize),
}

impl TopicsParams {
    /// Parses the raw query string of a request.
    pub(crate) fn from_query(raw_query: Option<&str>) -> Result<Self, Error> {
        let input = parse_topics_input(raw_query.unwrap_or_default())?;
        Ok(TopicsParams {
            topics: input.normalize(),
        })
    }

    pub(crate) fn into_topics(self) -> Vec<String> {
        self.topics
    }
}

fn parse_topics_input(raw_query: &str) -> Result<TopicsInput, Error> {
    let mut entries: Vec<(Slot, String)> = Vec::new();

    for (key, value) in form_urlencoded::parse(raw_query.as_bytes()) {
        let Some(suffix) = key.strip_prefix(TOPICS_KEY) else {
            continue;
        };
        let slot = match suffix {
            "" => Slot::Plain,
            "[]" => Slot::Appended,
            _ if suffix.starts_with('[') => suffix
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .and_then(|index| index.parse::<usize>().ok())
                .map(Slot::Indexed)
                .ok_or_else(|| {
                    Error::validation(ValidationErrorKind::MalformedTopics(key.to_string()))
                })?,
            // Some other parameter that merely starts with "topics"
            _ => continue,
        };
        entries.push((slot, value.into_owned()));
    }

    order_indexed_entries(&mut entries);

    if entries.is_empty() {
        return Err(Error::validation(ValidationErrorKind::MissingTopics));
    }

    let is_single = matches!(entries.as_slice(), [(Slot::Plain, _)]);
    let mut values: Vec<String> = entries.into_iter().map(|(_, topic)| topic).collect();

    Ok(if is_single {
        TopicsInput::Single(values.swap_remove(0))
    } else {
        TopicsInput::Multiple(values)
    })
}

/// Sorts the explicitly indexed entries by their index, leaving every other
/// entry where it appeared.
fn order_indexed_entries(entries: &mut [(Slot, String)]) {
    let positions: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, (slot, _))| matches!(slot, Slot::Indexed(_)))
        .map(|(position, _)| position)
        .collect();

    let mut indexed: Vec<(Slot, String)> = positions
        .iter()
        .map(|&position| entries[position].clone())
        .collect();
    indexed.sort_by_key(|(slot, _)| match slot {
        Slot::Indexed(index) => *index,
        _ => usize::MAX,
    });

    for (position, entry) in positions.into_iter().zip(indexed) {
        entries[position] = entry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::error::DomainErrorKind;

    fn topics(raw_query: &str) -> Vec<String> {
        TopicsParams::from_query(Some(raw_query))
            .unwrap()
            .into_topics()
    }

    fn validation_error(raw_query: Option<&str>) -> DomainErrorKind {
        TopicsParams::from_query(raw_query).unwrap_err().error_kind
    }

    #[test]
    fn single_topic() {
        assert_eq!(topics("topics=climate"), vec!["climate"]);
    }

    #[test]
    fn single_topic_parses_as_the_single_shape() {
        assert_eq!(
            parse_topics_input("topics=climate").unwrap(),
            TopicsInput::Single("climate".to_string())
        );
        assert_eq!(
            parse_topics_input("topics[]=climate").unwrap(),
            TopicsInput::Multiple(vec!["climate".to_string()])
        );
    }

    #[test]
    fn repeated_topics_keep_their_order_and_duplicates() {
        assert_eq!(
            topics("topics=b&topics=a&topics=b"),
            vec!["b", "a", "b"]
        );
    }

    #[test]
    fn values_are_percent_decoded() {
        assert_eq!(
            topics("topics=climate%20change&topics=AI+safety"),
            vec!["climate change", "AI safety"]
        );
    }

    #[test]
    fn bracketed_array_forms_are_accepted() {
        assert_eq!(topics("topics[]=a&topics[]=b"), vec!["a", "b"]);
        assert_eq!(topics("topics%5B%5D=a&topics%5B%5D=b"), vec!["a", "b"]);
        assert_eq!(topics("topics[1]=b&topics[0]=a"), vec!["a", "b"]);
    }

    #[test]
    fn empty_values_are_kept() {
        assert_eq!(topics("topics="), vec![""]);
    }

    #[test]
    fn unrelated_parameters_are_ignored() {
        assert_eq!(topics("range=30d&topics=a&topicsx=b"), vec!["a"]);
    }

    #[test]
    fn missing_topics_is_a_validation_error() {
        assert_eq!(
            validation_error(None),
            DomainErrorKind::Validation(ValidationErrorKind::MissingTopics)
        );
        assert_eq!(
            validation_error(Some("range=30d")),
            DomainErrorKind::Validation(ValidationErrorKind::MissingTopics)
        );
    }

    #[test]
    fn object_shaped_topics_are_a_validation_error() {
        assert_eq!(
            validation_error(Some("topics[name]=a")),
            DomainErrorKind::Validation(ValidationErrorKind::MalformedTopics(
                "topics[name]".to_string()
            ))
        );
        assert!(matches!(
            validation_error(Some("topics[0][x]=a")),
            DomainErrorKind::Validation(ValidationErrorKind::MalformedTopics(_))
        ));
    }
}
