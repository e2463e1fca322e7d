use crate::models::{AggregateCount, Session};
use std::collections::HashMap;

/// Counts labels pulled out of each session, most frequent first.
///
/// Ties keep first-seen order. Sessions for which `extract` yields nothing
/// contribute nothing.
pub fn aggregate<'a, F, I>(sessions: &'a [Session], mut extract: F) -> Vec<AggregateCount>
where
    F: FnMut(&'a Session) -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<AggregateCount> = Vec::new();

    for session in sessions {
        for label in extract(session) {
            let label = label.as_ref();
            match slots.get(label) {
                Some(&slot) => counts[slot].count = counts[slot].count.saturating_add(1),
                None => {
                    slots.insert(label.to_string(), counts.len());
                    counts.push(AggregateCount {
                        label: label.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn top(mut counts: Vec<AggregateCount>, limit: usize) -> Vec<AggregateCount> {
    counts.truncate(limit);
    counts
}

/// The flavor at position 1, if the session has one.
pub fn main_flavor(session: &Session) -> Option<&str> {
    session
        .flavors
        .iter()
        .find(|flavor| flavor.flavor_order == Some(1))
        .and_then(|flavor| flavor.flavor_name.as_deref())
}

pub fn all_flavors(session: &Session) -> impl Iterator<Item = &str> + '_ {
    session
        .flavors
        .iter()
        .filter_map(|flavor| flavor.flavor_name.as_deref())
}

pub fn store(session: &Session) -> Option<&str> {
    session.store_name.as_deref()
}

pub fn creator(session: &Session) -> Option<&str> {
    session.creator.as_deref()
}

pub fn order_details(session: &Session) -> Option<&str> {
    session.order_details.as_deref()
}
