use crate::models::{Flavor, Session};
use std::cmp::Ordering;

/// Returns the flavors in display order without touching the input.
///
/// Flavors with an explicit `flavor_order` come first, ascending. A flavor
/// with any order, even a large one, sorts ahead of every flavor without one.
/// Unordered flavors keep their relative input order.
pub fn sort_flavors(flavors: &[Flavor]) -> Vec<Flavor> {
    let mut sorted = flavors.to_vec();
    sorted.sort_by(compare_flavor_order);
    sorted
}

/// Copy of `session` with its flavors in display order.
pub fn with_sorted_flavors(session: &Session) -> Session {
    Session {
        flavors: sort_flavors(&session.flavors),
        ..session.clone()
    }
}

pub fn compare_flavor_order(a: &Flavor, b: &Flavor) -> Ordering {
    match (a.flavor_order, b.flavor_order) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(flavors: &[Flavor]) -> Vec<&str> {
        flavors
            .iter()
            .map(|flavor| flavor.flavor_name.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn ordered_flavor_moves_ahead_of_unordered() {
        let input = vec![Flavor::named("x", None), Flavor::named("y", Some(1))];
        let sorted = sort_flavors(&input);
        assert_eq!(names(&sorted), ["y", "x"]);
        assert_eq!(sorted[0].flavor_order, Some(1));
        assert_eq!(sorted[1].flavor_order, None);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![
            Flavor::named("c", Some(3)),
            Flavor::named("a", Some(1)),
            Flavor::named("b", Some(2)),
        ];
        let snapshot = input.clone();
        let sorted = sort_flavors(&input);
        assert_eq!(input, snapshot);
        assert_eq!(names(&sorted), ["a", "b", "c"]);
    }

    #[test]
    fn large_order_still_precedes_missing_order() {
        let input = vec![
            Flavor::named("first", None),
            Flavor::named("late", Some(99)),
            Flavor::named("second", None),
            Flavor::named("early", Some(2)),
        ];
        let sorted = sort_flavors(&input);
        assert_eq!(names(&sorted), ["early", "late", "first", "second"]);
    }

    #[test]
    fn duplicate_orders_keep_input_order() {
        let input = vec![
            Flavor::named("a", Some(1)),
            Flavor::named("b", Some(1)),
            Flavor::named("c", Some(1)),
        ];
        assert_eq!(names(&sort_flavors(&input)), ["a", "b", "c"]);
    }

    #[test]
    fn session_copy_gets_sorted_flavors() {
        let at = chrono::Utc::now();
        let session = Session {
            id: "s".to_string(),
            user_id: "u".to_string(),
            created_by: "u".to_string(),
            session_date: at,
            store_name: Some(String::new()),
            mix_name: None,
            creator: None,
            flavors: vec![Flavor::named("b", Some(2)), Flavor::named("a", Some(1))],
            notes: None,
            order_details: None,
            created_at: at,
            updated_at: at,
        };
        let sorted = with_sorted_flavors(&session);
        assert_eq!(names(&sorted.flavors), ["a", "b"]);
        assert_eq!(names(&session.flavors), ["b", "a"]);
        assert_eq!(sorted.store_name.as_deref(), Some(""));
    }

    #[test]
    fn empty_list_sorts_to_empty() {
        assert!(sort_flavors(&[]).is_empty());
    }
}
