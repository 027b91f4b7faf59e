/// Splits `items` into runs of consecutive items sharing the same key.
///
/// Equal keys that are not adjacent end up in separate groups; sort first
/// when a full partition is wanted.
pub fn group_consecutive<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<(K, Vec<T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let k = key(&item);
        match groups.last_mut() {
            Some((current, members)) if *current == k => members.push(item),
            _ => groups.push((k, vec![item])),
        }
    }

    groups
}

/// Sorts the pairs (label first, then value) and groups them by label.
pub fn group_sorted<L, V>(pairs: &[(L, V)]) -> Vec<(L, Vec<(L, V)>)>
where
    L: Ord + Clone,
    V: Ord + Clone,
{
    let mut sorted = pairs.to_vec();
    sorted.sort();
    group_consecutive(sorted, |(label, _)| label.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<(String, i64)> {
        vec![
            ("apple".to_string(), 1),
            ("banana".to_string(), 2),
            ("apple".to_string(), 3),
            ("banana".to_string(), 4),
        ]
    }

    #[test]
    fn test_group_sorted_fruit() {
        let groups = group_sorted(&fruit());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "apple");
        assert_eq!(
            groups[0].1,
            vec![("apple".to_string(), 1), ("apple".to_string(), 3)]
        );
        assert_eq!(groups[1].0, "banana");
        assert_eq!(
            groups[1].1,
            vec![("banana".to_string(), 2), ("banana".to_string(), 4)]
        );
    }

    #[test]
    fn test_unsorted_input_is_not_merged() {
        let groups = group_consecutive(fruit(), |(label, _)| label.clone());
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["apple", "banana", "apple", "banana"]);
    }

    #[test]
    fn test_sort_breaks_label_ties_by_value() {
        let pairs = vec![("a", 3), ("a", 1), ("a", 2)];
        let groups = group_sorted(&pairs);
        assert_eq!(groups, vec![("a", vec![("a", 1), ("a", 2), ("a", 3)])]);
    }

    #[test]
    fn test_empty_input() {
        let pairs: Vec<(String, i64)> = Vec::new();
        assert!(group_sorted(&pairs).is_empty());
    }
}
