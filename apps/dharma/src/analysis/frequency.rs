use std::collections::HashMap;

/// Returns the `n` most frequent items, most frequent first.
/// Equal counts keep the order in which items were first seen.
pub fn most_common<I, S>(items: I, n: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let item = item.into();
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_frequency() {
        let top = most_common(["a", "b", "b", "c", "c", "c"], 10);
        assert_eq!(top, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let top = most_common(["zebra", "apple", "mango", "apple", "zebra"], 10);
        assert_eq!(top, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let top = most_common(["a", "b", "c", "d"], 2);
        assert_eq!(top, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(most_common(Vec::<String>::new(), 5).is_empty());
    }
}
