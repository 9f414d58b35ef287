/// Keys shown ahead of everything else, in this order.
pub const PRIORITY_KEYS: [&str; 5] = ["png", "jpeg", "jpg", "har", "html"];

/// Display order for an object's keys: priority keys first (in `PRIORITY_KEYS`
/// order), then the remaining keys in code-point order.
pub fn ordered_keys<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<&str> = keys.into_iter().collect();
    keys.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    keys
}

fn sort_key(key: &str) -> (usize, &str) {
    let rank = PRIORITY_KEYS
        .iter()
        .position(|special| *special == key)
        .unwrap_or(PRIORITY_KEYS.len());
    (rank, key)
}

#[cfg(test)]
mod tests {
    use super::ordered_keys;

    #[test]
    fn special_keys_lead() {
        assert_eq!(
            ordered_keys(["b", "png", "a", "har"]),
            vec!["png", "har", "a", "b"]
        );
    }

    #[test]
    fn all_priority_keys_keep_their_relative_order() {
        assert_eq!(
            ordered_keys(["html", "zeta", "jpg", "har", "jpeg", "png"]),
            vec!["png", "jpeg", "jpg", "har", "html", "zeta"]
        );
    }

    #[test]
    fn ordinary_keys_use_code_point_order() {
        assert_eq!(ordered_keys(["b", "B", "a", "_"]), vec!["B", "_", "a", "b"]);
    }

    #[test]
    fn empty_input() {
        assert!(ordered_keys(std::iter::empty()).is_empty());
    }
}
