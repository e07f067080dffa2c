use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 9;

pub const LEAVE_PREFIX: &str = "LRQ-";
pub const MATERIAL_PREFIX: &str = "MAT-";

/// Generate `<prefix><9 upper-case base-36 characters>`
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::rng();
    let mut id = String::with_capacity(prefix.len() + SUFFIX_LEN);
    id.push_str(prefix);

    for _ in 0..SUFFIX_LEN {
        let idx = rng.random_range(0..ALPHABET.len());
        id.push(ALPHABET[idx] as char);
    }

    id
}

/// Generate an id that `is_taken` does not already claim.
/// Re-draws on collision.
pub fn generate_unique_id<F>(prefix: &str, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id = generate_id(prefix);
        if !is_taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id(LEAVE_PREFIX);

        assert!(id.starts_with("LRQ-"));
        assert_eq!(id.len(), 4 + 9);
        assert!(id[4..]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_id_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id(MATERIAL_PREFIX)).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_unique_id_redraws_on_collision() {
        let calls = Cell::new(0);

        // First two candidates are reported as taken
        let id = generate_unique_id(MATERIAL_PREFIX, |_| {
            calls.set(calls.get() + 1);
            calls.get() <= 2
        });

        assert_eq!(calls.get(), 3);
        assert!(id.starts_with("MAT-"));
    }
}
