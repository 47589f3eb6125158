#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no ANPA priority code for priority level {0}")]
pub struct InvalidPriority(pub u8);

/// Map an article priority level (1 = most urgent) to its ANPA priority letter.
pub fn priority_code(level: u8) -> Result<char, InvalidPriority> {
    match level {
        1 => Ok('f'),
        2 => Ok('u'),
        3 => Ok('b'),
        4..=6 => Ok('r'),
        other => Err(InvalidPriority(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::{priority_code, InvalidPriority};

    #[test]
    fn every_valid_level_has_a_lowercase_code() {
        for level in 1..=6 {
            let code = priority_code(level).unwrap();
            assert!(code.is_ascii_lowercase());
        }
    }

    #[test]
    fn urgent_levels_map_to_distinct_codes() {
        assert_eq!(priority_code(1), Ok('f'));
        assert_eq!(priority_code(2), Ok('u'));
        assert_eq!(priority_code(3), Ok('b'));
        assert_eq!(priority_code(5), Ok('r'));
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        assert_eq!(priority_code(0), Err(InvalidPriority(0)));
        assert_eq!(priority_code(7), Err(InvalidPriority(7)));
    }
}
