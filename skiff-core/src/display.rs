//! Display helpers for long identifiers

/// Truncate an address to `<first 4>...<last keep>` for display.
///
/// Inputs short enough to show whole are returned unchanged.
pub fn truncate_address(input: &str, keep: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() > 4 + keep {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - keep..].iter().collect();
        format!("{head}...{tail}")
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_long_address() {
        assert_eq!(
            truncate_address("tnam1qrqh24mk3htevuqkqvsjc7xc3ast2rmghg8hqz2h", 5),
            "tnam...hqz2h"
        );
    }

    #[test]
    fn test_short_input_unchanged() {
        assert_eq!(truncate_address("tnam1abc", 5), "tnam1abc");
    }

    #[test]
    fn test_boundary_length_unchanged() {
        // 4 + keep chars exactly: nothing to elide
        assert_eq!(truncate_address("abcdefghi", 5), "abcdefghi");
    }
}
