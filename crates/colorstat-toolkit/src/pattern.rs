/// Marks every position that ends a run of three `'1'`s.
///
/// The output has one character per input character: position `i` is `'1'`
/// when `i >= 2` and the input at `i - 2..=i` reads `"111"`, otherwise `'0'`.
/// Inputs shorter than three characters produce all zeros.
///
/// # Examples
///
/// ```
/// use colorstat_toolkit::pattern::sliding_triple_ones;
///
/// assert_eq!(sliding_triple_ones("0111011"), "0011000");
/// assert_eq!(sliding_triple_ones("11"), "00");
/// ```
#[must_use]
pub fn sliding_triple_ones(bits: &str) -> String {
    let chars = bits.chars().collect::<Vec<_>>();
    (0..chars.len())
        .map(|i| {
            if i >= 2 && chars[i - 2..=i] == ['1'; 3] {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_and_short() {
        assert_eq!(sliding_triple_ones(""), "");
        assert_eq!(sliding_triple_ones("1"), "0");
        assert_eq!(sliding_triple_ones("11"), "00");
    }

    #[test]
    fn test_overlapping_runs() {
        assert_eq!(sliding_triple_ones("11111"), "00111");
    }

    #[test]
    fn test_long_input() {
        assert_eq!(
            sliding_triple_ones("0101101011101011011101101000111"),
            "0000000000100000000100000000001"
        );
    }

    proptest! {
        #[test]
        fn prop_output_matches_input_length(bits in "[01]{0,64}") {
            let out = sliding_triple_ones(&bits);
            prop_assert_eq!(out.len(), bits.len());
            prop_assert!(out.starts_with(&"00"[..bits.len().min(2)]));
        }
    }
}
