use rand::Rng;
use serde::Serialize;

/// A random 4-bit number and its binary spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FourBitSample {
    /// Four `'0'`/`'1'` characters, most significant bit first.
    pub bits: String,
    /// Base-2 value of `bits`, in `0..=15`.
    pub value: u8,
}

/// Draws four independent uniform bits.
///
/// # Examples
///
/// ```
/// use colorstat_toolkit::bits::random_4bit_binary;
///
/// let sample = random_4bit_binary(&mut rand::rng());
/// assert_eq!(sample.bits.len(), 4);
/// assert_eq!(u8::from_str_radix(&sample.bits, 2).unwrap(), sample.value);
/// ```
pub fn random_4bit_binary<R>(rng: &mut R) -> FourBitSample
where
    R: Rng,
{
    let bits = (0..4)
        .map(|_| if rng.random::<bool>() { '1' } else { '0' })
        .collect::<String>();
    let value = bits
        .chars()
        .fold(0, |acc, bit| (acc << 1) | u8::from(bit == '1'));
    FourBitSample { bits, value }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_bits_and_value_agree() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..256 {
            let sample = random_4bit_binary(&mut rng);
            assert_eq!(sample.bits.len(), 4);
            assert!(sample.bits.chars().all(|c| c == '0' || c == '1'));
            assert_eq!(u8::from_str_radix(&sample.bits, 2).unwrap(), sample.value);
            assert!(sample.value <= 15);
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let a = random_4bit_binary(&mut Pcg32::seed_from_u64(42));
        let b = random_4bit_binary(&mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_covers_full_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut seen = [false; 16];
        for _ in 0..2000 {
            seen[usize::from(random_4bit_binary(&mut rng).value)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
