//! Geohash encoding by interleaved range bisection.
//!
//! Each character carries five bits. Bits alternate between longitude and
//! latitude, starting with longitude, and every bit records which half of the
//! current range holds the coordinate.

/// The standard geohash base-32 alphabet.
pub const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const BITS_PER_CHAR: u8 = 5;

/// Half-open bisection state for one axis.
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Narrow to the half containing `value` and report whether it was the upper one.
    ///
    /// A value exactly on the midpoint goes to the upper half, so the origin
    /// encodes as `s0000000`.
    fn bisect(&mut self, value: f64) -> bool {
        let mid = (self.min + self.max) / 2.0;
        if value >= mid {
            self.min = mid;
            true
        } else {
            self.max = mid;
            false
        }
    }
}

/// Encode a latitude/longitude pair as a geohash of `precision` characters.
///
/// Inputs are expected inside [-90, 90] and [-180, 180]; values outside
/// saturate to the nearest edge cell. A precision of zero gives an empty
/// string.
///
/// # Examples
///
/// ```rust
/// use polyhash::compute::encode::encode;
///
/// assert_eq!(encode(0.0, 0.0, 8), "s0000000");
/// assert_eq!(encode(57.64911, 10.40744, 11), "u4pruydqqvj");
/// ```
pub fn encode(lat: f64, lng: f64, precision: usize) -> String {
    let mut lat_range = Range {
        min: -90.0,
        max: 90.0,
    };
    let mut lng_range = Range {
        min: -180.0,
        max: 180.0,
    };

    let mut geohash = String::with_capacity(precision);
    let mut is_even_bit = true;
    let mut bits_in_char: u8 = 0;
    let mut char_value: u8 = 0;

    while geohash.len() < precision {
        let upper = if is_even_bit {
            lng_range.bisect(lng)
        } else {
            lat_range.bisect(lat)
        };

        if upper {
            char_value |= 1 << (BITS_PER_CHAR - 1 - bits_in_char);
        }
        is_even_bit = !is_even_bit;

        bits_in_char += 1;
        if bits_in_char == BITS_PER_CHAR {
            geohash.push(GEOHASH_ALPHABET[char_value as usize] as char);
            bits_in_char = 0;
            char_value = 0;
        }
    }

    geohash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(encode(0.0, 0.0, 8), "s0000000");
        assert_eq!(encode(0.0, 0.0, 1), "s");
    }

    #[test]
    fn test_known_locations() {
        // Jutland, the canonical geohash example
        assert_eq!(encode(57.64911, 10.40744, 11), "u4pruydqqvj");
        assert_eq!(encode(40.7128, -74.0060, 6), "dr5reg");
        assert_eq!(encode(51.5074, -0.1278, 5), "gcpvj");
    }

    #[test]
    fn test_corners() {
        assert_eq!(encode(-90.0, -180.0, 4), "0000");
        assert_eq!(encode(90.0, 180.0, 4), "zzzz");
    }

    #[test]
    fn test_length_and_alphabet() {
        for precision in 0..=20 {
            let hash = encode(-33.8688, 151.2093, precision);
            assert_eq!(hash.len(), precision);
            assert!(hash.bytes().all(|b| GEOHASH_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_prefix_property() {
        let long = encode(35.6895, 139.6917, 12);
        for precision in 1..12 {
            assert_eq!(encode(35.6895, 139.6917, precision), long[..precision]);
        }
    }

    #[test]
    fn test_alphabet_skips_ambiguous_letters() {
        for letter in [b'a', b'i', b'l', b'o'] {
            assert!(!GEOHASH_ALPHABET.contains(&letter));
        }
    }
}
