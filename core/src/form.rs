//! `application/x-www-form-urlencoded` body construction.
//!
//! # Design
//! The protocol is flat key/value only (no arrays, no nesting), so the
//! encoder is a single pure function over ordered pairs. Pair order is
//! the caller's responsibility (the client feeds pairs in catalog order),
//! which keeps request bodies byte-for-byte reproducible.

/// Percent-encode each key and value and join them as `key=value` pairs
/// with `&`.
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split an encoded body back into decoded pairs.
    fn decode_pairs(body: &str) -> Vec<(String, String)> {
        body.split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').expect("missing =");
                (
                    urlencoding::decode(key).unwrap().into_owned(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn plain_values_pass_through() {
        let body = encode_pairs(&[("username", "admin"), ("password", "secret")]);
        assert_eq!(body, "username=admin&password=secret");
    }

    #[test]
    fn pair_order_is_preserved() {
        let body = encode_pairs(&[("ucode", "401"), ("date_from", "01-01-2025"), ("date_to", "31-01-2025")]);
        assert_eq!(body, "ucode=401&date_from=01-01-2025&date_to=31-01-2025");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let body = encode_pairs(&[("password", "a&b=c d")]);
        assert_eq!(body, "password=a%26b%3Dc%20d");
    }

    #[test]
    fn reserved_and_non_ascii_values_round_trip() {
        let pairs = [("q", "a&b=c d"), ("name", "Pérez & Söhne"), ("tel", "+94 11 234")];
        let decoded = decode_pairs(&encode_pairs(&pairs));
        for ((key, value), (dk, dv)) in pairs.iter().zip(&decoded) {
            assert_eq!(key, dk);
            assert_eq!(value, dv);
        }
    }

    #[test]
    fn empty_value_is_kept_as_bare_key() {
        assert_eq!(encode_pairs(&[("ucode", "")]), "ucode=");
    }
}
