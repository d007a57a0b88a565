use proptest::prelude::*;
use qr_payload::{EncodeError, Encoder, Mode, ModeEncoder, TableCache};
use std::sync::{Arc, OnceLock};

const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn tables() -> Arc<TableCache> {
    static TABLES: OnceLock<Arc<TableCache>> = OnceLock::new();
    TABLES
        .get_or_init(|| Arc::new(TableCache::builtin()))
        .clone()
}

fn encoder(mode: Mode) -> Encoder {
    Encoder::new(mode, tables())
}

fn alphanumeric_char() -> impl Strategy<Value = char> {
    proptest::sample::select(ALPHANUMERIC.chars().collect::<Vec<_>>())
}

fn kanji_char() -> impl Strategy<Value = char> {
    // Hiragana and level-1 kanji sit in 0x8140-0x9FFC, the last row group in 0xE040-0xEBBF
    prop_oneof![
        (0x3041u32..=0x3093).prop_map(|c| char::from_u32(c).unwrap()),
        proptest::sample::select("亜唖娃阿哀愛挨姶逢葵茜穐悪握渥旭葦芦鯵梓".chars().collect::<Vec<_>>()),
        proptest::sample::select("漾漓祓茗陝鵝".chars().collect::<Vec<_>>()),
    ]
}

fn non_latin1_char() -> impl Strategy<Value = char> {
    (0x100u32..=0x10FFFF).prop_filter_map("not a scalar value", char::from_u32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn numeric_length(text in "[0-9]{0,64}") {
        let n = text.len();
        let tail = [0, 4, 7][n % 3];
        let bits = encoder(Mode::Numeric).encode(&text).unwrap();
        prop_assert_eq!(bits.len(), 10 * (n / 3) + tail);
    }

    #[test]
    fn alphanumeric_length(chars in proptest::collection::vec(alphanumeric_char(), 0..64)) {
        let text: String = chars.iter().collect();
        let n = chars.len();
        let bits = encoder(Mode::Alphanumeric).encode(&text).unwrap();
        prop_assert_eq!(bits.len(), 11 * (n / 2) + 6 * (n % 2));
    }

    #[test]
    fn byte_length(chars in proptest::collection::vec(0u8..=255, 0..64)) {
        let text: String = chars.iter().map(|&b| char::from(b)).collect();
        let bits = encoder(Mode::Byte).encode(&text).unwrap();
        prop_assert_eq!(bits.len(), 8 * chars.len());
        prop_assert_eq!(bits.as_bytes(), &chars[..]);
    }

    #[test]
    fn kanji_length(chars in proptest::collection::vec(kanji_char(), 0..32)) {
        let text: String = chars.iter().collect();
        let bits = encoder(Mode::Kanji).encode(&text).unwrap();
        prop_assert_eq!(bits.len(), 13 * chars.len());
    }

    #[test]
    fn numeric_rejects_any_non_digit(prefix in "[0-9]{0,8}", bad in "[^0-9]", suffix in "[0-9]{0,8}") {
        let text = format!("{prefix}{bad}{suffix}");
        let err = encoder(Mode::Numeric).encode(&text).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }

    #[test]
    fn alphanumeric_rejects_lowercase(prefix in "[A-Z0-9]{0,8}", bad in "[a-z]") {
        let text = format!("{prefix}{bad}");
        let err = encoder(Mode::Alphanumeric).encode(&text).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }

    #[test]
    fn byte_rejects_non_latin1(prefix in "[ -~]{0,8}", bad in non_latin1_char()) {
        let text = format!("{prefix}{bad}");
        let err = encoder(Mode::Byte).encode(&text).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }

    #[test]
    fn kanji_rejects_ascii(
        prefix in proptest::collection::vec(kanji_char(), 0..8),
        bad in proptest::char::range('\0', '\x7f'),
    ) {
        let position = prefix.len();
        let text: String = prefix.into_iter().chain(std::iter::once(bad)).collect();
        let err = encoder(Mode::Kanji).encode(&text).unwrap_err();
        prop_assert_eq!(
            err,
            EncodeError::InvalidInput { mode: Mode::Kanji, character: bad, position }
        );
    }

    #[test]
    fn bits_are_deterministic(text in "[0-9A-Z]{0,32}") {
        let encoder = encoder(Mode::Alphanumeric);
        prop_assert_eq!(encoder.encode(&text).unwrap(), encoder.encode(&text).unwrap());
    }
}
