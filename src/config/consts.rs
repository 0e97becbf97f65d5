/// Locale used when an options block does not name one
pub const DEFAULT_LOCALE: &str = "en-US";
/// Largest run a single `<char><count>` token may expand to during decompression
pub const MAX_DECOMPRESSED_RUN: u64 = 1_000_000;
/// Most fraction digits rendered by the decimal number style
pub const DECIMAL_MAX_FRACTION_DIGITS: usize = 3;
/// Fraction digits for currencies without a minor-unit override
pub const DEFAULT_CURRENCY_DIGITS: usize = 2;
/// Number of letters in the Latin alphabet used by the shift ciphers
pub const ALPHABET_LEN: i64 = 26;
/// Sentences kept by the default summarize step
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;
/// Currency used by the default currency step
pub const DEFAULT_CURRENCY: &str = "USD";
