// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Locale-aware number, currency and date rendering.
//!
//! Each supported locale carries its separators, symbol placement, month and weekday
//! names and the four date style patterns. Date patterns use `{weekday}`, `{month}`,
//! `{mon}`, `{d}`, `{dd}`, `{m}`, `{mm}`, `{yyyy}` and `{yy}` placeholders.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{DECIMAL_MAX_FRACTION_DIGITS, DEFAULT_CURRENCY_DIGITS};
use crate::config::{CurrencyFormatOptions, DateFormatOptions, DateStyle, NumberFormatOptions, NumberStyle};
use crate::errors::OperationError;
use crate::traits::TextOperation;

const NBSP: &str = "\u{a0}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    Prefix,
    Suffix,
}

#[derive(Debug)]
pub struct LocaleConventions {
    pub tag: &'static str,
    group: &'static str,
    decimal: &'static str,
    min_grouping_digits: usize,
    percent_suffix: &'static str,
    placement: SymbolPlacement,
    months: [&'static str; 12],
    months_short: [&'static str; 12],
    weekdays: [&'static str; 7],
    date_patterns: [&'static str; 4],
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

static LOCALES: &[LocaleConventions] = &[
    LocaleConventions {
        tag: "en-US",
        group: ",",
        decimal: ".",
        min_grouping_digits: 1,
        percent_suffix: "%",
        placement: SymbolPlacement::Prefix,
        months: EN_MONTHS,
        months_short: EN_MONTHS_SHORT,
        weekdays: EN_WEEKDAYS,
        date_patterns: [
            "{weekday}, {month} {d}, {yyyy}",
            "{month} {d}, {yyyy}",
            "{mon} {d}, {yyyy}",
            "{m}/{d}/{yy}",
        ],
    },
    LocaleConventions {
        tag: "en-GB",
        group: ",",
        decimal: ".",
        min_grouping_digits: 1,
        percent_suffix: "%",
        placement: SymbolPlacement::Prefix,
        months: EN_MONTHS,
        months_short: EN_MONTHS_SHORT,
        weekdays: EN_WEEKDAYS,
        date_patterns: [
            "{weekday} {d} {month} {yyyy}",
            "{d} {month} {yyyy}",
            "{d} {mon} {yyyy}",
            "{dd}/{mm}/{yyyy}",
        ],
    },
    LocaleConventions {
        tag: "de-DE",
        group: ".",
        decimal: ",",
        min_grouping_digits: 1,
        percent_suffix: "\u{a0}%",
        placement: SymbolPlacement::Suffix,
        months: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        months_short: [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
            "Dez.",
        ],
        weekdays: [
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
        ],
        date_patterns: [
            "{weekday}, {d}. {month} {yyyy}",
            "{d}. {month} {yyyy}",
            "{dd}.{mm}.{yyyy}",
            "{dd}.{mm}.{yy}",
        ],
    },
    LocaleConventions {
        tag: "fr-FR",
        group: "\u{202f}",
        decimal: ",",
        min_grouping_digits: 1,
        percent_suffix: "\u{202f}%",
        placement: SymbolPlacement::Suffix,
        months: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        months_short: [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
        weekdays: ["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"],
        date_patterns: [
            "{weekday} {d} {month} {yyyy}",
            "{d} {month} {yyyy}",
            "{d} {mon} {yyyy}",
            "{dd}/{mm}/{yyyy}",
        ],
    },
    LocaleConventions {
        tag: "es-ES",
        group: ".",
        decimal: ",",
        min_grouping_digits: 2,
        percent_suffix: "\u{a0}%",
        placement: SymbolPlacement::Suffix,
        months: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        months_short: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
        ],
        weekdays: ["lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo"],
        date_patterns: [
            "{weekday}, {d} de {month} de {yyyy}",
            "{d} de {month} de {yyyy}",
            "{d} {mon} {yyyy}",
            "{d}/{m}/{yy}",
        ],
    },
];

/// Resolve a locale tag such as `de-DE`, `de_de` or `de` to its conventions.
pub fn resolve_locale(locale: &str) -> Result<&'static LocaleConventions, OperationError> {
    let wanted = locale.trim().replace('_', "-");
    LOCALES
        .iter()
        .find(|conv| {
            conv.tag.eq_ignore_ascii_case(&wanted)
                || conv
                    .tag
                    .split('-')
                    .next()
                    .is_some_and(|language| language.eq_ignore_ascii_case(&wanted))
        })
        .ok_or_else(|| OperationError::UnsupportedLocale(locale.to_string()))
}

/// Parse the leading number of `text` the way `parseFloat` does.
///
/// Leading whitespace, a sign, a fraction, an exponent and `Infinity` are accepted;
/// anything after the numeric prefix is ignored.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    static NUMBER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
    });

    let matched = NUMBER.find(text.trim_start())?.as_str();
    if matched.ends_with("Infinity") {
        return Some(if matched.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    matched.parse::<f64>().ok()
}

fn group_digits(digits: &str, conv: &LocaleConventions) -> String {
    if digits.len() < 3 + conv.min_grouping_digits {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * conv.group.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(conv.group);
        }
        grouped.push(c);
    }
    grouped
}

/// Extra digits inspected when deciding whether a value sits exactly halfway.
const TIE_CHECK_DIGITS: usize = 30;

/// Add one unit in the last place of a non-negative decimal string.
fn increment_last_digit(fixed: &str) -> String {
    let mut bytes = fixed.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Fixed-point rendering of a non-negative `magnitude` with `digits` fraction digits,
/// rounding exact halves away from zero.
///
/// `format!` rounds exact halves to even, so a tie is detected on the wider expansion
/// and bumped up from its truncation.
fn round_half_away_from_zero(magnitude: f64, digits: usize) -> String {
    let wide = format!("{:.*}", digits + TIE_CHECK_DIGITS, magnitude);
    let (kept, dropped) = wide.split_at(wide.len() - TIE_CHECK_DIGITS);
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", digits, magnitude);
    }
    increment_last_digit(kept.trim_end_matches('.'))
}

/// Render the magnitude of `value` with locale separators and between `min_fraction`
/// and `max_fraction` fraction digits. The sign is left to the caller.
fn render_magnitude(value: f64, min_fraction: usize, max_fraction: usize, conv: &LocaleConventions) -> String {
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return "∞".to_string();
    }

    let fixed = round_half_away_from_zero(magnitude, max_fraction);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = frac_part.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let mut rendered = group_digits(int_part, conv);
    if !fraction.is_empty() {
        rendered.push_str(conv.decimal);
        rendered.push_str(&fraction);
    }
    rendered
}

fn sign(value: f64) -> &'static str {
    if value.is_sign_negative() {
        "-"
    } else {
        ""
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "KRW" => Some("₩"),
        "CNY" => Some("CN¥"),
        _ => None,
    }
}

fn currency_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
        _ => DEFAULT_CURRENCY_DIGITS,
    }
}

fn normalize_currency(currency: &str) -> Result<String, OperationError> {
    if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(currency.to_ascii_uppercase())
    } else {
        Err(OperationError::InvalidCurrency(currency.to_string()))
    }
}

/// Render `value` as an amount of `currency` in the given locale.
pub fn render_currency(value: f64, locale: &str, currency: &str) -> Result<String, OperationError> {
    let conv = resolve_locale(locale)?;
    let code = normalize_currency(currency)?;
    let digits = currency_digits(&code);
    let amount = render_magnitude(value, digits, digits, conv);

    let rendered = match (conv.placement, currency_symbol(&code)) {
        (SymbolPlacement::Prefix, Some(symbol)) => format!("{}{}{}", sign(value), symbol, amount),
        (SymbolPlacement::Prefix, None) => format!("{}{}{}{}", sign(value), code, NBSP, amount),
        (SymbolPlacement::Suffix, symbol) => {
            format!("{}{}{}{}", sign(value), amount, NBSP, symbol.unwrap_or(code.as_str()))
        }
    };
    Ok(rendered)
}

/// Render `value` in the given locale and number style.
pub fn render_number(value: f64, locale: &str, style: NumberStyle) -> Result<String, OperationError> {
    let conv = resolve_locale(locale)?;
    match style {
        NumberStyle::Decimal => Ok(format!(
            "{}{}",
            sign(value),
            render_magnitude(value, 0, DECIMAL_MAX_FRACTION_DIGITS, conv)
        )),
        NumberStyle::Percent => Ok(format!(
            "{}{}{}",
            sign(value),
            render_magnitude(value * 100.0, 0, 0, conv),
            conv.percent_suffix
        )),
        NumberStyle::Currency => Err(OperationError::MissingCurrency),
    }
}

/// Format the leading number of `text`; text without one is returned unchanged.
pub fn format_number(text: &str, options: &NumberFormatOptions) -> Result<String, OperationError> {
    let (Some(value), Some(style)) = (parse_leading_number(text), options.style) else {
        return Ok(text.to_string());
    };
    render_number(value, &options.locale, style)
}

/// Format the leading number of `text` as currency; text without one is returned unchanged.
pub fn format_currency(text: &str, options: &CurrencyFormatOptions) -> Result<String, OperationError> {
    let (Some(value), Some(currency)) = (parse_leading_number(text), options.currency.as_deref()) else {
        return Ok(text.to_string());
    };
    render_currency(value, &options.locale, currency)
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
];

/// Parse a calendar date from ISO 8601 / RFC 3339 text or a few common written forms.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok().map(|dt| dt.date()))
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// Render `date` in the locale's pattern for `style`.
pub fn render_date(date: NaiveDate, locale: &str, style: DateStyle) -> Result<String, OperationError> {
    let conv = resolve_locale(locale)?;
    let pattern = match style {
        DateStyle::Full => conv.date_patterns[0],
        DateStyle::Long => conv.date_patterns[1],
        DateStyle::Medium => conv.date_patterns[2],
        DateStyle::Short => conv.date_patterns[3],
    };

    let month = date.month0() as usize;
    let weekday = date.weekday().num_days_from_monday() as usize;
    Ok(pattern
        .replace("{weekday}", conv.weekdays[weekday])
        .replace("{month}", conv.months[month])
        .replace("{mon}", conv.months_short[month])
        .replace("{dd}", &format!("{:02}", date.day()))
        .replace("{d}", &date.day().to_string())
        .replace("{mm}", &format!("{:02}", date.month()))
        .replace("{m}", &date.month().to_string())
        .replace("{yyyy}", &date.year().to_string())
        .replace("{yy}", &format!("{:02}", date.year().rem_euclid(100))))
}

/// Format `text` as a date; text that does not parse as one is returned unchanged.
pub fn format_date(text: &str, options: &DateFormatOptions) -> Result<String, OperationError> {
    let (Some(date), Some(date_options)) = (parse_date(text), options.options.as_ref()) else {
        return Ok(text.to_string());
    };
    render_date(date, &options.locale, date_options.date_style)
}

pub struct FormatNumberOperation {
    options: NumberFormatOptions,
}

impl FormatNumberOperation {
    pub fn new(options: NumberFormatOptions) -> Self {
        Self { options }
    }
}

impl TextOperation for FormatNumberOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        format_number(input, &self.options)
    }

    fn name(&self) -> &'static str {
        "format_number"
    }
}

pub struct FormatDateOperation {
    options: DateFormatOptions,
}

impl FormatDateOperation {
    pub fn new(options: DateFormatOptions) -> Self {
        Self { options }
    }
}

impl TextOperation for FormatDateOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        format_date(input, &self.options)
    }

    fn name(&self) -> &'static str {
        "format_date"
    }
}

pub struct FormatCurrencyOperation {
    options: CurrencyFormatOptions,
}

impl FormatCurrencyOperation {
    pub fn new(options: CurrencyFormatOptions) -> Self {
        Self { options }
    }
}

impl TextOperation for FormatCurrencyOperation {
    fn apply(&self, input: &str) -> Result<String, OperationError> {
        format_currency(input, &self.options)
    }

    fn name(&self) -> &'static str {
        "format_currency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_numbers() {
        assert_eq!(parse_leading_number("42"), Some(42.0));
        assert_eq!(parse_leading_number("  -3.5kg"), Some(-3.5));
        assert_eq!(parse_leading_number("1e3 items"), Some(1000.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("7."), Some(7.0));
        assert_eq!(parse_leading_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_leading_number("abc 42"), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn resolves_locales_loosely() {
        assert_eq!(resolve_locale("de_de").unwrap().tag, "de-DE");
        assert_eq!(resolve_locale("fr").unwrap().tag, "fr-FR");
        assert!(matches!(resolve_locale("xx-YY"), Err(OperationError::UnsupportedLocale(_))));
    }

    #[test]
    fn decimal_style_groups_and_rounds() {
        assert_eq!(render_number(1234567.891, "en-US", NumberStyle::Decimal).unwrap(), "1,234,567.891");
        assert_eq!(render_number(1234.5678, "en-US", NumberStyle::Decimal).unwrap(), "1,234.568");
        assert_eq!(render_number(-42.0, "en-US", NumberStyle::Decimal).unwrap(), "-42");
        assert_eq!(render_number(1234.5, "de-DE", NumberStyle::Decimal).unwrap(), "1.234,5");
    }

    #[test]
    fn spanish_groups_only_from_five_digits() {
        assert_eq!(render_number(1234.0, "es-ES", NumberStyle::Decimal).unwrap(), "1234");
        assert_eq!(render_number(12345.0, "es-ES", NumberStyle::Decimal).unwrap(), "12.345");
    }

    #[test]
    fn percent_style_scales_by_hundred() {
        assert_eq!(render_number(0.256, "en-US", NumberStyle::Percent).unwrap(), "26%");
        assert_eq!(render_number(0.5, "de-DE", NumberStyle::Percent).unwrap(), "50\u{a0}%");
    }

    #[test]
    fn currency_style_without_currency_fails() {
        assert_eq!(
            render_number(1.0, "en-US", NumberStyle::Currency),
            Err(OperationError::MissingCurrency)
        );
    }

    #[test]
    fn renders_currency_per_locale() {
        assert_eq!(render_currency(1234.5, "en-US", "USD").unwrap(), "$1,234.50");
        assert_eq!(render_currency(-5.0, "en-US", "usd").unwrap(), "-$5.00");
        assert_eq!(render_currency(1234.5, "de-DE", "EUR").unwrap(), "1.234,50\u{a0}€");
        assert_eq!(render_currency(1234.5, "en-US", "JPY").unwrap(), "¥1,235");
        assert_eq!(render_currency(10.0, "en-US", "CHF").unwrap(), "CHF\u{a0}10.00");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(render_currency(0.125, "en-US", "USD").unwrap(), "$0.13");
        assert_eq!(render_currency(-0.125, "en-US", "USD").unwrap(), "-$0.13");
        assert_eq!(render_currency(2.5, "en-US", "JPY").unwrap(), "¥3");
        assert_eq!(render_currency(9.995, "en-US", "USD").unwrap(), "$9.99");
        assert_eq!(render_currency(99.5, "en-US", "JPY").unwrap(), "¥100");
        assert_eq!(render_number(0.0625, "en-US", NumberStyle::Decimal).unwrap(), "0.063");
        assert_eq!(render_number(0.0005, "en-US", NumberStyle::Decimal).unwrap(), "0.001");
    }

    #[test]
    fn values_just_below_a_half_round_down() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(render_currency(1.005, "en-US", "USD").unwrap(), "$1.00");
    }

    #[test]
    fn increments_carry_through_nines() {
        assert_eq!(increment_last_digit("0.12"), "0.13");
        assert_eq!(increment_last_digit("9.99"), "10.00");
        assert_eq!(increment_last_digit("99"), "100");
    }

    #[test]
    fn rejects_malformed_currency_codes() {
        assert!(matches!(
            render_currency(1.0, "en-US", "DOLLARS"),
            Err(OperationError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn non_numeric_text_is_left_alone() {
        let options = NumberFormatOptions::new("xx-XX", NumberStyle::Decimal);
        // The locale is never consulted because nothing parses.
        assert_eq!(format_number("hello", &options).unwrap(), "hello");

        let currency = CurrencyFormatOptions::new("en-US", "USD");
        assert_eq!(format_currency("price: 5", &currency).unwrap(), "price: 5");
        assert_eq!(format_currency("5 dollars", &currency).unwrap(), "$5.00");
    }

    #[test]
    fn parses_common_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00Z"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_date("01/15/2024"), Some(expected));
        assert_eq!(parse_date("January 15, 2024"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn renders_date_styles() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(render_date(date, "en-US", DateStyle::Full).unwrap(), "Monday, January 15, 2024");
        assert_eq!(render_date(date, "en-US", DateStyle::Long).unwrap(), "January 15, 2024");
        assert_eq!(render_date(date, "en-US", DateStyle::Medium).unwrap(), "Jan 15, 2024");
        assert_eq!(render_date(date, "en-US", DateStyle::Short).unwrap(), "1/15/24");
        assert_eq!(render_date(date, "de-DE", DateStyle::Full).unwrap(), "Montag, 15. Januar 2024");
        assert_eq!(render_date(date, "fr-FR", DateStyle::Long).unwrap(), "15 janvier 2024");
        assert_eq!(render_date(date, "en-GB", DateStyle::Short).unwrap(), "15/01/2024");
        assert_eq!(
            render_date(date, "es-ES", DateStyle::Full).unwrap(),
            "lunes, 15 de enero de 2024"
        );
    }

    #[test]
    fn format_date_leaves_unparseable_text() {
        let options = DateFormatOptions::new("en-US", DateStyle::Full);
        assert_eq!(format_date("someday", &options).unwrap(), "someday");
        assert_eq!(format_date("2024-02-29", &options).unwrap(), "Thursday, February 29, 2024");
    }
}
