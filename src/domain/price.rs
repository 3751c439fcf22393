use itertools::Itertools;

/// Normalize a displayed price string into a numeric amount.
///
/// Displayed prices use "." as the thousands separator and "," as the
/// decimal separator, usually with a currency suffix ("1.299,90 TL").
/// Anything that fails to parse is `None`; callers filter those out.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    cleaned
        .replace('.', "")
        .replace(',', ".")
        .trim()
        .parse::<f64>()
        .ok()
}

/// Order-preserving dedup of one site's samples, truncated at `cap`.
pub fn dedupe_prices(prices: Vec<f64>, cap: usize) -> Vec<f64> {
    prices
        .into_iter()
        .unique_by(|p| p.to_bits())
        .take(cap)
        .collect()
}
