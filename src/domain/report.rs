use std::fmt::Write;

const SECTION_SEPARATOR: &str = "-+-+-+-+-+-+-+-+-+-+-+-+-+-+";

/// One retailer's deduped, capped sample list.
#[derive(Debug, Clone)]
pub struct SiteResult {
    pub label: &'static str,
    pub prices: Vec<f64>,
}

impl SiteResult {
    pub fn empty(label: &'static str) -> Self {
        SiteResult {
            label,
            prices: vec![],
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct PriceStats {
    pub cheapest: f64,
    pub most_expensive: f64,
    pub average: f64,
}

/// Min, max and mean over the union of all per-site samples.
///
/// Non-positive samples are discarded here rather than in the normalizer, so
/// the per-site lists still show what was scraped. `None` means no usable
/// price survived.
pub fn aggregate(results: &[SiteResult]) -> Option<PriceStats> {
    let all_prices: Vec<f64> = results
        .iter()
        .flat_map(|r| r.prices.iter().copied())
        .filter(|price| *price > 0.0)
        .collect();

    if all_prices.is_empty() {
        return None;
    }

    let cheapest = all_prices.iter().copied().fold(f64::INFINITY, f64::min);
    let most_expensive = all_prices
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let average = all_prices.iter().sum::<f64>() / all_prices.len() as f64;

    Some(PriceStats {
        cheapest,
        most_expensive,
        average,
    })
}

/// Render the console report: per-site price lists in fixed order, then the
/// statistics block, or the no-result line when nothing was retrieved.
pub fn render_report(query: &str, results: &[SiteResult]) -> String {
    let stats = match aggregate(results) {
        Some(stats) => stats,
        None => return "No prices could be retrieved.".to_string(),
    };

    let mut out = String::new();
    writeln!(out, "Price Comparison Report for ---> {}", query).unwrap();
    writeln!(out, "{}", SECTION_SEPARATOR).unwrap();
    for result in results {
        writeln!(out, "{} Prices: {:?}", result.label, result.prices).unwrap();
        writeln!(out, "{}", SECTION_SEPARATOR).unwrap();
    }
    writeln!(out, "Price Statistics:").unwrap();
    writeln!(out, "Cheapest Price: {:.2} TL", stats.cheapest).unwrap();
    writeln!(out, "Most Expensive Price: {:.2} TL", stats.most_expensive).unwrap();
    writeln!(out, "Average Price: {:.2} TL", stats.average).unwrap();

    out
}
