// Display formatting, kept separate from parsing so missing values only
// degrade at render time.
use crate::model::QueryResult;

/// Sentinel shown for a value the service did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders a currency amount with two fractional digits and a comma as the
/// decimal separator, e.g. `1234,50`.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}").replace('.', ","),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_count(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders the result block shown to the user after a successful query.
pub fn render_result(result: &QueryResult) -> String {
    format!(
        "💰 Suggested price: R$ {}\n📊 Price range: R$ {} to R$ {}\n🔎 Based on {} listings analyzed",
        format_currency(result.suggested_price),
        format_currency(result.min_price),
        format_currency(result.max_price),
        format_count(result.listings_analyzed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_comma_and_two_digits() {
        assert_eq!(format_currency(Some(1234.5)), "1234,50");
        assert_eq!(format_currency(Some(1000.0)), "1000,00");
        assert_eq!(format_currency(Some(1500.0)), "1500,00");
        assert_eq!(format_currency(Some(0.999)), "1,00");
        assert_eq!(format_currency(Some(0.0)), "0,00");
    }

    #[test]
    fn missing_values_render_as_na() {
        assert_eq!(format_currency(None), "N/A");
        assert_eq!(format_count(None), "N/A");
    }

    #[test]
    fn count_renders_plain() {
        assert_eq!(format_count(Some(7)), "7");
        assert_eq!(format_count(Some(0)), "0");
    }

    #[test]
    fn result_block_contains_all_fields() {
        let result = QueryResult {
            suggested_price: Some(1234.5),
            min_price: Some(1000.0),
            max_price: Some(1500.0),
            listings_analyzed: Some(7),
        };
        let block = render_result(&result);
        assert!(block.contains("R$ 1234,50"));
        assert!(block.contains("R$ 1000,00 to R$ 1500,00"));
        assert!(block.contains("7 listings"));
    }

    #[test]
    fn result_block_degrades_missing_fields() {
        let result = QueryResult {
            suggested_price: Some(1234.5),
            min_price: None,
            max_price: Some(1500.0),
            listings_analyzed: None,
        };
        let block = render_result(&result);
        assert!(block.contains("R$ N/A to R$ 1500,00"));
        assert!(block.contains("N/A listings"));
    }
}
