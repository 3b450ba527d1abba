use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;

/// Raw `/api/symbols` payload: category key -> ordered symbol list.
///
/// Keys stay as strings here; unknown categories are dropped (with a
/// warning) during conversion to the typed catalog.
#[derive(Deserialize, Debug)]
pub struct CatalogResponse(pub IndexMap<String, Vec<String>>);

/// Raw per-symbol series from `/api/series`: two positionally aligned
/// arrays, ascending by date.
#[derive(Deserialize, Debug)]
pub struct ApiSeries {
    pub dates: Vec<NaiveDate>,
    pub close: Vec<f64>,
}

/// Raw `/api/series` payload, keyed by requested symbol.
#[derive(Deserialize, Debug)]
pub struct SeriesResponse(pub IndexMap<String, ApiSeries>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_series_json() {
        let json = r#"{
            "USD/KRW": {"dates": ["2024-01-02", "2024-01-03"], "close": [1310.5, 1315.2]},
            "AAPL": {"dates": [], "close": []}
        }"#;
        let parsed: SeriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.0.len(), 2);

        let krw = &parsed.0["USD/KRW"];
        assert_eq!(krw.dates[0], NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(krw.close[1], 1315.2);
        assert!(parsed.0["AAPL"].dates.is_empty());
    }

    #[test]
    fn parses_backend_catalog_json() {
        let json = r#"{
            "currency": ["USD/KRW", "EUR/KRW"],
            "stock_us": ["AAPL"]
        }"#;
        let parsed: CatalogResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.0["currency"], vec!["USD/KRW", "EUR/KRW"]);
        // insertion order preserved
        assert_eq!(parsed.0.get_index(1).unwrap().0, "stock_us");
    }
}
