use dex_dashboard_wasm::{
    config::{DEFAULT_CHART_HEIGHT, DEFAULT_PAGE_SIZE, DashboardConfig},
    domain::errors::AppError,
};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn empty_input_gives_defaults() {
    let config = DashboardConfig::from_json("  ").unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.chart.height, DEFAULT_CHART_HEIGHT);
    assert_eq!(config.list.native_wrapper_symbol, "WETH");
}

#[wasm_bindgen_test(unsupported = test)]
fn partial_json_overrides_only_given_fields() {
    let config =
        DashboardConfig::from_json(r##"{ "list": { "pageSize": 25 }, "chart": { "seriesColor": "#ff007a" } }"##)
            .unwrap();
    assert_eq!(config.list.page_size, 25);
    assert_eq!(config.list.native_symbol, "ETH");
    assert_eq!(config.chart.series_color, "#ff007a");
    assert_eq!(config.chart.height, DEFAULT_CHART_HEIGHT);
}

#[wasm_bindgen_test(unsupported = test)]
fn zero_sizes_are_rejected() {
    assert!(matches!(
        DashboardConfig::from_json(r#"{ "list": { "pageSize": 0 } }"#),
        Err(AppError::ConfigError(_))
    ));
    assert!(matches!(
        DashboardConfig::from_json(r#"{ "chart": { "height": 0 } }"#),
        Err(AppError::ConfigError(_))
    ));
    assert!(matches!(DashboardConfig::from_json("{"), Err(AppError::ConfigError(_))));
}

#[wasm_bindgen_test(unsupported = test)]
fn logo_url_substitutes_address() {
    let config = DashboardConfig::default();
    let url = config.list.logo_url("0xabc");
    assert!(url.ends_with("/assets/0xabc/logo.png"));
}
