use crate::{
    app::Dashboard,
    config::DashboardConfig,
    domain::{
        chart::{ChartKind, SeriesData, Theme, series_from_json},
        errors::AppError,
        logging::LogComponent,
        records::RecordSet,
    },
    log_info,
};
use leptos::*;
use std::{rc::Rc, str::FromStr};
use wasm_bindgen::prelude::*;

/// JS entry point: owns the reactive inputs of one mounted dashboard.
///
/// Every setter publishes a fresh `Rc`, so widgets always see new data as a
/// new reference.
#[wasm_bindgen]
pub struct DashboardApi {
    config: DashboardConfig,
    records: RwSignal<Option<Rc<RecordSet>>>,
    series: RwSignal<Option<Rc<SeriesData>>>,
    base: RwSignal<Option<f64>>,
    base_change: RwSignal<Option<f64>>,
    theme: RwSignal<Theme>,
    chart_width: RwSignal<u32>,
}

#[wasm_bindgen]
impl DashboardApi {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DashboardApi, JsValue> {
        let config = DashboardConfig::from_json(config_json.as_deref().unwrap_or_default())?;
        Ok(Self {
            config,
            records: create_rw_signal(None),
            series: create_rw_signal(None),
            base: create_rw_signal(None),
            base_change: create_rw_signal(None),
            theme: create_rw_signal(Theme::default()),
            chart_width: create_rw_signal(0),
        })
    }

    /// Render the dashboard into `parent`.
    ///
    /// `kind` is `"BAR"` or `"AREA"` (case-insensitive).
    #[wasm_bindgen(js_name = mount)]
    pub fn mount(
        &self,
        parent: web_sys::HtmlElement,
        title: String,
        field: String,
        kind: String,
        weekly: bool,
    ) -> Result<(), JsValue> {
        let kind = ChartKind::from_str(&kind)
            .map_err(|_| AppError::ValidationError(format!("unknown chart type: {}", kind)))?;
        if self.chart_width.get_untracked() == 0 {
            self.chart_width.set(parent.client_width().max(0) as u32);
        }

        let config = self.config.clone();
        let (records, series, base, base_change, theme, width) = (
            self.records,
            self.series,
            self.base,
            self.base_change,
            self.theme,
            self.chart_width,
        );
        mount_to(parent, move || {
            view! {
                <Dashboard
                    records=records
                    series=series
                    base=base
                    base_change=base_change
                    theme=theme
                    chart_width=width
                    title=title
                    field=field
                    kind=kind
                    weekly=weekly
                    config=config
                />
            }
        });
        log_info!(LogComponent::DashboardApi, "📊 dashboard mounted ({})", kind);
        Ok(())
    }

    /// Replace the farming records with a JSON object keyed by pair id.
    #[wasm_bindgen(js_name = setRecords)]
    pub fn set_records(&self, json: &str) -> Result<(), JsValue> {
        let records = RecordSet::from_json(json)?;
        log_info!(
            LogComponent::DashboardApi,
            "records received: {}",
            records.len()
        );
        self.records.set(Some(Rc::new(records)));
        Ok(())
    }

    /// Back to the loading state.
    #[wasm_bindgen(js_name = clearRecords)]
    pub fn clear_records(&self) {
        self.records.set(None);
    }

    /// Replace the chart history with a JSON array of `{ date, ... }` entries.
    #[wasm_bindgen(js_name = setSeries)]
    pub fn set_series(&self, json: &str) -> Result<(), JsValue> {
        let series = series_from_json(json)?;
        self.series.set(Some(Rc::new(series)));
        Ok(())
    }

    #[wasm_bindgen(js_name = clearSeries)]
    pub fn clear_series(&self) {
        self.series.set(None);
    }

    #[wasm_bindgen(js_name = setBase)]
    pub fn set_base(&self, base: Option<f64>, base_change: Option<f64>) {
        batch(|| {
            self.base_change.set(base_change);
            self.base.set(base);
        });
    }

    #[wasm_bindgen(js_name = setDarkMode)]
    pub fn set_dark_mode(&self, dark_mode: bool) {
        self.theme.set(Theme::from_dark_mode(dark_mode));
    }

    #[wasm_bindgen(js_name = setChartWidth)]
    pub fn set_chart_width(&self, width: u32) {
        self.chart_width.set(width);
    }
}
