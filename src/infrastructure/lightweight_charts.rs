//! Binding to the TradingView `lightweight-charts` bundle loaded as the
//! `LightweightCharts` global.

use crate::{
    config::ChartConfig,
    domain::{
        chart::{
            ChartBackend, ChartInstance, ChartKind, ChartSpec, CrosshairEvent, SeriesPoint,
            Theme,
        },
        errors::{AppError, ChartResult},
        logging::LogComponent,
    },
    format_utils::formatted_num,
    infrastructure::tooltip_overlay::DomTooltipOverlay,
    log_debug,
};
use chrono::NaiveDate;
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue, prelude::*};
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = LightweightCharts, js_name = createChart, catch)]
    fn create_chart(container: &HtmlElement, options: &JsValue) -> Result<IChartApi, JsValue>;

    #[derive(Clone, Debug)]
    pub type IChartApi;

    #[wasm_bindgen(method, js_name = addHistogramSeries, catch)]
    fn add_histogram_series(this: &IChartApi, options: &JsValue) -> Result<ISeriesApi, JsValue>;

    #[wasm_bindgen(method, js_name = addAreaSeries, catch)]
    fn add_area_series(this: &IChartApi, options: &JsValue) -> Result<ISeriesApi, JsValue>;

    #[wasm_bindgen(method, js_name = subscribeCrosshairMove)]
    fn subscribe_crosshair_move(this: &IChartApi, handler: &Function);

    #[wasm_bindgen(method, js_name = unsubscribeCrosshairMove)]
    fn unsubscribe_crosshair_move(this: &IChartApi, handler: &Function);

    #[wasm_bindgen(method)]
    fn resize(this: &IChartApi, width: u32, height: u32);

    #[wasm_bindgen(method, js_name = timeScale)]
    fn time_scale(this: &IChartApi) -> ITimeScaleApi;

    #[wasm_bindgen(method)]
    fn remove(this: &IChartApi);

    #[derive(Clone, Debug)]
    pub type ISeriesApi;

    #[wasm_bindgen(method, js_name = setData, catch)]
    fn set_data(this: &ISeriesApi, data: &JsValue) -> Result<(), JsValue>;

    pub type ITimeScaleApi;

    #[wasm_bindgen(method, js_name = fitContent)]
    fn fit_content(this: &ITimeScaleApi);

    #[wasm_bindgen(method, js_name = scrollToPosition)]
    fn scroll_to_position(this: &ITimeScaleApi, position: f64, animated: bool);
}

/// Backend bound to one anchor `<div>`.
pub struct LightweightChartsBackend {
    anchor: HtmlElement,
    config: ChartConfig,
}

impl LightweightChartsBackend {
    pub fn new(anchor: HtmlElement, config: ChartConfig) -> Self {
        Self { anchor, config }
    }

    fn chart_options(&self, spec: &ChartSpec) -> serde_json::Value {
        json!({
            "width": spec.width,
            "height": spec.height,
            "layout": {
                "backgroundColor": "transparent",
                "textColor": spec.theme.text_color(),
            },
            "rightPriceScale": {
                "scaleMargins": { "top": spec.kind.top_scale_margin(), "bottom": 0 },
                "borderVisible": false,
            },
            "timeScale": { "borderVisible": false },
            "grid": {
                "horzLines": { "color": self.config.grid_color, "visible": false },
                "vertLines": { "color": self.config.grid_color, "visible": false },
            },
            "crosshair": {
                "horzLine": { "visible": false, "labelVisible": false },
                "vertLine": {
                    "visible": true,
                    "style": 0,
                    "width": 2,
                    "color": self.config.crosshair_color,
                    "labelVisible": false,
                },
            },
            "localization": {},
        })
    }
}

impl ChartBackend for LightweightChartsBackend {
    type Chart = LightweightChart;
    type Overlay = DomTooltipOverlay;

    fn create_chart(&self, spec: &ChartSpec) -> ChartResult<LightweightChart> {
        let options = to_js(&self.chart_options(spec))?;

        // prices on the axis use the same formatting as the legend
        let price_formatter = Closure::wrap(
            Box::new(|value: f64| formatted_num(value, true)) as Box<dyn Fn(f64) -> String>
        );
        let localization = Reflect::get(&options, &"localization".into())
            .map_err(|e| js_error("read localization", e))?;
        Reflect::set(&localization, &"priceFormatter".into(), price_formatter.as_ref())
            .map_err(|e| js_error("set priceFormatter", e))?;

        let api = create_chart(&self.anchor, &options).map_err(|e| js_error("createChart", e))?;
        log_debug!(
            LogComponent::LightweightCharts,
            "createChart {}x{} ({})",
            spec.width,
            spec.height,
            spec.theme
        );

        Ok(LightweightChart {
            api,
            series: None,
            series_options: SeriesOptions::from_config(&self.config),
            _price_formatter: price_formatter,
            crosshair: None,
        })
    }

    fn attach_overlay(&self, theme: Theme) -> ChartResult<DomTooltipOverlay> {
        DomTooltipOverlay::attach(&self.anchor, theme)
    }

    fn detach_overlay(&self, overlay: &DomTooltipOverlay) -> ChartResult<()> {
        overlay.detach_from(&self.anchor)
    }
}

#[derive(Debug, Clone)]
struct SeriesOptions {
    color: String,
    bottom_color: String,
}

impl SeriesOptions {
    fn from_config(config: &ChartConfig) -> Self {
        Self { color: config.series_color.clone(), bottom_color: config.area_bottom_color.clone() }
    }

    fn for_kind(&self, kind: ChartKind) -> serde_json::Value {
        match kind {
            ChartKind::Bar => json!({
                "color": self.color,
                "priceFormat": { "type": "volume" },
                "scaleMargins": { "top": 0.32, "bottom": 0 },
                "lineColor": self.color,
                "lineWidth": 3,
            }),
            ChartKind::Area => json!({
                "topColor": self.color,
                "bottomColor": self.bottom_color,
                "lineColor": self.color,
                "lineWidth": 3,
            }),
        }
    }
}

/// Live `IChartApi` plus the closures it calls back into.
pub struct LightweightChart {
    api: IChartApi,
    series: Option<ISeriesApi>,
    series_options: SeriesOptions,
    _price_formatter: Closure<dyn Fn(f64) -> String>,
    crosshair: Option<Closure<dyn FnMut(JsValue)>>,
}

impl ChartInstance for LightweightChart {
    fn add_series(&mut self, kind: ChartKind, points: &[SeriesPoint]) -> ChartResult<()> {
        let options = to_js(&self.series_options.for_kind(kind))?;
        let series = match kind {
            ChartKind::Bar => self.api.add_histogram_series(&options),
            ChartKind::Area => self.api.add_area_series(&options),
        }
        .map_err(|e| js_error("add series", e))?;
        series.set_data(&to_js(points)?).map_err(|e| js_error("setData", e))?;
        self.series = Some(series);
        Ok(())
    }

    fn set_data(&mut self, points: &[SeriesPoint]) -> ChartResult<()> {
        let series = self
            .series
            .as_ref()
            .ok_or_else(|| AppError::RenderingError("no series attached".to_string()))?;
        series.set_data(&to_js(points)?).map_err(|e| js_error("setData", e))
    }

    fn subscribe_crosshair_move(&mut self, mut handler: Box<dyn FnMut(CrosshairEvent)>) {
        if let Some(previous) = self.crosshair.take() {
            self.api.unsubscribe_crosshair_move(previous.as_ref().unchecked_ref());
        }
        let series = self.series.clone();
        let callback = Closure::wrap(Box::new(move |param: JsValue| {
            handler(parse_crosshair(&param, series.as_ref()));
        }) as Box<dyn FnMut(JsValue)>);
        self.api.subscribe_crosshair_move(callback.as_ref().unchecked_ref());
        self.crosshair = Some(callback);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.api.resize(width, height);
    }

    fn fit_content(&self) {
        self.api.time_scale().fit_content();
    }

    fn scroll_to_position(&self, position: f64) {
        self.api.time_scale().scroll_to_position(position, false);
    }

    fn destroy(self) {
        if let Some(callback) = &self.crosshair {
            self.api.unsubscribe_crosshair_move(callback.as_ref().unchecked_ref());
        }
        self.api.remove();
    }
}

/// Read `{ time, point, seriesPrices | seriesData }` from a crosshair param.
fn parse_crosshair(param: &JsValue, series: Option<&ISeriesApi>) -> CrosshairEvent {
    if param.is_undefined() || param.is_null() {
        return CrosshairEvent::left();
    }
    let time = get(param, "time").and_then(|time| parse_time(&time));
    let point = get(param, "point").and_then(|point| {
        let x = get(&point, "x")?.as_f64()?;
        let y = get(&point, "y")?.as_f64()?;
        Some((x, y))
    });
    let price = series.and_then(|series| series_price(param, series));
    CrosshairEvent { time, point, price }
}

fn series_price(param: &JsValue, series: &ISeriesApi) -> Option<f64> {
    // v3 exposes `seriesPrices`, v4 `seriesData` holding `{ time, value }`
    if let Some(prices) = get(param, "seriesPrices").and_then(|m| m.dyn_into::<js_sys::Map>().ok())
    {
        return prices.get(series).as_f64();
    }
    let data = get(param, "seriesData")?.dyn_into::<js_sys::Map>().ok()?;
    get(&data.get(series), "value")?.as_f64()
}

/// Business day object, `YYYY-MM-DD` string, or unix seconds.
fn parse_time(time: &JsValue) -> Option<NaiveDate> {
    if let Some(text) = time.as_string() {
        return NaiveDate::parse_from_str(&text, "%Y-%m-%d").ok();
    }
    if let Some(seconds) = time.as_f64() {
        return crate::time_utils::unix_to_date(seconds as i64);
    }
    let year = get(time, "year")?.as_f64()? as i32;
    let month = get(time, "month")?.as_f64()? as u32;
    let day = get(time, "day")?.as_f64()? as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> ChartResult<JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| AppError::RenderingError(format!("serialize options: {}", e)))?;
    js_sys::JSON::parse(&text).map_err(|e| js_error("JSON.parse", e))
}

fn js_error(context: &str, error: JsValue) -> AppError {
    AppError::RenderingError(format!("{}: {:?}", context, error))
}
