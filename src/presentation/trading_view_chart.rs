use crate::{
    application::{ChartInputs, ChartLifecycleController},
    config::ChartConfig,
    domain::{
        chart::{ChartKind, SeriesData, Theme},
        logging::LogComponent,
    },
    infrastructure::LightweightChartsBackend,
    log_error,
};
use leptos::html::Div;
use leptos::*;
use once_cell::unsync::OnceCell;
use std::{cell::RefCell, rc::Rc};

type Controller = ChartLifecycleController<LightweightChartsBackend>;

/// Time-series chart with a three-line legend.
///
/// The chart is built once `data` is available and the anchor is mounted;
/// afterwards the controller decides between in-place updates and a rebuild.
#[component]
pub fn TradingViewChart(
    #[prop(optional)] kind: ChartKind,
    #[prop(into)] data: Signal<Option<Rc<SeriesData>>>,
    /// Entry field plotted as the series value
    #[prop(into)]
    field: String,
    #[prop(into)] title: String,
    #[prop(into)] base: Signal<Option<f64>>,
    #[prop(into)] base_change: Signal<Option<f64>>,
    #[prop(into)] width: Signal<u32>,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(optional)] weekly: bool,
    #[prop(optional)] config: ChartConfig,
) -> impl IntoView {
    let anchor = create_node_ref::<Div>();
    let controller: Rc<OnceCell<RefCell<Controller>>> = Rc::new(OnceCell::new());
    let height = config.height;

    let effect_controller = Rc::clone(&controller);
    create_effect(move |_| {
        let inputs = ChartInputs {
            kind,
            data: data.get(),
            field: field.clone(),
            base: base.get(),
            base_change: base_change.get(),
            title: title.clone(),
            width: width.get(),
            weekly,
            theme: theme.get(),
        };
        let Some(anchor) = anchor.get() else {
            return;
        };

        let cell = effect_controller.get_or_init(|| {
            let element = web_sys::HtmlElement::from((*anchor).clone());
            RefCell::new(Controller::new(
                LightweightChartsBackend::new(element, config.clone()),
                config.height,
            ))
        });
        if let Err(e) = cell.borrow_mut().sync(&inputs) {
            log_error!(LogComponent::TradingViewChart, "chart sync failed: {}", e);
        }
    });

    let cleanup_controller = Rc::clone(&controller);
    on_cleanup(move || {
        if let Some(cell) = cleanup_controller.get() {
            cell.borrow_mut().release();
        }
    });

    let fit_controller = Rc::clone(&controller);
    let fit_content = move |_| {
        if let Some(cell) = fit_controller.get() {
            cell.borrow().fit_content();
        }
    };

    view! {
        <div class="chart-wrapper" style:min-height=format!("{}px", height)>
            <div node_ref=anchor class="chart-anchor"></div>
            <button class="chart-fit" title="Reset zoom" on:click=fit_content>
                "▶"
            </button>
        </div>
    }
}
