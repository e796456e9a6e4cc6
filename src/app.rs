use leptos::*;
use std::rc::Rc;

use crate::{
    config::DashboardConfig,
    domain::{
        chart::{ChartKind, SeriesData, Theme},
        records::RecordSet,
    },
    presentation::{FarmingList, TradingViewChart},
};

const DASHBOARD_CSS: &str = r#"
.dex-dashboard {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    color: #20262e;
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.dex-dashboard.dark {
    color: #ffffff;
}

.chart-wrapper {
    position: relative;
}

.chart-anchor {
    position: relative;
}

.chart-fit {
    position: absolute;
    right: 0;
    bottom: 40px;
    border: none;
    background: transparent;
    color: inherit;
    cursor: pointer;
    z-index: 10;
}

.three-line-legend,
.three-line-legend-dark {
    position: absolute;
    z-index: 3;
    text-align: left;
    pointer-events: none;
    font-size: 12px;
    color: #20262e;
}

.three-line-legend-dark {
    color: #ffffff;
}

.dash-grid {
    display: grid;
    grid-gap: 1em;
    padding: 0 1.125rem;
    align-items: center;
}

.dash-grid--row {
    height: 60px;
}

.divider {
    height: 1px;
    background-color: rgba(43, 43, 43, 0.435);
}

.clickable-text {
    cursor: pointer;
    user-select: none;
}

.clickable-text:hover {
    opacity: 0.6;
}

.question-helper {
    margin-left: 4px;
    opacity: 0.6;
    cursor: help;
}

.data-text {
    display: flex;
    align-items: center;
    justify-content: flex-end;
    text-align: right;
    font-weight: 500;
}

.data-text--name,
.data-text--reserves {
    justify-content: flex-start;
    text-align: left;
}

.data-text--reserves {
    flex-direction: column;
    align-items: flex-start;
}

.row-index {
    margin-right: 1rem;
    width: 10px;
}

.double-logo {
    position: relative;
    display: inline-flex;
    margin-right: 4px;
}

.double-logo--margin {
    margin-right: 12px;
}

.token-logo {
    border-radius: 50%;
    box-shadow: 0 6px 10px rgba(0, 0, 0, 0.075);
}

.token-logo--text {
    font-size: 10px;
}

.auto-row {
    display: flex;
    align-items: center;
    gap: 4px;
}

.page-buttons {
    display: flex;
    justify-content: center;
    gap: 1em;
    margin: 2em 0 0.5em;
}

.arrow {
    padding: 0 20px;
    user-select: none;
    cursor: pointer;
}

.local-loader {
    display: flex;
    justify-content: center;
    padding: 2rem 0;
}

.farming-list__empty {
    text-align: center;
    padding: 2rem 0;
    opacity: 0.6;
}

.dot-flashing {
    position: relative;
    width: 10px;
    height: 10px;
    border-radius: 5px;
    background-color: #4526a2;
    animation: dot-flashing 1s infinite linear alternate;
}

@keyframes dot-flashing {
    0% { opacity: 1; }
    100% { opacity: 0.2; }
}
"#;

/// Chart on top, farming list below, both fed by host-owned signals.
#[component]
pub fn Dashboard(
    #[prop(into)] records: Signal<Option<Rc<RecordSet>>>,
    #[prop(into)] series: Signal<Option<Rc<SeriesData>>>,
    #[prop(into)] base: Signal<Option<f64>>,
    #[prop(into)] base_change: Signal<Option<f64>>,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] chart_width: Signal<u32>,
    #[prop(into)] title: String,
    #[prop(into)] field: String,
    #[prop(optional)] kind: ChartKind,
    #[prop(optional)] weekly: bool,
    #[prop(optional)] config: DashboardConfig,
) -> impl IntoView {
    let DashboardConfig { list, chart } = config;

    view! {
        <style>{DASHBOARD_CSS}</style>
        <div class="dex-dashboard" class:dark=move || theme.get() == Theme::Dark>
            <TradingViewChart
                kind=kind
                data=series
                field=field
                title=title
                base=base
                base_change=base_change
                width=chart_width
                theme=theme
                weekly=weekly
                config=chart
            />
            <FarmingList records=records config=list/>
        </div>
    }
}
