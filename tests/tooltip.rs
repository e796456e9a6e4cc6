use chrono::NaiveDate;
use dex_dashboard_wasm::domain::chart::{
    ChangeColor, ChartKind, CrosshairEvent, Headline, Theme, TooltipContent, TooltipContext,
    change_badge,
};
use dex_dashboard_wasm::infrastructure::legend_html;
use insta::assert_snapshot;
use wasm_bindgen_test::*;

fn context(kind: ChartKind, weekly: bool) -> TooltipContext {
    TooltipContext {
        title: "TVL".to_string(),
        kind,
        weekly,
        base: Some(1_234_567.0),
        base_change: Some(1.25),
        width: 600,
        height: 300,
    }
}

fn april(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 4, day).unwrap()
}

#[wasm_bindgen_test(unsupported = test)]
fn change_badge_signs_and_colours() {
    let down = change_badge(Some(-3.5));
    assert_eq!(down.text, "-3.50%");
    assert_eq!(down.color, ChangeColor::Red);

    let up = change_badge(Some(1.234));
    assert_eq!(up.text, "+1.23%");
    assert_eq!(up.color, ChangeColor::Green);

    for flat in [None, Some(0.0), Some(0.001), Some(f64::NAN)] {
        let badge = change_badge(flat);
        assert_eq!(badge.text, "0%");
        assert_eq!(badge.color, ChangeColor::Green);
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn bar_summary_is_daily_unless_weekly() {
    let TooltipContent::Summary { title, headline, .. } = context(ChartKind::Bar, false).summary()
    else {
        panic!("expected summary");
    };
    assert_eq!(title, "TVL (24hr)");
    assert_eq!(headline, Headline::Value("$1,234,567".to_string()));

    let TooltipContent::Summary { title, .. } = context(ChartKind::Bar, true).summary() else {
        panic!("expected summary");
    };
    assert_eq!(title, "TVL");

    let TooltipContent::Summary { title, .. } = context(ChartKind::Area, false).summary() else {
        panic!("expected summary");
    };
    assert_eq!(title, "TVL");
}

#[wasm_bindgen_test(unsupported = test)]
fn unknown_base_shows_loading() {
    let mut ctx = context(ChartKind::Area, false);
    ctx.base = None;
    assert!(matches!(ctx.summary(), TooltipContent::Summary { headline: Headline::Loading, .. }));
    ctx.base = Some(f64::NAN);
    assert!(matches!(ctx.summary(), TooltipContent::Summary { headline: Headline::Loading, .. }));
}

#[wasm_bindgen_test(unsupported = test)]
fn hover_inside_plot_shows_point() {
    let ctx = context(ChartKind::Area, false);
    let content = ctx.for_crosshair(&CrosshairEvent::at(april(5), 10.0, 10.0, Some(0.05)));
    assert_eq!(
        content,
        TooltipContent::Hover {
            title: "TVL".to_string(),
            value: "$0.0500".to_string(),
            date_label: "April 5, 2021".to_string(),
        }
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn weekly_hover_shows_week_range() {
    let ctx = context(ChartKind::Bar, true);
    let TooltipContent::Hover { date_label, .. } =
        ctx.for_crosshair(&CrosshairEvent::at(april(7), 10.0, 10.0, Some(1.0)))
    else {
        panic!("expected hover");
    };
    assert_eq!(date_label, "April 4, 2021-April 10, 2021");
}

#[wasm_bindgen_test(unsupported = test)]
fn pointer_outside_plot_restores_summary() {
    let ctx = context(ChartKind::Area, false);
    let summary = ctx.summary();
    for event in [
        CrosshairEvent::left(),
        CrosshairEvent::at(april(5), -1.0, 10.0, Some(1.0)),
        CrosshairEvent::at(april(5), 601.0, 10.0, Some(1.0)),
        CrosshairEvent::at(april(5), 10.0, 301.0, Some(1.0)),
        CrosshairEvent::at(april(5), 10.0, 10.0, None),
    ] {
        assert_eq!(ctx.for_crosshair(&event), summary);
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn summary_markup() {
    let content = TooltipContent::Summary {
        title: "Volume (24hr)".to_string(),
        headline: Headline::Value("$100.00".to_string()),
        change: change_badge(Some(-3.5)),
    };
    assert_snapshot!(legend_html(&content, Theme::Light), @r###"<div style="font-size: 16px; margin: 4px 0px; color: black;">Volume (24hr)</div><div style="font-size: 22px; margin: 4px 0px; color: black; display: flex; align-items: center; align-content: center;">$100.00<span style="margin-left: 10px; font-size: 16px; color: red;">-3.50%</span></div>"###);
}

#[wasm_bindgen_test(unsupported = test)]
fn hover_markup_escapes_text() {
    let content = TooltipContent::Hover {
        title: "<b>TVL</b>".to_string(),
        value: "$2.00".to_string(),
        date_label: "April 6, 2021".to_string(),
    };
    assert_snapshot!(legend_html(&content, Theme::Dark), @r###"<div style="font-size: 16px; margin: 4px 0px; color: white;">&lt;b&gt;TVL&lt;/b&gt;</div><div style="font-size: 22px; margin: 4px 0px; color: white">$2.00</div><div>April 6, 2021</div>"###);
}

#[wasm_bindgen_test(unsupported = test)]
fn loading_markup_uses_flashing_dots() {
    let content = TooltipContent::Summary {
        title: "TVL".to_string(),
        headline: Headline::Loading,
        change: change_badge(None),
    };
    let html = legend_html(&content, Theme::Light);
    assert!(html.contains(r#"<div class="dot-flashing"></div>"#));
    assert!(html.contains(r#"color: green;">0%</span>"#));
}
