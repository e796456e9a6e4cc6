use crate::{
    domain::{
        chart::{Headline, Theme, TooltipContent, TooltipOverlay},
        errors::{AppError, ChartResult},
        logging::LogComponent,
    },
    log_warn,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Legend `<div>` laid over the top-left corner of the chart.
#[derive(Clone, Debug)]
pub struct DomTooltipOverlay {
    element: HtmlElement,
    theme: Theme,
}

impl DomTooltipOverlay {
    /// Create the legend element and append it to `anchor`.
    pub fn attach(anchor: &HtmlElement, theme: Theme) -> ChartResult<Self> {
        let document = anchor
            .owner_document()
            .ok_or_else(|| AppError::UiError("anchor is not in a document".to_string()))?;
        let element = document
            .create_element("div")
            .map_err(|e| AppError::UiError(format!("create tooltip: {:?}", e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| AppError::UiError("tooltip is not an HtmlElement".to_string()))?;

        element.set_class_name(theme.legend_class());
        let style = element.style();
        for (property, value) in [
            ("display", "block"),
            ("font-weight", "500"),
            ("left", "-4px"),
            ("top", "-8px"),
            ("background-color", "transparent"),
        ] {
            if let Err(e) = style.set_property(property, value) {
                log_warn!(LogComponent::TooltipOverlay, "legend style {} skipped: {:?}", property, e);
            }
        }

        anchor
            .append_child(&element)
            .map_err(|e| AppError::UiError(format!("append tooltip: {:?}", e)))?;
        Ok(Self { element, theme })
    }

    /// Remove the element; fails when it is no longer a child of `anchor`.
    pub fn detach_from(&self, anchor: &HtmlElement) -> ChartResult<()> {
        anchor
            .remove_child(&self.element)
            .map(|_| ())
            .map_err(|e| AppError::UiError(format!("tooltip not attached: {:?}", e)))
    }
}

impl TooltipOverlay for DomTooltipOverlay {
    fn render(&self, content: &TooltipContent) {
        self.element.set_inner_html(&legend_html(content, self.theme));
    }
}

/// Markup of the legend for `content`.
pub fn legend_html(content: &TooltipContent, theme: Theme) -> String {
    let text_color = theme.text_color();
    match content {
        TooltipContent::Summary { title, headline, change } => {
            let headline = match headline {
                Headline::Value(value) => escape_html(value),
                Headline::Loading => {
                    r#"<div style="width: 35px; margin-left: 16px"><div class="dot-flashing"></div></div>"#
                        .to_string()
                }
            };
            format!(
                concat!(
                    r#"<div style="font-size: 16px; margin: 4px 0px; color: {text};">{title}</div>"#,
                    r#"<div style="font-size: 22px; margin: 4px 0px; color: {text}; display: flex; align-items: center; align-content: center;">"#,
                    r#"{headline}<span style="margin-left: 10px; font-size: 16px; color: {color};">{change}</span></div>"#
                ),
                text = text_color,
                title = escape_html(title),
                headline = headline,
                color = change.color.css(),
                change = escape_html(&change.text),
            )
        }
        TooltipContent::Hover { title, value, date_label } => format!(
            concat!(
                r#"<div style="font-size: 16px; margin: 4px 0px; color: {text};">{title}</div>"#,
                r#"<div style="font-size: 22px; margin: 4px 0px; color: {text}">{value}</div>"#,
                r#"<div>{date}</div>"#
            ),
            text = text_color,
            title = escape_html(title),
            value = escape_html(value),
            date = escape_html(date_label),
        ),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
