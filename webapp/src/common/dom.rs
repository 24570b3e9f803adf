use tracing::error;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollToOptions, Window,
    wasm_bindgen::{JsCast, JsValue},
};

use site::Effects;

fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

// css variable read by every themed rule in the stylesheet
pub const PRIMARY_COLOR_VAR: &str = "--primary";

fn root_element() -> anyhow::Result<HtmlElement> {
    window()?
        .document()
        .and_then(|document| document.document_element())
        .ok_or_else(|| anyhow::Error::msg("no document element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow::Error::msg("document element is not an html element"))
}

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// DomEffects
//
// applies the page-wide side effects of AppState to the live document.  theme
// state lives on <html> as the --primary variable and the "dark" class
pub struct DomEffects;

impl DomEffects {
    fn try_primary_color(color: &str) -> anyhow::Result<()> {
        // only the one property; other inline styles on <html> are left alone
        root_element()?
            .style()
            .set_property(PRIMARY_COLOR_VAR, color)
            .map_err(js_err)
    }

    fn try_dark_theme(enabled: bool) -> anyhow::Result<()> {
        root_element()?
            .class_list()
            .toggle_with_force("dark", enabled)
            .map(|_| ())
            .map_err(js_err)
    }

    fn try_scroll_to_top() -> anyhow::Result<()> {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);

        window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

impl Effects for DomEffects {
    fn apply_primary_color(&self, color: &str) {
        Self::try_primary_color(color)
            .unwrap_or_else(|err| error!("failed to apply primary color {color}: {err}"));
    }

    fn set_dark_theme(&self, enabled: bool) {
        Self::try_dark_theme(enabled)
            .unwrap_or_else(|err| error!("failed to set dark theme to {enabled}: {err}"));
    }

    fn scroll_to_top(&self) {
        Self::try_scroll_to_top().unwrap_or_else(|err| error!("failed to scroll to top: {err}"));
    }
}

// blocking browser notice, used for login failures and contact receipts
pub fn alert(message: &str) {
    let result = window().and_then(|window| window.alert_with_message(message).map_err(js_err));

    if let Err(err) = result {
        error!("failed to show alert: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::SITE_STYLES;

    #[test]
    fn primary_color_var_is_used_by_stylesheet() {
        assert!(SITE_STYLES.contains(&format!("var({PRIMARY_COLOR_VAR})")));
        assert!(SITE_STYLES.contains(&format!("{PRIMARY_COLOR_VAR}:")));
    }
}
