//! Browser bindings
//!
//! `DomView` implements [`DashboardView`] over `web-sys`; `boot` wires the
//! page events and starts the first refresh cycle. Chart and icon libraries
//! are looked up once here and handed to the controller, which never inspects
//! the global scope itself.

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, Window,
};

use crate::alerts::AlertElement;
use crate::client::ApiClient;
use crate::config::Config;
use crate::controller::Dashboard;
use crate::dashboard::{self, ids};
use crate::error::{DashboardError, Result};
use crate::health::HealthTier;
use crate::logging;
use crate::types::TrendsPayload;
use crate::view::{ChartSink, DashboardView, FormFields, IconRenderer, StatField};

const HIDDEN: &str = "hidden";

/// Page bound to the live document
pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let found = self.document.get_element_by_id(id);
        if found.is_none() {
            log::warn!("Element #{id} not found");
        }
        found
    }

    fn input_value(&self, id: &str) -> String {
        let Some(el) = self.element(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            el.text_content().unwrap_or_default()
        }
    }

    fn build_alert(&self, alert: &AlertElement) -> Result<Element> {
        let row = self.document.create_element("div")?;
        row.set_class_name(&alert.style.row_class());

        let icon = self.document.create_element("i")?;
        icon.set_attribute("data-lucide", alert.style.glyph)?;
        icon.set_attribute("class", &alert.style.icon_classes())?;

        let text = self.document.create_element("span")?;
        text.set_class_name("leading-snug");
        text.set_text_content(Some(&alert.text));

        row.append_child(&icon)?;
        row.append_child(&text)?;
        Ok(row)
    }

    /// Insert the page shell when the host page does not provide one
    pub fn mount_shell(&self) -> Result<()> {
        if self.document.get_element_by_id(ids::ALERTS).is_some() {
            return Ok(());
        }

        let body = self
            .document
            .body()
            .ok_or_else(|| DashboardError::Dom("document has no <body>".into()))?;
        body.insert_adjacent_html("beforeend", dashboard::TEMPLATE)?;

        if let Some(head) = self.document.head() {
            let style = self.document.create_element("style")?;
            style.set_text_content(Some(dashboard::STYLES));
            head.append_child(&style)?;
        }

        log::debug!("Mounted dashboard shell");
        Ok(())
    }

    fn set_modal_hidden(&self, hidden: bool) {
        let Some(modal) = self.element(ids::MODAL) else {
            return;
        };
        let classes = modal.class_list();
        let result = if hidden { classes.add_1(HIDDEN) } else { classes.remove_1(HIDDEN) };
        if let Err(e) = result {
            log::error!("Failed to toggle modal: {e:?}");
        }
    }
}

impl DashboardView for DomView {
    fn set_stat(&self, field: StatField, text: &str) {
        let id = match field {
            StatField::Revenue => ids::STAT_REVENUE,
            StatField::Profit => ids::STAT_PROFIT,
            StatField::Margin => ids::STAT_MARGIN,
            StatField::Health => ids::STAT_HEALTH,
            StatField::HealthLabel => ids::STAT_HEALTH_LABEL,
        };
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_health_bar(&self, width: &str, tier: HealthTier) {
        let Some(bar) = self.element(ids::HEALTH_BAR) else {
            return;
        };
        bar.set_class_name(&tier.bar_class());
        if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
            if let Err(e) = bar.style().set_property("width", width) {
                log::error!("Failed to set health bar width: {e:?}");
            }
        }
    }

    fn replace_alerts(&self, alerts: &[AlertElement]) {
        let Some(container) = self.element(ids::ALERTS) else {
            return;
        };
        container.set_text_content(None);

        for alert in alerts {
            match self.build_alert(alert) {
                Ok(row) => {
                    if let Err(e) = container.append_child(&row) {
                        log::error!("Failed to append alert: {e:?}");
                    }
                }
                Err(e) => log::error!("Failed to build alert: {e}"),
            }
        }
    }

    fn read_form(&self) -> FormFields {
        FormFields {
            date: self.input_value(ids::DATE),
            revenue: self.input_value(ids::REVENUE),
            expenses: self.input_value(ids::EXPENSES),
            inventory: self.input_value(ids::INVENTORY),
            category: self.input_value(ids::CATEGORY),
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.element(ids::FORM).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
            form.reset();
        }
    }

    fn close_modal(&self) {
        self.set_modal_hidden(true);
    }

    fn show_dialog(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("Failed to show dialog: {e:?}");
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(button) = self
            .element(ids::SUBMIT)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(!enabled);
        }
    }

    fn set_last_updated(&self, text: &str) {
        if let Some(el) = self.document.get_element_by_id(ids::REFRESH_TIME) {
            el.set_text_content(Some(text));
        }
    }
}

/// `window.updateTrendsChart(trends)`
pub struct JsChartSink {
    update: js_sys::Function,
}

impl JsChartSink {
    pub fn detect(window: &Window) -> Option<Self> {
        js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("updateTrendsChart"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .map(|update| Self { update })
    }
}

impl ChartSink for JsChartSink {
    fn update_trends(&self, trends: &TrendsPayload) {
        // Plain JS objects, not Maps, so chart code can read fields directly
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match trends.serialize(&serializer) {
            Ok(value) => {
                if let Err(e) = self.update.call1(&JsValue::NULL, &value) {
                    log::error!("updateTrendsChart threw: {e:?}");
                }
            }
            Err(e) => log::error!("Failed to convert trends for chart: {e}"),
        }
    }
}

/// `window.lucide.createIcons()`
pub struct LucideIcons {
    lucide: JsValue,
    create: js_sys::Function,
}

impl LucideIcons {
    pub fn detect(window: &Window) -> Option<Self> {
        let lucide = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("lucide")).ok()?;
        if !lucide.is_object() {
            return None;
        }
        let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        Some(Self { lucide, create })
    }
}

impl IconRenderer for LucideIcons {
    fn create_icons(&self) {
        if let Err(e) = self.create.call0(&self.lucide) {
            log::error!("lucide.createIcons threw: {e:?}");
        }
    }
}

fn on<F>(target: &Element, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn required(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DashboardError::Dom(format!("missing element #{id}")))
}

fn wire_events(dashboard: &Rc<Dashboard<DomView>>, document: &Document) -> Result<()> {
    let dash = Rc::clone(dashboard);
    on(&required(document, ids::FORM)?, "submit", move |event| {
        event.prevent_default();
        let dash = Rc::clone(&dash);
        spawn_local(async move {
            dash.submit_entry().await;
        });
    })?;

    let dash = Rc::clone(dashboard);
    on(&required(document, ids::REFRESH)?, "click", move |_| {
        let dash = Rc::clone(&dash);
        spawn_local(async move {
            dash.refresh().await;
        });
    })?;

    let dash = Rc::clone(dashboard);
    on(&required(document, ids::OPEN_MODAL)?, "click", move |_| {
        dash.view().set_modal_hidden(false);
    })?;

    let dash = Rc::clone(dashboard);
    on(&required(document, ids::CLOSE_MODAL)?, "click", move |_| {
        dash.view().close_modal();
    })?;

    Ok(())
}

fn spawn_polling(dashboard: Rc<Dashboard<DomView>>, interval_secs: u32) {
    log::info!("Auto-refresh every {interval_secs}s");
    spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(interval_secs.saturating_mul(1000)).await;
            dashboard.refresh().await;
        }
    });
}

/// Load config, mount and wire the page, run the first refresh
pub fn boot() -> Result<()> {
    logging::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| DashboardError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DashboardError::Dom("no document".into()))?;

    let config = Config::from_lookup(|key| document.body().and_then(|body| body.dataset().get(key)))?;
    logging::init(config.level_filter());
    log::info!(
        "BizHealth dashboard v{} ({}) -> {}",
        env!("CARGO_PKG_VERSION"),
        config.environment,
        config.api_base
    );

    let view = DomView::new(window.clone(), document.clone());
    view.mount_shell()?;

    let mut dashboard = Dashboard::new(ApiClient::new(config.clone()), view);
    match JsChartSink::detect(&window) {
        Some(chart) => dashboard = dashboard.with_chart(Box::new(chart)),
        None => log::debug!("updateTrendsChart not defined, chart updates disabled"),
    }
    match LucideIcons::detect(&window) {
        Some(icons) => dashboard = dashboard.with_icons(Box::new(icons)),
        None => log::debug!("lucide not loaded, alert icons stay as placeholders"),
    }

    let dashboard = Rc::new(dashboard);
    wire_events(&dashboard, &document)?;

    let first = Rc::clone(&dashboard);
    spawn_local(async move {
        first.refresh().await;
    });

    if config.refresh_interval_secs > 0 {
        spawn_polling(dashboard, config.refresh_interval_secs);
    }

    Ok(())
}
