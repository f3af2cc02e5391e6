// browser plumbing
//
// thin wrappers around web_sys that turn JsValue errors into anyhow errors, so the components
// can log failures instead of panicking
use anyhow::Result;
use futures::channel::mpsc::UnboundedSender;
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use site::{HistoryOp, Section, SectionSpan};

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

fn section_element(section: Section) -> Result<HtmlElement> {
    document()?
        .get_element_by_id(section.id())
        .ok_or_else(|| anyhow::Error::msg(format!("missing element #{section}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow::Error::msg(format!("#{section} is not an html element")))
}

pub fn scroll_y() -> Result<f64> {
    window()?.scroll_y().map_err(js_error)
}

pub fn current_fragment() -> Result<String> {
    window()?.location().hash().map_err(js_error)
}

// measure where each section currently sits on the page
//
// sections that are not in the dom yet are skipped rather than treated as an error
pub fn section_spans() -> Vec<SectionSpan> {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = section_element(section).ok()?;
            Some(SectionSpan::new(
                section,
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ))
        })
        .collect()
}

pub fn apply_history(op: HistoryOp) -> Result<()> {
    let history = window()?.history().map_err(js_error)?;
    let url = op.section().fragment();

    match op {
        HistoryOp::Replace(_) => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
        HistoryOp::Push(_) => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
    }
    .map_err(js_error)
}

pub fn scroll_to(section: Section, smooth: bool) -> Result<()> {
    let options = ScrollIntoViewOptions::new();
    options.set_block(ScrollLogicalPosition::Start);
    if smooth {
        options.set_behavior(ScrollBehavior::Smooth);
    }

    section_element(section)?.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

// scoped subscription to window scroll events
//
// every scroll event is forwarded as a unit message; the listener is removed again when the
// guard is dropped, so holding it inside a component's future ties it to the component
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    pub fn attach(tx: UnboundedSender<()>) -> Result<Self> {
        let window = window()?;

        let callback = Closure::<dyn Fn()>::new(move || {
            // receiver gone means the page is tearing down; drop() will detach us shortly
            let _ = tx.unbounded_send(());
        });

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        debug!("attached scroll listener");
        Ok(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("detached scroll listener"),
            Err(err) => error!("failed to detach scroll listener: {err:?}"),
        }
    }
}
