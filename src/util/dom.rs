//! `web_sys` glue shared by the page components.
//!
//! Everything here needs a browser, so the module is only compiled with the
//! `csr` feature. Listener closures are leaked with `Closure::forget`; they
//! live as long as the page does.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::error::SetupError;
use crate::state::scroll::ScrollMetrics;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

pub fn body() -> Result<HtmlElement, SetupError> {
    document()?.body().ok_or_else(|| SetupError::missing("body"))
}

/// First match for `selector`, or `MissingElement`.
pub fn query(selector: &str) -> Result<Element, SetupError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| SetupError::missing(selector))
}

/// First match for `selector`, treating lookup failures as absent.
pub fn query_opt(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, SetupError> {
    Ok(elements_of(&document()?.query_selector_all(selector)?))
}

pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| elements_of(&list))
        .unwrap_or_default()
}

fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: Element) -> Result<HtmlElement, SetupError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::Js("element is not an HTMLElement".to_owned()))
}

pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Register `handler` for `event` on `target` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], registered as passive so it never blocks scrolling.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Observe `targets` at a single visibility `threshold`.
///
/// `handler` receives each callback batch together with the observer so it
/// can unobserve targets it is done with.
pub fn observe_intersections<F>(targets: &[Element], threshold: f64, mut handler: F) -> Result<(), SetupError>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let batch = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        handler(batch, &observer);
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();
    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

/// Current result of a `matchMedia` query; `false` when unsupported.
pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map_or(false, |mq| mq.matches())
}

pub fn scroll_metrics() -> ScrollMetrics {
    let Some(window) = web_sys::window() else {
        return ScrollMetrics::default();
    };
    let root = window.document().and_then(|doc| doc.document_element());
    let offset = window
        .scroll_y()
        .ok()
        .filter(|y| *y > 0.0)
        .or_else(|| root.as_ref().map(|el| f64::from(el.scroll_top())))
        .unwrap_or(0.0);
    let scroll_height = root.as_ref().map_or(0.0, |el| f64::from(el.scroll_height()));
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    ScrollMetrics { offset, scroll_height, viewport_height }
}

/// Smooth-scroll so the element with `id` aligns to the viewport top.
///
/// Returns `false` when there is no such element.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(target) = document().ok().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
