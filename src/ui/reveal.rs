//! Scroll-triggered reveal for Leptos components
//!
//! `use_reveal_on_scroll` wires a `VisibilityObserver` to the browser
//! `IntersectionObserver` and exposes the one-way visibility flag as a signal.
//! On the server the flag stays `false`; the client takes over after hydration.

use leptos::html;
use leptos::prelude::*;

use crate::core::reveal::{RevealElement, RevealTable};
use crate::core::visibility::ObserverOptions;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

#[cfg(not(feature = "ssr"))]
use crate::core::visibility::{EventSink, IntersectionEvent, ObserverError, ViewportObserver};

/// `ViewportObserver` backed by the browser `IntersectionObserver`
#[cfg(not(feature = "ssr"))]
#[derive(Default)]
pub struct BrowserViewport {
    observer: Option<web_sys::IntersectionObserver>,
    // Kept alive for as long as the observer may call it
    callback: Option<
        wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    >,
}

#[cfg(not(feature = "ssr"))]
impl BrowserViewport {
    fn is_supported(window: &web_sys::Window) -> bool {
        js_sys::Reflect::has(window, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    }
}

#[cfg(not(feature = "ssr"))]
impl ViewportObserver for BrowserViewport {
    type Target = web_sys::Element;

    fn observe(
        &mut self,
        target: &web_sys::Element,
        options: &ObserverOptions,
        mut sink: EventSink,
    ) -> Result<(), ObserverError> {
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or(ObserverError::Unsupported)?;
        if !Self::is_supported(&window) {
            return Err(ObserverError::Unsupported);
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    sink(IntersectionEvent::new(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    ));
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| ObserverError::Registration(format!("{:?}", e)))?;
        observer.observe(target);

        self.observer = Some(observer);
        self.callback = Some(callback);
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Track whether `target` has entered the viewport
///
/// The returned signal flips to `true` once and never back. The observation is
/// released when the owning component is cleaned up.
pub fn use_reveal_on_scroll(
    target: NodeRef<html::Section>,
    options: ObserverOptions,
) -> Signal<bool> {
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::core::visibility::{StartOutcome, VisibilityObserver};

        type SharedObserver = Rc<RefCell<VisibilityObserver<BrowserViewport>>>;

        // Dropping the stored controller disconnects it as well
        let handle = StoredValue::new_local(None::<SharedObserver>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if handle.with_value(|observer| observer.is_some()) {
                return;
            }

            let observer: SharedObserver = Rc::new(RefCell::new(VisibilityObserver::new(
                BrowserViewport::default(),
                options,
            )));

            let weak = Rc::downgrade(&observer);
            let sink: EventSink = Box::new(move |event| {
                let Some(observer) = weak.upgrade() else {
                    return;
                };
                let revealed = observer.borrow_mut().handle(event);
                if revealed {
                    visible.set(true);
                }
            });

            let outcome = observer.borrow_mut().start(&element, sink);
            if outcome == StartOutcome::FailedOpen {
                visible.set(true);
            }

            handle.set_value(Some(observer));
        });

        on_cleanup(move || {
            if let Some(observer) = handle.try_update_value(|observer| observer.take()).flatten() {
                observer.borrow_mut().teardown();
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, options);
    }

    visible.into()
}

/// Reveal styling bound to a visibility signal
#[derive(Clone, Copy)]
pub struct Reveal {
    table: StoredValue<RevealTable>,
    visible: Signal<bool>,
}

impl Reveal {
    pub fn new(table: RevealTable, visible: Signal<bool>) -> Self {
        Self {
            table: StoredValue::new(table),
            visible,
        }
    }

    /// Reactive class list: `base` plus the element's current reveal state
    pub fn class(
        self,
        element: RevealElement,
        base: &'static str,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || {
            let visible = self.visible.get();
            let state = self.table.with_value(|table| table.resolve(element, visible).class);
            if base.is_empty() {
                state
            } else {
                format!("{} {}", base, state)
            }
        }
    }

    /// Reactive inline style carrying the element's transition timing
    pub fn style(
        self,
        element: RevealElement,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        self.style_with(element, "")
    }

    /// Reactive inline style followed by static declarations
    pub fn style_with(
        self,
        element: RevealElement,
        extra: &'static str,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || {
            let visible = self.visible.get();
            let style = self.table.with_value(|table| table.resolve(element, visible).style);
            if extra.is_empty() {
                style
            } else {
                format!("{} {}", style, extra)
            }
        }
    }
}
