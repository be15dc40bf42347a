use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::selection::{Selection, SelectionAction};
use crate::timer::{AutoAdvance, IntervalScheduler};
use crate::visibility::{ObserverOptions, VisibilityLatch};

#[derive(Clone, PartialEq)]
pub struct StepHighlighter {
    selection: Selection,
    pub select: Callback<usize>,
}

impl StepHighlighter {
    pub fn active(&self) -> usize {
        self.selection.active()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.selection.is_active(index)
    }
}

/// Active step of the flow, advanced every `period_ms` until the view unmounts.
#[hook]
pub fn use_step_highlighter(initial: Selection, period_ms: u32) -> StepHighlighter {
    let selection = use_reducer(move || initial);

    {
        let dispatcher = selection.dispatcher();
        use_effect_with_deps(
            move |&period_ms| {
                let mut auto = AutoAdvance::new(IntervalScheduler, period_ms);
                auto.start(move || dispatcher.dispatch(SelectionAction::Advance));
                move || {
                    auto.stop();
                }
            },
            period_ms,
        );
    }

    // Stable across renders
    let select = {
        let dispatcher = selection.dispatcher();
        use_callback(
            move |index: usize, _| dispatcher.dispatch(SelectionAction::Select(index)),
            (),
        )
    };

    StepHighlighter {
        selection: *selection,
        select,
    }
}

#[derive(Debug, Error)]
enum ObserveError {
    #[error("section is not mounted")]
    Detached,
    #[error("IntersectionObserver unavailable: {0}")]
    Unsupported(String),
}

struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    node: &NodeRef,
    options: &ObserverOptions,
    mut latch: VisibilityLatch,
    on_visible: UseStateSetter<bool>,
) -> Result<InViewObserver, ObserveError> {
    let element = node.cast::<Element>().ok_or(ObserveError::Detached)?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                    debug!("section entered viewport");
                    on_visible.set(latch.is_visible());
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    let thresholds = options
        .thresholds()
        .into_iter()
        .map(JsValue::from_f64)
        .collect::<Array>();
    init.set_threshold(&thresholds);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| ObserveError::Unsupported(format!("{:?}", e)))?;
    observer.observe(&element);

    Ok(InViewObserver {
        observer,
        _callback: callback,
    })
}

/// Latches to `true` the first time `node` mostly enters the viewport.
#[hook]
pub fn use_in_view(node: NodeRef, options: ObserverOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let latch = VisibilityLatch::new(options.threshold);
                let observer = match observe_once(node, options, latch, visible.setter()) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("{}, showing section without entrance animation", e);
                        let mut latch = latch;
                        if latch.force_visible() {
                            visible.set(latch.is_visible());
                        }
                        None
                    }
                };
                move || drop(observer)
            },
            (node, options),
        );
    }

    *visible
}
