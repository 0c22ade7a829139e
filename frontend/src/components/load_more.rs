use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Start loading the next page this far before the sentinel enters view.
const ROOT_MARGIN: &str = "200px";

#[derive(Properties, PartialEq)]
pub struct LoadMoreProps {
    pub on_load_more: Callback<()>,
    pub has_more: bool,
    /// A next-page fetch is currently in flight
    pub is_loading: bool,
}

/// Infinite-scroll sentinel. While there are further pages and no fetch is
/// running, an IntersectionObserver watches the sentinel and fires
/// `on_load_more` when it scrolls into range. The observer is disconnected
/// on every exit path: props changing, `has_more` flipping false, unmount.
/// Repeat fires while the sentinel stays visible are absorbed by the
/// fetcher's in-flight guard.
#[function_component(LoadMoreTrigger)]
pub fn load_more_trigger(props: &LoadMoreProps) -> Html {
    let sentinel = use_node_ref();

    {
        let sentinel = sentinel.clone();
        use_effect_with(
            (props.has_more, props.is_loading, props.on_load_more.clone()),
            move |(has_more, is_loading, on_load_more)| {
                let mut active: Option<(
                    IntersectionObserver,
                    Closure<dyn Fn(js_sys::Array, IntersectionObserver)>,
                )> = None;

                if *has_more && !*is_loading {
                    if let Some(element) = sentinel.cast::<Element>() {
                        let on_load_more = on_load_more.clone();
                        let on_intersect = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                let entered = entries.iter().any(|entry| {
                                    entry
                                        .unchecked_into::<IntersectionObserverEntry>()
                                        .is_intersecting()
                                });
                                if entered {
                                    on_load_more.emit(());
                                }
                            },
                        );

                        let options = IntersectionObserverInit::new();
                        options.set_root_margin(ROOT_MARGIN);

                        match IntersectionObserver::new_with_options(
                            on_intersect.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                active = Some((observer, on_intersect));
                            }
                            Err(_) => {
                                Logger::error("load-more", "failed to create IntersectionObserver");
                            }
                        }
                    }
                }

                move || {
                    if let Some((observer, on_intersect)) = active.take() {
                        observer.disconnect();
                        drop(on_intersect);
                    }
                }
            },
        );
    }

    if !props.has_more {
        return html! {};
    }

    html! {
        <div ref={sentinel} class="load-more-sentinel">
            {if props.is_loading {
                html! { <div class="spinner" /> }
            } else {
                html! {}
            }}
        </div>
    }
}
