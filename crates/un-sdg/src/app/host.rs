//! Yew root mounted inside each `<un-sdg>` element.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MutationObserver, MutationObserverInit};
use yew::prelude::*;

use crate::components::UnSdg;
use crate::core::attributes::{OBSERVED_ATTRIBUTES, initial_inputs, updated_inputs};
use crate::core::config::SdgConfig;
use crate::core::state::SdgInputs;

use super::properties::SharedView;

#[derive(Properties, PartialEq)]
pub(crate) struct HostedSdgProps {
    pub(crate) host: Element,
    pub(crate) config: SdgConfig,
    pub(crate) view: SharedView,
}

type ObserverCallback = Closure<dyn FnMut(Array, MutationObserver)>;

#[function_component(HostedSdg)]
pub(crate) fn hosted_sdg(props: &HostedSdgProps) -> Html {
    let inputs = {
        let host = props.host.clone();
        use_state(move || initial_inputs(|name| host.get_attribute(name)))
    };

    {
        let inputs = inputs.clone();
        use_effect_with_deps(
            move |host: &Element| {
                let watched = observe_attributes(host, move |snapshot| inputs.set(snapshot));
                move || {
                    if let Some((observer, _callback)) = watched {
                        observer.disconnect();
                    }
                }
            },
            props.host.clone(),
        );
    }

    {
        let view = props.view.clone();
        use_effect_with_deps(
            move |current: &SdgInputs| {
                view.borrow_mut().inputs.clone_from(current);
                || ()
            },
            (*inputs).clone(),
        );
    }

    let on_resolve = {
        let view = props.view.clone();
        Callback::from(move |alt: Option<AttrValue>| {
            view.borrow_mut().alt = alt.map(|alt| alt.to_string());
        })
    };

    let SdgInputs {
        goal,
        label,
        color_only,
        alt,
    } = (*inputs).clone();

    html! {
        <ContextProvider<SdgConfig> context={props.config.clone()}>
            <UnSdg
                goal={goal}
                label={label}
                color_only={color_only}
                alt={alt.map(AttrValue::from)}
                on_resolve={on_resolve}
            />
        </ContextProvider<SdgConfig>>
    }
}

fn observe_attributes<F>(host: &Element, on_change: F) -> Option<(MutationObserver, ObserverCallback)>
where
    F: Fn(SdgInputs) + 'static,
{
    let target = host.clone();
    let callback = ObserverCallback::new(move |_records: Array, _observer: MutationObserver| {
        on_change(updated_inputs(|name| target.get_attribute(name)));
    });
    let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            tracing::warn!(error = ?err, "attribute observer unavailable");
            return None;
        }
    };

    let filter = OBSERVED_ATTRIBUTES
        .iter()
        .map(|name| wasm_bindgen::JsValue::from_str(name))
        .collect::<Array>();
    let init = MutationObserverInit::new();
    init.set_attributes(true);
    init.set_attribute_filter(&filter);
    if let Err(err) = observer.observe_with_options(host, &init) {
        tracing::warn!(error = ?err, "failed to observe host attributes");
        return None;
    }
    Some((observer, callback))
}
