//! The `UnSdg` goal badge and its stylesheet component.

use yew::prelude::*;

use crate::core::config::SdgConfig;
use crate::core::render::{IMAGE_FETCH_PRIORITY, IMAGE_LOADING, RenderedOutput, render};
use crate::core::state::{ComponentState, DEFAULT_GOAL, SdgInputs};
use crate::core::theme::{PLACEHOLDER_CLASS, ROOT_CLASS, STYLESHEET, SWATCH_CLASS};

/// Properties accepted by [`UnSdg`].
#[derive(Properties, PartialEq, Clone)]
pub struct UnSdgProps {
    /// Goal identifier: `"1"`..`"17"`, `"all"` or `"circle"`.
    #[prop_or(AttrValue::from(DEFAULT_GOAL))]
    pub goal: AttrValue,
    /// Accessible text override; empty keeps the computed alt text.
    #[prop_or(AttrValue::from(""))]
    pub label: AttrValue,
    /// Render the goal color instead of the icon.
    #[prop_or_default]
    pub color_only: bool,
    /// Externally written alt text, replaced on the next goal change.
    #[prop_or_default]
    pub alt: Option<AttrValue>,
    /// Extra classes for the root element.
    #[prop_or_default]
    pub class: Classes,
    /// Notified with the resolved alt text after it changes.
    #[prop_or_default]
    pub on_resolve: Option<Callback<Option<AttrValue>>>,
}

impl UnSdgProps {
    fn inputs(&self) -> SdgInputs {
        SdgInputs {
            goal: self.goal.to_string(),
            label: self.label.to_string(),
            color_only: self.color_only,
            alt: self.alt.as_ref().map(ToString::to_string),
        }
    }
}

/// Sustainable Development Goal icon, badge, or color swatch.
///
/// Reads [`SdgConfig`] from context when provided and falls back to defaults.
#[function_component(UnSdg)]
pub fn un_sdg(props: &UnSdgProps) -> Html {
    let config = use_context::<SdgConfig>().unwrap_or_default();
    let state = use_mut_ref(ComponentState::new);
    let (output, resolved_alt) = {
        let mut state = state.borrow_mut();
        state.apply(&props.inputs(), &config);
        (
            render(&state, &config),
            state.alt_text().map(|alt| AttrValue::from(alt.to_string())),
        )
    };

    {
        let on_resolve = props.on_resolve.clone();
        use_effect_with_deps(
            move |alt: &Option<AttrValue>| {
                if let Some(on_resolve) = on_resolve {
                    on_resolve.emit(alt.clone());
                }
                || ()
            },
            resolved_alt,
        );
    }

    let body = match output {
        RenderedOutput::Swatch { color } => html! {
            <div class={SWATCH_CLASS} style={format!("background-color: {color};")}></div>
        },
        RenderedOutput::Image { src, alt } => html! {
            <img
                src={src.map(AttrValue::from)}
                alt={alt.map(AttrValue::from)}
                loading={IMAGE_LOADING}
                fetchpriority={IMAGE_FETCH_PRIORITY}
            />
        },
        RenderedOutput::Placeholder { label } => html! {
            <div
                class={PLACEHOLDER_CLASS}
                role="img"
                aria-label={label.map(AttrValue::from)}
            ></div>
        },
    };

    html! {
        <span class={classes!(ROOT_CLASS, props.class.clone())}>
            {body}
        </span>
    }
}

/// Inline `<style>` carrying the component stylesheet for Yew hosts.
#[function_component(SdgStyles)]
pub fn sdg_styles() -> Html {
    html! { <style>{STYLESHEET.as_str()}</style> }
}
