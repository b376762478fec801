//! Browser entry point: upgrades `<un-sdg>` elements into live components.

use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::core::attributes::{ELEMENT_TAG, initial_inputs};
use crate::core::config::SdgConfig;
use crate::core::theme::STYLESHEET;
use host::{HostedSdg, HostedSdgProps};
use properties::{HostView, define_properties};

mod host;
mod properties;

/// Id of the optional `<script type="application/json">` configuration block.
pub const CONFIG_ELEMENT_ID: &str = "un-sdg-config";
const STYLE_ELEMENT_ID: &str = "un-sdg-styles";
const MOUNTED_ATTR: &str = "data-un-sdg-mounted";

static TELEMETRY: OnceCell<()> = OnceCell::new();

/// Mount a component into every `<un-sdg>` element not yet upgraded.
///
/// Installs the panic hook and console tracing on first use, injects the
/// stylesheet once, defines the `goal`, `label`, `colorOnly` and `alt`
/// properties on each element, and returns the number of newly mounted elements.
pub fn mount_all() -> usize {
    init_telemetry();
    let document = document();
    inject_styles(&document);
    let config = load_config(&document);

    let nodes = match document.query_selector_all(ELEMENT_TAG) {
        Ok(nodes) => nodes,
        Err(err) => {
            tracing::warn!(error = ?err, "failed to query goal badge elements");
            return 0;
        }
    };

    let mut mounted = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        if element.has_attribute(MOUNTED_ATTR) {
            continue;
        }
        if let Err(err) = element.set_attribute(MOUNTED_ATTR, "") {
            tracing::warn!(error = ?err, "failed to mark goal badge as mounted");
        }
        let view = Rc::new(RefCell::new(HostView {
            inputs: initial_inputs(|name| element.get_attribute(name)),
            alt: None,
        }));
        define_properties(&element, &view);
        yew::Renderer::<HostedSdg>::with_root_and_props(
            element.clone(),
            HostedSdgProps {
                host: element,
                config: config.clone(),
                view,
            },
        )
        .render();
        mounted += 1;
    }
    tracing::info!(mounted, "mounted goal badges");
    mounted
}

fn init_telemetry() {
    TELEMETRY.get_or_init(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default_with_config(
            WASMLayerConfigBuilder::new()
                .set_max_level(Level::INFO)
                .build(),
        );
    });
}

fn inject_styles(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        tracing::warn!("document has no head; goal badge styles not injected");
        return;
    };
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(err) => {
            tracing::warn!(error = ?err, "failed to create style element");
            return;
        }
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET.as_str()));
    if let Err(err) = head.append_child(&style) {
        tracing::warn!(error = ?err, "failed to inject goal badge styles");
    }
}

fn load_config(document: &Document) -> SdgConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return SdgConfig::default();
    };
    SdgConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid goal badge configuration; using defaults");
        SdgConfig::default()
    })
}
