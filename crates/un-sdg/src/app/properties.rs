//! Script-visible accessor properties on upgraded `<un-sdg>` elements.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::core::attributes::{AttributeWrite, HostProperty, PropertyValue};
use crate::core::state::SdgInputs;

/// Live view of one element backing its property getters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct HostView {
    pub(crate) inputs: SdgInputs,
    pub(crate) alt: Option<String>,
}

pub(crate) type SharedView = Rc<RefCell<HostView>>;

/// Define `goal`, `label`, `colorOnly` and `alt` on `host`.
///
/// Values assigned by page script before the upgrade are replayed through the
/// new setters so they land on the attributes.
pub(crate) fn define_properties(host: &Element, view: &SharedView) {
    for property in HostProperty::ALL {
        let earlier = take_own_value(host, property);
        if let Err(err) = define(host, view, property) {
            tracing::warn!(property = property.name(), error = ?err, "failed to define host property");
            continue;
        }
        if let Some(value) = earlier
            && let Err(err) = Reflect::set(host, &JsValue::from_str(property.name()), &value)
        {
            tracing::warn!(property = property.name(), error = ?err, "failed to replay host property");
        }
    }
}

fn take_own_value(host: &Element, property: HostProperty) -> Option<JsValue> {
    let key = JsValue::from_str(property.name());
    if !host.unchecked_ref::<Object>().has_own_property(&key) {
        return None;
    }
    let value = Reflect::get(host, &key).ok()?;
    Reflect::delete_property(host.unchecked_ref::<Object>(), &key).ok()?;
    Some(value)
}

fn define(host: &Element, view: &SharedView, property: HostProperty) -> Result<(), JsValue> {
    let getter = {
        let view = Rc::clone(view);
        Closure::<dyn Fn() -> JsValue>::wrap(Box::new(move || {
            let view = view.borrow();
            to_js(property.read(&view.inputs, view.alt.as_deref()))
        }))
    };
    let setter = {
        let view = Rc::clone(view);
        let target = host.clone();
        Closure::<dyn Fn(JsValue)>::wrap(Box::new(move |value: JsValue| {
            let write = property.write(&mut view.borrow_mut().inputs, from_js(property, &value));
            let applied = match write {
                AttributeWrite::Set(value) => target.set_attribute(property.attribute(), &value),
                AttributeWrite::Remove => target.remove_attribute(property.attribute()),
            };
            if let Err(err) = applied {
                tracing::warn!(property = property.name(), error = ?err, "failed to reflect host property");
            }
        }))
    };

    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("get"), getter.as_ref())?;
    Reflect::set(&descriptor, &JsValue::from_str("set"), setter.as_ref())?;
    Reflect::set(&descriptor, &JsValue::from_str("configurable"), &JsValue::TRUE)?;
    Reflect::set(&descriptor, &JsValue::from_str("enumerable"), &JsValue::TRUE)?;
    Object::define_property(
        host.unchecked_ref::<Object>(),
        &JsValue::from_str(property.name()),
        &descriptor,
    );

    // Accessors stay installed for the element's lifetime.
    getter.forget();
    setter.forget();
    Ok(())
}

fn to_js(value: PropertyValue) -> JsValue {
    match value {
        PropertyValue::Text(Some(text)) => JsValue::from_str(&text),
        PropertyValue::Text(None) => JsValue::NULL,
        PropertyValue::Flag(on) => JsValue::from_bool(on),
    }
}

fn from_js(property: HostProperty, value: &JsValue) -> PropertyValue {
    if property.is_flag() {
        return PropertyValue::Flag(value.is_truthy());
    }
    if value.is_null() || value.is_undefined() {
        return PropertyValue::Text(None);
    }
    PropertyValue::Text(
        value
            .as_string()
            .or_else(|| value.as_f64().map(|number| number.to_string()))
            .or_else(|| value.as_bool().map(|on| on.to_string())),
    )
}
