use fluent::{FluentBundle, FluentResource};
use gloo::utils::{document, window};
use unic_langid::langid;
use wasm_bindgen::JsValue;

#[macro_export]
macro_rules! tr {
    ($model:expr, $key:expr, $($arg_name:expr => $arg_value:expr),+ $(,)?) => {{
        let message = $model.get_message($key).expect("Message doesn't exist.");
        let pattern = message.value().expect("Message has no value.");

        let mut args = fluent::FluentArgs::new();
        $(
            args.set($arg_name, $arg_value);
        )+

        let mut errors = Vec::new();
        $model
            .format_pattern(pattern, Some(&args), &mut errors)
            .to_string()
    }};
    ($model:expr, $key:expr) => {{
        let message = $model.get_message($key).expect("Message doesn't exist.");
        let pattern = message.value().expect("Message has no value.");

        let mut errors = Vec::new();
        $model
            .format_pattern(pattern, None, &mut errors)
            .to_string()
    }};
}

pub fn create_bundle(content: impl Into<String>) -> FluentBundle<FluentResource> {
    let lang_id = langid!("en-US");
    let mut bundle = FluentBundle::new(vec![lang_id]);
    // no unicode isolation marks around placeables
    bundle.set_use_isolating(false);
    let resource =
        FluentResource::try_new(content.into()).expect("Failed to create FluentResource.");
    bundle
        .add_resource(resource)
        .expect("Failed to add FTL resources to the bundle.");

    bundle
}

pub fn get_local_storage(key: &str) -> Option<String> {
    window()
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn set_local_storage(key: &str, value: &str) -> Result<(), JsValue> {
    let storage = window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("local storage unavailable"))?;
    storage.set_item(key, value)
}

pub fn remove_local_storage(key: &str) {
    if let Ok(Some(storage)) = window().local_storage() {
        if let Err(err) = storage.remove_item(key) {
            log::error!("remove {} from local storage error: {:?}", key, err);
        }
    }
}

/// switch the css theme, `light` or `dark`
pub fn set_theme(theme: &str) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute("data-theme", theme) {
            log::error!("set theme error: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    const RES: &str = r#"
title = Friends
greeting = Hello { $name }!
"#;

    #[test]
    fn translates_plain_and_parameterised_messages() {
        let bundle = super::create_bundle(RES);
        assert_eq!(tr!(bundle, "title"), "Friends");
        assert_eq!(tr!(bundle, "greeting", "name" => "Ana"), "Hello Ana!");
    }
}
