use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum LightboxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{id} not found")]
    MissingElement { id: String },
    #[error("element #{id} is not an {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("could not set display on #{id}")]
    Style { id: String },
    #[error("could not register click listener: {0}")]
    Listener(String),
    #[error("invalid lightbox config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LightboxError {
    fn from(e: serde_json::Error) -> Self {
        LightboxError::Config(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for LightboxError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        LightboxError::Config(e.to_string())
    }
}

impl From<LightboxError> for JsValue {
    fn from(e: LightboxError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        let e = LightboxError::MissingElement { id: "modal".to_string() };
        assert_eq!(e.to_string(), "element #modal not found");

        let e = LightboxError::WrongElementType {
            id: "modal-content".to_string(),
            expected: "HtmlImageElement",
        };
        assert_eq!(e.to_string(), "element #modal-content is not an HtmlImageElement");
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: LightboxError = err.into();
        assert!(matches!(e, LightboxError::Config(_)));
        assert!(e.to_string().starts_with("invalid lightbox config: "));
    }
}
