use web_sys::{js_sys, wasm_bindgen::JsValue};

// The Serialize and Deserialize traits are derived so Errors can be stored in
// reactive state and cloned freely between components.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("No token loaded!")]
    NoCachedToken,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serde Error: {0}")]
    Serde(String),

    #[error("No user is signed in!")]
    NoCurrentUser,

    #[error("Price must be a positive number!")]
    InvalidPrice,

    #[error("A token is already being sold!")]
    SellInFlight,
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }
    pub fn serde(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Serde(message)
    }
    pub fn storage(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Storage(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}

// Only browser storage calls hand us a JsValue error.
impl From<JsValue> for Error {
    fn from(error: JsValue) -> Self {
        let message = js_sys::Error::from(error)
            .message()
            .as_string()
            .unwrap_or("unknown JS error".to_string());
        Error::Storage(message)
    }
}
