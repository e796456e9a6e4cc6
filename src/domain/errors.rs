/// Flat error type shared by every layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ValidationError(String),
    RenderingError(String),
    UiError(String),
    ConfigError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::UiError(msg) => write!(f, "UI Error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::ValidationError(error.to_string())
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type ValidationResult<T> = Result<T, AppError>;
pub type ChartResult<T> = Result<T, AppError>;
pub type ConfigResult<T> = Result<T, AppError>;
