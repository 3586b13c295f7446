use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid page {0}, expected a value between 1 and {1}")]
    InvalidPage(u32, u32),

    #[error("invalid date '{0}': {1}")]
    InvalidDate(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid API URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
