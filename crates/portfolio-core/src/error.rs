use thiserror::Error;

/// A required contact form field was left blank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid {document} document: {source}")]
    Decode {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode {document}: {source}")]
    Encode {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
