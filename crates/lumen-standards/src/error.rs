#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to parse override bundle: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("override bundle references unknown industry key: {key}")]
    UnknownIndustry { key: String },

    #[error("invalid keyMatch pattern {pattern:?} for KPI {title:?}: {message}")]
    InvalidPattern {
        title: String,
        pattern: String,
        message: String,
    },

    #[error("templateKpis for {key} has a non-numeric variation index: {index:?}")]
    InvalidKpiIndex { key: String, index: String },

    #[error("override templates for {key} contain a malformed variation at index {index}")]
    MalformedVariation { key: String, index: usize },

    #[error("override templates for {key} must contain at least one variation")]
    EmptyPool { key: String },
}
