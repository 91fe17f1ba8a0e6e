use thiserror::Error;

/// Errors surfaced to callers. Out-of-range physical input is never an error;
/// it shows up as NaN or as a masked element.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Arguments cannot be broadcast to a common shape: {shapes:?}")]
    ShapeMismatch { shapes: Vec<Vec<usize>> },

    #[error("Invalid array shape: {source}")]
    Shape {
        #[source]
        source: ndarray::ShapeError,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --assumptions-json: {source}")]
    ParseAssumptionsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing input '{series}' required by {property}")]
    MissingSeries {
        property: &'static str,
        series: &'static str,
    },

    #[error("Unexpected error: {0}")]
    Other(String),

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --input or --inputs-json")]
    MissingInputData,
}

impl From<ndarray::ShapeError> for AppError {
    fn from(source: ndarray::ShapeError) -> Self {
        AppError::Shape { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_lists_shapes() {
        let err = AppError::ShapeMismatch {
            shapes: vec![vec![3], vec![4]],
        };
        let msg = err.to_string();
        assert!(msg.contains("[3]") && msg.contains("[4]"), "{msg}");
    }

    #[test]
    fn missing_series_names_property() {
        let err = AppError::MissingSeries {
            property: "sa_from_rho_t_exact",
            series: "rho",
        };
        assert!(err.to_string().contains("sa_from_rho_t_exact"));
    }
}
