use thiserror::Error;

/// Errors produced while loading or parsing a TS catalog.
///
/// Structural variants carry enough detail to identify the offending
/// context and message, so a bad file fails fast with a usable diagnostic.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("XML syntax error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("root element is <{found}>, expected <TS>")]
    UnexpectedRoot { found: String },

    #[error("<TS> element is missing the '{attribute}' attribute")]
    MissingTsAttribute { attribute: &'static str },

    #[error("context #{ordinal} has no <name> element")]
    UnnamedContext { ordinal: usize },

    #[error("message #{ordinal} in context '{context}' is missing <{element}>")]
    IncompleteMessage {
        context: String,
        ordinal: usize,
        element: &'static str,
    },

    #[error("document ended before </TS>")]
    TruncatedDocument,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
