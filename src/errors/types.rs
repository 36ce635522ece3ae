//! Error type definitions for the XMLTV merge engine
//!
//! Nothing in the merge core itself is fatal: malformed filter entries are
//! skipped with a diagnostic and missing provenance is reported, not raised.
//! These types cover the edges where the engine talks to its collaborators
//! (document parsing, filter payloads, configuration files).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    /// A source document could not be parsed into the in-memory model
    #[error("Invalid XMLTV document: {message}")]
    Document { message: String },

    /// A filter payload had a shape we cannot resolve at all
    #[error("Invalid filter payload: {message}")]
    Filter { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Low-level XML reader errors
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl MergeError {
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }

    pub fn filter(message: impl Into<String>) -> Self {
        Self::Filter {
            message: message.into(),
        }
    }
}
