use std::io;

use thiserror::Error;

use crate::collection::Collection;
use crate::types::{CollectionId, RecordId};

/// Error type for collection resolution and fixture loading failures.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The requested identifier is not in the closed set of known collections.
    ///
    /// Lookups are hard-coded at call sites, so this is a configuration
    /// defect rather than a recoverable runtime condition; the outcome is
    /// deterministic for a given identifier.
    #[error("unknown collection: {0}")]
    UnknownCollection(CollectionId),
    /// A fixture payload failed to decode against its collection schema.
    #[error("collection '{collection}' fixture is invalid: {source}")]
    Fixture {
        /// Collection whose fixture failed to decode.
        collection: Collection,
        /// Underlying JSON decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Two records in the same collection carry the same id.
    #[error("duplicate record id '{id}' in collection '{collection}'")]
    DuplicateRecord {
        /// Collection containing the duplicate.
        collection: Collection,
        /// Offending record id.
        id: RecordId,
    },
    /// Filesystem failure while loading fixtures from a directory.
    #[error(transparent)]
    Io(#[from] io::Error),
}
