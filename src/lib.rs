#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Collection tags and identifier resolution.
pub mod collection;
/// Page-level selection helpers.
pub mod queries;
/// Record schemas and the tagged record union.
pub mod records;
/// Content source capability and the bundled static store.
pub mod source;
/// Shared type aliases.
pub mod types;

mod errors;

pub use collection::Collection;
pub use errors::ContentError;
pub use records::{
    ContentItem, ContentRecord, Faq, HowItWorksStep, PricingPlan, ProductFeature, Testimonial,
    UseCase,
};
pub use source::{ContentSource, ContentStore, BUNDLED_SOURCE_ID};
pub use types::{CollectionId, FieldName, RecordId, SourceId};
