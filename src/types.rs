/// Stable unique record identifier, assigned at content-authoring time.
/// Example: `faq-connect-stripe`
pub type RecordId = String;
/// Collection identifier as it appears at call sites.
/// Examples: `faqs`, `pricingplans`, `usertestimonials`
pub type CollectionId = String;
/// Name of a reference field to resolve against another collection.
/// Defined in the interface for forward compatibility; unused by current data.
pub type FieldName = String;
/// Identifier for the source that produced a set of collections.
/// Examples: `bundled`, `content_dir`
pub type SourceId = String;
