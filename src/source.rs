//! Content source capability and the bundled static store.
//!
//! Ownership model:
//! - `ContentSource` is the page-facing interface that resolves a collection
//!   tag to its full record sequence. It is the seam for a future remote
//!   backend; every lookup is independent and retryable.
//! - `ContentStore` owns the immutable dataset: loaded once at construction
//!   (compiled-in fixtures or a directory of JSON files), read for the
//!   process lifetime, never mutated.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::collection::Collection;
use crate::errors::ContentError;
use crate::records::{
    ContentItem, ContentRecord, Faq, HowItWorksStep, PricingPlan, ProductFeature, Testimonial,
    UseCase,
};
use crate::types::{FieldName, SourceId};

/// Source id reported by stores built from compiled-in fixtures.
pub const BUNDLED_SOURCE_ID: &str = "bundled";

/// Page-facing data source capability.
///
/// Resolution is synchronous: the bundled store never suspends, and the
/// contract stays meaningful for a remote implementation because each lookup
/// is independent of every other. `include_referenced` names reference fields
/// to resolve against other collections; no current data uses them, so
/// built-in sources accept and ignore the argument.
pub trait ContentSource: Send + Sync {
    /// Stable source identifier used in logs.
    fn id(&self) -> &str;

    /// Return the entire record sequence for `collection` in authored order.
    fn get_all(
        &self,
        collection: Collection,
        include_referenced: &[FieldName],
    ) -> Result<Vec<ContentItem>, ContentError>;

    /// Exact record count for `collection`.
    fn reported_record_count(&self, collection: Collection) -> Result<usize, ContentError> {
        self.get_all(collection, &[]).map(|records| records.len())
    }
}

/// Immutable, insertion-ordered store over all six collections.
#[derive(Debug)]
pub struct ContentStore {
    id: SourceId,
    collections: IndexMap<Collection, Vec<ContentItem>>,
}

impl ContentStore {
    /// Build the store from the fixtures compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        let mut collections = empty_collections();
        for collection in Collection::ALL {
            let items = decode_items(collection, bundled_fixture(collection))?;
            ensure_unique_ids(collection, &items)?;
            collections.insert(collection, items);
        }
        let store = Self {
            id: BUNDLED_SOURCE_ID.to_string(),
            collections,
        };
        store.log_loaded();
        Ok(store)
    }

    /// Build the store from a directory holding one `<slug>.json` file per
    /// collection.
    ///
    /// A missing file yields an empty collection (logged as a warning, since
    /// authored bundles normally ship all six); malformed JSON and duplicate
    /// record ids fail the load.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ContentError> {
        let dir = dir.as_ref();
        let mut collections = empty_collections();
        for collection in Collection::ALL {
            let path = dir.join(format!("{}.json", collection.slug()));
            if !path.exists() {
                warn!(
                    collection = collection.slug(),
                    path = %path.display(),
                    "fixture file missing; collection loads empty"
                );
                continue;
            }
            let json = fs::read_to_string(&path)?;
            let items = decode_items(collection, &json)?;
            ensure_unique_ids(collection, &items)?;
            collections.insert(collection, items);
        }
        let store = Self {
            id: format!("dir:{}", dir.display()),
            collections,
        };
        store.log_loaded();
        Ok(store)
    }

    /// Build a store from prebuilt records, preserving their order within
    /// each collection. Intended for tests and embedders.
    pub fn from_records(
        id: impl Into<SourceId>,
        records: impl IntoIterator<Item = ContentItem>,
    ) -> Result<Self, ContentError> {
        let mut collections = empty_collections();
        for item in records {
            collections
                .entry(item.collection())
                .or_default()
                .push(item);
        }
        for (collection, items) in &collections {
            ensure_unique_ids(*collection, items)?;
        }
        Ok(Self {
            id: id.into(),
            collections,
        })
    }

    /// Full record sequence for `collection`, in authored order.
    pub fn get_all(&self, collection: Collection) -> &[ContentItem] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// String-keyed resolution as the page-assembly layer performs it.
    ///
    /// Unknown identifiers fail with [`ContentError::UnknownCollection`];
    /// no partial result is returned.
    pub fn get_all_by_id(
        &self,
        collection_id: &str,
        include_referenced: &[FieldName],
    ) -> Result<&[ContentItem], ContentError> {
        let collection = Collection::parse(collection_id)?;
        note_ignored_references(self.id(), collection, include_referenced);
        Ok(self.get_all(collection))
    }

    /// Typed iterator over one collection, in authored order.
    pub fn records<'a, T: ContentRecord + 'a>(&'a self) -> impl Iterator<Item = &'a T> {
        self.get_all(T::COLLECTION).iter().filter_map(T::from_item)
    }

    /// Exact record count for `collection`.
    pub fn record_count(&self, collection: Collection) -> usize {
        self.get_all(collection).len()
    }

    fn log_loaded(&self) {
        for (collection, items) in &self.collections {
            debug!(
                source = self.id.as_str(),
                collection = collection.slug(),
                records = items.len(),
                "collection loaded"
            );
        }
    }
}

impl ContentSource for ContentStore {
    fn id(&self) -> &str {
        &self.id
    }

    fn get_all(
        &self,
        collection: Collection,
        include_referenced: &[FieldName],
    ) -> Result<Vec<ContentItem>, ContentError> {
        note_ignored_references(self.id(), collection, include_referenced);
        Ok(ContentStore::get_all(self, collection).to_vec())
    }

    fn reported_record_count(&self, collection: Collection) -> Result<usize, ContentError> {
        Ok(self.record_count(collection))
    }
}

/// Every known collection mapped to an empty sequence, in canonical order.
///
/// Pre-seeding keeps iteration order stable and makes `get_all` total even
/// when a fixture is absent.
fn empty_collections() -> IndexMap<Collection, Vec<ContentItem>> {
    Collection::ALL
        .into_iter()
        .map(|collection| (collection, Vec::new()))
        .collect()
}

fn bundled_fixture(collection: Collection) -> &'static str {
    match collection {
        Collection::Faqs => include_str!("../data/faqs.json"),
        Collection::HowItWorksSteps => include_str!("../data/howitworkssteps.json"),
        Collection::ProductFeatures => include_str!("../data/productfeatures.json"),
        Collection::PricingPlans => include_str!("../data/pricingplans.json"),
        Collection::UseCases => include_str!("../data/usecases.json"),
        Collection::UserTestimonials => include_str!("../data/usertestimonials.json"),
    }
}

fn decode_items(collection: Collection, json: &str) -> Result<Vec<ContentItem>, ContentError> {
    fn decode<T>(collection: Collection, json: &str) -> Result<Vec<ContentItem>, ContentError>
    where
        T: ContentRecord + DeserializeOwned,
    {
        let records: Vec<T> = serde_json::from_str(json)
            .map_err(|source| ContentError::Fixture { collection, source })?;
        Ok(records.into_iter().map(ContentRecord::into_item).collect())
    }

    match collection {
        Collection::Faqs => decode::<Faq>(collection, json),
        Collection::HowItWorksSteps => decode::<HowItWorksStep>(collection, json),
        Collection::ProductFeatures => decode::<ProductFeature>(collection, json),
        Collection::PricingPlans => decode::<PricingPlan>(collection, json),
        Collection::UseCases => decode::<UseCase>(collection, json),
        Collection::UserTestimonials => decode::<Testimonial>(collection, json),
    }
}

fn ensure_unique_ids(collection: Collection, items: &[ContentItem]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(ContentError::DuplicateRecord {
                collection,
                id: item.id().clone(),
            });
        }
    }
    Ok(())
}

fn note_ignored_references(source: &str, collection: Collection, include_referenced: &[FieldName]) {
    if !include_referenced.is_empty() {
        debug!(
            source,
            collection = collection.slug(),
            fields = ?include_referenced,
            "reference resolution requested but no data defines references; ignoring"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: &str) -> ContentItem {
        ContentItem::Faq(serde_json::from_str(&format!(r#"{{"_id": "{id}"}}"#)).unwrap())
    }

    #[test]
    fn from_records_groups_by_collection_preserving_order() {
        let plan: PricingPlan = serde_json::from_str(r#"{"_id": "plan-1"}"#).unwrap();
        let store = ContentStore::from_records(
            "unit",
            vec![faq("faq-b"), plan.into_item(), faq("faq-a")],
        )
        .unwrap();

        let ids: Vec<&str> = store
            .get_all(Collection::Faqs)
            .iter()
            .map(|item| item.id().as_str())
            .collect();
        assert_eq!(ids, vec!["faq-b", "faq-a"]);
        assert_eq!(store.record_count(Collection::PricingPlans), 1);
        assert_eq!(store.record_count(Collection::UseCases), 0);
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let err =
            ContentStore::from_records("unit", vec![faq("faq-1"), faq("faq-1")]).unwrap_err();
        match err {
            ContentError::DuplicateRecord { collection, id } => {
                assert_eq!(collection, Collection::Faqs);
                assert_eq!(id, "faq-1");
            }
            other => panic!("expected DuplicateRecord, got {other:?}"),
        }
    }

    #[test]
    fn get_all_is_total_for_empty_collections() {
        let store = ContentStore::from_records("unit", Vec::new()).unwrap();
        for collection in Collection::ALL {
            assert!(store.get_all(collection).is_empty());
        }
    }

    #[test]
    fn source_default_record_count_matches_get_all() {
        let store =
            ContentStore::from_records("unit", vec![faq("faq-1"), faq("faq-2")]).unwrap();
        let source: &dyn ContentSource = &store;
        assert_eq!(
            source.reported_record_count(Collection::Faqs).unwrap(),
            source.get_all(Collection::Faqs, &[]).unwrap().len()
        );
    }
}
