//! Record schemas for each content collection.
//!
//! All records share a common envelope: a stable `id` plus optional
//! informational timestamps. Every collection-specific field is optional;
//! absence is a valid, expected state and callers render around it. Wire
//! names follow the authored JSON (`_id`, `_createdDate`, `_updatedDate`,
//! camelCase fields).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Collection;

pub use crate::types::RecordId;

/// A frequently asked question (`faqs`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    /// Stable unique identifier within the collection.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Authoring timestamp, informational only.
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp, informational only.
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Question text shown in the accordion trigger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Answer body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Free-form grouping label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Ascending sort key used by the page; absent sorts first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
    /// Whether the page shows this entry at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

/// One step of the onboarding pipeline (`howitworkssteps`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowItWorksStep {
    /// Stable unique identifier within the collection.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Authoring timestamp, informational only.
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp, informational only.
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Step headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Step body copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Illustration or icon asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Ascending sort key used by the page; absent sorts first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,
    /// Optional inline call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action_text: Option<String>,
}

/// A pricing tier (`pricingplans`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    /// Stable unique identifier within the collection.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Authoring timestamp, informational only.
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp, informational only.
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Tier name shown in the plan header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_name: Option<String>,
    /// Numeric price in the display currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Billing unit rendered after the price (e.g. `month`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,
    /// Short tier description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Newline-delimited feature bullets (not a nested list in the source).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    /// Call-to-action label; the page falls back to a default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action_text: Option<String>,
    /// Call-to-action target; the page falls back to a default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action_url: Option<String>,
    /// Marks the visually highlighted tier. At most one plan carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_most_popular: Option<bool>,
}

impl PricingPlan {
    /// Feature bullets split out of the newline-delimited `features` field.
    ///
    /// Blank lines and surrounding whitespace are dropped; an absent field
    /// yields no bullets.
    pub fn feature_lines(&self) -> Vec<&str> {
        self.features
            .as_deref()
            .map(|features| {
                features
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A product feature card (`productfeatures`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeature {
    /// Stable unique identifier within the collection.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Authoring timestamp, informational only.
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp, informational only.
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Feature headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One-line summary used in compact layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Full card body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Optional deep link rendered as an "explore" footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_more_url: Option<String>,
    /// Shows the "NEW" badge when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

/// An audience use case (`usecases`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    /// Stable unique identifier within the collection.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Authoring timestamp, informational only.
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp, informational only.
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Audience headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First checklist point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_point1: Option<String>,
    /// Second checklist point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_point2: Option<String>,
    /// Third checklist point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_point3: Option<String>,
    /// Illustration asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
}

impl UseCase {
    /// The authored checklist points in order, skipping absent slots.
    pub fn description_points(&self) -> Vec<&str> {
        [
            &self.description_point1,
            &self.description_point2,
            &self.description_point3,
        ]
        .into_iter()
        .filter_map(|point| point.as_deref())
        .collect()
    }
}

/// A user testimonial (`usertestimonials`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Stable unique identifier within the collection.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Authoring timestamp, informational only.
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit timestamp, informational only.
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Quote body, rendered without surrounding quotes in the source data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial_quote: Option<String>,
    /// Display name of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Combined title and company line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_title_company: Option<String>,
    /// Avatar asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_photo: Option<String>,
    /// Star rating, 1-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Display date as authored (free-form string in the source data).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial_date: Option<String>,
}

impl Testimonial {
    /// Star count the page renders; absent ratings show five stars.
    pub fn display_rating(&self) -> u8 {
        self.rating.unwrap_or(5)
    }
}

/// A record from any collection, tagged with its collection of origin.
///
/// This is what string-keyed resolution returns; typed access goes through
/// [`ContentRecord`] instead.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ContentItem {
    /// Record from `faqs`.
    Faq(Faq),
    /// Record from `howitworkssteps`.
    Step(HowItWorksStep),
    /// Record from `productfeatures`.
    Feature(ProductFeature),
    /// Record from `pricingplans`.
    Plan(PricingPlan),
    /// Record from `usecases`.
    UseCase(UseCase),
    /// Record from `usertestimonials`.
    Testimonial(Testimonial),
}

impl ContentItem {
    /// Collection this record belongs to.
    pub fn collection(&self) -> Collection {
        match self {
            ContentItem::Faq(_) => Collection::Faqs,
            ContentItem::Step(_) => Collection::HowItWorksSteps,
            ContentItem::Feature(_) => Collection::ProductFeatures,
            ContentItem::Plan(_) => Collection::PricingPlans,
            ContentItem::UseCase(_) => Collection::UseCases,
            ContentItem::Testimonial(_) => Collection::UserTestimonials,
        }
    }

    /// Stable record identifier.
    pub fn id(&self) -> &RecordId {
        match self {
            ContentItem::Faq(record) => &record.id,
            ContentItem::Step(record) => &record.id,
            ContentItem::Feature(record) => &record.id,
            ContentItem::Plan(record) => &record.id,
            ContentItem::UseCase(record) => &record.id,
            ContentItem::Testimonial(record) => &record.id,
        }
    }
}

/// Ties a record schema to its collection tag for typed store access.
pub trait ContentRecord: Sized {
    /// Collection this schema belongs to.
    const COLLECTION: Collection;

    /// Borrow the typed record out of a tagged item when the variants match.
    fn from_item(item: &ContentItem) -> Option<&Self>;

    /// Wrap a typed record into a tagged item.
    fn into_item(self) -> ContentItem;

    /// Stable record identifier.
    fn id(&self) -> &RecordId;
}

macro_rules! impl_content_record {
    ($record:ty, $collection:expr, $variant:ident) => {
        impl ContentRecord for $record {
            const COLLECTION: Collection = $collection;

            fn from_item(item: &ContentItem) -> Option<&Self> {
                match item {
                    ContentItem::$variant(record) => Some(record),
                    _ => None,
                }
            }

            fn into_item(self) -> ContentItem {
                ContentItem::$variant(self)
            }

            fn id(&self) -> &RecordId {
                &self.id
            }
        }
    };
}

impl_content_record!(Faq, Collection::Faqs, Faq);
impl_content_record!(HowItWorksStep, Collection::HowItWorksSteps, Step);
impl_content_record!(ProductFeature, Collection::ProductFeatures, Feature);
impl_content_record!(PricingPlan, Collection::PricingPlans, Plan);
impl_content_record!(UseCase, Collection::UseCases, UseCase);
impl_content_record!(Testimonial, Collection::UserTestimonials, Testimonial);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_authored_wire_names() {
        let json = r#"{
            "_id": "faq-1",
            "_createdDate": "2025-03-14T09:00:00Z",
            "question": "What does it track?",
            "displayOrder": 10,
            "isPublished": true
        }"#;
        let faq: Faq = serde_json::from_str(json).unwrap();
        assert_eq!(faq.id, "faq-1");
        assert!(faq.created_at.is_some());
        assert!(faq.updated_at.is_none());
        assert_eq!(faq.display_order, Some(10));
        assert_eq!(faq.is_published, Some(true));
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let plan: PricingPlan = serde_json::from_str(r#"{"_id": "plan-1"}"#).unwrap();
        assert!(plan.tier_name.is_none());
        assert!(plan.price.is_none());
        assert!(plan.feature_lines().is_empty());
    }

    #[test]
    fn feature_lines_split_and_trim() {
        let plan = PricingPlan {
            features: Some("Unlimited seats\n  Margin alerts  \n\nCSV export".to_string()),
            ..serde_json::from_str(r#"{"_id": "plan-1"}"#).unwrap()
        };
        assert_eq!(
            plan.feature_lines(),
            vec!["Unlimited seats", "Margin alerts", "CSV export"]
        );
    }

    #[test]
    fn description_points_skip_absent_slots() {
        let use_case = UseCase {
            description_point2: None,
            ..serde_json::from_str(
                r#"{"_id": "uc-1", "descriptionPoint1": "a", "descriptionPoint2": "b", "descriptionPoint3": "c"}"#,
            )
            .unwrap()
        };
        assert_eq!(use_case.description_points(), vec!["a", "c"]);
    }

    #[test]
    fn display_rating_defaults_to_five() {
        let testimonial: Testimonial = serde_json::from_str(r#"{"_id": "t-1"}"#).unwrap();
        assert_eq!(testimonial.display_rating(), 5);
        let rated: Testimonial =
            serde_json::from_str(r#"{"_id": "t-2", "rating": 4}"#).unwrap();
        assert_eq!(rated.display_rating(), 4);
    }

    #[test]
    fn tagged_items_report_collection_and_id() {
        let faq: Faq = serde_json::from_str(r#"{"_id": "faq-1"}"#).unwrap();
        let item = faq.clone().into_item();
        assert_eq!(item.collection(), Collection::Faqs);
        assert_eq!(item.id(), "faq-1");
        assert_eq!(Faq::from_item(&item), Some(&faq));
        assert!(PricingPlan::from_item(&item).is_none());
    }
}
