//! Page-level selections mirroring how the site consumes collections.
//!
//! The store itself never filters or sorts; these helpers package the
//! selections the page performs at every call site so callers stop
//! reimplementing them.

use crate::records::{Faq, HowItWorksStep, PricingPlan};
use crate::source::ContentStore;

/// Published FAQs in ascending display order.
///
/// Entries without `is_published` are treated as unpublished; entries without
/// `display_order` sort first, as order zero. Ties keep authored order.
pub fn published_faqs(store: &ContentStore) -> Vec<&Faq> {
    let mut faqs: Vec<&Faq> = store
        .records::<Faq>()
        .filter(|faq| faq.is_published.unwrap_or(false))
        .collect();
    faqs.sort_by_key(|faq| faq.display_order.unwrap_or(0));
    faqs
}

/// Pipeline steps in ascending step number.
///
/// Steps without `step_number` sort first, as step zero. Ties keep authored
/// order.
pub fn ordered_steps(store: &ContentStore) -> Vec<&HowItWorksStep> {
    let mut steps: Vec<&HowItWorksStep> = store.records::<HowItWorksStep>().collect();
    steps.sort_by_key(|step| step.step_number.unwrap_or(0));
    steps
}

/// The visually highlighted pricing plan, if the dataset marks one.
pub fn most_popular_plan(store: &ContentStore) -> Option<&PricingPlan> {
    store
        .records::<PricingPlan>()
        .find(|plan| plan.is_most_popular.unwrap_or(false))
}
