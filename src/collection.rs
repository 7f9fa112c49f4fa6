//! Collection tags and identifier resolution.
//!
//! The site ships a fixed, closed set of content collections. Call sites
//! address them by string identifier; `Collection::parse` is the single place
//! that string is turned into a tag, and an unknown identifier is a typed
//! error carrying the offending string verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;

/// Tag for one of the six content collections shipped with the site bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Frequently asked questions (`faqs`).
    Faqs,
    /// Onboarding pipeline steps (`howitworkssteps`).
    HowItWorksSteps,
    /// Product feature cards (`productfeatures`).
    ProductFeatures,
    /// Pricing tiers (`pricingplans`).
    PricingPlans,
    /// Audience use cases (`usecases`).
    UseCases,
    /// User testimonials (`usertestimonials`).
    UserTestimonials,
}

impl Collection {
    /// Canonical iteration order over every known collection.
    pub const ALL: [Collection; 6] = [
        Collection::Faqs,
        Collection::HowItWorksSteps,
        Collection::ProductFeatures,
        Collection::PricingPlans,
        Collection::UseCases,
        Collection::UserTestimonials,
    ];

    /// Collection identifier as authored content and call sites spell it.
    pub const fn slug(&self) -> &'static str {
        match self {
            Collection::Faqs => "faqs",
            Collection::HowItWorksSteps => "howitworkssteps",
            Collection::ProductFeatures => "productfeatures",
            Collection::PricingPlans => "pricingplans",
            Collection::UseCases => "usecases",
            Collection::UserTestimonials => "usertestimonials",
        }
    }

    /// Resolve a collection identifier against the closed set of known names.
    pub fn parse(id: &str) -> Result<Collection, ContentError> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.slug() == id)
            .ok_or_else(|| ContentError::UnknownCollection(id.to_string()))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Collection {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::parse(s)
    }
}
