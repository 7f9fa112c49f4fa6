use sitedata::queries::{most_popular_plan, ordered_steps, published_faqs};
use sitedata::{ContentStore, Faq, PricingPlan};

#[test]
fn published_faqs_are_published_and_in_display_order() {
    let store = ContentStore::bundled().unwrap();
    let faqs = published_faqs(&store);

    assert!(!faqs.is_empty());
    for faq in &faqs {
        assert_eq!(faq.is_published, Some(true));
    }
    for pair in faqs.windows(2) {
        assert!(
            pair[0].display_order.unwrap_or(0) <= pair[1].display_order.unwrap_or(0),
            "display order decreased between '{}' and '{}'",
            pair[0].id,
            pair[1].id
        );
    }
}

#[test]
fn unpublished_faqs_are_excluded() {
    let store = ContentStore::bundled().unwrap();
    let total = store.records::<Faq>().count();
    let published = published_faqs(&store).len();
    assert!(
        published < total,
        "fixture should contain at least one unpublished FAQ"
    );
}

#[test]
fn steps_sort_by_step_number() {
    let store = ContentStore::bundled().unwrap();
    let steps = ordered_steps(&store);

    assert!(!steps.is_empty());
    for pair in steps.windows(2) {
        assert!(pair[0].step_number.unwrap_or(0) <= pair[1].step_number.unwrap_or(0));
    }
    // The authored fixture is deliberately not in step order.
    let authored: Vec<&str> = store
        .records::<sitedata::HowItWorksStep>()
        .map(|step| step.id.as_str())
        .collect();
    let sorted: Vec<&str> = steps.iter().map(|step| step.id.as_str()).collect();
    assert_ne!(authored, sorted);
}

#[test]
fn pricing_plans_end_to_end() {
    let store = ContentStore::bundled().unwrap();
    let plans: Vec<&PricingPlan> = store.records::<PricingPlan>().collect();

    assert!(!plans.is_empty());
    for plan in &plans {
        assert!(plan.tier_name.is_some(), "plan '{}' lacks tier name", plan.id);
        assert!(plan.price.is_some(), "plan '{}' lacks price", plan.id);
        assert!(
            plan.price_unit.is_some(),
            "plan '{}' lacks price unit",
            plan.id
        );
        assert!(
            !plan.feature_lines().is_empty(),
            "plan '{}' lacks feature bullets",
            plan.id
        );
    }

    let popular: Vec<&&PricingPlan> = plans
        .iter()
        .filter(|plan| plan.is_most_popular.unwrap_or(false))
        .collect();
    assert_eq!(popular.len(), 1, "exactly one plan is highlighted");
    assert_eq!(
        most_popular_plan(&store).map(|plan| plan.id.as_str()),
        Some(popular[0].id.as_str())
    );
}

#[test]
fn use_case_points_are_present_and_bounded() {
    let store = ContentStore::bundled().unwrap();
    let mut saw_two_point_case = false;
    for use_case in store.records::<sitedata::UseCase>() {
        let points = use_case.description_points();
        assert!((1..=3).contains(&points.len()));
        if points.len() == 2 {
            saw_two_point_case = true;
        }
    }
    assert!(
        saw_two_point_case,
        "fixture should exercise an absent description point"
    );
}

#[test]
fn testimonials_render_a_rating_even_when_unrated() {
    let store = ContentStore::bundled().unwrap();
    let mut saw_unrated = false;
    for testimonial in store.records::<sitedata::Testimonial>() {
        let stars = testimonial.display_rating();
        assert!((1..=5).contains(&stars));
        if testimonial.rating.is_none() {
            saw_unrated = true;
            assert_eq!(stars, 5);
        }
    }
    assert!(saw_unrated, "fixture should exercise an absent rating");
}
