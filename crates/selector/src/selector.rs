//! # Recommendation Selector
//!
//! Picks up to three cars for a query, relaxing constraints until it has
//! something to show:
//! 1. Budget. If nothing is affordable, return the cheapest cars overall.
//! 2. Usage. If nothing affordable has the requested usage, consider every
//!    affordable car instead.
//! 3. Mileage.
//!    - 3+ matches: best value three.
//!    - 1–2 matches: keep them, top up from affordable cars of any usage
//!      that meet the mileage bound.
//!    - no match: best value three of the stage 2 set, ignoring mileage.
//!
//! "Best value" is the lowest price/mileage ratio; ties keep catalog order.

use std::sync::Arc;

use catalog::{CarEntry, Catalog};
use tracing::debug;

use crate::filter_pipeline::{FilterPipeline, run_filter};
use crate::filters::{AlreadySelectedFilter, BudgetFilter, MileageFilter, UsageFilter};
use crate::ranking::{cheapest, rank_by_value};
use crate::types::{Candidate, Query, Selection, SelectionPath};

/// Upper bound on the number of cars in a selection
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Selects recommendations from a shared, read-only catalog.
///
/// Cloning is cheap and every call is independent, so one selector can serve
/// any number of threads.
#[derive(Debug, Clone)]
pub struct RecommendationSelector {
    catalog: Arc<Catalog>,
}

impl RecommendationSelector {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// A selector over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Select up to three cars for the query.
    pub fn select(&self, query: &Query) -> Vec<CarEntry> {
        self.select_explained(query).cars
    }

    /// Select up to three cars and report which fallback produced them.
    pub fn select_explained(&self, query: &Query) -> Selection {
        let all = Candidate::from_catalog(&self.catalog);

        // Stage 1: budget
        let in_budget = run_filter(&BudgetFilter, all.clone(), query);
        if in_budget.is_empty() {
            debug!("Nothing within budget {}, taking cheapest cars", query.budget);
            return selection(
                cheapest(all, MAX_RECOMMENDATIONS),
                SelectionPath::CheapestOverall,
                false,
            );
        }

        // Stage 2: usage
        let matching_usage = run_filter(&UsageFilter, in_budget.clone(), query);
        let usage_relaxed = matching_usage.is_empty();
        let working = if usage_relaxed {
            debug!("No in-budget car has usage {:?}, ignoring usage", query.usage);
            in_budget.clone()
        } else {
            matching_usage
        };

        // Stage 3: mileage
        let mut matched = run_filter(&MileageFilter, working.clone(), query);
        rank_by_value(&mut matched);

        let (picked, path) = match matched.len() {
            0 => {
                debug!("No car meets mileage {}, ignoring mileage", query.min_mileage);
                let mut relaxed = working;
                rank_by_value(&mut relaxed);
                relaxed.truncate(MAX_RECOMMENDATIONS);
                (relaxed, SelectionPath::MileageRelaxed)
            }
            count if count < MAX_RECOMMENDATIONS => {
                let top_up = self.top_up(in_budget, &matched, query);
                debug!("{} full match(es), topped up with {}", count, top_up.len());
                matched.extend(top_up);
                (matched, SelectionPath::PartialFill { matched: count })
            }
            _ => {
                matched.truncate(MAX_RECOMMENDATIONS);
                (matched, SelectionPath::AllCriteria)
            }
        };

        selection(picked, path, usage_relaxed)
    }

    /// Best-value in-budget cars of any usage that meet the mileage bound and
    /// aren't already picked, enough to fill the remaining slots.
    fn top_up<'a>(
        &self,
        in_budget: Vec<Candidate<'a>>,
        picked: &[Candidate<'a>],
        query: &Query,
    ) -> Vec<Candidate<'a>> {
        let pipeline = FilterPipeline::new()
            .add_filter(MileageFilter)
            .add_filter(AlreadySelectedFilter::new(picked));

        let mut extra = pipeline.apply(in_budget, query);
        rank_by_value(&mut extra);
        extra.truncate(MAX_RECOMMENDATIONS.saturating_sub(picked.len()));
        extra
    }
}

impl Default for RecommendationSelector {
    fn default() -> Self {
        Self::builtin()
    }
}

fn selection(picked: Vec<Candidate<'_>>, path: SelectionPath, usage_relaxed: bool) -> Selection {
    Selection {
        cars: picked.into_iter().map(|candidate| candidate.car.clone()).collect(),
        path,
        usage_relaxed,
    }
}

/// Select up to three cars from the built-in catalog.
///
/// `usage` is matched exactly against `"family"` / `"sports"`; anything else
/// matches nothing and triggers the usage fallback. Never fails.
pub fn select(budget: i64, min_mileage: i64, usage: &str) -> Vec<CarEntry> {
    RecommendationSelector::builtin().select(&Query::from_raw(budget, min_mileage, usage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Usage;

    /// The small USD catalog used throughout the selector docs
    fn create_test_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![
            CarEntry::new("Honda Civic", 25000, 18, Usage::Family, "Reliable"),
            CarEntry::new("Toyota Camry", 28000, 16, Usage::Family, "Comfortable"),
            CarEntry::new("Hyundai Creta", 20000, 17, Usage::Family, "Compact SUV"),
            CarEntry::new("Maruti Swift", 10000, 22, Usage::Family, "Economical"),
            CarEntry::new("BMW 3 Series", 40000, 12, Usage::Sports, "Sporty"),
            CarEntry::new("Ford Mustang", 35000, 10, Usage::Sports, "Iconic"),
            CarEntry::new("Porsche 911", 100000, 8, Usage::Sports, "Legendary"),
        ]))
    }

    fn names(cars: &[CarEntry]) -> Vec<&str> {
        cars.iter().map(|car| car.name.as_str()).collect()
    }

    #[test]
    fn test_all_criteria_met() {
        let selector = RecommendationSelector::new(create_test_catalog());
        let selection = selector.select_explained(&Query::new(30000, 15, Usage::Family));

        assert_eq!(selection.path, SelectionPath::AllCriteria);
        assert!(!selection.usage_relaxed);
        assert_eq!(
            names(&selection.cars),
            vec!["Maruti Swift", "Hyundai Creta", "Honda Civic"]
        );
    }

    #[test]
    fn test_partial_match_is_topped_up() {
        let selector = RecommendationSelector::new(create_test_catalog());
        let selection = selector.select_explained(&Query::new(50000, 10, Usage::Sports));

        assert_eq!(selection.path, SelectionPath::PartialFill { matched: 2 });
        assert_eq!(
            names(&selection.cars),
            vec!["BMW 3 Series", "Ford Mustang", "Maruti Swift"]
        );
    }

    #[test]
    fn test_top_up_respects_mileage() {
        let selector = RecommendationSelector::new(create_test_catalog());
        // Only the BMW is a sports car with 12+ kmpl; the Mustang is dropped
        // and the two best-value family cars fill in.
        let selection = selector.select_explained(&Query::new(50000, 12, Usage::Sports));

        assert_eq!(selection.path, SelectionPath::PartialFill { matched: 1 });
        assert_eq!(
            names(&selection.cars),
            vec!["BMW 3 Series", "Maruti Swift", "Hyundai Creta"]
        );
    }

    #[test]
    fn test_mileage_relaxed() {
        let selector = RecommendationSelector::new(create_test_catalog());
        let selection = selector.select_explained(&Query::new(50000, 50, Usage::Sports));

        assert_eq!(selection.path, SelectionPath::MileageRelaxed);
        // BMW 3333/kmpl beats Mustang 3500/kmpl; Porsche is over budget
        assert_eq!(names(&selection.cars), vec!["BMW 3 Series", "Ford Mustang"]);
    }

    #[test]
    fn test_nothing_in_budget() {
        let selector = RecommendationSelector::new(create_test_catalog());
        let selection = selector.select_explained(&Query::new(5000, 15, Usage::Family));

        assert_eq!(selection.path, SelectionPath::CheapestOverall);
        assert_eq!(
            names(&selection.cars),
            vec!["Maruti Swift", "Hyundai Creta", "Honda Civic"]
        );
    }

    #[test]
    fn test_unknown_usage_uses_every_affordable_car() {
        let selector = RecommendationSelector::new(create_test_catalog());
        let selection = selector.select_explained(&Query::from_raw(36000, 10, "convertible"));

        assert!(selection.usage_relaxed);
        assert_eq!(selection.path, SelectionPath::AllCriteria);
        assert_eq!(
            names(&selection.cars),
            vec!["Maruti Swift", "Hyundai Creta", "Honda Civic"]
        );
    }

    #[test]
    fn test_usage_relaxed_when_none_affordable() {
        let selector = RecommendationSelector::new(create_test_catalog());
        // No sports car costs 30000 or less
        let selection = selector.select_explained(&Query::new(30000, 0, Usage::Sports));

        assert!(selection.usage_relaxed);
        assert!(selection.cars.iter().all(|car| car.usage == Usage::Family));
        assert_eq!(selection.cars.len(), 3);
    }

    #[test]
    fn test_empty_catalog() {
        let selector = RecommendationSelector::new(Arc::new(Catalog::default()));
        let selection = selector.select_explained(&Query::new(30000, 15, Usage::Family));

        assert!(selection.cars.is_empty());
        assert_eq!(selection.path, SelectionPath::CheapestOverall);
    }

    #[test]
    fn test_select_matches_select_explained() {
        let selector = RecommendationSelector::new(create_test_catalog());
        let query = Query::new(50000, 10, Usage::Sports);

        assert_eq!(selector.select(&query), selector.select_explained(&query).cars);
    }

    #[test]
    fn test_builtin_entry_point() {
        // Nothing in the built-in table costs 30000, so the cheapest win
        let cars = select(30000, 15, "family");
        assert_eq!(
            names(&cars),
            vec!["Tata Nano", "Datsun Redi-GO", "Renault Kwid"]
        );
    }
}
