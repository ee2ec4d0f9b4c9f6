//! Ordering helpers.
//!
//! Both orderings are stable sorts over candidates that arrive in catalog
//! order, so ties always fall back to catalog order.

use crate::types::Candidate;

/// Sort by ascending price/mileage ratio (best value first).
///
/// Zero-mileage entries have an infinite ratio and sort last.
pub fn rank_by_value(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(|a, b| a.car.value_ratio().total_cmp(&b.car.value_ratio()));
}

/// The `limit` cheapest candidates, cheapest first.
pub fn cheapest(mut candidates: Vec<Candidate<'_>>, limit: usize) -> Vec<Candidate<'_>> {
    candidates.sort_by_key(|candidate| candidate.car.price);
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CarEntry, Catalog, Usage};

    fn names(candidates: &[Candidate<'_>]) -> Vec<String> {
        candidates.iter().map(|c| c.car.name.clone()).collect()
    }

    #[test]
    fn test_rank_by_value() {
        let catalog = Catalog::new(vec![
            CarEntry::new("Honda Civic", 25000, 18, Usage::Family, ""),
            CarEntry::new("Toyota Camry", 28000, 16, Usage::Family, ""),
            CarEntry::new("Hyundai Creta", 20000, 17, Usage::Family, ""),
            CarEntry::new("Maruti Swift", 10000, 22, Usage::Family, ""),
        ]);
        let mut candidates = Candidate::from_catalog(&catalog);

        rank_by_value(&mut candidates);

        assert_eq!(
            names(&candidates),
            vec!["Maruti Swift", "Hyundai Creta", "Honda Civic", "Toyota Camry"]
        );
    }

    #[test]
    fn test_equal_ratios_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            CarEntry::new("Pricier", 2000, 20, Usage::Family, ""),
            CarEntry::new("Worse", 3000, 10, Usage::Family, ""),
            CarEntry::new("Cheaper", 1000, 10, Usage::Family, ""),
        ]);
        let mut candidates = Candidate::from_catalog(&catalog);

        rank_by_value(&mut candidates);

        assert_eq!(names(&candidates), vec!["Pricier", "Cheaper", "Worse"]);
    }

    #[test]
    fn test_zero_mileage_ranks_last() {
        let catalog = Catalog::new(vec![
            CarEntry::new("Free and Broken", 0, 0, Usage::Family, ""),
            CarEntry::new("Broken", 5000, 0, Usage::Family, ""),
            CarEntry::new("Fine", 5000, 10, Usage::Family, ""),
        ]);
        let mut candidates = Candidate::from_catalog(&catalog);

        rank_by_value(&mut candidates);

        assert_eq!(names(&candidates), vec!["Fine", "Free and Broken", "Broken"]);
    }

    #[test]
    fn test_cheapest() {
        let catalog = Catalog::new(vec![
            CarEntry::new("Porsche 911", 100000, 8, Usage::Sports, ""),
            CarEntry::new("Creta", 20000, 17, Usage::Family, ""),
            CarEntry::new("Swift", 10000, 22, Usage::Family, ""),
            CarEntry::new("Also Creta", 20000, 15, Usage::Family, ""),
        ]);

        let picked = cheapest(Candidate::from_catalog(&catalog), 3);
        assert_eq!(names(&picked), vec!["Swift", "Creta", "Also Creta"]);

        assert!(cheapest(Vec::new(), 3).is_empty());
    }
}
