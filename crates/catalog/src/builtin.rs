//! The built-in car table.
//!
//! Prices are in Indian Rupees, mileage in kmpl. The table is built on first
//! use and lives for the rest of the process.

use crate::types::{CarEntry, Catalog, Usage};
use std::sync::{Arc, OnceLock};

/// Every built-in entry shares the same placeholder brand logo
const PLACEHOLDER_LOGO: &str = "/placeholder.jpg";

fn car(
    name: &str,
    price: u64,
    mileage: u32,
    usage: Usage,
    reason: &str,
    info_url: &str,
    image_url: &str,
) -> CarEntry {
    CarEntry {
        info_url: Some(info_url.to_string()),
        image_url: Some(image_url.to_string()),
        brand_logo_url: Some(PLACEHOLDER_LOGO.to_string()),
        ..CarEntry::new(name, price, mileage, usage, reason)
    }
}

fn build() -> Catalog {
    use Usage::{Family, Sports};

    Catalog::new(vec![
        car(
            "Honda Civic",
            2_000_000,
            18,
            Family,
            "Reliable, good fuel economy, spacious for family use.",
            "https://www.honda.com/civic",
            "https://images.unsplash.com/photo-1606664515524-ed2f786a0bd6?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Toyota Camry",
            2_200_000,
            16,
            Family,
            "Comfortable, excellent resale value, suitable for daily commutes and family trips.",
            "https://www.toyota.com/camry/",
            "https://images.unsplash.com/photo-1549924231-f129b911e442?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Hyundai Creta",
            1_500_000,
            17,
            Family,
            "Compact SUV, good ground clearance, feature-rich for its price.",
            "https://www.hyundai.com/in/en/find-a-car/creta/highlights",
            "https://images.unsplash.com/photo-1609521263047-f8f205293f24?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Maruti Swift",
            800_000,
            22,
            Family,
            "Economical, easy to drive, perfect for city commuting.",
            "https://www.marutisuzuki.com/channels/arena/hatchbacks/swift",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Volkswagen Polo",
            1_200_000,
            20,
            Family,
            "German engineering, solid build quality, efficient for city driving.",
            "https://www.vw.com/models/polo",
            "https://images.unsplash.com/photo-1603584173870-7f23fdae1b7a?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Skoda Rapid",
            1_400_000,
            19,
            Family,
            "Spacious sedan, comfortable ride, good value for money.",
            "https://www.skoda-auto.com/models/rapid",
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "BMW 3 Series",
            3_200_000,
            12,
            Sports,
            "Sporty handling, premium features, exhilarating driving experience.",
            "https://www.bmwusa.com/vehicles/3-series/sedan/overview.html",
            "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Ford Mustang",
            2_800_000,
            10,
            Sports,
            "Iconic muscle car, powerful engine, head-turning design.",
            "https://www.ford.com/cars/mustang/",
            "https://images.unsplash.com/photo-1494905998402-395d579af36f?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Porsche 911",
            8_000_000,
            8,
            Sports,
            "High-performance sports car, legendary status, ultimate driving machine.",
            "https://www.porsche.com/usa/models/911/",
            "https://images.unsplash.com/photo-1544636331-e26879cd4d9b?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Audi TT",
            3_600_000,
            14,
            Sports,
            "Stylish coupe, quattro all-wheel drive, premium interior.",
            "https://www.audi.com/tt",
            "https://images.unsplash.com/photo-1606016159991-0d2d8c838692?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Mazda MX-5",
            2_400_000,
            15,
            Sports,
            "Lightweight convertible, engaging handling, pure driving joy.",
            "https://www.mazda.com/mx-5",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Chevrolet Camaro",
            3_000_000,
            11,
            Sports,
            "American muscle, powerful V8 engine, aggressive styling.",
            "https://www.chevrolet.com/camaro",
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Tesla Model 3",
            3_600_000,
            25,
            Family,
            "Electric, advanced tech, low running costs, modern family car.",
            "https://www.tesla.com/model3",
            "https://images.unsplash.com/photo-1560958089-b8a1929cea89?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Nissan Leaf",
            2_500_000,
            30,
            Family,
            "Affordable electric, zero emissions, smooth and quiet ride.",
            "https://www.nissan.com/vehicles/electric-cars/leaf.html",
            "https://images.unsplash.com/photo-1593941707874-ef25b8b4a92b?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Toyota Prius",
            2_100_000,
            24,
            Family,
            "Hybrid efficiency, proven reliability, eco-friendly choice.",
            "https://www.toyota.com/prius/",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Mercedes GLE",
            5_200_000,
            13,
            Family,
            "Luxury SUV, advanced safety features, comfortable for long drives.",
            "https://www.mercedes-benz.com/gle",
            "https://images.unsplash.com/photo-1609521263047-f8f205293f24?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Audi Q5",
            4_400_000,
            14,
            Family,
            "Premium SUV, quattro technology, refined interior.",
            "https://www.audi.com/q5",
            "https://images.unsplash.com/photo-1606016159991-0d2d8c838692?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "BMW X3",
            3_800_000,
            15,
            Family,
            "Compact luxury SUV, sporty dynamics, premium comfort.",
            "https://www.bmw.com/x3",
            "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Renault Kwid",
            600_000,
            25,
            Family,
            "Most affordable, compact design, surprisingly spacious.",
            "https://www.renault.com/kwid",
            "https://images.unsplash.com/photo-1603584173870-7f23fdae1b7a?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Datsun Redi-GO",
            500_000,
            26,
            Family,
            "Ultra-budget friendly, easy maintenance, perfect first car.",
            "https://www.datsun.com/redi-go",
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Tata Nano",
            400_000,
            28,
            Family,
            "Cheapest car in the world, incredibly fuel efficient, perfect for tight budgets.",
            "https://www.tatamotors.com/nano",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
        car(
            "Mahindra KUV100",
            900_000,
            23,
            Family,
            "Compact SUV, rugged design, excellent for rough roads.",
            "https://www.mahindra.com/kuv100",
            "https://images.unsplash.com/photo-1609521263047-f8f205293f24?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        ),
    ])
}

impl Catalog {
    /// The built-in catalog, shared by every caller in the process.
    pub fn builtin() -> Arc<Catalog> {
        static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();
        BUILTIN.get_or_init(|| Arc::new(build())).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 22);
        assert_eq!(catalog.by_usage(Usage::Sports).count(), 6);
        assert_eq!(catalog.by_usage(Usage::Family).count(), 16);
    }

    #[test]
    fn test_builtin_entries_are_usable() {
        let catalog = Catalog::builtin();
        let names: HashSet<&str> = catalog.entries().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len(), "names must be unique");

        for car in catalog.entries() {
            assert!(car.mileage > 0, "{} has zero mileage", car.name);
            assert!(car.info_url.is_some());
            assert_eq!(car.brand_logo_url.as_deref(), Some(PLACEHOLDER_LOGO));
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(Arc::ptr_eq(&Catalog::builtin(), &Catalog::builtin()));
        assert_eq!(Catalog::builtin().entries()[0].name, "Honda Civic");
    }
}
