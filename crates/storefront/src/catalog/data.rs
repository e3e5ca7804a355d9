//! Seeded catalog data.
//!
//! The storefront runs from static in-memory data; there is no product
//! database. Prices are in USD cents.

use chrono::NaiveDate;

use asili_core::{CategoryId, CurrencyCode, Price, ProductId};

use super::{Category, Product};

/// Seed dates are static and known-valid.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

/// The seeded category list.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new("fabrics"),
            name: "Fabrics".to_owned(),
            description: "Hand-woven and wax-printed textiles sold by the yard or as wraps."
                .to_owned(),
        },
        Category {
            id: CategoryId::new("jewelry"),
            name: "Jewelry".to_owned(),
            description: "Beaded and brass pieces from West African artisans.".to_owned(),
        },
        Category {
            id: CategoryId::new("bags"),
            name: "Bags".to_owned(),
            description: "Totes and clutches in leather and printed cotton.".to_owned(),
        },
        Category {
            id: CategoryId::new("shoes"),
            name: "Shoes".to_owned(),
            description: "Sandals and slides finished with traditional prints.".to_owned(),
        },
    ]
}

/// The seeded product list, featured items first.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("kente-royal-wrap"),
            name: "Kente Royal Wrap".to_owned(),
            description: "Hand-woven kente wrap in gold and deep green, six yards.".to_owned(),
            price: usd(14_500),
            image: "products/kente-royal-wrap.jpg".to_owned(),
            category: CategoryId::new("fabrics"),
            sizes: Vec::new(),
            colors: strings(&["gold", "green"]),
            stock: Some(8),
            available: true,
            added_on: date(2024, 11, 2),
            featured: true,
        },
        Product {
            id: ProductId::new("ankara-flare-dress"),
            name: "Ankara Flare Dress".to_owned(),
            description: "Wax-print flare dress, fully lined.".to_owned(),
            price: usd(9_800),
            image: "products/ankara-flare-dress.jpg".to_owned(),
            category: CategoryId::new("fabrics"),
            sizes: strings(&["S", "M", "L", "XL"]),
            colors: strings(&["indigo", "red"]),
            stock: Some(14),
            available: true,
            added_on: date(2025, 1, 18),
            featured: true,
        },
        Product {
            id: ProductId::new("mudcloth-throw"),
            name: "Bogolan Mudcloth Throw".to_owned(),
            description: "Hand-dyed bogolanfini throw from Mali.".to_owned(),
            price: usd(12_000),
            image: "products/mudcloth-throw.jpg".to_owned(),
            category: CategoryId::new("fabrics"),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: None,
            available: true,
            added_on: date(2024, 7, 9),
            featured: false,
        },
        Product {
            id: ProductId::new("maasai-bead-collar"),
            name: "Maasai Bead Collar".to_owned(),
            description: "Multi-strand beaded collar necklace.".to_owned(),
            price: usd(6_400),
            image: "products/maasai-bead-collar.jpg".to_owned(),
            category: CategoryId::new("jewelry"),
            sizes: Vec::new(),
            colors: strings(&["rainbow", "blue-white"]),
            stock: Some(5),
            available: true,
            added_on: date(2024, 9, 27),
            featured: true,
        },
        Product {
            id: ProductId::new("brass-cuff"),
            name: "Hammered Brass Cuff".to_owned(),
            description: "Open cuff in recycled brass, adjustable.".to_owned(),
            price: usd(4_200),
            image: "products/brass-cuff.jpg".to_owned(),
            category: CategoryId::new("jewelry"),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: Some(22),
            available: true,
            added_on: date(2025, 2, 3),
            featured: false,
        },
        Product {
            id: ProductId::new("cowrie-anklet"),
            name: "Cowrie Shell Anklet".to_owned(),
            description: "Cowrie shells on a waxed cotton cord.".to_owned(),
            price: usd(1_800),
            image: "products/cowrie-anklet.jpg".to_owned(),
            category: CategoryId::new("jewelry"),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: Some(0),
            available: true,
            added_on: date(2024, 5, 21),
            featured: false,
        },
        Product {
            id: ProductId::new("ankara-tote"),
            name: "Ankara Market Tote".to_owned(),
            description: "Structured tote in wax print with leather handles.".to_owned(),
            price: usd(7_600),
            image: "products/ankara-tote.jpg".to_owned(),
            category: CategoryId::new("bags"),
            sizes: Vec::new(),
            colors: strings(&["orange", "teal", "black"]),
            stock: Some(11),
            available: true,
            added_on: date(2025, 3, 12),
            featured: true,
        },
        Product {
            id: ProductId::new("sahel-leather-clutch"),
            name: "Sahel Leather Clutch".to_owned(),
            description: "Vegetable-tanned goatskin clutch with tassel zip.".to_owned(),
            price: usd(8_900),
            image: "products/sahel-leather-clutch.jpg".to_owned(),
            category: CategoryId::new("bags"),
            sizes: Vec::new(),
            colors: strings(&["tan", "black"]),
            stock: Some(6),
            available: true,
            added_on: date(2024, 12, 5),
            featured: false,
        },
        Product {
            id: ProductId::new("kente-slides"),
            name: "Kente Slides".to_owned(),
            description: "Leather slides with a kente-wrapped strap.".to_owned(),
            price: usd(5_500),
            image: "products/kente-slides.jpg".to_owned(),
            category: CategoryId::new("shoes"),
            sizes: strings(&["37", "38", "39", "40", "41", "42"]),
            colors: Vec::new(),
            stock: Some(18),
            available: true,
            added_on: date(2025, 2, 20),
            featured: false,
        },
        Product {
            id: ProductId::new("beaded-sandals"),
            name: "Beaded Leather Sandals".to_owned(),
            description: "Flat sandals hand-beaded in Nairobi.".to_owned(),
            price: usd(6_900),
            image: "products/beaded-sandals.jpg".to_owned(),
            category: CategoryId::new("shoes"),
            sizes: strings(&["36", "37", "38", "39", "40"]),
            colors: strings(&["white", "multi"]),
            stock: Some(9),
            available: true,
            added_on: date(2024, 10, 14),
            featured: false,
        },
        Product {
            id: ProductId::new("aso-oke-stole"),
            name: "Aso Oke Stole".to_owned(),
            description: "Narrow-loom aso oke stole with metallic thread.".to_owned(),
            price: usd(5_200),
            image: "products/aso-oke-stole.jpg".to_owned(),
            category: CategoryId::new("fabrics"),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: None,
            available: false,
            added_on: date(2024, 4, 2),
            featured: false,
        },
    ]
}
