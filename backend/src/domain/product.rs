//! Product catalogue: categories, products and their images.

use super::{CategoryId, ProductId, ShopId};

/// Canonical form of a category name or search keyword.
///
/// Trims the input, lowercases it and collapses every whitespace run into a
/// single space.
///
/// # Examples
/// ```
/// use storefront::domain::normalize_name;
///
/// assert_eq!(normalize_name("  Home   Appliances\t"), "home appliances");
/// ```
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Product category. Names are stored normalised and are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Create a category, normalising the supplied name.
    pub fn new(raw_name: &str) -> Self {
        Self {
            id: CategoryId::random(),
            name: normalize_name(raw_name),
        }
    }
}

/// Image attached to a product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub image_type: Option<String>,
    pub image_url: String,
    pub description: Option<String>,
}

/// Editable product fields shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    /// Shipping weight in grams.
    pub weight: f64,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub category_names: Vec<String>,
}

/// Product listed by a shop.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub shop_id: ShopId,
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<Category>,
    pub images: Vec<ProductImage>,
}

impl Product {
    pub fn new(shop_id: ShopId, draft: ProductDraft, categories: Vec<Category>) -> Self {
        let mut product = Self {
            id: ProductId::random(),
            shop_id,
            name: String::new(),
            price: 0.0,
            weight: 0.0,
            brand: None,
            description: None,
            categories: Vec::new(),
            images: Vec::new(),
        };
        product.apply(draft, categories);
        product
    }

    /// Overwrite the editable fields. Images and ownership are untouched.
    pub fn apply(&mut self, draft: ProductDraft, categories: Vec<Category>) {
        self.name = draft.name;
        self.price = draft.price;
        self.weight = draft.weight;
        self.brand = draft.brand;
        self.description = draft.description;
        self.categories = categories;
    }

    pub fn has_category(&self, normalized: &str) -> bool {
        self.categories.iter().any(|c| c.name == normalized)
    }

    /// Case-insensitive brand equality.
    pub fn has_brand(&self, brand: &str) -> bool {
        self.brand
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == brand.to_lowercase())
    }

    /// Whether the lowercased name contains an already normalised keyword.
    pub fn name_matches(&self, normalized_keyword: &str) -> bool {
        self.name.to_lowercase().contains(normalized_keyword)
    }
}
