use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, Product, ProductImage};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: String,
    /// Normalised name: trimmed, lower case, single spaces.
    #[schema(example = "home appliances")]
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        Self {
            category_id: value.id.to_string(),
            name: value.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<ProductImage> for ProductImageResponse {
    fn from(value: ProductImage) -> Self {
        Self {
            image_type: value.image_type,
            image_url: value.image_url,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: String,
    #[schema(example = "rust in action")]
    pub name: String,
    #[schema(example = 450000.0)]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub shop_id: String,
    pub categories: Vec<CategoryResponse>,
    pub images: Vec<ProductImageResponse>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        Self {
            product_id: value.id.to_string(),
            name: value.name,
            price: value.price,
            brand: value.brand,
            description: value.description,
            shop_id: value.shop_id.to_string(),
            categories: value.categories.into_iter().map(Into::into).collect(),
            images: value.images.into_iter().map(Into::into).collect(),
        }
    }
}
