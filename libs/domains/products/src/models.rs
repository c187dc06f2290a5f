use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Animal a product is meant for
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "species")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Species {
    #[sea_orm(string_value = "dog")]
    Dog,
    #[sea_orm(string_value = "cat")]
    Cat,
    #[sea_orm(string_value = "bird")]
    Bird,
    #[sea_orm(string_value = "fish")]
    Fish,
    /// Rabbits, hamsters, guinea pigs
    #[sea_orm(string_value = "small_pet")]
    SmallPet,
    #[sea_orm(string_value = "reptile")]
    Reptile,
    /// Not tied to one species
    #[default]
    #[sea_orm(string_value = "any")]
    Any,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_category")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductCategory {
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "toys")]
    Toys,
    #[sea_orm(string_value = "accessories")]
    Accessories,
    #[sea_orm(string_value = "health")]
    Health,
    #[sea_orm(string_value = "grooming")]
    Grooming,
    #[sea_orm(string_value = "habitat")]
    Habitat,
}

/// A pet-supply item of the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub species: Species,
    pub category: ProductCategory,
    /// Unit price in cents
    pub price_cents: i64,
    /// Units on hand, never negative
    pub stock: i32,
    /// Stock keeping unit, unique across the catalogue
    pub sku: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[serde(default)]
    pub species: Species,
    pub category: ProductCategory,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
}

/// DTO for updating an existing product, absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub species: Option<Species>,
    pub category: Option<ProductCategory>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    #[validate(length(min = 1, max = 64))]
    pub sku: Option<String>,
}

fn validate_non_zero(quantity: i32) -> Result<(), ValidationError> {
    if quantity == 0 {
        return Err(ValidationError::new("zero_quantity"));
    }
    Ok(())
}

/// Stock movement request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct StockAdjustment {
    /// Quantity to add (positive) or remove (negative)
    #[validate(custom(function = "validate_non_zero"))]
    pub quantity: i32,
    /// Reason for the adjustment
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    pub species: Option<Species>,
    pub category: Option<ProductCategory>,
    /// Case-insensitive match on name or SKU
    pub search: Option<String>,
}

impl ProductFilter {
    /// The search term, trimmed, or `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// SKUs are compared and stored upper-cased without surrounding spaces.
pub fn normalize_sku(sku: &str) -> String {
    sku.trim().to_uppercase()
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
