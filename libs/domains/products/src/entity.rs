use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{CreateProduct, Product, ProductCategory, Species};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub species: Species,
    pub category: ProductCategory,
    pub price_cents: i64,
    pub stock: i32,
    #[sea_orm(unique)]
    pub sku: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "products";
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            species: model.species,
            category: model.category,
            price_cents: model.price_cents,
            stock: model.stock,
            sku: model.sku,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            description: Set(input.description),
            species: Set(input.species),
            category: Set(input.category),
            price_cents: Set(input.price_cents),
            stock: Set(input.stock),
            sku: Set(input.sku),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
