use async_trait::async_trait;
use pagination::{PageParams, PageRange};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, ExprTrait, extension::postgres::PgExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, ProductFilter, UpdateProduct},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn filtered(filter: &ProductFilter) -> Select<entity::Entity> {
        let mut query = entity::Entity::find();

        if let Some(species) = filter.species {
            query = query.filter(entity::Column::Species.eq(species));
        }

        if let Some(category) = filter.category {
            query = query.filter(entity::Column::Category.eq(category));
        }

        if let Some(term) = filter.search_term() {
            let pattern = format!("%{}%", term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(entity::Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(entity::Column::Sku).ilike(pattern)),
            );
        }

        query
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = %model.id, sku = %model.sku, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: ProductFilter,
        page: PageParams,
    ) -> ProductResult<(Vec<Product>, u64)> {
        let query = Self::filtered(&filter);
        let total = query.clone().count(&self.db).await?;

        // PageRange counts pages from zero
        let models = query
            .order_by_asc(entity::Column::Name)
            .order_by_asc(entity::Column::Id)
            .page_range(page.page_index(), page.page_size())
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description {
            active_model.description = Set(description);
        }
        if let Some(species) = input.species {
            active_model.species = Set(species);
        }
        if let Some(category) = input.category {
            active_model.category = Set(category);
        }
        if let Some(price_cents) = input.price_cents {
            active_model.price_cents = Set(price_cents);
        }
        if let Some(sku) = input.sku {
            active_model.sku = Set(sku);
        }
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model.update(&self.db).await?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(model.into()))
    }

    async fn adjust_stock(&self, id: Uuid, quantity: i32) -> ProductResult<Option<Product>> {
        let models = entity::Entity::update_many()
            .col_expr(
                entity::Column::Stock,
                Expr::col(entity::Column::Stock).add(quantity),
            )
            .col_expr(entity::Column::UpdatedAt, Expr::current_timestamp())
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::Stock.gte(-i64::from(quantity)))
            .exec_with_returning(&self.db)
            .await?;

        Ok(models.into_iter().next().map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn sku_taken(&self, sku: &str, exclude: Option<Uuid>) -> ProductResult<bool> {
        let mut query = entity::Entity::find().filter(entity::Column::Sku.eq(sku));
        if let Some(id) = exclude {
            query = query.filter(entity::Column::Id.ne(id));
        }

        Ok(query.count(&self.db).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProductCategory, Species};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn model(name: &str, sku: &str) -> entity::Model {
        let now = chrono::Utc::now().into();
        entity::Model {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            description: String::new(),
            species: Species::Cat,
            category: ProductCategory::Toys,
            price_cents: 799,
            stock: 4,
            sku: sku.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
    }

    #[tokio::test]
    async fn test_get_by_id_maps_model() {
        let row = model("Feather wand", "CAT-WAND");
        let id = row.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let product = PgProductRepository::new(db).get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.sku, "CAT-WAND");
        assert_eq!(product.species, Species::Cat);
    }

    #[tokio::test]
    async fn test_list_counts_then_pages() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(55)]])
            .append_query_results([vec![model("Ball", "CAT-BALL"), model("Mouse", "CAT-MOUSE")]])
            .into_connection();
        let repository = PgProductRepository::new(db);

        let (items, total) = repository
            .list(ProductFilter::default(), PageParams::new(3, 20))
            .await
            .unwrap();

        assert_eq!(total, 55);
        assert_eq!(items.len(), 2);

        let log = format!("{:?}", repository.db.into_transaction_log());
        assert!(log.contains("COUNT"), "{log}");
        assert!(log.contains("ORDER BY"), "{log}");
        assert!(log.contains("LIMIT"), "{log}");
        assert!(log.contains("OFFSET"), "{log}");
    }

    #[tokio::test]
    async fn test_search_filters_name_and_sku() {
        let query = PgProductRepository::filtered(&ProductFilter {
            search: Some("wand".into()),
            ..Default::default()
        });

        let sql = sea_orm::QueryTrait::build(&query, DatabaseBackend::Postgres).to_string();
        assert!(sql.contains("ILIKE '%wand%'"), "{sql}");
        assert!(sql.contains("\"sku\""), "{sql}");
    }

    #[tokio::test]
    async fn test_adjust_stock_is_one_guarded_update() {
        let mut row = model("Ball", "CAT-BALL");
        row.stock = 1;
        let id = row.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let repository = PgProductRepository::new(db);

        let product = repository.adjust_stock(id, -3).await.unwrap().unwrap();
        assert_eq!(product.stock, 1);

        let log = format!("{:?}", repository.db.into_transaction_log());
        assert!(log.contains(r#"UPDATE \"products\" SET \"stock\" = \"stock\" + $1"#), "{log}");
        assert!(log.contains(r#"\"stock\" >= $"#), "{log}");
        assert!(log.contains("RETURNING"), "{log}");
        assert!(!log.contains("SELECT"), "{log}");
    }

    #[tokio::test]
    async fn test_adjust_stock_without_matching_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let adjusted = PgProductRepository::new(db)
            .adjust_stock(Uuid::now_v7(), -5)
            .await
            .unwrap();
        assert!(adjusted.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let deleted = PgProductRepository::new(db).delete(Uuid::now_v7()).await.unwrap();
        assert!(!deleted);
    }
}
