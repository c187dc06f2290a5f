use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::CustomerResult,
    models::{CreateCustomer, Customer, UpdateCustomer},
    repository::CustomerRepository,
};

pub struct PgCustomerRepository {
    db: DatabaseConnection,
}

impl PgCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(customer_id = %model.id, "Registered customer");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_all(&self) -> CustomerResult<Vec<Customer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateCustomer) -> CustomerResult<Option<Customer>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(email) = input.email {
            active_model.email = Set(email);
        }
        if let Some(phone) = input.phone {
            active_model.phone = Set(Some(phone));
        }
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model.update(&self.db).await?;

        tracing::info!(customer_id = %id, "Updated customer");
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: Uuid) -> CustomerResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(customer_id = %id, "Deleted customer");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> CustomerResult<bool> {
        let mut query = entity::Entity::find().filter(entity::Column::Email.eq(email));
        if let Some(id) = exclude {
            query = query.filter(entity::Column::Id.ne(id));
        }

        Ok(query.count(&self.db).await? > 0)
    }

    async fn cpf_taken(&self, cpf: &str) -> CustomerResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Cpf.eq(cpf))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
