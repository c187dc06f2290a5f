use axum_helpers::Outcome;
use pagination::{PageParams, PagedSlice};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::cpf;
use crate::error::CustomerResult;
use crate::models::{CreateCustomer, Customer, UpdateCustomer};
use crate::repository::CustomerRepository;

pub const CPF_INVALID: &str = "CPF invalid";
pub const EMAIL_TAKEN: &str = "Email already registered";
pub const CPF_TAKEN: &str = "CPF already registered";
const ALREADY_REGISTERED: &str = "Email or CPF already registered";

pub fn customer_location(id: Uuid) -> String {
    format!("/api/customers/{}", id)
}

fn not_found(id: Uuid) -> String {
    format!("Customer {} not found", id)
}

/// Passes when `ok`, otherwise fails with `failure()`.
fn check(ok: bool, failure: impl FnOnce() -> Outcome<()>) -> Outcome<()> {
    if ok { Outcome::success(()) } else { failure() }
}

/// Customer registration and maintenance.
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a customer: 201 with its location.
    ///
    /// The CPF check digits and the e-mail and CPF uniqueness are verified
    /// independently and reported together: the response carries every
    /// failed check's message under the status of the first one, in the
    /// order CPF validity, e-mail, CPF.
    #[instrument(skip(self, input))]
    pub async fn register_customer(
        &self,
        input: CreateCustomer,
    ) -> CustomerResult<Outcome<Customer>> {
        // Judge the CPF as submitted; normalizing drops stray characters
        let cpf_valid = cpf::is_valid(&input.cpf);
        let input = input.normalized();

        let email_taken = self.repository.email_taken(&input.email, None).await?;
        let cpf_taken = cpf_valid && self.repository.cpf_taken(&input.cpf).await?;

        let checks = Outcome::merge([
            check(cpf_valid, || Outcome::bad_request(CPF_INVALID)),
            check(!email_taken, || Outcome::conflict(EMAIL_TAKEN)),
            check(!cpf_taken, || Outcome::conflict(CPF_TAKEN)),
        ]);
        if let Err(faults) = checks.into_result() {
            tracing::info!(failed_checks = faults.len(), "Customer registration rejected");
            return Ok(Outcome::fail_with(faults));
        }

        let customer = match self.repository.create(input).await {
            Ok(customer) => customer,
            // A concurrent registration won the unique index
            Err(e) if e.is_unique_violation() => {
                return Ok(Outcome::conflict(ALREADY_REGISTERED));
            }
            Err(e) => return Err(e),
        };

        let location = customer_location(customer.id);
        Ok(Outcome::created(customer, &location)?)
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: Uuid) -> CustomerResult<Outcome<Customer>> {
        match self.repository.get_by_id(id).await? {
            Some(customer) => Ok(Outcome::ok(customer)?),
            None => Ok(Outcome::not_found(not_found(id))),
        }
    }

    /// One page of customers ordered by name.
    ///
    /// The whole ordered set is loaded and sliced in memory.
    #[instrument(skip(self))]
    pub async fn list_customers(
        &self,
        page: PageParams,
    ) -> CustomerResult<Outcome<PagedSlice<Customer>>> {
        let customers = self.repository.list_all().await?;
        Ok(Outcome::ok(PagedSlice::paginate(customers, &page))?)
    }

    /// Update a customer: 200, 404 when unknown, 409 when the new e-mail is
    /// registered to someone else.
    #[instrument(skip(self, input))]
    pub async fn update_customer(
        &self,
        id: Uuid,
        input: UpdateCustomer,
    ) -> CustomerResult<Outcome<Customer>> {
        let input = input.normalized();

        if let Some(email) = input.email.as_deref() {
            if self.repository.email_taken(email, Some(id)).await? {
                return Ok(Outcome::conflict(EMAIL_TAKEN));
            }
        }

        match self.repository.update(id, input).await {
            Ok(Some(customer)) => Ok(Outcome::ok(customer)?),
            Ok(None) => Ok(Outcome::not_found(not_found(id))),
            Err(e) if e.is_unique_violation() => Ok(Outcome::conflict(EMAIL_TAKEN)),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: Uuid) -> CustomerResult<Outcome<()>> {
        if self.repository.delete(id).await? {
            Ok(Outcome::no_content())
        } else {
            Ok(Outcome::not_found(not_found(id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCustomerRepository;
    use axum::http::StatusCode;
    use mockall::predicate::eq;
    use serde_json::json;

    fn customer(name: &str) -> Customer {
        let now = chrono::Utc::now();
        Customer {
            id: Uuid::now_v7(),
            name: name.into(),
            email: format!("{}@pets.com", name.to_lowercase()),
            cpf: "52998224725".into(),
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn registration(cpf: &str) -> CreateCustomer {
        CreateCustomer {
            name: "Ana".into(),
            email: "Ana@Pets.com".into(),
            cpf: cpf.into(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_returns_201_with_location() {
        let mut mock_repo = MockCustomerRepository::new();
        let created = customer("Ana");
        let id = created.id;

        mock_repo
            .expect_email_taken()
            .with(eq("ana@pets.com"), eq(None::<Uuid>))
            .returning(|_, _| Ok(false));
        mock_repo
            .expect_cpf_taken()
            .with(eq("52998224725"))
            .returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .withf(|input| input.cpf == "52998224725" && input.email == "ana@pets.com")
            .returning(move |_| Ok(created.clone()));

        let service = CustomerService::new(mock_repo);
        let shape = service
            .register_customer(registration("529.982.247-25"))
            .await
            .unwrap()
            .resolve();

        assert_eq!(shape.status(), StatusCode::CREATED);
        assert_eq!(shape.location(), Some(customer_location(id).as_str()));
    }

    #[tokio::test]
    async fn test_register_reports_every_failed_check() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_email_taken().returning(|_, _| Ok(true));
        mock_repo.expect_cpf_taken().returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let service = CustomerService::new(mock_repo);
        let shape = service
            .register_customer(registration("529.982.247-25"))
            .await
            .unwrap()
            .resolve();

        assert_eq!(shape.status(), StatusCode::CONFLICT);
        assert_eq!(
            shape.body(),
            Some(json!({"errors": [EMAIL_TAKEN, CPF_TAKEN]}))
        );
    }

    #[tokio::test]
    async fn test_invalid_cpf_status_comes_first() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_email_taken().returning(|_, _| Ok(true));
        mock_repo.expect_cpf_taken().never();
        mock_repo.expect_create().never();

        let service = CustomerService::new(mock_repo);
        let shape = service
            .register_customer(registration("111.111.111-11"))
            .await
            .unwrap()
            .resolve();

        assert_eq!(shape.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            shape.body(),
            Some(json!({"errors": [CPF_INVALID, EMAIL_TAKEN]}))
        );
    }

    #[tokio::test]
    async fn test_invalid_cpf_alone_is_400() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_email_taken().returning(|_, _| Ok(false));

        let service = CustomerService::new(mock_repo);
        let shape = service
            .register_customer(registration("529.982.247-26"))
            .await
            .unwrap()
            .resolve();

        assert_eq!(shape.status(), StatusCode::BAD_REQUEST);
        assert_eq!(shape.body(), Some(json!({"errors": [CPF_INVALID]})));
    }

    #[tokio::test]
    async fn test_cpf_with_letters_is_invalid() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_email_taken().returning(|_, _| Ok(false));
        mock_repo.expect_cpf_taken().never();
        mock_repo.expect_create().never();

        let service = CustomerService::new(mock_repo);
        let shape = service
            .register_customer(registration("CPF52998224725"))
            .await
            .unwrap()
            .resolve();

        assert_eq!(shape.status(), StatusCode::BAD_REQUEST);
        assert_eq!(shape.body(), Some(json!({"errors": [CPF_INVALID]})));
    }

    #[tokio::test]
    async fn test_list_paginates_in_memory() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_list_all().returning(|| {
            Ok((1..=55).map(|n| customer(&format!("C{:02}", n))).collect())
        });

        let service = CustomerService::new(mock_repo);
        let outcome = service.list_customers(PageParams::new(2, 20)).await.unwrap();
        let page = outcome.value().unwrap();

        assert_eq!(page.items().len(), 20);
        assert_eq!(page.items()[0].name, "C21");
        assert_eq!(page.total_count(), 55);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_previous());
    }

    #[tokio::test]
    async fn test_update_to_taken_email_is_conflict() {
        let mut mock_repo = MockCustomerRepository::new();
        let id = Uuid::now_v7();
        mock_repo
            .expect_email_taken()
            .with(eq("bob@pets.com"), eq(Some(id)))
            .returning(|_, _| Ok(true));
        mock_repo.expect_update().never();

        let service = CustomerService::new(mock_repo);
        let input = UpdateCustomer {
            email: Some("Bob@Pets.com".into()),
            ..Default::default()
        };
        let outcome = service.update_customer(id, input).await.unwrap();

        assert_eq!(outcome.resolve().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_unknown_customer_is_404() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = CustomerService::new(mock_repo);
        let input = UpdateCustomer {
            name: Some("Bruno".into()),
            ..Default::default()
        };
        let outcome = service.update_customer(Uuid::now_v7(), input).await.unwrap();

        assert_eq!(outcome.resolve().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_returns_204_or_404() {
        let mut mock_repo = MockCustomerRepository::new();
        let known = Uuid::now_v7();
        mock_repo
            .expect_delete()
            .returning(move |id| Ok(id == known));

        let service = CustomerService::new(mock_repo);
        assert_eq!(
            service.delete_customer(known).await.unwrap().resolve().status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(
            service.delete_customer(Uuid::now_v7()).await.unwrap().resolve().status(),
            StatusCode::NOT_FOUND
        );
    }
}
