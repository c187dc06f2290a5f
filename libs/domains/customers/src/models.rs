use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::cpf;

/// A registered customer of the shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    /// Lower-cased, unique
    pub email: String,
    /// Eleven digits without formatting, unique
    #[schema(example = "52998224725")]
    pub cpf: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a customer
///
/// The CPF may be sent formatted (`529.982.247-25`); its check digits are
/// verified by the service, not by the validator, so that the failure can be
/// reported together with the uniqueness checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(min = 11, max = 14))]
    #[schema(example = "529.982.247-25")]
    pub cpf: String,
    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,
}

/// DTO for updating a customer, absent fields are left untouched
///
/// The CPF cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(length(min = 2, max = 120))]
    pub name: Option<String>,
    #[validate(email, length(max = 254))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl CreateCustomer {
    /// Canonical form stored in the database: trimmed name, lower-cased
    /// e-mail and digits-only CPF.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: normalize_email(&self.email),
            cpf: cpf::normalize(&self.cpf),
            phone: self.phone.map(|phone| phone.trim().to_owned()),
        }
    }
}

impl UpdateCustomer {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_owned()),
            email: self.email.as_deref().map(normalize_email),
            phone: self.phone.map(|phone| phone.trim().to_owned()),
        }
    }
}
