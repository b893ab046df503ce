use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Address, User};
use crate::inbound::http::validation::{Validate, Violations};

/// Delivery address, accepted in requests and echoed in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[schema(example = "0912345678")]
    pub phone: String,
    #[schema(example = "Nguyen Van A")]
    pub name: String,
    #[schema(example = "1 Dai Co Viet, Hai Ba Trung")]
    pub address_detail: String,
    #[schema(example = "00004")]
    pub ward_code: String,
}

impl Validate for AddressDto {
    fn violations(&self) -> Vec<String> {
        Violations::default()
            .not_blank("phone", &self.phone)
            .not_blank("name", &self.name)
            .not_blank("addressDetail", &self.address_detail)
            .not_blank("wardCode", &self.ward_code)
            .into_inner()
    }
}

impl From<Address> for AddressDto {
    fn from(value: Address) -> Self {
        Self {
            phone: value.phone,
            name: value.name,
            address_detail: value.address_detail,
            ward_code: value.ward_code,
        }
    }
}

impl From<AddressDto> for Address {
    fn from(value: AddressDto) -> Self {
        Self {
            phone: value.phone,
            name: value.name,
            address_detail: value.address_detail,
            ward_code: value.ward_code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: String,
    #[schema(example = "alice")]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role names without the `ROLE_` prefix.
    #[schema(example = json!(["USER"]))]
    pub roles: Vec<String>,
    pub created_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDto>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            user_id: value.id.to_string(),
            username: value.username,
            fullname: value.fullname,
            email: value.email,
            roles: value.roles.into_iter().collect(),
            created_date: value.created_at,
            address: value.address.map(AddressDto::from),
        }
    }
}
