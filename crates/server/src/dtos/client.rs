use database::{entities::clients, repository::set_if};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ClientResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub license_number: i64,
}

impl From<clients::Model> for ClientResponse {
    fn from(client: clients::Model) -> Self {
        Self {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            address: client.address,
            license_number: client.license_number,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClientCreate {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub license_number: i64,
}

impl From<ClientCreate> for clients::ActiveModel {
    fn from(client: ClientCreate) -> Self {
        Self {
            id: NotSet,
            first_name: Set(client.first_name),
            last_name: Set(client.last_name),
            address: Set(client.address),
            license_number: Set(client.license_number),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ClientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub license_number: Option<i64>,
}

impl From<ClientUpdate> for clients::ActiveModel {
    fn from(client: ClientUpdate) -> Self {
        Self {
            id: NotSet,
            first_name: set_if(client.first_name),
            last_name: set_if(client.last_name),
            address: set_if(client.address),
            license_number: set_if(client.license_number),
        }
    }
}
