//! Client account management wrappers.

use crate::catalog::actions;
use crate::client::AdminClient;
use crate::models::{CreateClientRequest, EditClientRequest};
use crate::Result;
use solusvm_core::query::QueryParams;

impl AdminClient {
    /// Authenticate a client's username and password.
    pub async fn authenticate_client(&self, username: &str, password: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("username", username);
        params.push("password", password);
        self.command(actions::CLIENT_AUTHENTICATE, params.into_pairs())
            .await
    }

    /// Check whether the specified client exists.
    pub async fn client_exists(&self, username: &str) -> Result<String> {
        self.command(actions::CLIENT_CHECK_EXISTS, username_pairs(username))
            .await
    }

    /// Create a client.
    pub async fn create_client(&self, request: &CreateClientRequest) -> Result<String> {
        self.command(actions::CLIENT_CREATE, request.to_pairs())
            .await
    }

    /// Edit the specified client's record. Unset request fields are left
    /// untouched on the master.
    pub async fn edit_client(&self, username: &str, request: &EditClientRequest) -> Result<String> {
        let mut pairs = username_pairs(username);
        pairs.extend(request.to_pairs());
        self.command(actions::CLIENT_EDIT, pairs).await
    }

    /// Change the specified client's password.
    pub async fn change_client_password(&self, username: &str, password: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("username", username);
        params.push("password", password);
        self.command(actions::CLIENT_UPDATE_PASSWORD, params.into_pairs())
            .await
    }

    /// Change the specified client's username.
    pub async fn change_client_username(
        &self,
        username: &str,
        new_username: &str,
    ) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("username", username);
        params.push("newusername", new_username);
        self.command(actions::CLIENT_CHANGE_USERNAME, params.into_pairs())
            .await
    }

    /// List all clients.
    pub async fn list_clients(&self) -> Result<String> {
        self.command(actions::CLIENT_LIST, Vec::new()).await
    }

    /// Delete the specified client.
    pub async fn delete_client(&self, username: &str) -> Result<String> {
        self.command(actions::CLIENT_DELETE, username_pairs(username))
            .await
    }
}

pub(crate) fn username_pairs(username: &str) -> Vec<(&'static str, String)> {
    let mut params = QueryParams::new();
    params.push("username", username);
    params.into_pairs()
}
