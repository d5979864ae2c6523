//! Reseller management wrappers.

use crate::catalog::actions;
use crate::client::AdminClient;
use crate::clients::username_pairs;
use crate::models::{CreateResellerRequest, ResellerResources};
use crate::Result;

impl AdminClient {
    /// Create a reseller.
    pub async fn create_reseller(&self, request: &CreateResellerRequest) -> Result<String> {
        self.command(actions::RESELLER_CREATE, request.to_pairs())
            .await
    }

    /// Delete the specified reseller.
    pub async fn delete_reseller(&self, username: &str) -> Result<String> {
        self.command(actions::RESELLER_DELETE, username_pairs(username))
            .await
    }

    /// Fetch the specified reseller's details.
    pub async fn reseller_info(&self, username: &str) -> Result<String> {
        self.command(actions::RESELLER_INFO, username_pairs(username))
            .await
    }

    /// List all resellers.
    pub async fn list_resellers(&self) -> Result<String> {
        self.command(actions::RESELLER_LIST, Vec::new()).await
    }

    /// Modify the specified reseller's resource limits. Unset fields are
    /// left untouched on the master.
    pub async fn modify_reseller_resources(
        &self,
        username: &str,
        resources: &ResellerResources,
    ) -> Result<String> {
        let mut pairs = username_pairs(username);
        pairs.extend(resources.to_pairs());
        self.command(actions::RESELLER_MODIFY_RESOURCES, pairs)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::AdminClientBuilder;
    use crate::models::ResellerResources;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> crate::AdminClient {
        AdminClientBuilder::new("vm.example.com", "id123", "key456")
            .with_endpoint(format!("{}/api/admin/command.php", server.uri()))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn modify_resources_forwards_username_and_set_limits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "reseller-modifyresources"))
            .and(query_param("username", "resell"))
            .and(query_param("maxvps", "50"))
            .and(query_param("kvm", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let resources = ResellerResources {
            max_vps: Some(50),
            kvm: Some(true),
            ..ResellerResources::default()
        };
        client
            .modify_reseller_resources("resell", &resources)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn reseller_info_forwards_username() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "reseller-info"))
            .and(query_param("username", "resell"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        client.reseller_info("resell").await.unwrap();
    }
}
