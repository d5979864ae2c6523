//! Wire-level tests for the admin command endpoint.
//!
//! These tests drive the public client API against a mock server and check
//! what actually travels on the wire: the fixed authentication fields, the
//! exact action names, and the forwarding of every declared argument.

use solusvm_admin::catalog;
use solusvm_admin::{
    AdminClient, AdminClientBuilder, ConsoleAccess, CreateClientRequest,
    CreateVirtualServerRequest, EditClientRequest, PaeMode, ResellerResources,
    VirtualizationType,
};
use std::collections::HashSet;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn test_client(server: &MockServer) -> AdminClient {
    AdminClientBuilder::new("vm.example.com", "id123", "key456")
        .with_endpoint(format!("{}/api/admin/command.php", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn boot_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/command.php"))
        .and(query_param("action", "vserver-boot"))
        .and(query_param("vserverid", "42"))
        .and(query_param("rdtype", "json"))
        .and(query_param("id", "id123"))
        .and(query_param("key", "key456"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"status":"success","statusmsg":"Virtual server booted"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let body = client.boot_virtual_server(42).await.unwrap();

    // The body comes back verbatim, never parsed.
    assert_eq!(
        body,
        r#"{"status":"success","statusmsg":"Virtual server booted"}"#
    );
}

#[tokio::test]
async fn repeated_mutating_call_issues_two_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "vserver-reboot"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    client.reboot_virtual_server(42).await.unwrap();
    client.reboot_virtual_server(42).await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn remote_error_reports_arrive_as_ordinary_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"status":"error","statusmsg":"Virtual server does not exist"}"#),
        )
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let body = client.virtual_server_status(9999).await.unwrap();
    assert!(body.contains("Virtual server does not exist"));
}

#[tokio::test]
async fn every_wrapper_matches_the_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = test_client(&server).await;

    let create_vserver = CreateVirtualServerRequest {
        virt_type: VirtualizationType::Kvm,
        hostname: "vps.example.com".to_string(),
        password: "pw".to_string(),
        username: "alice".to_string(),
        plan: "small".to_string(),
        template: "debian-12".to_string(),
        ips: 1,
        node: Some("node1".to_string()),
        nodegroup: None,
        custom_memory: None,
        custom_diskspace: None,
        custom_bandwidth: None,
        custom_cpu: None,
        custom_extra_ip: None,
        issue_license: None,
        internal_ip: None,
    };
    let create_client = CreateClientRequest {
        username: "alice".to_string(),
        password: "pw".to_string(),
        email: "a@example.com".to_string(),
        firstname: "Alice".to_string(),
        lastname: "Ames".to_string(),
        company: None,
    };
    let edit_client = EditClientRequest {
        email: Some("new@example.com".to_string()),
        ..EditClientRequest::default()
    };
    let resources = ResellerResources {
        max_vps: Some(10),
        ..ResellerResources::default()
    };

    // One call per wrapper; the create/edit request structs exercise the
    // typed-parameter paths.
    client.create_virtual_server(&create_vserver).await.unwrap();
    client.boot_virtual_server(1).await.unwrap();
    client.reboot_virtual_server(1).await.unwrap();
    client.shutdown_virtual_server(1).await.unwrap();
    client.suspend_virtual_server(1).await.unwrap();
    client.unsuspend_virtual_server(1).await.unwrap();
    client.terminate_virtual_server(1, false).await.unwrap();
    client.rebuild_virtual_server(1, "debian-12").await.unwrap();
    client.virtual_server_exists(1).await.unwrap();
    client.virtual_server_status(1).await.unwrap();
    client.virtual_server_info(1).await.unwrap();
    client.virtual_server_state(1, true, true).await.unwrap();
    client.change_hostname(1, "h.example.com").await.unwrap();
    client.change_root_password(1, "pw").await.unwrap();
    client.change_vnc_password(1, "pw").await.unwrap();
    client.vnc_info(1).await.unwrap();
    client.set_pae(1, PaeMode::On).await.unwrap();
    client.enable_tun(1).await.unwrap();
    client.disable_tun(1).await.unwrap();
    client.enable_pxe(1).await.unwrap();
    client.disable_pxe(1).await.unwrap();
    client
        .change_boot_order(1, solusvm_admin::BootOrder::CdromThenDisk)
        .await
        .unwrap();
    client.change_plan(1, "big").await.unwrap();
    client.change_owner(1, 2).await.unwrap();
    client.change_memory(1, 2048).await.unwrap();
    client.change_cpu(1, 4).await.unwrap();
    client.change_hdd(1, 80).await.unwrap();
    client.change_bandwidth_limits(1, 100, 120).await.unwrap();
    client
        .serial_console(1, Some(ConsoleAccess::Enable), Some(2))
        .await
        .unwrap();
    client.mount_iso(1, "rescue.iso").await.unwrap();
    client.unmount_iso(1).await.unwrap();
    client.add_ip_address(1).await.unwrap();
    client.delete_ip_address(1, "203.0.113.9").await.unwrap();
    client.list_virtual_servers(1).await.unwrap();
    client.list_nodes_by_id(VirtualizationType::Kvm).await.unwrap();
    client
        .list_nodes_by_name(VirtualizationType::Kvm)
        .await
        .unwrap();
    client.list_node_ip_addresses(1).await.unwrap();
    client.list_iso_images(VirtualizationType::Kvm).await.unwrap();
    client.list_node_groups(VirtualizationType::Kvm).await.unwrap();
    client.list_plans(VirtualizationType::Kvm).await.unwrap();
    client.list_templates(VirtualizationType::Kvm).await.unwrap();
    client.xen_node_resources(1).await.unwrap();
    client.node_statistics(1).await.unwrap();
    client.authenticate_client("alice", "pw").await.unwrap();
    client.client_exists("alice").await.unwrap();
    client.create_client(&create_client).await.unwrap();
    client.edit_client("alice", &edit_client).await.unwrap();
    client.change_client_password("alice", "pw").await.unwrap();
    client
        .change_client_username("alice", "alicia")
        .await
        .unwrap();
    client.list_clients().await.unwrap();
    client.delete_client("alice").await.unwrap();
    client.delete_reseller("resell").await.unwrap();
    client.reseller_info("resell").await.unwrap();
    client.list_resellers().await.unwrap();
    client
        .modify_reseller_resources("resell", &resources)
        .await
        .unwrap();

    let reserved: HashSet<&str> = ["action", "rdtype", "id", "key"].into();
    let mut seen_actions = HashSet::new();

    for request in server.received_requests().await.unwrap() {
        let pairs: Vec<(String, String)> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let action = pairs
            .iter()
            .find(|(k, _)| k == "action")
            .map(|(_, v)| v.clone())
            .expect("request without action parameter");

        let spec = catalog::find(&action)
            .unwrap_or_else(|| panic!("action {action} missing from catalog"));
        seen_actions.insert(spec.name);

        let keys: HashSet<&str> = pairs
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| !reserved.contains(k))
            .collect();

        for required in spec.required {
            assert!(
                keys.contains(required),
                "{action} missing required parameter {required}"
            );
        }
        for key in &keys {
            assert!(
                spec.required.contains(key) || spec.optional.contains(key),
                "{action} sent undeclared parameter {key}"
            );
        }
    }

    // reseller-create is covered by its own test below; everything else in
    // the catalog must have been exercised here.
    for spec in catalog::ACTIONS {
        if spec.name != "reseller-create" {
            assert!(
                seen_actions.contains(spec.name),
                "catalog action {} has no wrapper call",
                spec.name
            );
        }
    }
}

#[tokio::test]
async fn create_reseller_forwards_identity_and_resources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "reseller-create"))
        .and(query_param("username", "resell"))
        .and(query_param("password", "pw"))
        .and(query_param("email", "r@example.com"))
        .and(query_param("firstname", "Re"))
        .and(query_param("lastname", "Seller"))
        .and(query_param("maxvps", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let request = solusvm_admin::CreateResellerRequest {
        username: "resell".to_string(),
        password: "pw".to_string(),
        email: "r@example.com".to_string(),
        firstname: "Re".to_string(),
        lastname: "Seller".to_string(),
        company: None,
        username_prefix: None,
        resources: ResellerResources {
            max_vps: Some(25),
            ..ResellerResources::default()
        },
    };
    client.create_reseller(&request).await.unwrap();
}
