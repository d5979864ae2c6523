//! Node and inventory query wrappers.

use crate::catalog::actions;
use crate::client::AdminClient;
use crate::models::VirtualizationType;
use crate::Result;
use solusvm_core::query::QueryParams;

impl AdminClient {
    /// List virtual servers allocated on the specified node.
    pub async fn list_virtual_servers(&self, nodeid: u32) -> Result<String> {
        self.command(actions::NODE_VIRTUAL_SERVERS, node_pairs(nodeid))
            .await
    }

    /// List nodes of the given virtualization type by id.
    pub async fn list_nodes_by_id(&self, virt_type: VirtualizationType) -> Result<String> {
        self.command(actions::NODE_ID_LIST, type_pairs(virt_type))
            .await
    }

    /// List nodes of the given virtualization type by name.
    pub async fn list_nodes_by_name(&self, virt_type: VirtualizationType) -> Result<String> {
        self.command(actions::NODE_LIST, type_pairs(virt_type)).await
    }

    /// List all IP addresses on the specified node.
    pub async fn list_node_ip_addresses(&self, nodeid: u32) -> Result<String> {
        self.command(actions::NODE_IP_LIST, node_pairs(nodeid)).await
    }

    /// List available ISO images for the given virtualization type.
    pub async fn list_iso_images(&self, virt_type: VirtualizationType) -> Result<String> {
        self.command(actions::ISO_LIST, type_pairs(virt_type)).await
    }

    /// List node groups for the given virtualization type.
    pub async fn list_node_groups(&self, virt_type: VirtualizationType) -> Result<String> {
        self.command(actions::NODE_GROUP_LIST, type_pairs(virt_type))
            .await
    }

    /// List plans for the given virtualization type.
    pub async fn list_plans(&self, virt_type: VirtualizationType) -> Result<String> {
        self.command(actions::PLAN_LIST, type_pairs(virt_type)).await
    }

    /// List templates for the given virtualization type.
    pub async fn list_templates(&self, virt_type: VirtualizationType) -> Result<String> {
        self.command(actions::TEMPLATE_LIST, type_pairs(virt_type))
            .await
    }

    /// Query resource counts on the specified Xen node.
    pub async fn xen_node_resources(&self, nodeid: u32) -> Result<String> {
        self.command(actions::NODE_XEN_RESOURCES, node_pairs(nodeid))
            .await
    }

    /// Query statistics for the specified node.
    pub async fn node_statistics(&self, nodeid: u32) -> Result<String> {
        self.command(actions::NODE_STATISTICS, node_pairs(nodeid))
            .await
    }
}

fn node_pairs(nodeid: u32) -> Vec<(&'static str, String)> {
    let mut params = QueryParams::new();
    params.push("nodeid", nodeid);
    params.into_pairs()
}

fn type_pairs(virt_type: VirtualizationType) -> Vec<(&'static str, String)> {
    let mut params = QueryParams::new();
    params.push("type", virt_type);
    params.into_pairs()
}
