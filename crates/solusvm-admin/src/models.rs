//! Request models shared by the admin API wrapper methods.
//!
//! Where the wire value set is closed (virtualization type, boot order,
//! console access, PAE state) an enum pins the exact token; the request
//! structs carry the larger parameter sets of create/edit operations and
//! convert themselves into query pairs. Unset optional fields are omitted
//! from the query string entirely.

use serde::{Deserialize, Serialize};
use solusvm_core::query::QueryParams;
use std::fmt;

/// Virtualization technology a node or plan targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VirtualizationType {
    /// OpenVZ containers
    #[serde(rename = "openvz")]
    OpenVz,
    /// Xen paravirtualized
    Xen,
    /// Xen HVM
    #[serde(rename = "xen hvm")]
    XenHvm,
    /// KVM
    Kvm,
}

impl VirtualizationType {
    /// The token the admin API expects in the `type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenVz => "openvz",
            Self::Xen => "xen",
            Self::XenHvm => "xen hvm",
            Self::Kvm => "kvm",
        }
    }
}

impl fmt::Display for VirtualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for VirtualizationType {
    fn default() -> Self {
        Self::Kvm
    }
}

/// Boot device order for a virtual server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootOrder {
    /// CDROM first, then disk (`cd`)
    CdromThenDisk,
    /// Disk first, then CDROM (`dc`)
    DiskThenCdrom,
    /// CDROM only (`c`)
    CdromOnly,
    /// Disk only (`d`)
    DiskOnly,
}

impl BootOrder {
    /// The token the admin API expects in the `bootorder` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CdromThenDisk => "cd",
            Self::DiskThenCdrom => "dc",
            Self::CdromOnly => "c",
            Self::DiskOnly => "d",
        }
    }
}

impl fmt::Display for BootOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serial console access change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleAccess {
    /// Enable console access
    Enable,
    /// Disable console access
    Disable,
}

impl ConsoleAccess {
    /// The token the admin API expects in the `access` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

impl fmt::Display for ConsoleAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PAE state for a Xen virtual server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaeMode {
    /// PAE on
    On,
    /// PAE off
    Off,
}

impl PaeMode {
    /// The token the admin API expects in the `pae` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for PaeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for the `vserver-create` action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVirtualServerRequest {
    /// Virtualization type of the new server.
    pub virt_type: VirtualizationType,
    /// Hostname of the new server.
    pub hostname: String,
    /// Root password.
    pub password: String,
    /// Owning client's username.
    pub username: String,
    /// Plan name.
    pub plan: String,
    /// Template filename without extension.
    pub template: String,
    /// Number of IPv4 addresses to allocate.
    pub ips: u32,
    /// Node to provision on (mutually exclusive with `nodegroup`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Node group to provision on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodegroup: Option<String>,
    /// Memory override in MB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_memory: Option<u32>,
    /// Disk space override in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_diskspace: Option<u32>,
    /// Bandwidth override in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_bandwidth: Option<u32>,
    /// CPU core override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_cpu: Option<u32>,
    /// Extra IP addresses beyond the plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_extra_ip: Option<u32>,
    /// Control panel license to issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_license: Option<u32>,
    /// Allocate an internal IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_ip: Option<bool>,
}

impl CreateVirtualServerRequest {
    /// Convert the request into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("type", self.virt_type);
        params.push("hostname", &self.hostname);
        params.push("password", &self.password);
        params.push("username", &self.username);
        params.push("plan", &self.plan);
        params.push("template", &self.template);
        params.push("ips", self.ips);
        params.push_opt("node", self.node.as_deref());
        params.push_opt("nodegroup", self.nodegroup.as_deref());
        params.push_opt("custommemory", self.custom_memory);
        params.push_opt("customdiskspace", self.custom_diskspace);
        params.push_opt("custombandwidth", self.custom_bandwidth);
        params.push_opt("customcpu", self.custom_cpu);
        params.push_opt("customextraip", self.custom_extra_ip);
        params.push_opt("issuelicense", self.issue_license);
        params.push_opt_flag("internalip", self.internal_ip);

        params.into_pairs()
    }
}

/// Parameters for the `client-create` action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    /// Username of the new client.
    pub username: String,
    /// Password.
    pub password: String,
    /// Email address.
    pub email: String,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl CreateClientRequest {
    /// Convert the request into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("username", &self.username);
        params.push("password", &self.password);
        params.push("email", &self.email);
        params.push("firstname", &self.firstname);
        params.push("lastname", &self.lastname);
        params.push_opt("company", self.company.as_deref());

        params.into_pairs()
    }
}

/// Optional fields for the `client-edit` action.
///
/// Only the fields that are set travel on the wire; the master leaves the
/// rest of the client record untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EditClientRequest {
    /// New first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// New last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// New company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl EditClientRequest {
    /// Convert the request into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("firstname", self.firstname.as_deref());
        params.push_opt("lastname", self.lastname.as_deref());
        params.push_opt("company", self.company.as_deref());
        params.push_opt("email", self.email.as_deref());

        params.into_pairs()
    }
}

/// Resource limits granted to a reseller.
///
/// Used on its own by `reseller-modifyresources` and embedded in
/// [`CreateResellerRequest`].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResellerResources {
    /// Maximum number of virtual servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vps: Option<u32>,
    /// Maximum number of clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_users: Option<u32>,
    /// Maximum total memory in MB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<u64>,
    /// Maximum total burst/swap memory in MB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_burst: Option<u64>,
    /// Maximum total disk space in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_disk: Option<u64>,
    /// Maximum total bandwidth in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bandwidth: Option<u64>,
    /// Maximum IPv4 addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ipv4: Option<u32>,
    /// Maximum IPv6 addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ipv6: Option<u32>,
    /// Node groups the reseller may provision on (comma separated ids).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodegroup: Option<String>,
    /// Media groups the reseller may use (comma separated ids).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mediagroups: Option<String>,
    /// Allow OpenVZ provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openvz: Option<bool>,
    /// Allow Xen PV provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xenpv: Option<bool>,
    /// Allow Xen HVM provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xenhvm: Option<bool>,
    /// Allow KVM provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kvm: Option<bool>,
}

impl ResellerResources {
    /// Convert the resource limits into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("maxvps", self.max_vps);
        params.push_opt("maxusers", self.max_users);
        params.push_opt("maxmem", self.max_memory);
        params.push_opt("maxburst", self.max_burst);
        params.push_opt("maxdisk", self.max_disk);
        params.push_opt("maxbw", self.max_bandwidth);
        params.push_opt("maxipv4", self.max_ipv4);
        params.push_opt("maxipv6", self.max_ipv6);
        params.push_opt("nodegroup", self.nodegroup.as_deref());
        params.push_opt("mediagroups", self.mediagroups.as_deref());
        params.push_opt_flag("openvz", self.openvz);
        params.push_opt_flag("xenpv", self.xenpv);
        params.push_opt_flag("xenhvm", self.xenhvm);
        params.push_opt_flag("kvm", self.kvm);

        params.into_pairs()
    }
}

/// Parameters for the `reseller-create` action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResellerRequest {
    /// Username of the new reseller.
    pub username: String,
    /// Password.
    pub password: String,
    /// Email address.
    pub email: String,
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Prefix applied to usernames of clients the reseller creates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_prefix: Option<String>,
    /// Resource limits for the reseller.
    #[serde(default)]
    pub resources: ResellerResources,
}

impl CreateResellerRequest {
    /// Convert the request into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("username", &self.username);
        params.push("password", &self.password);
        params.push("email", &self.email);
        params.push("firstname", &self.firstname);
        params.push("lastname", &self.lastname);
        params.push_opt("company", self.company.as_deref());
        params.push_opt("usernameprefix", self.username_prefix.as_deref());

        let mut pairs = params.into_pairs();
        pairs.extend(self.resources.to_pairs());
        pairs
    }
}
