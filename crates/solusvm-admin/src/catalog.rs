//! Declarative catalog of admin API actions.
//!
//! One table entry per remote action: the wire name plus its required and
//! optional parameter names. The wrapper methods reference the name
//! constants in [`actions`], and the test suites check the wrappers
//! against this table, so adding a remote action starts here.
//!
//! Two wire names correct defects inherited by earlier client revisions:
//! changing CPU and disk size went out as `vserver-change-memory`. They
//! are `vserver-change-cpu` and `vserver-change-hdd` here, following the
//! naming of the memory action.

/// Wire names of every supported admin API action.
pub mod actions {
    /// Create a virtual server.
    pub const VSERVER_CREATE: &str = "vserver-create";
    /// Boot a virtual server.
    pub const VSERVER_BOOT: &str = "vserver-boot";
    /// Reboot a virtual server.
    pub const VSERVER_REBOOT: &str = "vserver-reboot";
    /// Shut down a virtual server.
    pub const VSERVER_SHUTDOWN: &str = "vserver-shutdown";
    /// Suspend a virtual server.
    pub const VSERVER_SUSPEND: &str = "vserver-suspend";
    /// Unsuspend a virtual server.
    pub const VSERVER_UNSUSPEND: &str = "vserver-unsuspend";
    /// Terminate a virtual server.
    pub const VSERVER_TERMINATE: &str = "vserver-terminate";
    /// Rebuild a virtual server from a template.
    pub const VSERVER_REBUILD: &str = "vserver-rebuild";
    /// Check whether a virtual server exists.
    pub const VSERVER_CHECK_EXISTS: &str = "vserver-checkexists";
    /// Query a virtual server's online/offline status.
    pub const VSERVER_STATUS: &str = "vserver-status";
    /// Fetch a virtual server's information record.
    pub const VSERVER_INFO: &str = "vserver-info";
    /// Fetch a virtual server's full state.
    pub const VSERVER_INFO_ALL: &str = "vserver-infoall";
    /// Change a virtual server's hostname.
    pub const VSERVER_HOSTNAME: &str = "vserver-hostname";
    /// Change a virtual server's root password.
    pub const VSERVER_ROOT_PASSWORD: &str = "vserver-rootpassword";
    /// Change a virtual server's VNC password.
    pub const VSERVER_VNC_PASSWORD: &str = "vserver-vncpass";
    /// Fetch a virtual server's VNC connection details.
    pub const VSERVER_VNC_INFO: &str = "vserver-vnc";
    /// Toggle PAE.
    pub const VSERVER_PAE: &str = "vserver-pae";
    /// Enable TUN/TAP.
    pub const VSERVER_TUN_ENABLE: &str = "vserver-tun-enable";
    /// Disable TUN/TAP.
    pub const VSERVER_TUN_DISABLE: &str = "vserver-tun-disable";
    /// Enable PXE network boot.
    pub const VSERVER_PXE_ENABLE: &str = "vserver-network-enable";
    /// Disable PXE network boot.
    pub const VSERVER_PXE_DISABLE: &str = "vserver-network-disable";
    /// Change boot device order.
    pub const VSERVER_BOOT_ORDER: &str = "vserver-bootorder";
    /// Change plan.
    pub const VSERVER_CHANGE_PLAN: &str = "vserver-change";
    /// Change owner.
    pub const VSERVER_CHANGE_OWNER: &str = "vserver-changeowner";
    /// Change allocated memory.
    pub const VSERVER_CHANGE_MEMORY: &str = "vserver-change-memory";
    /// Change CPU core count.
    pub const VSERVER_CHANGE_CPU: &str = "vserver-change-cpu";
    /// Change hard disk size.
    pub const VSERVER_CHANGE_HDD: &str = "vserver-change-hdd";
    /// Change bandwidth limits.
    pub const VSERVER_BANDWIDTH: &str = "vserver-bandwidth";
    /// Query or toggle serial console access.
    pub const VSERVER_CONSOLE: &str = "vserver-console";
    /// Mount an ISO image.
    pub const VSERVER_MOUNT_ISO: &str = "vserver-mountiso";
    /// Unmount the mounted ISO image.
    pub const VSERVER_UNMOUNT_ISO: &str = "vserver-unmountiso";
    /// Add an IP address.
    pub const VSERVER_ADD_IP: &str = "vserver-addip";
    /// Remove an IP address.
    pub const VSERVER_DELETE_IP: &str = "vserver-delip";

    /// List virtual servers on a node.
    pub const NODE_VIRTUAL_SERVERS: &str = "node-virtualservers";
    /// List nodes by id.
    pub const NODE_ID_LIST: &str = "node-idlist";
    /// List nodes by name.
    pub const NODE_LIST: &str = "listnodes";
    /// List all IP addresses on a node.
    pub const NODE_IP_LIST: &str = "node-iplist";
    /// List available ISO images.
    pub const ISO_LIST: &str = "listiso";
    /// List node groups.
    pub const NODE_GROUP_LIST: &str = "listnodegroups";
    /// List plans.
    pub const PLAN_LIST: &str = "listplans";
    /// List templates.
    pub const TEMPLATE_LIST: &str = "listtemplates";
    /// Query resource counts on a Xen node.
    pub const NODE_XEN_RESOURCES: &str = "node-xenresources";
    /// Query node statistics.
    pub const NODE_STATISTICS: &str = "node-statistics";

    /// Authenticate a client's credentials.
    pub const CLIENT_AUTHENTICATE: &str = "client-authenticate";
    /// Check whether a client exists.
    pub const CLIENT_CHECK_EXISTS: &str = "client-checkexists";
    /// Create a client.
    pub const CLIENT_CREATE: &str = "client-create";
    /// Edit a client's record.
    pub const CLIENT_EDIT: &str = "client-edit";
    /// Change a client's password.
    pub const CLIENT_UPDATE_PASSWORD: &str = "client-updatepassword";
    /// Change a client's username.
    pub const CLIENT_CHANGE_USERNAME: &str = "client-change-username";
    /// List all clients.
    pub const CLIENT_LIST: &str = "client-list";
    /// Delete a client.
    pub const CLIENT_DELETE: &str = "client-delete";

    /// Create a reseller.
    pub const RESELLER_CREATE: &str = "reseller-create";
    /// Delete a reseller.
    pub const RESELLER_DELETE: &str = "reseller-delete";
    /// Fetch a reseller's details.
    pub const RESELLER_INFO: &str = "reseller-info";
    /// List all resellers.
    pub const RESELLER_LIST: &str = "reseller-list";
    /// Modify a reseller's resource limits.
    pub const RESELLER_MODIFY_RESOURCES: &str = "reseller-modifyresources";
}

use actions::*;

/// Parameter contract of one admin API action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    /// Wire name carried in the `action` query parameter.
    pub name: &'static str,
    /// Parameters the master requires for this action.
    pub required: &'static [&'static str],
    /// Parameters the master accepts but does not require.
    pub optional: &'static [&'static str],
}

/// Every action supported by this client, with its parameter names.
pub const ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        name: VSERVER_CREATE,
        required: &[
            "type", "hostname", "password", "username", "plan", "template", "ips",
        ],
        optional: &[
            "node",
            "nodegroup",
            "custommemory",
            "customdiskspace",
            "custombandwidth",
            "customcpu",
            "customextraip",
            "issuelicense",
            "internalip",
        ],
    },
    ActionSpec { name: VSERVER_BOOT, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_REBOOT, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_SHUTDOWN, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_SUSPEND, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_UNSUSPEND, required: &["vserverid"], optional: &[] },
    ActionSpec {
        name: VSERVER_TERMINATE,
        required: &["vserverid"],
        optional: &["deleteclient"],
    },
    ActionSpec {
        name: VSERVER_REBUILD,
        required: &["vserverid", "template"],
        optional: &[],
    },
    ActionSpec { name: VSERVER_CHECK_EXISTS, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_STATUS, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_INFO, required: &["vserverid"], optional: &[] },
    ActionSpec {
        name: VSERVER_INFO_ALL,
        required: &["vserverid"],
        optional: &["nostatus", "nographs"],
    },
    ActionSpec {
        name: VSERVER_HOSTNAME,
        required: &["vserverid", "hostname"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_ROOT_PASSWORD,
        required: &["vserverid", "rootpassword"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_VNC_PASSWORD,
        required: &["vserverid", "vncpassword"],
        optional: &[],
    },
    ActionSpec { name: VSERVER_VNC_INFO, required: &["vserverid"], optional: &[] },
    ActionSpec {
        name: VSERVER_PAE,
        required: &["vserverid", "pae"],
        optional: &[],
    },
    ActionSpec { name: VSERVER_TUN_ENABLE, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_TUN_DISABLE, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_PXE_ENABLE, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_PXE_DISABLE, required: &["vserverid"], optional: &[] },
    ActionSpec {
        name: VSERVER_BOOT_ORDER,
        required: &["vserverid", "bootorder"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_CHANGE_PLAN,
        required: &["vserverid", "plan"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_CHANGE_OWNER,
        required: &["vserverid", "clientid"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_CHANGE_MEMORY,
        required: &["vserverid", "memory"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_CHANGE_CPU,
        required: &["vserverid", "cpu"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_CHANGE_HDD,
        required: &["vserverid", "hdd"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_BANDWIDTH,
        required: &["vserverid", "limit", "overlimit"],
        optional: &[],
    },
    ActionSpec {
        name: VSERVER_CONSOLE,
        required: &["vserverid"],
        optional: &["access", "time"],
    },
    ActionSpec {
        name: VSERVER_MOUNT_ISO,
        required: &["vserverid", "iso"],
        optional: &[],
    },
    ActionSpec { name: VSERVER_UNMOUNT_ISO, required: &["vserverid"], optional: &[] },
    ActionSpec { name: VSERVER_ADD_IP, required: &["vserverid"], optional: &[] },
    ActionSpec {
        name: VSERVER_DELETE_IP,
        required: &["vserverid", "ipaddr"],
        optional: &[],
    },
    ActionSpec { name: NODE_VIRTUAL_SERVERS, required: &["nodeid"], optional: &[] },
    ActionSpec { name: NODE_ID_LIST, required: &["type"], optional: &[] },
    ActionSpec { name: NODE_LIST, required: &["type"], optional: &[] },
    ActionSpec { name: NODE_IP_LIST, required: &["nodeid"], optional: &[] },
    ActionSpec { name: ISO_LIST, required: &["type"], optional: &[] },
    ActionSpec { name: NODE_GROUP_LIST, required: &["type"], optional: &[] },
    ActionSpec { name: PLAN_LIST, required: &["type"], optional: &[] },
    ActionSpec { name: TEMPLATE_LIST, required: &["type"], optional: &[] },
    ActionSpec { name: NODE_XEN_RESOURCES, required: &["nodeid"], optional: &[] },
    ActionSpec { name: NODE_STATISTICS, required: &["nodeid"], optional: &[] },
    ActionSpec {
        name: CLIENT_AUTHENTICATE,
        required: &["username", "password"],
        optional: &[],
    },
    ActionSpec { name: CLIENT_CHECK_EXISTS, required: &["username"], optional: &[] },
    ActionSpec {
        name: CLIENT_CREATE,
        required: &["username", "password", "email", "firstname", "lastname"],
        optional: &["company"],
    },
    ActionSpec {
        name: CLIENT_EDIT,
        required: &["username"],
        optional: &["firstname", "lastname", "company", "email"],
    },
    ActionSpec {
        name: CLIENT_UPDATE_PASSWORD,
        required: &["username", "password"],
        optional: &[],
    },
    ActionSpec {
        name: CLIENT_CHANGE_USERNAME,
        required: &["username", "newusername"],
        optional: &[],
    },
    ActionSpec { name: CLIENT_LIST, required: &[], optional: &[] },
    ActionSpec { name: CLIENT_DELETE, required: &["username"], optional: &[] },
    ActionSpec {
        name: RESELLER_CREATE,
        required: &["username", "password", "email", "firstname", "lastname"],
        optional: &[
            "company",
            "usernameprefix",
            "maxvps",
            "maxusers",
            "maxmem",
            "maxburst",
            "maxdisk",
            "maxbw",
            "maxipv4",
            "maxipv6",
            "nodegroup",
            "mediagroups",
            "openvz",
            "xenpv",
            "xenhvm",
            "kvm",
        ],
    },
    ActionSpec { name: RESELLER_DELETE, required: &["username"], optional: &[] },
    ActionSpec { name: RESELLER_INFO, required: &["username"], optional: &[] },
    ActionSpec { name: RESELLER_LIST, required: &[], optional: &[] },
    ActionSpec {
        name: RESELLER_MODIFY_RESOURCES,
        required: &["username"],
        optional: &[
            "maxvps",
            "maxusers",
            "maxmem",
            "maxburst",
            "maxdisk",
            "maxbw",
            "maxipv4",
            "maxipv6",
            "nodegroup",
            "mediagroups",
            "openvz",
            "xenpv",
            "xenhvm",
            "kvm",
        ],
    },
];

/// Look up an action by its wire name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ActionSpec> {
    ACTIONS.iter().find(|spec| spec.name == name)
}
