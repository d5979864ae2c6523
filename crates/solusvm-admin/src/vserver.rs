//! Virtual server lifecycle and configuration wrappers.
//!
//! Each method assembles the parameter pairs for one action and hands them
//! to [`AdminClient::command`]. Repeating a call re-issues the remote side
//! effect; idempotence is decided by the master, not here.

use crate::catalog::actions;
use crate::client::AdminClient;
use crate::models::{BootOrder, ConsoleAccess, CreateVirtualServerRequest, PaeMode};
use crate::Result;
use solusvm_core::query::QueryParams;

impl AdminClient {
    /// Create a virtual server.
    pub async fn create_virtual_server(
        &self,
        request: &CreateVirtualServerRequest,
    ) -> Result<String> {
        self.command(actions::VSERVER_CREATE, request.to_pairs())
            .await
    }

    /// Boot the specified virtual server.
    pub async fn boot_virtual_server(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_BOOT, vserver_pairs(vserverid))
            .await
    }

    /// Reboot the specified virtual server.
    pub async fn reboot_virtual_server(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_REBOOT, vserver_pairs(vserverid))
            .await
    }

    /// Shut down the specified virtual server.
    pub async fn shutdown_virtual_server(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_SHUTDOWN, vserver_pairs(vserverid))
            .await
    }

    /// Suspend the specified virtual server.
    pub async fn suspend_virtual_server(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_SUSPEND, vserver_pairs(vserverid))
            .await
    }

    /// Unsuspend the specified virtual server.
    pub async fn unsuspend_virtual_server(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_UNSUSPEND, vserver_pairs(vserverid))
            .await
    }

    /// Terminate the specified virtual server, optionally deleting the
    /// owning client as well.
    pub async fn terminate_virtual_server(
        &self,
        vserverid: u32,
        delete_client: bool,
    ) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push_flag("deleteclient", delete_client);
        self.command(actions::VSERVER_TERMINATE, params.into_pairs())
            .await
    }

    /// Rebuild the specified virtual server from a template.
    pub async fn rebuild_virtual_server(&self, vserverid: u32, template: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("template", template);
        self.command(actions::VSERVER_REBUILD, params.into_pairs())
            .await
    }

    /// Check whether the specified virtual server exists.
    pub async fn virtual_server_exists(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_CHECK_EXISTS, vserver_pairs(vserverid))
            .await
    }

    /// Query the online/offline status of the specified virtual server.
    pub async fn virtual_server_status(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_STATUS, vserver_pairs(vserverid))
            .await
    }

    /// Fetch the information record of the specified virtual server.
    pub async fn virtual_server_info(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_INFO, vserver_pairs(vserverid))
            .await
    }

    /// Fetch the full state of the specified virtual server.
    ///
    /// `no_status` skips the status probe, `no_graphs` skips graph
    /// generation; both make the call cheaper on the master.
    pub async fn virtual_server_state(
        &self,
        vserverid: u32,
        no_status: bool,
        no_graphs: bool,
    ) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push_flag("nostatus", no_status);
        params.push_flag("nographs", no_graphs);
        self.command(actions::VSERVER_INFO_ALL, params.into_pairs())
            .await
    }

    /// Change the hostname of the specified virtual server.
    pub async fn change_hostname(&self, vserverid: u32, hostname: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("hostname", hostname);
        self.command(actions::VSERVER_HOSTNAME, params.into_pairs())
            .await
    }

    /// Change the root password of the specified virtual server.
    pub async fn change_root_password(&self, vserverid: u32, root_password: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("rootpassword", root_password);
        self.command(actions::VSERVER_ROOT_PASSWORD, params.into_pairs())
            .await
    }

    /// Change the VNC password of the specified virtual server.
    pub async fn change_vnc_password(&self, vserverid: u32, vnc_password: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("vncpassword", vnc_password);
        self.command(actions::VSERVER_VNC_PASSWORD, params.into_pairs())
            .await
    }

    /// Fetch VNC connection details for the specified virtual server.
    pub async fn vnc_info(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_VNC_INFO, vserver_pairs(vserverid))
            .await
    }

    /// Toggle PAE for the specified virtual server.
    pub async fn set_pae(&self, vserverid: u32, pae: PaeMode) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("pae", pae);
        self.command(actions::VSERVER_PAE, params.into_pairs()).await
    }

    /// Enable TUN/TAP on the specified virtual server.
    pub async fn enable_tun(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_TUN_ENABLE, vserver_pairs(vserverid))
            .await
    }

    /// Disable TUN/TAP on the specified virtual server.
    pub async fn disable_tun(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_TUN_DISABLE, vserver_pairs(vserverid))
            .await
    }

    /// Enable PXE network boot on the specified virtual server.
    pub async fn enable_pxe(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_PXE_ENABLE, vserver_pairs(vserverid))
            .await
    }

    /// Disable PXE network boot on the specified virtual server.
    pub async fn disable_pxe(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_PXE_DISABLE, vserver_pairs(vserverid))
            .await
    }

    /// Change the boot device order of the specified virtual server.
    pub async fn change_boot_order(&self, vserverid: u32, order: BootOrder) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("bootorder", order);
        self.command(actions::VSERVER_BOOT_ORDER, params.into_pairs())
            .await
    }

    /// Change the plan of the specified virtual server.
    pub async fn change_plan(&self, vserverid: u32, plan: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("plan", plan);
        self.command(actions::VSERVER_CHANGE_PLAN, params.into_pairs())
            .await
    }

    /// Change the owner of the specified virtual server.
    pub async fn change_owner(&self, vserverid: u32, clientid: u32) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("clientid", clientid);
        self.command(actions::VSERVER_CHANGE_OWNER, params.into_pairs())
            .await
    }

    /// Change the allocated memory of the specified virtual server (in MB).
    pub async fn change_memory(&self, vserverid: u32, memory: u32) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("memory", memory);
        self.command(actions::VSERVER_CHANGE_MEMORY, params.into_pairs())
            .await
    }

    /// Change the CPU core count of the specified virtual server.
    pub async fn change_cpu(&self, vserverid: u32, cpu: u32) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("cpu", cpu);
        self.command(actions::VSERVER_CHANGE_CPU, params.into_pairs())
            .await
    }

    /// Change the hard disk size of the specified virtual server (in GB).
    pub async fn change_hdd(&self, vserverid: u32, hdd: u32) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("hdd", hdd);
        self.command(actions::VSERVER_CHANGE_HDD, params.into_pairs())
            .await
    }

    /// Change the bandwidth limits of the specified virtual server (in GB).
    pub async fn change_bandwidth_limits(
        &self,
        vserverid: u32,
        limit: u32,
        overlimit: u32,
    ) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("limit", limit);
        params.push("overlimit", overlimit);
        self.command(actions::VSERVER_BANDWIDTH, params.into_pairs())
            .await
    }

    /// Query, enable, or disable serial console access.
    ///
    /// With both arguments `None` the master returns the current console
    /// session details. `time` is the session length in hours (1-8).
    pub async fn serial_console(
        &self,
        vserverid: u32,
        access: Option<ConsoleAccess>,
        time: Option<u8>,
    ) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push_opt("access", access);
        params.push_opt("time", time);
        self.command(actions::VSERVER_CONSOLE, params.into_pairs())
            .await
    }

    /// Mount an ISO image on the specified virtual server.
    pub async fn mount_iso(&self, vserverid: u32, iso: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("iso", iso);
        self.command(actions::VSERVER_MOUNT_ISO, params.into_pairs())
            .await
    }

    /// Unmount the currently mounted ISO image.
    pub async fn unmount_iso(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_UNMOUNT_ISO, vserver_pairs(vserverid))
            .await
    }

    /// Add an IP address to the specified virtual server.
    pub async fn add_ip_address(&self, vserverid: u32) -> Result<String> {
        self.command(actions::VSERVER_ADD_IP, vserver_pairs(vserverid))
            .await
    }

    /// Remove an IP address from the specified virtual server.
    pub async fn delete_ip_address(&self, vserverid: u32, ipaddr: &str) -> Result<String> {
        let mut params = QueryParams::new();
        params.push("vserverid", vserverid);
        params.push("ipaddr", ipaddr);
        self.command(actions::VSERVER_DELETE_IP, params.into_pairs())
            .await
    }
}

fn vserver_pairs(vserverid: u32) -> Vec<(&'static str, String)> {
    let mut params = QueryParams::new();
    params.push("vserverid", vserverid);
    params.into_pairs()
}
