//! SolusVM admin API client.
//!
//! Provides an asynchronous client for the SolusVM master's admin command
//! endpoint. Every remote action is a single HTTP GET against
//! `https://<host>:5656/api/admin/command.php`; the master reports success
//! or failure inside the JSON body it returns. This crate assembles the
//! query string, attaches the authentication fields, and hands back the raw
//! response text — it never parses or interprets the body.
//!
//! # Example
//!
//! ```no_run
//! use solusvm_admin::AdminClient;
//!
//! # async fn example() -> solusvm_admin::Result<()> {
//! let client = AdminClient::new("solusvm.example.com", "id-hash", "key-hash")?;
//! let body = client.boot_virtual_server(42).await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod catalog;
pub mod client;
pub mod models;

mod clients;
mod node;
mod reseller;
mod vserver;

pub use client::{AdminClient, AdminClientBuilder};
pub use models::{
    BootOrder, ConsoleAccess, CreateClientRequest, CreateResellerRequest,
    CreateVirtualServerRequest, EditClientRequest, PaeMode, ResellerResources,
    VirtualizationType,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = solusvm_core::Result<T>;
