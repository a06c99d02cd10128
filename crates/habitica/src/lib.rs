//! Minimal Habitica v3 API client.
//!
//! Covers the three endpoints a task import needs:
//!
//! - `GET /tags` lists the account's existing tags
//! - `POST /tags` creates a tag and returns its server-assigned id
//! - `POST /tasks/user` creates a task (habit, daily, todo or reward)
//!
//! # Usage
//!
//! ```no_run
//! use habitica::{ClientConfig, Credentials, HabiticaClient, TaskService};
//!
//! # async fn demo() -> Result<(), habitica::HabiticaError> {
//! let credentials = Credentials::new("user-id", "api-token")?;
//! let client = HabiticaClient::new(ClientConfig::new(credentials))?;
//!
//! for tag in client.list_tags().await? {
//!     println!("{}: {}", tag.name, tag.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`TaskService`] is the seam callers program against
//! - [`HabiticaClient`] implements it over HTTP with `reqwest`
//! - [`HabiticaError::Rejected`] carries non-success responses so callers can
//!   recover per item, while [`HabiticaError::Http`] signals transport failure

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use client::HabiticaClient;
pub use config::{ClientConfig, Credentials, DEFAULT_API_BASE, DEFAULT_CLIENT_ID};
pub use error::HabiticaError;
pub use models::{NewTask, Tag, TagId, TagName};
pub use reqwest::StatusCode;
pub use service::TaskService;
