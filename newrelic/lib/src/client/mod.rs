//! New Relic API client.
//!
//! [`Client`] resolves paths against the API base URL, sends requests through
//! an [`AuthTransport`](crate::transport::AuthTransport) and decodes JSON
//! bodies into [`ApiResponse`] values.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use newrelic_lib::Client;
//!
//! #[derive(serde::Deserialize)]
//! struct Applications { applications: Vec<serde_json::Value> }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://api.newrelic.com/", "my-api-key")?;
//!
//! let request = client.new_request("GET", "v2/applications.json")?;
//! let response = client.execute::<Applications>(request).await?;
//!
//! println!("status: {}", response.status());
//! let apps = response.into_result()?;
//! println!("{} applications", apps.applications.len());
//! # Ok(())
//! # }
//! ```

mod executor;
mod response;

pub use executor::Client;
pub use response::ApiResponse;
