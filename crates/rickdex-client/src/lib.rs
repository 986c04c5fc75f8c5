//! Rickdex GraphQL Client
//!
//! Executes the characters query against the Rick and Morty GraphQL API
//! and normalizes the response into [`rickdex_core::CharacterPage`].
//!
//! # Example
//!
//! ```no_run
//! use rickdex_client::{CharacterClient, ClientConfig};
//! use rickdex_core::BrowseState;
//!
//! # async fn run() -> rickdex_client::Result<()> {
//! let client = CharacterClient::new(&ClientConfig::default());
//! let page = client.execute(&BrowseState::new().request()).await?;
//! println!("{} pages", page.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use client::CharacterClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{ClientError, Result};
pub use query::{CHARACTERS_QUERY, GraphQlRequest, decode_response};
