//! Rickdex Core Library
//!
//! Browse state for the Rickdex character browser: filters, page cursor,
//! request derivation and the render branch selection. Nothing in here
//! touches the network or the DOM.
//!
//! # Example
//!
//! ```
//! use rickdex_core::{BrowseState, FilterChange, Msg, Species};
//!
//! let state = BrowseState::new()
//!     .dispatch(Msg::EditSearchText("rick".to_string()))
//!     .dispatch(Msg::CommitSearch)
//!     .dispatch(Msg::SetFilter(FilterChange::Species(Species::Human)));
//!
//! let request = state.request();
//! assert_eq!(request.page, 1);
//! assert_eq!(request.name_query, "rick");
//! assert_eq!(request.species, "Human");
//! assert_eq!(request.status, "");
//! ```

pub mod error;
pub mod filter;
pub mod record;
pub mod request;
pub mod state;

pub use error::{CoreError, Result};
pub use filter::{
    FilterChange, FilterDimension, FilterOption, FilterSelection, Gender, LifeStatus, Species,
};
pub use record::{CharacterPage, ResultRecord};
pub use request::{PageCursor, RequestDescriptor};
pub use state::{BrowseState, Msg, RenderState};
