//! Rickdex UI Components
//!
//! Leptos components for the Rickdex character browser.
//!
//! # Components
//!
//! - [`BrowsePage`] - Owns the browse state and composes everything below
//! - [`SearchControl`] - Name search input with explicit submit
//! - [`FilterBar`] - Species, status and gender selects plus reset
//! - [`Pagination`] - Prev/Next buttons and page label
//! - [`CharacterGrid`] - Clickable character cards
//! - [`DetailOverlay`] - Modal with one character's details
//! - [`LoadingIndicator`] - Spinner shown while fetching
//!
//! [`BrowsePage`] expects a [`rickdex_client::CharacterClient`] in context.
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use rickdex_client::{CharacterClient, ClientConfig};
//! use rickdex_ui::BrowsePage;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     provide_context(CharacterClient::new(&ClientConfig::default()));
//!
//!     view! { <BrowsePage /> }
//! }
//! ```

pub mod browse;
pub mod filters;
pub mod grid;
pub mod loading;
pub mod overlay;
pub mod pagination;
pub mod search;

pub use browse::BrowsePage;
pub use filters::{FilterBar, option_list};
pub use grid::CharacterGrid;
pub use loading::LoadingIndicator;
pub use overlay::{CloseTrigger, DetailOverlay, detail_rows};
pub use pagination::Pagination;
pub use search::{SearchControl, SearchInput};

#[cfg(test)]
mod test_support {
    use std::sync::{Arc, Mutex};

    use leptos::prelude::Callback;

    /// A callback that records every argument it is run with.
    pub(crate) fn recording<T: Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let callback = Callback::new(move |value: T| sink.lock().unwrap().push(value));
        (callback, calls)
    }
}
