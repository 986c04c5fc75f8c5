use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use rickdex_client::{CharacterClient, ClientConfig};
use rickdex_ui::BrowsePage;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One client, and so one response cache, for the whole app
    provide_context(CharacterClient::new(&ClientConfig::from_build_env()));

    view! {
      <Title text="Rick & Morty" />

      <Router>
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=BrowsePage />
          </Routes>
        </main>
      </Router>
    }
}
