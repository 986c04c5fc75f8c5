//! The browse page: owns the [`BrowseState`] and wires it to the views.
//!
//! Every user event becomes a [`Msg`]. Whenever the derived request
//! changes, a fetch is issued through the [`CharacterClient`] found in
//! context; its answer comes back as another message, and the state drops
//! it if a newer request has taken over in the meantime.

use leptos::{prelude::*, task::spawn_local};
use rickdex_client::CharacterClient;
use rickdex_core::{BrowseState, CoreError, FilterChange, Msg, RenderState, ResultRecord};

use crate::{
    filters::FilterBar, grid::CharacterGrid, loading::LoadingIndicator, overlay::DetailOverlay,
    pagination::Pagination, search::SearchControl,
};

/// Character browser page.
#[component]
pub fn BrowsePage() -> impl IntoView {
    let client = expect_context::<CharacterClient>();
    let state = RwSignal::new(BrowseState::new());
    let dispatch = move |msg: Msg| state.update(|s| *s = std::mem::take(s).dispatch(msg));

    let request = Memo::new(move |_| state.with(BrowseState::request));

    // Issue a fetch for every new request, including the first one
    Effect::new(move |_| {
        let request = request.get();
        if !state.with_untracked(BrowseState::needs_fetch) {
            return;
        }

        dispatch(Msg::FetchStarted(request.clone()));

        let client = client.clone();
        spawn_local(async move {
            let outcome = client.execute(&request).await.map_err(CoreError::from);
            dispatch(Msg::FetchResolved { request, outcome });
        });
    });

    let render = Memo::new(move |_| state.with(BrowseState::render));
    let overlay = Memo::new(move |_| state.with(|s| s.overlay().cloned()));

    let pending_text = Signal::derive(move || state.with(|s| s.pending_text().to_string()));
    let filters = Signal::derive(move || state.with(|s| s.filters().clone()));
    let shows_pagination = Signal::derive(move || state.with(BrowseState::shows_pagination));
    let page_label = Signal::derive(move || state.with(BrowseState::page_label));
    let can_prev = Signal::derive(move || state.with(BrowseState::can_page_prev));
    let can_next = Signal::derive(move || state.with(BrowseState::can_page_next));

    let on_edit = Callback::new(move |text: String| dispatch(Msg::EditSearchText(text)));
    let on_commit = Callback::new(move |_: ()| dispatch(Msg::CommitSearch));
    let on_filter = Callback::new(move |change: FilterChange| dispatch(Msg::SetFilter(change)));
    let on_reset = Callback::new(move |_: ()| dispatch(Msg::ResetFilters));
    let on_prev = Callback::new(move |_: ()| dispatch(Msg::PagePrev));
    let on_next = Callback::new(move |_: ()| dispatch(Msg::PageNext));
    let on_select = Callback::new(move |record: ResultRecord| dispatch(Msg::Select(record)));
    let on_dismiss = Callback::new(move |_: ()| dispatch(Msg::Dismiss));

    let pager = move || {
        view! {
          <Show when=move || shows_pagination.get()>
            <Pagination
              label=page_label
              can_prev=can_prev
              can_next=can_next
              on_prev=on_prev
              on_next=on_next
            />
          </Show>
        }
    };

    let body = move || match render.get() {
        RenderState::Error(message) => {
            view! { <pre class="rickdex-error">{message}</pre> }.into_any()
        }
        RenderState::Loading => view! { <LoadingIndicator /> }.into_any(),
        RenderState::Populated(page) => {
            view! {
              <CharacterGrid records=page.results on_select=on_select />
            }
            .into_any()
        }
    };

    view! {
      <div class="rickdex-browse">
        <h1 class="rickdex-title">"Rick & Morty"</h1>
        <SearchControl value=pending_text on_change=on_edit on_submit=on_commit />
        <FilterBar filters=filters on_change=on_filter on_reset=on_reset />
        {pager()}
        <section class="rickdex-results">{body}</section>
        {pager()}
        {move || {
          overlay.get().map(|record| view! { <DetailOverlay record=record on_close=on_dismiss /> })
        }}
      </div>
    }
}
