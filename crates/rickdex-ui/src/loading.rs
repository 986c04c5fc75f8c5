use leptos::prelude::*;

/// Spinner shown while a fetch is in flight.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
      <div class="rickdex-loading" role="status">
        <span class="rickdex-spinner" aria-hidden="true"></span>
        <span class="sr-only">"Loading..."</span>
      </div>
    }
}
