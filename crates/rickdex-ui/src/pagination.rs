use leptos::prelude::*;

/// Prev/Next buttons around the page label.
///
/// The label is omitted while no data exists for the current request.
#[component]
pub fn Pagination(
    /// "Page: n / total", when known.
    #[prop(into)]
    label: Signal<Option<String>>,
    #[prop(into)]
    can_prev: Signal<bool>,
    #[prop(into)]
    can_next: Signal<bool>,
    #[prop(into)]
    on_prev: Callback<()>,
    #[prop(into)]
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
      <nav class="rickdex-pagination" aria-label="Pagination">
        <button
          class="rickdex-page-button"
          prop:disabled=move || !can_prev.get()
          on:click=move |_| on_prev.run(())
        >
          "Prev"
        </button>
        {move || label.get().map(|text| view! { <p class="rickdex-page-label">{text}</p> })}
        <button
          class="rickdex-page-button"
          prop:disabled=move || !can_next.get()
          on:click=move |_| on_next.run(())
        >
          "Next"
        </button>
      </nav>
    }
}
