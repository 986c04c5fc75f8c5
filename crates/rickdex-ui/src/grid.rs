//! Character grid.

use leptos::prelude::*;
use rickdex_core::ResultRecord;

/// Grid of character cards. An empty page renders a note, not an error.
#[component]
pub fn CharacterGrid(
    /// Records of the current page.
    records: Vec<ResultRecord>,
    /// Called with the activated record.
    #[prop(into)]
    on_select: Callback<ResultRecord>,
) -> impl IntoView {
    if records.is_empty() {
        return view! { <p class="rickdex-empty">"No characters found"</p> }.into_any();
    }

    view! {
      <ul class="rickdex-grid">
        {records
          .into_iter()
          .map(|record| view! { <CharacterCard record=record on_select=on_select /> })
          .collect_view()}
      </ul>
    }
    .into_any()
}

#[component]
fn CharacterCard(record: ResultRecord, on_select: Callback<ResultRecord>) -> impl IntoView {
    let name = record.name.clone();
    let image = record.image.clone();
    let on_click = move |_| on_select.run(record.clone());

    view! {
      <li class="rickdex-card" role="button" on:click=on_click>
        <h3 class="rickdex-card-name">{name.clone()}</h3>
        <img class="rickdex-card-image" src=image alt=name loading="lazy" />
      </li>
    }
}
