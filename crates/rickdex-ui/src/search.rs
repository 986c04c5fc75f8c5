//! Search control: a text input and a submit button.

use leptos::prelude::*;

/// One user action on the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// The input now holds this text.
    Edited(String),
    /// The form was submitted by the button or Enter.
    Submitted,
}

impl SearchInput {
    /// Forward the action to the matching callback, exactly once.
    pub fn dispatch(self, on_change: Callback<String>, on_submit: Callback<()>) {
        match self {
            Self::Edited(text) => on_change.run(text),
            Self::Submitted => on_submit.run(()),
        }
    }
}

/// Search input with an explicit submit.
///
/// Every keystroke reports the new text through `on_change`; nothing is
/// fetched until the form is submitted (button or Enter).
#[component]
pub fn SearchControl(
    /// Current pending text.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the full input text on every edit.
    #[prop(into)]
    on_change: Callback<String>,
    /// Called once per submission.
    #[prop(into)]
    on_submit: Callback<()>,
    /// Placeholder text for the input.
    #[prop(default = "Search by name".to_string())]
    placeholder: String,
) -> impl IntoView {
    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        SearchInput::Submitted.dispatch(on_change, on_submit);
    };

    view! {
      <form class="rickdex-search" role="search" on:submit=on_form_submit>
        <input
          type="text"
          class="rickdex-search-input"
          placeholder=placeholder
          prop:value=move || value.get()
          on:input=move |ev| {
            SearchInput::Edited(event_target_value(&ev)).dispatch(on_change, on_submit);
          }
        />
        <button type="submit" class="rickdex-search-button" aria-label="Search">
          <svg
            class="rickdex-search-icon"
            xmlns="http://www.w3.org/2000/svg"
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
          >
            <circle cx="11" cy="11" r="7"></circle>
            <line x1="16.5" y1="16.5" x2="21" y2="21"></line>
          </svg>
        </button>
      </form>
    }
}
