//! Character detail overlay.

use leptos::prelude::*;
use rickdex_core::ResultRecord;

/// Labelled detail lines shown under the portrait, in display order.
pub fn detail_rows(record: &ResultRecord) -> [(&'static str, String); 5] {
    [
        ("Species", record.species.clone()),
        ("Status", record.status.clone()),
        ("Gender", record.gender.clone()),
        ("Location", record.location_name.clone()),
        ("Origin", record.origin_name.clone()),
    ]
}

/// What asked the overlay to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The close button inside the card.
    Button,
    /// A click on the backdrop around the card.
    Backdrop,
    /// The Escape key.
    Escape,
}

impl CloseTrigger {
    /// The trigger for a key press, if that key closes the overlay.
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Self::Escape)
    }

    /// Run `on_close` once for this activation.
    pub fn fire(self, on_close: Callback<()>) {
        log::debug!("closing details: {self:?}");
        on_close.run(());
    }
}

/// Modal overlay with one character's details.
///
/// Closes through the close button, a click on the backdrop or Escape.
/// Clicks inside the card are kept from reaching the backdrop.
#[component]
pub fn DetailOverlay(
    /// The character to show.
    record: ResultRecord,
    /// Called once per close activation.
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let overlay_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the overlay so Escape reaches it
    Effect::new(move |_| {
        if let Some(overlay) = overlay_ref.get() {
            let _ = overlay.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if let Some(trigger) = CloseTrigger::from_key(&ev.key()) {
            trigger.fire(on_close);
        }
    };

    let on_overlay_click = move |_| {
        CloseTrigger::Backdrop.fire(on_close);
    };

    let on_content_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
    };

    let rows = detail_rows(&record)
        .into_iter()
        .map(|(label, value)| {
            view! {
              <p class="rickdex-detail-row">
                <span class="rickdex-detail-label">{label} ": "</span>
                <span class="rickdex-detail-value">{value}</span>
              </p>
            }
        })
        .collect_view();

    view! {
      <div
        node_ref=overlay_ref
        class="rickdex-overlay"
        role="dialog"
        aria-modal="true"
        aria-label=record.name.clone()
        tabindex="-1"
        on:click=on_overlay_click
        on:keydown=on_keydown
      >
        <div class="rickdex-overlay-card" on:click=on_content_click>
          <button
            class="rickdex-overlay-close"
            on:click=move |_| CloseTrigger::Button.fire(on_close)
            aria-label="Close details"
          >
            "x"
          </button>
          <h2 class="rickdex-overlay-name">{record.name.clone()}</h2>
          <img class="rickdex-overlay-image" src=record.image.clone() alt=record.name.clone() />
          <div class="rickdex-overlay-details">{rows}</div>
        </div>
      </div>
    }
}
