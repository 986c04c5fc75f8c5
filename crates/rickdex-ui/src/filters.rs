//! Filter selects and the reset button.

use leptos::prelude::*;
use rickdex_core::{
    FilterChange, FilterDimension, FilterOption, FilterSelection, Gender, LifeStatus, Species,
};

/// `(value, label)` pairs for a select element, `All` first.
pub fn option_list<T: FilterOption>() -> Vec<(&'static str, &'static str)> {
    T::options()
        .iter()
        .map(|option| (option.query_value(), option.label()))
        .collect()
}

/// Turn a select's new value into a change, logging values no option has.
fn select_change(dimension: FilterDimension, value: &str) -> Option<FilterChange> {
    match FilterChange::parse(dimension, value) {
        Ok(change) => Some(change),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}

/// The three categorical filters plus "Reset filters".
#[component]
pub fn FilterBar(
    /// Current selection.
    #[prop(into)]
    filters: Signal<FilterSelection>,
    /// Called with the change of a single dimension.
    #[prop(into)]
    on_change: Callback<FilterChange>,
    /// Called when "Reset filters" is pressed.
    #[prop(into)]
    on_reset: Callback<()>,
) -> impl IntoView {
    let species = Signal::derive(move || filters.with(|f| f.species.query_value()));
    let status = Signal::derive(move || filters.with(|f| f.status.query_value()));
    let gender = Signal::derive(move || filters.with(|f| f.gender.query_value()));

    let species_options = option_list::<Species>();
    let status_options = option_list::<LifeStatus>();
    let gender_options = option_list::<Gender>();

    view! {
      <div class="rickdex-filters">
        <FilterSelect
          label="Filter by species:"
          name="filter_species"
          dimension=FilterDimension::Species
          options=species_options
          selected=species
          on_change=on_change
        />
        <FilterSelect
          label="Filter by status:"
          name="filter_status"
          dimension=FilterDimension::Status
          options=status_options
          selected=status
          on_change=on_change
        />
        <FilterSelect
          label="Filter by gender:"
          name="filter_gender"
          dimension=FilterDimension::Gender
          options=gender_options
          selected=gender
          on_change=on_change
        />
        <button class="rickdex-reset" on:click=move |_| on_reset.run(())>
          "Reset filters"
        </button>
      </div>
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    name: &'static str,
    dimension: FilterDimension,
    options: Vec<(&'static str, &'static str)>,
    selected: Signal<&'static str>,
    on_change: Callback<FilterChange>,
) -> impl IntoView {
    let on_select = move |ev: web_sys::Event| {
        if let Some(change) = select_change(dimension, &event_target_value(&ev)) {
            on_change.run(change);
        }
    };

    let options = options
        .into_iter()
        .map(|(value, text)| {
            view! {
              <option value=value prop:selected=move || selected.get() == value>
                {text}
              </option>
            }
        })
        .collect_view();

    view! {
      <label class="rickdex-filter">
        <span class="rickdex-filter-label">{label}</span>
        <select class="rickdex-filter-select" name=name on:change=on_select>
          {options}
        </select>
      </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_list_starts_with_all() {
        let options = option_list::<Species>();
        assert_eq!(options[0], ("", "All"));
        assert_eq!(options.len(), 9);
        assert!(options.contains(&("Mythological Creature", "Mythological Creature")));
        assert!(options.contains(&("unknown", "Unknown")));
    }

    #[test]
    fn test_option_values_parse_back() {
        for (value, _) in option_list::<Gender>() {
            assert!(FilterChange::parse(FilterDimension::Gender, value).is_ok());
        }
        for (value, _) in option_list::<LifeStatus>() {
            assert!(FilterChange::parse(FilterDimension::Status, value).is_ok());
        }
    }

    #[test]
    fn test_select_change_maps_values_to_dimension() {
        assert_eq!(
            select_change(FilterDimension::Status, "Dead"),
            Some(FilterChange::Status(LifeStatus::Dead))
        );
        assert_eq!(
            select_change(FilterDimension::Species, ""),
            Some(FilterChange::Species(Species::All))
        );
        assert_eq!(
            select_change(FilterDimension::Gender, "unknown"),
            Some(FilterChange::Gender(Gender::Unknown))
        );
    }

    #[test]
    fn test_select_change_ignores_unknown_values() {
        assert_eq!(select_change(FilterDimension::Gender, "Robot"), None);
        assert_eq!(select_change(FilterDimension::Species, "Ghost"), None);
    }
}
