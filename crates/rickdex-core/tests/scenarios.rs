//! End-to-end browse scenarios driven purely through messages.

use rickdex_core::{
    BrowseState, CharacterPage, CoreError, FilterChange, Msg, RenderState, RequestDescriptor,
    ResultRecord, Species,
};

fn character(id: u32) -> ResultRecord {
    ResultRecord {
        id: id.to_string(),
        name: format!("Character {id}"),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        species: "Human".to_string(),
        status: "Alive".to_string(),
        gender: "Female".to_string(),
        origin_name: "Earth (Replacement Dimension)".to_string(),
        location_name: "Earth (Replacement Dimension)".to_string(),
    }
}

/// Issue and answer the current request, as the page does on every change.
fn settle(state: BrowseState, total_pages: u32) -> BrowseState {
    let request = state.request();
    state
        .dispatch(Msg::FetchStarted(request.clone()))
        .dispatch(Msg::FetchResolved {
            request,
            outcome: Ok(CharacterPage::new(total_pages, vec![character(1), character(2)])),
        })
}

#[test]
fn initial_state_requests_first_unfiltered_page() {
    let state = BrowseState::new();

    assert_eq!(
        state.request(),
        RequestDescriptor {
            page: 1,
            name_query: String::new(),
            species: String::new(),
            status: String::new(),
            gender: String::new(),
        }
    );
    assert_eq!(state.render(), RenderState::Loading);
}

#[test]
fn search_then_species_filter() {
    let state = settle(BrowseState::new(), 42).page_next();
    let state = settle(state, 42);
    assert_eq!(state.page().get(), 2);

    let state = state
        .dispatch(Msg::EditSearchText("rick".to_string()))
        .dispatch(Msg::CommitSearch)
        .dispatch(Msg::SetFilter(FilterChange::Species(Species::Human)));

    assert_eq!(
        state.request(),
        RequestDescriptor {
            page: 1,
            name_query: "rick".to_string(),
            species: "Human".to_string(),
            status: String::new(),
            gender: String::new(),
        }
    );
}

#[test]
fn paging_forward_stops_at_last_page() {
    let mut state = settle(BrowseState::new(), 5);
    while state.page().get() < 3 {
        state = settle(state.dispatch(Msg::PageNext), 5);
    }
    assert_eq!(state.page().get(), 3);

    let mut pages = Vec::new();
    for _ in 0..3 {
        state = settle(state.dispatch(Msg::PageNext), 5);
        pages.push(state.page().get());
    }

    assert_eq!(pages, vec![4, 5, 5]);
}

#[test]
fn fetch_error_is_rendered_verbatim() {
    let state = BrowseState::new();
    let request = state.request();
    let state = state
        .dispatch(Msg::FetchStarted(request.clone()))
        .dispatch(Msg::FetchResolved {
            request,
            outcome: Err(CoreError::fetch_failed("Network error")),
        });

    assert_eq!(state.render(), RenderState::Error("Network error".to_string()));
    assert!(!state.shows_pagination());
    assert_eq!(state.page_label(), None);
}

#[test]
fn out_of_order_responses_keep_latest_request() {
    let state = settle(BrowseState::new(), 3);

    let first = state.clone().dispatch(Msg::PageNext);
    let first_request = first.request();
    let state = first.dispatch(Msg::FetchStarted(first_request.clone()));

    let state = state.dispatch(Msg::SetFilter(FilterChange::Species(Species::Alien)));
    let second_request = state.request();
    let state = state.dispatch(Msg::FetchStarted(second_request.clone()));

    // the newer request answers first
    let state = state.dispatch(Msg::FetchResolved {
        request: second_request,
        outcome: Ok(CharacterPage::new(1, vec![character(9)])),
    });
    let state = state.dispatch(Msg::FetchResolved {
        request: first_request,
        outcome: Ok(CharacterPage::new(3, vec![character(3)])),
    });

    match state.render() {
        RenderState::Populated(page) => {
            assert_eq!(page.total_pages, 1);
            assert_eq!(page.results[0].id, "9");
        }
        other => panic!("expected populated page, got {other:?}"),
    }
    assert_eq!(state.total_pages(), Some(1));
}

#[test]
fn switching_a_filter_back_after_a_dropped_answer_fetches_again() {
    let state = settle(BrowseState::new(), 3);
    let unfiltered = state.request();

    let state = state.dispatch(Msg::SetFilter(FilterChange::Species(Species::Robot)));
    let robots = state.request();
    let state = state
        .dispatch(Msg::FetchStarted(robots.clone()))
        .dispatch(Msg::SetFilter(FilterChange::Species(Species::All)));
    assert_eq!(state.request(), unfiltered);
    assert!(!state.needs_fetch());

    // the robot answer lands after the user already moved away
    let state = state.dispatch(Msg::FetchResolved {
        request: robots.clone(),
        outcome: Ok(CharacterPage::new(1, vec![character(7)])),
    });
    assert!(matches!(state.render(), RenderState::Populated(_)));

    let state = state.dispatch(Msg::SetFilter(FilterChange::Species(Species::Robot)));
    assert_eq!(state.request(), robots);
    assert!(state.needs_fetch());

    let state = settle(state, 1);
    assert_eq!(state.total_pages(), Some(1));
    assert!(matches!(state.render(), RenderState::Populated(_)));
}
