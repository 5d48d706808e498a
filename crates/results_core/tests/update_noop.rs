use results_core::{update, Msg, ViewParams, ViewState};

#[test]
fn update_is_noop() {
    let state = ViewState::new(ViewParams {
        query: "rust".to_string(),
        page: 1,
        ..ViewParams::default()
    });
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
