//! Locale reducer behaviour, driven by host-shaped action objects.

use cms_i18n_locales::{Action, Locale, LocaleState, has_single_default, reduce};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn state_from(value: Value) -> LocaleState {
    serde_json::from_value(value).unwrap()
}

fn dispatch(state: LocaleState, action: Value) -> Value {
    let action = Action::from_value(action).unwrap();
    serde_json::to_value(reduce(state, &action)).unwrap()
}

fn initial_with(locales: Value) -> LocaleState {
    state_from(json!({ "isLoading": true, "locales": locales, "preferredLocale": null }))
}

#[test]
fn test_unknown_action_returns_initial_state() {
    let actual = dispatch(LocaleState::initial(), json!({ "type": "UNKNWON_ACTION" }));
    assert_eq!(
        actual,
        json!({ "isLoading": true, "locales": [], "preferredLocale": null })
    );
}

#[test]
fn test_resolve_locales() {
    let actual = dispatch(
        LocaleState::initial(),
        json!({
            "type": "RESOLVE_LOCALES",
            "locales": [{ "id": 1, "displayName": "French", "isDefault": false }]
        }),
    );

    assert_eq!(
        actual,
        json!({
            "isLoading": false,
            "locales": [{ "id": 1, "displayName": "French", "isDefault": false }],
            "preferredLocale": null
        })
    );
}

#[test]
fn test_add_locale() {
    let actual = dispatch(
        LocaleState::initial(),
        json!({
            "type": "ADD_LOCALE",
            "newLocale": { "id": 1, "displayName": "French", "isDefault": false }
        }),
    );

    assert_eq!(
        actual,
        json!({
            "isLoading": true,
            "locales": [{ "id": 1, "displayName": "French", "isDefault": false }],
            "preferredLocale": null
        })
    );
}

#[test]
fn test_add_default_locale_flips_previous_default() {
    let state = initial_with(json!([{ "id": 2, "displayName": "English", "isDefault": true }]));

    let actual = dispatch(
        state,
        json!({
            "type": "ADD_LOCALE",
            "newLocale": { "id": 1, "displayName": "French", "isDefault": true }
        }),
    );

    assert_eq!(
        actual,
        json!({
            "isLoading": true,
            "locales": [
                { "id": 2, "displayName": "English", "isDefault": false },
                { "id": 1, "displayName": "French", "isDefault": true }
            ],
            "preferredLocale": null
        })
    );
}

#[test]
fn test_delete_locale() {
    let state = initial_with(json!([
        { "id": 1, "displayName": "French", "isDefault": true },
        { "id": 2, "displayName": "English", "isDefault": false }
    ]));

    let actual = dispatch(state, json!({ "type": "DELETE_LOCALE", "id": 2 }));

    assert_eq!(
        actual,
        json!({
            "isLoading": true,
            "locales": [{ "id": 1, "displayName": "French", "isDefault": true }],
            "preferredLocale": null
        })
    );
}

#[test]
fn test_delete_unknown_id_keeps_contents_and_order() {
    let locales = vec![
        Locale::new(1, "French").default_locale(),
        Locale::new(2, "English"),
        Locale::new(3, "German"),
    ];
    let state = LocaleState {
        is_loading: false,
        ..LocaleState::with_locales(locales.clone())
    };

    let next = reduce(state, &Action::delete(7));

    assert_eq!(next.locales, locales);
}

#[test]
fn test_update_locale() {
    let state = initial_with(json!([
        { "id": 2, "displayName": "English", "isDefault": true },
        { "id": 1, "displayName": "French", "isDefault": false }
    ]));

    let actual = dispatch(
        state,
        json!({
            "type": "UPDATE_LOCALE",
            "editedLocale": { "id": 1, "displayName": "Frenchie", "isDefault": false }
        }),
    );

    assert_eq!(
        actual,
        json!({
            "isLoading": true,
            "locales": [
                { "id": 2, "displayName": "English", "isDefault": true },
                { "id": 1, "displayName": "Frenchie", "isDefault": false }
            ],
            "preferredLocale": null
        })
    );
}

#[test]
fn test_update_locale_to_default() {
    let state = initial_with(json!([
        { "id": 2, "displayName": "English", "isDefault": true },
        { "id": 1, "displayName": "French", "isDefault": false }
    ]));

    let actual = dispatch(
        state,
        json!({
            "type": "UPDATE_LOCALE",
            "editedLocale": { "id": 1, "displayName": "Frenchie", "isDefault": true }
        }),
    );

    assert_eq!(
        actual,
        json!({
            "isLoading": true,
            "locales": [
                { "id": 2, "displayName": "English", "isDefault": false },
                { "id": 1, "displayName": "Frenchie", "isDefault": true }
            ],
            "preferredLocale": null
        })
    );
}

#[test]
fn test_set_preferred_locale() {
    let state = initial_with(json!([
        { "id": 2, "displayName": "English", "isDefault": true, "code": "en" },
        { "id": 3, "displayName": "French", "isDefault": false, "code": "fr" }
    ]));

    let actual = dispatch(
        state,
        json!({ "type": "SET_PREFERRED_LOCALE", "preferredLocale": { "code": "fr" } }),
    );

    assert_eq!(
        actual,
        json!({
            "isLoading": true,
            "locales": [
                { "id": 2, "displayName": "English", "isDefault": true, "code": "en" },
                { "id": 3, "displayName": "French", "isDefault": false, "code": "fr" }
            ],
            "preferredLocale": { "code": "fr" }
        })
    );
}

#[test]
fn test_clear_preferred_locale() {
    let state = state_from(json!({
        "isLoading": true,
        "locales": [
            { "id": 2, "displayName": "English", "isDefault": true, "code": "en" },
            { "id": 3, "displayName": "French", "isDefault": false, "code": "fr" }
        ],
        "preferredLocale": { "code": "fr" }
    }));

    let actual = dispatch(
        state,
        json!({ "type": "SET_PREFERRED_LOCALE", "preferredLocale": null }),
    );

    assert_eq!(actual["preferredLocale"], Value::Null);
    assert_eq!(actual["locales"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_single_default_holds_across_default_mutations() {
    let mut state = LocaleState::with_locales(vec![
        Locale::new(1, "English").default_locale(),
        Locale::new(2, "French"),
        Locale::new(3, "German"),
    ]);

    let actions = [
        Action::add(Locale::new(4, "Italian").default_locale()),
        Action::update(Locale::new(2, "French").default_locale()),
        Action::add(Locale::new(5, "Spanish")),
        Action::update(Locale::new(3, "Deutsch").default_locale()),
    ];

    for action in &actions {
        state = reduce(state, action);
        assert!(has_single_default(&state.locales));
        assert_eq!(state.locales.iter().filter(|l| l.is_default).count(), 1);
    }

    let ids: Vec<i64> = state.locales.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(state.default_locale().map(|l| l.id), Some(3));
}
