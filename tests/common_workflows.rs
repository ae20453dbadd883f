//! Integration tests for common cms-i18n workflows.
//!
//! The host keeps a locale store for the session and feeds its snapshot to
//! the link localizer whenever the content-manager navigation is rebuilt.

use cms_i18n::has_single_default;
use cms_i18n::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// =============================================================================
// Fixtures
// =============================================================================

const ARTICLE: &str = "api::article.article";
const HOMEPAGE: &str = "api::homepage.homepage";
const TAG: &str = "api::tag.tag";

fn schemas() -> Vec<ContentTypeSchema> {
    vec![
        ContentTypeSchema::with_localized(ARTICLE, true),
        ContentTypeSchema::with_localized(HOMEPAGE, true),
        ContentTypeSchema::new(TAG),
    ]
}

fn permissions() -> PermissionMap {
    serde_json::from_value(json!({
        "api::article.article": {
            "plugin::content-manager.explorer.read": [
                { "action": "plugin::content-manager.explorer.read", "properties": { "locales": ["en", "fr"] } }
            ],
            "plugin::content-manager.explorer.create": [
                { "action": "plugin::content-manager.explorer.create", "properties": { "locales": ["de"] } }
            ]
        },
        "api::homepage.homepage": {
            "plugin::content-manager.explorer.read": [
                { "action": "plugin::content-manager.explorer.read", "properties": { "locales": ["de"] } }
            ]
        }
    }))
    .unwrap()
}

fn resolved_store() -> LocaleStore {
    let mut store = LocaleStore::new();
    store.dispatch(Action::resolve(vec![
        Locale::new(1, "English").with_code("en").default_locale(),
        Locale::new(2, "French").with_code("fr"),
    ]));
    store
}

// =============================================================================
// Locale Store Workflows
// =============================================================================

#[test]
fn test_resolve_then_add_default_then_refetch() {
    let mut store = resolved_store();
    assert!(!store.state().is_loading);

    store.dispatch(Action::add(
        Locale::new(3, "German").with_code("de").default_locale(),
    ));
    assert!(store.state().is_loading);
    assert_eq!(store.state().default_locale().map(|l| l.id), Some(3));
    assert!(has_single_default(&store.state().locales));

    // The host refetches and resolves again
    let fetched = store.state().locales.clone();
    store.dispatch(Action::resolve(fetched));
    assert!(!store.state().is_loading);
    assert_eq!(store.version(), 3);
}

#[test]
fn test_host_action_objects_round_trip_through_store() {
    let mut store = resolved_store();

    store
        .dispatch_json(r#"{ "type": "SET_PREFERRED_LOCALE", "preferredLocale": { "code": "fr" } }"#)
        .unwrap();
    store
        .dispatch_json(r#"{ "type": "DELETE_LOCALE", "id": 1 }"#)
        .unwrap();
    store.dispatch_json(r#"{ "type": "@@INIT" }"#).unwrap();

    let snapshot = serde_json::to_value(store.state()).unwrap();
    assert_eq!(
        snapshot,
        json!({
            "isLoading": true,
            "locales": [{ "id": 2, "displayName": "French", "isDefault": false, "code": "fr" }],
            "preferredLocale": { "code": "fr" }
        })
    );
}

// =============================================================================
// Store + Localizer Workflows
// =============================================================================

#[test]
fn test_collection_type_links_follow_preferred_locale() {
    let mut store = resolved_store();
    store.dispatch(Action::set_preferred(Some(PreferredLocale::new("fr"))));

    let schemas = schemas();
    let permissions = permissions();
    let context = LocalizerContext::from_state(
        ContentKind::CollectionType,
        &schemas,
        store.state(),
        &permissions,
    );

    let links = vec![
        Link::new(format!("/content-manager/collectionType/{ARTICLE}"))
            .with_search("page=1&pageSize=10&sort=title:ASC")
            .with_field("title", "Articles"),
        Link::new(format!("/content-manager/collectionType/{TAG}")).with_search("page=1"),
    ];

    let localized = LinkLocalizer::with_defaults().localize(&links, &context).unwrap();

    assert_eq!(
        localized[0].search.as_deref(),
        Some("page=1&pageSize=10&sort=title:ASC&plugins[i18n][locale]=fr")
    );
    assert_eq!(localized[0].extra.get("title"), Some(&json!("Articles")));
    assert_eq!(localized[1], links[1]);
}

#[test]
fn test_single_type_link_hidden_without_read_on_known_locale() {
    let store = resolved_store();
    let schemas = schemas();
    let permissions = permissions();

    let links = vec![Link::new(format!("/content-manager/singleType/{HOMEPAGE}"))];
    let localized = add_locale_to_links_search(
        &links,
        "singleType",
        &schemas,
        store.state().preferred_locale.as_ref(),
        &store.state().locales,
        &permissions,
    )
    .unwrap();

    // Read is only granted for "de", which is neither preferred nor default
    assert_eq!(localized[0].is_displayed, Some(false));
    assert!(!localized[0].is_visible());
}

#[test]
fn test_encoded_search_configuration() {
    let store = resolved_store();
    let schemas = schemas();
    let permissions = permissions();
    let context = LocalizerContext::from_state(
        ContentKind::CollectionType,
        &schemas,
        store.state(),
        &permissions,
    );

    let localizer = LinkLocalizer::with_config(LocalizerConfig::new().encode_search(true));
    let links = vec![Link::new(format!("/content-manager/collectionType/{ARTICLE}"))];

    let localized = localizer.localize(&links, &context).unwrap();
    assert_eq!(
        localized[0].search.as_deref(),
        Some("plugins%5Bi18n%5D%5Blocale%5D=en")
    );
}
