use frontend::views::routes;
use frontend::Route;
use pretty_assertions::assert_eq;
use yew_router::Routable;

const ALL_ROUTES: [Route; 3] = [Route::Home, Route::About, Route::Contact];

#[test]
fn test_route_paths() {
    let paths: Vec<String> = ALL_ROUTES.iter().map(|r| r.to_path()).collect();
    assert_eq!(paths, vec!["/", "/about", "/contact"]);
}

#[test]
fn test_recognize_configured_paths() {
    assert_eq!(Route::recognize("/"), Some(Route::Home));
    assert_eq!(Route::recognize("/about"), Some(Route::About));
    assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
}

#[test]
fn test_unconfigured_path_has_no_route() {
    assert_eq!(Route::recognize("/pricing"), None);
}

#[test]
fn test_enum_agrees_with_route_table() {
    let table = routes();
    assert_eq!(table.routes().len(), ALL_ROUTES.len());

    for route in ALL_ROUTES {
        let definition = table
            .resolve(&route.to_path())
            .unwrap_or_else(|| panic!("{:?} missing from route table", route));
        assert_eq!(definition.name, route.name());
    }
}

#[test]
fn test_page_views_load_lazily() {
    let table = routes();
    let contact = table.by_name("contact").unwrap();
    assert!(!contact.view.is_loaded());
    assert_eq!(contact.view.get().heading, "聯絡我們");
    assert!(contact.view.is_loaded());
    assert!(!table.by_name("about").unwrap().view.is_loaded());
}

#[test]
fn test_names_round_trip_to_routes() {
    for route in ALL_ROUTES {
        assert_eq!(Route::from_name(route.name()), Some(route.clone()));
    }
    assert_eq!(Route::from_name("pricing"), None);
}

#[test]
fn test_table_renders_mixed_case_and_trailing_slash() {
    let table = routes();
    let rendered = |path: &str| {
        table
            .resolve(path)
            .and_then(|definition| Route::from_name(definition.name))
    };

    assert_eq!(rendered("/About"), Some(Route::About));
    assert_eq!(rendered("/CONTACT/"), Some(Route::Contact));
    assert_eq!(rendered("/about/"), Some(Route::About));
    assert_eq!(rendered("/pricing"), None);
}
