mod common;

use std::collections::HashMap;

use common::{DexTest, page_json, pokemon_json, serve_catalog};

/// A two-page catalog of three starters with a page size of two.
fn starters_api() -> String {
    serve_catalog(|base| {
        let mut routes = HashMap::new();
        routes.insert(
            "/pokemon?offset=0&limit=2".to_string(),
            (200, page_json(base, 3, &[(1, "bulbasaur"), (4, "charmander")])),
        );
        routes.insert(
            "/pokemon?offset=2&limit=2".to_string(),
            (200, page_json(base, 3, &[(7, "squirtle")])),
        );
        routes.insert(
            "/pokemon/1/".to_string(),
            (200, pokemon_json(1, "bulbasaur", &["grass", "poison"], 7, 69)),
        );
        routes.insert(
            "/pokemon/4/".to_string(),
            (200, pokemon_json(4, "charmander", &["fire"], 6, 85)),
        );
        routes.insert(
            "/pokemon/7/".to_string(),
            (200, pokemon_json(7, "squirtle", &["water"], 5, 90)),
        );
        routes.insert(
            "/pokemon/25".to_string(),
            (200, pokemon_json(25, "pikachu", &["electric"], 4, 60)),
        );
        routes.insert(
            "/type?limit=100".to_string(),
            (
                200,
                serde_json::json!({
                    "count": 3,
                    "results": [
                        { "name": "fire", "url": "" },
                        { "name": "grass", "url": "" },
                        { "name": "water", "url": "" }
                    ]
                })
                .to_string(),
            ),
        );
        routes
    })
}

fn starters() -> DexTest {
    let dex = DexTest::new().with_api(starters_api());
    dex.write_config("list:\n  page_size: 2\n");
    dex
}

fn names(output: &serde_json::Value) -> Vec<String> {
    output["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .map(|e| e["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_list_first_page() {
    let dex = starters();
    let output = dex.run_json(&["list", "--json"]);

    assert_eq!(names(&output), vec!["bulbasaur", "charmander"]);
    assert_eq!(output["total_count"], 3);
    assert_eq!(output["total_pages"], 2);
    assert_eq!(output["pagination"], serde_json::json!([1, 2]));
    assert_eq!(output["query"], "");
}

#[test]
fn test_list_text_output() {
    let dex = starters();
    let stdout = dex.run_success(&["list"]);

    assert!(stdout.contains("Page 1 of 2, sorted by id"));
    assert!(stdout.contains("Bulbasaur"));
    assert!(stdout.contains("#004"));
    assert!(stdout.contains("[1]"));
}

#[test]
fn test_list_page_flag_persists_in_url() {
    let dex = starters();
    let output = dex.run_json(&["list", "--page", "2", "--json"]);

    assert_eq!(names(&output), vec!["squirtle"]);
    assert_eq!(dex.run_success(&["url"]).trim(), "page=2");
}

#[test]
fn test_list_sort_by_weight_descending() {
    let dex = starters();
    let output = dex.run_json(&["list", "--sort", "weight", "--json"]);
    assert_eq!(names(&output), vec!["charmander", "bulbasaur"]);
}

#[test]
fn test_list_type_filter_hides_pagination() {
    let dex = starters();
    let output = dex.run_json(&["list", "--type", "fire", "--json"]);

    assert_eq!(names(&output), vec!["charmander"]);
    assert!(output["pagination"].is_null());
    assert_eq!(dex.run_success(&["url"]).trim(), "type=fire");
}

#[test]
fn test_list_unknown_type_rejected() {
    let dex = starters();
    let stderr = dex.run_failure(&["list", "--type", "shadow"]);
    assert!(stderr.contains("unknown type 'shadow'"));
    assert!(stderr.contains("fire, grass, water"));
}

#[test]
fn test_list_search_resets_page() {
    let dex = starters();
    dex.run_success(&["list", "--page", "2"]);

    let output = dex.run_json(&["list", "--search", "CHAR", "--json"]);
    assert_eq!(output["state"]["page"], 1);
    assert_eq!(names(&output), vec!["charmander"]);
}

#[test]
fn test_list_favorites_view() {
    let dex = starters();
    dex.run_success(&["fav", "4"]);

    let output = dex.run_json(&["list", "--view", "favorites", "--json"]);
    assert_eq!(names(&output), vec!["charmander"]);

    dex.run_success(&["fav", "4"]);
    let stdout = dex.run_success(&["list"]);
    assert!(stdout.contains("You haven't added any favorites yet"));
}

#[test]
fn test_list_reset_returns_to_default_view() {
    let dex = starters();
    dex.run_success(&["list", "--sort", "name", "--page", "2"]);

    let output = dex.run_json(&["list", "--reset", "--json"]);
    assert_eq!(output["query"], "");
    assert_eq!(names(&output), vec!["bulbasaur", "charmander"]);
}

#[test]
fn test_list_reset_with_flags_is_one_history_step() {
    let dex = starters();
    dex.run_success(&["open", "page=3"]);
    dex.run_success(&["list", "--reset", "--sort", "name"]);
    assert_eq!(dex.run_success(&["url"]).trim(), "sort=name");

    assert_eq!(dex.run_success(&["back"]).trim(), "page=3");
}

#[test]
fn test_list_network_failure_offers_retry() {
    let dex = DexTest::new();
    let stderr = dex.run_failure(&["list"]);
    assert!(stderr.contains("network error"));
    assert!(stderr.contains("Retry with: dex list"));
}

#[test]
fn test_list_type_outage_retry_keeps_flags() {
    let api = serve_catalog(|_| {
        let mut routes = HashMap::new();
        routes.insert("/type?limit=100".to_string(), (503, "{}".to_string()));
        routes
    });
    let dex = DexTest::new().with_api(api);

    let stderr = dex.run_failure(&["list", "--type", "fire", "--sort", "name"]);
    assert!(stderr.contains("Retry with: dex list --type fire --sort name"));
}

#[test]
fn test_show_entry() {
    let dex = starters();
    dex.run_success(&["note", "25", "electric", "mouse"]);

    let output = dex.run_json(&["show", "25", "--json"]);
    assert_eq!(output["entry"]["name"], "pikachu");
    assert_eq!(output["favorite"], false);
    assert_eq!(output["note"], "electric mouse");

    let stdout = dex.run_success(&["show", "25"]);
    assert!(stdout.contains("Pikachu"));
    assert!(stdout.contains("Base Stats"));
    assert!(stdout.contains("electric mouse"));
}

#[test]
fn test_show_unknown_id() {
    let dex = starters();
    let stderr = dex.run_failure(&["show", "9999"]);
    assert!(stderr.contains("not found"));
    assert!(!stderr.contains("Retry with"));
}

#[test]
fn test_types_lists_vocabulary() {
    let dex = starters();
    let stdout = dex.run_success(&["types"]);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["fire", "grass", "water"]);
}

#[test]
fn test_search_reads_stdin_until_closed() {
    let dex = starters();
    let output = dex.run_with_stdin(&["search", "--json"], "bulb\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let last = stdout.lines().last().expect("at least one refresh");
    let last: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(last["state"]["search"], "bulb");
    assert_eq!(names(&last), vec!["bulbasaur"]);
    assert_eq!(dex.run_success(&["url"]).trim(), "q=bulb");
}
