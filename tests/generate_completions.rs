//! Integration tests for the full load → build → write pipeline
//!
//! Each test writes a scraper-shaped input directory into a temp dir, runs
//! `generate`, and inspects the written document.

use std::fs;
use std::path::Path;

use indoc::indoc;
use serde_json::{Value, json};
use tempfile::TempDir;

use glua_completions::catalog::{GLOBAL_VARIABLES, KEYWORDS, VALUED_GLOBALS};
use glua_completions::completion::DEFAULT_SCOPE;
use glua_completions::loader::{
    CLASSES_FILE, ENUMS_FILE, GLOBAL_FUNCTIONS_FILE, HOOKS_FILE, LIBRARIES_FILE, PANELS_FILE,
};
use glua_completions::{GeneratorConfig, GeneratorError, Section, generate};

const GLOBAL_FUNCTIONS: &str = indoc! {r#"
    [
        {
            "name": "print",
            "arguments": [{ "name": "msg", "type": "string" }],
            "realms": ["client", "server"]
        },
        {
            "name": "CurTime",
            "realms": ["client", "server", "menu"]
        }
    ]
"#};

const CLASSES: &str = indoc! {r#"
    [
        {
            "name": "Entity",
            "functions": [
                {
                    "name": "EmitSound",
                    "arguments": [
                        { "name": "soundName", "type": "string" },
                        { "name": "soundLevel", "type": "number", "default": 75 },
                        { "name": "pitchPercent", "type": "number", "default": "100" }
                    ],
                    "realms": ["client", "server"]
                }
            ]
        }
    ]
"#};

const LIBRARIES: &str = indoc! {r#"
    [
        {
            "name": "math",
            "functions": [
                { "name": "huge", "realms": ["client", "server", "menu"] },
                {
                    "name": "Round",
                    "arguments": [
                        { "name": "value", "type": "number" },
                        { "name": "decimals", "type": "number", "default": "0" }
                    ],
                    "realms": ["client", "server", "menu"]
                },
                { "name": "pi", "realms": ["client", "server", "menu"] }
            ]
        }
    ]
"#};

const HOOKS: &str = indoc! {r#"
    [
        {
            "name": "GM",
            "functions": [
                {
                    "name": "PlayerSay",
                    "arguments": [
                        { "name": "sender", "type": "Player" },
                        { "name": "text", "type": "string" },
                        { "name": "teamChat", "type": "boolean" }
                    ],
                    "realms": ["server"]
                }
            ]
        }
    ]
"#};

const PANELS: &str = indoc! {r#"
    [
        { "name": "DShape" },
        {
            "name": "DLabel",
            "functions": [
                {
                    "name": "SetText",
                    "arguments": [{ "name": "text", "type": "string" }],
                    "realms": ["client", "menu"]
                },
                { "name": "GetText", "realms": ["client", "menu"] }
            ]
        }
    ]
"#};

const ENUMS: &str = indoc! {r#"
    [
        {
            "name": "TYPE",
            "realms": ["client"],
            "fields": [
                { "name": "TYPE_A", "value": 1 },
                { "name": "TYPE_B", "value": 2 }
            ]
        },
        {
            "name": "ACT",
            "realms": ["server", "menu"],
            "fields": [{ "name": "ACT_INVALID", "value": -1 }]
        }
    ]
"#};

fn write_inputs(dir: &Path) {
    fs::write(dir.join(GLOBAL_FUNCTIONS_FILE), GLOBAL_FUNCTIONS).unwrap();
    fs::write(dir.join(CLASSES_FILE), CLASSES).unwrap();
    fs::write(dir.join(LIBRARIES_FILE), LIBRARIES).unwrap();
    fs::write(dir.join(HOOKS_FILE), HOOKS).unwrap();
    fs::write(dir.join(PANELS_FILE), PANELS).unwrap();
    fs::write(dir.join(ENUMS_FILE), ENUMS).unwrap();
}

fn config_for(temp_dir: &TempDir) -> GeneratorConfig {
    let input_dir = temp_dir.path().join("output");
    fs::create_dir_all(&input_dir).unwrap();
    write_inputs(&input_dir);

    GeneratorConfig {
        input_dir,
        output: temp_dir.path().join("output.json"),
        ..Default::default()
    }
}

fn read_output(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn find<'a>(document: &'a Value, trigger: &str) -> Vec<&'a Value> {
    document["completions"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|entry| entry["trigger"] == trigger)
        .collect()
}

#[test]
fn test_document_layout_and_counts() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);

    let summary = generate(&config).expect("generation should succeed");
    let document = read_output(&config.output);

    assert_eq!(document["scope"], DEFAULT_SCOPE);

    let static_count = KEYWORDS.len() + GLOBAL_VARIABLES.len() + VALUED_GLOBALS.len();
    // 2 globals, 1 method, 1 library function, 1 hook, 2 panels + 2 methods, 3 enum fields
    let expected = static_count + 2 + 1 + 1 + 1 + 4 + 3;

    assert_eq!(summary.completions, expected);
    assert_eq!(summary.stats.total(), expected);
    assert_eq!(document["completions"].as_array().unwrap().len(), expected);
    assert_eq!(summary.stats.count(Section::Panels), 4);
    assert_eq!(summary.stats.excluded, 2);
    assert_eq!(summary.stats.skipped, 0);
}

#[test]
fn test_category_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    generate(&config).unwrap();

    let document = read_output(&config.output);
    let triggers: Vec<&str> = document["completions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["trigger"].as_str().unwrap())
        .collect();

    let static_count = KEYWORDS.len() + GLOBAL_VARIABLES.len() + VALUED_GLOBALS.len();
    assert_eq!(triggers[0], "and");
    assert_eq!(triggers[KEYWORDS.len()], "derma.Controls");
    assert_eq!(
        &triggers[static_count..],
        &[
            "print",
            "CurTime",
            "EmitSound",
            "math.Round",
            "PlayerSay",
            "DShape",
            "DLabel",
            "SetText",
            "GetText",
            "TYPE_A",
            "TYPE_B",
            "ACT_INVALID",
        ]
    );
}

#[test]
fn test_global_function_entry() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    generate(&config).unwrap();

    let document = read_output(&config.output);
    assert_eq!(
        find(&document, "print"),
        vec![&json!({
            "trigger": "print",
            "contents": "print(${1:string msg})",
            "annotation": "Shared",
            "kind": ["function", "f", "Global"],
            "details": "print(msg)"
        })]
    );
    assert_eq!(find(&document, "CurTime")[0]["contents"], "CurTime()");
    assert_eq!(find(&document, "CurTime")[0]["annotation"], "SharedMenu");
}

#[test]
fn test_argument_defaults_rendered() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    generate(&config).unwrap();

    let document = read_output(&config.output);
    let emit_sound = find(&document, "EmitSound")[0];
    assert_eq!(
        emit_sound["contents"],
        "EmitSound(${1:string soundName}, ${2:number soundLevel = 75}, ${3:number pitchPercent = 100})"
    );
    assert_eq!(emit_sound["details"], "Entity:EmitSound(soundName, soundLevel, pitchPercent)");
    assert_eq!(emit_sound["kind"], json!(["function", "c", "Class"]));

    // A string "0" default is kept, unlike a numeric zero
    let round = find(&document, "math.Round")[0];
    assert_eq!(round["contents"], "math.Round(${1:number value}, ${2:number decimals = 0})");
}

#[test]
fn test_excluded_library_functions_only_appear_as_globals() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    generate(&config).unwrap();

    let document = read_output(&config.output);
    let huge = find(&document, "math.huge");
    assert_eq!(huge.len(), 1);
    assert_eq!(huge[0]["details"], "math.huge = ∞");
    assert_eq!(huge[0]["kind"], json!(["namespace", "G", "Global Variable"]));

    let pi = find(&document, "math.pi");
    assert_eq!(pi.len(), 1);
    assert_eq!(pi[0]["details"], "math.pi = π");
}

#[test]
fn test_hook_and_panel_entries() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    generate(&config).unwrap();

    let document = read_output(&config.output);

    let hook = find(&document, "PlayerSay")[0];
    assert_eq!(hook["contents"], "PlayerSay");
    assert_eq!(hook["annotation"], "Server");
    assert_eq!(hook["details"], "GM:PlayerSay(sender, text, teamChat)");
    assert_eq!(hook["kind"], json!(["snippet", "H", "Hook"]));

    let shape = find(&document, "DShape")[0];
    assert_eq!(
        shape,
        &json!({
            "trigger": "DShape",
            "contents": "DShape",
            "annotation": "Panel",
            "kind": ["navigation", "P", "Panel"],
            "details": "vgui.Create(\"DShape\")"
        })
    );

    let set_text = find(&document, "SetText")[0];
    assert_eq!(set_text["contents"], "SetText(${1:string text})");
    assert_eq!(set_text["annotation"], "Shared");
    assert_eq!(set_text["details"], "DLabel:SetText(text)");
    assert_eq!(set_text["kind"], json!(["markup", "m", "Panel Method"]));
}

#[test]
fn test_enum_entries() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    let summary = generate(&config).unwrap();

    let document = read_output(&config.output);
    assert_eq!(
        find(&document, "TYPE_A"),
        vec![&json!({
            "trigger": "TYPE_A",
            "contents": "TYPE_A",
            "annotation": "Client",
            "kind": ["variable", "E", "Enum"],
            "details": "TYPE_A = 1"
        })]
    );

    // server + menu has no realm label; the annotation is omitted rather than null
    let invalid = find(&document, "ACT_INVALID")[0];
    assert!(invalid.get("annotation").is_none());
    assert_eq!(invalid["details"], "ACT_INVALID = -1");
    assert_eq!(summary.stats.unannotated, 1);
}

#[test]
fn test_keywords_have_no_optional_fields() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    generate(&config).unwrap();

    let document = read_output(&config.output);
    assert_eq!(
        find(&document, "while"),
        vec![&json!({ "trigger": "while", "contents": "while", "kind": "keyword" })]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);

    generate(&config).unwrap();
    let first = fs::read(&config.output).unwrap();
    generate(&config).unwrap();
    let second = fs::read(&config.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    fs::remove_file(config.input_dir.join(PANELS_FILE)).unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GeneratorError::Read { .. }));
    assert!(err.to_string().contains(PANELS_FILE));
    assert!(!config.output.exists(), "no output should be written on load failure");
}

#[test]
fn test_malformed_input_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    fs::write(config.input_dir.join(CLASSES_FILE), "[{ \"name\": ").unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GeneratorError::Parse { .. }));
    assert!(!config.output.exists());
}

#[test]
fn test_unnamed_records_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    fs::write(
        config.input_dir.join(GLOBAL_FUNCTIONS_FILE),
        r#"[{ "realms": ["client"] }, { "name": "Msg", "realms": ["client"] }]"#,
    )
    .unwrap();

    let summary = generate(&config).unwrap();
    assert_eq!(summary.stats.skipped, 1);

    let document = read_output(&config.output);
    assert!(document["completions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|entry| entry["trigger"].as_str().is_some_and(|t| !t.is_empty())));
    assert_eq!(find(&document, "Msg").len(), 1);
}

#[test]
fn test_unnamed_enum_fields_are_emitted() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);
    fs::write(
        config.input_dir.join(ENUMS_FILE),
        r#"[{ "realms": ["client"], "fields": [{ "name": "TYPE_A", "value": 1 }] }]"#,
    )
    .unwrap();

    let summary = generate(&config).unwrap();
    assert_eq!(summary.stats.skipped, 0);
    assert_eq!(summary.stats.count(Section::Enums), 1);

    let document = read_output(&config.output);
    assert_eq!(
        find(&document, "TYPE_A"),
        vec![&json!({
            "trigger": "TYPE_A",
            "contents": "TYPE_A",
            "annotation": "Client",
            "kind": ["variable", "E", "Enum"],
            "details": "TYPE_A = 1"
        })]
    );
}
