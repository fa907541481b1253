//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the crate's `src/` tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first — the budget never grows.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics abort the WASM module and take every feature down with it.
    Budget { pattern: ".unwrap()", max: 0, why: "panics" },
    // The compiled-in email pattern in `state/contact.rs`.
    Budget { pattern: ".expect(", max: 1, why: "panics" },
    Budget { pattern: "panic!(", max: 0, why: "panics" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished" },
    // Silent loss — discards errors without inspecting.
    Budget { pattern: "let _ =", max: 0, why: "silent discard" },
    Budget { pattern: ".ok()", max: 0, why: "silent discard" },
    Budget { pattern: "Err(_)", max: 0, why: "silent discard" },
    // Typed web-sys accessors exist for every property the page reads.
    Budget { pattern: "Reflect::get", max: 0, why: "untyped property read" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "dead code" },
];

/// Modules that must stay free of browser types so they test natively.
const NATIVE_ONLY: &[&str] = &["src/state", "src/config.rs"];
const BROWSER_CRATES: &[&str] = &["web_sys", "wasm_bindgen", "js_sys", "gloo_timers"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files under `root`, excluding test files.
fn source_files(root: &str) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(root), &mut files);
    files
}

fn collect_rs_files(path: &Path, out: &mut Vec<SourceFile>) {
    if path.is_file() {
        push_if_production(path, out);
        return;
    }
    let Ok(entries) = fs::read_dir(path) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else {
            push_if_production(&path, out);
        }
    }
}

fn push_if_production(path: &Path, out: &mut Vec<SourceFile>) {
    if !path.extension().is_some_and(|e| e == "rs") {
        return;
    }
    let path_str = path.to_string_lossy().to_string();
    if path_str.ends_with("_test.rs") {
        return;
    }
    if let Ok(content) = fs::read_to_string(path) {
        out.push(SourceFile { path: path_str, content });
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_not_empty() {
    assert!(!source_files("src").is_empty(), "hygiene scan found no sources; run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files("src");
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "{} ({}) budget exceeded: found {count}, max {}.\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn state_modules_stay_browser_free() {
    let mut failures = Vec::new();
    for root in NATIVE_ONLY {
        let files = source_files(root);
        for krate in BROWSER_CRATES {
            let found = hits(&files, &format!("{krate}::"));
            if !found.is_empty() {
                failures.push(format!("{krate} used in native-only code:\n{}", format_hits(&found)));
            }
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
