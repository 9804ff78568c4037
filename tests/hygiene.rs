//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production sources under `src/` for antipatterns. Every
//! pattern has a budget of zero; the budget never grows. Test files
//! (`*_test.rs`) are exempt.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, what exceeding it means)
const BUDGETS: &[(&str, &str)] = &[
    // Panics — these crash the surface.
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("panic!(", "explicit panic"),
    ("unreachable!(", "explicit panic"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    // Silent loss — discards errors without inspecting.
    ("let _ =", "silently discarded result"),
    (".ok()", "error converted to None without inspection"),
    // Structure.
    ("#[allow(dead_code)]", "dead code kept alive"),
];

fn production_sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn production_sources_stay_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (pattern, meaning) in BUDGETS {
        for (path, content) in &files {
            for (idx, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    violations.push(format!(
                        "  {}:{}: {pattern} ({meaning})",
                        path.display(),
                        idx + 1
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "hygiene budget exceeded ({} hits, budget is zero):\n{}",
        violations.len(),
        violations.join("\n")
    );
}
