//! Regex-based extraction of import targets from TypeScript/JavaScript
//! source text.
//!
//! This is the default import-parsing collaborator handed to the dependency
//! aggregator. It only cares about the module specifier strings; symbol
//! lists, aliases and type-only markers are irrelevant at project
//! granularity.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?m)^\s*import\s+([^;]+?)\s+from\s+["']([^"']+)["']"#))
}

fn regex_side_effect_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?m)^\s*import\s+["']([^"']+)["']"#))
}

fn regex_reexport_star() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?m)^\s*export\s+\*\s+from\s+["']([^"']+)["']"#))
}

fn regex_reexport_named() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?m)^\s*export\s+\{([^}]+)\}\s+from\s+["']([^"']+)["']"#))
}

fn regex_dynamic_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"import\s*\(\s*["']([^"']+)["']\s*\)"#))
}

/// All module specifiers referenced by `content`, in document order.
pub fn extract_import_sources(content: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();

    for caps in regex_import().captures_iter(content) {
        if let (Some(whole), Some(source)) = (caps.get(0), caps.get(2)) {
            found.push((whole.start(), source.as_str().to_string()));
        }
    }
    for caps in regex_side_effect_import().captures_iter(content) {
        if let (Some(whole), Some(source)) = (caps.get(0), caps.get(1)) {
            found.push((whole.start(), source.as_str().to_string()));
        }
    }
    for caps in regex_reexport_star().captures_iter(content) {
        if let (Some(whole), Some(source)) = (caps.get(0), caps.get(1)) {
            found.push((whole.start(), source.as_str().to_string()));
        }
    }
    for caps in regex_reexport_named().captures_iter(content) {
        if let (Some(whole), Some(source)) = (caps.get(0), caps.get(2)) {
            found.push((whole.start(), source.as_str().to_string()));
        }
    }
    for caps in regex_dynamic_import().captures_iter(content) {
        if let (Some(whole), Some(source)) = (caps.get(0), caps.get(1)) {
            found.push((whole.start(), source.as_str().to_string()));
        }
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, source)| source).collect()
}

/// Read a source file and extract its import targets. Unreadable files are
/// an error; the aggregator propagates it and produces no partial mapping.
pub fn parse_imports(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(extract_import_sources(&content))
}

#[cfg(test)]
mod tests {
    use super::{extract_import_sources, parse_imports};

    #[test]
    fn extracts_static_side_effect_and_reexport_sources() {
        let content = r#"
import defaultThing from "./dep";
import { a, b } from '../other/mod';
import type { Foo } from "./types";
import "./side.css";
export { bar } from "./reexports";
export * from "./star";
const lazy = import("./lazy");
const notAnImport = "import x from 'nope'";
"#;
        let sources = extract_import_sources(content);
        assert_eq!(
            sources,
            vec![
                "./dep",
                "../other/mod",
                "./types",
                "./side.css",
                "./reexports",
                "./star",
                "./lazy",
            ]
        );
    }

    #[test]
    fn returns_sources_in_document_order() {
        let content = "export * from './z';\nimport x from './a';\n";
        assert_eq!(extract_import_sources(content), vec!["./z", "./a"]);
    }

    #[test]
    fn empty_source_has_no_imports() {
        assert!(extract_import_sources("const x = 1;\n").is_empty());
    }

    #[test]
    fn parse_imports_propagates_missing_file() {
        let err = parse_imports(std::path::Path::new("/nonexistent/definitely/missing.ts"));
        assert!(err.is_err());
    }

    #[test]
    fn parse_imports_reads_from_disk() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let file = tmp.path().join("f.ts");
        std::fs::write(&file, "import { x } from '../projB/x';\n").expect("write");
        let sources = parse_imports(&file).expect("parse");
        assert_eq!(sources, vec!["../projB/x"]);
    }
}
