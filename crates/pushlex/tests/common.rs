#![allow(missing_docs, dead_code)]

/// A short script touching every token kind.
pub const SCRIPT: &str = r#"### sample script
let limit := -12;
greet("Hello, world\&hellip;", 'it\'s');
total += limit * 3;
"#;

/// `SCRIPT` as bytes, three at a time.
pub fn script_chunks() -> Vec<Vec<u8>> {
    SCRIPT
        .as_bytes()
        .chunks(3)
        .map(<[u8]>::to_vec)
        .collect()
}
