//! Resolves the ExchangeRate-API credential.
//!
//! The environment variable wins; otherwise the key is read from a Java-style
//! properties file, `config.properties` in the working directory by default.
//! Any problem with the file is treated as "no key configured".

use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path};
use tracing::debug;

pub const ENV_VAR: &str = "EXCHANGE_RATE_API_KEY";
pub const CONFIG_FILE: &str = "config.properties";
pub const CONFIG_KEY: &str = "exchange.rate.api.key";

/// Looks up the API key using the process environment and the given
/// properties file (or `config.properties` when `None`).
pub fn api_key(config_path: Option<&Path>) -> Option<String> {
    let path = config_path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    resolve_api_key(std::env::var(ENV_VAR).ok(), path)
}

pub fn resolve_api_key(env_value: Option<String>, config_path: &Path) -> Option<String> {
    if let Some(key) = non_blank(env_value) {
        debug!("Using API key from {ENV_VAR}");
        return Some(key);
    }

    match load_key_from_file(config_path) {
        Ok(key) => key,
        Err(e) => {
            debug!(error = %e, "Ignoring unreadable config file");
            None
        }
    }
}

fn load_key_from_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(None);
    }

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let content = decode_latin1(&bytes);
    let key = non_blank(parse_properties(&content).remove(CONFIG_KEY));
    if key.is_some() {
        debug!("Using API key from {}", path.display());
    }
    Ok(key)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Properties files are ISO-8859-1, where every byte maps to the same code point.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parses `key=value` properties content. Supports `#`/`!` comments, the `=`,
/// `:` and whitespace separators, backslash line continuations and the
/// `\t`, `\n`, `\r`, `\f`, `\uXXXX` and `\<char>` escapes. Later duplicates
/// replace earlier ones.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let mut logical = line.trim_start().to_string();
        if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
            continue;
        }

        while has_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        props.insert(unescape(key), unescape(value));
    }

    props
}

// An odd number of trailing backslashes means the last one escapes the newline.
fn has_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..idx], line[idx + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[idx..].trim_start();
                let value = rest.strip_prefix(['=', ':']).unwrap_or(rest).trim_start();
                return (&line[..idx], value);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{0c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32))
                    .flatten();
                match decoded {
                    Some(ch) => out.push(ch),
                    // Malformed or surrogate escapes are kept as written.
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
