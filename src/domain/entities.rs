//! Domain entities: parameter records and NAME=VALUE parsing

use serde::Serialize;

/// SSM parameter type selected at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    StringList,
    SecureString,
}

impl ParameterKind {
    /// Canonical SSM type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::String => "String",
            ParameterKind::StringList => "StringList",
            ParameterKind::SecureString => "SecureString",
        }
    }
}

/// A parameter as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredParameter {
    /// Full hierarchical name
    pub name: String,
    /// Plaintext value, or ciphertext when decryption was not requested
    pub value: String,
    /// Store-assigned ARN
    pub arn: String,
}

/// One NAME=VALUE declaration from a local variables file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarEntry {
    pub name: String,
    pub value: String,
}

/// Result of comparing a candidate value against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamState {
    /// Not in the store yet
    Absent,
    /// Stored value equals the candidate
    Unchanged,
    /// Stored value differs from the candidate
    Stale,
}

impl ParamState {
    /// Classify the stored value against the candidate from the local file.
    pub fn of(current: Option<&str>, candidate: &str) -> Self {
        match current {
            None => ParamState::Absent,
            Some(v) if v == candidate => ParamState::Unchanged,
            Some(_) => ParamState::Stale,
        }
    }
}

/// Entry of the `containerDefinitions[*].secrets` list in an ECS task definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EcsSecret {
    pub name: String,
    #[serde(rename = "valueFrom")]
    pub value_from: String,
}

/// Remove the trailing slash from a hierarchy path, if present.
pub fn trim_path(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Final segment of a full parameter name.
pub fn short_name(full: &str) -> &str {
    full.rsplit('/').next().unwrap_or(full)
}

/// Parse NAME=VALUE declarations from file content.
///
/// Each line is split on the first `=`; whitespace and one pair of
/// surrounding double quotes are stripped from both sides. Lines without
/// `=` and lines where either side ends up empty are skipped.
pub fn parse_var_lines(content: &str) -> Vec<VarEntry> {
    let mut entries = Vec::new();
    for line in content.lines() {
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = strip_quotes(name.trim());
        let value = strip_quotes(value.trim());
        if name.is_empty() || value.is_empty() {
            continue;
        }
        entries.push(VarEntry {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    entries
}

/// Strip one pair of surrounding double quotes.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_state_classification() {
        assert_eq!(ParamState::of(None, "x"), ParamState::Absent);
        assert_eq!(ParamState::of(Some("x"), "x"), ParamState::Unchanged);
        assert_eq!(ParamState::of(Some("y"), "x"), ParamState::Stale);
    }

    #[test]
    fn test_short_name_strips_hierarchy() {
        assert_eq!(short_name("/app/prod/DB_HOST"), "DB_HOST");
        assert_eq!(short_name("DB_HOST"), "DB_HOST");
    }

    #[test]
    fn test_trim_path_removes_trailing_slash() {
        assert_eq!(trim_path("/app/prod/"), "/app/prod");
        assert_eq!(trim_path("/app/prod"), "/app/prod");
    }

    #[test]
    fn test_strip_quotes_requires_a_pair() {
        assert_eq!(strip_quotes("\"foo\""), "foo");
        assert_eq!(strip_quotes("\"foo"), "\"foo");
        assert_eq!(strip_quotes("\""), "\"");
    }
}
