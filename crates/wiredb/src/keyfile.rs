//! Parser for the grouped key/value wiring database format.
//!
//! Wiring files use the GLib key-file dialect: a `[group]` header opens a
//! group (here, one wire, named by the header), followed by `KEY=VALUE`
//! lines. Integer lists are `;`-separated and may carry a trailing
//! separator. Blank lines and lines starting with `#` are skipped.
//!
//! # Format
//!
//! ```text
//! # double line, eastbound
//! [E2END0]
//! ID=2
//! DX=-2
//! DY=0
//! EP=0
//! FUT=
//! TYPE=1
//! DIR=1
//! SIT=2
//! ```

use std::collections::HashMap;

/// One `[group]` block with its key/value entries.
///
/// Groups keep their file order; the loader is responsible for placing each
/// one at its declared ID.
#[derive(Debug, Clone)]
pub(crate) struct KeyFileGroup {
    name: String,
    entries: HashMap<String, String>,
}

impl KeyFileGroup {
    /// The group name, i.e. the wire's textual name.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw value for `key`, if present.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Parses key-file content into its groups, in file order.
///
/// Duplicate group names are passed through; the loader rejects them when it
/// builds the name index. A repeated key within one group overwrites the
/// earlier value.
///
/// # Errors
///
/// Returns an error string (with a line number) for malformed headers,
/// entries outside any group, and lines that are neither.
pub(crate) fn parse_keyfile(content: &str) -> Result<Vec<KeyFileGroup>, String> {
    let mut groups: Vec<KeyFileGroup> = Vec::new();

    for (line_no, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or_else(|| format!("line {}: unterminated group header", line_no + 1))?;
            if name.is_empty() {
                return Err(format!("line {}: empty group name", line_no + 1));
            }
            groups.push(KeyFileGroup {
                name: name.to_string(),
                entries: HashMap::new(),
            });
        } else if let Some((key, value)) = line.split_once('=') {
            let group = groups
                .last_mut()
                .ok_or_else(|| format!("line {}: entry before any group header", line_no + 1))?;
            group
                .entries
                .insert(key.trim().to_string(), value.trim().to_string());
        } else {
            return Err(format!(
                "line {}: expected '[group]' or 'KEY=VALUE', got '{line}'",
                line_no + 1
            ));
        }
    }

    Ok(groups)
}

/// Parses a `;`-separated integer list value.
///
/// An empty value (or one consisting only of separators) is a valid empty
/// list, matching the key-file convention of a trailing `;`.
pub(crate) fn parse_int_list(raw: &str) -> Result<Vec<i64>, String> {
    let mut values = Vec::new();
    for piece in raw.split(';') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let value = piece
            .parse::<i64>()
            .map_err(|e| format!("invalid list entry '{piece}': {e}"))?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_group() {
        let groups = parse_keyfile("[CLK0]\nID=3\nDX=1\n").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name(), "CLK0");
        assert_eq!(groups[0].get("ID"), Some("3"));
        assert_eq!(groups[0].get("DX"), Some("1"));
        assert_eq!(groups[0].get("DY"), None);
    }

    #[test]
    fn parse_preserves_file_order() {
        let groups = parse_keyfile("[B]\nID=1\n[A]\nID=0\n").unwrap();
        assert_eq!(groups[0].name(), "B");
        assert_eq!(groups[1].name(), "A");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let src = "# wiring db\n\n[W0]\n# inline comment line\nID=0\n\n";
        let groups = parse_keyfile(src).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].get("ID"), Some("0"));
    }

    #[test]
    fn trims_keys_and_values() {
        let groups = parse_keyfile("[W0]\n ID = 7 \n").unwrap();
        assert_eq!(groups[0].get("ID"), Some("7"));
    }

    #[test]
    fn entry_before_group_rejected() {
        let err = parse_keyfile("ID=0\n[W0]\n").unwrap_err();
        assert!(err.contains("line 1"));
        assert!(err.contains("before any group"));
    }

    #[test]
    fn unterminated_header_rejected() {
        let err = parse_keyfile("[W0\nID=0\n").unwrap_err();
        assert!(err.contains("unterminated group header"));
    }

    #[test]
    fn empty_group_name_rejected() {
        let err = parse_keyfile("[]\n").unwrap_err();
        assert!(err.contains("empty group name"));
    }

    #[test]
    fn garbage_line_rejected() {
        let err = parse_keyfile("[W0]\nnot an entry\n").unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn repeated_key_last_wins() {
        let groups = parse_keyfile("[W0]\nID=1\nID=2\n").unwrap();
        assert_eq!(groups[0].get("ID"), Some("2"));
    }

    #[test]
    fn int_list_basic() {
        assert_eq!(parse_int_list("1;2;3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn int_list_trailing_separator() {
        assert_eq!(parse_int_list("10;-1;12;").unwrap(), vec![10, -1, 12]);
    }

    #[test]
    fn int_list_empty() {
        assert_eq!(parse_int_list("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_int_list(";").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn int_list_malformed_entry() {
        let err = parse_int_list("1;x;3").unwrap_err();
        assert!(err.contains("invalid list entry 'x'"));
    }
}
