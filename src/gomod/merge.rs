use crate::gomod::entry::Requirements;

/// A target dependency whose version was overwritten from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub name: String,
    pub from: String,
    pub to: String,
}

/// Copies versions from `source` onto the dependencies `target` already has.
///
/// The target keeps its own dependency set and order. Source-only entries are
/// ignored. Returns the entries whose version actually changed, in target
/// order.
pub fn merge_versions(target: &mut Requirements, source: &Requirements) -> Vec<VersionChange> {
    let mut changes = Vec::new();

    for name in target.names().to_vec() {
        let Some(version) = source.get(&name) else {
            log::debug!("{} not pinned in source, keeping target version", name);
            continue;
        };

        if let Some(previous) = target.replace_version(&name, version)
            && previous != version
        {
            changes.push(VersionChange {
                to: version.to_string(),
                from: previous,
                name,
            });
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomod::entry::parse_entries;

    #[test]
    fn test_merge_overwrites_matching_and_ignores_source_only() {
        let mut target = parse_entries("\tmoduleA v1.0.0\n\tmoduleB v2.0.0\n").unwrap();
        let source = parse_entries("\tmoduleA v1.5.0\n\tmoduleC v9.9.9\n").unwrap();

        let changes = merge_versions(&mut target, &source);

        assert_eq!(target.names(), ["moduleA", "moduleB"]);
        assert_eq!(target.get("moduleA"), Some("v1.5.0"));
        assert_eq!(target.get("moduleB"), Some("v2.0.0"));
        assert_eq!(target.get("moduleC"), None);
        assert_eq!(
            changes,
            vec![VersionChange {
                name: "moduleA".into(),
                from: "v1.0.0".into(),
                to: "v1.5.0".into(),
            }]
        );
    }

    #[test]
    fn test_merge_keeps_target_order() {
        let mut target = parse_entries("\tc v1\n\ta v1\n\tb v1\n").unwrap();
        let source = parse_entries("\ta v2\n\tb v2\n\tc v2\n").unwrap();

        merge_versions(&mut target, &source);

        let merged: Vec<_> = target.iter().collect();
        assert_eq!(merged, vec![("c", "v2"), ("a", "v2"), ("b", "v2")]);
    }

    #[test]
    fn test_merge_copies_version_suffix_verbatim() {
        let mut target = parse_entries("\tx v1.0.0\n").unwrap();
        let source = parse_entries("\tx v1.2.0 // indirect\n").unwrap();

        merge_versions(&mut target, &source);

        assert_eq!(target.get("x"), Some("v1.2.0 // indirect"));
    }

    #[test]
    fn test_merge_with_itself_is_noop() {
        let original = parse_entries("\ta v1\n\tb v2 // indirect\n").unwrap();
        let mut target = original.clone();

        let changes = merge_versions(&mut target, &original);

        assert!(changes.is_empty());
        assert_eq!(target, original);
    }

    #[test]
    fn test_merge_with_empty_source() {
        let mut target = parse_entries("\ta v1\n").unwrap();
        let changes = merge_versions(&mut target, &Requirements::new());

        assert!(changes.is_empty());
        assert_eq!(target.get("a"), Some("v1"));
    }
}
