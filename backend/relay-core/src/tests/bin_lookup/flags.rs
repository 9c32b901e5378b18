use crate::bin_lookup::FlagTable;

use models::DEFAULT_FLAG;

use std::collections::HashMap;

/// **VALUE**: Verifies known countries map to their flag and unknown ones to the white flag.
///
/// **WHY THIS MATTERS**: Every `/gen` reply ends with a flag glyph.
///
/// **BUG THIS CATCHES**: Would catch a missing fallback that renders an empty string.
#[test]
fn given_builtin_table_when_looking_up_then_known_and_unknown_resolve() {
    let table = FlagTable::builtin();

    assert_eq!(table.lookup("FRANCE"), "🇫🇷");
    assert_eq!(table.lookup("UNITED STATES"), "🇺🇸");
    assert_eq!(table.lookup("ATLANTIS"), DEFAULT_FLAG);
    assert_eq!(table.lookup("NOT FOUND"), DEFAULT_FLAG);
    assert_eq!(table.len(), 9);
}

/// **VALUE**: Verifies config-supplied entries are normalized and merged.
///
/// **WHY THIS MATTERS**: Operators add countries in TOML using whatever casing they like.
///
/// **BUG THIS CATCHES**: Would catch extra keys stored without upper-casing, which would
/// never match the upper-cased lookup key.
#[test]
fn given_extra_entries_when_merged_then_lookup_is_uppercase_keyed() {
    let mut extra = HashMap::new();
    extra.insert(" italy ".to_string(), "🇮🇹".to_string());

    let table = FlagTable::builtin().with_extra(&extra);

    assert_eq!(table.lookup("ITALY"), "🇮🇹");
    assert_eq!(table.lookup("FRANCE"), "🇫🇷");
    assert_eq!(table.len(), 10);
}
