//! Tests for category identifiers, parsing and hints

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilepack::PackError;
    use tilepack::policy::Category;

    // Tests every category parses back from its identifier
    // Verified by swapping two identifiers in id()
    #[test]
    fn test_category_id_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.id().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    // Tests identifiers match the archive naming used by the packs
    // Verified by renaming terrain_basic to terrain
    #[test]
    fn test_category_ids() {
        assert_eq!(Category::Terrain.id(), "terrain_basic");
        assert_eq!(Category::Structure.id(), "structure");
        assert_eq!(Category::Liquid.id(), "liquid");
        assert_eq!(Category::NatureProp.id(), "nature_prop");
        assert_eq!(Category::NatureProp.to_string(), "nature_prop");
    }

    // Tests unknown identifiers are rejected with the offending value
    // Verified by defaulting unknown ids to Structure
    #[test]
    fn test_unknown_category_rejected() {
        let err = "lava".parse::<Category>().unwrap_err();
        match err {
            PackError::UnknownCategory { value } => assert_eq!(value, "lava"),
            other => unreachable!("Expected UnknownCategory, got {other:?}"),
        }

        assert!("Terrain_Basic".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    // Tests each category has its own non-empty hint
    // Verified by returning the same hint for liquid and terrain
    #[test]
    fn test_category_hints_are_distinct() {
        let hints: HashSet<&str> = Category::ALL.into_iter().map(Category::hint).collect();
        assert_eq!(hints.len(), Category::ALL.len());
        assert!(hints.iter().all(|hint| !hint.is_empty()));
        assert!(Category::Terrain.hint().contains("3x3"));
        assert!(Category::Liquid.hint().contains("sprite sheet"));
    }
}
