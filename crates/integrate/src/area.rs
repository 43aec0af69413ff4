/// Derive an area label from a WBS code
///
/// Pure substring checks with ad hoc precedence; the first hit inside a level
/// branch wins. Codes mentioning neither level read as "Unknown".
pub(crate) fn area_label(wbs_code: &str) -> &'static str {
    if wbs_code.contains("L1") {
        if wbs_code.contains("STRUCT-WALL") {
            "Perimeter"
        } else if wbs_code.contains("STRUCT-COL") {
            "Interior"
        } else if wbs_code.contains("STRUCT-SLAB") {
            "Base Level"
        } else if wbs_code.contains("ARCH-DOOR") {
            "Interior"
        } else if wbs_code.contains("IT-RACK") {
            "Server Room 1"
        } else if wbs_code.contains("MEP") {
            "All Areas"
        } else {
            "Level 1"
        }
    } else if wbs_code.contains("L2") {
        if wbs_code.contains("STRUCT-SLAB") {
            "All Areas"
        } else if wbs_code.contains("STRUCT-WALL") {
            "Interior/Perimeter"
        } else if wbs_code.contains("IT-RACK") {
            "Server Room 2"
        } else if wbs_code.contains("MEP") {
            "All Areas"
        } else {
            "Level 2"
        }
    } else {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_chain() {
        assert_eq!(area_label("DC-L1-STRUCT-WALL"), "Perimeter");
        assert_eq!(area_label("DC-L1-STRUCT-COL"), "Interior");
        assert_eq!(area_label("DC-L1-STRUCT-SLAB"), "Base Level");
        assert_eq!(area_label("DC-L1-ARCH-DOOR"), "Interior");
        assert_eq!(area_label("DC-L1-IT-RACK"), "Server Room 1");
        assert_eq!(area_label("DC-L1-MEP-HVAC"), "All Areas");
        assert_eq!(area_label("DC-L1-SITE"), "Level 1");
    }

    #[test]
    fn test_level_two_chain() {
        assert_eq!(area_label("DC-L2-STRUCT-SLAB"), "All Areas");
        assert_eq!(area_label("DC-L2-STRUCT-WALL"), "Interior/Perimeter");
        assert_eq!(area_label("DC-L2-IT-RACK"), "Server Room 2");
        assert_eq!(area_label("DC-L2-MEP-ELEC"), "All Areas");
        assert_eq!(area_label("DC-L2-FINISH"), "Level 2");
    }

    #[test]
    fn test_unrecognized_code() {
        assert_eq!(area_label("SITE-PREP"), "Unknown");
        assert_eq!(area_label(""), "Unknown");
    }

    #[test]
    fn test_substring_checks_cut_through_words() {
        // "HALL1" contains "L1", so the level-one branch claims it
        assert_eq!(area_label("DC-HALL1-MEP-HVAC"), "All Areas");
    }

    #[test]
    fn test_level_one_checked_before_level_two() {
        assert_eq!(area_label("DC-L1-L2-IT-RACK"), "Server Room 1");
    }
}
