use crate::node::WbsNode;

/// The fixed sample hierarchy shown when no data is available
///
/// Three phases, 22 nodes. Demonstration data only; a real hierarchy would
/// come from the schedule.
#[must_use]
pub fn sample_hierarchy() -> Vec<WbsNode> {
    vec![
        WbsNode::branch(
            "A",
            "Project Planning",
            vec![
                WbsNode::leaf("A.1", "Project Initiation"),
                WbsNode::branch(
                    "A.2",
                    "Requirements Gathering",
                    vec![
                        WbsNode::leaf("A.2.1", "User Interviews"),
                        WbsNode::leaf("A.2.2", "Market Research"),
                    ],
                ),
                WbsNode::leaf("A.3", "Project Charter"),
            ],
        ),
        WbsNode::branch(
            "B",
            "Design Phase",
            vec![
                WbsNode::leaf("B.1", "Architectural Design"),
                WbsNode::leaf("B.2", "Structural Design"),
                WbsNode::branch(
                    "B.3",
                    "MEP Design",
                    vec![
                        WbsNode::leaf("B.3.1", "Mechanical"),
                        WbsNode::leaf("B.3.2", "Electrical"),
                        WbsNode::leaf("B.3.3", "Plumbing"),
                    ],
                ),
            ],
        ),
        WbsNode::branch(
            "C",
            "Construction Phase",
            vec![
                WbsNode::leaf("C.1", "Site Preparation"),
                WbsNode::leaf("C.2", "Foundation Work"),
                WbsNode::leaf("C.3", "Structural Framework"),
                WbsNode::branch(
                    "C.4",
                    "Interior Work",
                    vec![
                        WbsNode::leaf("C.4.1", "Walls & Partitions"),
                        WbsNode::leaf("C.4.2", "Electrical Works"),
                        WbsNode::leaf("C.4.3", "Plumbing Works"),
                        WbsNode::leaf("C.4.4", "HVAC Installation"),
                    ],
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape_is_fixed() {
        let roots = sample_hierarchy();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots.iter().map(WbsNode::count).sum::<usize>(), 22);
        assert_eq!(roots.iter().map(WbsNode::depth).max(), Some(3));

        assert_eq!(roots[0].code, "A");
        assert_eq!(roots[1].children[2].children.len(), 3);
        assert_eq!(roots[2].children[3].children[3].name, "HVAC Installation");
    }
}
