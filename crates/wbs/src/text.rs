use crate::node::WbsNode;

/// Renders the hierarchy as indented plain text, one node per line.
///
/// Each level indents by two spaces; code and name are separated by two
/// spaces as well.
#[must_use]
pub fn render_text(nodes: &[WbsNode]) -> String {
    let mut out = String::new();
    render_level(nodes, 0, &mut out);
    out
}

fn render_level(nodes: &[WbsNode], depth: usize, out: &mut String) {
    for node in nodes {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&node.code);
        out.push_str("  ");
        out.push_str(&node.name);
        out.push('\n');
        render_level(&node.children, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_hierarchy;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_line_per_node() {
        let text = render_text(&sample_hierarchy());
        assert_eq!(text.lines().count(), 22);
    }

    #[test]
    fn test_indent_follows_depth() {
        let text = render_text(&sample_hierarchy());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "A  Project Planning");
        assert_eq!(lines[2], "  A.2  Requirements Gathering");
        assert_eq!(lines[3], "    A.2.1  User Interviews");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render_text(&[]), "");
    }
}
