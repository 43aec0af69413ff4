use crate::node::WbsNode;

/// Tree styling carried with the markup so the fragment renders standalone.
const STYLE: &str = r#"
.wbs-tree {
    padding: 1rem;
    max-height: 350px;
    overflow-y: auto;
}
.wbs-tree ul {
    list-style: none;
    padding-left: 1.5rem;
}
.wbs-tree li {
    position: relative;
    padding: 0.5rem 0;
}
.wbs-tree li::before {
    content: "";
    position: absolute;
    left: -1rem;
    top: 0;
    width: 1px;
    height: 100%;
    border-left: 1px solid #ddd;
}
.wbs-tree li::after {
    content: "";
    position: absolute;
    left: -1rem;
    top: 1rem;
    width: 0.5rem;
    height: 1px;
    border-top: 1px solid #ddd;
}
.wbs-tree ul > li:last-child::before {
    height: 1rem;
}
.wbs-item {
    display: flex;
    align-items: center;
    background-color: #f8f9fa;
    padding: 0.5rem;
    border-radius: 4px;
    border: 1px solid #eee;
    margin-bottom: 0.25rem;
}
.wbs-code {
    font-weight: bold;
    margin-right: 0.5rem;
    color: #3498db;
    flex-shrink: 0;
}
.wbs-name {
    flex-grow: 1;
    overflow: hidden;
    text-overflow: ellipsis;
}
"#;

const NOTE: &str = "Note: This is sample data for demonstration. \
     A full WBS hierarchy would be implemented for a production environment.";

/// Renders the hierarchy as a self-contained HTML fragment.
///
/// Output order is the style block, the tree itself, then a note marking the
/// data as demonstration content. Codes and names are escaped.
pub fn render_html(nodes: &[WbsNode], out: &mut String) {
    out.push_str("<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n");
    out.push_str("<div class=\"wbs-tree\">\n");
    render_list(nodes, out);
    out.push_str("</div>\n");
    out.push_str("<p class=\"text-sm text-gray-500 mt-4\">");
    out.push_str(NOTE);
    out.push_str("</p>\n");
}

/// [render_html] into a fresh string.
#[must_use]
pub fn to_html(nodes: &[WbsNode]) -> String {
    let mut out = String::new();
    render_html(nodes, &mut out);
    out
}

fn render_list(nodes: &[WbsNode], out: &mut String) {
    out.push_str("<ul>\n");
    for node in nodes {
        out.push_str("<li><div class=\"wbs-item\"><span class=\"wbs-code\">");
        push_escaped(&node.code, out);
        out.push_str("</span><span class=\"wbs-name\">");
        push_escaped(&node.name, out);
        out.push_str("</span></div>");
        if !node.children.is_empty() {
            out.push('\n');
            render_list(&node.children, out);
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
