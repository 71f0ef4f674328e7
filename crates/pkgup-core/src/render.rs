//! Text rendering of (filtered) dependency trees.

use console::Style;

use crate::tree::DependencyNode;

/// Display label for a node: `name@version`, followed by the resolved
/// location when the package was installed from a git or URL source.
pub fn label(name: &str, node: &DependencyNode) -> String {
    let mut out = match node.version {
        Some(ref v) => format!("{name}@{v}"),
        None => name.to_string(),
    };
    if let Some(ref from) = node.from {
        if !from.contains('@') {
            if let Some(ref resolved) = node.resolved {
                out.push_str(&format!(" ({resolved})"));
            }
        }
    }
    out
}

/// Render `node` and its descendants as an indented tree.
///
/// Labels of `highlight` (the package being upgraded) are drawn yellow on
/// black when `color` is set.
pub fn render_tree(name: &str, node: &DependencyNode, highlight: &str, color: bool) -> String {
    let renderer = Renderer { highlight, color };
    let mut output = String::new();
    output.push_str(&renderer.label(name, node));
    output.push('\n');
    renderer.children(&mut output, node, "");
    output
}

struct Renderer<'a> {
    highlight: &'a str,
    color: bool,
}

impl Renderer<'_> {
    fn label(&self, name: &str, node: &DependencyNode) -> String {
        let text = label(name, node);
        if self.color && name == self.highlight {
            Style::new()
                .yellow()
                .on_black()
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text
        }
    }

    fn children(&self, output: &mut String, node: &DependencyNode, prefix: &str) {
        let count = node.dependencies.len();
        for (i, (child_name, child)) in node.dependencies.iter().enumerate() {
            let is_last = i == count - 1;
            let connector = if is_last { "└── " } else { "├── " };
            output.push_str(&format!(
                "{prefix}{connector}{}\n",
                self.label(child_name, child)
            ));
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            self.children(output, child, &child_prefix);
        }
    }
}
