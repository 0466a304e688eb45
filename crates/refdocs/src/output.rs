//! Terminal output utilities.

use console::{Style, Term};
use refdocs_nav::TreeNode;

/// Terminal output formatter.
///
/// Results go to stdout, status messages to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
    dim: Style,
    bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
            dim: Style::new().dim(),
            bold: Style::new().bold(),
        }
    }

    /// Print command result data.
    pub(crate) fn data(&self, text: &str) {
        let _ = self.out.write_line(text);
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.err.write_line(&self.dim.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a tree as indented text, groups in bold, leaves with their path.
    pub(crate) fn tree(&self, root: &TreeNode) {
        for line in render_tree(root) {
            let styled = match line.kind {
                LineKind::Group => self.bold.apply_to(&line.text).to_string(),
                LineKind::Leaf => line.text,
            };
            self.data(&styled);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Group,
    Leaf,
}

#[derive(Debug, PartialEq, Eq)]
struct TreeLine {
    kind: LineKind,
    text: String,
}

/// Flatten a tree into indented lines, skipping the unlabeled root.
fn render_tree(root: &TreeNode) -> Vec<TreeLine> {
    fn walk(node: &TreeNode, depth: usize, lines: &mut Vec<TreeLine>) {
        let indent = "  ".repeat(depth);
        match node {
            TreeNode::Group { label, children } => {
                lines.push(TreeLine {
                    kind: LineKind::Group,
                    text: format!("{indent}{label}"),
                });
                for child in children {
                    walk(child, depth + 1, lines);
                }
            }
            TreeNode::Leaf(item) => lines.push(TreeLine {
                kind: LineKind::Leaf,
                text: format!("{indent}{}  {}", item.display_name(), item.path),
            }),
        }
    }

    let mut lines = Vec::new();
    for child in root.children() {
        walk(child, 0, &mut lines);
    }
    lines
}
