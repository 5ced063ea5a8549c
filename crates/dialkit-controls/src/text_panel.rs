//! Line-oriented panel renderer.
//!
//! [`TextPanel`] sits on the engine's renderer boundary: it consumes render
//! passes (state map + tree + dirty set), walks composites recursively in
//! authored child order, resolves each node's [`Paint`] capability from the
//! registry snapshot, and maintains a flat list of visible rows.
//!
//! On an invalidation pass only the dirty nodes are repainted. A dirty
//! composite re-walks its whole subtree — its expansion state may have
//! changed which rows exist at all — and the fresh rows are spliced over
//! the stale span. Nodes hidden inside a collapsed ancestor produce no
//! rows; their state is still current in the store and paints on expand.

use std::collections::HashSet;

use dialkit_core::{RenderPass, TreeNode};

use crate::{Paint, PaintCtx};

/// Indentation guide style, selected by panel class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guides {
    /// Unicode guides (default): `│ `.
    #[default]
    Unicode,
    /// ASCII guides for dumb terminals: `| `.
    Ascii,
}

impl Guides {
    /// One indentation segment.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Unicode => "\u{2502} ",
            Self::Ascii => "| ",
        }
    }

    fn from_class_names(names: &[String]) -> Self {
        if names.iter().any(|name| name == "dial-ascii") {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

/// One visible row of panel output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Id of the node this row paints.
    pub id: String,
    /// Nesting depth (number of indentation segments).
    pub depth: usize,
    /// Painted text, without indentation.
    pub text: String,
}

/// A renderer maintaining the panel as a flat list of text rows.
#[derive(Debug, Default)]
pub struct TextPanel {
    rows: Vec<Row>,
    guides: Guides,
}

impl TextPanel {
    /// Create an empty renderer; rows appear on the first pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one render pass, repainting exactly the dirty nodes.
    pub fn apply(&mut self, pass: &RenderPass<'_>) {
        self.guides = Guides::from_class_names(pass.class_names);
        for id in pass.dirty.iter() {
            self.repaint(id, pass);
        }
    }

    /// Current rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the row painting `id`, when visible.
    #[must_use]
    pub fn row_index(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Render all rows to indented lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| format!("{}{}", self.guides.segment().repeat(row.depth), row.text))
            .collect()
    }

    fn repaint(&mut self, id: &str, pass: &RenderPass<'_>) {
        let Some(node) = pass.root.find(id) else {
            return;
        };

        match self.row_index(id) {
            Some(start) => {
                let depth = self.rows[start].depth;
                let mut subtree = HashSet::new();
                collect_ids(node, &mut subtree);
                let stale = self.rows[start..]
                    .iter()
                    .take_while(|row| subtree.contains(row.id.as_str()))
                    .count();

                let mut fresh = Vec::new();
                build_rows(node, pass, depth, &mut fresh);
                self.rows.splice(start..start + stale, fresh);
            }
            None if id == pass.root.id() => {
                // Initial pass (or a full repaint request at the root).
                let mut fresh = Vec::new();
                build_rows(node, pass, 0, &mut fresh);
                self.rows = fresh;
            }
            None => {
                // Hidden inside a collapsed ancestor; nothing visible to do.
            }
        }
    }
}

fn collect_ids<'a>(node: &'a TreeNode, out: &mut HashSet<&'a str>) {
    out.insert(node.id());
    for child in node.children() {
        collect_ids(child, out);
    }
}

fn build_rows(node: &TreeNode, pass: &RenderPass<'_>, depth: usize, out: &mut Vec<Row>) {
    let Some(state) = pass.store.state(node.id()) else {
        return;
    };
    let text = pass
        .registry
        .resolve(node.control())
        .and_then(|def| def.render_as::<Paint>())
        .map(|paint| paint.paint(&PaintCtx { node, state }))
        .unwrap_or_else(|| format!("[{}]", node.control()));
    out.push(Row {
        id: node.id().to_owned(),
        depth,
        text,
    });

    if node.is_composite() && state.as_bool("expanded").unwrap_or(true) {
        for child in node.children() {
            build_rows(child, pass, depth + 1, out);
        }
    }
}
