//! Depth-first traversal that turns text leaves into [`TextRun`]s.

use crate::error::Result;
use crate::model::{NodeKind, NodeView, TextRun};

use super::fonts::FontLoader;
use super::options::{ErrorMode, ExtractOptions};
use super::resolve::resolve_run;

/// Walks a forest of visual nodes and collects one run per text leaf.
///
/// Output is in pre-order traversal order, not reading order. Nodes are
/// resolved strictly one after another, so the output is deterministic
/// regardless of how the font loader schedules its work.
pub struct TreeWalker<'a, L> {
    loader: &'a mut L,
    options: ExtractOptions,
    skipped: usize,
}

impl<'a, L: FontLoader> TreeWalker<'a, L> {
    /// Create a walker with default (lenient) options.
    pub fn new(loader: &'a mut L) -> Self {
        Self::with_options(loader, ExtractOptions::default())
    }

    /// Create a walker with custom options.
    pub fn with_options(loader: &'a mut L, options: ExtractOptions) -> Self {
        Self {
            loader,
            options,
            skipped: 0,
        }
    }

    /// Number of text nodes skipped by the last [`extract`](Self::extract)
    /// because their attributes failed to resolve.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Extract runs from `roots` and everything beneath them.
    ///
    /// In lenient mode this never fails: a node whose resolution fails is
    /// logged and skipped, whatever the error. In strict mode the first
    /// failure is returned.
    pub async fn extract<N: NodeView>(&mut self, roots: &[N]) -> Result<Vec<TextRun>> {
        self.skipped = 0;
        let mut runs = Vec::new();
        let mut stack: Vec<&N> = roots.iter().rev().collect();

        while let Some(node) = stack.pop() {
            match node.kind() {
                NodeKind::Text => {
                    match resolve_run(node, &mut *self.loader, &self.options).await {
                        Ok(run) => runs.push(run),
                        Err(e) => {
                            if self.options.error_mode == ErrorMode::Strict {
                                return Err(e);
                            }
                            log::warn!("Text error \"{}\": {}", node.characters(), e);
                            self.skipped += 1;
                        }
                    }
                }
                NodeKind::Container => stack.extend(node.children().iter().rev()),
                NodeKind::Other => {}
            }
        }

        log::debug!(
            "Extracted {} text runs ({} skipped)",
            runs.len(),
            self.skipped
        );
        Ok(runs)
    }
}

/// Extract text runs leniently with default options.
pub async fn extract_text_runs<N, L>(roots: &[N], loader: &mut L) -> Vec<TextRun>
where
    N: NodeView,
    L: FontLoader,
{
    let mut walker = TreeWalker::new(loader);
    // Lenient extraction has no failure path.
    walker.extract(roots).await.unwrap_or_default()
}
