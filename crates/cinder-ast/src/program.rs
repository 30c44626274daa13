//! The root node of a compilation unit.

use crate::{AstError, AstResult, Node, NodeBox};
use std::any::Any;

/// A complete compilation unit.
///
/// Owns its top-level children exclusively and keeps them in the order they
/// were attached. The child count is always the length of the body.
#[derive(Debug, Default)]
pub struct Program {
    body: Vec<NodeBox>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a program that takes ownership of an existing body.
    pub fn with_body(body: Vec<NodeBox>) -> Self {
        Self { body }
    }

    /// Build a program from a declared size and a list of slots.
    ///
    /// Every slot must hold a node and the declared size must match the
    /// number of slots. Nothing is constructed if either check fails.
    pub fn from_parts(declared: u64, slots: Vec<Option<NodeBox>>) -> AstResult<Self> {
        let body = check_slots(declared, slots)?;
        tracing::debug!(size = body.len(), "built program body");
        Ok(Self { body })
    }

    /// Append a node to the end of the body.
    pub fn push(&mut self, node: impl Node) {
        self.push_boxed(Box::new(node));
    }

    pub fn push_boxed(&mut self, node: NodeBox) {
        tracing::trace!(
            kind = node.class_name(),
            size = self.body.len() + 1,
            "appended child"
        );
        self.body.push(node);
    }

    /// Attach a batch of slots, validated the same way as [`Program::from_parts`].
    ///
    /// On error the body is left untouched.
    pub fn extend_checked(&mut self, declared: u64, slots: Vec<Option<NodeBox>>) -> AstResult<()> {
        let batch = check_slots(declared, slots)?;
        tracing::debug!(
            added = batch.len(),
            size = self.body.len() + batch.len(),
            "attached children"
        );
        self.body.extend(batch);
        Ok(())
    }

    /// Number of top-level children.
    pub fn body_size(&self) -> u64 {
        self.body.len() as u64
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> &[NodeBox] {
        &self.body
    }

    pub fn get(&self, index: usize) -> Option<&dyn Node> {
        self.body.get(index).map(|node| &**node)
    }

    /// Iterate the children in source order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Node> + '_ {
        self.body.iter().map(|node| &**node)
    }

    pub fn into_body(self) -> Vec<NodeBox> {
        self.body
    }
}

fn check_slots(declared: u64, slots: Vec<Option<NodeBox>>) -> AstResult<Vec<NodeBox>> {
    if let Some(index) = slots.iter().position(Option::is_none) {
        tracing::warn!(index, "rejected body with an empty slot");
        return Err(AstError::MissingChild { index });
    }

    if declared != slots.len() as u64 {
        tracing::warn!(declared, actual = slots.len(), "rejected body with mismatched size");
        return Err(AstError::BodySizeMismatch {
            declared,
            actual: slots.len(),
        });
    }

    Ok(slots.into_iter().flatten().collect())
}

impl Node for Program {
    fn class_name(&self) -> &'static str {
        "Program"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Extend<NodeBox> for Program {
    fn extend<I: IntoIterator<Item = NodeBox>>(&mut self, iter: I) {
        for node in iter {
            self.push_boxed(node);
        }
    }
}

impl FromIterator<NodeBox> for Program {
    fn from_iter<I: IntoIterator<Item = NodeBox>>(iter: I) -> Self {
        Self::with_body(iter.into_iter().collect())
    }
}

impl IntoIterator for Program {
    type Item = NodeBox;
    type IntoIter = std::vec::IntoIter<NodeBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a NodeBox;
    type IntoIter = std::slice::Iter<'a, NodeBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}
