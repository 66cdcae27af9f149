//! Hierarchy queries over a flat node sequence.

use std::ops::Range;

use super::types::Node;

/// A node position in a reconstructed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Index into the document's node sequence.
    pub index: usize,
    pub children: Vec<OutlineNode>,
}

/// Index range covering `nodes[index]` and all of its descendants.
///
/// The descendants are the maximal contiguous run of following nodes whose
/// level is strictly greater than the node's own level. Skipped levels
/// (an H1 followed directly by an H3) need no special handling.
pub fn subtree_range(nodes: &[Node], index: usize) -> Range<usize> {
    let Some(root) = nodes.get(index) else {
        return index..index;
    };

    let end = nodes[index + 1..]
        .iter()
        .position(|n| n.level <= root.level)
        .map_or(nodes.len(), |offset| index + 1 + offset);

    index..end
}

/// Index of the nearest preceding node with a strictly smaller level.
pub fn parent_index(nodes: &[Node], index: usize) -> Option<usize> {
    let level = nodes.get(index)?.level;
    nodes[..index].iter().rposition(|n| n.level < level)
}

/// Rebuild the nested hierarchy from the flat sequence.
///
/// Uses a stack of open nodes: entries at the same or a deeper level than the
/// incoming node are closed and attached to their parent first.
pub fn build_outline(nodes: &[Node]) -> Vec<OutlineNode> {
    let mut roots: Vec<OutlineNode> = Vec::new();
    let mut stack: Vec<(u8, OutlineNode)> = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        while stack.last().is_some_and(|(level, _)| *level >= node.level) {
            if let Some((_, finished)) = stack.pop() {
                attach(&mut stack, &mut roots, finished);
            }
        }
        stack.push((node.level, OutlineNode { index, children: Vec::new() }));
    }

    while let Some((_, finished)) = stack.pop() {
        attach(&mut stack, &mut roots, finished);
    }

    roots
}

/// Pre-order indices of a hierarchy; the inverse of [`build_outline`].
pub fn flatten_outline(outline: &[OutlineNode]) -> Vec<usize> {
    let mut out = Vec::new();
    for node in outline {
        out.push(node.index);
        out.extend(flatten_outline(&node.children));
    }
    out
}

fn attach(stack: &mut [(u8, OutlineNode)], roots: &mut Vec<OutlineNode>, node: OutlineNode) {
    match stack.last_mut() {
        Some((_, parent)) => parent.children.push(node),
        None => roots.push(node),
    }
}
