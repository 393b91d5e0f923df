use super::basis::Basis;
use std::collections::VecDeque;

/// Adjacency view of the basis as a bipartite spanning tree.
///
/// Nodes `0..rows` are rows and `rows..rows + cols` are columns; every
/// basic cell is an undirected edge labelled with its basis slot. Rebuilt
/// from scratch after every pivot.
#[derive(Debug, Clone)]
pub struct Tree {
    rows: usize,
    edges: Vec<Vec<(usize, usize)>>,
}

/// How a traversal reached a node: from which node, across which slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub node: usize,
    pub parent: usize,
    pub slot: usize,
}

impl From<&Basis> for Tree {
    fn from(basis: &Basis) -> Self {
        let rows = basis.rows();
        let mut edges = vec![Vec::new(); rows + basis.cols()];
        for (slot, cell) in basis.cells().iter().enumerate() {
            let r = cell.row;
            let c = rows + cell.col;
            edges[r].push((c, slot));
            edges[c].push((r, slot));
        }
        Self { rows, edges }
    }
}

impl Tree {
    pub fn row(&self, i: usize) -> usize {
        i
    }
    pub fn col(&self, j: usize) -> usize {
        self.rows + j
    }
    pub fn is_row(&self, node: usize) -> bool {
        node < self.rows
    }
    pub fn nodes(&self) -> usize {
        self.edges.len()
    }
    /// Breadth-first traversal from `root`, one step per reached node.
    ///
    /// A basis that spans every node yields `nodes() - 1` steps.
    pub fn walk(&self, root: usize) -> Vec<Step> {
        let mut seen = vec![false; self.nodes()];
        let mut queue = VecDeque::from([root]);
        let mut steps = Vec::with_capacity(self.nodes());
        seen[root] = true;
        while let Some(parent) = queue.pop_front() {
            for &(node, slot) in self.edges[parent].iter() {
                if !seen[node] {
                    seen[node] = true;
                    queue.push_back(node);
                    steps.push(Step { node, parent, slot });
                }
            }
        }
        steps
    }
    /// Slots along the unique tree path from `from` to `to`, in order.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let mut back = vec![None; self.nodes()];
        for step in self.walk(from) {
            back[step.node] = Some((step.parent, step.slot));
        }
        let mut path = Vec::new();
        let mut node = to;
        while node != from {
            let (parent, slot) = back[node]?;
            path.push(slot);
            node = parent;
        }
        path.reverse();
        Some(path)
    }
}
