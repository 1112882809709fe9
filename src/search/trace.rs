//! Search-tree trace for diagnostic display
//!
//! The searcher reports to a [`SearchObserver`] at three extension points:
//! node created, edge created and node pruned (plus value/bound refreshes).
//! [`NoTrace`] ignores everything; [`Trace`] records a serializable tree.
//! Observers never influence the search result.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Score;

/// Identifier of a node, unique within one top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// Side to move at a decision node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Max,
    Min,
}

impl Role {
    #[inline]
    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Role::Max
        } else {
            Role::Min
        }
    }
}

/// What a node represents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// Full board, valued by the aligned-four differential
    Terminal,
    /// Horizon, valued by the window heuristic
    Heuristic,
    /// A player chooses a column
    Decision { role: Role },
    /// Stochastic execution of an intended column
    Chance {
        intended: u8,
        probabilities: [f64; 3],
    },
    /// Stochastic outcome landing off the board or on a full column
    Blocked,
}

/// Label of a parent-to-child edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeLabel {
    /// Column chosen by a player
    Column { column: u8 },
    /// Column actually played, with its probability. May lie off the board.
    Outcome { column: i16, probability: f64 },
}

/// Extension points invoked by the searcher.
pub trait SearchObserver {
    fn node_created(&mut self, _id: NodeId, _kind: &NodeKind, _depth: u8) {}

    fn edge_created(&mut self, _from: NodeId, _to: NodeId, _label: EdgeLabel) {}

    /// Running best (decision), expected value (chance) or leaf value
    fn value_updated(&mut self, _id: NodeId, _value: Score) {}

    /// Current alpha-beta window of a decision node
    fn bounds_updated(&mut self, _id: NodeId, _alpha: Score, _beta: Score) {}

    /// Search at `id` stopped after `cutoff_child`; `skipped` columns were never explored.
    fn node_pruned(&mut self, _id: NodeId, _cutoff_child: NodeId, _skipped: &[u8]) {}
}

/// Observer that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl SearchObserver for NoTrace {}

/// Recorded node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub depth: u8,
    pub value: Option<Score>,
    pub alpha: Option<Score>,
    pub beta: Option<Score>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<u8>,
}

/// Recorded edge. `pruned` marks the edge after which siblings were cut off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub label: EdgeLabel,
    pub pruned: bool,
}

/// Root annotation filled in by the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceSummary {
    pub algorithm: String,
    pub depth: u8,
    /// Root value, absent when no search ran
    pub value: Option<Score>,
    pub column: Option<u8>,
}

/// Tree explored by one top-level search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    pub nodes: BTreeMap<NodeId, TraceNode>,
    pub edges: Vec<TraceEdge>,
    pub summary: Option<TraceSummary>,
}

impl Trace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root node id. Ids are allocated from zero, so the root is always 0.
    pub fn root(&self) -> Option<NodeId> {
        self.nodes.keys().next().copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&TraceNode> {
        self.nodes.get(&id)
    }

    /// Outgoing edges of a node in exploration order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TraceEdge> + '_ {
        self.edges.iter().filter(move |e| e.from == id)
    }

    pub fn pruned_edges(&self) -> impl Iterator<Item = &TraceEdge> + '_ {
        self.edges.iter().filter(|e| e.pruned)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_summary(&mut self, summary: TraceSummary) {
        self.summary = Some(summary);
    }

    /// Pretty-printed JSON for external viewers
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl SearchObserver for Trace {
    fn node_created(&mut self, id: NodeId, kind: &NodeKind, depth: u8) {
        self.nodes.insert(
            id,
            TraceNode {
                kind: kind.clone(),
                depth,
                value: None,
                alpha: None,
                beta: None,
                skipped: Vec::new(),
            },
        );
    }

    fn edge_created(&mut self, from: NodeId, to: NodeId, label: EdgeLabel) {
        self.edges.push(TraceEdge {
            from,
            to,
            label,
            pruned: false,
        });
    }

    fn value_updated(&mut self, id: NodeId, value: Score) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.value = Some(value);
        }
    }

    fn bounds_updated(&mut self, id: NodeId, alpha: Score, beta: Score) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.alpha = Some(alpha);
            node.beta = Some(beta);
        }
    }

    fn node_pruned(&mut self, id: NodeId, cutoff_child: NodeId, skipped: &[u8]) {
        if let Some(edge) = self
            .edges
            .iter_mut()
            .rev()
            .find(|e| e.from == id && e.to == cutoff_child)
        {
            edge.pruned = true;
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.skipped = skipped.to_vec();
        }
    }
}
