//! Search module for the Connect Four AI
//!
//! Contains:
//! - Move simulation with scoped undo
//! - Terminal and horizon leaf detection
//! - Plain minimax, minimax with alpha-beta pruning and expected minimax
//! - An optional trace observer recording the explored tree
//!
//! All strategies share one [`Searcher`], which explores a single board in
//! place: every simulated move is undone before the recursive call returns.

pub mod alphabeta;
pub mod expectimax;
pub mod leaf;
pub mod minimax;
pub mod simulate;
pub mod trace;

pub use expectimax::{expected_value, Slip, SLIPS};
pub use leaf::{classify, Leaf};
pub use simulate::{simulate, undo, Simulated};
pub use trace::{
    EdgeLabel, NoTrace, NodeId, NodeKind, Role, SearchObserver, Trace, TraceEdge, TraceNode,
    TraceSummary,
};

use crate::board::{Board, Disc};

/// Search values. Leaves are integral, expected values are fractional.
pub type Score = f64;

/// Unbounded score for initial best values and alpha-beta windows
pub const INF: Score = f64::INFINITY;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best column at the root, `None` when the root is a leaf
    pub best_move: Option<u8>,
    /// Backed-up value of the root
    pub score: Score,
    /// Depth requested
    pub depth: u8,
    /// Positions visited (decision and leaf nodes)
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

/// Edge leading into a node about to be created
#[derive(Debug, Clone, Copy)]
pub(crate) struct Link {
    pub parent: NodeId,
    pub label: EdgeLabel,
}

/// A freshly entered node: its id and, for leaves, its value.
pub(crate) struct Entered {
    pub id: NodeId,
    pub leaf_value: Option<Score>,
}

/// Game-tree searcher shared by the three strategies.
///
/// The maximizing side is fixed at construction; its opponent minimizes.
/// Pass a [`Trace`] as observer to record the explored tree.
pub struct Searcher<O: SearchObserver = NoTrace> {
    maximizer: Disc,
    nodes: u64,
    cutoffs: u64,
    next_id: u64,
    observer: O,
}

impl Searcher<NoTrace> {
    /// Searcher without tracing.
    ///
    /// # Example
    ///
    /// ```
    /// use connect_four::board::{Board, Disc};
    /// use connect_four::search::Searcher;
    ///
    /// let mut board = Board::new();
    /// let result = Searcher::new(Disc::Yellow).alpha_beta(&mut board, 3);
    /// assert!(result.best_move.is_some());
    /// ```
    #[must_use]
    pub fn new(maximizer: Disc) -> Self {
        Self::with_observer(maximizer, NoTrace)
    }
}

impl<O: SearchObserver> Searcher<O> {
    #[must_use]
    pub fn with_observer(maximizer: Disc, observer: O) -> Self {
        debug_assert_ne!(maximizer, Disc::Empty);
        Self {
            maximizer,
            nodes: 0,
            cutoffs: 0,
            next_id: 0,
            observer,
        }
    }

    #[inline]
    pub fn maximizer(&self) -> Disc {
        self.maximizer
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Disc placed by the side to move
    #[inline]
    fn player(&self, maximizing: bool) -> Disc {
        if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        }
    }

    /// Reset per-call counters.
    fn begin(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
        self.next_id = 0;
    }

    fn finish(&self, score: Score, best_move: Option<u8>, depth: u8) -> SearchResult {
        log::debug!(
            "search depth {depth}: value {score}, column {best_move:?}, {} nodes, {} cutoffs",
            self.nodes,
            self.cutoffs
        );
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    /// Id the next created node will receive
    #[inline]
    fn peek_id(&self) -> NodeId {
        NodeId(self.next_id)
    }

    #[inline]
    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Open a trace-only node (chance or blocked outcome) and link it.
    fn open_aux(&mut self, kind: NodeKind, depth: u8, link: Link) -> NodeId {
        let id = self.alloc_id();
        self.observer.node_created(id, &kind, depth);
        self.observer.edge_created(link.parent, id, link.label);
        id
    }

    /// Enter a position: count it, classify it and report it to the observer.
    fn enter(&mut self, board: &Board, depth: u8, maximizing: bool, link: Option<Link>) -> Entered {
        self.nodes += 1;
        let id = self.alloc_id();
        let (kind, leaf_value) = match classify(board, depth, self.maximizer) {
            Some((Leaf::Terminal, value)) => (NodeKind::Terminal, Some(value)),
            Some((Leaf::Horizon, value)) => (NodeKind::Heuristic, Some(value)),
            None => (
                NodeKind::Decision {
                    role: Role::from_maximizing(maximizing),
                },
                None,
            ),
        };
        self.observer.node_created(id, &kind, depth);
        if let Some(link) = link {
            self.observer.edge_created(link.parent, id, link.label);
        }
        if let Some(value) = leaf_value {
            self.observer.value_updated(id, value);
        }
        Entered { id, leaf_value }
    }
}

/// Strict improvement: ties keep the earlier column.
#[inline]
fn improves(score: Score, best: Score, maximizing: bool) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improves_is_strict() {
        assert!(improves(1.0, 0.0, true));
        assert!(!improves(0.0, 0.0, true));
        assert!(improves(-1.0, 0.0, false));
        assert!(!improves(0.0, 0.0, false));
        assert!(improves(-5.0, -INF, true));
        assert!(improves(5.0, INF, false));
    }

    #[test]
    fn test_player_roles() {
        let searcher = Searcher::new(Disc::Red);
        assert_eq!(searcher.player(true), Disc::Red);
        assert_eq!(searcher.player(false), Disc::Yellow);
    }

    #[test]
    fn test_counters_reset_between_searches() {
        let mut board = Board::new();
        let mut searcher = Searcher::new(Disc::Yellow);
        let first = searcher.minimax(&mut board, 2);
        let second = searcher.minimax(&mut board, 2);
        assert_eq!(first, second);
        // root + 7 + 49
        assert_eq!(first.nodes, 57);
    }

    #[test]
    fn test_node_ids_past_u32_range() {
        let mut searcher = Searcher::new(Disc::Yellow);
        searcher.next_id = u64::from(u32::MAX);
        assert_eq!(searcher.alloc_id(), NodeId(u64::from(u32::MAX)));
        assert_eq!(searcher.alloc_id(), NodeId(u64::from(u32::MAX) + 1));
    }

    #[test]
    fn test_node_ids_follow_node_count() {
        let mut board = Board::new();
        let mut searcher = Searcher::with_observer(Disc::Yellow, Trace::new());
        let result = searcher.minimax(&mut board, 2);
        let trace = searcher.into_observer();
        let last = trace.nodes.keys().next_back().unwrap().0;
        assert_eq!(last + 1, result.nodes);
    }
}
