//! Expected minimax with unreliable execution of the maximizer's moves
//!
//! When the maximizer picks column `c`, the disc actually lands in `c` with
//! probability 0.6 and in each neighbour with probability 0.2. A neighbour that
//! is off the board or full is a blocked outcome worth 0. The three outcomes
//! are siblings at the same depth; depth is consumed only when descending into
//! the opponent's node. The opponent plays deterministically.

use crate::board::Board;

use super::{
    improves, EdgeLabel, Link, NodeId, NodeKind, Score, SearchObserver, SearchResult, Searcher,
    Simulated, INF,
};

/// One possible execution of an intended column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slip {
    /// Column offset from the intended column
    pub offset: i8,
    pub probability: f64,
}

/// Outcome distribution of an intended move, intended column first.
pub const SLIPS: [Slip; 3] = [
    Slip {
        offset: 0,
        probability: 0.6,
    },
    Slip {
        offset: -1,
        probability: 0.2,
    },
    Slip {
        offset: 1,
        probability: 0.2,
    },
];

/// Value of a blocked outcome
const BLOCKED_SCORE: Score = 0.0;

/// Probability-weighted sum of `(probability, value)` branches.
#[inline]
pub fn expected_value(branches: &[(f64, Score)]) -> Score {
    branches.iter().map(|&(p, v)| p * v).sum()
}

impl<O: SearchObserver> Searcher<O> {
    /// Expected minimax, maximizer to move.
    ///
    /// Deterministic: probabilities are fixed weights, nothing is sampled.
    #[must_use]
    pub fn expected_minimax(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.begin();
        let (score, best_move) = self.expected_node(board, depth, true, None);
        self.finish(score, best_move, depth)
    }

    fn expected_node(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        link: Option<Link>,
    ) -> (Score, Option<u8>) {
        let node = self.enter(board, depth, maximizing, link);
        if let Some(value) = node.leaf_value {
            return (value, None);
        }

        let moves = board.valid_moves();
        let mut best_move = moves.first().copied();
        let mut best_score = if maximizing { -INF } else { INF };

        for col in moves {
            let score = if maximizing {
                self.chance_node(board, depth, col, node.id)
            } else {
                let link = Link {
                    parent: node.id,
                    label: EdgeLabel::Column { column: col },
                };
                let disc = self.player(false);
                let Some(mut child) = Simulated::apply(board, col, disc) else {
                    continue;
                };
                self.expected_node(&mut child, depth - 1, true, Some(link)).0
            };

            if improves(score, best_score, maximizing) {
                best_score = score;
                best_move = Some(col);
            }
            self.observer.value_updated(node.id, best_score);
        }

        (best_score, best_move)
    }

    /// Expected value of the maximizer intending `intended` at a node of `depth`.
    fn chance_node(
        &mut self,
        board: &mut Board,
        depth: u8,
        intended: u8,
        parent: NodeId,
    ) -> Score {
        let chance_id = self.open_aux(
            NodeKind::Chance {
                intended,
                probabilities: SLIPS.map(|s| s.probability),
            },
            depth,
            Link {
                parent,
                label: EdgeLabel::Column { column: intended },
            },
        );

        let disc = self.maximizer;
        let mut branches = [(0.0, BLOCKED_SCORE); 3];
        for (branch, slip) in branches.iter_mut().zip(SLIPS) {
            let target = i16::from(intended) + i16::from(slip.offset);
            let link = Link {
                parent: chance_id,
                label: EdgeLabel::Outcome {
                    column: target,
                    probability: slip.probability,
                },
            };
            // Off-board targets fail the conversion, full columns fail to apply
            let child = match u8::try_from(target) {
                Ok(col) => Simulated::apply(board, col, disc),
                Err(_) => None,
            };

            let score = match child {
                Some(mut child) => self.expected_node(&mut child, depth - 1, false, Some(link)).0,
                None => {
                    let blocked = self.open_aux(NodeKind::Blocked, depth - 1, link);
                    self.observer.value_updated(blocked, BLOCKED_SCORE);
                    BLOCKED_SCORE
                }
            };
            *branch = (slip.probability, score);
        }

        let value = expected_value(&branches);
        self.observer.value_updated(chance_id, value);
        value
    }
}
