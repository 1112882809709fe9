//! Plain depth-limited minimax
//!
//! Explores every legal column at every level down to the horizon or a full
//! board. Reference point for the pruned variant: alpha-beta must agree with
//! it on every position.

use crate::board::Board;

use super::{
    improves, EdgeLabel, Link, Score, SearchObserver, SearchResult, Searcher, Simulated, INF,
};

impl<O: SearchObserver> Searcher<O> {
    /// Minimax from the maximizer's point of view, maximizer to move.
    ///
    /// The board is explored in place and left unchanged.
    #[must_use]
    pub fn minimax(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.begin();
        let (score, best_move) = self.minimax_node(board, depth, true, None);
        self.finish(score, best_move, depth)
    }

    fn minimax_node(
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
        let disc = self.player(maximizing);
        let mut best_move = moves.first().copied();
        let mut best_score = if maximizing { -INF } else { INF };

        for col in moves {
            let link = Link {
                parent: node.id,
                label: EdgeLabel::Column { column: col },
            };
            let Some(mut child) = Simulated::apply(board, col, disc) else {
                continue;
            };
            let (score, _) = self.minimax_node(&mut child, depth - 1, !maximizing, Some(link));
            drop(child);

            if improves(score, best_score, maximizing) {
                best_score = score;
                best_move = Some(col);
            }
            self.observer.value_updated(node.id, best_score);
        }

        (best_score, best_move)
    }
}
