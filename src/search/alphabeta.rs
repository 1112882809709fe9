//! Minimax with alpha-beta pruning
//!
//! Same control flow, ordering and tie-break as plain minimax. After each
//! child the window narrows; once `alpha >= beta` the remaining siblings are
//! skipped. The root is searched with the full window, so the root value and
//! chosen column always match plain minimax.
//!
//! # Example
//!
//! ```
//! use connect_four::board::{Board, Disc};
//! use connect_four::search::Searcher;
//!
//! let mut board = Board::from_moves(&[3, 3, 4]).unwrap();
//! let pruned = Searcher::new(Disc::Red).alpha_beta(&mut board, 4);
//! let full = Searcher::new(Disc::Red).minimax(&mut board, 4);
//! assert_eq!(pruned.best_move, full.best_move);
//! assert!(pruned.nodes <= full.nodes);
//! ```

use crate::board::Board;

use super::{
    improves, EdgeLabel, Link, Score, SearchObserver, SearchResult, Searcher, Simulated, INF,
};

impl<O: SearchObserver> Searcher<O> {
    /// Alpha-beta search with the root window `[-inf, +inf]`.
    #[must_use]
    pub fn alpha_beta(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.begin();
        let (score, best_move) = self.alpha_beta_node(board, depth, -INF, INF, true, None);
        self.finish(score, best_move, depth)
    }

    /// Recursive alpha-beta step.
    ///
    /// `alpha` is what the maximizer can already guarantee elsewhere, `beta`
    /// what the minimizer can. Returns the node value and its best column.
    fn alpha_beta_node(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        link: Option<Link>,
    ) -> (Score, Option<u8>) {
        let node = self.enter(board, depth, maximizing, link);
        if let Some(value) = node.leaf_value {
            return (value, None);
        }
        self.observer.bounds_updated(node.id, alpha, beta);

        let moves = board.valid_moves();
        let disc = self.player(maximizing);
        let mut best_move = moves.first().copied();
        let mut best_score = if maximizing { -INF } else { INF };

        for (i, &col) in moves.iter().enumerate() {
            let child_id = self.peek_id();
            let link = Link {
                parent: node.id,
                label: EdgeLabel::Column { column: col },
            };
            let Some(mut child) = Simulated::apply(board, col, disc) else {
                continue;
            };
            let (score, _) =
                self.alpha_beta_node(&mut child, depth - 1, alpha, beta, !maximizing, Some(link));
            drop(child);

            if improves(score, best_score, maximizing) {
                best_score = score;
                best_move = Some(col);
            }
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            self.observer.value_updated(node.id, best_score);
            self.observer.bounds_updated(node.id, alpha, beta);

            if alpha >= beta {
                self.cutoffs += 1;
                self.observer.node_pruned(node.id, child_id, &moves[i + 1..]);
                break;
            }
        }

        (best_score, best_move)
    }
}
