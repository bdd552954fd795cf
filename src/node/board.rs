//! Composite node: a grid of cells or of nested boards.
//!
//! A `Board` owns its children exclusively. Children are stored row-major
//! in an `im::Vector`, as is the move history, so cloning a whole game tree
//! shares structure instead of copying every level.
//!
//! ## Building
//!
//! ```
//! use rust_nttt::core::LayerConfig;
//! use rust_nttt::node::Board;
//!
//! // Outermost layer first: a 3x3 board of 3x3 boards.
//! let board = Board::from_layers(&[LayerConfig::default(), LayerConfig::default()]).unwrap();
//! assert_eq!(board.depth(), 2);
//! assert_eq!(board.legal_moves(rust_nttt::core::Symbol::mark_of(0)).len(), 81);
//! ```

use im::Vector;
use tracing::trace;

use crate::core::{
    BoardConfig, Error, LayerConfig, Move, MoveRef, NodeSpec, Position, Result, Symbol,
};

use super::cell::Cell;
use super::placeable::{Availability, NodeRef, Placeable};

/// A child slot of a board.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Cell(Cell),
    Board(Box<Board>),
}

impl Node {
    fn build(spec: &NodeSpec, position: Position) -> Self {
        match spec {
            NodeSpec::Cell => Node::Cell(Cell::placed(position)),
            NodeSpec::Board { layer, child } => {
                Node::Board(Box::new(Board::build(*layer, child, Some(position))))
            }
        }
    }

    /// Levels of boards at and below this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Node::Cell(_) => 0,
            Node::Board(board) => board.depth(),
        }
    }

    /// Borrow as a [`NodeRef`].
    #[must_use]
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Cell(cell) => NodeRef::Cell(cell),
            Node::Board(board) => NodeRef::Board(board),
        }
    }
}

impl Placeable for Node {
    fn position(&self) -> Option<Position> {
        match self {
            Node::Cell(cell) => cell.position(),
            Node::Board(board) => board.position(),
        }
    }

    fn symbol(&self) -> Symbol {
        match self {
            Node::Cell(cell) => cell.symbol(),
            Node::Board(board) => board.symbol(),
        }
    }

    fn make_move(&mut self, mv: MoveRef<'_>) -> Result<()> {
        match self {
            Node::Cell(cell) => cell.make_move(mv),
            Node::Board(board) => board.make_move(mv),
        }
    }

    fn undo_move(&mut self, mv: MoveRef<'_>) -> Result<()> {
        match self {
            Node::Cell(cell) => cell.undo_move(mv),
            Node::Board(board) => board.undo_move(mv),
        }
    }

    fn sub_node(&self, path: &[Position]) -> Result<NodeRef<'_>> {
        match self {
            Node::Cell(cell) => cell.sub_node(path),
            Node::Board(board) => board.sub_node(path),
        }
    }

    fn availability(&self, active: &[Position]) -> Availability {
        match self {
            Node::Cell(cell) => cell.availability(active),
            Node::Board(board) => board.availability(active),
        }
    }

    fn valid_moves(&self, active: Option<&[Position]>, is_top_level: bool) -> Vec<Move> {
        match self {
            Node::Cell(cell) => cell.valid_moves(active, is_top_level),
            Node::Board(board) => board.valid_moves(active, is_top_level),
        }
    }
}

/// A rows x cols grid of children with its own win streak and history.
///
/// `symbol` is always the result of the win/draw derivation as of the last
/// make/undo; it is never set any other way.
#[derive(Clone, Debug)]
pub struct Board {
    pub(super) position: Option<Position>,
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) win_streak: usize,
    pub(super) cells: Vector<Node>,
    pub(super) game_moves: Vector<Move>,
    pub(super) symbol: Symbol,
}

impl Board {
    /// Create a root board of `layer` whose children are built from `child`.
    ///
    /// The whole blueprint is validated first, so either a complete board is
    /// returned or nothing is built.
    pub fn new(layer: LayerConfig, child: &NodeSpec) -> Result<Self> {
        layer.validate()?;
        child.validate()?;
        Ok(Self::build(layer, child, None))
    }

    /// Create a root board from layers, outermost first.
    pub fn from_layers(layers: &[LayerConfig]) -> Result<Self> {
        match NodeSpec::from_layers(layers)? {
            NodeSpec::Board { layer, child } => Ok(Self::build(layer, &child, None)),
            NodeSpec::Cell => Err(Error::config("at least one layer is required")),
        }
    }

    /// Create a root board from a full configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Self::from_layers(&config.layers)
    }

    fn build(layer: LayerConfig, child: &NodeSpec, position: Option<Position>) -> Self {
        let cols = layer.cols;
        let cells = (0..layer.child_count())
            .map(|index| Node::build(child, Position::from_index(index, cols)))
            .collect();
        Self {
            position,
            rows: layer.rows,
            cols,
            win_streak: layer.win_streak,
            cells,
            game_moves: Vector::new(),
            symbol: Symbol::Empty,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Run length needed to win this board.
    #[must_use]
    pub fn win_streak(&self) -> usize {
        self.win_streak
    }

    /// Levels of boards from this one down to the cells (1 for a flat board).
    ///
    /// This is also the length of every full move path issued here.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.cells.front().map_or(0, Node::depth)
    }

    /// Moves applied to this board, oldest first, with paths relative to it.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.game_moves
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.game_moves.last()
    }

    /// Whether `position` lies inside this board's grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// The child at `position`.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Node> {
        if self.contains(position) {
            self.cells.get(position.to_index(self.cols))
        } else {
            None
        }
    }

    /// All children, row-major.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.cells.iter()
    }

    /// Node addressed by `path` from this board.
    pub fn sub_board(&self, path: &[Position]) -> Result<NodeRef<'_>> {
        self.sub_node(path)
    }

    fn index_of(&self, position: Position) -> Result<usize> {
        if self.contains(position) {
            Ok(position.to_index(self.cols))
        } else {
            Err(Error::OutOfBounds {
                position,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn child_mut(&mut self, position: Position) -> Result<&mut Node> {
        let index = self.index_of(position)?;
        let (rows, cols) = (self.rows, self.cols);
        self.cells.get_mut(index).ok_or(Error::OutOfBounds {
            position,
            rows,
            cols,
        })
    }
}

/// Structural equality: same shape, same win streak, same children.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.win_streak == other.win_streak
            && self.cells == other.cells
    }
}

impl Placeable for Board {
    fn position(&self) -> Option<Position> {
        self.position
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn make_move(&mut self, mv: MoveRef<'_>) -> Result<()> {
        let position = mv.head().ok_or_else(|| Error::PathTooShort {
            depth: self.depth(),
        })?;
        let child = self.child_mut(position)?;
        if !child.symbol().is_empty() {
            return Err(Error::Occupied { position });
        }
        child.make_move(mv.rest())?;

        self.symbol = self.winner();
        self.game_moves.push_back(mv.to_move());
        trace!(%position, symbol = %self.symbol, moves = self.game_moves.len(), "move applied");
        Ok(())
    }

    fn undo_move(&mut self, mv: MoveRef<'_>) -> Result<()> {
        let last = self.game_moves.last().ok_or(Error::NothingToUndo)?;
        if mv != *last {
            return Err(Error::UndoMismatch {
                expected: last.clone(),
                got: mv.to_move(),
            });
        }
        let position = mv.head().ok_or_else(|| Error::PathTooShort {
            depth: self.depth(),
        })?;
        self.child_mut(position)?.undo_move(mv.rest())?;

        self.symbol = self.winner();
        self.game_moves.pop_back();
        trace!(%position, symbol = %self.symbol, moves = self.game_moves.len(), "move undone");
        Ok(())
    }

    fn sub_node(&self, path: &[Position]) -> Result<NodeRef<'_>> {
        match path.split_first() {
            None => Ok(NodeRef::Board(self)),
            Some((head, rest)) => {
                let index = self.index_of(*head)?;
                self.cells
                    .get(index)
                    .ok_or(Error::OutOfBounds {
                        position: *head,
                        rows: self.rows,
                        cols: self.cols,
                    })?
                    .sub_node(rest)
            }
        }
    }

    fn availability(&self, active: &[Position]) -> Availability {
        self.path_availability(active)
    }

    fn valid_moves(&self, active: Option<&[Position]>, is_top_level: bool) -> Vec<Move> {
        self.get_valid_moves(active, is_top_level, Symbol::Empty)
    }
}
