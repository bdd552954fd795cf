//! Board configuration types.
//!
//! A board is described layer by layer, outermost first:
//! - `LayerConfig`: grid size and win streak of one nesting level
//! - `NodeSpec`: what a board's children are (cells, or boards of some spec)
//! - `BoardConfig`: the full layer list plus the number of players
//!
//! ```
//! use rust_nttt::core::{BoardConfig, LayerConfig};
//!
//! // Ultimate tic-tac-toe: a 3x3 board of 3x3 boards.
//! let config = BoardConfig::default();
//! assert_eq!(config.depth(), 2);
//!
//! // A 4x4 board of 5x5 boards, each won by four in a row.
//! let config = BoardConfig::new(vec![LayerConfig::new(4, 4, 3), LayerConfig::new(5, 5, 4)]);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Grid size and win streak of one nesting level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Number of rows in the grid.
    pub rows: usize,

    /// Number of columns in the grid.
    pub cols: usize,

    /// Run length of identical marks needed to win this level.
    pub win_streak: usize,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_streak: 3,
        }
    }
}

impl LayerConfig {
    /// Create a new layer configuration.
    #[must_use]
    pub const fn new(rows: usize, cols: usize, win_streak: usize) -> Self {
        Self {
            rows,
            cols,
            win_streak,
        }
    }

    /// A `size`x`size` grid won by a full line.
    #[must_use]
    pub const fn square(size: usize) -> Self {
        Self::new(size, size, size)
    }

    /// Set the win streak.
    #[must_use]
    pub fn with_win_streak(mut self, win_streak: usize) -> Self {
        self.win_streak = win_streak;
        self
    }

    /// Number of children in the grid.
    #[must_use]
    pub const fn child_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the layer can be built.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::config(format!(
                "board dimensions must be non-zero, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.win_streak == 0 {
            return Err(Error::config("win streak must be at least 1"));
        }
        Ok(())
    }
}

/// Blueprint for a node: a cell, or a board whose children follow `child`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeSpec {
    /// A leaf holding one symbol.
    #[default]
    Cell,
    /// A grid of children built from `child`.
    Board {
        layer: LayerConfig,
        child: Box<NodeSpec>,
    },
}

impl NodeSpec {
    /// A board of `layer` whose children are built from `child`.
    #[must_use]
    pub fn board(layer: LayerConfig, child: NodeSpec) -> Self {
        NodeSpec::Board {
            layer,
            child: Box::new(child),
        }
    }

    /// Nest `layers` (outermost first) down to cells.
    ///
    /// Fails on an empty list or an invalid layer.
    pub fn from_layers(layers: &[LayerConfig]) -> Result<Self> {
        if layers.is_empty() {
            return Err(Error::config("at least one layer is required"));
        }
        layers.iter().rev().try_fold(NodeSpec::Cell, |child, layer| {
            layer.validate()?;
            Ok(NodeSpec::board(*layer, child))
        })
    }

    /// Check every layer of the blueprint.
    pub fn validate(&self) -> Result<()> {
        match self {
            NodeSpec::Cell => Ok(()),
            NodeSpec::Board { layer, child } => {
                layer.validate()?;
                child.validate()
            }
        }
    }

    /// Levels of boards above the cells (0 for a cell).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            NodeSpec::Cell => 0,
            NodeSpec::Board { child, .. } => 1 + child.depth(),
        }
    }
}

/// Complete configuration for a game tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Layers, outermost first. The last layer holds cells.
    pub layers: Vec<LayerConfig>,

    /// Number of players taking turns (1-255).
    pub player_count: usize,
}

impl Default for BoardConfig {
    /// Two-player ultimate tic-tac-toe.
    fn default() -> Self {
        Self {
            layers: vec![LayerConfig::default(), LayerConfig::default()],
            player_count: 2,
        }
    }
}

impl BoardConfig {
    /// Two-player configuration with the given layers.
    #[must_use]
    pub fn new(layers: Vec<LayerConfig>) -> Self {
        Self {
            layers,
            player_count: 2,
        }
    }

    /// Plain 3x3 tic-tac-toe.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(vec![LayerConfig::default()])
    }

    /// Add an innermost layer.
    #[must_use]
    pub fn with_layer(mut self, layer: LayerConfig) -> Self {
        self.layers.push(layer);
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Number of nesting levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Check every layer and the player count.
    pub fn validate(&self) -> Result<()> {
        if !(1..=255).contains(&self.player_count) {
            return Err(Error::config(format!(
                "player count must be 1-255, got {}",
                self.player_count
            )));
        }
        self.node_spec().map(|_| ())
    }

    /// Blueprint of the root board.
    pub fn node_spec(&self) -> Result<NodeSpec> {
        NodeSpec::from_layers(&self.layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.depth(), 2);
        assert_eq!(config.player_count, 2);
        assert_eq!(config.layers[0], LayerConfig::new(3, 3, 3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::classic()
            .with_layer(LayerConfig::new(4, 5, 4))
            .with_player_count(3);

        assert_eq!(config.depth(), 2);
        assert_eq!(config.layers[1].cols, 5);
        assert_eq!(config.player_count, 3);
    }

    #[test]
    fn test_from_layers_nests_outermost_first() {
        let spec = NodeSpec::from_layers(&[LayerConfig::new(2, 2, 2), LayerConfig::new(4, 4, 3)])
            .unwrap();

        assert_eq!(spec.depth(), 2);
        match spec {
            NodeSpec::Board { layer, child } => {
                assert_eq!(layer, LayerConfig::new(2, 2, 2));
                assert_eq!(*child, NodeSpec::board(LayerConfig::new(4, 4, 3), NodeSpec::Cell));
            }
            NodeSpec::Cell => panic!("expected a board"),
        }
    }

    #[test]
    fn test_invalid_layers() {
        assert!(matches!(
            NodeSpec::from_layers(&[]),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(LayerConfig::new(0, 3, 3).validate().is_err());
        assert!(LayerConfig::new(3, 3, 0).validate().is_err());
        assert!(BoardConfig::new(vec![LayerConfig::default(), LayerConfig::new(3, 0, 1)])
            .validate()
            .is_err());
    }

    #[test]
    fn test_node_spec_validate_checks_nested_layers() {
        let spec = NodeSpec::board(
            LayerConfig::default(),
            NodeSpec::board(LayerConfig::new(3, 3, 0), NodeSpec::Cell),
        );
        assert!(spec.validate().is_err());
        assert!(NodeSpec::Cell.validate().is_ok());
    }

    #[test]
    fn test_invalid_player_count() {
        assert!(BoardConfig::default().with_player_count(0).validate().is_err());
        assert!(BoardConfig::default().with_player_count(256).validate().is_err());
        assert!(BoardConfig::default().with_player_count(1).validate().is_ok());
    }

    #[test]
    fn test_square_layer() {
        let layer = LayerConfig::square(4).with_win_streak(3);
        assert_eq!(layer, LayerConfig::new(4, 4, 3));
        assert_eq!(layer.child_count(), 16);
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::default().with_layer(LayerConfig::new(2, 3, 2));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialize_handwritten() {
        let json = r#"{"layers":[{"rows":3,"cols":3,"win_streak":3}],"player_count":2}"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, BoardConfig::classic());
    }
}
