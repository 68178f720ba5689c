//! Tile-map grid with per-tile collision queries.
//!
//! Levels are authored as flat arrays of tile indices, row by row, with
//! row 0 sitting at `y = 0` and later rows descending in `-y`. Tile index 0
//! is air; every other index is solid. The map owns no rendering concerns;
//! it only answers "is this world-space point inside a solid tile, and by
//! how much" for the axis-separated collision pass.

use bevy::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::numeric::{expect_usize, floor_to_i32};

/// Errors raised when constructing a [`TileMap`] from authored data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The flat tile array does not match the declared dimensions.
    #[error("tile data holds {actual} entries but {width}x{height} needs {expected}")]
    DataLength {
        /// Declared column count.
        width: u32,
        /// Declared row count.
        height: u32,
        /// `width * height`.
        expected: usize,
        /// Entries actually supplied.
        actual: usize,
    },
    /// A zero-sized map cannot hold any tiles.
    #[error("map dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Declared column count.
        width: u32,
        /// Declared row count.
        height: u32,
    },
}

/// How deeply a probe point sits inside a solid tile, per axis.
///
/// Both depths are measured from the tile's faces, so the smaller one tells
/// the resolver which axis to push out along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Penetration {
    /// Depth along the x-axis.
    pub x: f32,
    /// Depth along the y-axis.
    pub y: f32,
}

/// Immutable tile grid with collision flags derived from tile indices.
#[derive(Resource, Debug, Clone, Serialize)]
pub struct TileMap {
    width: u32,
    height: u32,
    tile_size: f32,
    tiles: Vec<u32>,
}

impl TileMap {
    /// Builds a map from a flat row-major tile array.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ZeroDimension`] for empty dimensions and
    /// [`MapError::DataLength`] when the array does not match them.
    pub fn new(width: u32, height: u32, tiles: Vec<u32>, tile_size: f32) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::ZeroDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if tiles.len() != expected {
            return Err(MapError::DataLength {
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tile_size,
            tiles,
        })
    }

    /// An all-air map, useful for menu scenes and tests.
    ///
    /// # Panics
    ///
    /// Never panics: the dimensions and data length are consistent by
    /// construction.
    #[must_use]
    pub fn empty(width: u32, height: u32, tile_size: f32) -> Self {
        let tiles = vec![0; (width as usize) * (height as usize)];
        #[expect(clippy::expect_used, reason = "Data length is correct by construction.")]
        let map = Self::new(width, height, tiles, tile_size).expect("empty map dimensions are valid");
        map
    }

    /// Column count.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Row count.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Edge length of a tile in world units.
    #[must_use]
    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Tile index at a grid cell, or `None` outside the grid.
    #[must_use]
    pub fn tile_at(&self, column: i32, row: i32) -> Option<u32> {
        if column < 0 || row < 0 {
            return None;
        }
        let (column, row) = (expect_usize(column), expect_usize(row));
        if column >= self.width as usize || row >= self.height as usize {
            return None;
        }
        self.tiles.get(row * self.width as usize + column).copied()
    }

    /// Whether the grid cell holds a solid tile. Out-of-grid cells are air.
    #[must_use]
    pub fn is_solid(&self, column: i32, row: i32) -> bool {
        self.tile_at(column, row).is_some_and(|tile| tile != 0)
    }

    /// Tests a world-space point against the grid.
    ///
    /// Returns the per-axis penetration depths when the point lies inside a
    /// solid tile, measured from the tile's faces. Points in air or outside
    /// the map return `None`.
    #[must_use]
    pub fn probe(&self, point: Vec2) -> Option<Penetration> {
        let half = self.tile_size / 2.0;
        // Tile centres sit at (column * size, -row * size).
        let column = floor_to_i32(point.x / self.tile_size + 0.5);
        let row = floor_to_i32(-point.y / self.tile_size + 0.5);
        if !self.is_solid(column, row) {
            return None;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "Grid indices are far below f32's exact integer range."
        )]
        let centre = Vec2::new(column as f32 * self.tile_size, -(row as f32) * self.tile_size);
        Some(Penetration {
            x: half - (point.x - centre.x).abs(),
            y: half - (point.y - centre.y).abs(),
        })
    }
}
