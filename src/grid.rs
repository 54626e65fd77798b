//! The shared output grid that a fill populates.

use color::Color;
use itertools::iproduct;

/// A windowWidth × windowHeight grid of colors in one contiguous
/// allocation.  Storage is column-major, with cell (x, y) living at
/// `x * height + y`, so every pixel column is a contiguous slice and
/// `columns_mut` can hand each column to exactly one fill worker.
#[derive(Debug)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl ColorGrid {
    /// Allocate a grid with every cell set to the transparent sentinel
    /// value.  A fill is expected to overwrite all of them, and no
    /// color scheme emits a transparent pixel, so a leftover sentinel
    /// is detectable after the fact.
    pub fn new(width: usize, height: usize) -> ColorGrid {
        ColorGrid {
            width,
            height,
            cells: vec![Color::default(); width * height],
        }
    }

    /// Width of the grid in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of cells.  Used to size encoding buffers.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has any cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The color at column x, row y.
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.cells[x * self.height + y]
    }

    /// Split the grid into per-column mutable slices, in column order.
    /// Each slice is one pixel column, rows top to bottom.
    pub fn columns_mut(&mut self) -> ::std::slice::ChunksMut<Color> {
        self.cells.chunks_mut(self.height)
    }

    /// Flatten the grid into row-major RGBA bytes, the layout image
    /// encoders expect: rows top to bottom, four bytes per pixel.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len() * 4);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let cell = self.get(x, y);
            bytes.push(cell.r);
            bytes.push(cell.g);
            bytes.push(cell.b);
            bytes.push(cell.a);
        }
        bytes
    }
}
