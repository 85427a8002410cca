//! Tesseract (4D Hypercube) topology
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w) and
//! 32 edges. Vertex `i` is labelled with the 4-bit binary form of `i`, most
//! significant bit first; bit k selects the sign of coordinate k. Two
//! vertices share an edge when their labels differ in exactly one bit.

use crate::Vec4;

/// Number of vertices in a tesseract
pub const VERTEX_COUNT: usize = 16;

/// Number of edges in a tesseract
pub const EDGE_COUNT: usize = 32;

/// Number of bits in a vertex label
const DIMENSIONS: usize = 4;

/// A hypercube corner with its binary label
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    position: Vec4,
    label: String,
}

impl Vertex {
    /// Build the vertex for index `i` (0..16)
    fn from_index(i: usize) -> Self {
        let label = format!("{:04b}", i);
        let mut coords = [0.0f64; DIMENSIONS];
        for (coord, bit) in coords.iter_mut().zip(label.chars()) {
            *coord = if bit == '1' { 1.0 } else { -1.0 };
        }

        Self {
            position: Vec4::from_array(coords),
            label,
        }
    }

    /// Position in 4D space
    #[inline]
    pub fn position(&self) -> Vec4 {
        self.position
    }

    /// 4-character binary label, e.g. `"0101"`
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An edge between two vertex indices, `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge; indices are stored in ascending order
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// Whether the edge touches vertex `index`
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    /// Indices as a tuple
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// Generate the 16 tesseract vertices in index order
pub fn generate_vertices() -> Vec<Vertex> {
    (0..VERTEX_COUNT).map(Vertex::from_index).collect()
}

/// Generate edges between vertices whose indices differ in exactly one bit
///
/// Pairs are enumerated with `i` ascending, then `j` ascending, and the
/// result keeps that order.
pub fn generate_edges(vertices: &[Vertex]) -> Vec<Edge> {
    let n = vertices.len();
    let mut edges = Vec::with_capacity(EDGE_COUNT);

    for i in 0..n {
        for j in (i + 1)..n {
            if (i ^ j).count_ones() == 1 {
                edges.push(Edge::new(i, j));
            }
        }
    }

    edges
}

/// The tesseract's vertex and edge sets, computed once
#[derive(Clone, Debug)]
pub struct Tesseract {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Default for Tesseract {
    fn default() -> Self {
        Self::new()
    }
}

impl Tesseract {
    /// Create a new tesseract with vertices at ±1
    pub fn new() -> Self {
        let vertices = generate_vertices();
        let edges = generate_edges(&vertices);
        Self { vertices, edges }
    }

    /// The 16 labelled vertices, in index order
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The 32 edges, in enumeration order
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
