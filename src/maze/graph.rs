use crate::error::GenerationError;

/// Symmetric boolean adjacency matrix over `total_nodes` vertices.
/// Connections are only ever added, never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph {
    matrix: Box<[bool]>,
    total_nodes: usize,
}

impl AdjacencyGraph {
    pub fn new(total_nodes: usize) -> Self {
        AdjacencyGraph {
            matrix: vec![false; total_nodes * total_nodes].into_boxed_slice(),
            total_nodes,
        }
    }

    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// # Panics
    /// * If `a == b`
    /// * If either node is out of range
    pub fn connect(&mut self, a: usize, b: usize) {
        if a == b {
            panic!("Cannot connect node {} to itself", a);
        }
        let n = self.total_nodes;
        self.matrix[a * n + b] = true;
        self.matrix[b * n + a] = true;
    }

    pub fn is_connected(&self, a: usize, b: usize) -> bool {
        self.matrix[a * self.total_nodes + b]
    }

    /// Nodes directly connected to `node`, ascending.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let n = self.total_nodes;
        self.matrix[node * n..(node + 1) * n]
            .iter()
            .enumerate()
            .filter_map(|(other, &linked)| linked.then_some(other))
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.matrix.iter().filter(|&&linked| linked).count() / 2
    }

    /// Row `node` of the matrix.
    pub fn row(&self, node: usize) -> &[bool] {
        let n = self.total_nodes;
        &self.matrix[node * n..(node + 1) * n]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.total_nodes)
            .all(|a| (0..a).all(|b| self.is_connected(a, b) == self.is_connected(b, a)))
    }

    pub fn has_self_loops(&self) -> bool {
        (0..self.total_nodes).any(|a| self.is_connected(a, a))
    }
}

/// Count of vertices by degree in a finished maze.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DegreeHistogram {
    pub deg1: usize,
    pub deg2: usize,
    pub deg3: usize,
    pub deg4: usize,
}

impl DegreeHistogram {
    /// Classifies every vertex of `graph`.
    /// Any degree outside 1..=4 means the generator broke an invariant.
    pub fn from_graph(graph: &AdjacencyGraph) -> Result<Self, GenerationError> {
        let mut histogram = DegreeHistogram::default();
        for node in 0..graph.total_nodes() {
            match graph.degree(node) {
                1 => histogram.deg1 += 1,
                2 => histogram.deg2 += 1,
                3 => histogram.deg3 += 1,
                4 => histogram.deg4 += 1,
                degree => {
                    tracing::error!("[graph] node {} has degree {}", node, degree);
                    return Err(GenerationError::BadDegree { node, degree });
                }
            }
        }
        Ok(histogram)
    }

    pub fn total(&self) -> usize {
        self.deg1 + self.deg2 + self.deg3 + self.deg4
    }
}
