/// An undirected voter adjacency graph in compressed sparse row format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    size: usize,
    offsets: Vec<u32>,
    edges: Vec<u32>,
}

impl Graph {
    /// Construct a graph from adjacency lists.
    /// Every listed edge is stored in both directions; self-loops and duplicates are dropped.
    pub fn new(num_nodes: usize, edges: &[Vec<u32>]) -> Self {
        assert!(edges.len() == num_nodes, "edges.len() must equal num_nodes");
        edges.iter().enumerate().for_each(|(u, edges)| {
            edges.iter().for_each(|&v| {
                assert!((v as usize) < num_nodes, "edges[{u}] contains out-of-range node {v}");
            });
        });

        let mut adjacency = vec![Vec::new(); num_nodes];
        for (u, neighbors) in edges.iter().enumerate() {
            for &v in neighbors.iter().filter(|&&v| v as usize != u) {
                adjacency[u].push(v);
                adjacency[v as usize].push(u as u32);
            }
        }
        adjacency.iter_mut().for_each(|list| { list.sort_unstable(); list.dedup(); });

        Self {
            size: num_nodes,
            offsets: std::iter::once(0u32).chain(
                adjacency.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: adjacency.into_iter().flatten().collect(),
        }
    }

    /// Construct a `rows` x `cols` lattice with 4-neighbour (rook) adjacency.
    /// Node `r * cols + c` sits at row `r`, column `c`.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let edges = (0..rows * cols).map(|u| {
            let (r, c) = (u / cols, u % cols);
            let mut neighbors = Vec::with_capacity(2);
            if c + 1 < cols { neighbors.push((u + 1) as u32) }
            if r + 1 < rows { neighbors.push((u + cols) as u32) }
            neighbors
        }).collect::<Vec<_>>();

        Self::new(rows * cols, &edges)
    }

    /// Get the number of nodes in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.size }

    /// Get the number of directed edge entries (twice the undirected edge count).
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get the ith neighbor of a given node.
    #[inline]
    pub fn edge(&self, node: usize, i: usize) -> Option<usize> {
        self.range(node).nth(i).map(|v| self.edges[v] as usize)
    }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }

    /// Export the graph back to sorted adjacency lists.
    pub fn adjacency(&self) -> Vec<Vec<u32>> {
        (0..self.size).map(|u| self.edges[self.range(u)].to_vec()).collect()
    }
}
