//! Minimum spanning trees by hill-climbing.
//!
//! Both algorithms grow a partial solution one edge at a time and rank
//! candidates by total weight, so always taking the cheapest successor
//! reproduces Kruskal's and Prim's greedy choices. Neither ever needs to
//! backtrack on a connected graph.

use log::debug;

use crate::{hill_climb, ByKey};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: u32,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: u32) -> Self {
        Self { u, v, weight }
    }
}

/// Undirected weighted graph on nodes `0..nodes`.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub nodes: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: usize, edges: impl IntoIterator<Item = (usize, usize, u32)>) -> Self {
        Self {
            nodes,
            edges: edges
                .into_iter()
                .map(|(u, v, w)| Edge::new(u, v, w))
                .collect(),
        }
    }

    /// Every edge joins two nodes of the graph.
    pub fn is_well_formed(&self) -> bool {
        self.edges
            .iter()
            .all(|e| e.u < self.nodes && e.v < self.nodes)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Spanning tree (or forest) chosen so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    pub edges: Vec<Edge>,
    pub weight: u32,
}

impl Tree {
    fn with(&self, edge: Edge) -> Tree {
        let mut edges = self.edges.clone();
        edges.push(edge);
        Tree {
            edges,
            weight: self.weight + edge.weight,
        }
    }

    fn spans(&self, nodes: usize) -> bool {
        self.edges.len() + 1 >= nodes
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Kruskal state: a forest plus the component label of every node.
#[derive(Clone, Debug)]
struct Forest {
    tree: Tree,
    component: Vec<usize>,
}

impl Forest {
    fn new(nodes: usize) -> Self {
        Self {
            tree: Tree {
                edges: Vec::new(),
                weight: 0,
            },
            component: (0..nodes).collect(),
        }
    }

    /// Forests with one more edge joining two components.
    fn successors(&self, graph: &Graph) -> Vec<Forest> {
        graph
            .edges
            .iter()
            .filter(|e| self.component[e.u] != self.component[e.v])
            .map(|&e| {
                let (from, to) = (self.component[e.v], self.component[e.u]);
                let component = self
                    .component
                    .iter()
                    .map(|&c| if c == from { to } else { c })
                    .collect();
                Forest {
                    tree: self.tree.with(e),
                    component,
                }
            })
            .collect()
    }
}

/// Minimum spanning tree by Kruskal's rule. `None` if the graph is
/// disconnected or an edge names a node outside it.
pub fn kruskal(graph: &Graph) -> Option<Tree> {
    if !graph.is_well_formed() {
        return None;
    }
    let found = hill_climb(
        |forest: &Forest| forest.successors(graph),
        |forest: &Forest| forest.tree.spans(graph.nodes),
        ByKey(|forest: &Forest| forest.tree.weight),
        Forest::new(graph.nodes),
    )
    .map(|forest| forest.tree);
    debug!("kruskal: {:?}", found.as_ref().map(|t| t.weight));
    found
}

////////////////////////////////////////////////////////////////////////////////

/// Prim state: a tree grown from node `0`.
#[derive(Clone, Debug)]
struct Grown {
    tree: Tree,
    inside: Vec<bool>,
}

impl Grown {
    fn new(nodes: usize) -> Self {
        let mut inside = vec![false; nodes];
        if let Some(root) = inside.first_mut() {
            *root = true;
        }
        Self {
            tree: Tree {
                edges: Vec::new(),
                weight: 0,
            },
            inside,
        }
    }

    /// Trees with one more edge leaving the tree.
    fn successors(&self, graph: &Graph) -> Vec<Grown> {
        graph
            .edges
            .iter()
            .filter(|e| self.inside[e.u] != self.inside[e.v])
            .map(|&e| {
                let mut inside = self.inside.clone();
                inside[e.u] = true;
                inside[e.v] = true;
                Grown {
                    tree: self.tree.with(e),
                    inside,
                }
            })
            .collect()
    }
}

/// Minimum spanning tree grown from node `0` by Prim's rule. `None` if
/// the graph is disconnected or an edge names a node outside it.
pub fn prim(graph: &Graph) -> Option<Tree> {
    if !graph.is_well_formed() {
        return None;
    }
    let found = hill_climb(
        |grown: &Grown| grown.successors(graph),
        |grown: &Grown| grown.tree.spans(graph.nodes),
        ByKey(|grown: &Grown| grown.tree.weight),
        Grown::new(graph.nodes),
    )
    .map(|grown| grown.tree);
    debug!("prim: {:?}", found.as_ref().map(|t| t.weight));
    found
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::{kruskal, prim, Edge, Graph};

    fn sample() -> Graph {
        Graph::new(
            5,
            [
                (0, 1, 12),
                (0, 2, 34),
                (0, 4, 78),
                (1, 3, 55),
                (1, 4, 32),
                (2, 3, 61),
                (2, 4, 44),
                (3, 4, 93),
            ],
        )
    }

    #[test]
    fn kruskal_sample() {
        let tree = kruskal(&sample()).unwrap();
        assert_eq!(tree.weight, 133);
        assert_eq!(
            tree.edges,
            vec![
                Edge::new(0, 1, 12),
                Edge::new(1, 4, 32),
                Edge::new(0, 2, 34),
                Edge::new(1, 3, 55),
            ]
        );
    }

    #[test]
    fn prim_sample() {
        let tree = prim(&sample()).unwrap();
        assert_eq!(tree.weight, 133);
        assert_eq!(tree.edges.len(), 4);
        assert_eq!(tree.edges[0], Edge::new(0, 1, 12));
    }

    #[test]
    fn disconnected() {
        let graph = Graph::new(4, [(0, 1, 1), (2, 3, 1)]);
        assert_eq!(kruskal(&graph), None);
        assert_eq!(prim(&graph), None);
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(kruskal(&Graph::default()).unwrap().weight, 0);
        let single = Graph {
            nodes: 1,
            edges: Vec::new(),
        };
        assert!(prim(&single).unwrap().edges.is_empty());
    }

    #[test]
    fn edge_outside_graph() {
        let graph = Graph::new(3, [(0, 1, 4), (1, 2, 5), (2, 7, 1)]);
        assert!(!graph.is_well_formed());
        assert_eq!(kruskal(&graph), None);
        assert_eq!(prim(&graph), None);
        assert!(sample().is_well_formed());
    }

    #[rstest]
    fn kruskal_and_prim_agree(#[values(1, 2, 3, 123, 321)] seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = 8;
        // a path keeps the graph connected
        let mut edges: Vec<(usize, usize, u32)> = (1..nodes)
            .map(|v| (v - 1, v, rng.random_range(1..100)))
            .collect();
        for _ in 0..12 {
            let u = rng.random_range(0..nodes);
            let v = rng.random_range(0..nodes);
            if u != v {
                edges.push((u, v, rng.random_range(1..100)));
            }
        }
        let graph = Graph::new(nodes, edges);
        let k = kruskal(&graph).unwrap();
        let p = prim(&graph).unwrap();
        assert_eq!(k.weight, p.weight);
        assert_eq!(k.edges.len(), nodes - 1);
    }
}
