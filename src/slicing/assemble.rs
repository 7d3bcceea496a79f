//! Linking through-segments into contours.
//!
//! Every crossed edge is a node; the through-segments of the two faces on
//! either side of an edge meet at that node. On a manifold mesh each node has
//! degree 2 (interior) or 1 (open boundary), so the segments form simple loops
//! and chains. Walks only continue through degree-2 nodes; a node shared by
//! more than two segments stops every walk that reaches it.

use crate::float_types::Real;
use crate::path::Contour;
use crate::slicing::{EdgeKey, ThroughSegment};
use hashbrown::HashMap;
use nalgebra::Point3;

/// Contours built from one plane's through-segments, plus what could not be linked.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub contours: Vec<Contour>,
    /// Indices of segments that no walk consumed
    pub unconsumed: Vec<usize>,
    /// Number of nodes shared by more than two segments
    pub branching_nodes: usize,
}

impl Assembly {
    /// True when the segments formed simple loops and boundary chains only.
    pub fn is_consistent(&self) -> bool {
        self.unconsumed.is_empty() && self.branching_nodes == 0
    }
}

struct Graph<'a> {
    segments: &'a [ThroughSegment],
    incidence: HashMap<EdgeKey, Vec<usize>>,
    visited: Vec<bool>,
}

impl<'a> Graph<'a> {
    fn new(segments: &'a [ThroughSegment]) -> Self {
        let mut incidence: HashMap<EdgeKey, Vec<usize>> = HashMap::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            for end in &segment.ends {
                incidence.entry(end.edge).or_default().push(index);
            }
        }
        Graph {
            segments,
            incidence,
            visited: vec![false; segments.len()],
        }
    }

    fn degree(&self, node: EdgeKey) -> usize {
        self.incidence.get(&node).map_or(0, Vec::len)
    }

    /// Side of `segment` touching `node`.
    fn side(&self, segment: usize, node: EdgeKey) -> usize {
        if self.segments[segment].ends[0].edge == node { 0 } else { 1 }
    }

    /// The unvisited segment continuing through `node`, if the walk may pass it.
    fn next_through(&self, node: EdgeKey) -> Option<usize> {
        let incident = self.incidence.get(&node)?;
        if incident.len() != 2 {
            return None;
        }
        incident.iter().copied().find(|&s| !self.visited[s])
    }

    /// Walk from `start`, entering through its end `entry`, until no continuation is left.
    ///
    /// Returns the crossing points in walk order (entry point first) and the
    /// node where the walk stopped.
    fn walk(&mut self, start: usize, entry: usize) -> (Vec<Point3<Real>>, EdgeKey) {
        let mut points = vec![self.segments[start].ends[entry].point];
        let mut current = start;
        let mut exit = 1 - entry;
        loop {
            self.visited[current] = true;
            let node = self.segments[current].ends[exit];
            points.push(node.point);
            match self.next_through(node.edge) {
                Some(next) => {
                    exit = 1 - self.side(next, node.edge);
                    current = next;
                },
                None => return (points, node.edge),
            }
        }
    }
}

/// Link the through-segments of one plane into closed and open contours.
///
/// Chains starting at boundary nodes are emitted first, then loops, both in
/// segment order, so the result is deterministic for a given input. Closed
/// contours do not repeat their start point. Segments whose both ends sit on
/// branching nodes are never walked and are reported in
/// [`Assembly::unconsumed`].
pub fn assemble(segments: &[ThroughSegment]) -> Assembly {
    let mut graph = Graph::new(segments);
    let mut contours = Vec::new();

    // open chains, from mesh boundaries
    for index in 0..segments.len() {
        for entry in 0..2 {
            if !graph.visited[index] && graph.degree(segments[index].ends[entry].edge) == 1 {
                let (points, _) = graph.walk(index, entry);
                contours.push(Contour::open(points));
            }
        }
    }

    // loops, and chains stuck between branching nodes
    for index in 0..segments.len() {
        if graph.visited[index] {
            continue;
        }
        let start = segments[index].ends[0].edge;
        let end = segments[index].ends[1].edge;
        if graph.degree(start) != 2 && graph.degree(end) != 2 {
            continue;
        }

        let (mut points, stop) = graph.walk(index, 0);
        if stop == start {
            points.pop();
            contours.push(Contour::closed(points));
            continue;
        }

        if let Some(back) = graph.next_through(start) {
            let entry = graph.side(back, start);
            let (mut behind, _) = graph.walk(back, entry);
            behind.reverse();
            behind.pop();
            behind.extend(points);
            points = behind;
        }
        contours.push(Contour::open(points));
    }

    let unconsumed = (0..segments.len()).filter(|&i| !graph.visited[i]).collect();
    let branching_nodes = graph.incidence.values().filter(|s| s.len() > 2).count();

    Assembly {
        contours,
        unconsumed,
        branching_nodes,
    }
}
