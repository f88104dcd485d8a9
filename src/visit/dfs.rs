use crate::core::{
    id::{IdType, IntegerIdType},
    marker::Direction,
    GraphBase, Neighbors, VertexSet,
};

use super::{Color, Time};

/// Traversal state of a single vertex, valid for the duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexState<I> {
    /// Progress marking. After a completed run, every reached vertex is
    /// [`Done`](Color::Done).
    pub color: Color,

    /// Parent in the traversal tree, `None` for tree roots and unreached
    /// vertices.
    pub parent: Option<I>,

    /// Time at which the vertex was discovered, counted from 1.
    pub discovered: Time,

    /// Time at which the visit of the vertex completed. Always greater than
    /// [`discovered`](VertexState::discovered).
    pub finished: Time,

    /// Position of the vertex in the reverse finish order, counted from 1.
    /// Only meaningful as a topological position when the run observed no
    /// back edge.
    pub topo_number: usize,

    /// Traversal tree the vertex belongs to. Tree roots receive strictly
    /// increasing numbers, counted from 1, in the order the trees are
    /// started.
    pub component: usize,
}

impl<I> Default for VertexState<I> {
    fn default() -> Self {
        Self {
            color: Color::Unvisited,
            parent: None,
            discovered: Time(0),
            finished: Time(0),
            topo_number: 0,
            component: 0,
        }
    }
}

/// Depth-first traversal engine over a directed graph.
///
/// One engine instance holds the state of one run: the per-vertex records,
/// the monotonic event clock, the finish list and the back-edge flag. A run
/// borrows the graph immutably for its whole duration, so the graph cannot
/// change under the traversal. Re-running resets all state first; nothing
/// survives from the previous run.
///
/// # Examples
///
/// ```
/// use trava::{
///     storage::AdjList,
///     visit::{Color, Dfs},
/// };
///
/// let mut graph = AdjList::new();
///
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// graph.add_edge(&a, &b);
///
/// let mut dfs = Dfs::new(&graph);
/// dfs.run(&graph);
///
/// assert_eq!(dfs.state(&a).color, Color::Done);
/// assert!(dfs.state(&a).discovered < dfs.state(&b).discovered);
/// assert_eq!(dfs.finish_order().collect::<Vec<_>>(), vec![a, b]);
/// assert!(!dfs.is_cyclic());
/// ```
pub struct Dfs<G>
where
    G: GraphBase,
{
    states: Vec<VertexState<G::VertexId>>,
    stack: Vec<Frame<G>>,
    finish: Vec<G::VertexId>,
    time: usize,
    next_topo: usize,
    components: usize,
    cyclic: bool,
}

struct Frame<G>
where
    G: GraphBase,
{
    vertex: G::VertexId,
    neighbors: Vec<G::VertexId>,
    next: usize,
}

impl<G> Dfs<G>
where
    G: Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    pub fn new(graph: &G) -> Self {
        Self {
            states: Vec::with_capacity(graph.vertex_count_hint().unwrap_or_default()),
            stack: Vec::new(),
            finish: Vec::new(),
            time: 0,
            next_topo: 0,
            components: 0,
            cyclic: false,
        }
    }

    /// Resets every per-vertex record and all run-scoped state. Idempotent.
    ///
    /// The drivers call this themselves, so an explicit call is only needed
    /// to discard the results of a finished run early.
    pub fn reset(&mut self, graph: &G) {
        self.states.clear();
        self.states
            .resize_with(graph.vertex_bound(), VertexState::default);
        self.stack.clear();
        self.finish.clear();
        self.time = 0;
        self.next_topo = graph.vertex_count();
        self.components = 0;
        self.cyclic = false;
    }

    /// Runs the traversal over every vertex of the graph in the order given
    /// by [`vertices_by_id`](VertexSet::vertices_by_id), building a forest of
    /// traversal trees.
    pub fn run(&mut self, graph: &G) {
        self.run_from(graph, graph.vertices_by_id());
    }

    /// Runs the traversal using the given sequence as the order in which tree
    /// roots are tried. Every vertex of the graph is visited exactly once as
    /// long as the sequence enumerates all vertices; roots that were already
    /// reached earlier are skipped.
    pub fn run_from<R>(&mut self, graph: &G, roots: R)
    where
        R: IntoIterator<Item = G::VertexId>,
    {
        self.reset(graph);

        for root in roots {
            if self.states[root.as_usize()].color != Color::Unvisited {
                continue;
            }

            self.components += 1;
            self.states[root.as_usize()].component = self.components;
            self.visit(graph, root);
        }
    }

    // Visits the whole traversal tree rooted in the given vertex. The loop
    // examines one incident edge per iteration, exactly as the recursive
    // formulation does, so the produced timestamps are identical to it.
    fn visit(&mut self, graph: &G, root: G::VertexId) {
        debug_assert_eq!(self.states[root.as_usize()].color, Color::Unvisited);

        self.open(graph, root);

        loop {
            let Some(frame) = self.stack.last_mut() else {
                break;
            };

            if frame.next == frame.neighbors.len() {
                let vertex = frame.vertex;
                self.stack.pop();
                self.close(vertex);
                continue;
            }

            let target = frame.neighbors[frame.next];
            let source = frame.vertex;
            frame.next += 1;

            match self.states[target.as_usize()].color {
                Color::Unvisited => {
                    let component = self.states[source.as_usize()].component;
                    let state = &mut self.states[target.as_usize()];
                    state.parent = Some(source);
                    state.component = component;
                    self.open(graph, target);
                }
                // Back edge. Advisory state, not a failure.
                Color::InProgress => self.cyclic = true,
                // Cross or forward edge.
                Color::Done => {}
            }
        }
    }

    fn open(&mut self, graph: &G, vertex: G::VertexId) {
        let state = &mut self.states[vertex.as_usize()];
        state.color = Color::InProgress;
        self.time += 1;
        state.discovered = Time(self.time);

        let neighbors = graph
            .neighbors_directed(&vertex, Direction::Outgoing)
            .map(|(target, _)| target)
            .collect();

        self.stack.push(Frame {
            vertex,
            neighbors,
            next: 0,
        });
    }

    fn close(&mut self, vertex: G::VertexId) {
        let state = &mut self.states[vertex.as_usize()];
        state.topo_number = self.next_topo;
        self.next_topo -= 1;
        state.color = Color::Done;
        self.time += 1;
        state.finished = Time(self.time);
        self.finish.push(vertex);
    }

    /// Returns the state record of the given vertex as of the last run.
    pub fn state(&self, vertex: &G::VertexId) -> &VertexState<G::VertexId> {
        &self.states[vertex.as_usize()]
    }

    /// Iterates over the vertices of the last run in decreasing finish time.
    ///
    /// For a run that observed no back edge this sequence is a valid
    /// topological order: a vertex finishes only after everything reachable
    /// from it has finished.
    pub fn finish_order(&self) -> impl Iterator<Item = G::VertexId> + '_ {
        self.finish.iter().rev().copied()
    }

    /// Returns `true` if the last run observed a back edge, i.e. the
    /// traversed part of the graph contains a cycle.
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Returns the number of traversal trees the last run built.
    pub fn component_count(&self) -> usize {
        self.components
    }
}
