/// Sentinel meaning "not yet visited" for the unweighted SSSP's integer
/// distance field (`§3`: "integer with sentinel infinity meaning
/// unvisited").
pub const UNVISITED: u32 = u32::MAX;

/// Per-worker scratch for the unweighted (BFS) SSSP and its stress/
/// betweenness accumulators. Allocated once per worker and reset with
/// [`UnweightedScratch::reset_for_source`] before every source instead of
/// being reallocated — the reset is the one genuinely O(V) step Brandes'
/// algorithm requires per source (`§4.1`).
pub struct UnweightedScratch {
    pub p: Vec<Vec<usize>>,
    pub sigma: Vec<i64>,
    pub d: Vec<u32>,
    pub delta: Vec<f64>,
    pub stack: Vec<usize>,
}

impl UnweightedScratch {
    pub fn new(vertex_count: usize) -> Self {
        UnweightedScratch {
            p: vec![Vec::new(); vertex_count],
            sigma: vec![0; vertex_count],
            d: vec![UNVISITED; vertex_count],
            delta: vec![0.0; vertex_count],
            stack: Vec::with_capacity(vertex_count),
        }
    }

    pub fn reset_for_source(&mut self, source: usize) {
        for p in self.p.iter_mut() {
            p.clear();
        }
        self.d.iter_mut().for_each(|d| *d = UNVISITED);
        self.sigma.iter_mut().for_each(|s| *s = 0);
        self.delta.iter_mut().for_each(|delta| *delta = 0.0);
        self.stack.clear();
        self.sigma[source] = 1;
        self.d[source] = 0;
    }
}

/// Per-worker scratch for the weighted (Dijkstra) SSSP. `seen` and `d` are
/// kept as two disjoint buffers, as `§9` requires, so that "no tentative
/// value yet" can be distinguished from "tentative value is exactly zero".
pub struct WeightedScratch {
    pub p: Vec<Vec<usize>>,
    pub sigma: Vec<f64>,
    pub d: Vec<f64>,
    pub seen: Vec<f64>,
    pub delta: Vec<f64>,
    pub stack: Vec<usize>,
}

impl WeightedScratch {
    pub fn new(vertex_count: usize) -> Self {
        WeightedScratch {
            p: vec![Vec::new(); vertex_count],
            sigma: vec![0.0; vertex_count],
            d: vec![-1.0; vertex_count],
            seen: vec![-1.0; vertex_count],
            delta: vec![0.0; vertex_count],
            stack: Vec::with_capacity(vertex_count),
        }
    }

    pub fn reset_for_source(&mut self, source: usize) {
        for p in self.p.iter_mut() {
            p.clear();
        }
        self.d.iter_mut().for_each(|d| *d = -1.0);
        self.sigma.iter_mut().for_each(|s| *s = 0.0);
        self.delta.iter_mut().for_each(|delta| *delta = 0.0);
        self.seen.iter_mut().for_each(|s| *s = -1.0);
        self.stack.clear();
        self.sigma[source] = 1.0;
        self.seen[source] = 0.0;
    }
}
