use crate::{
    error::{Error, Result},
    executor::{
        aggregate, count_orbits, count_orbits_serial, Census, OrbitCounts, SPLITS_PER_WORKER,
    },
    graph::Graph,
};
use log::{debug, info, warn};
use std::time::Instant;

/// One graphlet census over a built graph.
///
/// ```no_run
/// # fn main() -> gdv::error::Result<()> {
/// let graph = gdv::graph::Graph::new(3, vec![(1, 2), (2, 3), (3, 1)])?;
/// let census = gdv::task::Task::new(&graph).threads(4).run()?;
/// println!("{}", census);
/// # Ok(())
/// # }
/// ```
pub struct Task<'a> {
    graph: &'a Graph,
    threads: Option<usize>,
}

impl<'a> Task<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            threads: None,
        }
    }

    /// Runs on the calling thread if `threads == 1`, otherwise on a dedicated
    /// pool of `threads` workers. Without this, rayon's global pool is used.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn run(self) -> Result<Census> {
        self.check_accumulators()?;
        let time_now = Instant::now();
        let counts = match self.threads {
            None => count_orbits(self.graph),
            Some(1) => count_orbits_serial(self.graph),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                debug!("pool: {} threads", pool.current_num_threads());
                pool.install(|| count_orbits(self.graph))
            }
        };
        info!("count_time: {}", time_now.elapsed().as_millis());
        let time_now = Instant::now();
        let census = aggregate(self.graph, &counts);
        info!("aggregate_time: {}", time_now.elapsed().as_millis());
        Ok(census)
    }

    /// Fails if one accumulator overflows `usize`; warns if the accumulators
    /// the workers may allocate exceed the available memory.
    fn check_accumulators(&self) -> Result<()> {
        let num_vertices = self.graph.num_vertices();
        let size = OrbitCounts::size_of(num_vertices)
            .ok_or(Error::GraphTooLarge { num_vertices })?;
        let num_accumulators = match self.threads {
            Some(1) => 1,
            Some(0) | None => SPLITS_PER_WORKER * rayon::current_num_threads(),
            Some(threads) => SPLITS_PER_WORKER * threads,
        };
        let total = (size as u64).saturating_mul(num_accumulators as u64);
        if let Ok(mem) = sys_info::mem_info() {
            if total > mem.avail.saturating_mul(1024) {
                warn!(
                    "{} orbit accumulators need {}M, only {}M available",
                    num_accumulators,
                    total / 1024 / 1024,
                    mem.avail / 1024
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphlet::Graphlet;

    #[test]
    fn test_threads() {
        let edges = vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (1, 3), (2, 6)];
        let graph = Graph::new(6, edges).unwrap();
        let census = Task::new(&graph).run().unwrap();
        assert_eq!(census.graphlet_count(Graphlet::TRIANGLE), 1);
        assert_eq!(Task::new(&graph).threads(1).run().unwrap(), census);
        assert_eq!(Task::new(&graph).threads(3).run().unwrap(), census);
        assert_eq!(Task::new(&graph).threads(0).run().unwrap(), census);
    }
}
