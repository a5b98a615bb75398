//! Results of one analysis run

use super::dependency_graph::DependencyGraph;
use serde::Serialize;
use std::time::Duration;

/// The graph of one run plus what the renderers need around it
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResults {
    pub graph: DependencyGraph,

    /// Import cycles among directories, see [`DependencyGraph::find_cycles`]
    pub cycles: Vec<Vec<String>>,

    #[serde(with = "duration_millis")]
    pub scan_duration: Duration,
}

impl AnalysisResults {
    pub fn new(graph: DependencyGraph) -> Self {
        let cycles = graph.find_cycles();
        Self {
            graph,
            cycles,
            scan_duration: Duration::default(),
        }
    }

    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.scan_duration = duration;
    }

    /// Format the scan duration for display
    pub fn format_duration(&self) -> String {
        let millis = self.scan_duration.as_millis();
        if millis < 1000 {
            format!("{}ms", millis)
        } else {
            format!("{:.2}s", self.scan_duration.as_secs_f64())
        }
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_computed_on_creation() {
        let mut graph = DependencyGraph::new("m", "a");
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");

        let results = AnalysisResults::new(graph);
        assert_eq!(results.cycles, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_format_duration() {
        let mut results = AnalysisResults::new(DependencyGraph::new("m", "a"));
        results.set_scan_duration(Duration::from_millis(250));
        assert_eq!(results.format_duration(), "250ms");
        results.set_scan_duration(Duration::from_millis(1500));
        assert_eq!(results.format_duration(), "1.50s");
    }
}
