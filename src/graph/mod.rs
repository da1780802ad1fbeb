use crate::task::Task;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Dependency graph over predecessor links, one node per task and one
/// `pred -> task` edge per resolving `predecessor_id`. Dangling predecessor
/// ids contribute no edge.
pub struct DependencyGraph {
    graph: DiGraph<i64, ()>,
    id_to_index: HashMap<i64, NodeIndex>,
}

impl DependencyGraph {
    pub fn build(tasks: &[Task]) -> Self {
        let mut graph: DiGraph<i64, ()> = DiGraph::new();
        let mut id_to_index: HashMap<i64, NodeIndex> = HashMap::new();

        for task in tasks {
            let node_ix = graph.add_node(task.id);
            id_to_index.insert(task.id, node_ix);
        }

        for task in tasks {
            if let Some(pred_id) = task.predecessor_id {
                if let (Some(&u), Some(&v)) =
                    (id_to_index.get(&pred_id), id_to_index.get(&task.id))
                {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self { graph, id_to_index }
    }

    /// Id of some task on a dependency cycle, or `None` for acyclic input.
    pub fn find_cycle_member(&self) -> Option<i64> {
        toposort(&self.graph, None)
            .err()
            .map(|cycle| self.graph[cycle.node_id()])
    }

    pub fn contains(&self, task_id: i64) -> bool {
        self.id_to_index.contains_key(&task_id)
    }
}
