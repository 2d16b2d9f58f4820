//! Recursive (acyclic) ordering of regression equations.
//! A path model whose regression graph has a cycle is not identified by the
//! equation-wise estimator.

use std::collections::HashMap;

use anticoag_core::errors::FitError;
use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::spec::Equation;

/// Topological order of all variables in the regression graph
/// (predictor before outcome).
pub fn causal_order(equations: &[Equation]) -> Result<Vec<String>, FitError> {
    let mut graph: DiGraph<String, ()> = DiGraph::new();
    let mut index: HashMap<String, NodeIndex> = HashMap::new();
    let mut ensure = |graph: &mut DiGraph<String, ()>, name: &str| -> NodeIndex {
        *index
            .entry(name.to_string())
            .or_insert_with(|| graph.add_node(name.to_string()))
    };

    for eq in equations {
        let outcome = ensure(&mut graph, &eq.outcome);
        for predictor in &eq.predictors {
            let source = ensure(&mut graph, predictor);
            graph.add_edge(source, outcome, ());
        }
    }

    match toposort(&graph, None) {
        Ok(order) => Ok(order.into_iter().map(|idx| graph[idx].clone()).collect()),
        Err(cycle) => Err(FitError::NonRecursive {
            cycle: describe_cycle(&graph, cycle.node_id()),
        }),
    }
}

/// Names along the strongly connected component containing `start`,
/// closed back on the first name.
fn describe_cycle(graph: &DiGraph<String, ()>, start: NodeIndex) -> Vec<String> {
    let component = tarjan_scc(graph)
        .into_iter()
        .find(|scc| scc.contains(&start))
        .unwrap_or_else(|| vec![start]);
    let mut names: Vec<String> = component.iter().map(|&idx| graph[idx].clone()).collect();
    names.sort();
    if let Some(first) = names.first().cloned() {
        names.push(first);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(outcome: &str, predictors: &[&str]) -> Equation {
        Equation {
            outcome: outcome.to_string(),
            predictors: predictors.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn mediator_precedes_final_outcome() {
        let order = causal_order(&[eq("m", &["x"]), eq("y", &["x", "m"])]).unwrap();
        let pos = |n: &str| order.iter().position(|v| v == n).unwrap();
        assert!(pos("x") < pos("m"));
        assert!(pos("m") < pos("y"));
    }

    #[test]
    fn feedback_loop_is_rejected() {
        let err = causal_order(&[eq("a", &["b"]), eq("b", &["a"])]).unwrap_err();
        match err {
            FitError::NonRecursive { cycle } => assert_eq!(cycle, vec!["a", "b", "a"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn self_regression_is_rejected() {
        assert!(matches!(
            causal_order(&[eq("a", &["a"])]),
            Err(FitError::NonRecursive { .. })
        ));
    }
}
