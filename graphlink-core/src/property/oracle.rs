//! Naive reference implementations used as property oracles.
//!
//! Both run in `O(V * E)` and share nothing with the structures under test.

/// Labels every node with the smallest node id in its component by
/// repeatedly relaxing labels across edges until nothing changes.
pub(super) fn component_labels(node_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut labels: Vec<usize> = (0..node_count).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for &(left, right) in edges {
            let low = labels[left].min(labels[right]);
            if labels[left] != low || labels[right] != low {
                labels[left] = low;
                labels[right] = low;
                changed = true;
            }
        }
    }
    labels
}

/// Groups nodes by label, members ascending, groups ordered by smallest
/// member.
pub(super) fn label_groups(labels: &[usize]) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (node, &label) in labels.iter().enumerate() {
        if label == node {
            groups.push(vec![node]);
        } else if let Some(group) = groups.iter_mut().find(|group| group.first() == Some(&label)) {
            group.push(node);
        }
    }
    groups
}

/// Hop counts from `start` over directed `edges` by Bellman-Ford relaxation.
pub(super) fn hop_counts(
    node_count: usize,
    edges: &[(usize, usize)],
    start: usize,
) -> Vec<Option<usize>> {
    let mut hops = vec![None; node_count];
    hops[start] = Some(0);
    for _ in 0..node_count {
        let mut changed = false;
        for &(from, to) in edges {
            let Some(base) = hops[from] else {
                continue;
            };
            let candidate: usize = base + 1;
            if hops[to].is_none_or(|current| candidate < current) {
                hops[to] = Some(candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    hops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_transitive_edges() {
        let labels = component_labels(5, &[(3, 4), (4, 1)]);
        assert_eq!(labels, vec![0, 1, 2, 1, 1]);
        assert_eq!(label_groups(&labels), vec![vec![0], vec![1, 3, 4], vec![2]]);
    }

    #[test]
    fn hop_counts_prefer_short_paths() {
        let hops = hop_counts(4, &[(0, 1), (1, 2), (2, 3), (0, 3)], 0);
        assert_eq!(hops, vec![Some(0), Some(1), Some(2), Some(1)]);
    }
}
