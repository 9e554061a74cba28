//! Reset tree: prestige nodes, branch propagation and conversions.
//!
//! The tree only decides *which* layers a reset touches. Applying the reset
//! to layer state is the owner's job, driven by the returned [`ResetPlan`].

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::decimal::Decimal;

use super::resource::Resource;

#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<N, L> {
    pub id: N,
    /// Layer owned by this node.
    pub layer: L,
    /// Layers restored whenever this node resets.
    pub resets: Vec<L>,
}

/// Layers to restore for one reset, in application order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetPlan<N, L> {
    pub resetting: N,
    pub layers: Vec<L>,
}

impl<N, L: PartialEq> ResetPlan<N, L> {
    pub fn touches(&self, layer: &L) -> bool {
        self.layers.contains(layer)
    }
}

#[derive(Clone, Debug)]
pub struct ResetTree<N, L> {
    nodes: Vec<TreeNode<N, L>>,
    /// (upper, lower): resetting `upper` also resets `lower`.
    branches: Vec<(N, N)>,
}

impl<N, L> Default for ResetTree<N, L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            branches: Vec::new(),
        }
    }
}

impl<N: Copy + Eq + Debug, L: Copy + Eq + Debug> ResetTree<N, L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, id: N, layer: L, resets: &[L]) -> Self {
        self.nodes.push(TreeNode {
            id,
            layer,
            resets: resets.to_vec(),
        });
        self
    }

    pub fn branch(mut self, upper: N, lower: N) -> Self {
        self.branches.push((upper, lower));
        self
    }

    pub fn contains(&self, id: N) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn get(&self, id: N) -> Option<&TreeNode<N, L>> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode<N, L>> {
        self.nodes.iter()
    }

    /// Every node reachable through branches below `id`, breadth first.
    /// Cycles are cut at the first revisit.
    pub fn below(&self, id: N) -> Vec<N> {
        let mut seen = vec![id];
        let mut out = Vec::new();
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            for &(upper, lower) in &self.branches {
                if upper == current && !seen.contains(&lower) {
                    seen.push(lower);
                    out.push(lower);
                    queue.push_back(lower);
                }
            }
        }
        out
    }

    /// Union of the node's own closure and, for every node below it, that
    /// node's layer plus its closure. The resetting node's own layer is left
    /// alone so the gain it just received survives. `None` for unknown ids.
    pub fn reset_plan(&self, id: N) -> Option<ResetPlan<N, L>> {
        let Some(root) = self.get(id) else {
            log::warn!("reset requested for unknown tree node {:?}", id);
            return None;
        };

        let mut layers: Vec<L> = Vec::new();
        let mut push = |layer: L| {
            if layer != root.layer && !layers.contains(&layer) {
                layers.push(layer);
            }
        };

        root.resets.iter().copied().for_each(&mut push);
        for lower in self.below(id) {
            if let Some(node) = self.get(lower) {
                push(node.layer);
                node.resets.iter().copied().for_each(&mut push);
            }
        }

        Some(ResetPlan {
            resetting: id,
            layers,
        })
    }
}

/// Prestige conversion from a source resource into a gain resource.
#[derive(Clone, Copy, Debug)]
pub struct Conversion {
    pub formula: fn(Decimal) -> Decimal,
}

impl Conversion {
    /// Whole units a conversion would yield right now; never negative.
    pub fn gain(&self, source: Decimal) -> Decimal {
        (self.formula)(source).floor().max(Decimal::ZERO)
    }

    /// Credit `gain` with the conversion of `source`. The source is only
    /// read; zeroing it is left to the reset that follows.
    pub fn convert(&self, source: Decimal, gain: &mut Resource) -> Decimal {
        let amount = self.gain(source);
        if amount.is_positive() {
            gain.credit(amount);
        }
        amount
    }
}
