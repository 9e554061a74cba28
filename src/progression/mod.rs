//! Generic progression building blocks, independent of any game content.

pub mod modifier;
pub mod progress;
pub mod purchase;
pub mod resource;
pub mod tree;

pub use modifier::{Amount, Modifier, ModifierChain, ModifierTable, Operation};
pub use progress::{OnFull, Phase, ProgressAction, Trigger};
pub use purchase::{CostCurve, Repeatable, RepeatableDef, Upgrade, UpgradeDef};
pub use resource::Resource;
pub use tree::{Conversion, ResetPlan, ResetTree, TreeNode};
