//! Modifiers and ordered modifier chains.
//!
//! Every amount and predicate is a plain `fn` over a context `S` evaluated
//! at call time, so modifiers may read any state (including other chains
//! reached through `S`) without the chain itself holding references.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::decimal::Decimal;

/// A number that is either fixed or computed from the context on demand.
pub enum Amount<S> {
    Fixed(Decimal),
    Computed(fn(&S) -> Decimal),
}

impl<S> Amount<S> {
    pub fn eval(&self, ctx: &S) -> Decimal {
        match self {
            Amount::Fixed(value) => *value,
            Amount::Computed(f) => f(ctx),
        }
    }
}

impl<S> From<f64> for Amount<S> {
    fn from(value: f64) -> Self {
        Amount::Fixed(Decimal::from_f64(value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Multiply,
    Add,
}

pub struct Modifier<S> {
    pub description: &'static str,
    pub operation: Operation,
    pub amount: Amount<S>,
    pub enabled: fn(&S) -> bool,
}

impl<S> Modifier<S> {
    pub fn multiply(description: &'static str, amount: Amount<S>, enabled: fn(&S) -> bool) -> Self {
        Self {
            description,
            operation: Operation::Multiply,
            amount,
            enabled,
        }
    }

    pub fn add(description: &'static str, amount: Amount<S>, enabled: fn(&S) -> bool) -> Self {
        Self {
            description,
            operation: Operation::Add,
            amount,
            enabled,
        }
    }

    pub fn is_enabled(&self, ctx: &S) -> bool {
        (self.enabled)(ctx)
    }

    /// Apply unconditionally; `ModifierChain::apply` does the enabled check.
    pub fn transform(&self, ctx: &S, value: Decimal) -> Decimal {
        let amount = self.amount.eval(ctx);
        match self.operation {
            Operation::Multiply => value * amount,
            Operation::Add => value + amount,
        }
    }
}

/// Ordered, strictly sequential composition of modifiers.
pub struct ModifierChain<S> {
    modifiers: Vec<Modifier<S>>,
}

impl<S> Default for ModifierChain<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ModifierChain<S> {
    pub fn new() -> Self {
        Self {
            modifiers: Vec::new(),
        }
    }

    pub fn then(mut self, modifier: Modifier<S>) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Run `input` through every modifier in declared order. Disabled
    /// modifiers pass the running value through untouched.
    pub fn apply(&self, ctx: &S, input: Decimal) -> Decimal {
        self.modifiers.iter().fold(input, |value, m| {
            if m.is_enabled(ctx) {
                m.transform(ctx, value)
            } else {
                value
            }
        })
    }

    /// Description, operation and current amount of each enabled modifier.
    pub fn breakdown(&self, ctx: &S) -> Vec<(&'static str, Operation, Decimal)> {
        self.modifiers
            .iter()
            .filter(|m| m.is_enabled(ctx))
            .map(|m| (m.description, m.operation, m.amount.eval(ctx)))
            .collect()
    }
}

/// Modifier chains addressed by symbolic key.
pub struct ModifierTable<K, S> {
    chains: HashMap<K, ModifierChain<S>>,
}

impl<K: Copy + Eq + Hash + Debug, S> Default for ModifierTable<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash + Debug, S> ModifierTable<K, S> {
    pub fn new() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, chain: ModifierChain<S>) {
        self.chains.insert(key, chain);
    }

    pub fn get(&self, key: K) -> Option<&ModifierChain<S>> {
        self.chains.get(&key)
    }

    /// Apply one chain. A missing key acts as the identity.
    pub fn apply(&self, key: K, ctx: &S, input: Decimal) -> Decimal {
        match self.chains.get(&key) {
            Some(chain) => chain.apply(ctx, input),
            None => {
                log::debug!("no modifier chain registered for {:?}", key);
                input
            }
        }
    }

    /// Apply several chains in series, in the order given.
    pub fn apply_series(&self, keys: &[K], ctx: &S, input: Decimal) -> Decimal {
        keys.iter().fold(input, |value, key| self.apply(*key, ctx, value))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn mixed_chain(len: usize) -> ModifierChain<Vec<bool>> {
        let mut chain = ModifierChain::new();
        for i in 0..len {
            chain = if i % 2 == 0 {
                chain.then(Modifier::multiply("x3", Amount::from(3.0), |_: &Vec<bool>| true))
            } else {
                chain.then(Modifier::add("+1", Amount::from(1.0), |_: &Vec<bool>| true))
            };
        }
        chain
    }

    proptest! {
        #[test]
        fn prop_disabled_chain_is_identity(x in -1e12f64..1e12, len in 0usize..8) {
            let mut chain = ModifierChain::new();
            for _ in 0..len {
                chain = chain.then(Modifier::multiply("x", Amount::from(7.0), |_: &()| false));
                chain = chain.then(Modifier::add("+", Amount::from(7.0), |_: &()| false));
            }
            let input = Decimal::from_f64(x);
            prop_assert_eq!(chain.apply(&(), input), input);
        }

        #[test]
        fn prop_apply_is_idempotent(x in 0.0f64..1e6, len in 0usize..8) {
            let chain = mixed_chain(len);
            let ctx = vec![true];
            let input = Decimal::from_f64(x);
            prop_assert_eq!(chain.apply(&ctx, input), chain.apply(&ctx, input));
        }
    }
}
