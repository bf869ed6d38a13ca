use crate::core::instances::Instance;
use std::fmt;
use std::ops::Deref;

/// Requires `field` to hold `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub field: usize,
    pub value: i32,
}

impl Constraint {
    pub fn new(field: usize, value: i32) -> Self {
        Self { field, value }
    }

    /// A record lacking the field never satisfies the constraint.
    pub fn is_satisfied_by<I: Instance + ?Sized>(&self, instance: &I) -> bool {
        instance.value_at_index(self.field) == Some(self.value)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} => {}}}", self.field, self.value)
    }
}

/// Conjunction of constraints accumulated along one root-to-node path.
///
/// Constraints are only ever added through [`ConstraintPath::scoped`], which
/// removes them again once the nested work returns, so sibling branches and
/// callers never observe each other's constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintPath {
    constraints: Vec<Constraint>,
}

impl ConstraintPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scoped<R>(&mut self, constraint: Constraint, f: impl FnOnce(&mut Self) -> R) -> R {
        self.constraints.push(constraint);
        let result = f(self);
        self.constraints.pop();
        result
    }

    /// Whether some constraint on the path already fixes `field`.
    pub fn constrains(&self, field: usize) -> bool {
        self.constraints.iter().any(|c| c.field == field)
    }
}

impl Deref for ConstraintPath {
    type Target = [Constraint];

    fn deref(&self) -> &[Constraint] {
        &self.constraints
    }
}

pub fn is_satisfied_by_all<I: Instance + ?Sized>(instance: &I, constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| c.is_satisfied_by(instance))
}

/// Keeps the samples matching every constraint, preserving their order.
pub fn filter<'a, I: Instance>(samples: &[&'a I], constraints: &[Constraint]) -> Vec<&'a I> {
    samples
        .iter()
        .copied()
        .filter(|sample| is_satisfied_by_all(*sample, constraints))
        .collect()
}

pub fn format_constraints(constraints: &[Constraint]) -> String {
    constraints.iter().map(Constraint::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;
    use crate::testing::dummies::header_xor;

    fn records() -> Vec<DenseInstance> {
        [[0, 0, 0], [0, 1, 1], [1, 0, 1], [1, 1, 0], [0, 1, 0]]
            .iter()
            .map(|r| DenseInstance::new(header_xor(), r.to_vec()))
            .collect()
    }

    #[test]
    fn empty_constraints_pass_everything() {
        let recs = records();
        let samples: Vec<&DenseInstance> = recs.iter().collect();
        assert_eq!(filter(&samples, &[]).len(), 5);
    }

    #[test]
    fn conjunction_preserves_order() {
        let recs = records();
        let samples: Vec<&DenseInstance> = recs.iter().collect();
        let got = filter(&samples, &[Constraint::new(0, 0), Constraint::new(1, 1)]);
        let rows: Vec<Vec<i32>> = got.iter().map(|r| r.values.clone()).collect();
        assert_eq!(rows, vec![vec![0, 1, 1], vec![0, 1, 0]]);
        assert_eq!(samples.len(), 5);
    }

    #[test]
    fn filter_is_idempotent() {
        let recs = records();
        let samples: Vec<&DenseInstance> = recs.iter().collect();
        let constraints = [Constraint::new(1, 1)];
        let once = filter(&samples, &constraints);
        let twice = filter(&once, &constraints);
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(&twice).all(|(a, b)| std::ptr::eq(*a, *b)));
    }

    #[test]
    fn missing_field_fails_constraint() {
        let recs = records();
        assert!(!Constraint::new(7, 0).is_satisfied_by(&recs[0]));
    }

    #[test]
    fn scoped_constraint_is_removed_on_return() {
        let mut path = ConstraintPath::new();
        let inner_len = path.scoped(Constraint::new(0, 1), |p| {
            assert!(p.constrains(0));
            p.scoped(Constraint::new(1, 0), |p| p.len())
        });
        assert_eq!(inner_len, 2);
        assert!(path.is_empty());
        assert!(!path.constrains(0));
    }

    #[test]
    fn display_matches_path_notation() {
        let path = [Constraint::new(0, 2), Constraint::new(2, 20)];
        assert_eq!(format_constraints(&path), "{0 => 2}{2 => 20}");
    }
}
