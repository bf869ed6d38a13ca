use crate::core::instances::Instance;

/// Routes a record to one branch per observed value of a nominal attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalAttributeMultiwayTest {
    attribute_index: usize,
    branch_values: Vec<i32>,
}

impl NominalAttributeMultiwayTest {
    pub fn new(attribute_index: usize, branch_values: Vec<i32>) -> Self {
        Self {
            attribute_index,
            branch_values,
        }
    }

    /// `None` when the record lacks the attribute or holds a value no branch
    /// was grown for.
    pub fn branch_for_instance(&self, instance: &dyn Instance) -> Option<usize> {
        let value = instance.value_at_index(self.attribute_index)?;
        self.branch_values.iter().position(|&v| v == value)
    }

    pub fn max_branches(&self) -> usize {
        self.branch_values.len()
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }

    pub fn branch_value(&self, branch: usize) -> Option<i32> {
        self.branch_values.get(branch).copied()
    }

    pub fn branch_values(&self) -> &[i32] {
        &self.branch_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;
    use crate::testing::dummies::header_xor;

    #[test]
    fn routes_by_value_position() {
        let test = NominalAttributeMultiwayTest::new(1, vec![1, 0]);
        let inst = DenseInstance::new(header_xor(), vec![0, 0, 1]);
        assert_eq!(test.branch_for_instance(&inst), Some(1));
        assert_eq!(test.max_branches(), 2);
        assert_eq!(test.branch_value(0), Some(1));
        assert_eq!(test.branch_value(2), None);
    }

    #[test]
    fn unseen_value_has_no_branch() {
        let test = NominalAttributeMultiwayTest::new(0, vec![0]);
        let inst = DenseInstance::new(header_xor(), vec![1, 0, 1]);
        assert_eq!(test.branch_for_instance(&inst), None);

        let short = DenseInstance::new(header_xor(), vec![]);
        assert_eq!(test.branch_for_instance(&short), None);
    }
}
