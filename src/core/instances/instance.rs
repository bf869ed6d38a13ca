use crate::core::instance_header::InstanceHeader;

/// Read access to one categorical record.
///
/// Fields are addressed by their position in the [`InstanceHeader`]; a field
/// the record does not carry yields `None`.
pub trait Instance {
    fn value_at_index(&self, index: usize) -> Option<i32>;

    fn number_of_attributes(&self) -> usize;

    fn class_index(&self) -> usize;

    fn class_value(&self) -> Option<i32> {
        self.value_at_index(self.class_index())
    }

    fn to_vec(&self) -> Vec<i32>;

    fn header(&self) -> &InstanceHeader;
}
