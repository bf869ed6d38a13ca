use crate::core::error::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<i32>,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<i32>) -> DenseInstance {
        DenseInstance { header, values }
    }

    /// Builds a record from one display label per attribute, in header order.
    pub fn from_labels<S: AsRef<str>>(
        header: Arc<InstanceHeader>,
        labels: &[S],
    ) -> Result<DenseInstance, DatasetError> {
        if labels.len() != header.number_of_attributes() {
            return Err(DatasetError::ArityMismatch {
                expected: header.number_of_attributes(),
                found: labels.len(),
            });
        }

        let mut values = Vec::with_capacity(labels.len());
        for (attribute, label) in header.attributes.iter().zip(labels) {
            let label = label.as_ref();
            let code = attribute
                .code_of(label)
                .ok_or_else(|| DatasetError::UnknownLabel {
                    attribute: attribute.name().to_string(),
                    label: label.to_string(),
                })?;
            values.push(code);
        }

        Ok(DenseInstance::new(header, values))
    }
}

impl Instance for DenseInstance {
    fn value_at_index(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    fn class_index(&self) -> usize {
        self.header.class_index()
    }

    fn to_vec(&self) -> Vec<i32> {
        self.values.clone()
    }

    fn header(&self) -> &InstanceHeader {
        &self.header
    }
}
