use crate::core::error::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::Stream;
use std::sync::Arc;

/// An ordered, immutable collection of records sharing one header.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(
        header: Arc<InstanceHeader>,
        instances: Vec<DenseInstance>,
    ) -> Result<Dataset, DatasetError> {
        if header.class_index() >= header.number_of_attributes() {
            return Err(DatasetError::InvalidClassIndex {
                class_index: header.class_index(),
                attributes: header.number_of_attributes(),
            });
        }
        let expected = header.number_of_attributes();
        for instance in &instances {
            if instance.number_of_attributes() != expected {
                return Err(DatasetError::ArityMismatch {
                    expected,
                    found: instance.number_of_attributes(),
                });
            }
        }
        Ok(Dataset { header, instances })
    }

    pub fn from_rows(
        header: Arc<InstanceHeader>,
        rows: Vec<Vec<i32>>,
    ) -> Result<Dataset, DatasetError> {
        let instances = rows
            .into_iter()
            .map(|values| DenseInstance::new(Arc::clone(&header), values))
            .collect();
        Dataset::new(header, instances)
    }

    /// Drains a stream into a dataset. The stream is not restarted.
    pub fn from_stream(stream: &mut dyn Stream) -> Result<Dataset, DatasetError> {
        let header = Arc::new(stream.header().clone());
        let mut instances = Vec::new();
        while let Some(instance) = stream.next_instance() {
            instances.push(DenseInstance::new(Arc::clone(&header), instance.to_vec()));
        }
        Dataset::new(header, instances)
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Borrowed view of every record, the starting point of tree induction.
    pub fn samples(&self) -> Vec<&DenseInstance> {
        self.instances.iter().collect()
    }
}
