use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::Stream;
use std::io::Error;
use std::sync::Arc;

pub struct VecStream {
    pub header: Arc<InstanceHeader>,
    pub rows: Vec<Vec<i32>>,
    idx: usize,
}

impl VecStream {
    pub fn new(header: Arc<InstanceHeader>, rows: Vec<Vec<i32>>) -> Self {
        Self {
            header,
            rows,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        if !self.has_more_instances() {
            return None;
        }

        let values = self.rows[self.idx].clone();
        self.idx += 1;
        Some(Box::new(DenseInstance::new(Arc::clone(&self.header), values)))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
