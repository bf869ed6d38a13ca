use std::io::{Error, ErrorKind};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::stream::Stream;

/// Uniform random records over the value domains of a header.
///
/// Labels are drawn independently of the predictors, so the output is pure
/// noise; useful for exercising induction on arbitrary data.
#[derive(Debug)]
pub struct RandomRecordGenerator {
    seed: u64,
    rng: StdRng,
    header: Arc<InstanceHeader>,
    max_instances: Option<usize>,
    produced: usize,
}

impl RandomRecordGenerator {
    pub fn new(
        header: Arc<InstanceHeader>,
        max_instances: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if let Some(attr) = header
            .attributes
            .iter()
            .find(|attr| attr.number_of_values() == 0)
        {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Attribute {} has no values to draw from", attr.name()),
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            header,
            max_instances,
            produced: 0,
        })
    }
}

impl Stream for RandomRecordGenerator {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.max_instances.map_or(true, |max| self.produced < max)
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        if !self.has_more_instances() {
            return None;
        }

        let rng = &mut self.rng;
        let values = self
            .header
            .attributes
            .iter()
            .map(|attr| attr.codes[rng.random_range(0..attr.codes.len())])
            .collect();

        self.produced += 1;
        Some(Box::new(DenseInstance::new(Arc::clone(&self.header), values)))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
