use crate::core::error::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::stream::Stream;
use crate::utils::file_parsing::split_cells;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::Path;
use std::sync::Arc;

/// Records read from comma-separated attribute labels.
///
/// The whole source is parsed up front so malformed rows surface as a
/// [`DatasetError`] naming the line, instead of silently ending the stream.
pub struct CsvRecordStream {
    header: Arc<InstanceHeader>,
    records: Vec<DenseInstance>,
    idx: usize,
}

impl CsvRecordStream {
    pub fn open<P: AsRef<Path>>(
        path: P,
        header: Arc<InstanceHeader>,
    ) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), header)
    }

    pub fn from_reader<R: BufRead>(
        reader: R,
        header: Arc<InstanceHeader>,
    ) -> Result<Self, DatasetError> {
        let mut records = Vec::new();
        let mut seen_data = false;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let cells = split_cells(trimmed);

            if !seen_data && Self::is_column_row(&header, &cells) {
                seen_data = true;
                continue;
            }
            seen_data = true;

            let record = DenseInstance::from_labels(Arc::clone(&header), &cells).map_err(
                |source| DatasetError::Line {
                    line: line_no + 1,
                    source: Box::new(source),
                },
            )?;
            records.push(record);
        }

        Ok(Self {
            header,
            records,
            idx: 0,
        })
    }

    fn is_column_row(header: &InstanceHeader, cells: &[String]) -> bool {
        cells.len() == header.number_of_attributes()
            && header
                .attributes
                .iter()
                .zip(cells)
                .all(|(attr, cell)| attr.name() == cell)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Stream for CsvRecordStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.records.len()
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        let record = self.records.get(self.idx)?.clone();
        self.idx += 1;
        Some(Box::new(record))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
