mod course_outcomes;
mod csv_file;
pub mod generators;
mod stream;

pub use course_outcomes::{Ass2, Topic, course_outcomes, course_outcomes_header};
pub use csv_file::CsvRecordStream;
pub use stream::Stream;
