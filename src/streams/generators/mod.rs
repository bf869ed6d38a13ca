mod random_records;

pub use random_records::RandomRecordGenerator;
