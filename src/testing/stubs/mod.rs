pub mod oracle_classifier;
pub mod scripted_driver;
pub mod vec_stream;

pub use oracle_classifier::OracleClassifier;
pub use scripted_driver::ScriptedDriver;
pub use vec_stream::VecStream;
