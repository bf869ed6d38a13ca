mod nominal_attribute_multiway_test;

pub use nominal_attribute_multiway_test::NominalAttributeMultiwayTest;
