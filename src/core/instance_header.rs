use crate::core::attributes::NominalAttribute;

/// Schema shared by every record of a dataset: attribute order, value
/// domains and which attribute is the label.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<NominalAttribute>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<NominalAttribute>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> Option<&NominalAttribute> {
        self.attributes.get(self.class_index)
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute()
            .map(NominalAttribute::number_of_values)
            .unwrap_or(0)
    }

    /// Indices of every attribute except the label, in schema order.
    pub fn predictor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.attributes.len()).filter(move |&i| i != self.class_index)
    }

    pub fn attribute_name(&self, index: usize) -> String {
        match self.attributes.get(index) {
            Some(attr) => attr.name().to_string(),
            None => index.to_string(),
        }
    }

    /// Display label for a coded value, falling back to the raw code.
    pub fn describe_value(&self, index: usize, code: i32) -> String {
        self.attributes
            .get(index)
            .and_then(|attr| attr.label_of(code))
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string())
    }
}
