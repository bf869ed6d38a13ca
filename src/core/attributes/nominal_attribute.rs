use std::collections::HashMap;

/// A categorical attribute whose values are stored as integer codes.
///
/// Every code carries a display label; `label_to_code` is the reverse lookup
/// used when records are read from text.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub codes: Vec<i32>,
    pub values: Vec<String>,
    pub label_to_code: HashMap<String, i32>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            codes: Vec::new(),
            values: Vec::new(),
            label_to_code: HashMap::new(),
        }
    }

    /// Labels are coded `0, 1, 2, ...` in the given order.
    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let coded = values
            .into_iter()
            .enumerate()
            .map(|(code, label)| (code as i32, label))
            .collect();
        Self::with_coded_values(name, coded)
    }

    pub fn with_coded_values(name: String, coded: Vec<(i32, String)>) -> NominalAttribute {
        let mut attribute = NominalAttribute::new(name);
        for (code, label) in coded {
            attribute.label_to_code.insert(label.clone(), code);
            attribute.codes.push(code);
            attribute.values.push(label);
        }
        attribute
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number_of_values(&self) -> usize {
        self.codes.len()
    }

    pub fn code_of(&self, label: &str) -> Option<i32> {
        self.label_to_code.get(label).copied()
    }

    pub fn label_of(&self, code: i32) -> Option<&str> {
        self.codes
            .iter()
            .position(|&c| c == code)
            .map(|i| self.values[i].as_str())
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (i32, &String)> {
        self.codes.iter().copied().zip(self.values.iter())
    }
}
