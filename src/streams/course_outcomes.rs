use crate::core::attributes::NominalAttribute;
use crate::core::dataset::Dataset;
use crate::core::error::DatasetError;
use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Course topic the student picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(i32)]
pub enum Topic {
    Astar = 0,
    Dtree = 1,
    Games = 2,
}

/// Score of the second assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[repr(i32)]
pub enum Ass2 {
    #[strum(serialize = "0")]
    Ass0 = 0,
    #[strum(serialize = "5")]
    Ass5 = 5,
    #[strum(serialize = "10")]
    Ass10 = 10,
    #[strum(serialize = "15")]
    Ass15 = 15,
    #[strum(serialize = "20")]
    Ass20 = 20,
}

const PASS: usize = 3;

fn boolean_attribute(name: &str) -> NominalAttribute {
    NominalAttribute::with_values(name.into(), vec!["false".into(), "true".into()])
}

/// Schema of the course table: `topic, ass1, ass2, pass`, label `pass`.
pub fn course_outcomes_header() -> Arc<InstanceHeader> {
    let topic = NominalAttribute::with_coded_values(
        "topic".into(),
        Topic::iter().map(|t| (t as i32, t.to_string())).collect(),
    );
    let ass2 = NominalAttribute::with_coded_values(
        "ass2".into(),
        Ass2::iter().map(|a| (a as i32, a.to_string())).collect(),
    );
    let attributes = vec![topic, boolean_attribute("ass1"), ass2, boolean_attribute("pass")];

    Arc::new(InstanceHeader::new("course-outcomes".into(), attributes, PASS))
}

/// The 40 hand-collected course records.
pub fn course_outcomes() -> Result<Dataset, DatasetError> {
    use Ass2::*;
    use Topic::*;

    let rows: [(Topic, bool, Ass2, bool); 40] = [
        (Astar, true, Ass0, true),
        (Astar, true, Ass0, true),
        (Astar, false, Ass0, true),
        (Astar, false, Ass10, true),
        (Dtree, false, Ass0, true),
        (Astar, false, Ass0, true),
        (Dtree, true, Ass5, true),
        (Dtree, true, Ass15, false),
        (Games, true, Ass20, true),
        (Games, true, Ass20, true),
        (Games, true, Ass20, true),
        (Games, false, Ass20, true),
        (Games, false, Ass20, true),
        (Games, true, Ass5, false),
        (Games, true, Ass5, false),
        (Games, true, Ass10, true),
        (Astar, true, Ass5, false),
        (Dtree, true, Ass0, false),
        (Dtree, true, Ass0, false),
        (Dtree, false, Ass5, true),
        (Games, false, Ass5, false),
        (Astar, false, Ass5, true),
        (Games, false, Ass10, false),
        (Games, false, Ass20, true),
        (Games, true, Ass20, true),
        (Dtree, false, Ass20, true),
        (Astar, true, Ass20, true),
        (Games, false, Ass20, true),
        (Games, false, Ass15, true),
        (Games, false, Ass0, false),
        (Games, true, Ass0, false),
        (Games, true, Ass0, false),
        (Games, true, Ass0, true),
        (Games, false, Ass10, true),
        (Games, false, Ass15, false),
        (Dtree, false, Ass0, false),
        (Dtree, false, Ass0, false),
        (Games, true, Ass20, true),
        (Games, true, Ass20, true),
        (Astar, true, Ass15, true),
    ];

    let rows = rows
        .iter()
        .map(|&(topic, ass1, ass2, pass)| {
            vec![topic as i32, ass1 as i32, ass2 as i32, pass as i32]
        })
        .collect();

    Dataset::from_rows(course_outcomes_header(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::Instance;
    use std::str::FromStr;

    #[test]
    fn header_matches_table_layout() {
        let h = course_outcomes_header();
        assert_eq!(h.number_of_attributes(), 4);
        assert_eq!(h.class_index(), 3);
        assert_eq!(h.attribute_name(0), "topic");
        assert_eq!(h.attribute_name(3), "pass");
        assert_eq!(h.describe_value(0, 2), "GAMES");
        assert_eq!(h.describe_value(2, 15), "15");
        assert_eq!(h.attribute_at_index(2).unwrap().codes, vec![0, 5, 10, 15, 20]);
    }

    #[test]
    fn strum_names_round_trip() {
        assert_eq!(Topic::from_str("DTREE").unwrap(), Topic::Dtree);
        assert_eq!(Ass2::from_str("20").unwrap() as i32, 20);
        let name: &'static str = Topic::Astar.into();
        assert_eq!(name, "ASTAR");
    }

    #[test]
    fn table_has_forty_records() {
        let ds = course_outcomes().unwrap();
        assert_eq!(ds.len(), 40);
        let first = &ds.instances()[0];
        assert_eq!(first.to_vec(), vec![0, 1, 0, 1]);
        let passed = ds
            .instances()
            .iter()
            .filter(|i| i.class_value() == Some(1))
            .count();
        assert_eq!(passed, 26);
    }
}
