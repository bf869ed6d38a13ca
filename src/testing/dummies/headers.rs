use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

fn two_valued(name: &str, a: &str, b: &str) -> NominalAttribute {
    NominalAttribute::with_values(name.into(), vec![a.into(), b.into()])
}

/// Two binary predictors `a`, `b` and a binary class, label last.
pub fn header_xor() -> Arc<InstanceHeader> {
    Arc::new(InstanceHeader::new(
        "xor".into(),
        vec![
            two_valued("a", "zero", "one"),
            two_valued("b", "zero", "one"),
            two_valued("class", "no", "yes"),
        ],
        2,
    ))
}
