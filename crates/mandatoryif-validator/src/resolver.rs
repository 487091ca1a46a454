//! Field resolution across nested groups
//!
//! Conditions may reference any field of the record, whether it sits at the
//! top level or inside a group. Resolution therefore works on the flattened
//! tree rather than on siblings.

use mandatoryif_core::Field;

/// Flatten a field tree in pre-order: each field followed by its descendants
pub fn flatten(fields: &[Field]) -> Vec<&Field> {
    let mut result = Vec::new();
    collect(fields, &mut result);
    result
}

fn collect<'a>(fields: &'a [Field], result: &mut Vec<&'a Field>) {
    for field in fields {
        result.push(field);
        collect(&field.children, result);
    }
}

/// First field whose name matches exactly (case-sensitive)
pub fn find_field<'a>(flattened: &[&'a Field], name: &str) -> Option<&'a Field> {
    flattened.iter().copied().find(|field| field.name == name)
}
