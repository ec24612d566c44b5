//! Function name normalization for display.
//!
//! Full signatures like `transfer(address,uint256)` are noisy in a report.
//! When a base name is unique within a contract we show just the base name;
//! overloaded functions keep their full signatures to stay distinguishable.

use std::collections::HashMap;

/// Map each signature to its display name
///
/// **Public** - pure function, total over the input set
///
/// # Arguments
/// * `signatures` - every function signature seen for one contract,
///   across both report sides
///
/// # Returns
/// signature -> display name. A signature collapses to its base name
/// (the part before the first `(`) only when that base name occurs exactly
/// once in the input; every member of a colliding group keeps its full
/// signature.
pub fn normalize_function_names<'a>(
    signatures: impl IntoIterator<Item = &'a str>,
) -> HashMap<&'a str, String> {
    let signatures: Vec<&str> = signatures.into_iter().collect();

    let mut base_counts: HashMap<&str, usize> = HashMap::new();
    for signature in &signatures {
        *base_counts.entry(base_name(signature)).or_insert(0) += 1;
    }

    signatures
        .into_iter()
        .map(|signature| {
            let base = base_name(signature);
            let display = if base_counts[base] > 1 {
                signature.to_string()
            } else {
                base.to_string()
            };
            (signature, display)
        })
        .collect()
}

/// The part of a signature before the first `(`
fn base_name(signature: &str) -> &str {
    signature.split('(').next().unwrap_or(signature)
}
