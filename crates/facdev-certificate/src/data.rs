//! Certificate input data and identifier derivation.

/// Input for one rendered certificate. All display strings arrive
/// preformatted; the renderer never consults the clock or any store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateData {
    /// Recipient's display name, printed uppercased.
    pub faculty_name: String,
    /// Title of the completed activity.
    pub activity_title: String,
    /// Activity kind label, e.g. `workshop`.
    pub activity_kind: String,
    /// Duration display string, e.g. `16 hours`.
    pub duration: String,
    /// Issue date display string, e.g. `March 5, 2024`.
    pub issue_date: String,
    /// Development score awarded.
    pub score: u32,
    /// Printed certificate identifier, see [`certificate_id`].
    pub certificate_id: String,
}

/// Derives the printed certificate identifier from an activity
/// identifier: `CERT-` followed by the first eight characters,
/// uppercased. Shorter identifiers keep whatever is available.
pub fn certificate_id(activity_id: &str) -> String {
    let head: String = activity_id.chars().take(8).collect();
    format!("CERT-{}", head.to_uppercase())
}
