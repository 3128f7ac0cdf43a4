//! Header lookup shared by the read and write sides.

/// Reports whether `header` names a column `name` at least once.
///
/// Headers may contain duplicate names; one occurrence is enough.
pub(crate) fn contains_column(header: &[String], name: &str) -> bool {
    header.iter().any(|col| col == name)
}
