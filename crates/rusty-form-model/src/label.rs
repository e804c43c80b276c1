// File: crates/rusty-form-model/src/label.rs
// Purpose: Default label generation from attribute identifiers

use heck::ToTitleCase;

/// Generate a user-friendly label from an attribute name
///
/// Underscores, dashes and dots separate words, as do camel-case boundaries.
/// Each word gets an upper-case first letter and the words are joined with
/// single spaces, so `department_name` and `DepartmentName` both become
/// `Department Name`.
pub fn generate_label(attribute: &str) -> String {
    attribute.to_title_case()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("server", "Server")]
    #[case("department_name", "Department Name")]
    #[case("DepartmentName", "Department Name")]
    #[case("departmentName", "Department Name")]
    #[case("department-name", "Department Name")]
    #[case("department.name", "Department Name")]
    #[case("textArea", "Text Area")]
    #[case("", "")]
    fn test_generate_label(#[case] attribute: &str, #[case] expected: &str) {
        assert_eq!(generate_label(attribute), expected);
    }
}
