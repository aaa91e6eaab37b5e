//! Integration smoke tests for `course_roi`

use course_roi::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
