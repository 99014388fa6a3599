use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PointwiseError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PointwiseError::unsupported("x")
            .to_string()
            .contains("unsupported operation:")
    );
    assert!(
        PointwiseError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde() {
    let err: PointwiseError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, PointwiseError::Serde(_)));
}
