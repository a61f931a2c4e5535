use assert_matches::assert_matches;

use cloud_invoker::id::{
    IdError, build_client_token, cen_child_instance_type, convert_integer, next_page_number,
    parse_resource_id, terraform_to_api, trim,
};

#[test]
fn splits_composite_ids() {
    let parts = parse_resource_id("cen-123:vpc-456:cn-hangzhou", 3).expect("id should parse");

    assert_eq!(parts, ["cen-123", "vpc-456", "cn-hangzhou"]);
}

#[test]
fn rejects_wrong_part_count() {
    let err = parse_resource_id("cen-123:vpc-456", 3).expect_err("should fail");

    assert_matches!(
        err,
        IdError::PartCount { id, expected: 3, actual: 2 } if id == "cen-123:vpc-456"
    );
}

#[test]
fn child_instance_type_from_prefix() {
    assert_eq!(cen_child_instance_type("vpc-abc"), Ok("VPC"));
    assert_eq!(cen_child_instance_type("vbr-abc"), Ok("VBR"));
    assert_matches!(
        cen_child_instance_type("eni-abc"),
        Err(IdError::UnsupportedChildInstance(id)) if id == "eni-abc"
    );
}

#[test]
fn client_token_is_prefixed_and_capped() {
    let token = build_client_token("CreateInstance");
    assert!(token.starts_with("TF-CreateInstance-"));
    assert!(token.len() <= 64);

    let long = build_client_token(&"A".repeat(80));
    assert_eq!(long.len(), 64);
    assert_ne!(build_client_token("Run"), build_client_token("Run"));
}

#[test]
fn converts_snake_case_fields() {
    assert_eq!(terraform_to_api("instance_charge_type"), "InstanceChargeType");
    assert_eq!(terraform_to_api("vpc__id_"), "VpcId");
    assert_eq!(terraform_to_api(""), "");
}

#[test]
fn next_page() {
    assert_eq!(next_page_number("1"), Ok(2));
    assert_eq!(next_page_number(" 9 "), Ok(10));
    assert_matches!(next_page_number("x"), Err(IdError::InvalidPageNumber(s)) if s == "x");
}

#[test]
fn trims_spaces_only() {
    assert_eq!(trim("  name  "), "name");
    assert_eq!(trim("\tname "), "\tname");
}

#[test]
fn converts_integer_parameters() {
    assert_eq!(convert_integer("42"), Ok(42));
    assert_eq!(convert_integer(" -7 "), Ok(-7));
    assert_eq!(convert_integer("   "), Ok(0));
    assert_eq!(convert_integer(""), Ok(0));
    assert_matches!(convert_integer("4x"), Err(IdError::InvalidInteger(s)) if s == "4x");
}
