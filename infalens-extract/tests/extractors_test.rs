//! Per-kind extraction rules, end to end over parsed documents.

use infalens_core::errors::DocumentError;
use infalens_core::types::TransformationKind;
use infalens_extract::{extract_from_bytes, extract_from_bytes_with_kinds};

#[test]
fn test_expression_skips_passthrough_and_blank_fields() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="exp_calc" TYPE="Expression">
                <TRANSFORMFIELD NAME="TOTAL" EXPRESSION="PRICE * QTY"/>
                <TRANSFORMFIELD NAME="PRICE" EXPRESSION="PRICE"/>
                <TRANSFORMFIELD NAME="QTY" EXPRESSION="   "/>
                <TRANSFORMFIELD NAME="NOTE"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, TransformationKind::Expression);
    assert_eq!(records[0].transformation, "exp_calc");
    assert_eq!(records[0].field, "TOTAL");
    assert_eq!(records[0].logic, "PRICE * QTY");
}

#[test]
fn test_lookup_condition_only_emits_one_record() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="lkp_cust" TYPE="Lookup Procedure">
                <TABLEATTRIBUTE NAME="Lookup condition" VALUE="CUST_ID = IN_CUST_ID"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field, "Lookup Condition");
    assert_eq!(records[0].logic, "CUST_ID = IN_CUST_ID");
}

#[test]
fn test_lookup_override_and_condition_both_recorded() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="lkp_cust" TYPE="Lookup Procedure">
                <TABLEATTRIBUTE NAME="Lookup Sql Override" VALUE=" SELECT * FROM CUST "/>
                <TABLEATTRIBUTE NAME="Lookup condition" VALUE="CUST_ID = IN_CUST_ID"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field, "Lookup SQL Override");
    assert_eq!(records[0].logic, "SELECT * FROM CUST");
    assert_eq!(records[1].field, "Lookup Condition");
}

#[test]
fn test_source_qualifier_sql_is_trimmed_and_labelled() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="sq_orders" TYPE="Source Qualifier">
                <TABLEATTRIBUTE NAME="Sql Query" VALUE="  SELECT * FROM ORDERS  "/>
                <TABLEATTRIBUTE NAME="Source Filter" VALUE="ignored here"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field, "Source Qualifier SQL");
    assert_eq!(records[0].logic, "SELECT * FROM ORDERS");
}

#[test]
fn test_router_records_groups_with_conditions() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="rtr_region" TYPE="Router">
                <GROUP NAME="WEST" CONDITION="REGION = 'W'"/>
                <GROUP NAME="EAST" CONDITION="REGION = 'E'"/>
                <GROUP NAME="DEFAULT" CONDITION=""/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field, "Group: WEST");
    assert_eq!(records[0].logic, "REGION = 'W'");
    assert_eq!(records[1].field, "Group: EAST");
}

#[test]
fn test_joiner_takes_join_condition_and_source_filter_only() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="jnr_sales" TYPE="Joiner">
                <TABLEATTRIBUTE NAME="Join Condition" VALUE="A.ID = B.ID"/>
                <TABLEATTRIBUTE NAME="Source Filter" VALUE="B.ACTIVE = 1"/>
                <TABLEATTRIBUTE NAME="Case Sensitive String Comparison" VALUE="YES"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field, "Join Condition");
    assert_eq!(records[1].field, "Source Filter");
}

#[test]
fn test_update_strategy_expression() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="upd_flag" TYPE="Update Strategy">
                <TABLEATTRIBUTE NAME="Update Strategy Expression" VALUE="IIF(DELETED, DD_DELETE, DD_UPDATE)"/>
                <TABLEATTRIBUTE NAME="Forward Rejected Rows" VALUE="YES"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field, "Update Strategy");
    assert_eq!(records[0].logic, "IIF(DELETED, DD_DELETE, DD_UPDATE)");
}

#[test]
fn test_sql_kind_takes_query_and_user_defined_join() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="sql_merge" TYPE="SQL">
                <TABLEATTRIBUTE NAME="Sql Query" VALUE="MERGE INTO T USING S ON T.ID = S.ID"/>
                <TABLEATTRIBUTE NAME="User Defined Join" VALUE="T.ID = S.ID"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field, "Sql Query");
    assert_eq!(records[1].field, "User Defined Join");
}

#[test]
fn test_target_matches_sql_substring_case_insensitive() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="tgt_orders" TYPE="Target">
                <TABLEATTRIBUTE NAME="preSQL" VALUE="TRUNCATE TABLE ORDERS"/>
                <TABLEATTRIBUTE NAME="color" VALUE="blue"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field, "preSQL");
    assert_eq!(records[0].logic, "TRUNCATE TABLE ORDERS");
}

#[test]
fn test_unrecognized_kinds_are_silently_skipped() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="srt_keys" TYPE="Sorter">
                <TABLEATTRIBUTE NAME="Sql Query" VALUE="SELECT 1"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert!(records.is_empty());
}

#[test]
fn test_kinds_processed_in_priority_order() {
    // Document order deliberately reversed relative to the kind priority.
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="tgt" TYPE="Target">
                <TABLEATTRIBUTE NAME="preSQL" VALUE="TRUNCATE TABLE T"/>
            </TRANSFORMATION>
            <TRANSFORMATION NAME="rtr" TYPE="Router">
                <GROUP NAME="A" CONDITION="X = 1"/>
            </TRANSFORMATION>
            <TRANSFORMATION NAME="exp" TYPE="Expression">
                <TRANSFORMFIELD NAME="Y" EXPRESSION="X + 1"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    let kinds: Vec<TransformationKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TransformationKind::Expression,
            TransformationKind::Router,
            TransformationKind::Target,
        ]
    );
}

#[test]
fn test_document_order_preserved_within_kind() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION NAME="exp_first" TYPE="Expression">
                <TRANSFORMFIELD NAME="A" EXPRESSION="1 + 1"/>
            </TRANSFORMATION>
            <TRANSFORMATION NAME="exp_second" TYPE="Expression">
                <TRANSFORMFIELD NAME="B" EXPRESSION="2 + 2"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    let owners: Vec<&str> = records.iter().map(|r| r.transformation.as_str()).collect();
    assert_eq!(owners, vec!["exp_first", "exp_second"]);
}

#[test]
fn test_kind_narrowing() {
    let source = br#"<POWERMART>
        <TRANSFORMATION NAME="exp" TYPE="Expression">
            <TRANSFORMFIELD NAME="Y" EXPRESSION="X + 1"/>
        </TRANSFORMATION>
        <TRANSFORMATION NAME="rtr" TYPE="Router">
            <GROUP NAME="A" CONDITION="X = 1"/>
        </TRANSFORMATION>
    </POWERMART>"#;

    let records =
        extract_from_bytes_with_kinds(source, &[TransformationKind::Router]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, TransformationKind::Router);
}

#[test]
fn test_missing_attributes_never_error() {
    let records = extract_from_bytes(
        br#"<POWERMART>
            <TRANSFORMATION TYPE="Lookup Procedure">
                <TABLEATTRIBUTE NAME="Lookup condition"/>
                <TABLEATTRIBUTE VALUE="orphan value"/>
            </TRANSFORMATION>
            <TRANSFORMATION TYPE="Target">
                <TABLEATTRIBUTE NAME="Post SQL"/>
            </TRANSFORMATION>
        </POWERMART>"#,
    )
    .unwrap();

    assert!(records.is_empty());
}

#[test]
fn test_empty_document_is_a_notice_not_an_error() {
    let records = extract_from_bytes(b"<POWERMART><MAPPING NAME=\"m\"/></POWERMART>").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_malformed_input_fails_with_document_error() {
    let result = extract_from_bytes(b"<POWERMART><TRANSFORMATION TYPE=\"Expression\">");
    assert!(matches!(result, Err(DocumentError::Unclosed { .. })));

    let result = extract_from_bytes(b"not xml at all");
    assert!(result.is_err());
}

#[test]
fn test_extraction_is_idempotent() {
    let source = br#"<POWERMART>
        <TRANSFORMATION NAME="exp" TYPE="Expression">
            <TRANSFORMFIELD NAME="Y" EXPRESSION="X + 1"/>
        </TRANSFORMATION>
        <TRANSFORMATION NAME="lkp" TYPE="Lookup Procedure">
            <TABLEATTRIBUTE NAME="Lookup condition" VALUE="A = B"/>
        </TRANSFORMATION>
    </POWERMART>"#;

    let first = extract_from_bytes(source).unwrap();
    let second = extract_from_bytes(source).unwrap();
    assert_eq!(first, second);
}
