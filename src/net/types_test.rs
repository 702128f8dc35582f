use super::*;

fn report_json() -> serde_json::Value {
    serde_json::json!({
        "id": 3,
        "reporterNickname": "민지",
        "reporterEmail": "minji@example.com",
        "reporteeNickname": "하늘",
        "reporteeEmail": "sky@example.com",
        "reason": "거래 약속 불이행",
        "content": "반납 기한을 지키지 않았습니다.",
        "closetScore": 72,
        "state": "PENDING",
        "isRented": true,
        "userSid": "sid-3",
        "action": null
    })
}

// =============================================================
// Report
// =============================================================

#[test]
fn report_deserializes_camel_case_payload() {
    let report: Report = serde_json::from_value(report_json()).expect("report should parse");
    assert_eq!(report.id, 3);
    assert_eq!(report.reportee_nickname, "하늘");
    assert_eq!(report.reporter_email, "minji@example.com");
    assert_eq!(report.closet_score, 72);
    assert_eq!(report.state, ReportState::Pending);
    assert!(report.is_rented);
    assert_eq!(report.user_sid.as_deref(), Some("sid-3"));
    assert_eq!(report.action, None);
}

#[test]
fn report_action_null_and_missing_both_mean_unset() {
    let mut with_null = report_json();
    with_null["action"] = serde_json::Value::Null;
    let report: Report = serde_json::from_value(with_null).expect("null action should parse");
    assert_eq!(report.action, None);

    let mut without_field = report_json();
    without_field.as_object_mut().expect("object").remove("action");
    let report: Report = serde_json::from_value(without_field).expect("missing action should parse");
    assert_eq!(report.action, None);
}

#[test]
fn report_missing_user_sid_is_none() {
    let mut value = report_json();
    value.as_object_mut().expect("object").remove("userSid");
    let report: Report = serde_json::from_value(value).expect("missing userSid should parse");
    assert_eq!(report.user_sid, None);
}

#[test]
fn report_serializes_back_to_camel_case() {
    let report: Report = serde_json::from_value(report_json()).expect("report should parse");
    let value = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(value["reporteeNickname"], "하늘");
    assert_eq!(value["closetScore"], 72);
    assert_eq!(value["isRented"], true);
}

// =============================================================
// ReportState / ReportAction wire values
// =============================================================

#[test]
fn report_state_round_trips_screaming_snake_case() {
    assert_eq!(
        serde_json::to_value(ReportState::Pending).expect("serialize"),
        serde_json::json!("PENDING")
    );
    assert_eq!(
        serde_json::from_value::<ReportState>(serde_json::json!("ACTIONED")).expect("parse"),
        ReportState::Actioned
    );
}

#[test]
fn report_action_round_trips_screaming_snake_case() {
    for (action, wire) in [
        (ReportAction::Restricted, "RESTRICTED"),
        (ReportAction::Docked, "DOCKED"),
        (ReportAction::Suspended, "SUSPENDED"),
    ] {
        assert_eq!(
            serde_json::to_value(action).expect("serialize"),
            serde_json::json!(wire)
        );
        assert_eq!(
            serde_json::from_value::<ReportAction>(serde_json::json!(wire)).expect("parse"),
            action
        );
    }
}

#[test]
fn unknown_action_string_becomes_ignored() {
    let action: ReportAction =
        serde_json::from_value(serde_json::json!("BANNED_FOREVER")).expect("unknown should parse");
    assert_eq!(action, ReportAction::Ignored);
}

#[test]
fn selectable_actions_exclude_ignored() {
    assert_eq!(ReportAction::SELECTABLE.len(), 3);
    assert!(!ReportAction::SELECTABLE.contains(&ReportAction::Ignored));
}

// =============================================================
// Display labels
// =============================================================

#[test]
fn report_state_labels() {
    assert_eq!(ReportState::Pending.label(), "접수 완료");
    assert_eq!(ReportState::Actioned.label(), "처리 완료");
}

#[test]
fn report_action_labels() {
    assert_eq!(ReportAction::Restricted.label(), "이용 제한");
    assert_eq!(ReportAction::Docked.label(), "점수 삭감");
    assert_eq!(ReportAction::Suspended.label(), "유예");
    assert_eq!(ReportAction::Ignored.label(), "무시");
}

// =============================================================
// UserRow / RentedRoom / envelope
// =============================================================

#[test]
fn user_row_deserializes_camel_case_payload() {
    let row: UserRow = serde_json::from_value(serde_json::json!({
        "name": "김서연",
        "nickname": "seoyeon",
        "email": "seoyeon@example.com",
        "phoneNumber": "010-1234-5678",
        "closetScore": 88,
        "positiveKeywordCount": 12,
        "negativeKeywordCount": 1,
        "rentalCount": 7,
        "isRestricted": false,
        "isSuspended": true
    }))
    .expect("user row should parse");
    assert_eq!(row.phone_number, "010-1234-5678");
    assert_eq!(row.positive_keyword_count, 12);
    assert!(!row.is_restricted);
    assert!(row.is_suspended);
}

#[test]
fn rented_room_deserializes_camel_case_payload() {
    let room: RentedRoom = serde_json::from_value(serde_json::json!({
        "roomId": 41,
        "nickname": "하늘",
        "postTitle": "트위드 자켓 대여"
    }))
    .expect("room should parse");
    assert_eq!(room.room_id, 41);
    assert_eq!(room.post_title, "트위드 자켓 대여");
}

#[test]
fn envelope_unwraps_result_and_tolerates_missing_metadata() {
    let envelope: ApiEnvelope<Vec<i64>> =
        serde_json::from_value(serde_json::json!({ "result": [1, 2, 3] })).expect("envelope should parse");
    assert_eq!(envelope.result, vec![1, 2, 3]);
    assert_eq!(envelope.code, None);
    assert_eq!(envelope.message, None);
}

#[test]
fn login_result_reads_access_token() {
    let result: LoginResult =
        serde_json::from_value(serde_json::json!({ "accessToken": "token-1" })).expect("login result");
    assert_eq!(result.access_token, "token-1");
}
