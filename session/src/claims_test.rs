use super::*;
use crate::test_support::{FUTURE_EXP, NOW_MS, PAST_EXP, token, token_with_payload};

// =============================================================
// decode
// =============================================================

#[test]
fn decode_reads_role_subject_and_expiry() {
    let claims = decode(&token("admin", FUTURE_EXP)).expect("decode");
    assert_eq!(claims.role, Some(Role::Admin));
    assert_eq!(claims.sub.as_deref(), Some("alice"));
    assert_eq!(claims.exp, FUTURE_EXP);
}

#[test]
fn decode_treats_unknown_role_as_anonymous() {
    let claims = decode(&token("superuser", FUTURE_EXP)).expect("decode");
    assert_eq!(claims.role, None);
}

#[test]
fn decode_allows_missing_role_and_subject() {
    let t = token_with_payload(&serde_json::json!({ "exp": FUTURE_EXP }));
    let claims = decode(&t).expect("decode");
    assert_eq!(claims.role, None);
    assert_eq!(claims.sub, None);
}

#[test]
fn decode_accepts_fractional_expiry() {
    let t = token_with_payload(&serde_json::json!({ "role": "user", "exp": 1_700_000_000.75 }));
    assert_eq!(decode(&t).expect("decode").exp, 1_700_000_000);
}

#[test]
fn decode_tolerates_padded_payload() {
    let t = token("user", FUTURE_EXP);
    let mut parts: Vec<String> = t.split('.').map(str::to_owned).collect();
    while parts[1].len() % 4 != 0 {
        parts[1].push('=');
    }
    let padded = parts.join(".");
    assert_eq!(decode(&padded).expect("decode").role, Some(Role::User));
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode("only-one"), Err(DecodeError::Segments(1)));
    assert_eq!(decode("a.b"), Err(DecodeError::Segments(2)));
    assert_eq!(decode("a.b.c.d"), Err(DecodeError::Segments(4)));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert_eq!(decode("header.!!!!.sig"), Err(DecodeError::Base64));
    assert_eq!(decode("header..sig"), Err(DecodeError::Base64));
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = Base64UrlUnpadded::encode_string(b"not json");
    let err = decode(&format!("h.{payload}.s")).expect_err("should fail");
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn decode_rejects_payload_without_expiry() {
    let t = token_with_payload(&serde_json::json!({ "role": "admin" }));
    assert!(matches!(decode(&t), Err(DecodeError::Json(_))));
}

#[test]
fn decode_rejects_string_expiry() {
    let t = token_with_payload(&serde_json::json!({ "role": "admin", "exp": "tomorrow" }));
    assert!(matches!(decode(&t), Err(DecodeError::Json(_))));
}

#[test]
fn decode_rejects_array_payload() {
    let t = token_with_payload(&serde_json::json!(["alice", "admin", FUTURE_EXP]));
    assert!(matches!(decode(&t), Err(DecodeError::Json(_))));
    assert!(is_expired(&t, NOW_MS));
}

// =============================================================
// is_expired
// =============================================================

#[test]
fn future_expiry_is_not_expired() {
    assert!(!is_expired(&token("user", FUTURE_EXP), NOW_MS));
}

#[test]
fn past_expiry_is_expired() {
    assert!(is_expired(&token("user", PAST_EXP), NOW_MS));
}

#[test]
fn expiry_equal_to_now_is_not_expired() {
    let exp = NOW_MS / 1000;
    assert!(!is_expired(&token("user", exp), exp * 1000));
    assert!(is_expired(&token("user", exp), exp * 1000 + 1));
}

#[test]
fn malformed_tokens_fail_closed() {
    for bad in ["", "garbage", "a.b", "a.%%%.c", "a.b.c.d"] {
        assert!(is_expired(bad, NOW_MS), "{bad:?} should count as expired");
    }
}
