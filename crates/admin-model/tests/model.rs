//! Tests for admin-model types.

use admin_model::{
    Card, PageMeta, PageQuery, PageResult, Record, RecordId, ResourceKind, SortOrder, User,
    page_count,
};
use proptest::prelude::*;

#[test]
fn card_deserializes_admin_payload() {
    let json = r#"{
        "id": "c-1",
        "user_id": "u-9",
        "gender": "female",
        "dob": "1990-04-01",
        "nationality": "KH",
        "phone": "+855 12 345 678",
        "address": "Phnom Penh",
        "card_type": "premium",
        "social": [{"platform": "telegram", "url": "https://t.me/demo"}],
        "is_active": true,
        "is_deleted": false,
        "created_at": "2024-05-01T02:00:00.000Z",
        "updated_at": "2024-05-02T02:00:00.000Z",
        "user": {"id": "u-9", "user_name": "sokha", "full_name": "Sok Ha"}
    }"#;

    let card: Card = serde_json::from_str(json).unwrap();
    assert_eq!(card.id().as_str(), "c-1");
    assert!(card.is_active());
    assert_eq!(card.owner_full_name(), "Sok Ha");
    assert_eq!(card.owner_user_name(), "sokha");
    assert_eq!(card.social.len(), 1);
    assert_eq!(Card::KIND, ResourceKind::Cards);
}

#[test]
fn card_without_owner_renders_blank_names() {
    let card: Card = serde_json::from_str(r#"{"id": "c-2"}"#).unwrap();
    assert_eq!(card.owner_full_name(), "");
    assert!(!card.is_active);
}

#[test]
fn record_without_id_is_rejected() {
    assert!(serde_json::from_str::<User>(r#"{"full_name": "No Id"}"#).is_err());
    assert!(serde_json::from_str::<User>(r#"{"id": ""}"#).is_err());
}

#[test]
fn user_avatar_falls_back_to_placeholder() {
    let user: User = serde_json::from_str(r#"{"id": "u-1", "avatar": ""}"#).unwrap();
    assert!(user.avatar_url().starts_with("https://ui-avatars.com/"));

    let user: User =
        serde_json::from_str(r#"{"id": "u-1", "avatar": "https://cdn/x.png"}"#).unwrap();
    assert_eq!(user.avatar_url(), "https://cdn/x.png");
}

#[test]
fn page_result_derives_page_count_from_meta() {
    let records: Vec<RecordId> = (0..10)
        .map(|i| RecordId::new(format!("r-{i}")).unwrap())
        .collect();
    let result = PageResult::from_parts(
        records,
        PageMeta {
            total: 42,
            page: 1,
            limit: 10,
        },
    );
    assert_eq!(result.page_count(), 5);
    assert_eq!(result.records.len(), 10);
}

#[test]
fn equal_queries_hash_equal() {
    use std::collections::HashSet;

    let a = PageQuery::new(1, 10, "created_at", SortOrder::Desc, None).unwrap();
    let b = PageQuery::first_page();
    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

proptest! {
    #[test]
    fn page_count_covers_every_record(total in 0u64..100_000, limit in 1u32..500) {
        let pages = u64::from(page_count(total, limit));
        prop_assert!(pages * u64::from(limit) >= total);
        if total > 0 {
            prop_assert!((pages - 1) * u64::from(limit) < total);
        } else {
            prop_assert_eq!(pages, 0);
        }
    }
}
