//! Order Store Integration Tests
//!
//! End-to-end flows across the persistence contracts:
//! - Status partition of a patient's orders at a fixed as-of date
//! - Subtype-validated lookup
//! - Authoritative reads through a deliberately stale cache
//! - Patient-scoped group invariant with no partial state
//! - Publish-replaces semantics and free-text search

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use order_store::{
    CacheConfig, CachedOrderRepository, ConceptId, CreateOrderCommand, EncounterId,
    InMemoryOrderStore, Order, OrderError, OrderFilter, OrderGroup, OrderGroupId,
    OrderGroupRepository, OrderId, OrderKind, OrderNumber, OrderRepository, OrderSet,
    OrderSetId, OrderSetRepository, OrderStatus, PatientId, PublishedOrderSetRegistry, StoreConfig,
    Timestamp, UserId,
};

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn command(id: u64, patient: u64, concept: u64, kind: OrderKind) -> CreateOrderCommand {
    CreateOrderCommand {
        id: OrderId::new(id),
        order_number: OrderNumber::from_sequence(id),
        kind,
        patient: PatientId::new(patient),
        concept: ConceptId::new(concept),
        orderer: UserId::new(1),
        encounter: EncounterId::new(1),
        start_date: ts("2026-01-01T00:00:00Z"),
        auto_expire_date: None,
        instructions: None,
        accession_number: None,
        previous_order_number: None,
    }
}

fn make_order(id: u64, patient: u64, concept: u64, kind: OrderKind) -> Order {
    Order::new(command(id, patient, concept, kind)).expect("valid order command")
}

// ============================================
// Query semantics
// ============================================

#[tokio::test]
async fn status_partition_at_a_fixed_as_of_date() {
    let orders = InMemoryOrderStore::new().orders();

    // Ongoing drug order for patient 10.
    orders
        .save(&make_order(1, 10, 100, OrderKind::Drug))
        .await
        .unwrap();

    // Lab order for patient 10 stopped mid-February.
    let mut stopped = make_order(2, 10, 200, OrderKind::Test);
    stopped.stop(ts("2026-02-15T00:00:00Z")).unwrap();
    orders.save(&stopped).await.unwrap();

    // Auto-expiring drug order for patient 10, expired end of January.
    let mut expiring = command(3, 10, 100, OrderKind::Drug);
    expiring.auto_expire_date = Some(ts("2026-01-31T00:00:00Z"));
    orders.save(&Order::new(expiring).unwrap()).await.unwrap();

    // Unrelated patient.
    orders
        .save(&make_order(4, 99, 100, OrderKind::Drug))
        .await
        .unwrap();

    let as_of = ts("2026-02-01T00:00:00Z");
    let base = OrderFilter::new().for_patients([PatientId::new(10)]);

    let current = orders
        .query(&base.clone().with_status(OrderStatus::Current).as_of(as_of))
        .await
        .unwrap();
    let complete = orders
        .query(&base.clone().with_status(OrderStatus::Complete).as_of(as_of))
        .await
        .unwrap();
    let any = orders.query(&base).await.unwrap();

    let current_ids: Vec<u64> = current.iter().map(|o| o.id().value()).collect();
    let complete_ids: Vec<u64> = complete.iter().map(|o| o.id().value()).collect();
    assert_eq!(current_ids, vec![1, 2]);
    assert_eq!(complete_ids, vec![3]);
    assert_eq!(any.len(), 3);

    // Disjoint for the fixed date.
    for order in &current {
        assert!(!complete_ids.contains(&order.id().value()));
    }
}

#[tokio::test]
async fn filters_compose_across_every_dimension() {
    let orders = InMemoryOrderStore::new().orders();
    orders
        .save(&make_order(1, 10, 100, OrderKind::Drug))
        .await
        .unwrap();
    orders
        .save(&make_order(2, 10, 200, OrderKind::Test))
        .await
        .unwrap();

    let hits = orders
        .query(
            &OrderFilter::new()
                .with_kind(OrderKind::Test)
                .for_patients([PatientId::new(10)])
                .for_concepts([ConceptId::new(200)])
                .for_orderers([UserId::new(1)])
                .for_encounters([EncounterId::new(1)]),
        )
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), OrderId::new(2));

    // Tightening one dimension to a non-matching value empties the result.
    let none = orders
        .query(
            &OrderFilter::new()
                .with_kind(OrderKind::Test)
                .for_orderers([UserId::new(2)]),
        )
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn lookup_validates_expected_subtype() {
    let orders = InMemoryOrderStore::new().orders();
    orders
        .save(&make_order(1, 10, 100, OrderKind::Referral))
        .await
        .unwrap();

    // Any-kind lookup resolves; mismatched expectation is a typed failure.
    assert!(orders.get_by_id(OrderId::new(1), None).await.unwrap().is_some());

    let err = orders
        .get_by_id(OrderId::new(1), Some(OrderKind::Drug))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::TypeMismatch {
            order_id: 1,
            expected: OrderKind::Drug,
            actual: OrderKind::Referral,
        }
    );

    // Absence stays a non-error.
    assert!(orders
        .get_by_id(OrderId::new(404), Some(OrderKind::Drug))
        .await
        .unwrap()
        .is_none());
}

// ============================================
// Authoritative reads
// ============================================

#[tokio::test]
async fn activation_is_visible_through_a_stale_cache() {
    let store = InMemoryOrderStore::new();
    let inner = Arc::new(store.orders());
    let cached = CachedOrderRepository::from_config(
        Arc::clone(&inner),
        &StoreConfig::default().cache,
    );

    let mut order = make_order(1, 10, 100, OrderKind::Drug);
    cached.save(&order).await.unwrap();

    // Another process activates the order directly against the store; this
    // process's cache has not been invalidated.
    let stale = order.clone();
    order.activate(ts("2026-01-02T00:00:00Z")).unwrap();
    inner.save(&order).await.unwrap();

    let cached_view = cached
        .get_by_id(OrderId::new(1), None)
        .await
        .unwrap()
        .unwrap();
    assert!(!cached_view.activated(), "normal read may be stale");

    assert!(
        cached.is_activated_in_store(&stale).await.unwrap(),
        "authoritative read must see the committed activation"
    );
    assert_eq!(
        cached.order_number_in_store(&stale).await.unwrap(),
        OrderNumber::from_sequence(1)
    );
}

#[tokio::test]
async fn disabled_cache_still_honors_the_contract() {
    let store = InMemoryOrderStore::new();
    let inner = Arc::new(store.orders());
    let cached = CachedOrderRepository::from_config(
        Arc::clone(&inner),
        &CacheConfig {
            enabled: false,
            capacity: 0,
        },
    );

    let mut order = make_order(1, 10, 100, OrderKind::Drug);
    cached.save(&order).await.unwrap();
    order.activate(ts("2026-01-02T00:00:00Z")).unwrap();
    inner.save(&order).await.unwrap();

    // Without a cache the normal read is already fresh.
    let view = cached
        .get_by_id(OrderId::new(1), None)
        .await
        .unwrap()
        .unwrap();
    assert!(view.activated());
    assert!(cached.is_activated_in_store(&order).await.unwrap());
}

// ============================================
// Order groups
// ============================================

#[tokio::test]
async fn group_flow_scoped_to_one_patient() {
    let store = InMemoryOrderStore::new();
    let orders = store.orders();
    let groups = store.groups();

    orders
        .save(&make_order(1, 10, 100, OrderKind::Drug))
        .await
        .unwrap();
    orders
        .save(&make_order(2, 10, 200, OrderKind::Test))
        .await
        .unwrap();

    let group = OrderGroup::new(
        OrderGroupId::new(1),
        PatientId::new(10),
        vec![OrderId::new(1), OrderId::new(2)],
    );
    groups.save(&group).await.unwrap();

    let listed = groups.list_by_patient(PatientId::new(10)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].members().len(), 2);

    assert!(groups
        .list_by_patient(PatientId::new(99))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn cross_patient_group_fails_and_persists_nothing() {
    let store = InMemoryOrderStore::new();
    let orders = store.orders();
    let groups = store.groups();

    orders
        .save(&make_order(1, 10, 100, OrderKind::Drug))
        .await
        .unwrap();
    orders
        .save(&make_order(2, 20, 100, OrderKind::Drug))
        .await
        .unwrap();

    let group = OrderGroup::new(
        OrderGroupId::new(7),
        PatientId::new(10),
        vec![OrderId::new(1), OrderId::new(2)],
    );
    assert!(groups.save(&group).await.is_err());

    // Nothing was committed for the failed group.
    assert!(groups.get_by_id(OrderGroupId::new(7)).await.is_err());
    assert!(groups
        .list_by_patient(PatientId::new(10))
        .await
        .unwrap()
        .is_empty());
}

// ============================================
// Order sets
// ============================================

#[tokio::test]
async fn template_lifecycle_and_publish_replaces() {
    let store = InMemoryOrderStore::new();
    let sets = store.order_sets();
    let registry = store.published();

    let v1 = OrderSet::new(
        OrderSetId::new(1),
        "Sepsis bundle",
        vec![ConceptId::new(100), ConceptId::new(200)],
    )
    .with_description("Initial resuscitation orders");
    sets.save(&v1).await.unwrap();

    registry
        .publish(ConceptId::new(42), v1.clone())
        .await
        .unwrap();

    // Administrative revision: the template grows and is republished under
    // the same concept.
    let v2 = OrderSet::new(
        OrderSetId::new(2),
        "Sepsis bundle",
        vec![ConceptId::new(100), ConceptId::new(200), ConceptId::new(300)],
    )
    .with_description("Adds repeat lactate");
    sets.save(&v2).await.unwrap();
    registry
        .publish(ConceptId::new(42), v2.clone())
        .await
        .unwrap();

    let published = registry
        .get_by_concept(ConceptId::new(42))
        .await
        .unwrap()
        .expect("published set exists");
    assert_eq!(published.content().member_concepts().len(), 3);

    // Search never surfaces two rows for one concept.
    let hits = registry.search("sepsis").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content().description(), Some("Adds repeat lactate"));

    // Unpublished concepts and blank queries stay empty, never errors.
    assert!(registry
        .get_by_concept(ConceptId::new(99))
        .await
        .unwrap()
        .is_none());
    assert!(registry.search("").await.unwrap().is_empty());
}
