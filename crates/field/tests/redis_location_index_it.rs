// crates/field/tests/redis_location_index_it.rs

mod common;

use shared_kernel::domain::value_objects::{Distance, GeoPoint};
use shared_kernel::errors::DomainError;
use field::domain::repositories::LocationIndex;
use field::domain::value_objects::FieldId;
use common::setup_redis;

fn sf() -> GeoPoint {
    GeoPoint::try_new(-122.42, 37.77).unwrap()
}

#[tokio::test]
async fn test_upsert_then_radius_query() {
    let (_ctx, index) = setup_redis().await;
    let id = FieldId::new();

    index.upsert(&id, sf()).await.unwrap();
    let found = index.radius_query(sf(), Distance::try_from_miles(1.0).unwrap(), 100).await.unwrap();

    assert_eq!(found, vec![id]);
}

#[tokio::test]
async fn test_longitude_is_sent_first() {
    let (_ctx, index) = setup_redis().await;
    let id = FieldId::new();
    index.upsert(&id, sf()).await.unwrap();

    // Le point miroir (lon/lat inversés, valide pour Redis) ne doit rien trouver
    let mirrored = GeoPoint::try_new(37.77, -12.42).unwrap();
    let found = index.radius_query(mirrored, Distance::try_from_miles(10.0).unwrap(), 100).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_upsert_overwrites_same_member() {
    let (_ctx, index) = setup_redis().await;
    let id = FieldId::new();

    index.upsert(&id, sf()).await.unwrap();
    index.upsert(&id, sf()).await.unwrap();
    assert_eq!(index.entry_count().await.unwrap(), 1);

    index.upsert(&id, GeoPoint::try_new(0.0, 0.0).unwrap()).await.unwrap();
    assert_eq!(index.entry_count().await.unwrap(), 1);
    let near_sf = index.radius_query(sf(), Distance::try_from_miles(1.0).unwrap(), 100).await.unwrap();
    assert!(near_sf.is_empty());
}

#[tokio::test]
async fn test_results_are_nearest_first_and_limited() {
    let (_ctx, index) = setup_redis().await;
    let far = FieldId::new();
    let near = FieldId::new();
    let middle = FieldId::new();
    index.upsert(&far, GeoPoint::try_new(-122.40, 37.77).unwrap()).await.unwrap();
    index.upsert(&near, GeoPoint::try_new(-122.4201, 37.7701).unwrap()).await.unwrap();
    index.upsert(&middle, GeoPoint::try_new(-122.41, 37.77).unwrap()).await.unwrap();

    let radius = Distance::try_from_miles(5.0).unwrap();
    assert_eq!(index.radius_query(sf(), radius, 100).await.unwrap(), vec![near, middle, far]);
    assert_eq!(index.radius_query(sf(), radius, 2).await.unwrap(), vec![near, middle]);
}

#[tokio::test]
async fn test_remove_reports_presence() {
    let (_ctx, index) = setup_redis().await;
    let id = FieldId::new();
    index.upsert(&id, sf()).await.unwrap();

    assert!(index.remove(&id).await.unwrap());
    assert!(!index.remove(&id).await.unwrap());
    assert!(!index.remove(&FieldId::new()).await.unwrap());
}

#[tokio::test]
async fn test_empty_index_answers_with_no_candidates() {
    let (ctx, index) = setup_redis().await;
    index.upsert(&FieldId::new(), sf()).await.unwrap();
    ctx.flush().await;

    assert_eq!(index.entry_count().await.unwrap(), 0);
    let found = index.radius_query(sf(), Distance::try_from_miles(50.0).unwrap(), 100).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_latitude_beyond_index_bound_is_refused_without_write() {
    let (_ctx, index) = setup_redis().await;
    let near_pole = GeoPoint::try_new(0.0, 85.0).unwrap();
    let polar = GeoPoint::try_new(0.0, 88.0).unwrap();
    let id = FieldId::new();

    index.upsert(&id, near_pole).await.unwrap();
    let found = index.radius_query(near_pole, Distance::try_from_miles(1.0).unwrap(), 10).await.unwrap();
    assert_eq!(found, vec![id]);

    let refused = index.upsert(&FieldId::new(), polar).await;
    assert!(matches!(refused, Err(DomainError::InvalidCoordinate { axis: "latitude", .. })));
    let query = index.radius_query(polar, Distance::try_from_miles(1.0).unwrap(), 10).await;
    assert!(matches!(query, Err(DomainError::InvalidCoordinate { axis: "latitude", .. })));

    assert_eq!(index.entry_count().await.unwrap(), 1);
}
