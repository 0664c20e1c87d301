//! Tests for DashboardService

use crate::services::dashboard_service::month_floor_back;
use crate::services::DashboardService;
use cadastro_testing::{fixtures, FixedClock, MockClientRepository};
use chrono::{Duration, Utc};
use std::sync::Arc;

fn service_with(repository: Arc<MockClientRepository>) -> DashboardService {
    DashboardService::with_clock(repository, Arc::new(FixedClock::at_system_now()))
}

#[tokio::test]
async fn test_stats_counts_active_deleted_and_total() {
    let repository = Arc::new(MockClientRepository::new());
    repository.insert_raw(fixtures::sample_client(
        "Ana",
        "ana@x.com",
        fixtures::VALID_CPFS[0],
    ));
    repository.insert_raw(fixtures::sample_client(
        "Bruno",
        "bruno@x.com",
        fixtures::VALID_CPFS[1],
    ));
    repository.insert_raw(fixtures::sample_deleted_client(
        "Gone",
        "gone@x.com",
        fixtures::VALID_CPFS[2],
    ));
    let service = service_with(repository);

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.active, 2);
    assert_eq!(stats.deleted, 1);
    assert_eq!(stats.total, 3);
}

#[tokio::test]
async fn test_stats_new_this_month_excludes_older_rows() {
    let repository = Arc::new(MockClientRepository::new());
    repository.insert_raw(fixtures::sample_client(
        "Fresh",
        "fresh@x.com",
        fixtures::VALID_CPFS[0],
    ));
    // Created in an earlier month regardless of today's date
    repository.insert_raw(fixtures::sample_client_created_at(
        "Older",
        "older@x.com",
        fixtures::VALID_CPFS[1],
        month_floor_back(Utc::now(), 1) - Duration::days(1),
    ));
    let service = service_with(repository);

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.active, 2);
    assert_eq!(stats.new_this_month, 1);
}

#[tokio::test]
async fn test_stats_empty_store_is_all_zeros() {
    let repository = Arc::new(MockClientRepository::new());
    let service = service_with(repository);

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.active, 0);
    assert_eq!(stats.deleted, 0);
    assert_eq!(stats.new_this_month, 0);
}

#[tokio::test]
async fn test_stats_fails_atomically_when_one_count_fails() {
    let repository = Arc::new(MockClientRepository::new());
    repository.insert_raw(fixtures::sample_client(
        "Ana",
        "ana@x.com",
        fixtures::VALID_CPFS[0],
    ));
    repository.set_fail_count_deleted(true);
    let service = service_with(repository);

    // No partial stats: one failing sub-count fails the whole query
    assert!(service.stats().await.is_err());
}

#[tokio::test]
async fn test_chart_data_backfills_empty_months_with_zero() {
    let repository = Arc::new(MockClientRepository::new());
    let now = Utc::now();
    // One client this month, one last month, none two months back
    repository.insert_raw(fixtures::sample_client_created_at(
        "Now",
        "now@x.com",
        fixtures::VALID_CPFS[0],
        now,
    ));
    repository.insert_raw(fixtures::sample_client_created_at(
        "LastMonth",
        "last@x.com",
        fixtures::VALID_CPFS[1],
        month_floor_back(now, 1),
    ));
    let service = service_with(repository);

    let chart = service.chart_data(3).await.unwrap();
    assert_eq!(chart.labels.len(), 3);
    assert_eq!(chart.data, vec![0, 1, 1]);
}

#[tokio::test]
async fn test_chart_data_empty_store_is_dense_zeros() {
    let repository = Arc::new(MockClientRepository::new());
    let service = service_with(repository);

    let chart = service.chart_data(6).await.unwrap();
    assert_eq!(chart.labels.len(), 6);
    assert_eq!(chart.data, vec![0; 6]);
}

#[tokio::test]
async fn test_chart_data_labels_are_chronological_months() {
    let repository = Arc::new(MockClientRepository::new());
    let service = service_with(repository);
    let now = Utc::now();

    let chart = service.chart_data(3).await.unwrap();
    let expected: Vec<String> = (0..3)
        .rev()
        .map(|back| month_floor_back(now, back).format("%b %Y").to_string())
        .collect();
    assert_eq!(chart.labels, expected);
}

#[tokio::test]
async fn test_chart_data_excludes_deleted_clients() {
    let repository = Arc::new(MockClientRepository::new());
    repository.insert_raw(fixtures::sample_deleted_client(
        "Gone",
        "gone@x.com",
        fixtures::VALID_CPFS[0],
    ));
    let service = service_with(repository);

    let chart = service.chart_data(1).await.unwrap();
    assert_eq!(chart.data, vec![0]);
}

#[tokio::test]
async fn test_chart_data_clamps_months_to_at_least_one() {
    let repository = Arc::new(MockClientRepository::new());
    let service = service_with(repository);

    let chart = service.chart_data(0).await.unwrap();
    assert_eq!(chart.labels.len(), 1);
}
