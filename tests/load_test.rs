//! Concurrency and load testing for the booking service.

use serde_json::json;
use std::collections::HashSet;
use std::time::Instant;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_not_lost() {
    let server = common::start_server().await;
    let client = common::client();

    let concurrency = 20;
    let requests_per_task = 25;
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        let url = server.url("/bookings");
        tasks.push(tokio::spawn(async move {
            let mut created = 0;
            for i in 0..requests_per_task {
                let id = 100 + task * requests_per_task + i;
                let res = client
                    .post(&url)
                    .json(&json!({"id": id, "guestName": format!("Guest {}", id), "roomType": "Standard"}))
                    .send()
                    .await
                    .unwrap();
                if res.status() == 201 {
                    created += 1;
                }
            }
            created
        }));
    }

    let mut total_created = 0;
    for task in tasks {
        total_created += task.await.unwrap();
    }
    let duration = start.elapsed();

    assert_eq!(total_created, concurrency * requests_per_task);

    let list: Vec<serde_json::Value> = client
        .get(server.url("/bookings"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: HashSet<i64> = list.iter().filter_map(|b| b["id"].as_i64()).collect();

    assert_eq!(list.len(), 3 + (concurrency * requests_per_task) as usize);
    for id in 100..100 + concurrency * requests_per_task {
        assert!(ids.contains(&(id as i64)), "booking {} lost", id);
    }

    println!(
        "created {} bookings from {} tasks in {:?}",
        total_created, concurrency, duration
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_during_writes() {
    let server = common::start_server().await;
    let client = common::client();

    let writer = {
        let client = client.clone();
        let url = server.url("/bookings");
        tokio::spawn(async move {
            for id in 500..600 {
                client
                    .post(&url)
                    .json(&json!({"id": id, "guestName": "Writer", "roomType": "Suite"}))
                    .send()
                    .await
                    .unwrap();
            }
        })
    };

    let mut last_len = 0;
    for _ in 0..50 {
        let list: Vec<serde_json::Value> = client
            .get(server.url("/bookings"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        // Snapshots only grow while nothing is being removed.
        assert!(list.len() >= last_len);
        assert_eq!(list[0]["id"], 1);
        last_len = list.len();
    }

    writer.await.unwrap();
    assert_eq!(server.store.len(), 103);
}
