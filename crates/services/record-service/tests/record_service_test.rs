//! Record service integration tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use common::AppError;
use domain::{CreateItem, CreateUser, UpdateItem, UpdateUser};
use record_service_lib::{IdGenerator, PriceRange, Services, Window};

/// Deterministic identifiers: 1, 2, 3, ...
#[derive(Default)]
struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::SeqCst) + 1))
    }
}

fn user(name: &str, email: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        age: 30,
    }
}

fn item(title: &str, price: f64, quantity: i64) -> CreateItem {
    CreateItem {
        title: title.to_string(),
        description: None,
        price,
        quantity,
    }
}

// =============================================================================
// Items
// =============================================================================

#[tokio::test]
async fn test_widget_lifecycle() {
    let services = Services::in_memory();
    let items = services.items();

    let created = items.create_item(item("Widget", 9.99, 5)).await.unwrap();
    assert!(!created.id.is_nil());

    let fetched = items.get_item(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let patch = UpdateItem {
        quantity: Some(10),
        ..Default::default()
    };
    let updated = items.update_item(created.id, patch).await.unwrap();
    assert_eq!(updated.quantity, 10);
    assert_eq!(updated.price, 9.99);
    assert_eq!(updated.title, "Widget");
    assert_eq!(updated.created_at, created.created_at);

    items.delete_item(created.id).await.unwrap();
    let result = items.get_item(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_invalid_item_update_leaves_record() {
    let services = Services::in_memory();
    let items = services.items();
    let created = items.create_item(item("Lamp", 20.0, 1)).await.unwrap();

    let patch = UpdateItem {
        price: Some(-3.0),
        ..Default::default()
    };
    let result = items.update_item(created.id, patch).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(items.get_item(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_list_items_price_filter_and_window() {
    let services = Services::in_memory();
    let items = services.items();
    for (i, price) in [5.0, 10.0, 15.0, 20.0, 25.0].iter().enumerate() {
        items
            .create_item(item(&format!("item-{}", i), *price, 1))
            .await
            .unwrap();
    }

    let all = items
        .list_items(Window::new(0, 100), PriceRange::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 5);

    let ranged = items
        .list_items(Window::new(0, 100), PriceRange::new(Some(10.0), Some(20.0)))
        .await
        .unwrap();
    let prices: Vec<f64> = ranged.iter().map(|i| i.price).collect();
    assert_eq!(prices, vec![10.0, 15.0, 20.0]);

    let second_page = items
        .list_items(Window::new(1, 1), PriceRange::new(Some(10.0), Some(20.0)))
        .await
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].price, 15.0);

    let past_end = items
        .list_items(Window::new(10, 5), PriceRange::default())
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_empty_name_is_rejected_and_not_stored() {
    let services = Services::in_memory();
    let users = services.users();

    let result = users.create_user(user("", "a@b.com")).await;
    match result {
        Err(AppError::Validation(violations)) => {
            assert_eq!(violations[0].field, "name");
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let listed = users.list_users(Window::default()).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_empty_patch_returns_user_unchanged() {
    let services = Services::in_memory();
    let users = services.users();
    let created = users.create_user(user("Ada", "ada@example.com")).await.unwrap();

    let updated = users
        .update_user(created.id, UpdateUser::default())
        .await
        .unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let services = Services::in_memory();
    let result = services
        .users()
        .update_user(Uuid::new_v4(), UpdateUser::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_search_users_by_email() {
    let services = Services::in_memory();
    let users = services.users();
    users.create_user(user("Ada", "Ada@Example.com")).await.unwrap();
    users.create_user(user("Bob", "bob@example.com")).await.unwrap();
    users.create_user(user("Cy", "cy@other.org")).await.unwrap();

    let found = users.search_users_by_email("EXAMPLE").await.unwrap();
    let names: Vec<&str> = found.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Bob"]);
}

#[tokio::test]
async fn test_ids_come_from_the_generator() {
    let services = Services::with_id_generator(Arc::new(SequentialIds::default()));

    let first = services.users().create_user(user("A", "a@x.io")).await.unwrap();
    let second = services.items().create_item(item("B", 1.0, 1)).await.unwrap();

    assert_eq!(first.id, Uuid::from_u128(1));
    assert_eq!(second.id, Uuid::from_u128(2));
}

// =============================================================================
// Statistics & Reset
// =============================================================================

#[tokio::test]
async fn test_statistics_example() {
    let services = Services::in_memory();
    services.items().create_item(item("A", 10.0, 2)).await.unwrap();
    services.items().create_item(item("B", 20.0, 1)).await.unwrap();
    services
        .users()
        .create_user(user("Ada", "ada@example.com"))
        .await
        .unwrap();

    let summary = services.admin().statistics().await.unwrap();
    assert_eq!(summary.users.total, 1);
    assert_eq!(summary.items.total, 2);
    assert_eq!(summary.items.total_inventory_value, 40.0);
    assert_eq!(summary.items.average_price, 15.0);
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let services = Services::in_memory();
    let created = services
        .users()
        .create_user(user("Ada", "ada@example.com"))
        .await
        .unwrap();
    services.items().create_item(item("A", 10.0, 2)).await.unwrap();

    services.admin().reset_all().await.unwrap();

    let counts = services.admin().counts().await.unwrap();
    assert_eq!((counts.users, counts.items), (0, 0));
    assert!(services.users().get_user(created.id).await.is_err());

    let summary = services.admin().statistics().await.unwrap();
    assert_eq!(summary.items.average_price, 0.0);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_ids() {
    let services = Services::in_memory();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let users = services.users();
            tokio::spawn(async move {
                users
                    .create_user(user(&format!("U{}", i), &format!("u{}@example.com", i)))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 64);
    assert_eq!(services.admin().counts().await.unwrap().users, 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_field_updates_are_not_lost() {
    let services = Services::in_memory();
    let created = services
        .items()
        .create_item(item("Original", 1.0, 1))
        .await
        .unwrap();

    let title_items = services.items();
    let title_task = tokio::spawn(async move {
        for i in 0..200 {
            let patch = UpdateItem {
                title: Some(format!("title-{}", i)),
                ..Default::default()
            };
            title_items.update_item(created.id, patch).await.unwrap();
        }
    });

    let quantity_items = services.items();
    let quantity_task = tokio::spawn(async move {
        for i in 0..200 {
            let patch = UpdateItem {
                quantity: Some(i),
                ..Default::default()
            };
            quantity_items.update_item(created.id, patch).await.unwrap();
        }
    });

    title_task.await.unwrap();
    quantity_task.await.unwrap();

    let last = services.items().get_item(created.id).await.unwrap();
    assert_eq!(last.title, "title-199");
    assert_eq!(last.quantity, 199);
    assert_eq!(last.price, 1.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reset_is_exclusive_with_creates() {
    let services = Services::in_memory();

    let mut handles = Vec::new();
    for i in 0..8 {
        let users = services.users();
        let items = services.items();
        handles.push(tokio::spawn(async move {
            for j in 0..50 {
                users
                    .create_user(user(&format!("U{}-{}", i, j), &format!("u{}.{}@example.com", i, j)))
                    .await
                    .unwrap();
                items
                    .create_item(item(&format!("I{}-{}", i, j), 2.5, 2))
                    .await
                    .unwrap();
            }
        }));
    }

    let admin = services.admin();
    let resets = tokio::spawn(async move {
        for _ in 0..20 {
            admin.reset_all().await.unwrap();
            let summary = admin.statistics().await.unwrap();
            let counts = admin.counts().await.unwrap();
            assert!(summary.items.total <= counts.items);
            tokio::task::yield_now().await;
        }
    });

    for handle in handles {
        handle.await.unwrap();
    }
    resets.await.unwrap();

    let counts = services.admin().counts().await.unwrap();
    let users = services
        .users()
        .list_users(Window::new(0, usize::MAX))
        .await
        .unwrap();
    let items = services
        .items()
        .list_items(Window::new(0, usize::MAX), PriceRange::default())
        .await
        .unwrap();

    assert_eq!(counts.users, users.len());
    assert_eq!(counts.items, items.len());
    assert!(counts.users <= 400);

    let summary = services.admin().statistics().await.unwrap();
    assert_eq!(summary.items.total, items.len());
    assert_eq!(summary.users.total, users.len());
    assert_eq!(summary.items.total_inventory_value, 5.0 * items.len() as f64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_update_racing_delete_does_not_resurrect() {
    let services = Services::in_memory();

    for round in 0..20 {
        let created = services
            .items()
            .create_item(item(&format!("Doomed-{}", round), 3.0, 1))
            .await
            .unwrap();

        let updater = services.items();
        let updates = tokio::spawn(async move {
            for i in 0..100 {
                let patch = UpdateItem {
                    quantity: Some(i),
                    ..Default::default()
                };
                match updater.update_item(created.id, patch).await {
                    Ok(updated) => assert_eq!(updated.id, created.id),
                    Err(AppError::NotFound(_)) => {}
                    Err(other) => panic!("unexpected error: {:?}", other),
                }
            }
        });

        let deleter = services.items();
        let delete = tokio::spawn(async move { deleter.delete_item(created.id).await });

        updates.await.unwrap();
        delete.await.unwrap().unwrap();

        let result = services.items().get_item(created.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    let counts = services.admin().counts().await.unwrap();
    assert_eq!(counts.items, 0);
    let remaining = services
        .items()
        .list_items(Window::new(0, usize::MAX), PriceRange::default())
        .await
        .unwrap();
    assert!(remaining.is_empty());
}
