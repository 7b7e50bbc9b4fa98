use std::collections::HashSet;
use std::sync::Arc;

use pagecraft::application::ports::{RepositoryError, WebsiteRepository};
use pagecraft::domain::{ComponentId, ComponentType, Conversation};
use pagecraft::infrastructure::persistence::InMemoryWebsiteRepository;

fn section(label: usize) -> String {
    format!("<section>{label}</section>")
}

#[tokio::test]
async fn given_empty_repository_when_adding_then_first_component_gets_order_zero() {
    let repository = InMemoryWebsiteRepository::new();

    let component = repository
        .add_component(ComponentType::Hero, section(0))
        .await
        .unwrap();

    assert_eq!(component.order, 0);
    assert_eq!(component.component_type, ComponentType::Hero);
}

#[tokio::test]
async fn given_gap_after_removal_when_adding_then_order_stays_after_highest() {
    let repository = InMemoryWebsiteRepository::new();
    let first = repository
        .add_component(ComponentType::Section, section(0))
        .await
        .unwrap();
    repository
        .add_component(ComponentType::Section, section(1))
        .await
        .unwrap();
    repository.remove_component(first.id).await.unwrap();

    let added = repository
        .add_component(ComponentType::Section, section(2))
        .await
        .unwrap();

    assert_eq!(added.order, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_adds_when_all_complete_then_every_order_is_unique() {
    let repository = Arc::new(InMemoryWebsiteRepository::new());

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move {
                repository
                    .add_component(ComponentType::Section, section(i))
                    .await
                    .unwrap()
                    .order
            })
        })
        .collect();

    let mut orders = HashSet::new();
    for task in tasks {
        orders.insert(task.await.unwrap());
    }
    assert_eq!(orders, (0..16).collect::<HashSet<_>>());
}

#[tokio::test]
async fn given_unknown_component_when_updating_or_removing_then_returns_not_found() {
    let repository = InMemoryWebsiteRepository::new();
    let id = ComponentId::new();

    let updated = repository.update_component(id, "x").await;
    let removed = repository.remove_component(id).await;

    assert!(matches!(updated, Err(RepositoryError::NotFound(_))));
    assert!(matches!(removed, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_bound_conversation_when_component_removed_then_conversation_is_unbound() {
    let repository = InMemoryWebsiteRepository::new();
    let target = repository
        .add_component(ComponentType::Section, section(0))
        .await
        .unwrap();
    let mut conversation = Conversation::new();
    conversation.component_id = Some(target.id);
    repository.save_conversation(&conversation).await.unwrap();

    repository.remove_component(target.id).await.unwrap();

    let stored = repository
        .get_conversation(conversation.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.is_editing());
}

#[tokio::test]
async fn given_components_when_reordering_then_returns_sorted_snapshot() {
    let repository = InMemoryWebsiteRepository::new();
    let a = repository
        .add_component(ComponentType::Header, section(0))
        .await
        .unwrap();
    let b = repository
        .add_component(ComponentType::Footer, section(1))
        .await
        .unwrap();

    let website = repository.reorder_components(&[b.id, a.id]).await.unwrap();

    assert_eq!(website.components[0].id, b.id);
    assert_eq!(website.components[1].order, 1);
}
