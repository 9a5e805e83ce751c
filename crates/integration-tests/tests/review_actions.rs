//! Review card actions against the fake API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use playlog_client::{ActionOutcome, PlayLogClient, ReviewActions};
use playlog_core::{GameSlug, Rating, ReviewCard, ReviewId, Session};
use playlog_integration_tests::{EMAIL, FakeApi, USERNAME};

async fn card(client: &PlayLogClient, id: i64) -> ReviewCard {
    client
        .recent_reviews()
        .await
        .unwrap()
        .reviews
        .into_iter()
        .find(|r| r.id == ReviewId::new(id))
        .map(ReviewCard::new)
        .unwrap()
}

fn author() -> Session {
    Session::authenticated(USERNAME, EMAIL)
}

fn reader() -> Session {
    Session::authenticated("someone_2", "someone@cmpe.com")
}

// =============================================================================
// Like / Unlike
// =============================================================================

#[tokio::test]
async fn test_double_like_double_increments() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = reader();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    assert_eq!(card.likes(), 2);

    assert_eq!(actions.like(&mut card).await, ActionOutcome::Applied);
    assert_eq!(actions.like(&mut card).await, ActionOutcome::Applied);
    assert_eq!(card.likes(), 4);

    let sent = fake.requests_to("like-review").await;
    assert_eq!(sent.len(), 2);
    assert_eq!(
        sent[0].body,
        serde_json::json!({"review": 1, "user": "someone_2"})
    );
}

#[tokio::test]
async fn test_toggle_like_round_trip() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = reader();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 2).await;
    assert_eq!(actions.toggle_like(&mut card).await, ActionOutcome::Applied);
    assert!(card.is_liked());
    assert_eq!(card.likes(), 1);

    assert_eq!(actions.toggle_like(&mut card).await, ActionOutcome::Applied);
    assert!(!card.is_liked());
    assert_eq!(card.likes(), 0);
    assert_eq!(fake.requests_to("unlike-review").await.len(), 1);
}

#[tokio::test]
async fn test_failed_like_leaves_counter() {
    let fake = FakeApi::start().await.unwrap();
    fake.fail("like-review").await;
    let client = fake.client().unwrap();
    let session = reader();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    assert_eq!(actions.like(&mut card).await, ActionOutcome::Failed);
    assert_eq!(card.likes(), 2);
    assert!(!card.is_liked());
    assert_eq!(card.error(), "Failed to like the review");
}

#[tokio::test]
async fn test_failed_unlike_leaves_counter() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = reader();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    assert_eq!(actions.like(&mut card).await, ActionOutcome::Applied);
    assert_eq!(card.likes(), 3);

    fake.fail("unlike-review").await;
    assert_eq!(actions.unlike(&mut card).await, ActionOutcome::Failed);
    assert_eq!(card.likes(), 3);
    assert!(card.is_liked());
    assert_eq!(card.error(), "Failed to unlike the review");
}

// =============================================================================
// Edit / Delete
// =============================================================================

#[tokio::test]
async fn test_author_edit_sends_draft() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = author();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    card.toggle_editing();
    card.set_draft("Loved it, again");
    card.set_draft_rating(Rating::new(4).unwrap());

    assert_eq!(actions.save_edit(&mut card).await, ActionOutcome::Applied);
    assert_eq!(card.text(), "Loved it, again");
    assert!(!card.is_editing());

    let sent = fake.requests_to("edit-review").await;
    assert_eq!(
        sent[0].body,
        serde_json::json!({"review": 1, "rating": 4, "text": "Loved it, again"})
    );
}

#[tokio::test]
async fn test_failed_edit_keeps_text() {
    let fake = FakeApi::start().await.unwrap();
    fake.fail("edit-review").await;
    let client = fake.client().unwrap();
    let session = author();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    card.toggle_editing();
    card.set_draft("changed");

    assert_eq!(actions.save_edit(&mut card).await, ActionOutcome::Failed);
    assert_eq!(card.text(), "Loved it");
    assert!(card.is_editing());
    assert_eq!(card.error(), "Failed to edit the review");
}

#[tokio::test]
async fn test_author_delete() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = author();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    assert_eq!(actions.delete(&mut card).await, ActionOutcome::Applied);
    assert!(card.is_deleted());
    assert_eq!(
        fake.requests_to("delete-review").await[0].body,
        serde_json::json!({"review": 1})
    );
}

#[tokio::test]
async fn test_failed_delete_keeps_card() {
    let fake = FakeApi::start().await.unwrap();
    fake.fail("delete-review").await;
    let client = fake.client().unwrap();
    let session = author();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    assert_eq!(actions.delete(&mut card).await, ActionOutcome::Failed);
    assert!(!card.is_deleted());
    assert_eq!(card.text(), "Loved it");
    assert_eq!(card.likes(), 2);
    assert_eq!(card.error(), "Failed to delete the review");
    assert_eq!(fake.requests_to("delete-review").await.len(), 1);
}

#[tokio::test]
async fn test_non_author_edit_and_delete_send_nothing() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = reader();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    assert!(!card.controls(&session).can_edit);

    card.toggle_editing();
    card.set_draft("not mine");
    assert_eq!(actions.save_edit(&mut card).await, ActionOutcome::Skipped);
    assert_eq!(actions.delete(&mut card).await, ActionOutcome::Skipped);

    assert!(fake.requests_to("edit-review").await.is_empty());
    assert!(fake.requests_to("delete-review").await.is_empty());
    assert!(card.error().is_empty());
}

// =============================================================================
// Game / Create
// =============================================================================

#[tokio::test]
async fn test_load_game_for_card() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = Session::guest();
    let actions = ReviewActions::new(&client, &session);

    let mut card = card(&client, 1).await;
    assert_eq!(actions.load_game(&mut card).await, ActionOutcome::Applied);
    assert_eq!(card.game().unwrap().label, "Hades");
    assert_eq!(card.game().unwrap().genre.as_deref(), Some("roguelike"));
}

#[tokio::test]
async fn test_load_game_failure() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = Session::guest();
    let actions = ReviewActions::new(&client, &session);

    // No game-info route for celeste, so the fake answers 404.
    let mut card = card(&client, 2).await;
    assert_eq!(actions.load_game(&mut card).await, ActionOutcome::Failed);
    assert_eq!(card.error(), "Could not fetch the game");
}

#[tokio::test]
async fn test_create_review() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();
    let session = author();
    let actions = ReviewActions::new(&client, &session);

    let slug = GameSlug::parse("hades").unwrap();
    let outcome = actions
        .create(&slug, Rating::new(5).unwrap(), "Still great")
        .await;

    assert_eq!(outcome, ActionOutcome::Applied);
    assert_eq!(
        fake.requests_to("create-review").await[0].body,
        serde_json::json!({"game": "hades", "rating": 5, "text": "Still great", "user": USERNAME})
    );
}
