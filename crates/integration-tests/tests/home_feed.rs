//! Home feed and search against the fake API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use playlog_client::HomeFeed;
use playlog_integration_tests::FakeApi;

#[tokio::test]
async fn test_feed_loads_every_section() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();

    let feed = HomeFeed::load(&client).await;

    assert!(feed.errors().is_empty());
    assert_eq!(feed.game_of_the_day.loaded().unwrap().label, "Hades");
    assert_eq!(feed.popular_games.loaded().unwrap().len(), 2);
    // new-games answers with the nested shape by default
    assert_eq!(
        feed.new_games.loaded().unwrap()[0].game_slug.as_str(),
        "balatro"
    );
    assert_eq!(feed.recent_reviews.loaded().unwrap().len(), 2);
}

#[tokio::test]
async fn test_flat_new_games() {
    let fake = FakeApi::start().await.unwrap();
    fake.flat_new_games().await;
    let client = fake.client().unwrap();

    let games = client.new_games().await.unwrap();
    assert_eq!(games.games.len(), 1);
}

#[tokio::test]
async fn test_one_failing_section() {
    let fake = FakeApi::start().await.unwrap();
    fake.fail("popular-games").await;
    let client = fake.client().unwrap();

    let feed = HomeFeed::load(&client).await;

    assert_eq!(feed.errors(), vec!["Could not fetch Popular Games"]);
    assert!(feed.game_of_the_day.loaded().is_some());
    assert!(feed.new_games.loaded().is_some());
    assert!(feed.recent_reviews.loaded().is_some());
}

#[tokio::test]
async fn test_search_sends_game_name() {
    let fake = FakeApi::start().await.unwrap();
    let client = fake.client().unwrap();

    let results = client.search_games("had").await.unwrap();

    assert_eq!(results.games[0].label, "Hades");
    assert_eq!(
        fake.requests_to("search-game").await[0].body,
        serde_json::json!({"game_name": "had"})
    );
}
