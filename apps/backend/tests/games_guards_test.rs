mod common;

use actix_web::test;

#[actix_web::test]
async fn creating_a_game_requires_a_known_caller() {
    let app = common::init_app(common::build_test_state().await).await;

    // No header at all
    let req = test::TestRequest::post().uri("/games").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
    assert_eq!(test::read_body(resp).await, "User not found");

    // Non-numeric header
    let req = test::TestRequest::post()
        .uri("/games")
        .insert_header(("X-User-Id", "not-a-number"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 401);

    // Numeric header with no matching user
    let req = test::TestRequest::post()
        .uri("/games")
        .insert_header(("X-User-Id", "424242"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 401);
}

#[actix_web::test]
async fn inviting_twice_is_a_conflict() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let bob = common::id_of(&common::create_user(&app, "bob", 44).await);
    let carol = common::id_of(&common::create_user(&app, "carol", 27).await);

    let game_id = common::id_of(&common::create_game(&app, alice).await);
    assert_eq!(common::invite(&app, game_id, alice, bob).await.status(), 200);

    let resp = common::invite(&app, game_id, alice, carol).await;
    assert_eq!(resp.status().as_u16(), 409);
    assert_eq!(test::read_body(resp).await, "Game already started");
}

#[actix_web::test]
async fn inviting_yourself_is_a_conflict() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let game_id = common::id_of(&common::create_game(&app, alice).await);

    let resp = common::invite(&app, game_id, alice, alice).await;
    assert_eq!(resp.status().as_u16(), 409);
    assert_eq!(test::read_body(resp).await, "You can't play against yourself");
}

#[actix_web::test]
async fn inviting_an_unknown_user_is_not_found() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let game_id = common::id_of(&common::create_game(&app, alice).await);

    let resp = common::invite(&app, game_id, alice, 9999).await;
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(test::read_body(resp).await, "User not found");
}

#[actix_web::test]
async fn inviting_into_an_unknown_game_is_not_found() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let bob = common::id_of(&common::create_user(&app, "bob", 44).await);

    let resp = common::invite(&app, 9999, alice, bob).await;
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(test::read_body(resp).await, "Game not found");
}

#[actix_web::test]
async fn only_participants_may_play() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let bob = common::id_of(&common::create_user(&app, "bob", 44).await);
    let carol = common::id_of(&common::create_user(&app, "carol", 27).await);

    let game_id = common::id_of(&common::create_game(&app, alice).await);
    common::invite(&app, game_id, alice, bob).await;

    let resp = common::play(&app, game_id, carol, "rock").await;
    assert_eq!(resp.status().as_u16(), 403);
    assert_eq!(
        test::read_body(resp).await,
        "You are not a player of this game"
    );
}

#[actix_web::test]
async fn the_participant_check_runs_before_choice_validation() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let bob = common::id_of(&common::create_user(&app, "bob", 44).await);
    let carol = common::id_of(&common::create_user(&app, "carol", 27).await);

    let game_id = common::id_of(&common::create_game(&app, alice).await);
    common::invite(&app, game_id, alice, bob).await;

    // A stranger with a nonsense choice is rejected as a stranger.
    let resp = common::play(&app, game_id, carol, "banana").await;
    assert_eq!(resp.status().as_u16(), 403);
}

#[actix_web::test]
async fn playing_a_pending_game_is_a_conflict() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let game_id = common::id_of(&common::create_game(&app, alice).await);

    let resp = common::play(&app, game_id, alice, "rock").await;
    assert_eq!(resp.status().as_u16(), 409);
    assert_eq!(test::read_body(resp).await, "Game not started");
}

#[actix_web::test]
async fn playing_a_finished_game_is_a_conflict() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let bob = common::id_of(&common::create_user(&app, "bob", 44).await);

    let game_id = common::id_of(&common::create_game(&app, alice).await);
    common::invite(&app, game_id, alice, bob).await;
    common::play(&app, game_id, alice, "rock").await;
    common::play(&app, game_id, bob, "scissors").await;

    let resp = common::play(&app, game_id, alice, "paper").await;
    assert_eq!(resp.status().as_u16(), 409);
}

#[actix_web::test]
async fn an_invalid_choice_is_a_bad_request() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let bob = common::id_of(&common::create_user(&app, "bob", 44).await);

    let game_id = common::id_of(&common::create_game(&app, alice).await);
    common::invite(&app, game_id, alice, bob).await;

    for choice in ["banana", "Rock", "ROCK", ""] {
        let resp = common::play(&app, game_id, alice, choice).await;
        assert_eq!(resp.status().as_u16(), 400, "{choice:?}");
        assert_eq!(test::read_body(resp).await, "Invalid choice");
    }
}

#[actix_web::test]
async fn only_participants_may_delete() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);
    let carol = common::id_of(&common::create_user(&app, "carol", 27).await);

    let game_id = common::id_of(&common::create_game(&app, alice).await);

    let req = test::TestRequest::delete()
        .uri(&format!("/game/{game_id}"))
        .insert_header(("X-User-Id", carol.to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 403);

    // Unknown game: 404 before the participant check can even run.
    let req = test::TestRequest::delete()
        .uri("/game/9999")
        .insert_header(("X-User-Id", alice.to_string()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);

    // No caller: 401.
    let req = test::TestRequest::delete()
        .uri(&format!("/game/{game_id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 401);
}

#[actix_web::test]
async fn malformed_game_ids_are_not_found() {
    let app = common::init_app(common::build_test_state().await).await;

    let alice = common::id_of(&common::create_user(&app, "alice", 30).await);

    let req = test::TestRequest::get().uri("/game/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(test::read_body(resp).await, "Game not found");

    let resp = common::play(&app, 9999, alice, "rock").await;
    assert_eq!(resp.status().as_u16(), 404);
}
