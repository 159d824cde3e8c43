//! HTTP-level integration tests for the `/Movies` pages.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{assert_redirect, body_json, get, post_form};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn movie_fields<'a>(title: &'a str, genre: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("release_date", "1984-03-13"),
        ("genre", genre),
        ("price", "9.99"),
        ("rating", "PG"),
    ]
}

/// Create a movie through the form and return its generated id.
async fn create_movie(pool: &PgPool, title: &str, genre: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/Movies/Create", &movie_fields(title, genre)).await;
    assert_redirect(&response, "/Movies");

    sqlx::query_scalar::<_, i64>("SELECT id FROM movie WHERE title = $1 ORDER BY id DESC LIMIT 1")
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn index_titles(pool: &PgPool, uri: &str) -> Vec<String> {
    let app = common::build_test_app(pool.clone());
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect()
}

async fn seed_catalog(pool: &PgPool) {
    create_movie(pool, "When Harry Met Sally", "Romantic Comedy").await;
    create_movie(pool, "Ghostbusters", "Comedy").await;
    create_movie(pool, "Ghostbusters 2", "Comedy").await;
    create_movie(pool, "Rio Bravo", "Western").await;
}

// ---------------------------------------------------------------------------
// Index and filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn index_without_filters_lists_every_movie(pool: PgPool) {
    seed_catalog(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/Movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Index");
    assert_eq!(json["data"]["movies"].as_array().unwrap().len(), 4);
    assert!(json["data"]["search_string"].is_null());
    assert!(json["data"]["selected_genre"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_returns_only_the_matching_movie(pool: PgPool) {
    create_movie(&pool, "Ghostbusters", "Comedy").await;
    create_movie(&pool, "When Harry Met Sally", "Romantic Comedy").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/Movies?searchString=ghost").await;
    let json = body_json(response).await;

    let movies = json["data"]["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Ghostbusters");
    assert_eq!(movies[0]["genre"], "Comedy");
    assert_eq!(movies[0]["price"], "9.99");
    assert_eq!(movies[0]["rating"], "PG");
    assert_eq!(json["data"]["search_string"], "ghost");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    seed_catalog(&pool).await;

    let titles = index_titles(&pool, "/Movies?searchString=GHOSTBUSTERS").await;
    assert_eq!(titles, vec!["Ghostbusters", "Ghostbusters 2"]);

    let titles = index_titles(&pool, "/Movies?searchString=met%20s").await;
    assert_eq!(titles, vec!["When Harry Met Sally"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn genre_filter_is_exact(pool: PgPool) {
    seed_catalog(&pool).await;

    let titles = index_titles(&pool, "/Movies?selectedGenre=Comedy").await;
    assert_eq!(titles, vec!["Ghostbusters", "Ghostbusters 2"]);

    // Different case is a different genre.
    let titles = index_titles(&pool, "/Movies?selectedGenre=comedy").await;
    assert!(titles.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn combined_filters_intersect(pool: PgPool) {
    seed_catalog(&pool).await;

    let titles = index_titles(&pool, "/Movies?searchString=a&selectedGenre=Romantic%20Comedy").await;
    assert_eq!(titles, vec!["When Harry Met Sally"]);

    let titles = index_titles(&pool, "/Movies?searchString=ghost&selectedGenre=Western").await;
    assert!(titles.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_filters_are_ignored(pool: PgPool) {
    seed_catalog(&pool).await;

    let titles = index_titles(&pool, "/Movies?searchString=&selectedGenre=").await;
    assert_eq!(titles.len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_wildcards_match_literally(pool: PgPool) {
    seed_catalog(&pool).await;

    let titles = index_titles(&pool, "/Movies?searchString=%25").await;
    assert!(titles.is_empty());

    let titles = index_titles(&pool, "/Movies?searchString=_").await;
    assert!(titles.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn genre_list_is_distinct_and_sorted(pool: PgPool) {
    seed_catalog(&pool).await;

    // Filters do not narrow the genre list.
    let app = common::build_test_app(pool);
    let response = get(app, "/Movies?selectedGenre=Western").await;
    let json = body_json(response).await;

    assert_eq!(
        json["data"]["genres"],
        serde_json::json!(["Comedy", "Romantic Comedy", "Western"])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_with_nul_returns_empty_listing(pool: PgPool) {
    seed_catalog(&pool).await;

    let titles = index_titles(&pool, "/Movies?searchString=a%00b").await;
    assert!(titles.is_empty());

    let app = common::build_test_app(pool);
    let response = get(app, "/Movies?selectedGenre=Com%00edy").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["movies"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["genres"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn details_without_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/Movies/Details").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn details_with_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/Movies/Details/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/Movies/Details/not-a-number").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/Movies/Create").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Create");
    assert!(json["data"]["values"]["title"].is_null());
    assert_eq!(json["data"]["errors"], serde_json::json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_details_returns_same_fields(pool: PgPool) {
    let id = create_movie(&pool, "Ghostbusters", "Comedy").await;
    assert!(id > 0);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/Movies/Details/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Details");
    let movie = &json["data"];
    assert_eq!(movie["id"], id);
    assert_eq!(movie["title"], "Ghostbusters");
    assert_eq!(movie["genre"], "Comedy");
    assert_eq!(movie["price"], "9.99");
    assert_eq!(movie["release_date"], "1984-03-13");
    assert_eq!(movie["rating"], "PG");
    assert_eq!(movie["row_version"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_ignores_fields_outside_the_allow_list(pool: PgPool) {
    let mut fields = movie_fields("Ghostbusters", "Comedy");
    fields.push(("id", "424242"));
    fields.push(("row_version", "99"));

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/Movies/Create", &fields).await;
    assert_redirect(&response, "/Movies");

    let (id, version): (i64, i32) =
        sqlx::query_as("SELECT id, row_version FROM movie WHERE title = 'Ghostbusters'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_ne!(id, 424242);
    assert_eq!(version, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_create_redisplays_form_without_persisting(pool: PgPool) {
    let fields = [
        ("title", "Ghostbusters"),
        ("release_date", "1984-03-13"),
        ("genre", "Comedy"),
        ("price", "cheap"),
        ("rating", "PG"),
    ];

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/Movies/Create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Create");
    assert_eq!(json["data"]["values"]["title"], "Ghostbusters");
    assert_eq!(json["data"]["values"]["price"], "cheap");
    assert!(json["data"]["errors"]["price"].is_array());
    assert!(json["data"]["errors"]["title"].is_null());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movie")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_missing_fields_reports_each(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/Movies/Create", &[("title", "")]).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let errors = &json["data"]["errors"];
    for field in ["title", "release_date", "genre", "price"] {
        assert!(errors[field].is_array(), "expected an error for {field}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_nul_in_text_redisplays_form(pool: PgPool) {
    let mut fields = movie_fields("Ghost\0busters", "Comedy");
    fields.retain(|(name, _)| *name != "rating");
    fields.push(("rating", "P\0G"));

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/Movies/Create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Create");
    assert_eq!(json["data"]["values"]["title"], "Ghost\u{0}busters");
    assert!(json["data"]["errors"]["title"].is_array());
    assert!(json["data"]["errors"]["rating"].is_array());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movie")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_unstorable_date_redisplays_form(pool: PgPool) {
    for date in ["-5000-03-13", "+20000-03-13"] {
        let fields = [
            ("title", "Ghostbusters"),
            ("release_date", date),
            ("genre", "Comedy"),
            ("price", "9.99"),
            ("rating", "PG"),
        ];
        let app = common::build_test_app(pool.clone());
        let response = post_form(app, "/Movies/Create", &fields).await;
        assert_eq!(response.status(), StatusCode::OK, "{date}");

        let json = body_json(response).await;
        assert_eq!(json["data"]["values"]["release_date"], date);
        assert!(json["data"]["errors"]["release_date"].is_array(), "{date}");
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movie")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_stores_text_as_submitted(pool: PgPool) {
    let id = create_movie(&pool, "  Ghostbusters  ", "Comedy").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/Movies/Details/{id}")).await).await;
    assert_eq!(json["data"]["title"], "  Ghostbusters  ");
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_form_for_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/Movies/Edit/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/Movies/Edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_form_is_populated(pool: PgPool) {
    let id = create_movie(&pool, "Rio Bravo", "Western").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/Movies/Edit/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Edit");
    let values = &json["data"]["values"];
    assert_eq!(values["id"], id.to_string());
    assert_eq!(values["row_version"], "1");
    assert_eq!(values["title"], "Rio Bravo");
    assert_eq!(values["release_date"], "1984-03-13");
    assert_eq!(values["price"], "9.99");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_with_mismatched_id_returns_404(pool: PgPool) {
    let mut fields = movie_fields("Ghostbusters", "Comedy");
    fields.push(("id", "8"));
    fields.push(("row_version", "1"));

    let app = common::build_test_app(pool);
    let response = post_form(app, "/Movies/Edit/7", &fields).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_with_mismatched_id_does_not_mutate(pool: PgPool) {
    let id = create_movie(&pool, "Ghostbusters", "Comedy").await;
    let other = (id + 1).to_string();

    let fields = [
        ("id", other.as_str()),
        ("row_version", "1"),
        ("title", "Renamed"),
        ("release_date", "1984-03-13"),
        ("genre", "Comedy"),
        ("price", "9.99"),
        ("rating", "PG"),
    ];
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/Movies/Edit/{id}"), &fields).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let title: String = sqlx::query_scalar("SELECT title FROM movie WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(title, "Ghostbusters");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_edit_updates_and_redirects(pool: PgPool) {
    let id = create_movie(&pool, "Ghostbusters", "Comedy").await;
    let id_str = id.to_string();

    let fields = [
        ("id", id_str.as_str()),
        ("row_version", "1"),
        ("title", "Ghostbusters"),
        ("release_date", "1984-06-08"),
        ("genre", "Comedy"),
        ("price", "4.50"),
        ("rating", "PG-13"),
    ];
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/Movies/Edit/{id}"), &fields).await;
    assert_redirect(&response, "/Movies");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/Movies/Details/{id}")).await).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["price"], "4.50");
    assert_eq!(json["data"]["release_date"], "1984-06-08");
    assert_eq!(json["data"]["rating"], "PG-13");
    assert_eq!(json["data"]["row_version"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_edit_redisplays_form(pool: PgPool) {
    let id = create_movie(&pool, "Ghostbusters", "Comedy").await;
    let id_str = id.to_string();

    let fields = [
        ("id", id_str.as_str()),
        ("row_version", "1"),
        ("title", "Ghostbusters"),
        ("release_date", "1984-03-13"),
        ("genre", "comedy"),
        ("price", "9.99"),
        ("rating", "PG"),
    ];
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/Movies/Edit/{id}"), &fields).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Edit");
    assert_eq!(json["data"]["values"]["genre"], "comedy");
    assert!(json["data"]["errors"]["genre"].is_array());

    let genre: String = sqlx::query_scalar("SELECT genre FROM movie WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(genre, "Comedy");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_with_nul_or_unstorable_date_redisplays_form(pool: PgPool) {
    let id = create_movie(&pool, "Ghostbusters", "Comedy").await;
    let id_str = id.to_string();

    let fields = [
        ("id", id_str.as_str()),
        ("row_version", "1"),
        ("title", "Ghost\0busters"),
        ("release_date", "-5000-03-13"),
        ("genre", "Comedy"),
        ("price", "9.99"),
        ("rating", "PG"),
    ];
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/Movies/Edit/{id}"), &fields).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Edit");
    assert!(json["data"]["errors"]["title"].is_array());
    assert!(json["data"]["errors"]["release_date"].is_array());

    let (title, version): (String, i32) =
        sqlx::query_as("SELECT title, row_version FROM movie WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(title, "Ghostbusters");
    assert_eq!(version, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_with_stale_row_version_is_a_conflict(pool: PgPool) {
    let id = create_movie(&pool, "Ghostbusters", "Comedy").await;
    let id_str = id.to_string();

    // Another request already updated the row.
    sqlx::query("UPDATE movie SET price = 1.00, row_version = row_version + 1 WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let fields = [
        ("id", id_str.as_str()),
        ("row_version", "1"),
        ("title", "Ghostbusters"),
        ("release_date", "1984-03-13"),
        ("genre", "Comedy"),
        ("price", "9.99"),
        ("rating", "PG"),
    ];
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/Movies/Edit/{id}"), &fields).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // The concurrent write is kept, not merged.
    let price: String = sqlx::query_scalar("SELECT price::TEXT FROM movie WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(price, "1.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_of_deleted_movie_returns_404(pool: PgPool) {
    let id = create_movie(&pool, "Ghostbusters", "Comedy").await;
    let id_str = id.to_string();

    sqlx::query("DELETE FROM movie WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let fields = [
        ("id", id_str.as_str()),
        ("row_version", "1"),
        ("title", "Ghostbusters"),
        ("release_date", "1984-03-13"),
        ("genre", "Comedy"),
        ("price", "9.99"),
        ("rating", "PG"),
    ];
    let app = common::build_test_app(pool);
    let response = post_form(app, &format!("/Movies/Edit/{id}"), &fields).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_confirmation_shows_movie(pool: PgPool) {
    let id = create_movie(&pool, "Rio Bravo", "Western").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/Movies/Delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "Movies/Delete");
    assert_eq!(json["data"]["title"], "Rio Bravo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_confirmation_for_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/Movies/Delete/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/Movies/Delete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_movie(pool: PgPool) {
    let id = create_movie(&pool, "Rio Bravo", "Western").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/Movies/Delete/{id}"), &[]).await;
    assert_redirect(&response, "/Movies");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/Movies/Details/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_of_missing_movie_still_redirects(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/Movies/Delete/999999", &[]).await;
    assert_redirect(&response, "/Movies");
}
