use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

use folio_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use folio_core::error::RepoError;
use folio_core::ports::{BlogRepository, DUPLICATE_ID, DUPLICATE_SLUG};

use crate::database::entity::blog_post;
use crate::database::postgres_repo::{
    PostgresBlogRepository, in_collection_order, unique_violation,
};

fn model(id: &str, slug: &str) -> blog_post::Model {
    let published = Utc.with_ymd_and_hms(2024, 4, 15, 10, 0, 0).unwrap();
    blog_post::Model {
        id: id.to_owned(),
        title: "Test Post".to_owned(),
        slug: slug.to_owned(),
        description: "Description".to_owned(),
        content: "Content".to_owned(),
        thumbnail: "/placeholder.svg".to_owned(),
        tags: serde_json::json!(["Rust", 7, "SeaORM"]),
        published_at: published.into(),
        updated_at: published.into(),
        position: 1,
    }
}

#[tokio::test]
async fn test_find_post_by_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model("1", "test-post")]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let post = repo.find_by_slug("test-post").await.unwrap().unwrap();

    assert_eq!(post.id, "1");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.tags, vec!["Rust", "SeaORM"]);
}

#[tokio::test]
async fn test_create_rejects_taken_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model("1", "test-post")]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let post = BlogPost::new(NewBlogPost {
        title: "Test Post".to_owned(),
        content: "c".to_owned(),
        description: "d".to_owned(),
        ..Default::default()
    })
    .unwrap();

    let err = repo.create(post).await.unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_update_unknown_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let err = repo
        .update("missing", BlogPostPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let err = repo.delete("missing").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_existing_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    repo.delete("1").await.unwrap();
}

#[test]
fn test_list_follows_insertion_sequence() {
    let sql = in_collection_order()
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.ends_with(r#"ORDER BY "blog_posts"."position" ASC"#), "{sql}");
    assert!(!sql.contains("published_at\" ASC"), "{sql}");
}

#[test]
fn test_position_is_left_to_the_database() {
    let post = BlogPost::new(NewBlogPost {
        title: "Test Post".to_owned(),
        content: "c".to_owned(),
        description: "d".to_owned(),
        ..Default::default()
    })
    .unwrap();

    let active = blog_post::ActiveModel::from(post);
    assert!(active.position.is_not_set());
}

#[test]
fn test_unique_violation_names_the_key() {
    let err = unique_violation(
        r#"duplicate key value violates unique constraint "blog_posts_pkey""#,
    );
    assert!(matches!(err, RepoError::Constraint(msg) if msg == DUPLICATE_ID));

    let err = unique_violation(
        r#"duplicate key value violates unique constraint "blog_posts_slug_key""#,
    );
    assert!(matches!(err, RepoError::Constraint(msg) if msg == DUPLICATE_SLUG));
}

#[tokio::test]
async fn test_update_of_concurrently_deleted_row() {
    // The lookup finds the row, then UPDATE ... RETURNING comes back empty.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![
            vec![model("1", "test-post")],
            Vec::<blog_post::Model>::new(),
        ])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let err = repo
        .update(
            "1",
            BlogPostPatch {
                title: Some("Renamed".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}
