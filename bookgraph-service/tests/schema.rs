//! Schema-level tests exercising GraphQL operations against a seeded
//! catalog, without going through HTTP.

use bookgraph_service::create_catalog_schema;
use serde_json::{Value, json};

async fn execute(schema: &bookgraph_service::graphql::CatalogSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn queries_a_seeded_book_with_its_author() {
    let schema = create_catalog_schema(true);

    let data = execute(
        &schema,
        "{ book(id: 2) { id name authorId author { id name } } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "book": {
                "id": 2,
                "name": "Harry Potter and the Prisoner of Azkaban",
                "authorId": 1,
                "author": { "id": 1, "name": "J. K. Rowling" },
            }
        })
    );
}

#[tokio::test]
async fn queries_an_author_with_their_books_in_seed_order() {
    let schema = create_catalog_schema(true);

    let data = execute(&schema, "{ author(id: 1) { name books { id name } } }").await;

    assert_eq!(
        data,
        json!({
            "author": {
                "name": "J. K. Rowling",
                "books": [
                    { "id": 1, "name": "Harry Potter and the Chamber of Secrets" },
                    { "id": 2, "name": "Harry Potter and the Prisoner of Azkaban" },
                    { "id": 3, "name": "Harry Potter and the Goblet of Fire" },
                ],
            }
        })
    );
}

#[tokio::test]
async fn lists_all_seeded_entities_in_insertion_order() {
    let schema = create_catalog_schema(true);

    let data = execute(&schema, "{ books { id } authors { id } }").await;

    let book_ids: Vec<_> = data["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|book| book["id"].as_i64().unwrap())
        .collect();
    assert_eq!(book_ids, (1..=8).collect::<Vec<_>>());

    let author_ids: Vec<_> = data["authors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|author| author["id"].as_i64().unwrap())
        .collect();
    assert_eq!(author_ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn unknown_and_omitted_ids_resolve_to_null() {
    let schema = create_catalog_schema(true);

    let data = execute(&schema, "{ book(id: 99) { id } author(id: 99) { id } }").await;
    assert_eq!(data, json!({ "book": null, "author": null }));

    let data = execute(&schema, "{ book { id } author { id } }").await;
    assert_eq!(data, json!({ "book": null, "author": null }));
}

#[tokio::test]
async fn add_book_appends_with_the_next_id() {
    let schema = create_catalog_schema(true);

    let data = execute(
        &schema,
        r#"mutation { addBook(name: "X", authorId: 1) { id name authorId } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "addBook": { "id": 9, "name": "X", "authorId": 1 } })
    );

    let data = execute(&schema, "{ books { id name } }").await;
    let books = data["books"].as_array().unwrap();
    assert_eq!(books.len(), 9);
    assert_eq!(books[8], json!({ "id": 9, "name": "X" }));
}

#[tokio::test]
async fn add_author_starts_with_no_books() {
    let schema = create_catalog_schema(true);

    let data = execute(&schema, r#"mutation { addAuthor(name: "Y") { id name } }"#).await;
    assert_eq!(data, json!({ "addAuthor": { "id": 4, "name": "Y" } }));

    let data = execute(&schema, "{ author(id: 4) { id name books { id } } }").await;
    assert_eq!(
        data,
        json!({ "author": { "id": 4, "name": "Y", "books": [] } })
    );
}

#[tokio::test]
async fn a_dangling_author_reference_resolves_to_null() {
    let schema = create_catalog_schema(true);

    let data = execute(
        &schema,
        r#"mutation { addBook(name: "Orphan", authorId: 42) { id } }"#,
    )
    .await;
    assert_eq!(data["addBook"]["id"], json!(9));

    let data = execute(&schema, "{ book(id: 9) { name author { id } } }").await;
    assert_eq!(data, json!({ "book": { "name": "Orphan", "author": null } }));
}

#[tokio::test]
async fn an_empty_catalog_lists_nothing() {
    let schema = create_catalog_schema(false);

    let data = execute(&schema, "{ books { id } authors { id } }").await;
    assert_eq!(data, json!({ "books": [], "authors": [] }));
}
