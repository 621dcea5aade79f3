use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value};
use crate::books::domain::model::CopiesChange;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_copies_cmd::{UpdateCopiesCommand, UpdateCopiesCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    #[serde(rename = "authorName")]
    pub author_name: Option<String>,
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<BookDto>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res.book))
}

pub async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest { isbn: Some(isbn) };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res.book))
}

pub async fn find_books_by_author(
    State(state): State<AppState>,
    Query(query): Query<AuthorQuery>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let req = FindBooksByAuthorCommandRequest { author_name: query.author_name };
    let res = FindBooksByAuthorCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res.books))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { isbn: Some(isbn) };
    let _ = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn increment_available_copies(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<BookDto>, ServerError> {
    update_copies(state, isbn, CopiesChange::Increment).await
}

pub async fn decrement_available_copies(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<BookDto>, ServerError> {
    update_copies(state, isbn, CopiesChange::Decrement).await
}

async fn update_copies(state: AppState, isbn: String, change: CopiesChange) -> Result<Json<BookDto>, ServerError> {
    let req = UpdateCopiesCommandRequest { isbn: Some(isbn), change };
    let res = UpdateCopiesCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res.book))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::catalog::controller::{add_book, AuthorQuery, decrement_available_copies, find_book_by_isbn, find_books_by_author, increment_available_copies, remove_book};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    async fn build_state() -> AppState {
        AppState::new(Configuration::new("test"), GatewayPublisherVia::Memory).await
    }

    #[tokio::test]
    async fn test_should_serve_book_lifecycle() {
        let state = build_state().await;

        let body = json!({"title": "Dune", "author": "Frank Herbert", "publicationYear": 1965, "availableCopies": 2});
        let Json(added) = add_book(State(state.clone()), Json(body)).await.expect("should add book");
        assert_eq!("Dune", added.title.as_str());

        let Json(found) = find_book_by_isbn(State(state.clone()), Path(added.isbn.clone())).await.expect("should find book");
        assert_eq!(added, found);

        let Json(book) = increment_available_copies(State(state.clone()), Path(added.isbn.clone())).await.expect("should increment");
        assert_eq!(3, book.available_copies);
        let Json(book) = decrement_available_copies(State(state.clone()), Path(added.isbn.clone())).await.expect("should decrement");
        assert_eq!(2, book.available_copies);

        let status = remove_book(State(state.clone()), Path(added.isbn.clone())).await.expect("should remove book");
        assert_eq!(StatusCode::NO_CONTENT, status);
        let err = find_book_by_isbn(State(state), Path(added.isbn)).await.expect_err("should be removed");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
    }

    #[tokio::test]
    async fn test_should_map_errors_to_status() {
        let state = build_state().await;

        let err = find_book_by_isbn(State(state.clone()), Path("12345".to_string())).await.expect_err("bad isbn");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        assert_eq!("The ISBN 12345 is not valid", err.1.as_str());

        let err = find_book_by_isbn(State(state.clone()), Path("978-9-99-9999999-9".to_string())).await.expect_err("unknown isbn");
        assert_eq!(StatusCode::NOT_FOUND, err.0);

        let err = add_book(State(state.clone()), Json(json!({"title": "Dune"}))).await.expect_err("bad body");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);

        let err = find_books_by_author(State(state.clone()), Query(AuthorQuery { author_name: None })).await.expect_err("no author");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
    }

    #[tokio::test]
    async fn test_should_reject_decrement_below_zero() {
        let state = build_state().await;

        let body = json!({"title": "Dune", "author": "Frank Herbert", "publicationYear": 1965, "availableCopies": 0});
        let Json(added) = add_book(State(state.clone()), Json(body)).await.expect("should add book");
        let err = decrement_available_copies(State(state), Path(added.isbn)).await.expect_err("no copies left");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
    }

    #[tokio::test]
    async fn test_should_find_books_by_author() {
        let state = build_state().await;

        let Json(books) = find_books_by_author(State(state.clone()),
                                               Query(AuthorQuery { author_name: Some("George Orwell".to_string()) }))
            .await.expect("should find books");
        assert_eq!(1, books.len());
        assert_eq!("1984", books[0].title.as_str());

        let Json(books) = find_books_by_author(State(state),
                                               Query(AuthorQuery { author_name: Some("Nobody".to_string()) }))
            .await.expect("should find nothing");
        assert!(books.is_empty());
    }
}
