use axum::{
    routing::{get, patch},
    Router,
};
use lambda_http::{run, Error};
use book_catalog::catalog::controller::{add_book, decrement_available_copies, find_book_by_isbn,
                                        find_books_by_author, increment_available_copies, remove_book};
use book_catalog::core::controller::AppState;
use book_catalog::core::domain::Configuration;
use book_catalog::gateway::GatewayPublisherVia;
use book_catalog::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    if config.dev_mode {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }

    tracing::info!(branch = config.branch_id.as_str(), seed = config.seed_catalog,
        dev_mode = config.dev_mode, "starting catalog");
    let state = AppState::new(config, GatewayPublisherVia::Logs).await;

    let app = Router::new()
        .route("/api/books",
               get(find_books_by_author).post(add_book))
        .route("/api/books/:isbn",
               get(find_book_by_isbn).delete(remove_book))
        .route("/api/books/:isbn/available-copies/increment", patch(increment_available_copies))
        .route("/api/books/:isbn/available-copies/decrement", patch(decrement_available_copies))
        .with_state(state);

    run(app).await
}
