pub mod import;
pub mod routes;
pub mod types;
mod store;

use config::Config;
use handle_errors::return_error;
use serde::Deserialize;
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{http::Method, Filter};

use crate::store::Store;
use crate::types::account::AdminAuth;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Args {
    log_level: String,
    database_host: String,
    database_port: u16,
    database_name: String,
    port: u16,
    database_username: String,
    database_password: String,
    admin_password_hash: String,
    token_key: String,
}

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    dotenv::dotenv().ok();

    let config = Config::builder()
        .add_source(config::File::with_name("setup"))
        .build()
        .unwrap();

    let config = config.try_deserialize::<Args>().unwrap();

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},vocab_web={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let db_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database_username,
        config.database_password,
        config.database_host,
        config.database_port,
        config.database_name
    );
    let store = Store::new(&db_url).await;

    sqlx::migrate!()
        .run(&store.connection)
        .await
        .map_err(handle_errors::Error::MigrationError)?;

    let store_filter = warp::any().map(move || store.clone());

    let admin = AdminAuth {
        password_hash: config.admin_password_hash,
        token_key: config.token_key.clone(),
    };
    let admin_filter = warp::any().map(move || admin.clone());
    let auth = routes::authentication::auth(config.token_key);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type", "Authorization"])
        .allow_methods(&[Method::PUT, Method::DELETE, Method::GET, Method::POST]);

    let login = warp::post()
        .and(warp::path("login"))
        .and(warp::path::end())
        .and(admin_filter.clone())
        .and(warp::body::json())
        .and_then(routes::authentication::login);

    let get_words = warp::get()
        .and(warp::path("words"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::word::get_words);

    let get_word = warp::get()
        .and(warp::path("words"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::word::get_word);

    let add_word = warp::post()
        .and(warp::path("words"))
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::word::add_word);

    let update_word = warp::put()
        .and(warp::path("words"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::word::update_word);

    let delete_word = warp::delete()
        .and(warp::path("words"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and_then(routes::word::delete_word);

    let delete_words = warp::delete()
        .and(warp::path("words"))
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::word::delete_words);

    let get_verbs = warp::get()
        .and(warp::path("verbs"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::verb::get_verbs);

    let get_verb = warp::get()
        .and(warp::path("verbs"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::verb::get_verb);

    let add_verb = warp::post()
        .and(warp::path("verbs"))
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::verb::add_verb);

    let update_verb = warp::put()
        .and(warp::path("verbs"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::verb::update_verb);

    let delete_verb = warp::delete()
        .and(warp::path("verbs"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and_then(routes::verb::delete_verb);

    let delete_verbs = warp::delete()
        .and(warp::path("verbs"))
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::verb::delete_verbs);

    let get_names = warp::get()
        .and(warp::path("names"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::name::get_names);

    let get_name = warp::get()
        .and(warp::path("names"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::name::get_name);

    let add_name = warp::post()
        .and(warp::path("names"))
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::name::add_name);

    let update_name = warp::put()
        .and(warp::path("names"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::name::update_name);

    let delete_name = warp::delete()
        .and(warp::path("names"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and_then(routes::name::delete_name);

    let delete_names = warp::delete()
        .and(warp::path("names"))
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::name::delete_names);

    let bulk_import = warp::post()
        .and(warp::path("import"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(auth.clone())
        .and(store_filter.clone())
        .and(warp::multipart::form().max_length(8_000_000))
        .and_then(routes::import::bulk_import)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "bulk import request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let routes = login
        .or(bulk_import)
        .or(get_words)
        .or(get_word)
        .or(add_word)
        .or(update_word)
        .or(delete_word)
        .or(delete_words)
        .or(get_verbs)
        .or(get_verb)
        .or(add_verb)
        .or(update_verb)
        .or(delete_verb)
        .or(delete_verbs)
        .or(get_names)
        .or(get_name)
        .or(add_name)
        .or(update_name)
        .or(delete_name)
        .or(delete_names)
        .with(warp::trace::request())
        .with(cors)
        .recover(return_error);

    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
