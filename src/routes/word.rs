use tracing::info;
use warp::http::StatusCode;

use crate::store::Store;
use crate::types::account::Session;
use crate::types::selection::IdSet;
use crate::types::word::NewWord;

pub async fn get_words(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let words = store.get_words().await?;
    Ok(warp::reply::json(&words))
}

pub async fn get_word(id: i32, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let word = store.get_word(id).await?;
    Ok(warp::reply::json(&word))
}

pub async fn add_word(
    _session: Session,
    store: Store,
    new_word: NewWord,
) -> Result<impl warp::Reply, warp::Rejection> {
    let word = store.add_word(new_word).await?;
    info!("added word {}", word.id);
    Ok(warp::reply::json(&word))
}

pub async fn update_word(
    id: i32,
    _session: Session,
    store: Store,
    new_word: NewWord,
) -> Result<impl warp::Reply, warp::Rejection> {
    let word = store.update_word(id, new_word).await?;
    info!("updated word {}", word.id);
    Ok(warp::reply::json(&word))
}

pub async fn delete_word(
    id: i32,
    _session: Session,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    store.delete_word(id).await?;
    info!("deleted word {}", id);
    Ok(warp::reply::with_status("Word deleted", StatusCode::OK))
}

pub async fn delete_words(
    _session: Session,
    store: Store,
    selection: IdSet,
) -> Result<impl warp::Reply, warp::Rejection> {
    let removed = store.delete_words(selection.ids).await?;
    info!("deleted {} words", removed);
    Ok(warp::reply::with_status(
        format!("{} words deleted", removed),
        StatusCode::OK,
    ))
}
