use tracing::info;
use warp::http::StatusCode;

use crate::store::Store;
use crate::types::account::Session;
use crate::types::selection::IdSet;
use crate::types::verb::NewVerb;

pub async fn get_verbs(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let verbs = store.get_verbs().await?;
    Ok(warp::reply::json(&verbs))
}

pub async fn get_verb(id: i32, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let verb = store.get_verb(id).await?;
    Ok(warp::reply::json(&verb))
}

pub async fn add_verb(
    _session: Session,
    store: Store,
    new_verb: NewVerb,
) -> Result<impl warp::Reply, warp::Rejection> {
    let verb = store.add_verb(new_verb).await?;
    info!("added verb {}", verb.id);
    Ok(warp::reply::json(&verb))
}

pub async fn update_verb(
    id: i32,
    _session: Session,
    store: Store,
    new_verb: NewVerb,
) -> Result<impl warp::Reply, warp::Rejection> {
    let verb = store.update_verb(id, new_verb).await?;
    info!("updated verb {}", verb.id);
    Ok(warp::reply::json(&verb))
}

pub async fn delete_verb(
    id: i32,
    _session: Session,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    store.delete_verb(id).await?;
    info!("deleted verb {}", id);
    Ok(warp::reply::with_status("Verb deleted", StatusCode::OK))
}

pub async fn delete_verbs(
    _session: Session,
    store: Store,
    selection: IdSet,
) -> Result<impl warp::Reply, warp::Rejection> {
    let removed = store.delete_verbs(selection.ids).await?;
    info!("deleted {} verbs", removed);
    Ok(warp::reply::with_status(
        format!("{} verbs deleted", removed),
        StatusCode::OK,
    ))
}
