use tracing::info;
use warp::http::StatusCode;

use crate::store::Store;
use crate::types::account::Session;
use crate::types::name::NewName;
use crate::types::selection::IdSet;

pub async fn get_names(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let names = store.get_names().await?;
    Ok(warp::reply::json(&names))
}

pub async fn get_name(id: i32, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let name = store.get_name(id).await?;
    Ok(warp::reply::json(&name))
}

pub async fn add_name(
    _session: Session,
    store: Store,
    new_name: NewName,
) -> Result<impl warp::Reply, warp::Rejection> {
    let name = store.add_name(new_name).await?;
    info!("added name {}", name.id);
    Ok(warp::reply::json(&name))
}

pub async fn update_name(
    id: i32,
    _session: Session,
    store: Store,
    new_name: NewName,
) -> Result<impl warp::Reply, warp::Rejection> {
    let name = store.update_name(id, new_name).await?;
    info!("updated name {}", name.id);
    Ok(warp::reply::json(&name))
}

pub async fn delete_name(
    id: i32,
    _session: Session,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    store.delete_name(id).await?;
    info!("deleted name {}", id);
    Ok(warp::reply::with_status("Name deleted", StatusCode::OK))
}

pub async fn delete_names(
    _session: Session,
    store: Store,
    selection: IdSet,
) -> Result<impl warp::Reply, warp::Rejection> {
    let removed = store.delete_names(selection.ids).await?;
    info!("deleted {} names", removed);
    Ok(warp::reply::with_status(
        format!("{} names deleted", removed),
        StatusCode::OK,
    ))
}
