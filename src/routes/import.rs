use bytes::BufMut;
use futures::TryStreamExt;
use tracing::info;
use warp::http::StatusCode;
use warp::multipart::{FormData, Part};

use crate::import::{self, ImportBatch, ImportFormat, Table};
use crate::store::Store;
use crate::types::account::Session;

/// Bulk import handler: one multipart `file` part, dispatched on its
/// filename suffix, parsed and validated as a whole, then inserted as one
/// batch. Any error before the insert leaves the collection untouched.
pub async fn bulk_import(
    table: String,
    _session: Session,
    store: Store,
    form: FormData,
) -> Result<impl warp::Reply, warp::Rejection> {
    let table = table.parse::<Table>().map_err(warp::reject::custom)?;
    let (file_name, data) = read_file_part(form).await?;
    let format = ImportFormat::from_file_name(&file_name).map_err(warp::reject::custom)?;
    let batch = import::parse_batch(table, format, &data).map_err(warp::reject::custom)?;

    let inserted = match batch {
        ImportBatch::Words(rows) => store.add_words(rows).await?,
        ImportBatch::Verbs(rows) => store.add_verbs(rows).await?,
        ImportBatch::Names(rows) => store.add_names(rows).await?,
    };
    info!("imported {} rows into {}", inserted, table.name());
    Ok(warp::reply::with_status(
        format!("{} rows imported", inserted),
        StatusCode::OK,
    ))
}

async fn read_file_part(form: FormData) -> Result<(String, Vec<u8>), warp::Rejection> {
    let parts: Vec<Part> = form
        .try_collect()
        .await
        .map_err(|e| warp::reject::custom(handle_errors::Error::FilePartError(e)))?;

    for part in parts {
        if part.name() != "file" {
            continue;
        }
        // The filename has to be taken before the part is consumed.
        let file_name = match part.filename() {
            Some(name) => name.to_string(),
            None => return Err(warp::reject::custom(handle_errors::Error::MissingFilePart)),
        };
        let data = part
            .stream()
            .try_fold(Vec::new(), |mut buf, chunk| {
                buf.put(chunk);
                async move { Ok(buf) }
            })
            .await
            .map_err(|e| warp::reject::custom(handle_errors::Error::FilePartError(e)))?;
        return Ok((file_name, data));
    }

    Err(warp::reject::custom(handle_errors::Error::MissingFilePart))
}
