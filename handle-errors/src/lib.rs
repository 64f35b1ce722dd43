use argon2::Error as ArgonError;
use tracing::{event, instrument, Level};
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
    Rejection, Reply,
};

#[derive(Debug)]
pub enum Error {
    ItemNotFound,
    UnknownTable(String),
    DatabaseQueryError(sqlx::Error),
    MigrationError(sqlx::migrate::MigrateError),
    JsonParseError(serde_json::Error),
    CsvParseError(csv::Error),
    InvalidRow { row: usize, message: String },
    UnsupportedImportFormat(String),
    MissingFilePart,
    FilePartError(warp::Error),
    ArgonLibraryError(ArgonError),
    WrongPassword,
    CannotDecryptToken,
    Unauthorized,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ItemNotFound => write!(f, "Item not found"),
            Error::UnknownTable(ref table) => write!(f, "Unknown table: {}", table),
            Error::DatabaseQueryError(ref e) => {
                write!(f, "Query could not be executed: {}", e)
            }
            Error::MigrationError(ref e) => {
                write!(f, "Cannot run migrations: {}", e)
            }
            Error::JsonParseError(ref e) => write!(f, "Cannot parse JSON: {}", e),
            Error::CsvParseError(ref e) => write!(f, "Cannot parse CSV: {}", e),
            Error::InvalidRow { row, ref message } => {
                write!(f, "Invalid record at row {}: {}", row, message)
            }
            Error::UnsupportedImportFormat(ref name) => {
                write!(f, "Unsupported import file {}: expected .csv or .json", name)
            }
            Error::MissingFilePart => write!(f, "Upload is missing a file part"),
            Error::FilePartError(ref e) => write!(f, "Cannot read uploaded file: {}", e),
            Error::ArgonLibraryError(_) => write!(f, "Cannot verify password"),
            Error::WrongPassword => write!(f, "Wrong password"),
            Error::CannotDecryptToken => write!(f, "Cannot decrypt session token"),
            Error::Unauthorized => write!(f, "Not authorized"),
        }
    }
}

impl Reject for Error {}

const DUPLICATE_KEY: u32 = 23505;

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(Error::DatabaseQueryError(e)) = r.find() {
        event!(Level::ERROR, "Database query error: {}", e);

        match e {
            sqlx::Error::Database(err) => {
                if err.code().and_then(|c| c.parse::<u32>().ok()) == Some(DUPLICATE_KEY) {
                    Ok(warp::reply::with_status(
                        "Record already exists".to_string(),
                        StatusCode::UNPROCESSABLE_ENTITY,
                    ))
                } else {
                    Ok(warp::reply::with_status(
                        "Cannot update data".to_string(),
                        StatusCode::UNPROCESSABLE_ENTITY,
                    ))
                }
            }
            _ => Ok(warp::reply::with_status(
                "Cannot update data".to_string(),
                StatusCode::UNPROCESSABLE_ENTITY,
            )),
        }
    } else if let Some(error) = r.find::<Error>() {
        event!(Level::ERROR, "{}", error);
        let status = match error {
            Error::ItemNotFound | Error::UnknownTable(_) => StatusCode::NOT_FOUND,
            Error::WrongPassword | Error::CannotDecryptToken | Error::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Ok(warp::reply::with_status(error.to_string(), status))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "{}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::FORBIDDEN,
        ))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::ERROR, "{}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else {
        Ok(warp::reply::with_status(
            "Route not found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    }
}
