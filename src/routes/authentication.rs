use std::future;

use chrono::Utc;
use tracing::info;
use warp::Filter;

use crate::types::account::{AdminAuth, Login, Session};

/*
Login flow:
1. The request body carries the shared admin password.
2. It is verified against the argon2 hash from config.
3. On a match, a paseto token sealed with the config key is returned;
   the token carries exp/nbf claims and is good for one day.
4. Otherwise WrongPassword is returned.
*/

pub async fn login(admin: AdminAuth, login: Login) -> Result<impl warp::Reply, warp::Rejection> {
    match verify_password(&admin.password_hash, login.password.as_bytes()) {
        Ok(verified) => {
            if verified {
                let token = issue_token(&admin.token_key);
                info!("admin session issued");
                Ok(warp::reply::json(&token))
            } else {
                Err(warp::reject::custom(handle_errors::Error::WrongPassword))
            }
        }
        Err(e) => Err(warp::reject::custom(
            handle_errors::Error::ArgonLibraryError(e),
        )),
    }
}

fn verify_password(hash: &str, password: &[u8]) -> Result<bool, argon2::Error> {
    argon2::verify_encoded(hash, password)
}

pub fn issue_token(token_key: &str) -> String {
    let current_date_time = Utc::now();
    let dt = current_date_time + chrono::Duration::days(1);

    paseto::tokens::PasetoBuilder::new()
        .set_encryption_key(&Vec::from(token_key.as_bytes()))
        .set_expiration(&dt)
        .set_not_before(&Utc::now())
        .build()
        .expect("failed to construct session token")
}

pub fn verify_token(token_key: &str, token: String) -> Result<Session, handle_errors::Error> {
    let claims = paseto::tokens::validate_local_token(
        &token,
        None,
        token_key.as_bytes(),
        &paseto::tokens::TimeBackend::Chrono,
    )
    .map_err(|_| handle_errors::Error::CannotDecryptToken)?;

    serde_json::from_value::<Session>(claims)
        .map_err(|_| handle_errors::Error::CannotDecryptToken)
}

pub fn auth(
    token_key: String,
) -> impl Filter<Extract = (Session,), Error = warp::Rejection> + Clone {
    warp::header::<String>("Authorization").and_then(move |token: String| {
        let session = verify_token(&token_key, token);

        future::ready(match session {
            Ok(session) => Ok(session),
            Err(_) => Err(warp::reject::custom(handle_errors::Error::Unauthorized)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "THIRTY TWO BYTE TEST TOKEN KEY!!";

    #[test]
    fn issued_tokens_round_trip() {
        let token = issue_token(KEY);
        let session = verify_token(KEY, token).unwrap();
        assert!(session.exp > Utc::now());
        assert!(session.nbf <= Utc::now());
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let mut token = issue_token(KEY);
        token.push('x');
        assert!(verify_token(KEY, token).is_err());
    }

    #[test]
    fn tokens_do_not_verify_under_another_key() {
        let token = issue_token(KEY);
        assert!(verify_token("ANOTHER THIRTY TWO BYTE KEY HERE", token).is_err());
    }

    #[test]
    fn password_verification_matches_encoded_hash() {
        let hash = argon2::hash_encoded(
            b"admin123",
            b"somesaltsomesaltsomesaltsomesalt",
            &argon2::Config::default(),
        )
        .unwrap();
        assert!(verify_password(&hash, b"admin123").unwrap());
        assert!(!verify_password(&hash, b"letmein").unwrap());
    }
}
