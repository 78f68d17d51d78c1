use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::db::user_queries;
use crate::middleware::auth::issue_token;
use crate::models::auth::LoginResponse;
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool, jwt_settings),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let username = user_form.username.trim();
    let email = user_form.email.trim();
    if username.is_empty() || email.is_empty() || !email.contains('@') {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Username and a valid email are required"));
    }
    if user_form.password.expose_secret().len() < 8 {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Password must be at least 8 characters"));
    }

    match user_queries::username_or_email_taken(&pool, username, email).await {
        Ok(true) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Username or email already taken"));
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Failed to check existing users: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"));
        }
    }

    let password_hash = hash_password(user_form.password.expose_secret());
    let user = match user_queries::insert_user(
        &pool,
        username,
        email,
        &password_hash,
        user_form.skill,
    )
    .await
    {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to insert user: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create user"));
        }
    };

    // Registration doubles as login: hand back a token right away.
    let token = match issue_token(&user, &jwt_settings) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to generate token"));
        }
    };

    HttpResponse::Created().json(ApiResponse::success(
        "User registered",
        LoginResponse {
            token,
            user: user.into(),
        },
    ))
}
