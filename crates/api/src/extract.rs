//! Request extractors that report failures through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections rendered as the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
