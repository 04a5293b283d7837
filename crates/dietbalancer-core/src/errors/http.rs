// ABOUTME: Axum IntoResponse integration for AppError
// ABOUTME: Maps error codes to HTTP status codes with a JSON ErrorResponse body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::{AppError, ErrorResponse};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = ?self.code, error = %self, "Request failed");
        } else {
            tracing::debug!(code = ?self.code, error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
