// ABOUTME: Integration tests for the shared error type
// ABOUTME: Covers constructors, display text, client classification, and conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;
use std::io;

use ira_health::errors::{AppError, ErrorCode, ErrorResponse};
use serde_json::json;

#[test]
fn test_constructor_codes() {
    assert_eq!(AppError::invalid_input("x").code, ErrorCode::InvalidInput);
    assert_eq!(AppError::missing_field("city").code, ErrorCode::MissingRequiredField);
    assert_eq!(AppError::value_out_of_range("x").code, ErrorCode::ValueOutOfRange);
    assert_eq!(AppError::conflict("x").code, ErrorCode::ResourceConflict);
    assert_eq!(AppError::config("x").code, ErrorCode::ConfigInvalid);
    assert_eq!(AppError::storage("x").code, ErrorCode::StorageError);
    assert_eq!(AppError::internal("x").code, ErrorCode::InternalError);
}

#[test]
fn test_messages() {
    assert_eq!(
        AppError::not_found("History file").to_string(),
        "The requested resource was not found: History file not found"
    );
    assert_eq!(AppError::missing_field("city").message, "Missing required field: city");
}

#[test]
fn test_client_errors() {
    assert!(ErrorCode::InvalidInput.is_client_error());
    assert!(ErrorCode::ResourceConflict.is_client_error());
    assert!(!ErrorCode::StorageError.is_client_error());
    assert!(!ErrorCode::ConfigInvalid.is_client_error());
}

#[test]
fn test_conversions_keep_source() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let error = AppError::from(io_error);
    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.source().is_some());

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(AppError::from(json_error).code, ErrorCode::InvalidFormat);
}

#[test]
fn test_error_response_omits_null_details() {
    let body = serde_json::to_value(ErrorResponse::from(AppError::invalid_input("bad height")))
        .unwrap();
    assert_eq!(body["message"], "bad height");
    assert!(body.get("details").is_none());

    let detailed = ErrorResponse::from(
        AppError::invalid_input("bad height").with_details(json!({"field": "height_cm"})),
    );
    assert_eq!(serde_json::to_value(detailed).unwrap()["details"]["field"], "height_cm");
}
