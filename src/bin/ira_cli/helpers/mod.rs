// ABOUTME: Re-exports helper modules for ira-cli
// ABOUTME: Provides text and JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

pub mod display;
