// ABOUTME: Re-exports command modules for goutkit-cli
// ABOUTME: Provides plan generation, catalog validation and option listing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GoutKit Contributors

pub mod catalog;
pub mod generate;
pub mod options;
