// ABOUTME: Re-exports helper modules for the doughcalc CLI
// ABOUTME: Provides table and structured output rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
