// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for caffscore-cli
// ABOUTME: Output formatting shared by every command

pub mod display;
