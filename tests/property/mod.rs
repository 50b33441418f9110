// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties that must hold for every record the schemas can represent and
//! every envelope the decoder can be handed.
