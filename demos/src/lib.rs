// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable examples for the Thicket workspace. See the `examples` directory.
