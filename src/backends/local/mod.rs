// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod transforms;

pub use factory::LocalTransformFactory;
pub use transforms::*;
