// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod ascii;
pub mod checks;
pub mod cipher;
pub mod compression;
pub mod escape;
pub mod factory;
pub mod language;
pub mod locale;
pub mod morse;
pub mod sentiment;
pub mod unicode;

pub use ascii::*;
pub use checks::*;
pub use cipher::*;
pub use compression::*;
pub use escape::*;
pub use factory::OperationFactory;
pub use language::*;
pub use locale::*;
pub use morse::*;
pub use sentiment::*;
pub use unicode::*;
