// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Errors raised when validating a [`FleetConfig`][crate::fleet::FleetConfig].

use thiserror::Error;

/// Reason a fleet configuration was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetConfigError {
    /// The configuration contains no ship classes.
    #[error("a fleet needs at least one ship class")]
    Empty,
    /// A ship class has length 0.
    #[error("ship class {0:?} has zero length")]
    ZeroLength(String),
    /// A ship class has count 0.
    #[error("ship class {0:?} has a count of zero")]
    ZeroCount(String),
    /// A ship class cannot fit on a board of the requested size.
    #[error("ship class {kind:?} of length {length} does not fit on a {size}x{size} board")]
    TooLong {
        /// Name of the offending class.
        kind: String,
        /// Its length.
        length: usize,
        /// Side length of the board.
        size: usize,
    },
}
