// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: result shapes, enumerations, and validation helpers shared by the utilities.

pub mod currency;
pub mod validation;
