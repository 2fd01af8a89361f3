// SPDX-License-Identifier: GPL-3.0-only

//! Platform capability backends

pub mod camera;
