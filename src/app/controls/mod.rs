// SPDX-License-Identifier: GPL-3.0-only

//! Capture controls

mod capture_button;
