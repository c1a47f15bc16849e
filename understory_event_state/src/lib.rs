// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: small pointer gesture state machines.
//!
//! These helpers sit between raw pointer events and higher-level interaction
//! code. They do not perform hit testing or routing; hosts feed positions in
//! and get back the notifications they should dispatch.
//!
//! - [`drag`]: recognizes a drag once the pointer has moved past a start
//!   threshold, with a cancelable start notification.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` floating-point support for `kurbo`.
//! - `tracing`: emit `tracing` events at gesture transitions.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
