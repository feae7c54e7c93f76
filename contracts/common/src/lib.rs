//! Shared helpers for the reward-pool contracts.
//!
//! This crate provides:
//! - [`fixed_point`]: checked `i128` fixed-point math for per-share
//!   accumulators and basis-point fees.
//! - [`access`]: primary-admin and operator registry.
//! - [`reentrancy`]: the lock taken by entry points that move assets.

#![cfg_attr(not(feature = "std"), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod access;
pub mod fixed_point;
pub mod reentrancy;

pub use fixed_point::{ACC_PRECISION, BPS_DENOMINATOR};
