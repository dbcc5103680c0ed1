//! cordic_trig - Fixed-point CORDIC trigonometry kernels
//!
//! Planar vector angle and magnitude (the atan2 + hypot pair) and
//! sine/cosine, solved with the COordinate Rotation DIgital Computer
//! (CORDIC) shift-and-add algorithm in pure integer arithmetic. Intended
//! for processors without fast floating point or native transcendental
//! instructions, where an iterative micro-rotation is cheaper than a
//! library call.
//!
//! # Design Principles
//!
//! - **Pure no_std**: no allocation and no I/O; everything runs on the stack
//! - **Stateless**: every solver is a pure function returning a value struct,
//!   safe to call concurrently from threads or interrupt handlers
//! - **Deterministic**: iteration counts are fixed or caller-bounded, so each
//!   call has a bounded execution time suitable for real-time loops
//!
//! There is no error channel. Inputs outside the documented ranges degrade
//! numerically instead of faulting; the bounds are preconditions on the
//! caller, stated on each solver.
//!
//! # Modules
//!
//! - [`polar`]: vectoring-mode solvers (angle + radius of an integer vector)
//! - [`sincos`]: rotation-mode solver (sine/cosine pairs)

#![no_std]

pub mod polar;
pub mod sincos;
