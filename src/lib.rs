// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit/pan camera controller for real-time 3D viewers.
//!
//! Pancam turns per-frame pointer, scroll, and keyboard input into a stable
//! camera pose (focus point, distance, yaw, pitch, optics) and derives the
//! view/projection matrix set the renderer reads each frame. The pose also
//! round-trips through a portable [`camera::CameraProperties`] record for
//! persistence and interpolation.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - the orbit/pan camera controller
//! - [`camera::CameraRig`] - the contract every camera variant implements
//! - [`input::InputCollector`] - per-frame input snapshot fed to the camera
//! - [`options::Options`] - runtime configuration (sensitivities, bindings)
//!
//! # Architecture
//!
//! The windowing backend, UI overlay, and rendering pipeline are injected
//! collaborators, not owned: the camera reads input through the
//! [`input::InputSource`] trait and draws its settings panel through the
//! [`ui::OptionsUi`] trait. A host event loop accumulates platform events
//! into an [`input::InputCollector`], calls
//! [`update`](camera::OrbitCamera::update) once per frame, then reads the
//! derived matrices. Conversions from `winit` events live behind the
//! `viewer` feature.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod ui;
pub mod util;
